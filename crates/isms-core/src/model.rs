//! # ScanResult Document Model
//!
//! Serde types for the scan service's result document. The external
//! service produces the whole document atomically per scan; consumers
//! treat it as an immutable snapshot.
//!
//! ## Defensive Defaults
//!
//! Dashboard availability trumps strictness: absent blocks deserialize to
//! empty/zero values rather than failing the whole document. A missing
//! `details` map becomes empty, a missing `compliance_summary` becomes
//! all-zero, a missing `isms_mapping` becomes an empty map (which the
//! fallback resolver then treats as "no data"). Only structurally
//! malformed JSON and invalid identifiers are decode errors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::control::{ControlId, SectionCode};

/// Root document produced by one scan invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Server-computed aggregate counts and percentages. A cache over
    /// `isms_mapping`, not an independent source of truth.
    #[serde(default)]
    pub compliance_summary: ComplianceSummary,
    /// Raw per-section control items — the canonical compliance data.
    #[serde(default)]
    pub isms_mapping: BTreeMap<SectionCode, SectionData>,
}

impl ScanResult {
    /// The section's raw control data, if the scan covered it.
    pub fn section(&self, code: &SectionCode) -> Option<&SectionData> {
        self.isms_mapping.get(code)
    }

    /// The server-computed summary for a section, if present.
    pub fn section_summary(&self, code: &SectionCode) -> Option<&SectionSummary> {
        self.compliance_summary.section_summary.get(code)
    }

    /// Whether the document carries any raw control data at all.
    /// An empty mapping is indistinguishable from "the scan produced
    /// nothing" and triggers the fallback policy downstream.
    pub fn has_mapping(&self) -> bool {
        !self.isms_mapping.is_empty()
    }
}

/// Aggregate counts and percentages computed by the scan service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComplianceSummary {
    /// Total control items across all sections.
    #[serde(default)]
    pub total_items: u32,
    /// Items whose automated check passed.
    #[serde(default)]
    pub compliant_items: u32,
    /// Overall compliance percentage in 0.0–100.0.
    #[serde(default)]
    pub overall_percentage: f64,
    /// Per-section aggregates.
    #[serde(default)]
    pub section_summary: BTreeMap<SectionCode, SectionSummary>,
}

/// Aggregate figures for one ISMS section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionSummary {
    /// Count of control items in the section.
    #[serde(default)]
    pub total: u32,
    /// Count of items whose check passed. Never exceeds `total` in a
    /// well-formed document; cross-checked by `validate::check_summary`.
    #[serde(default)]
    pub compliant: u32,
    /// `compliant / total * 100`, or 0.0 when the section is empty.
    #[serde(default)]
    pub percentage: f64,
}

/// Raw control data for one ISMS section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionData {
    /// Control items in presentation order. Order is not semantically
    /// significant.
    #[serde(default)]
    pub items: Vec<ControlItem>,
}

impl SectionData {
    /// Count of items whose automated check passed.
    pub fn compliant_count(&self) -> u32 {
        self.items.iter().filter(|i| i.compliant).count() as u32
    }
}

/// One checkable ISMS requirement and its automated check outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlItem {
    /// Dotted control identifier, unique within its section.
    pub id: ControlId,
    /// Human-readable control title (Korean in the shipped catalog).
    #[serde(default)]
    pub name: String,
    /// True iff the control's automated check passed.
    #[serde(default)]
    pub compliant: bool,
    /// Check-specific evidence (offending resources, policy snapshots,
    /// counts). Opaque to aggregation; consumed only by per-control
    /// rendering.
    #[serde(default)]
    pub details: Map<String, Value>,
}
