//! # isms-core — ISMS Scan Document Model
//!
//! Foundational types for the ISMS compliance scan toolkit. An external
//! scan service inspects an AWS account against the Korean ISMS control
//! catalog and emits a single `ScanResult` JSON document per invocation;
//! this crate models that document, validates its identifiers at
//! construction time, and cross-checks the server-computed summary block
//! against the raw control items.
//!
//! ## Document Shape
//!
//! ```text
//! ScanResult
//! ├── compliance_summary          (server-computed cache)
//! │   ├── total_items / compliant_items / overall_percentage
//! │   └── section_summary: SectionCode → SectionSummary
//! └── isms_mapping: SectionCode → SectionData
//!     └── items: [ControlItem { id, name, compliant, details }]
//! ```
//!
//! The raw `isms_mapping` items are the canonical source of truth.
//! `compliance_summary` is treated as a cache: [`validate::check_summary`]
//! reports where the two disagree, and downstream aggregation always
//! derives counts from the items.
//!
//! ## Lifecycle
//!
//! Each scan produces a complete replacement document. Consumers treat a
//! `ScanResult` as an immutable snapshot — there is no incremental update
//! and no merging of partial documents.

pub mod catalog;
pub mod control;
pub mod error;
pub mod model;
pub mod sample;
pub mod validate;

pub use catalog::{section_info, SectionInfo, SECTIONS};
pub use control::{ControlId, SectionCode};
pub use error::ValidationError;
pub use model::{ComplianceSummary, ControlItem, ScanResult, SectionData, SectionSummary};
pub use sample::sample_scan_result;
pub use validate::{check_summary, SummaryMismatch};
