//! # isms-aggregate — Compliance Aggregation & Classification
//!
//! The single place display-ready compliance figures are derived from a
//! [`ScanResult`](isms_core::ScanResult). Every percentage comes from the
//! raw `isms_mapping` control items — never from the server-computed
//! summary block, which is a cache that `isms_core::validate` checks but
//! nothing here trusts.
//!
//! ## Never Block the Dashboard
//!
//! Every function in this crate is total and panic-free. Absent documents,
//! absent sections, and empty item lists all degrade to zero rather than
//! erroring; the one real fallback decision — substitute the canned sample
//! document when the remote one is missing or empty — lives in
//! [`resolve_or_fallback`] and is all-or-nothing, never a merge.
//!
//! ## Status Bands
//!
//! [`classify`] partitions percentages into three bands with the uniform
//! threshold pair ≥80 / ≥50. The band carries its Korean label and color
//! hint so renderers never re-implement the thresholds.

pub mod aggregate;
pub mod band;

pub use aggregate::{
    aggregate_counts, overall_percentage, percentage_for, resolve_or_fallback,
    round_percentage, section_percentage_from_items, ItemCounts,
};
pub use band::{classify, ComplianceBand};
