//! # Percentage & Count Aggregation
//!
//! Derives rounded, display-ready compliance figures from the raw
//! `isms_mapping` control items, with deterministic zero fallbacks for
//! absent data and the all-or-nothing sample-data resolver.

use serde::{Deserialize, Serialize};

use isms_core::{ScanResult, SectionCode, SectionData};

/// Round a raw percentage half-up to the nearest integer, clamped to
/// 0..=100. NaN and negative inputs collapse to 0.
pub fn round_percentage(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    (raw.clamp(0.0, 100.0) + 0.5).floor() as u8
}

/// Rounded compliance percentage for one section's raw items.
///
/// Empty sections are 0 by convention, not an error.
pub fn section_percentage_from_items(data: &SectionData) -> u8 {
    let total = data.items.len();
    if total == 0 {
        return 0;
    }
    round_percentage(f64::from(data.compliant_count()) / total as f64 * 100.0)
}

/// Rounded compliance percentage for one section of a scan document.
///
/// Zero data — a missing document, or a section absent from either
/// `isms_mapping` or `section_summary` — yields 0; callers holding only
/// a partial document degrade to the sample via [`resolve_or_fallback`]
/// before rendering. When the section is present the figure is computed
/// from the raw items; the summary row's own percentage field is ignored.
pub fn percentage_for(section: &SectionCode, scan: Option<&ScanResult>) -> u8 {
    let Some(scan) = scan else { return 0 };
    if scan.section_summary(section).is_none() {
        return 0;
    }
    match scan.section(section) {
        Some(data) => section_percentage_from_items(data),
        None => 0,
    }
}

/// Rounded overall compliance percentage across every section's items.
///
/// 0 for a missing document or one with no items anywhere.
pub fn overall_percentage(scan: Option<&ScanResult>) -> u8 {
    let counts = aggregate_counts(scan);
    if counts.total == 0 {
        return 0;
    }
    round_percentage(f64::from(counts.compliant) / f64::from(counts.total) * 100.0)
}

/// Compliant / non-compliant / total item counts summed from the raw
/// `isms_mapping` items across all sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemCounts {
    /// Items whose automated check passed.
    pub compliant: u32,
    /// Items whose automated check failed.
    pub non_compliant: u32,
    /// All items, `compliant + non_compliant`.
    pub total: u32,
}

/// Sum item outcomes across all sections, directly from the raw items.
pub fn aggregate_counts(scan: Option<&ScanResult>) -> ItemCounts {
    let Some(scan) = scan else {
        return ItemCounts::default();
    };
    let mut counts = ItemCounts::default();
    for data in scan.isms_mapping.values() {
        for item in &data.items {
            counts.total += 1;
            if item.compliant {
                counts.compliant += 1;
            } else {
                counts.non_compliant += 1;
            }
        }
    }
    counts
}

/// All-or-nothing substitution of the fallback document.
///
/// The remote document is kept iff it exists and carries a non-empty
/// `isms_mapping`; otherwise the fallback replaces it wholesale. Partial
/// remote data is never merged with the fallback.
pub fn resolve_or_fallback(remote: Option<ScanResult>, fallback: ScanResult) -> ScanResult {
    match remote {
        Some(doc) if doc.has_mapping() => doc,
        Some(_) => {
            tracing::warn!("scan document has no isms_mapping; degrading to sample data");
            fallback
        }
        None => {
            tracing::warn!("no scan document available; degrading to sample data");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isms_core::{sample_scan_result, ComplianceSummary, SectionSummary};
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn code(raw: &str) -> SectionCode {
        SectionCode::new(raw).expect("valid section code")
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_percentage(33.33), 33);
        assert_eq!(round_percentage(45.45), 45);
        assert_eq!(round_percentage(49.5), 50);
        assert_eq!(round_percentage(0.5), 1);
        assert_eq!(round_percentage(0.49), 0);
        assert_eq!(round_percentage(100.0), 100);
    }

    #[test]
    fn rounding_tolerates_junk() {
        assert_eq!(round_percentage(f64::NAN), 0);
        assert_eq!(round_percentage(-3.0), 0);
        assert_eq!(round_percentage(250.0), 100);
        assert_eq!(round_percentage(f64::INFINITY), 100);
    }

    #[test]
    fn sample_section_percentage_scenario() {
        // Section 2.5: one of three items compliant → 33, at risk.
        let scan = sample_scan_result();
        let pct = percentage_for(&code("2.5"), Some(&scan));
        assert_eq!(pct, 33);
        assert_eq!(crate::band::classify(pct), crate::band::ComplianceBand::NonCompliant);
    }

    #[test]
    fn section_missing_from_mapping_is_zero() {
        let mut scan = sample_scan_result();
        scan.isms_mapping.remove(&code("2.10"));
        // Still has a zeroed row in section_summary.
        assert!(scan.section_summary(&code("2.10")).is_some());
        let pct = percentage_for(&code("2.10"), Some(&scan));
        assert_eq!(pct, 0);
        assert_eq!(crate::band::classify(pct), crate::band::ComplianceBand::NonCompliant);
    }

    #[test]
    fn section_missing_from_summary_is_zero() {
        let mut scan = sample_scan_result();
        scan.compliance_summary.section_summary.remove(&code("2.7"));
        assert_eq!(percentage_for(&code("2.7"), Some(&scan)), 0);
    }

    #[test]
    fn missing_document_is_zero_everywhere() {
        assert_eq!(percentage_for(&code("2.5"), None), 0);
        assert_eq!(overall_percentage(None), 0);
        assert_eq!(aggregate_counts(None), ItemCounts::default());
    }

    #[test]
    fn all_sections_empty_is_zero_everywhere() {
        let mut scan = sample_scan_result();
        for data in scan.isms_mapping.values_mut() {
            data.items.clear();
        }
        assert_eq!(overall_percentage(Some(&scan)), 0);
        for section in scan.isms_mapping.keys() {
            assert_eq!(section_percentage_from_items(&scan.isms_mapping[section]), 0);
        }
    }

    #[test]
    fn sample_counts() {
        let counts = aggregate_counts(Some(&sample_scan_result()));
        assert_eq!(
            counts,
            ItemCounts {
                compliant: 5,
                non_compliant: 6,
                total: 11
            }
        );
    }

    #[test]
    fn overall_percentage_comes_from_items() {
        let mut scan = sample_scan_result();
        // Poison the cache; the items still say 5 of 11.
        scan.compliance_summary.overall_percentage = 99.0;
        assert_eq!(overall_percentage(Some(&scan)), 45);
    }

    #[test]
    fn fallback_replaces_missing_document() {
        let mock = sample_scan_result();
        let resolved = resolve_or_fallback(None, mock.clone());
        assert_eq!(resolved, mock);
    }

    #[test]
    fn fallback_replaces_empty_mapping() {
        let mock = sample_scan_result();
        let hollow = ScanResult {
            compliance_summary: ComplianceSummary {
                total_items: 7,
                ..Default::default()
            },
            isms_mapping: BTreeMap::new(),
        };
        let resolved = resolve_or_fallback(Some(hollow), mock.clone());
        assert_eq!(resolved, mock);
    }

    #[test]
    fn remote_with_mapping_is_kept_unchanged() {
        let mock = sample_scan_result();
        let mut remote = sample_scan_result();
        remote.compliance_summary.overall_percentage = 72.0;
        let resolved = resolve_or_fallback(Some(remote.clone()), mock);
        assert_eq!(resolved, remote);
    }

    proptest! {
        /// percentage_for always lands in 0..=100 and matches the direct
        /// items computation whenever the section is present in both maps.
        #[test]
        fn percentage_for_is_bounded_and_item_derived(
            total in 0u32..40,
            compliant_seed in 0u32..40,
        ) {
            let compliant = compliant_seed.min(total);
            let section = code("2.5");
            let items = (0..total)
                .map(|i| isms_core::ControlItem {
                    id: isms_core::ControlId::new(format!("2.5.{}", i + 1))
                        .expect("valid control id"),
                    name: format!("control {}", i + 1),
                    compliant: i < compliant,
                    details: Default::default(),
                })
                .collect();

            let mut section_summary = BTreeMap::new();
            section_summary.insert(section.clone(), SectionSummary {
                total,
                compliant,
                percentage: if total > 0 {
                    f64::from(compliant) / f64::from(total) * 100.0
                } else {
                    0.0
                },
            });
            let mut isms_mapping = BTreeMap::new();
            isms_mapping.insert(section.clone(), SectionData { items });

            let scan = ScanResult {
                compliance_summary: ComplianceSummary {
                    total_items: total,
                    compliant_items: compliant,
                    overall_percentage: 0.0,
                    section_summary,
                },
                isms_mapping,
            };

            let pct = percentage_for(&section, Some(&scan));
            prop_assert!(pct <= 100);
            if total > 0 {
                let expected = round_percentage(
                    f64::from(compliant) / f64::from(total) * 100.0,
                );
                prop_assert_eq!(pct, expected);
            } else {
                prop_assert_eq!(pct, 0);
            }
        }
    }
}
