//! # Summary Cross-Checks
//!
//! The scan service ships a precomputed `compliance_summary` alongside the
//! raw `isms_mapping` items. Historically consumers read whichever block
//! was convenient, which let the two drift apart unnoticed. Here the raw
//! items are canonical and the summary is a cache: [`check_summary`]
//! reports every place the cache disagrees with the items.
//!
//! Mismatches are diagnostics, never errors — a drifted summary must not
//! take the dashboard down. Callers log them and carry on.

use std::fmt;

use crate::control::SectionCode;
use crate::model::ScanResult;

/// One disagreement between the server-computed summary and the raw items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryMismatch {
    /// `section_summary[section].total` differs from the item count.
    SectionTotal {
        /// The section whose counts disagree.
        section: SectionCode,
        /// Value claimed by the summary block.
        summary: u32,
        /// Value counted from the raw items.
        from_items: u32,
    },
    /// `section_summary[section].compliant` differs from the count of
    /// passing items.
    SectionCompliant {
        /// The section whose counts disagree.
        section: SectionCode,
        /// Value claimed by the summary block.
        summary: u32,
        /// Value counted from the raw items.
        from_items: u32,
    },
    /// `total_items` is not the sum of the per-section totals.
    GrandTotal {
        /// Value claimed by the summary block.
        summary: u32,
        /// Sum over `section_summary[*].total`.
        from_sections: u32,
    },
    /// `compliant_items` is not the sum of the per-section compliant counts.
    GrandCompliant {
        /// Value claimed by the summary block.
        summary: u32,
        /// Sum over `section_summary[*].compliant`.
        from_sections: u32,
    },
    /// A control item's id does not begin with its owning section code.
    ItemOutsideSection {
        /// The section that carries the item.
        section: SectionCode,
        /// The offending item id, as a plain string.
        item: String,
    },
}

impl fmt::Display for SummaryMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SectionTotal {
                section,
                summary,
                from_items,
            } => write!(
                f,
                "section {section}: summary claims {summary} items, mapping has {from_items}"
            ),
            Self::SectionCompliant {
                section,
                summary,
                from_items,
            } => write!(
                f,
                "section {section}: summary claims {summary} compliant, items count {from_items}"
            ),
            Self::GrandTotal {
                summary,
                from_sections,
            } => write!(
                f,
                "total_items is {summary} but section totals sum to {from_sections}"
            ),
            Self::GrandCompliant {
                summary,
                from_sections,
            } => write!(
                f,
                "compliant_items is {summary} but section compliant counts sum to {from_sections}"
            ),
            Self::ItemOutsideSection { section, item } => write!(
                f,
                "item {item} is filed under section {section} but belongs elsewhere"
            ),
        }
    }
}

/// Cross-check the summary cache against the raw control items.
///
/// Checks, in order:
/// 1. For every section present in both maps: summary `total` vs item
///    count, summary `compliant` vs passing-item count.
/// 2. Grand totals vs the sum of per-section summary rows.
/// 3. Every item id belongs to the section it is filed under.
///
/// Sections present in only one of the two maps are NOT mismatches —
/// a zeroed summary row for an unscanned section is a normal document
/// shape, and the aggregation layer already treats it as zero data.
pub fn check_summary(scan: &ScanResult) -> Vec<SummaryMismatch> {
    let mut mismatches = Vec::new();
    let summary = &scan.compliance_summary;

    for (section, row) in &summary.section_summary {
        let Some(data) = scan.isms_mapping.get(section) else {
            continue;
        };
        let total = data.items.len() as u32;
        if row.total != total {
            mismatches.push(SummaryMismatch::SectionTotal {
                section: section.clone(),
                summary: row.total,
                from_items: total,
            });
        }
        let compliant = data.compliant_count();
        if row.compliant != compliant {
            mismatches.push(SummaryMismatch::SectionCompliant {
                section: section.clone(),
                summary: row.compliant,
                from_items: compliant,
            });
        }
    }

    let section_total: u32 = summary.section_summary.values().map(|s| s.total).sum();
    if summary.total_items != section_total {
        mismatches.push(SummaryMismatch::GrandTotal {
            summary: summary.total_items,
            from_sections: section_total,
        });
    }
    let section_compliant: u32 = summary.section_summary.values().map(|s| s.compliant).sum();
    if summary.compliant_items != section_compliant {
        mismatches.push(SummaryMismatch::GrandCompliant {
            summary: summary.compliant_items,
            from_sections: section_compliant,
        });
    }

    for (section, data) in &scan.isms_mapping {
        for item in &data.items {
            if &item.id.section() != section {
                mismatches.push(SummaryMismatch::ItemOutsideSection {
                    section: section.clone(),
                    item: item.id.to_string(),
                });
            }
        }
    }

    mismatches
}
