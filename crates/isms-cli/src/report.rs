//! # Terminal Report Rendering
//!
//! Turns a resolved `ScanResult` into the text report the `isms` binary
//! prints: overall posture, a per-section table, and per-item check
//! outcomes. All figures come from `isms-aggregate`; this module never
//! recomputes a percentage or a threshold.

use std::fmt::Write as _;

use isms_aggregate::{aggregate_counts, classify, overall_percentage, percentage_for};
use isms_core::{section_info, ScanResult, SectionCode, SECTIONS};

/// Render the full compliance report for a resolved document.
pub fn render_report(scan: &ScanResult) -> String {
    let mut out = String::new();

    let overall = overall_percentage(Some(scan));
    let band = classify(overall);
    let counts = aggregate_counts(Some(scan));

    let _ = writeln!(out, "ISMS 컴플라이언스 현황");
    let _ = writeln!(
        out,
        "전체 준수율 {overall}% — {} ({band})",
        band.label_ko()
    );
    let _ = writeln!(
        out,
        "준수 {} / 미준수 {} / 전체 {}",
        counts.compliant, counts.non_compliant, counts.total
    );
    let _ = writeln!(out);

    for code in ordered_sections(scan) {
        render_section(&mut out, scan, &code);
    }

    out
}

/// Catalog sections first (in catalog order), then any scanned sections
/// the catalog does not know about.
fn ordered_sections(scan: &ScanResult) -> Vec<SectionCode> {
    let mut ordered: Vec<SectionCode> = SECTIONS.iter().map(|s| s.section_code()).collect();
    for code in scan.isms_mapping.keys() {
        if !ordered.contains(code) {
            ordered.push(code.clone());
        }
    }
    ordered
}

fn render_section(out: &mut String, scan: &ScanResult, code: &SectionCode) {
    let pct = percentage_for(code, Some(scan));
    let band = classify(pct);
    let title = section_info(code).map(|s| s.title).unwrap_or("(미등록 섹션)");

    let (compliant, total) = match scan.section(code) {
        Some(data) => (data.compliant_count(), data.items.len() as u32),
        None => (0, 0),
    };

    let _ = writeln!(
        out,
        "[{code}] {title}  {compliant}/{total}  {pct}%  {}",
        band.label_ko()
    );
    if let Some(data) = scan.section(code) {
        for item in &data.items {
            let mark = if item.compliant { "✓" } else { "✗" };
            let _ = writeln!(out, "  {mark} {} {}", item.id, item.name);
        }
    }
    let _ = writeln!(out);
}

/// Render the static section catalog.
pub fn render_catalog() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ISMS 통제 섹션");
    for section in &SECTIONS {
        let _ = writeln!(out, "[{}] {}", section.code, section.title);
        let _ = writeln!(out, "    {}", section.description);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use isms_core::sample_scan_result;

    #[test]
    fn report_carries_overall_figures() {
        let report = render_report(&sample_scan_result());
        assert!(report.contains("전체 준수율 45% — 위험 (non-compliant)"));
        assert!(report.contains("준수 5 / 미준수 6 / 전체 11"));
    }

    #[test]
    fn report_lists_every_section_with_band() {
        let report = render_report(&sample_scan_result());
        assert!(report.contains("[2.5] 인증 및 권한관리  1/3  33%  위험"));
        assert!(report.contains("[2.6] 접근통제  1/1  100%  양호"));
        assert!(report.contains("[2.9] 시스템 및 서비스 운영관리  1/2  50%  주의"));
        assert!(report.contains("[2.10] 시스템 및 서비스 보안관리  0/3  0%  위험"));
    }

    #[test]
    fn report_marks_item_outcomes() {
        let report = render_report(&sample_scan_result());
        assert!(report.contains("✗ 2.5.1 사용자 인증"));
        assert!(report.contains("✓ 2.5.2 사용자 계정 관리"));
        assert!(report.contains("✗ 2.10.2 DDoS 대응"));
    }

    #[test]
    fn unscanned_catalog_section_renders_as_zero() {
        let mut scan = sample_scan_result();
        scan.isms_mapping
            .remove(&SectionCode::new("2.7").expect("valid code"));
        let report = render_report(&scan);
        assert!(report.contains("[2.7] 암호화 적용  0/0  0%  위험"));
    }

    #[test]
    fn catalog_lists_all_five_sections() {
        let catalog = render_catalog();
        for section in &SECTIONS {
            assert!(catalog.contains(section.code));
            assert!(catalog.contains(section.title));
        }
    }
}
