//! # ISMS Section Catalog
//!
//! Static metadata for the five ISMS control sections the scan covers.
//! Titles and descriptions follow the certification scheme's Korean
//! wording; renderers pair these with live figures from a `ScanResult`.

use crate::control::SectionCode;

/// Metadata for one ISMS control section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionInfo {
    /// Section code, e.g. `"2.5"`.
    pub code: &'static str,
    /// Korean section title from the certification scheme.
    pub title: &'static str,
    /// One-line description of the section's requirements.
    pub description: &'static str,
}

impl SectionInfo {
    /// The code as a typed [`SectionCode`].
    pub fn section_code(&self) -> SectionCode {
        SectionCode::new(self.code).expect("catalog codes are literal N.N strings")
    }
}

/// The scanned ISMS sections, in catalog order.
pub const SECTIONS: [SectionInfo; 5] = [
    SectionInfo {
        code: "2.5",
        title: "인증 및 권한관리",
        description: "사용자 인증, 접근권한 관리, 특수 권한 관리, 사용자 인증 정보 관리에 대한 보안 요구사항",
    },
    SectionInfo {
        code: "2.6",
        title: "접근통제",
        description: "네트워크, 시스템, 응용프로그램, 데이터베이스 등의 접근통제에 관한 보안 요구사항",
    },
    SectionInfo {
        code: "2.7",
        title: "암호화 적용",
        description: "개인정보 및 중요정보 보호를 위한 암호화 적용 및 암호키 관리에 관한 보안 요구사항",
    },
    SectionInfo {
        code: "2.9",
        title: "시스템 및 서비스 운영관리",
        description: "시스템 및 서비스의 안정적 운영을 위한 변경관리, 백업관리, 로그관리, 취약점 관리 등에 관한 보안 요구사항",
    },
    SectionInfo {
        code: "2.10",
        title: "시스템 및 서비스 보안관리",
        description: "시스템 및 서비스의 보안을 위한 보안 요구사항 정의, 시스템 보안 구현, 안전한 개발환경 구축 등에 관한 보안 요구사항",
    },
];

/// Look up catalog metadata for a section code.
pub fn section_info(code: &SectionCode) -> Option<&'static SectionInfo> {
    SECTIONS.iter().find(|s| s.code == code.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_codes_are_valid_section_codes() {
        for info in &SECTIONS {
            let _ = info.section_code();
        }
    }

    #[test]
    fn catalog_covers_the_sample_dataset() {
        let scan = crate::sample::sample_scan_result();
        for code in scan.isms_mapping.keys() {
            assert!(section_info(code).is_some(), "no catalog entry for {code}");
        }
    }

    #[test]
    fn lookup_misses_unsampled_sections() {
        let code = SectionCode::new("2.8").expect("valid code");
        assert!(section_info(&code).is_none());
    }
}
