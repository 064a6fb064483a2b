//! # Canned Sample Dataset
//!
//! A complete, internally consistent `ScanResult` used as the fallback
//! when the scan service is unreachable or returns an empty document.
//! The figures and evidence mirror one real scan of the reference
//! account: 11 control items across five sections, 5 compliant, 45.45%
//! overall.
//!
//! This is a deliberate "degrade to sample data" policy: the dashboard
//! always has renderable figures, at the cost of masking a backend
//! outage. Consumers that need to distinguish live data from the sample
//! should compare against [`sample_scan_result`].

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use crate::control::{ControlId, SectionCode};
use crate::model::{ComplianceSummary, ControlItem, ScanResult, SectionData, SectionSummary};

fn obj(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn code(raw: &str) -> SectionCode {
    // Callers only pass literal "N.N" codes.
    SectionCode::new(raw).expect("literal section code")
}

fn item(id: &str, name: &str, compliant: bool, details: Value) -> ControlItem {
    ControlItem {
        id: ControlId::new(id).expect("literal control id"),
        name: name.to_string(),
        compliant,
        details: obj(details),
    }
}

fn summary(total: u32, compliant: u32, percentage: f64) -> SectionSummary {
    SectionSummary {
        total,
        compliant,
        percentage,
    }
}

/// The canned fallback document. 11 items, 5 compliant, 45.45% overall.
pub fn sample_scan_result() -> ScanResult {
    let mut section_summary = BTreeMap::new();
    section_summary.insert(code("2.5"), summary(3, 1, 33.33));
    section_summary.insert(code("2.6"), summary(1, 1, 100.0));
    section_summary.insert(code("2.7"), summary(2, 2, 100.0));
    section_summary.insert(code("2.9"), summary(2, 1, 50.0));
    section_summary.insert(code("2.10"), summary(3, 0, 0.0));

    let mut isms_mapping = BTreeMap::new();
    isms_mapping.insert(
        code("2.5"),
        SectionData {
            items: vec![
                item(
                    "2.5.1",
                    "사용자 인증",
                    false,
                    json!({
                        "mfa_percentage": 0,
                        "users_without_mfa": ["kjhyuok"]
                    }),
                ),
                item(
                    "2.5.2",
                    "사용자 계정 관리",
                    true,
                    json!({ "old_access_keys": [] }),
                ),
                item(
                    "2.5.3",
                    "비밀번호 관리",
                    false,
                    json!({ "password_policy": null }),
                ),
            ],
        },
    );
    isms_mapping.insert(
        code("2.6"),
        SectionData {
            items: vec![item(
                "2.6.1",
                "네트워크 접근통제",
                true,
                json!({ "risky_security_groups": [] }),
            )],
        },
    );
    isms_mapping.insert(
        code("2.7"),
        SectionData {
            items: vec![
                item(
                    "2.7.1",
                    "저장 데이터 암호화",
                    true,
                    json!({
                        "s3_encryption": [
                            {
                                "bucket_name": "aws-athena-query-results-195275662470-us-east-1",
                                "encryption_enabled": true,
                                "encryption_type": "AES256"
                            }
                        ],
                        "rds_encryption": []
                    }),
                ),
                item(
                    "2.7.2",
                    "암호키 관리",
                    true,
                    json!({
                        "kms_keys": [
                            {
                                "key_id": "40edce25-f3b3-4c20-a54f-c49889b19dc0",
                                "key_state": "Enabled",
                                "key_rotation_enabled": true
                            }
                        ]
                    }),
                ),
            ],
        },
    );
    isms_mapping.insert(
        code("2.9"),
        SectionData {
            items: vec![
                item(
                    "2.9.1",
                    "로그 관리",
                    true,
                    json!({
                        "cloudtrail": [
                            {
                                "trail_name": "AP_DB_AUTH_TRAIL",
                                "is_multi_region": true,
                                "is_logging": true,
                                "log_file_validation_enabled": true
                            }
                        ]
                    }),
                ),
                item(
                    "2.9.2",
                    "보안 모니터링",
                    false,
                    json!({ "security_alarms": [] }),
                ),
            ],
        },
    );
    isms_mapping.insert(
        code("2.10"),
        SectionData {
            items: vec![
                item(
                    "2.10.1",
                    "보안 시스템 운영",
                    false,
                    json!({ "waf_acls": [] }),
                ),
                item("2.10.2", "DDoS 대응", false, json!({ "shield_active": false })),
                item(
                    "2.10.3",
                    "취약점 관리",
                    false,
                    json!({ "inspector_active": false }),
                ),
            ],
        },
    );

    ScanResult {
        compliance_summary: ComplianceSummary {
            total_items: 11,
            compliant_items: 5,
            overall_percentage: 45.45,
            section_summary,
        },
        isms_mapping,
    }
}
