//! # Offline Mock Implementation
//!
//! Serves the canned sample document without touching the network.
//! Used for offline runs of the CLI and by tests that need a service
//! seam without a wiremock server.

use serde_json::Value;

use isms_core::{sample_scan_result, ScanResult};

use crate::error::ScanClientError;
use crate::service::{ScanRequest, ScanService};

/// A [`ScanService`] that answers every call locally with sample data.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockScanService;

impl ScanService for MockScanService {
    async fn trigger_scan(&self, request: &ScanRequest) -> Result<Value, ScanClientError> {
        Ok(serde_json::json!({
            "message": "scan completed",
            "account_id": request.account_id,
            "region": request.region,
        }))
    }

    async fn fetch_results(&self, _account_id: &str) -> Result<ScanResult, ScanClientError> {
        Ok(sample_scan_result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_serves_the_sample_document() {
        let svc = MockScanService;
        let doc = svc.fetch_results("195275662470").await.expect("results");
        assert_eq!(doc, sample_scan_result());
        assert!(doc.has_mapping());
    }

    #[tokio::test]
    async fn mock_trigger_echoes_the_request() {
        let svc = MockScanService;
        let ack = svc
            .trigger_scan(&ScanRequest::default())
            .await
            .expect("trigger");
        assert_eq!(ack["account_id"], "195275662470");
        assert_eq!(ack["region"], "us-east-1");
    }
}
