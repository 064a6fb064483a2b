//! # Scan Service Trait Seam
//!
//! [`ScanService`] abstracts the two scan-service endpoints so the
//! session and any other consumer can be wired against the live HTTP
//! implementation or the offline mock by injection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use isms_core::ScanResult;

use crate::error::ScanClientError;

/// Base URL of the deployed scan service API gateway.
pub const DEFAULT_BASE_URL: &str = "https://rr8d8vtai0.execute-api.us-east-1.amazonaws.com/prod";

/// Reference AWS account the dashboard ships configured for.
pub const DEFAULT_ACCOUNT_ID: &str = "195275662470";

/// Region scans default to.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Body of a `POST {base}/scan` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest {
    /// Twelve-digit AWS account id to scan.
    pub account_id: String,
    /// Region the scan runs against.
    pub region: String,
}

impl Default for ScanRequest {
    fn default() -> Self {
        Self {
            account_id: DEFAULT_ACCOUNT_ID.to_string(),
            region: DEFAULT_REGION.to_string(),
        }
    }
}

/// The two operations of the external scan service.
///
/// Implementations perform each operation as a single-shot request:
/// no retry, no backoff, no cancellation.
pub trait ScanService {
    /// Kick off an asynchronous scan of the account.
    ///
    /// The scan runs server-side for on the order of a minute; this call
    /// only acknowledges the trigger. The response body is service-defined
    /// and returned uninterpreted.
    fn trigger_scan(
        &self,
        request: &ScanRequest,
    ) -> impl std::future::Future<Output = Result<Value, ScanClientError>> + Send;

    /// Fetch the latest persisted `ScanResult` for the account.
    fn fetch_results(
        &self,
        account_id: &str,
    ) -> impl std::future::Future<Output = Result<ScanResult, ScanClientError>> + Send;
}
