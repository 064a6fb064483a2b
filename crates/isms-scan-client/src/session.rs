//! # ScanSession — The Shared Result Holder
//!
//! One writer, many readers: the session owns the last fetched
//! `ScanResult` and is handed to consumers by injection. Updates are
//! whole-document replacements — a refresh never merges a partial remote
//! document into the previous one.
//!
//! ## Fallback Policy
//!
//! `refresh()` never fails. A transport error, an undecodable body, or a
//! document with no `isms_mapping` all degrade to the canned sample
//! document (logged at warn). This keeps the dashboard renderable through
//! a backend outage, at the cost of masking it — callers that need to
//! tell live data from the sample compare against the fallback document.
//!
//! Scan triggering is different: a trigger failure IS surfaced, and the
//! previously loaded document stays untouched.

use std::time::Duration;

use chrono::{DateTime, Utc};

use isms_aggregate::resolve_or_fallback;
use isms_core::{check_summary, sample_scan_result, ScanResult};

use crate::error::ScanClientError;
use crate::service::{ScanRequest, ScanService};

/// Delay between triggering a scan and re-fetching results, giving the
/// service time to persist the new document. A heuristic, not a
/// completion signal — there is none.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(2);

/// Holds the injected [`ScanService`], the fallback document, and the
/// last fetched result.
#[derive(Debug)]
pub struct ScanSession<S> {
    service: S,
    account_id: String,
    fallback: ScanResult,
    settle_delay: Duration,
    current: Option<ScanResult>,
    last_fetch: Option<DateTime<Utc>>,
}

impl<S: ScanService> ScanSession<S> {
    /// Create a session for one account, with the sample document as
    /// fallback and the default settle delay.
    pub fn new(service: S, account_id: impl Into<String>) -> Self {
        Self {
            service,
            account_id: account_id.into(),
            fallback: sample_scan_result(),
            settle_delay: DEFAULT_SETTLE_DELAY,
            current: None,
            last_fetch: None,
        }
    }

    /// Override the settle delay (tests use zero).
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// The account this session scans.
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// The last resolved document, if any fetch has happened yet.
    pub fn current(&self) -> Option<&ScanResult> {
        self.current.as_ref()
    }

    /// When the last refresh completed.
    pub fn last_fetch_time(&self) -> Option<DateTime<Utc>> {
        self.last_fetch
    }

    /// Fetch the latest results and replace the held document.
    ///
    /// Infallible by policy: fetch failures and hollow documents resolve
    /// to the fallback. Summary drift in the resolved document is logged,
    /// never fatal. Returns the resolved document.
    pub async fn refresh(&mut self) -> &ScanResult {
        let remote = match self.service.fetch_results(&self.account_id).await {
            Ok(doc) => Some(doc),
            Err(e) => {
                tracing::warn!(account_id = %self.account_id, error = %e, "results fetch failed");
                None
            }
        };

        let resolved = resolve_or_fallback(remote, self.fallback.clone());
        for mismatch in check_summary(&resolved) {
            tracing::warn!(%mismatch, "scan summary disagrees with raw items");
        }

        self.last_fetch = Some(Utc::now());
        self.current.insert(resolved)
    }

    /// Trigger a scan, wait the settle delay, then refresh. Returns the
    /// resolved document.
    ///
    /// The trigger acknowledgement is service-defined and uninterpreted;
    /// it is logged at debug. A trigger failure is returned to the
    /// caller and leaves the held document untouched. Concurrent
    /// triggers are not deduplicated — the service tolerates
    /// overlapping scans.
    pub async fn scan_and_refresh(
        &mut self,
        region: impl Into<String>,
    ) -> Result<&ScanResult, ScanClientError> {
        let request = ScanRequest {
            account_id: self.account_id.clone(),
            region: region.into(),
        };
        let ack = self.service.trigger_scan(&request).await?;
        tracing::debug!(
            %ack,
            settle = ?self.settle_delay,
            "scan triggered; waiting for results to persist"
        );
        tokio::time::sleep(self.settle_delay).await;
        Ok(self.refresh().await)
    }
}
