//! # Live HTTP Implementation
//!
//! Wraps a `reqwest::Client` with the scan service's base URL. Requests
//! are single-shot with no client-configured timeout — the scan service
//! sits behind an API gateway that enforces its own limits.

use serde_json::Value;
use url::Url;

use isms_core::ScanResult;

use crate::error::ScanClientError;
use crate::service::{ScanRequest, ScanService};

/// HTTP client for the live scan service.
#[derive(Debug, Clone)]
pub struct HttpScanService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpScanService {
    /// Create a client for the service at `base_url`.
    ///
    /// The URL is validated up front; a trailing `/` is trimmed so
    /// endpoint paths join cleanly.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ScanClientError> {
        let raw = base_url.into();
        Url::parse(&raw).map_err(|source| ScanClientError::InvalidBaseUrl {
            url: raw.clone(),
            source,
        })?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: raw.trim_end_matches('/').to_string(),
        })
    }

    /// The configured base URL (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a JSON body and return the raw response body on 2xx.
    async fn post_json(&self, path: &str, body: &Value) -> Result<String, ScanClientError> {
        let endpoint = format!("{}/{path}", self.base_url);
        tracing::debug!(%endpoint, "dispatching scan service request");

        let resp = self.client.post(&endpoint).json(body).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(ScanClientError::Status { status, body: text });
        }
        Ok(text)
    }
}

impl ScanService for HttpScanService {
    async fn trigger_scan(&self, request: &ScanRequest) -> Result<Value, ScanClientError> {
        tracing::info!(
            account_id = %request.account_id,
            region = %request.region,
            "triggering account scan"
        );
        let body = serde_json::json!({
            "account_id": request.account_id,
            "region": request.region,
        });
        let text = self.post_json("scan", &body).await?;
        let ack: Value = serde_json::from_str(&text)?;
        Ok(ack)
    }

    async fn fetch_results(&self, account_id: &str) -> Result<ScanResult, ScanClientError> {
        tracing::info!(%account_id, "fetching latest scan results");
        let body = serde_json::json!({ "account_id": account_id });
        let text = self.post_json("results", &body).await?;

        // The gateway sometimes relays the stored document as a
        // JSON-encoded string rather than a native object; decode twice
        // in that case.
        let value: Value = serde_json::from_str(&text)?;
        let value = match value {
            Value::String(inner) => serde_json::from_str(&inner)?,
            other => other,
        };
        let result: ScanResult = serde_json::from_value(value)?;
        Ok(result)
    }
}
