//! Errors from the scan service client.

/// Errors surfaced by [`ScanService`](crate::ScanService) operations.
///
/// Transport and decode failures at the results endpoint are absorbed by
/// the session's fallback policy; scan-trigger failures are surfaced to
/// the caller as a one-line message.
#[derive(Debug, thiserror::Error)]
pub enum ScanClientError {
    /// The configured base URL could not be parsed.
    #[error("invalid scan service base URL {url:?}: {source}")]
    InvalidBaseUrl {
        /// The offending URL string.
        url: String,
        /// The parse failure.
        #[source]
        source: url::ParseError,
    },

    /// The request never produced a response (connection failure, DNS,
    /// TLS, broken transfer).
    #[error("scan service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("scan service returned HTTP {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// Response body excerpt for diagnostics.
        body: String,
    },

    /// The response body was not decodable JSON — including a
    /// string-encoded document whose inner JSON is malformed.
    #[error("scan service response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}
