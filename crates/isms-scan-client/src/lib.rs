//! # isms-scan-client — Scan Service Client & Session
//!
//! Typed client for the external scan service that inspects an AWS
//! account and persists one `ScanResult` document per scan. The service
//! exposes two JSON endpoints:
//!
//! - `POST {base}/scan` — body `{account_id, region}`; kicks off an
//!   asynchronous scan. The response body is service-defined and passed
//!   through uninterpreted.
//! - `POST {base}/results` — body `{account_id}`; returns the latest
//!   `ScanResult`, either as a native JSON object or as a JSON-encoded
//!   string that must be decoded a second time.
//!
//! ## Request Model
//!
//! Requests are single-shot: no retry, no backoff, no client-side
//! timeout, no cancellation. A failed fetch is final for that attempt
//! and requires a new caller-initiated refresh. Scan completion has no
//! signal — [`session::ScanSession`] waits a fixed settle delay after
//! triggering before it re-fetches.
//!
//! ## Seams
//!
//! [`ScanService`] is the trait seam: [`HttpScanService`] talks to the
//! live service, [`MockScanService`] serves the canned sample document
//! for offline use and tests. [`session::ScanSession`] takes either by
//! injection — there is no ambient global holding the last result.

pub mod error;
pub mod http;
pub mod mock;
pub mod service;
pub mod session;

pub use error::ScanClientError;
pub use http::HttpScanService;
pub use mock::MockScanService;
pub use service::{ScanRequest, ScanService, DEFAULT_ACCOUNT_ID, DEFAULT_BASE_URL, DEFAULT_REGION};
pub use session::{ScanSession, DEFAULT_SETTLE_DELAY};
