//! # isms-cli — Terminal Front End
//!
//! The `isms` binary: triggers account scans, fetches the latest scan
//! document (degrading to the canned sample when the service is down),
//! and renders the aggregated compliance posture as a terminal report.
//!
//! ```bash
//! isms results                  # fetch and report
//! isms scan --region us-east-1  # trigger, settle, fetch, report
//! isms sections                 # print the ISMS section catalog
//! isms results --json           # dump the resolved document instead
//! isms --offline results        # no network; sample data only
//! ```

pub mod report;
