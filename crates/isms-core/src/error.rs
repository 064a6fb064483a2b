//! Structured validation errors for identifier construction.

/// Errors raised when constructing domain identifiers from raw strings.
///
/// Deserialization routes through the same constructors, so a document
/// carrying a malformed section code or control id is rejected at the
/// decode boundary rather than silently accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The string is not a valid ISMS section code (e.g. `"2.5"`).
    #[error("invalid ISMS section code: {0:?} (expected two dotted numeric segments, e.g. \"2.5\")")]
    InvalidSectionCode(String),

    /// The string is not a valid control item id (e.g. `"2.5.1"`).
    #[error("invalid control item id: {0:?} (expected three dotted numeric segments, e.g. \"2.5.1\")")]
    InvalidControlId(String),
}
