//! # Identifier Newtypes
//!
//! Domain-primitive newtypes for the ISMS control catalog. A section code
//! and a control item id are distinct types — you cannot pass a
//! [`ControlId`] where a [`SectionCode`] is expected.
//!
//! ## Validation
//!
//! Both identifiers validate format at construction time:
//!
//! - [`SectionCode`]: exactly two dotted numeric segments (`"2.5"`).
//! - [`ControlId`]: exactly three dotted numeric segments (`"2.5.1"`),
//!   where the first two segments name the owning section.
//!
//! ## Ordering
//!
//! Both types derive lexicographic ordering so they can key a `BTreeMap`.
//! Presentation order of sections is not semantically significant, so the
//! lexicographic quirk (`"2.10"` sorts before `"2.5"`) is acceptable.

use serde::Serialize;

use crate::error::ValidationError;

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor so that invalid values are
/// rejected at deserialization time — not silently accepted.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Returns true when every dot-separated segment of `s` is a non-empty
/// run of ASCII digits, and there are exactly `segments` of them.
fn is_dotted_numeric(s: &str, segments: usize) -> bool {
    let parts: Vec<&str> = s.split('.').collect();
    parts.len() == segments
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
}

/// An ISMS section code: two dotted numeric segments, e.g. `"2.5"`
/// (authentication and authorization management).
///
/// Keys both maps of a [`ScanResult`](crate::ScanResult).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SectionCode(String);

impl SectionCode {
    /// Create a section code, validating the `"N.N"` format.
    ///
    /// Returns [`ValidationError::InvalidSectionCode`] otherwise.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if is_dotted_numeric(&value, 2) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidSectionCode(value))
        }
    }

    /// Access the raw code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SectionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SectionCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl_validating_deserialize!(SectionCode);

/// A control item id: three dotted numeric segments, e.g. `"2.5.1"`
/// (user authentication). The first two segments are the owning section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ControlId(String);

impl ControlId {
    /// Create a control id, validating the `"N.N.N"` format.
    ///
    /// Returns [`ValidationError::InvalidControlId`] otherwise.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if is_dotted_numeric(&value, 3) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidControlId(value))
        }
    }

    /// Access the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The section this control belongs to: the id minus its last segment.
    pub fn section(&self) -> SectionCode {
        // Invariant: a valid ControlId always has three segments, so the
        // first two always form a valid SectionCode.
        let owning = match self.0.rfind('.') {
            Some(idx) => &self.0[..idx],
            None => self.0.as_str(),
        };
        SectionCode(owning.to_string())
    }
}

impl std::fmt::Display for ControlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ControlId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl_validating_deserialize!(ControlId);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn section_code_accepts_dotted_pair() {
        assert!(SectionCode::new("2.5").is_ok());
        assert!(SectionCode::new("2.10").is_ok());
        assert!(SectionCode::new("12.3").is_ok());
    }

    #[test]
    fn section_code_rejects_malformed() {
        for bad in ["", "2", "2.5.1", "2.", ".5", "2.x", "2 .5", "2.5 "] {
            assert!(SectionCode::new(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn control_id_accepts_dotted_triple() {
        assert!(ControlId::new("2.5.1").is_ok());
        assert!(ControlId::new("2.10.3").is_ok());
    }

    #[test]
    fn control_id_rejects_malformed() {
        for bad in ["", "2.5", "2.5.1.4", "2.5.", "2..1", "2.5.a"] {
            assert!(ControlId::new(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn control_id_owning_section() {
        let id = ControlId::new("2.10.3").expect("valid id");
        assert_eq!(id.section(), SectionCode::new("2.10").expect("valid code"));
    }

    #[test]
    fn deserialize_routes_through_validation() {
        let ok: Result<SectionCode, _> = serde_json::from_str("\"2.5\"");
        assert!(ok.is_ok());
        let bad: Result<SectionCode, _> = serde_json::from_str("\"not-a-code\"");
        assert!(bad.is_err());
        let bad_id: Result<ControlId, _> = serde_json::from_str("\"2.5\"");
        assert!(bad_id.is_err());
    }

    #[test]
    fn section_code_serializes_as_plain_string() {
        let code = SectionCode::new("2.7").expect("valid code");
        assert_eq!(serde_json::to_string(&code).expect("serialize"), "\"2.7\"");
    }

    proptest! {
        /// Any two dotted numeric segments form a valid code that
        /// survives a serde round trip unchanged.
        #[test]
        fn valid_section_codes_round_trip(a in 0u16..1000, b in 0u16..1000) {
            let raw = format!("{a}.{b}");
            let code = SectionCode::new(raw.clone()).expect("valid code");
            prop_assert_eq!(code.as_str(), raw.as_str());
            let json = serde_json::to_string(&code).expect("serialize");
            let back: SectionCode = serde_json::from_str(&json).expect("deserialize");
            prop_assert_eq!(back, code);
        }

        /// A valid control id always names the section formed by its
        /// first two segments.
        #[test]
        fn control_ids_name_their_owning_section(
            a in 0u16..1000,
            b in 0u16..1000,
            c in 0u16..1000,
        ) {
            let id = ControlId::new(format!("{a}.{b}.{c}")).expect("valid id");
            let section = id.section();
            let expected = format!("{a}.{b}");
            prop_assert_eq!(section.as_str(), expected.as_str());
        }
    }
}
