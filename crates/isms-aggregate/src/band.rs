//! # Status Bands
//!
//! Three-way classification of a compliance percentage. One fixed
//! threshold pair (≥80 good, ≥50 needs attention, else at risk) drives
//! every label, icon, and color downstream — renderers take the band,
//! never the raw thresholds.

use serde::{Deserialize, Serialize};

/// Classification of a rounded compliance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceBand {
    /// ≥ 80% — controls are in good shape ("양호").
    Compliant,
    /// 50–79% — needs attention ("주의").
    Partial,
    /// < 50% — at risk ("위험").
    NonCompliant,
}

/// Classify a percentage into its band.
///
/// Total on 0..=100 (and on all of `u8`): the three bands partition the
/// range with no gaps or overlaps.
pub fn classify(percentage: u8) -> ComplianceBand {
    if percentage >= 80 {
        ComplianceBand::Compliant
    } else if percentage >= 50 {
        ComplianceBand::Partial
    } else {
        ComplianceBand::NonCompliant
    }
}

impl ComplianceBand {
    /// Korean status label used across the dashboard.
    pub fn label_ko(self) -> &'static str {
        match self {
            Self::Compliant => "양호",
            Self::Partial => "주의",
            Self::NonCompliant => "위험",
        }
    }

    /// Hex color hint for renderers.
    pub fn color_hex(self) -> &'static str {
        match self {
            Self::Compliant => "#4caf50",
            Self::Partial => "#ff9800",
            Self::NonCompliant => "#f44336",
        }
    }
}

impl std::fmt::Display for ComplianceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compliant => write!(f, "compliant"),
            Self::Partial => write!(f, "partial"),
            Self::NonCompliant => write!(f, "non-compliant"),
        }
    }
}
