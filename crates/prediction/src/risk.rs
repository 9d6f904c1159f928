//! Risk-tier presentation mapping (GAS-005).
//!
//! The service's `risk_level` is an opaque string; the client only needs a
//! severity bucket to pick styling. Unknown labels deliberately fail open
//! to the low tier — the label text is still shown verbatim, just without
//! alarm styling.

/// Presentation severity bucket derived from the service's risk label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RiskTier {
    /// Default tier; every unrecognized label lands here.
    #[default]
    Low,
    High,
    Critical,
}

impl RiskTier {
    /// Classify a raw service label.
    ///
    /// Total over all strings: exact `"CRITICAL"` selects the highest tier,
    /// exact `"High"` the intermediate one, and everything else (empty and
    /// unknown labels included) the low tier. Comparisons are
    /// case-sensitive.
    pub fn from_label(label: &str) -> Self {
        match label {
            "CRITICAL" => RiskTier::Critical,
            "High" => RiskTier::High,
            _ => RiskTier::Low,
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
