//! Enumeration types for the EpiWatch platform.
//!
//! Wire representations match the original REST API: disease categories
//! and operator roles serialize as `snake_case`, everything else as
//! `lowercase`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Disease categories
// ---------------------------------------------------------------------------

/// Epidemiological category of a disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum DiseaseCategory {
    /// Spread through the air (flu, COVID-19, tuberculosis).
    Respiratory,
    /// Spread through contaminated water (cholera, typhoid).
    Waterborne,
    /// Spread by insect vectors (malaria, dengue).
    VectorBorne,
    /// Viral diseases not covered by a more specific category.
    Viral,
    /// Bacterial diseases not covered by a more specific category.
    Bacterial,
    /// Anything else.
    Other,
}

// ---------------------------------------------------------------------------
// Risk classification
// ---------------------------------------------------------------------------

/// Four-tier severity classification derived from a 0-100 risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Score below 30.
    Low,
    /// Score 30 to 49.
    Medium,
    /// Score 50 to 69.
    High,
    /// Score 70 and above.
    Critical,
}

impl RiskLevel {
    /// Classify a 0-100 risk score into its severity tier.
    ///
    /// Boundary values map to the higher tier: a score of exactly 70 is
    /// [`RiskLevel::Critical`], 50 is [`RiskLevel::High`], 30 is
    /// [`RiskLevel::Medium`].
    pub const fn classify(score: u8) -> Self {
        if score >= 70 {
            Self::Critical
        } else if score >= 50 {
            Self::High
        } else if score >= 30 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Wire label for this level (matches the serde representation).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

// ---------------------------------------------------------------------------
// Trends
// ---------------------------------------------------------------------------

/// Direction of a prediction's case trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Cases rising.
    Up,
    /// Cases falling.
    Down,
    /// No significant change.
    Stable,
}

impl Trend {
    /// Wire label for this trend (matches the serde representation).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
        }
    }
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

/// Severity level of an outbreak alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    /// Immediate action required.
    Critical,
    /// Action required within days.
    High,
    /// Monitor and prepare.
    Medium,
    /// Informational.
    Low,
}

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

/// Professional role of a registered health operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum OperatorRole {
    /// Medical doctor.
    Doctor,
    /// Registered nurse.
    Nurse,
    /// Licensed pharmacist.
    Pharmacist,
    /// Laboratory technician.
    LabTechnician,
    /// Public health officer.
    HealthOfficer,
}

// ---------------------------------------------------------------------------
// Insights
// ---------------------------------------------------------------------------

/// Review lifecycle of a harvested or uploaded insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum InsightStatus {
    /// Harvested, not yet analyzed.
    Pending,
    /// Analysis in progress.
    Analyzing,
    /// Analysis complete, awaiting operator review.
    Analyzed,
    /// Confirmed relevant by a verified operator.
    Verified,
    /// Rejected by a verified operator.
    Rejected,
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// Author of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The dashboard user.
    User,
    /// The assistant.
    Assistant,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries_map_to_higher_tier() {
        assert_eq!(RiskLevel::classify(70), RiskLevel::Critical);
        assert_eq!(RiskLevel::classify(50), RiskLevel::High);
        assert_eq!(RiskLevel::classify(30), RiskLevel::Medium);
    }

    #[test]
    fn classify_interior_values() {
        assert_eq!(RiskLevel::classify(100), RiskLevel::Critical);
        assert_eq!(RiskLevel::classify(85), RiskLevel::Critical);
        assert_eq!(RiskLevel::classify(69), RiskLevel::High);
        assert_eq!(RiskLevel::classify(49), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(29), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(0), RiskLevel::Low);
    }

    #[test]
    fn risk_level_serializes_lowercase() {
        let json = serde_json::to_string(&RiskLevel::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&DiseaseCategory::VectorBorne).unwrap();
        assert_eq!(json, "\"vector_borne\"");
    }

    #[test]
    fn operator_role_round_trip() {
        let role: OperatorRole = serde_json::from_str("\"lab_technician\"").unwrap();
        assert_eq!(role, OperatorRole::LabTechnician);
    }
}
