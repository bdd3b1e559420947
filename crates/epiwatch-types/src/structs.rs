//! Core entity structs for the EpiWatch platform.
//!
//! These are the records the REST API serves and the dashboard renders.
//! Field names match the wire format of the original API (`snake_case`
//! via serde defaults on already-snake-case Rust fields).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{AlertLevel, DiseaseCategory, InsightStatus, OperatorRole, RiskLevel, Trend};
use crate::ids::{AlertId, DiseaseId, InsightId, OperatorId};

// ---------------------------------------------------------------------------
// Diseases
// ---------------------------------------------------------------------------

/// A disease definition tracked by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Disease {
    /// Unique identifier.
    pub id: DiseaseId,
    /// Display name, unique among diseases.
    pub name: String,
    /// Epidemiological category.
    pub category: DiseaseCategory,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Common symptoms.
    pub symptoms: Vec<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated, if ever.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A disease signal line for the dashboard trend chart: display color
/// plus a rolling window of daily social-media mention counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DiseaseSignal {
    /// Disease display name.
    pub name: String,
    /// Hex display color for the chart line.
    pub color: String,
    /// Daily mention counts, oldest first.
    pub mentions: Vec<u32>,
}

// ---------------------------------------------------------------------------
// Counties
// ---------------------------------------------------------------------------

/// One of Kenya's 47 counties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct County {
    /// Stable three-digit county code (`"001"` through `"047"`).
    pub code: String,
    /// County name.
    pub name: String,
    /// Census population.
    pub population: u64,
    /// Administrative region.
    pub region: String,
}

/// Current disease statistics for a county.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CountyStats {
    /// County code the stats belong to.
    pub county_code: String,
    /// County name.
    pub county_name: String,
    /// Currently active reported cases.
    pub active_cases: u32,
    /// Severity tier derived from case load.
    pub risk_level: RiskLevel,
    /// Week-over-week trend as a display string (e.g. `"+12%"`).
    pub trend: String,
    /// Most reported diseases in the county.
    pub top_diseases: Vec<String>,
    /// When the stats were computed.
    pub last_updated: DateTime<Utc>,
}

/// County identity plus its current statistics, as returned by the
/// county detail endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CountyDetail {
    /// The county record.
    #[serde(flatten)]
    pub county: County,
    /// Current statistics.
    pub stats: CountyStats,
}

/// Demo-dataset risk record for a county: the 0-100 score the dashboard
/// map colors by, plus the dominant disease driving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CountyRisk {
    /// Stable three-digit county code.
    pub code: String,
    /// County name.
    pub name: String,
    /// Census population.
    pub population: u64,
    /// Administrative region.
    pub region: String,
    /// Current outbreak risk score, 0-100.
    pub risk: u8,
    /// Disease contributing most to the score, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_disease: Option<String>,
}

/// A single day in a county's case history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HistoryPoint {
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Reported cases on that date.
    pub cases: u32,
}

/// Historical case series for a county.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CountyHistory {
    /// County name.
    pub county: String,
    /// Number of days covered.
    pub period_days: u16,
    /// Daily case counts, oldest first.
    pub history: Vec<HistoryPoint>,
}

// ---------------------------------------------------------------------------
// Predictions
// ---------------------------------------------------------------------------

/// An outbreak prediction for one county and disease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Prediction {
    /// County the prediction applies to.
    pub county: String,
    /// Disease being predicted.
    pub disease: String,
    /// Outbreak risk score, 0-100.
    pub risk: u8,
    /// Model confidence, 0-100.
    pub confidence: u8,
    /// Predicted peak date.
    pub peak_date: NaiveDate,
    /// Estimated case range as a display string (e.g. `"1,200-1,800"`).
    pub estimated_cases: String,
    /// Direction of the case trend.
    pub trend: Trend,
    /// Trend magnitude in percentage points (negative for down).
    pub trend_value: i8,
}

/// A bundle of predictions as returned by the prediction endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PredictionBundle {
    /// The predictions.
    pub predictions: Vec<Prediction>,
    /// When the bundle was generated.
    pub generated_at: DateTime<Utc>,
    /// Identifier of the model that produced it.
    pub model_version: String,
}

/// Country-wide dashboard summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NationalSummary {
    /// Overall national risk tier.
    pub overall_risk: RiskLevel,
    /// Number of counties at high or critical risk.
    pub high_risk_counties: u32,
    /// Number of counties under surveillance.
    pub counties_monitored: u32,
    /// Number of active outbreak alerts.
    pub active_outbreaks: u32,
    /// Predictions generated in the last 24 hours.
    pub predictions_generated_today: u32,
    /// Model accuracy percentage, 0-100.
    pub model_accuracy: u8,
    /// Headline alerts for the summary ticker.
    pub alerts: Vec<SummaryAlert>,
    /// When the summary was computed.
    pub last_updated: DateTime<Utc>,
}

/// A headline alert inside the national summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SummaryAlert {
    /// County concerned.
    pub county: String,
    /// Disease concerned.
    pub disease: String,
    /// Risk score, 0-100.
    pub risk_score: u8,
    /// Human-readable headline.
    pub message: String,
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

/// An actionable outbreak alert for health facilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Alert {
    /// Unique identifier.
    pub id: AlertId,
    /// Severity level.
    pub level: AlertLevel,
    /// Headline (e.g. `"Malaria Outbreak Imminent - Nairobi"`).
    pub title: String,
    /// County concerned.
    pub county: String,
    /// Disease concerned.
    pub disease: String,
    /// Risk score, 0-100.
    pub risk: u8,
    /// Predicted outbreak peak date.
    pub peak_date: NaiveDate,
    /// Sub-county areas expected to be affected.
    pub affected_areas: Vec<String>,
    /// Estimated case range as a display string.
    pub estimated_cases: String,
    /// Recommended preparedness actions.
    pub actions: Vec<String>,
    /// Relative display timestamp (e.g. `"2 hours ago"`).
    pub timestamp: String,
    /// Whether an operator has marked this alert handled.
    pub handled: bool,
}

/// A dated entry on the 14-day outbreak timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TimelineEntry {
    /// Day offset from the start of the window (1-based).
    pub day: u8,
    /// Calendar date.
    pub date: NaiveDate,
    /// What is predicted to happen.
    pub event: String,
    /// Counties or areas involved.
    pub locations: Vec<String>,
    /// Model confidence, 0-100.
    pub confidence: u8,
    /// Recommended action.
    pub action: String,
    /// Urgency tier.
    pub urgency: AlertLevel,
}

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

/// A registered health operator (doctor, nurse, pharmacist, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HealthOperator {
    /// Unique identifier.
    pub id: OperatorId,
    /// Full legal name.
    pub full_name: String,
    /// Contact email, unique among operators.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Employing organization.
    pub organization: String,
    /// Professional license number.
    pub license_number: String,
    /// County of practice.
    pub county: String,
    /// Professional role.
    pub role: OperatorRole,
    /// Whether an administrator has verified the registration.
    pub is_verified: bool,
    /// When verification happened, if it has.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<DateTime<Utc>>,
    /// When the registration was submitted.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Insights
// ---------------------------------------------------------------------------

/// An early-warning insight harvested from social media or extracted
/// from an uploaded health report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Insight {
    /// Unique identifier.
    pub id: InsightId,
    /// Where the insight came from (platform name or `"pdf_upload"`).
    pub source: String,
    /// The harvested text or extracted summary.
    pub content: String,
    /// County the insight refers to.
    pub county: String,
    /// Disease names detected in the content.
    pub disease_indicators: Vec<String>,
    /// Estimated severity, 0-100.
    pub severity_score: u8,
    /// Review lifecycle status.
    pub status: InsightStatus,
    /// When the insight was harvested or uploaded.
    pub harvested_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Dashboard user
// ---------------------------------------------------------------------------

/// The organization a dashboard user belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Organization {
    /// Organization name.
    pub name: String,
    /// Organization type (e.g. `"Hospital"`).
    pub kind: String,
    /// County the organization operates in.
    pub county: String,
    /// Number of facilities it runs.
    pub facilities: u32,
}

/// A dashboard user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DashboardUser {
    /// Opaque user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Job title.
    pub role: String,
    /// Employing organization.
    pub organization: Organization,
    /// Avatar image path.
    pub avatar: String,
}
