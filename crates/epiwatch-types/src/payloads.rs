//! Request and response payloads for the EpiWatch REST API.
//!
//! Everything the client sends and every envelope the server wraps a
//! response in lives here, so both sides of the wire share one
//! definition. Inbound payloads that carry user input derive
//! [`validator::Validate`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

use crate::enums::{ChatRole, DiseaseCategory, InsightStatus, OperatorRole};
use crate::ids::InsightId;
use crate::structs::{CountyStats, Disease, Insight};

// ---------------------------------------------------------------------------
// List envelopes
// ---------------------------------------------------------------------------

/// Envelope for the disease list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DiseaseListResponse {
    /// The matching diseases.
    pub data: Vec<Disease>,
    /// Number of diseases in `data`.
    pub count: usize,
}

/// Envelope for the county list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CountyListResponse {
    /// Per-county statistics, highest risk first.
    pub data: Vec<CountyStats>,
    /// Number of counties in `data`.
    pub count: usize,
}

/// Envelope for the insight list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct InsightListResponse {
    /// Number of insights in `insights`.
    pub count: usize,
    /// The matching insights, newest first.
    pub insights: Vec<Insight>,
}

// ---------------------------------------------------------------------------
// Diseases
// ---------------------------------------------------------------------------

/// Payload to create a disease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DiseaseCreate {
    /// Display name, must be non-empty.
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    /// Epidemiological category.
    pub category: DiseaseCategory,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Common symptoms.
    #[serde(default)]
    pub symptoms: Vec<String>,
}

/// Partial-update payload for a disease. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DiseaseUpdate {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<DiseaseCategory>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New symptom list (replaces the old one).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Predictions
// ---------------------------------------------------------------------------

/// Payload to request a custom prediction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GenerateRequest {
    /// County code to predict for.
    #[validate(length(min = 1))]
    pub county_code: String,
    /// Restrict the run to one disease.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease: Option<String>,
    /// Forecast horizon in days (default 14).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast_days: Option<u16>,
}

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

/// Registration payload for a new health operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
pub struct OperatorRegistration {
    /// Full legal name.
    #[validate(length(min = 1, max = 120))]
    pub full_name: String,
    /// Contact email.
    #[validate(email)]
    pub email: String,
    /// Contact phone number.
    #[validate(length(min = 7, max = 20))]
    pub phone: String,
    /// Employing organization.
    #[validate(length(min = 1, max = 200))]
    pub organization: String,
    /// Professional license number.
    #[validate(length(min = 1, max = 60))]
    pub license_number: String,
    /// County of practice.
    #[validate(length(min = 1, max = 60))]
    pub county: String,
    /// Professional role.
    pub role: OperatorRole,
}

/// Generic success acknowledgement returned by operator actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct OperationStatus {
    /// Whether the action succeeded.
    pub success: bool,
    /// Human-readable outcome description.
    pub message: String,
}

/// Response of the admin-check endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AdminStatus {
    /// Whether the queried email belongs to an administrator.
    pub is_admin: bool,
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

/// Login payload for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LoginRequest {
    /// Account email.
    #[validate(email)]
    pub email: String,
    /// Account password.
    #[validate(length(min = 8))]
    pub password: String,
}

/// Bearer token issued on successful login or signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SessionToken {
    /// Opaque bearer token.
    pub token: String,
    /// Email the token was issued to.
    pub email: String,
    /// Whether the holder has administrator rights.
    pub is_admin: bool,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Insights
// ---------------------------------------------------------------------------

/// Payload to trigger a social-media harvest run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HarvestRequest {
    /// Restrict the harvest to these counties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counties: Option<Vec<String>>,
    /// Restrict the harvest to these diseases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diseases: Option<Vec<String>>,
}

/// Response of a harvest run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HarvestResponse {
    /// Whether the harvest completed.
    pub success: bool,
    /// Number of insights produced.
    pub insights_count: usize,
    /// The insights produced by this run.
    pub insights: Vec<Insight>,
    /// When the run finished.
    pub harvested_at: DateTime<Utc>,
}

/// Response of a PDF report upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct UploadResponse {
    /// Whether the upload was accepted.
    pub success: bool,
    /// Original filename.
    pub filename: String,
    /// Identifier of the insight created from the report.
    pub insight_id: InsightId,
    /// Extracted text summary.
    pub extracted_summary: String,
    /// Disease names detected in the report.
    pub disease_indicators: Vec<String>,
    /// Estimated severity, 0-100.
    pub severity_score: u8,
    /// Status the insight was created with.
    pub status: InsightStatus,
    /// Human-readable outcome description.
    pub message: String,
}

/// Operator verdict on an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct VerifyRequest {
    /// `true` confirms the insight, `false` rejects it.
    pub approved: bool,
}

/// Response of an insight verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct VerifyResponse {
    /// Whether the verification was recorded.
    pub success: bool,
    /// Status the insight moved to.
    pub new_status: InsightStatus,
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// One turn of chat history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ChatMessage {
    /// Who authored the turn.
    pub role: ChatRole,
    /// The message text.
    pub content: String,
}

/// Chat request from the dashboard widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ChatRequest {
    /// The user's message.
    #[validate(length(min = 1, max = 4000))]
    pub message: String,
    /// County extracted from or selected alongside the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    /// Disease extracted from the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease: Option<String>,
    /// Recent conversation turns for context (bounded by the client).
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

/// Chat reply to the dashboard widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ChatReply {
    /// The assistant's reply text.
    pub message: String,
    /// Data sources the reply drew on.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Suggested follow-up actions.
    #[serde(default)]
    pub suggested_actions: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn registration_rejects_bad_email() {
        let reg = OperatorRegistration {
            full_name: "Dr. Amina Hassan".to_owned(),
            email: "not-an-email".to_owned(),
            phone: "+254700000001".to_owned(),
            organization: "Coast General Hospital".to_owned(),
            license_number: "KMP-12345".to_owned(),
            county: "Mombasa".to_owned(),
            role: crate::enums::OperatorRole::Doctor,
        };
        assert!(reg.validate().is_err());
    }

    #[test]
    fn registration_accepts_valid_payload() {
        let reg = OperatorRegistration {
            full_name: "Dr. Amina Hassan".to_owned(),
            email: "a.hassan@coastgeneral.or.ke".to_owned(),
            phone: "+254700000001".to_owned(),
            organization: "Coast General Hospital".to_owned(),
            license_number: "KMP-12345".to_owned(),
            county: "Mombasa".to_owned(),
            role: crate::enums::OperatorRole::Doctor,
        };
        assert!(reg.validate().is_ok());
    }

    #[test]
    fn disease_update_omits_absent_fields() {
        let update = DiseaseUpdate {
            name: Some("Malaria".to_owned()),
            ..DiseaseUpdate::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, "{\"name\":\"Malaria\"}");
    }
}
