//! Shared application state.
//!
//! [`AppState`] holds the read-only demo dataset plus `RwLock`-protected
//! mutable stores for everything handlers can change: the disease
//! catalogue (seeded from the dataset), operator registrations,
//! harvested insights, alert handled-flags, and issued session tokens.
//! There is no database; state lives for the life of the process.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use epiwatch_data::DemoData;
use epiwatch_types::{
    Alert, Disease, DiseaseCategory, DiseaseId, HealthOperator, Insight, SessionToken,
};
use tokio::sync::RwLock;

/// Shared state for the Axum application, injected via `State`.
pub struct AppState {
    /// The bundled demo dataset (counties, predictions, signals).
    pub data: Arc<DemoData>,
    /// Registered diseases, seeded from the dataset signals.
    pub diseases: RwLock<Vec<Disease>>,
    /// Health operator registrations.
    pub operators: RwLock<Vec<HealthOperator>>,
    /// Harvested and uploaded insights.
    pub insights: RwLock<Vec<Insight>>,
    /// Outbreak alerts with their handled flags.
    pub alerts: RwLock<Vec<Alert>>,
    /// Issued session tokens, keyed by token string.
    pub sessions: RwLock<HashMap<String, SessionToken>>,
}

impl AppState {
    /// Build state seeded from a fresh demo dataset.
    pub fn new() -> Self {
        let data = Arc::new(DemoData::new());
        Self::with_data(data)
    }

    /// Build state around an existing dataset handle.
    pub fn with_data(data: Arc<DemoData>) -> Self {
        let diseases = seed_diseases(&data);
        let alerts = data.alerts().to_vec();
        Self {
            data,
            diseases: RwLock::new(diseases),
            operators: RwLock::new(Vec::new()),
            insights: RwLock::new(Vec::new()),
            alerts: RwLock::new(alerts),
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the initial disease catalogue from the dataset's signal lines.
fn seed_diseases(data: &DemoData) -> Vec<Disease> {
    let now = Utc::now();
    data.diseases()
        .iter()
        .map(|signal| {
            let (category, symptoms) = profile_for(&signal.name);
            Disease {
                id: DiseaseId::new(),
                name: signal.name.clone(),
                category,
                description: None,
                symptoms,
                created_at: now,
                updated_at: None,
            }
        })
        .collect()
}

/// Category and common symptoms for the bundled diseases.
fn profile_for(name: &str) -> (DiseaseCategory, Vec<String>) {
    let symptoms = |list: &[&str]| list.iter().map(|s| (*s).to_owned()).collect();
    match name {
        "Malaria" => (
            DiseaseCategory::VectorBorne,
            symptoms(&["fever", "chills", "headache", "sweating"]),
        ),
        "Flu" => (
            DiseaseCategory::Respiratory,
            symptoms(&["fever", "cough", "sore throat", "fatigue"]),
        ),
        "Cholera" => (
            DiseaseCategory::Waterborne,
            symptoms(&["watery diarrhoea", "vomiting", "dehydration"]),
        ),
        "COVID-19" => (
            DiseaseCategory::Respiratory,
            symptoms(&["fever", "cough", "loss of taste or smell"]),
        ),
        "Typhoid" => (
            DiseaseCategory::Bacterial,
            symptoms(&["prolonged fever", "abdominal pain", "constipation"]),
        ),
        "Dengue" => (
            DiseaseCategory::VectorBorne,
            symptoms(&["high fever", "joint pain", "rash"]),
        ),
        _ => (DiseaseCategory::Other, Vec::new()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn state_seeds_diseases_and_alerts_from_dataset() {
        let state = AppState::new();
        assert_eq!(state.diseases.read().await.len(), 6);
        assert_eq!(state.alerts.read().await.len(), 5);
        assert!(state.operators.read().await.is_empty());
        assert!(state.insights.read().await.is_empty());
    }

    #[test]
    fn known_diseases_get_real_categories() {
        let (category, symptoms) = profile_for("Malaria");
        assert_eq!(category, DiseaseCategory::VectorBorne);
        assert!(symptoms.contains(&"fever".to_owned()));

        let (unknown, none) = profile_for("Scurvy");
        assert_eq!(unknown, DiseaseCategory::Other);
        assert!(none.is_empty());
    }
}
