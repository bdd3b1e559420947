//! Scripted chat fallback.
//!
//! When no language model is reachable the assistant degrades to keyword
//! extraction over the question plus a small set of canned replies built
//! from the demo dataset. Extraction is case-insensitive substring
//! matching, which is crude but good enough for a degraded mode.

use epiwatch_types::ChatReply;

use crate::dataset::DemoData;

/// County names the extractor recognises in free text.
const KNOWN_COUNTIES: &[&str] = &[
    "nairobi", "mombasa", "kisumu", "nakuru", "eldoret", "kiambu", "machakos", "nyeri", "meru",
    "kakamega", "kisii", "garissa",
];

/// Disease names the extractor recognises in free text.
const KNOWN_DISEASES: &[&str] = &[
    "malaria",
    "cholera",
    "typhoid",
    "dengue",
    "tuberculosis",
    "covid",
];

/// Pull the first recognised county name out of a message.
pub fn extract_county(message: &str) -> Option<String> {
    let lower = message.to_lowercase();
    KNOWN_COUNTIES
        .iter()
        .find(|c| lower.contains(*c))
        .map(|c| titlecase(c))
}

/// Pull the first recognised disease name out of a message.
pub fn extract_disease(message: &str) -> Option<String> {
    let lower = message.to_lowercase();
    KNOWN_DISEASES
        .iter()
        .find(|d| lower.contains(*d))
        .map(|d| titlecase(d))
}

/// Uppercase the first ASCII letter.
fn titlecase(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        format!("{}{}", first.to_ascii_uppercase(), chars.as_str())
    })
}

/// Produce a canned reply for a question, grounded in the demo dataset.
///
/// Specific county+disease pairs the dataset covers get a detailed
/// answer; anything else falls through to a generic briefing.
pub fn scripted_reply(data: &DemoData, message: &str) -> ChatReply {
    let county = extract_county(message);
    let disease = extract_disease(message);

    match (county.as_deref(), disease.as_deref()) {
        (Some(county_name), Some(disease_name)) => {
            pair_reply(data, county_name, disease_name)
        }
        (Some(county_name), None) => county_reply(data, county_name),
        (None, Some(disease_name)) => disease_reply(data, disease_name),
        (None, None) => generic_reply(data),
    }
}

fn pair_reply(data: &DemoData, county_name: &str, disease_name: &str) -> ChatReply {
    let matching: Vec<_> = data
        .predictions_for_county(county_name)
        .into_iter()
        .filter(|p| p.disease.eq_ignore_ascii_case(disease_name))
        .collect();

    matching.first().map_or_else(
        || county_reply(data, county_name),
        |p| ChatReply {
            message: format!(
                "{} risk in {} is currently {}/100 (model confidence {}%). \
                 The outbreak is projected to peak around {}, with an estimated \
                 {} cases. Trend: {} {:+} points week-over-week.",
                p.disease, p.county, p.risk, p.confidence, p.peak_date, p.estimated_cases,
                p.trend.as_str(), p.trend_value,
            ),
            sources: vec!["prediction_model".to_owned(), "county_surveillance".to_owned()],
            suggested_actions: vec![
                format!("Review the {} preparedness checklist", p.disease),
                format!("Check bed and drug stock levels in {}", p.county),
            ],
        },
    )
}

fn county_reply(data: &DemoData, county_name: &str) -> ChatReply {
    data.county_by_name(county_name).map_or_else(
        || generic_reply(data),
        |county| {
            let primary = county.primary_disease.as_deref().unwrap_or("no dominant disease");
            ChatReply {
                message: format!(
                    "{} ({} region, population {}) has a current outbreak risk \
                     score of {}/100. Primary concern: {}.",
                    county.name, county.region, county.population, county.risk, primary,
                ),
                sources: vec!["county_surveillance".to_owned()],
                suggested_actions: vec![
                    format!("Open the {} county detail view", county.name),
                    "Compare with neighbouring counties".to_owned(),
                ],
            }
        },
    )
}

fn disease_reply(data: &DemoData, disease_name: &str) -> ChatReply {
    data.disease_by_name(disease_name).map_or_else(
        || generic_reply(data),
        |signal| {
            let latest = signal.mentions.last().copied().unwrap_or(0);
            let first = signal.mentions.first().copied().unwrap_or(0);
            let direction = if latest > first { "rising" } else { "stable or falling" };
            ChatReply {
                message: format!(
                    "{} social-media signal is {} over the last week \
                     ({first} mentions at the start of the window, {latest} now). \
                     Check the affected-county predictions for local detail.",
                    signal.name, direction,
                ),
                sources: vec!["social_media_signals".to_owned()],
                suggested_actions: vec![
                    format!("Filter predictions by {}", signal.name),
                ],
            }
        },
    )
}

fn generic_reply(data: &DemoData) -> ChatReply {
    let high = data.high_risk_counties();
    let names: Vec<&str> = high.iter().map(|c| c.name.as_str()).collect();
    ChatReply {
        message: format!(
            "I'm monitoring all 47 counties. {} are currently at high or \
             critical risk: {}. Ask me about a specific county or disease \
             for details.",
            high.len(),
            names.join(", "),
        ),
        sources: vec!["county_surveillance".to_owned()],
        suggested_actions: vec![
            "Ask about malaria in Nairobi".to_owned(),
            "Ask about cholera in Mombasa".to_owned(),
        ],
    }
}
