//! Deterministic mock statistics.
//!
//! County stats and case histories are generated from a `SmallRng` seeded
//! by the county code, so repeated calls for the same county return the
//! same numbers within a process run and across runs. Only `last_updated`
//! and the history dates depend on the clock.

use chrono::{Days, Utc};
use epiwatch_types::{CountyHistory, CountyRisk, CountyStats, HistoryPoint, RiskLevel};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Shortest supported history window.
pub const MIN_HISTORY_DAYS: u16 = 7;
/// Longest supported history window.
pub const MAX_HISTORY_DAYS: u16 = 365;

/// Fold a county code into a stable RNG seed.
fn seed_for(code: &str) -> u64 {
    code.bytes()
        .fold(0xcbf2_9ce4_8422_2325, |acc: u64, b| {
            (acc ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
        })
}

/// Severity tier for a mock active-case count.
const fn tier_for_cases(cases: u32) -> RiskLevel {
    if cases > 300 {
        RiskLevel::High
    } else if cases > 100 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Generate current statistics for a county.
///
/// The case count, tier, trend, and top diseases are a pure function of
/// the county code.
pub fn county_stats(county: &CountyRisk) -> CountyStats {
    let mut rng = SmallRng::seed_from_u64(seed_for(&county.code));

    let active_cases: u32 = rng.random_range(10..=500);
    let trend_pct: i32 = rng.random_range(-15..=25);

    let mut top_diseases = Vec::with_capacity(2);
    if let Some(primary) = &county.primary_disease {
        top_diseases.push(primary.clone());
    }
    let pool = ["Malaria", "Flu", "Cholera", "Typhoid", "Dengue"];
    while top_diseases.len() < 2 {
        let idx = rng.random_range(0..pool.len());
        if let Some(pick) = pool.get(idx)
            && !top_diseases.iter().any(|d| d == pick)
        {
            top_diseases.push((*pick).to_owned());
        }
    }

    CountyStats {
        county_code: county.code.clone(),
        county_name: county.name.clone(),
        active_cases,
        risk_level: tier_for_cases(active_cases),
        trend: format!("{trend_pct:+}%"),
        top_diseases,
        last_updated: Utc::now(),
    }
}

/// Generate a daily case history for a county.
///
/// Callers validate `days` against [`MIN_HISTORY_DAYS`]..=[`MAX_HISTORY_DAYS`]
/// before asking; the window is used as given. The series ends today and
/// walks a seeded baseline, so two calls with the same county and window
/// agree on every case count.
pub fn county_history(county: &CountyRisk, days: u16) -> CountyHistory {
    let mut rng = SmallRng::seed_from_u64(seed_for(&county.code));

    let base: i32 = rng.random_range(50..=200);
    let today = Utc::now().date_naive();

    let mut history = Vec::with_capacity(usize::from(days));
    for offset in (0..days).rev() {
        let date = today
            .checked_sub_days(Days::new(u64::from(offset)))
            .unwrap_or(today);
        let jitter: i32 = rng.random_range(-20..=20);
        let cases = u32::try_from(base.saturating_add(jitter).max(0)).unwrap_or(0);
        history.push(HistoryPoint { date, cases });
    }

    CountyHistory {
        county: county.name.clone(),
        period_days: days,
        history,
    }
}
