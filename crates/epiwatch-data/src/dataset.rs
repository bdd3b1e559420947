//! The bundled demo dataset: all 47 Kenyan counties, six disease signal
//! lines, ten predictions, five alerts, seven timeline entries, and one
//! demo user.
//!
//! County codes, populations, and regions follow the national registry
//! numbering (`"001"` Mombasa through `"047"` Nairobi). Risk scores and
//! primary diseases are the demo values the dashboard map is colored by.

use chrono::NaiveDate;
use epiwatch_types::{
    Alert, AlertId, AlertLevel, CountyRisk, DashboardUser, DiseaseSignal, Organization,
    Prediction, TimelineEntry, Trend,
};

/// Build a date from literal year/month/day values.
///
/// Falls back to the epoch for out-of-range literals, which cannot occur
/// with the hard-coded dataset below.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Helper to build a [`CountyRisk`] row.
fn county(
    code: &str,
    name: &str,
    population: u64,
    region: &str,
    risk: u8,
    primary_disease: &str,
) -> CountyRisk {
    CountyRisk {
        code: code.to_owned(),
        name: name.to_owned(),
        population,
        region: region.to_owned(),
        risk,
        primary_disease: Some(primary_disease.to_owned()),
    }
}

/// Helper to build a [`DiseaseSignal`] line.
fn signal(name: &str, color: &str, mentions: [u32; 7]) -> DiseaseSignal {
    DiseaseSignal {
        name: name.to_owned(),
        color: color.to_owned(),
        mentions: mentions.to_vec(),
    }
}

/// Helper to build a [`Prediction`].
#[allow(clippy::too_many_arguments)]
fn prediction(
    county: &str,
    disease: &str,
    risk: u8,
    confidence: u8,
    peak_date: NaiveDate,
    estimated_cases: &str,
    trend: Trend,
    trend_value: i8,
) -> Prediction {
    Prediction {
        county: county.to_owned(),
        disease: disease.to_owned(),
        risk,
        confidence,
        peak_date,
        estimated_cases: estimated_cases.to_owned(),
        trend,
        trend_value,
    }
}

/// Helper to build an unhandled [`Alert`].
#[allow(clippy::too_many_arguments)]
fn alert(
    level: AlertLevel,
    title: &str,
    county: &str,
    disease: &str,
    risk: u8,
    peak_date: NaiveDate,
    affected_areas: &[&str],
    estimated_cases: &str,
    actions: &[&str],
    timestamp: &str,
) -> Alert {
    Alert {
        id: AlertId::new(),
        level,
        title: title.to_owned(),
        county: county.to_owned(),
        disease: disease.to_owned(),
        risk,
        peak_date,
        affected_areas: affected_areas.iter().map(|s| (*s).to_owned()).collect(),
        estimated_cases: estimated_cases.to_owned(),
        actions: actions.iter().map(|s| (*s).to_owned()).collect(),
        timestamp: timestamp.to_owned(),
        handled: false,
    }
}

/// Helper to build a [`TimelineEntry`].
fn entry(
    day: u8,
    date: NaiveDate,
    event: &str,
    locations: &[&str],
    confidence: u8,
    action: &str,
    urgency: AlertLevel,
) -> TimelineEntry {
    TimelineEntry {
        day,
        date,
        event: event.to_owned(),
        locations: locations.iter().map(|s| (*s).to_owned()).collect(),
        confidence,
        action: action.to_owned(),
        urgency,
    }
}

/// The process-wide, read-only demo dataset.
///
/// Construction is cheap enough to do once at startup; share the result
/// behind an `Arc`. All accessors are pure and deterministic apart from
/// the alert IDs, which are freshly generated per construction.
#[derive(Debug, Clone)]
pub struct DemoData {
    counties: Vec<CountyRisk>,
    diseases: Vec<DiseaseSignal>,
    predictions: Vec<Prediction>,
    alerts: Vec<Alert>,
    timeline: Vec<TimelineEntry>,
    user: DashboardUser,
}

impl DemoData {
    /// Build the bundled dataset.
    #[allow(clippy::too_many_lines)]
    pub fn new() -> Self {
        let counties = vec![
            county("001", "Mombasa", 1_208_333, "Coast", 72, "Cholera"),
            county("002", "Kwale", 866_820, "Coast", 23, "Cholera"),
            county("003", "Kilifi", 1_453_787, "Coast", 25, "Cholera"),
            county("004", "Tana River", 315_943, "Coast", 23, "Cholera"),
            county("005", "Lamu", 143_920, "Coast", 20, "Dengue"),
            county("006", "Taita-Taveta", 340_671, "Coast", 22, "Dengue"),
            county("007", "Garissa", 841_353, "North Eastern", 24, "Cholera"),
            county("008", "Wajir", 781_263, "North Eastern", 20, "Cholera"),
            county("009", "Mandera", 867_457, "North Eastern", 21, "Cholera"),
            county("010", "Marsabit", 459_785, "Eastern", 19, "Malaria"),
            county("011", "Isiolo", 268_002, "Eastern", 17, "Typhoid"),
            county("012", "Meru", 1_545_714, "Eastern", 19, "Typhoid"),
            county("013", "Tharaka-Nithi", 393_177, "Eastern", 15, "Typhoid"),
            county("014", "Embu", 608_599, "Eastern", 15, "Typhoid"),
            county("015", "Kitui", 1_136_187, "Eastern", 20, "Typhoid"),
            county("016", "Machakos", 1_421_932, "Eastern", 32, "Typhoid"),
            county("017", "Makueni", 987_653, "Eastern", 19, "Cholera"),
            county("018", "Nyandarua", 638_289, "Central", 16, "Flu"),
            county("019", "Nyeri", 759_164, "Central", 18, "Flu"),
            county("020", "Kirinyaga", 610_411, "Central", 16, "Typhoid"),
            county("021", "Murang'a", 1_056_640, "Central", 22, "Dengue"),
            county("022", "Kiambu", 2_417_735, "Central", 38, "Flu"),
            county("023", "Turkana", 926_976, "Rift Valley", 23, "Cholera"),
            county("024", "West Pokot", 621_241, "Rift Valley", 21, "Cholera"),
            county("025", "Samburu", 310_327, "Rift Valley", 18, "Malaria"),
            county("026", "Trans-Nzoia", 990_341, "Rift Valley", 21, "Flu"),
            county("027", "Uasin Gishu", 1_163_186, "Rift Valley", 28, "Flu"),
            county("028", "Elgeyo-Marakwet", 454_480, "Rift Valley", 17, "Malaria"),
            county("029", "Nandi", 885_711, "Rift Valley", 16, "Malaria"),
            county("030", "Baringo", 666_763, "Rift Valley", 17, "Cholera"),
            county("031", "Laikipia", 518_560, "Rift Valley", 19, "Malaria"),
            county("032", "Nakuru", 2_162_202, "Rift Valley", 45, "Flu"),
            county("033", "Narok", 1_157_873, "Rift Valley", 18, "Malaria"),
            county("034", "Kajiado", 1_117_840, "Rift Valley", 22, "Malaria"),
            county("035", "Kericho", 901_777, "Rift Valley", 17, "Flu"),
            county("036", "Bomet", 875_689, "Rift Valley", 14, "Flu"),
            county("037", "Kakamega", 1_867_579, "Western", 24, "Malaria"),
            county("038", "Vihiga", 590_013, "Western", 18, "Flu"),
            county("039", "Bungoma", 1_670_570, "Western", 20, "Malaria"),
            county("040", "Busia", 893_681, "Western", 25, "Malaria"),
            county("041", "Siaya", 993_183, "Nyanza", 27, "Malaria"),
            county("042", "Kisumu", 1_155_574, "Nyanza", 68, "Malaria"),
            county("043", "Homa Bay", 1_131_950, "Nyanza", 26, "Malaria"),
            county("044", "Migori", 1_116_436, "Nyanza", 24, "Malaria"),
            county("045", "Kisii", 1_266_860, "Nyanza", 18, "Flu"),
            county("046", "Nyamira", 605_576, "Nyanza", 15, "Typhoid"),
            county("047", "Nairobi", 4_397_073, "Nairobi", 85, "Malaria"),
        ];

        let diseases = vec![
            signal("Malaria", "#F97316", [120, 145, 167, 189, 205, 234, 267]),
            signal("Flu", "#3B82F6", [89, 92, 87, 102, 115, 134, 145]),
            signal("Cholera", "#92400E", [23, 28, 31, 29, 35, 42, 48]),
            signal("COVID-19", "#9333EA", [12, 15, 11, 13, 14, 18, 21]),
            signal("Typhoid", "#EAB308", [8, 7, 9, 11, 13, 15, 17]),
            signal("Dengue", "#EC4899", [3, 4, 2, 5, 6, 7, 9]),
        ];

        let predictions = vec![
            prediction("Nairobi", "Malaria", 85, 82, ymd(2025, 10, 30), "1,200-1,800", Trend::Up, 12),
            prediction("Mombasa", "Cholera", 72, 89, ymd(2025, 10, 28), "300-500", Trend::Up, 8),
            prediction("Kisumu", "Malaria", 68, 76, ymd(2025, 11, 2), "800-1,200", Trend::Up, 15),
            prediction("Nakuru", "Flu", 45, 68, ymd(2025, 11, 5), "500-700", Trend::Up, 5),
            prediction("Kiambu", "Flu", 38, 71, ymd(2025, 11, 3), "400-600", Trend::Down, -2),
            prediction("Machakos", "Typhoid", 32, 65, ymd(2025, 11, 8), "200-350", Trend::Up, 3),
            prediction("Uasin Gishu", "Flu", 28, 62, ymd(2025, 11, 10), "150-250", Trend::Up, 1),
            prediction("Kakamega", "Malaria", 24, 69, ymd(2025, 11, 12), "300-450", Trend::Stable, 0),
            prediction("Murang'a", "Dengue", 22, 58, ymd(2025, 11, 14), "80-120", Trend::Up, 4),
            prediction("Nyeri", "Flu", 18, 73, ymd(2025, 11, 15), "100-180", Trend::Down, -1),
        ];

        let alerts = vec![
            alert(
                AlertLevel::Critical,
                "Malaria Outbreak Imminent - Nairobi",
                "Nairobi",
                "Malaria",
                85,
                ymd(2025, 10, 30),
                &["Kibera", "Mathare", "Mukuru"],
                "1,200-1,800",
                &[
                    "Stock artemether-lumefantrine (Coartem)",
                    "Alert emergency department staff",
                    "Prepare 50+ inpatient beds",
                    "Contact county health department",
                ],
                "2 hours ago",
            ),
            alert(
                AlertLevel::Critical,
                "Cholera Outbreak Risk - Mombasa",
                "Mombasa",
                "Cholera",
                72,
                ymd(2025, 10, 28),
                &["Old Town", "Likoni", "Bangladesh"],
                "300-500",
                &[
                    "Stock ORS and IV fluids",
                    "Activate cholera treatment unit",
                    "Coordinate with water department",
                    "Prepare health education materials",
                ],
                "5 hours ago",
            ),
            alert(
                AlertLevel::High,
                "Flu Surge Expected - Kisumu",
                "Kisumu",
                "Flu",
                68,
                ymd(2025, 11, 2),
                &["Kisumu Central", "Kisumu East"],
                "800-1,200",
                &[
                    "Ensure paracetamol stock adequate",
                    "Schedule extra staff for next 2 weeks",
                    "Prepare isolation areas",
                    "Coordinate with schools (holiday period)",
                ],
                "1 day ago",
            ),
            alert(
                AlertLevel::Medium,
                "Typhoid Cases Rising - Nakuru",
                "Nakuru",
                "Typhoid",
                45,
                ymd(2025, 11, 5),
                &["Nakuru Town", "Naivasha"],
                "200-350",
                &[
                    "Monitor water quality",
                    "Stock ciprofloxacin",
                    "Educate on hand hygiene",
                    "Coordinate with public health",
                ],
                "2 days ago",
            ),
            alert(
                AlertLevel::Medium,
                "Dengue Fever Alert - Coastal Region",
                "Mombasa",
                "Dengue",
                38,
                ymd(2025, 11, 8),
                &["Mombasa", "Malindi", "Kilifi"],
                "150-250",
                &[
                    "Vector control measures",
                    "Community awareness campaigns",
                    "Stock pain relievers",
                    "Monitor severe cases",
                ],
                "3 days ago",
            ),
        ];

        let timeline = vec![
            entry(
                1,
                ymd(2025, 10, 23),
                "Malaria cases rising in Western Kenya",
                &["Kisumu", "Siaya", "Busia"],
                82,
                "Stock antimalarials",
                AlertLevel::High,
            ),
            entry(
                3,
                ymd(2025, 10, 25),
                "Flu surge predicted in Nairobi schools",
                &["Nairobi", "Kiambu"],
                76,
                "Alert school health programs",
                AlertLevel::Medium,
            ),
            entry(
                5,
                ymd(2025, 10, 27),
                "Cholera outbreak risk in Mombasa",
                &["Mombasa", "Kilifi"],
                89,
                "Critical: Prepare ORS, alert CHVs",
                AlertLevel::Critical,
            ),
            entry(
                7,
                ymd(2025, 10, 29),
                "Typhoid cases increasing in Central Kenya",
                &["Nakuru", "Nyeri"],
                68,
                "Monitor water quality",
                AlertLevel::Medium,
            ),
            entry(
                9,
                ymd(2025, 10, 31),
                "Dengue fever alert in Coastal region",
                &["Mombasa", "Malindi"],
                71,
                "Vector control measures",
                AlertLevel::Medium,
            ),
            entry(
                12,
                ymd(2025, 11, 3),
                "Flu season peak approaching nationwide",
                &["All urban counties"],
                85,
                "Increase ICU readiness",
                AlertLevel::High,
            ),
            entry(
                14,
                ymd(2025, 11, 5),
                "Malaria cases declining in Western Kenya",
                &["Kisumu", "Kakamega"],
                79,
                "Maintain vigilance",
                AlertLevel::Low,
            ),
        ];

        let user = DashboardUser {
            id: "user-123".to_owned(),
            name: "Dr. James Mwangi".to_owned(),
            email: "j.mwangi@knh.or.ke".to_owned(),
            phone: "+254712345678".to_owned(),
            role: "Hospital Administrator".to_owned(),
            organization: Organization {
                name: "Kenyatta National Hospital".to_owned(),
                kind: "Hospital".to_owned(),
                county: "Nairobi".to_owned(),
                facilities: 1,
            },
            avatar: "/avatar-placeholder.png".to_owned(),
        };

        Self {
            counties,
            diseases,
            predictions,
            alerts,
            timeline,
            user,
        }
    }

    // -----------------------------------------------------------------------
    // Raw access
    // -----------------------------------------------------------------------

    /// All 47 counties with risk scores.
    pub fn counties(&self) -> &[CountyRisk] {
        &self.counties
    }

    /// All disease signal lines.
    pub fn diseases(&self) -> &[DiseaseSignal] {
        &self.diseases
    }

    /// All bundled predictions.
    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    /// All bundled alerts (initially unhandled).
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// The 14-day outbreak timeline.
    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    /// The demo dashboard user.
    pub const fn user(&self) -> &DashboardUser {
        &self.user
    }

    // -----------------------------------------------------------------------
    // Lookup helpers
    // -----------------------------------------------------------------------

    /// Look up a county by name, case-insensitively.
    ///
    /// Returns `None` for unknown names.
    pub fn county_by_name(&self, name: &str) -> Option<&CountyRisk> {
        self.counties
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Look up a county by its three-digit code.
    pub fn county_by_code(&self, code: &str) -> Option<&CountyRisk> {
        self.counties.iter().find(|c| c.code == code)
    }

    /// Look up a disease signal by name, case-insensitively.
    ///
    /// Returns `None` for unknown names.
    pub fn disease_by_name(&self, name: &str) -> Option<&DiseaseSignal> {
        self.diseases
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
    }

    /// Predictions for a county, matched case-insensitively.
    pub fn predictions_for_county(&self, county: &str) -> Vec<&Prediction> {
        self.predictions
            .iter()
            .filter(|p| p.county.eq_ignore_ascii_case(county))
            .collect()
    }

    /// Counties with risk score 50 or above, sorted descending by risk.
    pub fn high_risk_counties(&self) -> Vec<&CountyRisk> {
        let mut high: Vec<&CountyRisk> =
            self.counties.iter().filter(|c| c.risk >= 50).collect();
        high.sort_by(|a, b| b.risk.cmp(&a.risk));
        high
    }
}

impl Default for DemoData {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Alert filters
// ---------------------------------------------------------------------------
//
// Free functions over slices so they apply equally to the pristine
// dataset and to server-side copies whose handled flags have changed.

/// Alerts not yet marked handled.
pub fn active_alerts(alerts: &[Alert]) -> Vec<&Alert> {
    alerts.iter().filter(|a| !a.handled).collect()
}

/// Critical alerts not yet marked handled.
pub fn critical_alerts(alerts: &[Alert]) -> Vec<&Alert> {
    alerts
        .iter()
        .filter(|a| a.level == AlertLevel::Critical && !a.handled)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn dataset_has_47_counties() {
        let data = DemoData::new();
        assert_eq!(data.counties().len(), 47);
    }

    #[test]
    fn county_lookup_is_case_insensitive() {
        let data = DemoData::new();
        let upper = data.county_by_name("NAIROBI").map(|c| c.risk);
        let lower = data.county_by_name("nairobi").map(|c| c.risk);
        assert_eq!(upper, Some(85));
        assert_eq!(lower, Some(85));
        assert!(data.county_by_name("Atlantis").is_none());
    }

    #[test]
    fn disease_lookup_is_case_insensitive() {
        let data = DemoData::new();
        assert!(data.disease_by_name("malaria").is_some());
        assert!(data.disease_by_name("MALARIA").is_some());
        assert!(data.disease_by_name("Scurvy").is_none());
    }

    #[test]
    fn county_code_lookup() {
        let data = DemoData::new();
        assert_eq!(data.county_by_code("047").map(|c| c.name.as_str()), Some("Nairobi"));
        assert_eq!(data.county_by_code("001").map(|c| c.name.as_str()), Some("Mombasa"));
        assert!(data.county_by_code("099").is_none());
    }

    #[test]
    fn high_risk_counties_sorted_descending() {
        let data = DemoData::new();
        let high = data.high_risk_counties();
        let names: Vec<&str> = high.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Nairobi", "Mombasa", "Kisumu"]);
        assert!(high.iter().all(|c| c.risk >= 50));
        for pair in high.windows(2) {
            if let [a, b] = pair {
                assert!(a.risk > b.risk);
            }
        }
    }

    #[test]
    fn predictions_filtered_by_county() {
        let data = DemoData::new();
        let nairobi = data.predictions_for_county("nairobi");
        assert_eq!(nairobi.len(), 1);
        assert_eq!(nairobi.first().map(|p| p.disease.as_str()), Some("Malaria"));
        assert!(data.predictions_for_county("Atlantis").is_empty());
    }

    #[test]
    fn active_alerts_excludes_handled() {
        let data = DemoData::new();
        let mut alerts = data.alerts().to_vec();
        assert_eq!(active_alerts(&alerts).len(), 5);

        if let Some(first) = alerts.first_mut() {
            first.handled = true;
        }
        let active = active_alerts(&alerts);
        assert_eq!(active.len(), 4);
        // Toggling one alert must not affect inclusion of the others.
        assert!(active.iter().all(|a| !a.handled));
    }

    #[test]
    fn critical_alerts_filters_level_and_handled() {
        let data = DemoData::new();
        let mut alerts = data.alerts().to_vec();
        assert_eq!(critical_alerts(&alerts).len(), 2);

        if let Some(first) = alerts.first_mut() {
            first.handled = true;
        }
        assert_eq!(critical_alerts(&alerts).len(), 1);
    }

    #[test]
    fn timeline_is_fourteen_day_window() {
        let data = DemoData::new();
        assert_eq!(data.timeline().len(), 7);
        assert_eq!(data.timeline().last().map(|e| e.day), Some(14));
    }
}
