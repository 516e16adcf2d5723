//! View models for the admission API.
//!
//! Department maps keep their JSON keys as plain strings so an unexpected key
//! from the backend never fails a whole payload; lookups go through
//! [`Department`].

use std::collections::HashMap;
use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

/// The four departments the college admits into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    ScienceBengali,
    ScienceEnglish,
    Humanities,
    BusinessStudies,
}

impl Department {
    /// Order of the statistics panel slots.
    pub const STATS_ORDER: [Department; 4] = [
        Department::ScienceBengali,
        Department::ScienceEnglish,
        Department::Humanities,
        Department::BusinessStudies,
    ];

    /// Order of the fee-structure table rows.
    pub const FEE_TABLE_ORDER: [Department; 4] = [
        Department::ScienceBengali,
        Department::ScienceEnglish,
        Department::BusinessStudies,
        Department::Humanities,
    ];

    /// JSON key used by the backend.
    pub fn key(&self) -> &'static str {
        match self {
            Department::ScienceBengali => "science_bengali",
            Department::ScienceEnglish => "science_english",
            Department::Humanities => "humanities",
            Department::BusinessStudies => "business_studies",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "science_bengali" => Some(Department::ScienceBengali),
            "science_english" => Some(Department::ScienceEnglish),
            "humanities" => Some(Department::Humanities),
            "business_studies" => Some(Department::BusinessStudies),
            _ => None,
        }
    }

    /// Full English name used in the fee table.
    pub fn display_name(&self) -> &'static str {
        match self {
            Department::ScienceBengali => "Science (Bengali Medium)",
            Department::ScienceEnglish => "Science (English Version)",
            Department::Humanities => "Humanities",
            Department::BusinessStudies => "Business Studies",
        }
    }

    pub fn bengali_name(&self) -> &'static str {
        match self {
            Department::ScienceBengali => "বিজ্ঞান বিভাগ (বাংলা মাধ্যম)",
            Department::ScienceEnglish => "বিজ্ঞান বিভাগ (ইংরেজি ভার্সন)",
            Department::Humanities => "মানবিক বিভাগ",
            Department::BusinessStudies => "ব্যবসায় শিক্ষা বিভাগ",
        }
    }

    /// Short label under a statistics counter.
    pub fn stats_label(&self) -> &'static str {
        match self {
            Department::ScienceBengali => "Science (Bengali)",
            Department::ScienceEnglish => "Science (English)",
            Department::Humanities => "Humanities",
            Department::BusinessStudies => "Business Studies",
        }
    }
}

/// One department's admission cost, in whole taka.
///
/// `grand_total` is whatever the backend says it is; it is never recomputed
/// from the other five fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub admission_fee: u64,
    pub tuition_fee: u64,
    pub july_board_registration: u64,
    pub hostel_bag_online_charge: u64,
    pub online_charge_1_percent: u64,
    pub grand_total: u64,
}

/// Admission metadata cached for the fee modal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdmissionInfo {
    #[serde(default)]
    pub fee_structure: HashMap<String, FeeBreakdown>,
}

impl AdmissionInfo {
    pub fn fee_for(&self, department: Department) -> Option<&FeeBreakdown> {
        self.fee_structure.get(department.key())
    }
}

/// Envelope returned by `GET /api/admission/info`. Other top-level fields
/// (college details) are ignored.
#[derive(Debug, Deserialize)]
pub struct AdmissionInfoResponse {
    pub admission_info: AdmissionInfo,
}

/// Aggregate counts returned by `GET /api/admission/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_selected: u64,
    #[serde(default)]
    pub departments: HashMap<String, u64>,
}

impl Stats {
    /// Count for a department, zero when the backend omitted it.
    pub fn count(&self, department: Department) -> u64 {
        self.departments
            .get(department.key())
            .copied()
            .unwrap_or(0)
    }
}

/// Result of `GET /api/admission/search?roll=...`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(deserialize_with = "string_or_number")]
    pub roll_number: String,
    pub selected: bool,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub department_bengali: Option<String>,
    #[serde(default)]
    pub fee_info: Option<FeeBreakdown>,
}

/// The backend echoes the roll number back as a JSON integer; accept either.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct RollVisitor;

    impl<'de> de::Visitor<'de> for RollVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a roll number as a string or integer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(RollVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_key_round_trip() {
        for dept in Department::STATS_ORDER {
            assert_eq!(Department::from_key(dept.key()), Some(dept));
        }
        assert_eq!(Department::from_key("engineering"), None);
    }

    #[test]
    fn test_orders_cover_all_departments() {
        for dept in Department::STATS_ORDER {
            assert!(Department::FEE_TABLE_ORDER.contains(&dept));
        }
        assert_eq!(Department::FEE_TABLE_ORDER[2], Department::BusinessStudies);
        assert_eq!(Department::FEE_TABLE_ORDER[3], Department::Humanities);
    }

    #[test]
    fn test_parse_info_envelope_ignores_college_info() {
        let json = r#"{
            "college_info": {"name": "Notre Dame College", "established": 1949},
            "admission_info": {
                "session": "2025-2026",
                "fee_structure": {
                    "science_bengali": {"admission_fee": 1000, "tuition_fee": 2000, "july_board_registration": 300, "hostel_bag_online_charge": 150, "online_charge_1_percent": 35, "grand_total": 3485}
                }
            }
        }"#;

        let resp: AdmissionInfoResponse =
            serde_json::from_str(json).expect("Failed to parse info test JSON");
        let fee = resp
            .admission_info
            .fee_for(Department::ScienceBengali)
            .expect("science_bengali present");
        assert_eq!(fee.grand_total, 3485);
        assert!(resp.admission_info.fee_for(Department::Humanities).is_none());
    }

    #[test]
    fn test_stats_missing_department_counts_zero() {
        let json = r#"{"total_selected": 500, "departments": {"science_bengali": 120, "humanities": 80}}"#;
        let stats: Stats = serde_json::from_str(json).expect("Failed to parse stats test JSON");
        assert_eq!(stats.total_selected, 500);
        assert_eq!(stats.count(Department::ScienceBengali), 120);
        assert_eq!(stats.count(Department::Humanities), 80);
        assert_eq!(stats.count(Department::ScienceEnglish), 0);
        assert_eq!(stats.count(Department::BusinessStudies), 0);
    }

    #[test]
    fn test_search_result_roll_number_as_integer() {
        let json = r#"{"roll_number": 12345, "selected": false, "department": null, "department_bengali": null, "fee_info": null}"#;
        let result: SearchResult =
            serde_json::from_str(json).expect("Failed to parse search test JSON");
        assert_eq!(result.roll_number, "12345");
        assert!(!result.selected);
        assert!(result.fee_info.is_none());
    }

    #[test]
    fn test_search_result_minimal_not_selected() {
        let json = r#"{"roll_number": "12345", "selected": false}"#;
        let result: SearchResult =
            serde_json::from_str(json).expect("Failed to parse search test JSON");
        assert_eq!(result.roll_number, "12345");
        assert!(result.department.is_none());
    }

    #[test]
    fn test_search_result_selected_with_fees() {
        let json = r#"{
            "roll_number": "67890", "selected": true,
            "department": "Science", "department_bengali": "বিজ্ঞান",
            "fee_info": {"admission_fee": 1000, "tuition_fee": 2000, "july_board_registration": 300, "hostel_bag_online_charge": 150, "online_charge_1_percent": 35, "grand_total": 3485}
        }"#;
        let result: SearchResult =
            serde_json::from_str(json).expect("Failed to parse search test JSON");
        assert!(result.selected);
        assert_eq!(result.department_bengali.as_deref(), Some("বিজ্ঞান"));
        assert_eq!(result.fee_info.map(|f| f.online_charge_1_percent), Some(35));
    }
}
