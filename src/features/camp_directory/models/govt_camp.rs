use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::modules::store::Document;

/// Field names used inside each district document's `camps` array
pub mod raw_keys {
    pub const ID: &str = "id";
    pub const AREA_STAFF: &str = "Area Staff to be involved";
    pub const CAMP_DAY: &str = "CAMP DAY";
    pub const CAMP_SITE: &str = "Camp Site";
    pub const DISTANCE: &str = "Distance of the Villages covered from the Camp site";
    pub const VILLAGE: &str = "Name of the Village to be covered";
    pub const POPULATION: &str = "Population to be covered";
    pub const SESSION: &str = "FN / AN";
    pub const SOURCE_PDF: &str = "Source PDF";
    pub const CAMPS: &str = "camps";
}

const MISSING: &str = "N/A";

lazy_static! {
    static ref DECIMAL_PREFIX: Regex =
        Regex::new(r"^\s*[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap();
    static ref INTEGER_PREFIX: Regex = Regex::new(r"^\s*[+-]?\d+").unwrap();
}

/// One government-run camp session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GovtCamp {
    pub id: String,
    /// Id of the district document the camp was read from
    pub district: String,
    pub area_staff: String,
    pub camp_day: String,
    pub camp_site: String,
    /// Kilometres from the camp site; `None` when the stored value is not numeric
    pub distance_km: Option<f64>,
    pub village: String,
    /// `None` when the stored value is not numeric
    pub population: Option<i64>,
    /// `FN` (forenoon) or `AN` (afternoon) as stored
    pub session_time: String,
    pub source_pdf: String,
}

impl GovtCamp {
    /// Build a camp from one raw `camps` entry
    ///
    /// `fallback_id` is used when the entry carries no id of its own.
    pub fn from_raw(district: &str, raw: &Value, fallback_id: String) -> Self {
        let id = match raw.get(raw_keys::ID) {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => fallback_id,
        };

        Self {
            id,
            district: district.to_string(),
            area_staff: text_field(raw, raw_keys::AREA_STAFF),
            camp_day: text_field(raw, raw_keys::CAMP_DAY),
            camp_site: text_field(raw, raw_keys::CAMP_SITE),
            distance_km: raw.get(raw_keys::DISTANCE).and_then(lenient_decimal),
            village: text_field(raw, raw_keys::VILLAGE),
            population: raw.get(raw_keys::POPULATION).and_then(lenient_integer),
            session_time: text_field(raw, raw_keys::SESSION),
            source_pdf: text_field(raw, raw_keys::SOURCE_PDF),
        }
    }

    /// Population compared as `0` when unknown
    pub fn population_or_zero(&self) -> i64 {
        self.population.unwrap_or(0)
    }

    /// Distance compared as `0` when unknown
    pub fn distance_or_zero(&self) -> f64 {
        self.distance_km.unwrap_or(0.0)
    }
}

/// Flatten district documents into camps, keeping the first camp for each id
pub fn camps_from_district_documents(docs: &[Document]) -> Vec<GovtCamp> {
    let mut seen = HashSet::new();
    let mut camps = Vec::new();

    for doc in docs {
        let Some(entries) = doc.field(raw_keys::CAMPS).and_then(Value::as_array) else {
            tracing::debug!("District document '{}' has no camps array", doc.id);
            continue;
        };

        for (index, raw) in entries.iter().enumerate() {
            // Id-less entries get `{district}-{index}` so each stays a distinct camp
            let camp = GovtCamp::from_raw(&doc.id, raw, format!("{}-{}", doc.id, index));
            if seen.insert(camp.id.clone()) {
                camps.push(camp);
            } else {
                tracing::debug!("Dropping duplicate govt camp '{}'", camp.id);
            }
        }
    }

    camps
}

fn text_field(raw: &Value, key: &str) -> String {
    match raw.get(key) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => MISSING.to_string(),
    }
}

/// Leading decimal number of a value, e.g. `"4.5 km"` gives `4.5`
fn lenient_decimal(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => DECIMAL_PREFIX
            .find(s)
            .and_then(|m| m.as_str().trim().parse::<f64>().ok()),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

/// Leading integer of a value, e.g. `"1,200"` gives `1` and `1200.7` gives `1200`
fn lenient_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => INTEGER_PREFIX
            .find(s)
            .and_then(|m| m.as_str().trim().parse::<i64>().ok()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn district_doc(id: &str, camps: Value) -> Document {
        Document {
            id: id.to_string(),
            data: json!({ "camps": camps }),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_from_raw_reads_all_fields() {
        let raw = json!({
            "id": "e1",
            "Area Staff to be involved": "VHN",
            "CAMP DAY": "1st Monday",
            "Camp Site": "Perundurai",
            "Distance of the Villages covered from the Camp site": "10",
            "Name of the Village to be covered": "Kanjikoil",
            "Population to be covered": 1200,
            "FN / AN": "FN"
        });
        let camp = GovtCamp::from_raw("erode", &raw, "unused".to_string());

        assert_eq!(camp.id, "e1");
        assert_eq!(camp.district, "erode");
        assert_eq!(camp.camp_site, "Perundurai");
        assert_eq!(camp.village, "Kanjikoil");
        assert_eq!(camp.distance_km, Some(10.0));
        assert_eq!(camp.population, Some(1200));
        assert_eq!(camp.session_time, "FN");
        assert_eq!(camp.source_pdf, "N/A");
    }

    #[test]
    fn test_missing_text_fields_default_to_na() {
        let camp = GovtCamp::from_raw("salem", &json!({"Camp Site": ""}), "salem-0".to_string());
        assert_eq!(camp.id, "salem-0");
        assert_eq!(camp.camp_site, "N/A");
        assert_eq!(camp.village, "N/A");
        assert_eq!(camp.session_time, "N/A");
    }

    #[test]
    fn test_numeric_parsing_is_lenient() {
        assert_eq!(lenient_decimal(&json!("4.5 km")), Some(4.5));
        assert_eq!(lenient_decimal(&json!(" .5")), Some(0.5));
        assert_eq!(lenient_decimal(&json!("km 4")), None);
        assert_eq!(lenient_decimal(&json!(null)), None);
        assert_eq!(lenient_integer(&json!("1,200")), Some(1));
        assert_eq!(lenient_integer(&json!("800 people")), Some(800));
        assert_eq!(lenient_integer(&json!(1200.7)), Some(1200));
        assert_eq!(lenient_integer(&json!("many")), None);
        assert_eq!(lenient_integer(&json!(true)), None);
    }

    #[test]
    fn test_malformed_numbers_compare_as_zero() {
        let camp = GovtCamp::from_raw(
            "erode",
            &json!({"Population to be covered": "unknown", "Distance of the Villages covered from the Camp site": ""}),
            "x".to_string(),
        );
        assert_eq!(camp.population, None);
        assert_eq!(camp.distance_km, None);
        assert_eq!(camp.population_or_zero(), 0);
        assert_eq!(camp.distance_or_zero(), 0.0);
    }

    #[test]
    fn test_duplicates_keep_first_occurrence_across_districts() {
        let docs = vec![
            district_doc("erode", json!([{"id": "c1", "Camp Site": "First"}, {"id": "c2"}])),
            district_doc("salem", json!([{"id": "c1", "Camp Site": "Second"}, {"id": "c3"}])),
        ];

        let camps = camps_from_district_documents(&docs);
        let ids: Vec<&str> = camps.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c3"]);
        assert_eq!(camps[0].camp_site, "First");
    }

    #[test]
    fn test_camps_without_ids_are_not_collapsed() {
        let docs = vec![district_doc("erode", json!([{"Camp Site": "A"}, {"Camp Site": "B"}]))];
        let camps = camps_from_district_documents(&docs);
        assert_eq!(camps.len(), 2);
        assert_eq!(camps[0].id, "erode-0");
        assert_eq!(camps[1].id, "erode-1");
    }

    #[test]
    fn test_documents_without_camps_are_skipped() {
        let doc = Document {
            id: "empty".to_string(),
            data: json!({"camps": "not-an-array"}),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(camps_from_district_documents(&[doc]).is_empty());
    }
}
