use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::models::GovtCamp;

/// Camp session of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SessionTime {
    /// Forenoon session, stored as `FN`
    #[serde(rename = "FN", alias = "morning")]
    Morning,
    /// Afternoon session, stored as `AN`
    #[serde(rename = "AN", alias = "afternoon")]
    Afternoon,
}

impl SessionTime {
    pub fn tag(self) -> &'static str {
        match self {
            SessionTime::Morning => "FN",
            SessionTime::Afternoon => "AN",
        }
    }
}

/// User-entered directory filters; the default filters nothing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search_text: String,
    pub session_time: Option<SessionTime>,
    pub min_population: Option<i64>,
    pub max_distance: Option<f64>,
}

impl FilterState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a single camp passes every active predicate
    pub fn matches(&self, camp: &GovtCamp) -> bool {
        self.matches_search(camp)
            && self
                .session_time
                .is_none_or(|session| camp.session_time == session.tag())
            && self
                .min_population
                .is_none_or(|min| camp.population_or_zero() >= min)
            && self
                .max_distance
                .is_none_or(|max| camp.distance_or_zero() <= max)
    }

    fn matches_search(&self, camp: &GovtCamp) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        camp.camp_site.to_lowercase().contains(&needle)
            || camp.village.to_lowercase().contains(&needle)
    }
}

/// Stable filter: the result keeps the relative order of `camps`
pub fn apply_filters<'a>(camps: &'a [GovtCamp], filter: &FilterState) -> Vec<&'a GovtCamp> {
    camps.iter().filter(|camp| filter.matches(camp)).collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn camp(
        id: &str,
        site: &str,
        village: &str,
        population: Option<i64>,
        distance: Option<f64>,
        session: &str,
    ) -> GovtCamp {
        GovtCamp {
            id: id.to_string(),
            district: "test".to_string(),
            area_staff: "N/A".to_string(),
            camp_day: "N/A".to_string(),
            camp_site: site.to_string(),
            distance_km: distance,
            village: village.to_string(),
            population,
            session_time: session.to_string(),
            source_pdf: "N/A".to_string(),
        }
    }

    /// Erode Camp (Perundurai, 1200, 10 km, FN) then Salem Camp (Attur, 800, 5 km, AN)
    pub fn erode_and_salem() -> Vec<GovtCamp> {
        vec![
            camp("erode-1", "Erode Camp", "Perundurai", Some(1200), Some(10.0), "FN"),
            camp("salem-1", "Salem Camp", "Attur", Some(800), Some(5.0), "AN"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{camp, erode_and_salem};
    use super::*;

    fn ids(camps: Vec<&GovtCamp>) -> Vec<&str> {
        camps.into_iter().map(|c| c.id.as_str()).collect()
    }

    fn sample() -> Vec<GovtCamp> {
        vec![
            camp("a", "Bhavani GH", "Kalingarayanpalayam", Some(2500), Some(3.0), "FN"),
            camp("b", "Gobi PHC", "Bhavani Sagar", Some(900), Some(12.5), "AN"),
            camp("c", "N/A", "Kodumudi", None, None, "FN"),
            camp("d", "Sathy", "Bhavanisagar", Some(1000), Some(8.0), "AN"),
            camp("e", "Anthiyur", "Athani", Some(400), Some(0.5), "FN "),
        ]
    }

    #[test]
    fn test_default_filter_is_identity() {
        let camps = sample();
        let filter = FilterState::default();
        assert_eq!(filter, FilterState::default());
        assert_eq!(apply_filters(&camps, &filter), camps.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_search_is_case_insensitive_over_site_or_village() {
        let camps = sample();
        let filter = FilterState {
            search_text: "BHAVANI".to_string(),
            ..Default::default()
        };

        let result = apply_filters(&camps, &filter);
        assert_eq!(ids(result.clone()), vec!["a", "b", "d"]);
        for camp in &camps {
            let hit = camp.camp_site.to_lowercase().contains("bhavani")
                || camp.village.to_lowercase().contains("bhavani");
            assert_eq!(result.contains(&camp), hit, "camp {}", camp.id);
        }
    }

    #[test]
    fn test_session_tag_must_match_exactly() {
        let camps = sample();
        let morning = FilterState {
            session_time: Some(SessionTime::Morning),
            ..Default::default()
        };
        // "FN " with trailing space is not a forenoon session
        assert_eq!(ids(apply_filters(&camps, &morning)), vec!["a", "c"]);

        let afternoon = FilterState {
            session_time: Some(SessionTime::Afternoon),
            ..Default::default()
        };
        assert_eq!(ids(apply_filters(&camps, &afternoon)), vec!["b", "d"]);
    }

    #[test]
    fn test_min_population_never_yields_smaller_population() {
        let camps = sample();
        let filter = FilterState {
            min_population: Some(1000),
            ..Default::default()
        };
        let result = apply_filters(&camps, &filter);
        assert_eq!(ids(result.clone()), vec!["a", "d"]);
        assert!(result.iter().all(|c| c.population_or_zero() >= 1000));
    }

    #[test]
    fn test_unknown_numbers_count_as_zero() {
        let camps = sample();

        let distance = FilterState {
            max_distance: Some(1.0),
            ..Default::default()
        };
        // "c" has no distance and passes as 0
        assert_eq!(ids(apply_filters(&camps, &distance)), vec!["c", "e"]);

        let population = FilterState {
            min_population: Some(0),
            ..Default::default()
        };
        assert_eq!(apply_filters(&camps, &population).len(), camps.len());
    }

    #[test]
    fn test_filters_compose_with_and() {
        let camps = sample();
        let filter = FilterState {
            search_text: "bhavani".to_string(),
            session_time: Some(SessionTime::Afternoon),
            min_population: Some(950),
            max_distance: Some(10.0),
        };
        assert_eq!(ids(apply_filters(&camps, &filter)), vec!["d"]);
    }

    #[test]
    fn test_apply_filters_is_idempotent_and_pure() {
        let camps = sample();
        let before = camps.clone();
        let filter = FilterState {
            max_distance: Some(9.0),
            ..Default::default()
        };

        let once: Vec<GovtCamp> = apply_filters(&camps, &filter).into_iter().cloned().collect();
        let twice: Vec<GovtCamp> = apply_filters(&once, &filter).into_iter().cloned().collect();
        assert_eq!(once, twice);
        assert_eq!(camps, before);
    }

    #[test]
    fn test_erode_salem_scenario() {
        let camps = erode_and_salem();

        let mut filter = FilterState {
            session_time: Some(SessionTime::Morning),
            ..Default::default()
        };
        assert_eq!(ids(apply_filters(&camps, &filter)), vec!["erode-1"]);

        filter = FilterState {
            min_population: Some(1000),
            ..Default::default()
        };
        assert_eq!(ids(apply_filters(&camps, &filter)), vec!["erode-1"]);

        filter = FilterState {
            search_text: "salem".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(apply_filters(&camps, &filter)), vec!["salem-1"]);

        filter.search_text = "perundurai".to_string();
        assert_eq!(ids(apply_filters(&camps, &filter)), vec!["erode-1"]);

        filter.clear();
        assert_eq!(filter, FilterState::default());
        assert_eq!(ids(apply_filters(&camps, &filter)), vec!["erode-1", "salem-1"]);
    }

    #[test]
    fn test_session_time_serde_tags() {
        let tag: SessionTime = serde_json::from_str("\"FN\"").unwrap();
        assert_eq!(tag, SessionTime::Morning);
        let alias: SessionTime = serde_json::from_str("\"afternoon\"").unwrap();
        assert_eq!(alias, SessionTime::Afternoon);
        assert_eq!(serde_json::to_string(&SessionTime::Afternoon).unwrap(), "\"AN\"");
    }
}
