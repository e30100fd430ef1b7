use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::camp_directory::{FilterState, GovtCamp, SessionTime};
use crate::shared::validation::validate_finite;

/// Query parameters for the government camp directory
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
pub struct DirectoryQuery {
    /// Case-insensitive substring of the camp site or village
    pub search: Option<String>,

    /// `FN` (morning) or `AN` (afternoon)
    pub session: Option<SessionTime>,

    /// Minimum population to be covered
    #[validate(range(min = 0, message = "min_population must not be negative"))]
    pub min_population: Option<i64>,

    /// Maximum distance in kilometres
    #[validate(
        range(min = 0.0, message = "max_distance must not be negative"),
        custom(function = "validate_finite")
    )]
    pub max_distance: Option<f64>,
}

impl From<DirectoryQuery> for FilterState {
    fn from(q: DirectoryQuery) -> Self {
        Self {
            search_text: q.search.unwrap_or_default(),
            session_time: q.session,
            min_population: q.min_population,
            max_distance: q.max_distance,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DirectoryListDto {
    /// Camps loaded before filtering
    pub total_loaded: usize,
    pub camps: Vec<GovtCamp>,
}
