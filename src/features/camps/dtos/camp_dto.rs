use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::camps::models::CampRecord;
use crate::features::districts::District;

/// Request DTO for creating or replacing a camp
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CampRequestDto {
    #[validate(
        length(max = 200, message = "organization_name must not exceed 200 characters"),
        regex(path = "*crate::shared::validation::NON_BLANK_REGEX", message = "organization_name is required")
    )]
    pub organization_name: String,

    #[validate(
        length(max = 200, message = "health_camp_name must not exceed 200 characters"),
        regex(path = "*crate::shared::validation::NON_BLANK_REGEX", message = "health_camp_name is required")
    )]
    pub health_camp_name: String,

    pub location: District,

    /// Day of the camp; must not be before today when creating
    pub date: DateTime<Utc>,
    pub time_from: DateTime<Utc>,
    pub time_to: DateTime<Utc>,

    #[validate(regex(path = "*crate::shared::validation::NON_BLANK_REGEX", message = "description is required"))]
    pub description: String,

    pub ambulances_available: u32,

    #[validate(regex(path = "*crate::shared::validation::NON_BLANK_REGEX", message = "hospital_nearby is required"))]
    pub hospital_nearby: String,

    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "longitude must be between -180 and 180"))]
    pub longitude: f64,

    #[validate(url(message = "registration_url must be a valid URL"))]
    pub registration_url: String,
}

/// Response DTO for a camp
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CampResponseDto {
    pub id: String,
    pub organization_name: String,
    pub health_camp_name: String,
    pub location: District,
    pub date: DateTime<Utc>,
    pub time_from: DateTime<Utc>,
    pub time_to: DateTime<Utc>,
    pub description: String,
    pub ambulances_available: u32,
    pub hospital_nearby: String,
    pub latitude: f64,
    pub longitude: f64,
    pub registration_url: String,
    pub admin_id: String,
    pub created_at: DateTime<Utc>,
    /// The camp's day is today or later
    pub is_active: bool,
}

impl CampResponseDto {
    pub fn from_record(record: CampRecord, today: NaiveDate) -> Self {
        let is_active = record.camp.is_active_on(today);
        let c = record.camp;
        Self {
            id: record.id,
            organization_name: c.organization_name,
            health_camp_name: c.health_camp_name,
            location: c.location,
            date: c.date,
            time_from: c.time_from,
            time_to: c.time_to,
            description: c.description,
            ambulances_available: c.ambulances_available,
            hospital_nearby: c.hospital_nearby,
            latitude: c.latitude,
            longitude: c.longitude,
            registration_url: c.registration_url,
            admin_id: c.admin_id,
            created_at: c.created_at,
            is_active,
        }
    }
}

/// Query params for listing camps
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct CampListQuery {
    /// Case-insensitive substring of the camp name
    pub search: Option<String>,
    /// Start of the date range; ignored unless `date_to` is also given
    pub date_from: Option<NaiveDate>,
    /// End of the date range; ignored unless `date_from` is also given
    pub date_to: Option<NaiveDate>,
    /// Comma-separated district names
    pub locations: Option<String>,
    /// Comma-separated exact camp names
    pub names: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionField {
    Location,
    Name,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SuggestionQuery {
    pub field: SuggestionField,
    /// Substring to match, case-insensitive
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct NotificationQuery {
    /// District the user lives in
    pub locality: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CampNotificationDto {
    pub locality: District,
    pub has_camps: bool,
    pub count: usize,
}
