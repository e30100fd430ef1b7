use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::registrations::models::RegistrationRecord;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(
        length(max = 128, message = "Name must not exceed 128 characters"),
        regex(path = "*crate::shared::validation::NON_BLANK_REGEX", message = "Name is required")
    )]
    pub name: String,

    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,

    #[validate(regex(
        path = "*crate::shared::validation::PHONE_REGEX",
        message = "Phone must be 10-13 digits, optionally starting with +"
    ))]
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponseDto {
    pub id: String,
    pub camp_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<RegistrationRecord> for RegistrationResponseDto {
    fn from(record: RegistrationRecord) -> Self {
        let r = record.registration;
        Self {
            id: record.id,
            camp_id: r.camp_id,
            name: r.name,
            email: r.email,
            phone: r.phone,
            verified: r.verified,
            created_at: r.created_at,
        }
    }
}

/// Registration counts for one camp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CampReportDto {
    pub camp_id: String,
    pub camp_name: String,
    pub total_registrations: usize,
    pub verified_registrations: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminRegistrationsDto {
    pub registrations: Vec<RegistrationResponseDto>,
    /// One entry per owned camp, including camps without registrations
    pub reports: Vec<CampReportDto>,
}

/// A camp the caller registered for
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisteredCampDto {
    pub registration_id: String,
    pub camp_id: String,
    pub health_camp_name: String,
    pub date: DateTime<Utc>,
    pub verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MyRegistrationsDto {
    pub registered: Vec<RegisteredCampDto>,
    pub verified: Vec<RegisteredCampDto>,
}
