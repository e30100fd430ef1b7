use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::districts::District;
use crate::features::i18n::Language;
use crate::features::users::models::UserProfile;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponseDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<District>,
    pub language: Language,
    pub roles: Vec<String>,
}

impl ProfileResponseDto {
    pub fn from_profile(id: &str, profile: UserProfile, roles: Vec<String>) -> Self {
        Self {
            id: id.to_string(),
            name: profile.full_name,
            email: profile.email,
            phone: profile.phone_number,
            gender: profile.gender,
            date_of_birth: profile.dob,
            locality: profile.locality,
            language: profile.language,
            roles,
        }
    }
}

/// Request DTO for replacing profile details; the language is kept
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileDto {
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

    #[validate(length(max = 32, message = "Gender must not exceed 32 characters"))]
    pub gender: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    pub locality: Option<District>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateLanguageDto {
    pub language: Language,
}
