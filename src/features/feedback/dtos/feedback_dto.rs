use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitMessageDto {
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,

    #[validate(
        length(max = 2000, message = "Message must not exceed 2000 characters"),
        regex(path = "*crate::shared::validation::NON_BLANK_REGEX", message = "Message is required")
    )]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CampMessageResponseDto {
    pub id: String,
    pub email: String,
    pub message: String,
    pub health_camp_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camp_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Counts across the caller's camps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdminOverviewDto {
    pub total_camps: usize,
    pub active_camps: usize,
    pub registrations: usize,
    pub verified_registrations: usize,
    pub complaints: usize,
    pub feedbacks: usize,
}
