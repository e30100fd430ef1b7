use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::features::districts::District;
use crate::features::i18n::Language;

/// Profile document body as stored in `users`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub gender: Option<String>,
    pub dob: Option<NaiveDate>,
    pub locality: Option<District>,
    pub language: Language,
    pub updated_at: Option<DateTime<Utc>>,
}
