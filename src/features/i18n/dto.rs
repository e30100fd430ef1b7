use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Language;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LanguageDto {
    pub code: Language,
    pub name: String,
}

impl From<Language> for LanguageDto {
    fn from(language: Language) -> Self {
        Self {
            code: language,
            name: language.native_name().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TranslationsDto {
    pub language: Language,
    pub entries: BTreeMap<String, String>,
}
