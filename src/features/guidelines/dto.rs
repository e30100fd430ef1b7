use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::guidelines::model::{GuidelineCategory, TITLE_KEY};
use crate::features::guidelines::GUIDELINES;
use crate::features::i18n::{Language, LanguageContext};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GuidelineCategoryDto {
    /// Stable identifier, independent of language
    pub key: String,
    pub category: String,
    pub measures: Vec<String>,
}

impl GuidelineCategoryDto {
    fn localized(category: &GuidelineCategory, lang: &LanguageContext) -> Self {
        Self {
            key: category.key.to_string(),
            category: lang.translate(category.key).to_string(),
            measures: category
                .measures
                .iter()
                .map(|m| lang.translate(m).to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GuidelinesDto {
    pub language: Language,
    pub title: String,
    pub categories: Vec<GuidelineCategoryDto>,
}

impl GuidelinesDto {
    pub fn localized(lang: &LanguageContext) -> Self {
        Self {
            language: lang.language(),
            title: lang.translate(TITLE_KEY).to_string(),
            categories: GUIDELINES
                .iter()
                .map(|c| GuidelineCategoryDto::localized(c, lang))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::i18n::Catalog;

    #[test]
    fn test_every_key_is_translated() {
        for language in Language::ALL {
            for category in &GUIDELINES {
                assert!(Catalog::lookup(language, category.key).is_some());
                for measure in category.measures {
                    assert!(
                        Catalog::lookup(language, measure).is_some(),
                        "{} missing in {}",
                        measure,
                        language
                    );
                }
            }
        }
    }

    #[test]
    fn test_english_guidelines() {
        let dto = GuidelinesDto::localized(&LanguageContext::new(Language::En));
        assert_eq!(dto.title, "Health Guidelines & Safety Measures");
        assert_eq!(dto.categories.len(), 4);
        assert_eq!(dto.categories[3].category, "Vaccination & Checkups");
        assert_eq!(
            dto.categories[0].measures[0],
            "Wash hands regularly with soap and water."
        );
    }
}
