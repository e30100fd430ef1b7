use std::collections::{BTreeMap, HashMap};

use lazy_static::lazy_static;

use super::language::Language;

type Table = HashMap<String, String>;

lazy_static! {
    static ref TABLES: HashMap<Language, Table> = Language::ALL
        .into_iter()
        .map(|language| (language, parse_table(language)))
        .collect();
}

fn source(language: Language) -> &'static str {
    match language {
        Language::En => include_str!("../../../locales/en.json"),
        Language::Fr => include_str!("../../../locales/fr.json"),
        Language::Es => include_str!("../../../locales/es.json"),
        Language::Ta => include_str!("../../../locales/ta.json"),
    }
}

fn parse_table(language: Language) -> Table {
    serde_json::from_str(source(language)).unwrap_or_else(|e| {
        tracing::error!("Translation table for '{}' is invalid: {}", language, e);
        Table::new()
    })
}

/// Read access to the bundled translation tables
pub struct Catalog;

impl Catalog {
    pub fn lookup(language: Language, key: &str) -> Option<&'static str> {
        TABLES
            .get(&language)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// Whole table for one language, sorted by key
    pub fn entries(language: Language) -> BTreeMap<&'static str, &'static str> {
        TABLES
            .get(&language)
            .map(|table| {
                table
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn keys(language: Language) -> BTreeSet<&'static str> {
        Catalog::entries(language).into_keys().collect()
    }

    #[test]
    fn test_all_tables_parse() {
        for language in Language::ALL {
            assert!(
                !Catalog::entries(language).is_empty(),
                "table for {} is empty",
                language
            );
        }
    }

    #[test]
    fn test_all_tables_share_the_english_key_set() {
        let english = keys(Language::En);
        for language in [Language::Fr, Language::Es, Language::Ta] {
            assert_eq!(keys(language), english, "key mismatch for {}", language);
        }
    }

    #[test]
    fn test_lookup_missing_key() {
        assert_eq!(Catalog::lookup(Language::En, "definitely_missing"), None);
        assert_eq!(Catalog::lookup(Language::Es, "hygiene"), Some("Higiene"));
    }
}
