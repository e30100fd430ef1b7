use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::ScrapeError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScrapedEntry {
    pub title: String,
    pub description: String,
}

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Parsed selectors for one page layout
pub(super) struct EntryLayout {
    entry: Selector,
    title: Selector,
    description: Selector,
}

impl EntryLayout {
    pub(super) fn new(entry_selector: &str) -> Result<Self, ScrapeError> {
        Ok(Self {
            entry: parse_selector(entry_selector)?,
            title: parse_selector("h2")?,
            description: parse_selector("p")?,
        })
    }

    /// One entry per matching element: the text of its `h2`s and of its `p`s
    pub(super) fn extract(&self, html: &str) -> Vec<ScrapedEntry> {
        let document = Html::parse_document(html);

        document
            .select(&self.entry)
            .map(|element| {
                let text_of = |selector: &Selector| -> String {
                    element
                        .select(selector)
                        .flat_map(|e| e.text())
                        .collect::<String>()
                        .trim()
                        .to_string()
                };
                ScrapedEntry {
                    title: text_of(&self.title),
                    description: text_of(&self.description),
                }
            })
            .collect()
    }
}
