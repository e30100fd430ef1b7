use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use crate::core::config::ScraperConfig;
use crate::modules::store::{collections, DocumentStore};

use super::error::ScrapeError;
use super::parser::{EntryLayout, ScrapedEntry};

const SCRAPED_DOC_ID: &str = "howData";

pub struct ScraperService {
    http_client: reqwest::Client,
    url: String,
    layout: EntryLayout,
    store: Arc<dyn DocumentStore>,
}

impl ScraperService {
    pub fn new(config: &ScraperConfig, store: Arc<dyn DocumentStore>) -> Result<Self, ScrapeError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http_client,
            url: config.url.clone(),
            layout: EntryLayout::new(&config.selector)?,
            store,
        })
    }

    async fn fetch_page(&self) -> Result<String, ScrapeError> {
        let response = self.http_client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status(status));
        }
        Ok(response.text().await?)
    }

    /// Fetch, extract and overwrite the stored snapshot
    pub async fn scrape(&self) -> Result<Vec<ScrapedEntry>, ScrapeError> {
        debug!("Scraping {}", self.url);
        let html = self.fetch_page().await?;
        let entries = self.layout.extract(&html);

        self.store
            .set(
                collections::SCRAPED_DATA,
                SCRAPED_DOC_ID,
                json!({ "data": entries }),
            )
            .await?;

        info!("Scraped {} entries from {}", entries.len(), self.url);
        Ok(entries)
    }
}
