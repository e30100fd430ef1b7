use thiserror::Error;

use crate::modules::store::StoreError;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    #[error("Failed to fetch page: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Page returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to store scraped data: {0}")]
    Store(#[from] StoreError),
}
