//! Scraper for the state health mission's programme page.
//!
//! `GET /scrape` fetches the configured page, extracts one entry per element
//! matching the configured selector and stores the result at
//! `scrapedData/howData`.

mod error;
pub mod handler;
mod parser;
pub mod routes;
mod service;

pub use error::ScrapeError;
pub use parser::ScrapedEntry;
pub use service::ScraperService;
