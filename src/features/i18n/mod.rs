//! Localization: embedded translation tables and the per-request language.
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/i18n/languages` | No | Supported languages |
//! | GET | `/api/i18n/{lang}` | No | Full translation table for a language |

mod catalog;
mod language;

pub mod dto;
pub mod handler;
pub mod routes;

pub use catalog::Catalog;
pub use language::{Language, LanguageContext};
