//! Features layer - one module per user-facing capability
//!
//! Each feature owns its DTOs, handlers, services and routes.

pub mod auth;
pub mod camp_directory;
pub mod camps;
pub mod districts;
pub mod documents;
pub mod emergency;
pub mod feedback;
pub mod govt_import;
pub mod guidelines;
pub mod i18n;
pub mod registrations;
pub mod scraper;
pub mod users;
