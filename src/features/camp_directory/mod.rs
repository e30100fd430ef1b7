//! Government camp directory.
//!
//! Camps published by the district health programme are stored as one
//! `govtdata` document per district, each holding a `camps` array. This
//! feature flattens those documents, removes duplicates, and filters the
//! result through a small typed view model.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/govt-camps` | No | Filtered government camp list |
//! | GET | `/api/govt-camps/{id}` | No | One camp, opened through the view model |

pub mod dtos;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod navigation;
pub mod routes;
pub mod services;
pub mod view_model;

pub use filter::{apply_filters, FilterState, SessionTime};
pub use models::GovtCamp;
pub use services::DirectoryService;
pub use view_model::{DirectoryEvent, DirectoryViewModel, Effect, LoadState};
