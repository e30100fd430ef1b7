//! Emergency helpers: nearby hospitals and pharmacies, and an SOS message.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/emergency/nearby` | Places within the configured radius |
//! | GET | `/api/emergency/sos` | Emergency number, message and `sms:` link |

mod client;
pub mod dto;
pub mod handler;
mod model;
pub mod routes;
mod service;

pub use client::{GeoapifyClient, PlaceSearch, RawPlace};
pub use model::PlaceKind;
pub use service::EmergencyService;
