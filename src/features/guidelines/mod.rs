//! Localized health guidelines.
//!
//! Static content: four categories with four measures each, rendered in the
//! request's language.

pub mod dto;
pub mod handler;
pub mod model;
pub mod routes;

pub use model::GUIDELINES;
