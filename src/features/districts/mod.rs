//! The 37 districts of Tamil Nadu that camps can be held in.

pub mod handler;
pub mod model;
pub mod routes;

pub use model::District;
