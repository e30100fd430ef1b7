//! Health camp platform backend
//!
//! The binary in `main.rs` wires these layers into one axum server.

pub mod core;
pub mod features;
pub mod modules;
pub mod shared;
