//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the document store and object storage adapters.

pub mod storage;
pub mod store;
