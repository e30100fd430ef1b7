//! Private document uploads (medical reports, NOC certificates).
//!
//! Files go to object storage under the uploader's account; metadata is kept
//! in the `uploads` collection. Downloads only happen through presigned URLs.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::DocumentService;
