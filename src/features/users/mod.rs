//! User profile management feature.
//!
//! Profiles live in the `users` collection keyed by account id. A caller
//! without a stored profile gets an empty one carrying the token email.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/me/profile` | Get the caller's profile |
//! | PUT | `/api/me/profile` | Replace profile details |
//! | PUT | `/api/me/language` | Set the preferred language |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UserProfileService;
