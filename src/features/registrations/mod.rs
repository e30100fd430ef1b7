//! Camp registrations and the per-camp registration report.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/camps/{id}/registrations` | User | Register for a camp |
//! | GET | `/api/me/registrations` | User | Caller's registrations by profile email |
//! | GET | `/api/admin/registrations` | Org admin | Registrations for the caller's camps |
//! | PATCH | `/api/admin/registrations/{id}/verify` | Camp owner | Mark as verified |
//! | GET | `/api/admin/registrations/report.csv` | Org admin | Report as CSV |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::RegistrationService;
