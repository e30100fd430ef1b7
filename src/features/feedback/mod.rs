//! Complaints and feedback about camps, plus the admin overview.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/camps/{id}/complaints` | User | File a complaint |
//! | POST | `/api/camps/{id}/feedbacks` | User | Leave feedback |
//! | GET | `/api/admin/complaints` | Org admin | Complaints about the caller's camps |
//! | GET | `/api/admin/feedbacks` | Org admin | Feedback about the caller's camps |
//! | GET | `/api/admin/overview` | Org admin | Counts for the caller's camps |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::FeedbackService;
