//! Health camps created by organization administrators.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/camps` | No | List camps with filters |
//! | GET | `/api/camps/suggestions` | No | Location / name suggestions |
//! | GET | `/api/camps/notifications` | No | Whether a locality has camps |
//! | GET | `/api/camps/{id}` | No | Camp details |
//! | POST | `/api/camps` | Org admin | Create a camp |
//! | GET | `/api/admin/camps` | Org admin | Camps created by the caller |
//! | PUT | `/api/admin/camps/{id}` | Owner | Replace a camp |
//! | DELETE | `/api/admin/camps/{id}` | Owner | Delete a camp (no cascade) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::CampRecord;
pub use services::CampService;
