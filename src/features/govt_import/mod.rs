//! Government schedule import.
//!
//! District health offices publish monthly camp schedules as tables whose
//! rows name the camp day ("2nd Tuesday"), the session, the site, the
//! villages covered and the staff involved. Admins paste those rows here;
//! each recognised row is appended to the district's `govtdata` document in
//! the shape the camp directory reads.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/admin/govt-camps/import` | Org admin | Parse and append schedule rows |

pub mod dtos;
pub mod handlers;
pub mod parser;
pub mod routes;
pub mod services;

pub use services::GovtImportService;
