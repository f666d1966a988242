//! Financial report records and their uploaded HTML files.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/reports` | List all reports |
//! | GET | `/api/reports/{id}` | Get one report |
//! | POST | `/api/reports` | Upload an HTML report (multipart) |
//! | PUT | `/api/reports/{id}` | Update title and/or publish date |
//! | DELETE | `/api/reports/{id}` | Delete a report and its file |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;


pub use services::ReportService;
pub use store::{InMemoryReportStore, ReportStore};
