//! Storage module for file management
//!
//! Provides local disk storage for uploaded report files.

mod local_disk;

pub use local_disk::{PendingUpload, ReportFileStorage};
