//! Report persistence abstraction
//!
//! Handlers and services only see [`ReportStore`]; the in-memory backend is
//! the only implementation today.

mod memory_store;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::reports::models::{NewReport, Report, ReportChanges};

pub use memory_store::InMemoryReportStore;

#[async_trait]
pub trait ReportStore: Send + Sync {
    /// All reports in insertion order
    async fn list_all(&self) -> Result<Vec<Report>>;

    async fn get_by_id(&self, id: &str) -> Result<Option<Report>>;

    /// Assigns the next id (highest numeric id + 1) and appends the report.
    ///
    /// # Errors
    ///
    /// Fails when the store holds no numeric id to continue from.
    async fn create(&self, report: NewReport) -> Result<Report>;

    /// Applies the changes in place, returning the updated report or `None` if absent
    async fn update(&self, id: &str, changes: ReportChanges) -> Result<Option<Report>>;

    /// Removes the report, returning it or `None` if absent
    async fn delete(&self, id: &str) -> Result<Option<Report>>;
}
