use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{NewReport, Report, ReportChanges};
use crate::features::reports::store::ReportStore;

/// Report store backed by a `Vec`, lost on restart
#[derive(Debug, Default)]
pub struct InMemoryReportStore {
    reports: RwLock<Vec<Report>>,
}

impl InMemoryReportStore {
    pub fn new(reports: Vec<Report>) -> Self {
        Self {
            reports: RwLock::new(reports),
        }
    }

    fn next_id(reports: &[Report]) -> Result<String> {
        reports
            .iter()
            .filter_map(Report::numeric_id)
            .max()
            .map(|max| (max + 1).to_string())
            .ok_or_else(|| {
                AppError::Internal("Cannot assign report id: store has no numeric ids".to_string())
            })
    }
}

#[async_trait]
impl ReportStore for InMemoryReportStore {
    async fn list_all(&self) -> Result<Vec<Report>> {
        Ok(self.reports.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Report>> {
        let reports = self.reports.read().await;
        Ok(reports.iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, report: NewReport) -> Result<Report> {
        let mut reports = self.reports.write().await;
        let id = Self::next_id(&reports)?;
        let report = report.into_report(id);
        reports.push(report.clone());
        debug!("Report stored: id={}, total={}", report.id, reports.len());
        Ok(report)
    }

    async fn update(&self, id: &str, changes: ReportChanges) -> Result<Option<Report>> {
        let mut reports = self.reports.write().await;
        let Some(report) = reports.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        changes.apply_to(report);
        Ok(Some(report.clone()))
    }

    async fn delete(&self, id: &str) -> Result<Option<Report>> {
        let mut reports = self.reports.write().await;
        Ok(reports
            .iter()
            .position(|r| r.id == id)
            .map(|index| reports.remove(index)))
    }
}
