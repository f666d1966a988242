use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::{CreateReportDto, UpdateReportDto};
use crate::features::reports::models::{NewReport, Report, ReportChanges};
use crate::features::reports::store::ReportStore;
use crate::modules::storage::{PendingUpload, ReportFileStorage};
use crate::shared::datetime::{current_timestamp, format_display_date};

/// Service for report metadata and the files behind it
pub struct ReportService {
    store: Arc<dyn ReportStore>,
    files: Arc<ReportFileStorage>,
}

impl ReportService {
    pub fn new(store: Arc<dyn ReportStore>, files: Arc<ReportFileStorage>) -> Self {
        Self { store, files }
    }

    pub async fn list_all(&self) -> Result<Vec<Report>> {
        self.store.list_all().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Report> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    /// Open a file for an incoming upload
    pub async fn begin_upload(&self, original_filename: Option<&str>) -> Result<PendingUpload> {
        self.files.create(original_filename).await
    }

    /// Create a report from a finished upload and its form fields
    ///
    /// The upload is only kept on disk when the report was stored; on any
    /// error it is discarded together with the guard.
    pub async fn create(
        &self,
        dto: CreateReportDto,
        upload: Option<PendingUpload>,
    ) -> Result<Report> {
        let mut upload =
            upload.ok_or_else(|| AppError::Validation("Please upload an HTML file".to_string()))?;

        dto.validate().map_err(|_| {
            AppError::Validation("title and publishDate are required".to_string())
        })?;

        upload.finish().await?;

        let now = current_timestamp();
        let new_report = NewReport {
            display_date: format_display_date(&dto.publish_date),
            title: dto.title,
            publish_date: dto.publish_date,
            file_path: upload.public_path().to_string(),
            create_time: now.clone(),
            update_time: now,
        };

        let report = self.store.create(new_report).await?;
        let size = upload.size();
        upload.commit();

        info!(
            "Report created: id={}, file={}, size={}",
            report.id, report.file_path, size
        );

        Ok(report)
    }

    /// Overwrite the provided fields and refresh `updateTime`
    pub async fn update(&self, id: &str, dto: UpdateReportDto) -> Result<Report> {
        let changes = ReportChanges {
            title: dto.title().map(str::to_string),
            publish_date: dto.publish_date().map(str::to_string),
            display_date: dto.publish_date().map(format_display_date),
            update_time: current_timestamp(),
        };

        let report = self
            .store
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;

        info!("Report updated: id={}", report.id);

        Ok(report)
    }

    /// Delete the backing file, then the record
    ///
    /// A missing file is ignored. Any other file error aborts the delete and
    /// leaves the record in place.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let report = self.get_by_id(id).await?;

        let removed = self.files.delete_by_public_path(&report.file_path).await?;
        if !removed {
            warn!(
                "Report {} had no file on disk at {}",
                report.id, report.file_path
            );
        }

        self.store
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;

        info!("Report deleted: id={}", id);

        Ok(())
    }
}
