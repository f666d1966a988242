use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppPayload;
use crate::features::reports::dtos::{CreateReportDto, UpdateReportDto, UploadReportDto};
use crate::features::reports::models::Report;
use crate::features::reports::services::ReportService;
use crate::modules::storage::PendingUpload;
use crate::shared::constants::{MSG_OK, REPORT_MIME_TYPE};
use crate::shared::types::ApiResponse;

/// List all reports
#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "All reports in insertion order", body = ApiResponse<Vec<Report>>)
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(service): State<Arc<ReportService>>,
) -> Result<Json<ApiResponse<Vec<Report>>>> {
    let reports = service.list_all().await?;
    Ok(Json(ApiResponse::success(Some(reports), None)))
}

/// Get report by ID
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(
        ("id" = String, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report found", body = ApiResponse<Report>),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn get_report(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Report>>> {
    let report = service.get_by_id(&id).await?;
    Ok(Json(ApiResponse::success(Some(report), None)))
}

/// Upload a new report
///
/// Accepts multipart/form-data with:
/// - `file`: The HTML report (required, `text/html` only)
/// - `title`: Report title (required)
/// - `publishDate`: Publish date as `YYYY-MM-DD` (required)
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body(
        content = UploadReportDto,
        content_type = "multipart/form-data",
        description = "HTML report file with title and publish date",
    ),
    responses(
        (status = 201, description = "Report created", body = ApiResponse<Report>),
        (status = 400, description = "Missing or non-HTML file, or missing title/publishDate"),
        (status = 413, description = "File too large"),
        (status = 500, description = "Upload could not be stored")
    ),
    tag = "reports"
)]
pub async fn create_report(
    State(service): State<Arc<ReportService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<Report>>)> {
    let mut form = CreateReportDto::default();
    let mut upload: Option<PendingUpload> = None;

    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                if upload.is_some() {
                    return Err(AppError::Validation(
                        "Only one file may be uploaded per report".to_string(),
                    ));
                }

                let content_type = field.content_type().unwrap_or("").to_string();
                if !is_report_mime_type(&content_type) {
                    return Err(AppError::Validation(format!(
                        "Only HTML files may be uploaded (got '{}')",
                        content_type
                    )));
                }

                let mut pending = service.begin_upload(field.file_name()).await?;
                while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
                    pending.write_chunk(&chunk).await?;
                }
                upload = Some(pending);
            }
            "title" => {
                form.title = field.text().await.map_err(multipart_error)?;
            }
            "publishDate" => {
                form.publish_date = field.text().await.map_err(multipart_error)?;
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let report = service.create(form, upload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(report), Some(MSG_OK.to_string()))),
    ))
}

/// Update a report's title and/or publish date
#[utoipa::path(
    put,
    path = "/api/reports/{id}",
    params(
        ("id" = String, Path, description = "Report ID")
    ),
    request_body(
        content(
            (UpdateReportDto = "application/json"),
            (UpdateReportDto = "application/x-www-form-urlencoded"),
        ),
        description = "Fields to overwrite; an empty body only refreshes updateTime",
    ),
    responses(
        (status = 200, description = "Report updated"),
        (status = 400, description = "Malformed JSON or form body"),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn update_report(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
    AppPayload(dto): AppPayload<UpdateReportDto>,
) -> Result<Json<ApiResponse<()>>> {
    service.update(&id, dto).await?;
    Ok(Json(ApiResponse::success(None, Some(MSG_OK.to_string()))))
}

/// Delete a report and its file
#[utoipa::path(
    delete,
    path = "/api/reports/{id}",
    params(
        ("id" = String, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report deleted"),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn delete_report(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(&id).await?;
    Ok(Json(ApiResponse::success(None, Some(MSG_OK.to_string()))))
}

/// Uploads must declare exactly `text/html`, with no parameters
fn is_report_mime_type(content_type: &str) -> bool {
    content_type == REPORT_MIME_TYPE
}

fn multipart_error(e: MultipartError) -> AppError {
    debug!("Failed to read multipart data: {}", e);
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::BadRequest(format!("Failed to read multipart data: {}", e.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_report_mime_type() {
        assert!(is_report_mime_type("text/html"));
        assert!(!is_report_mime_type("text/html; charset=utf-8"));
        assert!(!is_report_mime_type("TEXT/HTML"));
        assert!(!is_report_mime_type("text/plain"));
        assert!(!is_report_mime_type("application/pdf"));
        assert!(!is_report_mime_type(""));
    }
}
