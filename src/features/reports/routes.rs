use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;

/// Headroom for multipart boundaries and the text fields
const MULTIPART_OVERHEAD: usize = 1024 * 1024;

/// Create routes for the reports feature
pub fn routes(report_service: Arc<ReportService>, max_upload_size: usize) -> Router {
    Router::new()
        .route(
            "/api/reports",
            get(handlers::list_reports).merge(
                post(handlers::create_report)
                    .layer(DefaultBodyLimit::max(max_upload_size + MULTIPART_OVERHEAD)),
            ),
        )
        .route(
            "/api/reports/{id}",
            get(handlers::get_report)
                .put(handlers::update_report)
                .delete(handlers::delete_report),
        )
        .with_state(report_service)
}
