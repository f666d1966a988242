//! Static serving of uploaded report files and admin assets

use axum::Router;
use tower_http::services::ServeDir;

use crate::core::config::StorageConfig;
use crate::shared::constants::{ADMIN_PUBLIC_PREFIX, REPORTS_PUBLIC_PREFIX};

/// `/reports/*` maps onto the upload directory, `/admin/*` onto the admin assets
pub fn routes(storage: &StorageConfig) -> Router {
    Router::new()
        .nest_service(REPORTS_PUBLIC_PREFIX, ServeDir::new(&storage.reports_dir))
        .nest_service(ADMIN_PUBLIC_PREFIX, ServeDir::new(&storage.admin_dir))
}
