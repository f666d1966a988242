//! Liveness endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/` | Plain-text liveness message |
//! | GET | `/health` | Empty 200 for probes |

use axum::{http::StatusCode, routing::get, Router};

use crate::shared::constants::LIVENESS_MESSAGE;

async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

pub fn routes() -> Router {
    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health_check))
}
