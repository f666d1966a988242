use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::MSG_SUCCESS;

/// Response envelope shared by every JSON endpoint
///
/// `code` mirrors the HTTP status for errors. Successful creates answer
/// with HTTP 201 but keep `code: 200` in the body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            message: message.unwrap_or_else(|| MSG_SUCCESS.to_string()),
            data,
        }
    }

    pub fn error(status: StatusCode, message: String) -> ApiResponse<()> {
        ApiResponse {
            code: status.as_u16(),
            message,
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_envelope_serializes_null_data() {
        let body = ApiResponse::<()>::error(StatusCode::NOT_FOUND, "not found".to_string());
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(
            value,
            json!({ "code": 404, "message": "not found", "data": null })
        );
    }

    #[test]
    fn test_success_defaults_message() {
        let body = ApiResponse::success(Some(vec![1, 2]), None);
        assert_eq!(body.code, 200);
        assert_eq!(body.message, "success");
        assert_eq!(body.data, Some(vec![1, 2]));
    }
}
