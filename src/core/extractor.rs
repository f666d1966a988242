use axum::{
    body::{Body, Bytes},
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::header,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

const EMPTY_OBJECT: &[u8] = b"{}";

/// Body extractor for partial updates
///
/// Accepts `application/json` and `application/x-www-form-urlencoded`
/// bodies. An empty JSON body, a missing content type or any other content
/// type deserializes as `{}`, so handlers still run and decide the response.
pub struct AppPayload<T>(pub T);

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

impl BodyKind {
    fn of(req: &Request<Body>) -> Self {
        let essence = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or_default();

        match essence.as_str() {
            "application/x-www-form-urlencoded" => BodyKind::Form,
            "application/json" => BodyKind::Json,
            other if other.ends_with("+json") => BodyKind::Json,
            _ => BodyKind::Other,
        }
    }
}

impl<T, S> FromRequest<S> for AppPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match BodyKind::of(&req) {
            BodyKind::Form => {
                let Form(value) = Form::<T>::from_request(req, state).await.map_err(|e| {
                    AppError::BadRequest(format!("Invalid form data: {}", e.body_text()))
                })?;
                Ok(Self(value))
            }
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state).await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read request body: {}", e.body_text()))
                })?;
                let raw: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
                    EMPTY_OBJECT
                } else {
                    &bytes
                };
                let Json(value) = Json::<T>::from_bytes(raw).map_err(json_error)?;
                Ok(Self(value))
            }
            BodyKind::Other => {
                let Json(value) = Json::<T>::from_bytes(EMPTY_OBJECT).map_err(json_error)?;
                Ok(Self(value))
            }
        }
    }
}

fn json_error(rejection: JsonRejection) -> AppError {
    let message = match rejection {
        JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
        JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
        _ => "Failed to parse JSON body".to_string(),
    };
    AppError::BadRequest(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Fields {
        title: Option<String>,
    }

    fn put(content_type: Option<&str>, body: &'static str) -> Request<Body> {
        let mut builder = Request::builder().method("PUT").uri("/api/reports/1");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        builder.body(Body::from(body)).unwrap()
    }

    async fn extract(req: Request<Body>) -> Result<Fields, AppError> {
        AppPayload::<Fields>::from_request(req, &())
            .await
            .map(|AppPayload(fields)| fields)
    }

    #[test]
    fn test_body_kind_ignores_parameters_and_case() {
        assert_eq!(
            BodyKind::of(&put(Some("application/json; charset=utf-8"), "")),
            BodyKind::Json
        );
        assert_eq!(
            BodyKind::of(&put(Some("Application/X-WWW-Form-Urlencoded"), "")),
            BodyKind::Form
        );
        assert_eq!(BodyKind::of(&put(Some("text/plain"), "")), BodyKind::Other);
        assert_eq!(BodyKind::of(&put(None, "")), BodyKind::Other);
    }

    #[tokio::test]
    async fn test_json_body() {
        let fields = extract(put(Some("application/json"), r#"{"title":"Q1"}"#))
            .await
            .unwrap();
        assert_eq!(fields.title.as_deref(), Some("Q1"));
    }

    #[tokio::test]
    async fn test_form_body() {
        let fields = extract(put(
            Some("application/x-www-form-urlencoded"),
            "title=Q1+report",
        ))
        .await
        .unwrap();
        assert_eq!(fields.title.as_deref(), Some("Q1 report"));
    }

    #[tokio::test]
    async fn test_empty_or_untyped_body_is_empty_object() {
        let fields = extract(put(None, "")).await.unwrap();
        assert!(fields.title.is_none());

        let fields = extract(put(Some("application/json"), "")).await.unwrap();
        assert!(fields.title.is_none());

        let fields = extract(put(Some("text/plain"), "title=ignored"))
            .await
            .unwrap();
        assert!(fields.title.is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let result = extract(put(Some("application/json"), "{not json")).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
