use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Upload report request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
#[schema(rename_all = "camelCase")]
pub struct UploadReportDto {
    /// The HTML report file (`text/html` only)
    #[schema(format = Binary, content_media_type = "text/html")]
    pub file: String,
    #[schema(example = "Q1 report")]
    pub title: String,
    /// Publish date, `YYYY-MM-DD`
    #[schema(example = "2025-03-01")]
    pub publish_date: String,
}

/// Text fields collected from the upload form
#[derive(Debug, Clone, Default, Validate)]
pub struct CreateReportDto {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "publishDate is required"))]
    pub publish_date: String,
}

/// Partial update of a report's metadata
///
/// Absent or empty fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReportDto {
    #[schema(example = "Q1 report (revised)")]
    pub title: Option<String>,
    #[schema(example = "2025-03-02")]
    pub publish_date: Option<String>,
}

impl UpdateReportDto {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|s| !s.is_empty())
    }

    pub fn publish_date(&self) -> Option<&str> {
        self.publish_date.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dto_requires_both_fields() {
        let dto = CreateReportDto {
            title: "Q1 report".to_string(),
            publish_date: String::new(),
        };
        assert!(dto.validate().is_err());

        let dto = CreateReportDto {
            title: "Q1 report".to_string(),
            publish_date: "2025-03-01".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_dto_treats_empty_as_absent() {
        let dto: UpdateReportDto =
            serde_json::from_str(r#"{"title": "", "publishDate": "2025-04-01"}"#).unwrap();
        assert_eq!(dto.title(), None);
        assert_eq!(dto.publish_date(), Some("2025-04-01"));

        let dto: UpdateReportDto = serde_json::from_str("{}").unwrap();
        assert_eq!(dto.title(), None);
        assert_eq!(dto.publish_date(), None);
    }
}
