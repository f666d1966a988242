use utoipa::{Modify, OpenApi};

use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports
        reports_handlers::list_reports,
        reports_handlers::get_report,
        reports_handlers::create_report,
        reports_handlers::update_report,
        reports_handlers::delete_report,
    ),
    components(
        schemas(
            // Reports
            reports_models::Report,
            reports_dtos::UploadReportDto,
            reports_dtos::UpdateReportDto,
            ApiResponse<reports_models::Report>,
            ApiResponse<Vec<reports_models::Report>>,
        )
    ),
    tags(
        (name = "reports", description = "Financial report records and HTML uploads"),
    ),
    info(
        title = "Financial Report API",
        version = "0.1.0",
        description = "API documentation for the financial report service",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_report_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/reports"));
        assert!(doc.paths.paths.contains_key("/api/reports/{id}"));
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Reports".to_string(),
            version: "9.9.9".to_string(),
            description: "Custom".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Reports");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("Custom"));
    }
}
