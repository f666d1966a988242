// =============================================================================
// RESPONSE MESSAGES
// =============================================================================

/// Message for successful reads
pub const MSG_SUCCESS: &str = "success";

/// Message for successful create/update/delete
pub const MSG_OK: &str = "ok";

/// Message for unknown report ids
pub const MSG_NOT_FOUND: &str = "not found";

/// Message for errors whose detail is only logged
pub const MSG_INTERNAL_ERROR: &str = "internal server error";

// =============================================================================
// UPLOADS
// =============================================================================

/// The only MIME type accepted for report uploads
pub const REPORT_MIME_TYPE: &str = "text/html";

/// Public URL prefix for uploaded report files
pub const REPORTS_PUBLIC_PREFIX: &str = "/reports";

/// Public URL prefix for admin assets
pub const ADMIN_PUBLIC_PREFIX: &str = "/admin";

/// Prefix of every synthesized report file name
pub const REPORT_FILE_PREFIX: &str = "report-";

/// Plain-text body served on `GET /`
pub const LIVENESS_MESSAGE: &str = "Financial report API service is running";
