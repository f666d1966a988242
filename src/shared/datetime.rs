use chrono::Local;

/// Wall-clock format used for `createTime` / `updateTime`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a `YYYY-MM-DD` publish date as `YYYY.MM.DD`.
///
/// Every `-` is replaced; the input is not validated, so malformed dates
/// pass through unchanged apart from the separators.
pub fn format_display_date(date: &str) -> String {
    date.replace('-', ".")
}

/// Current local time as `YYYY-MM-DD HH:MM:SS`
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
