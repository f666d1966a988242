use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::REPORTS_PUBLIC_PREFIX;
use crate::shared::datetime::format_display_date;

/// Financial report metadata plus the public path of its HTML file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[schema(example = "4")]
    pub id: String,
    #[schema(example = "Q1 report")]
    pub title: String,
    /// Publish date, `YYYY-MM-DD`
    #[schema(example = "2025-03-01")]
    pub publish_date: String,
    /// Publish date rendered as `YYYY.MM.DD`
    #[schema(example = "2025.03.01")]
    pub display_date: String,
    #[schema(example = "/reports/report-1740787200000-123456789.html")]
    pub file_path: String,
    #[schema(example = "2025-05-20 10:30:00")]
    pub create_time: String,
    #[schema(example = "2025-05-20 10:30:00")]
    pub update_time: String,
}

impl Report {
    /// Numeric value of the id, if it has one
    pub fn numeric_id(&self) -> Option<u64> {
        self.id.parse().ok()
    }
}

/// Data for inserting a report; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewReport {
    pub title: String,
    pub publish_date: String,
    pub display_date: String,
    pub file_path: String,
    pub create_time: String,
    pub update_time: String,
}

impl NewReport {
    pub fn into_report(self, id: String) -> Report {
        Report {
            id,
            title: self.title,
            publish_date: self.publish_date,
            display_date: self.display_date,
            file_path: self.file_path,
            create_time: self.create_time,
            update_time: self.update_time,
        }
    }
}

/// Partial update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ReportChanges {
    pub title: Option<String>,
    pub publish_date: Option<String>,
    pub display_date: Option<String>,
    pub update_time: String,
}

impl ReportChanges {
    pub fn apply_to(self, report: &mut Report) {
        if let Some(title) = self.title {
            report.title = title;
        }
        if let Some(publish_date) = self.publish_date {
            report.publish_date = publish_date;
        }
        if let Some(display_date) = self.display_date {
            report.display_date = display_date;
        }
        report.update_time = self.update_time;
    }
}

/// Sample reports loaded at startup
pub fn sample_reports() -> Vec<Report> {
    let seed = |id: &str, title: &str, date: &str, file: &str, time: &str| Report {
        id: id.to_string(),
        title: title.to_string(),
        publish_date: date.to_string(),
        display_date: format_display_date(date),
        file_path: format!("{}/{}", REPORTS_PUBLIC_PREFIX, file),
        create_time: time.to_string(),
        update_time: time.to_string(),
    };

    vec![
        seed(
            "1",
            "JD.com 2025 Q1 Financial Report Analysis",
            "2025-02-08",
            "jd_report_2025q1.html",
            "2025-05-20 10:30:00",
        ),
        seed(
            "2",
            "Alibaba 2025 Q1 Financial Report Analysis",
            "2025-02-15",
            "alibaba_report_2025q1.html",
            "2025-05-20 11:15:00",
        ),
        seed(
            "3",
            "Tencent 2025 Q1 Financial Report Analysis",
            "2025-02-22",
            "tencent_report_2025q1.html",
            "2025-05-20 14:45:00",
        ),
    ]
}
