mod report;

pub use report::{sample_reports, NewReport, Report, ReportChanges};
