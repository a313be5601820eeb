// ABOUTME: Reporting over a client's RFQs and the quotes they received
// ABOUTME: Aggregates summaries, CSV export, dashboard counters, and the notification feed

pub mod dashboard;
pub mod export;
pub mod notifications;
pub mod range;
pub mod report;
pub mod storage;

pub use dashboard::DashboardStats;
pub use export::{export_file_name, to_csv};
pub use notifications::{build_feed, Notification, NotificationKind, FEED_LIMIT};
pub use range::DateRange;
pub use report::{build_report, DailyCount, ReportData, VendorSummary};
pub use storage::ReportStorage;
