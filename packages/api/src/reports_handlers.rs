// ABOUTME: HTTP request handlers for reports and the dashboard
// ABOUTME: Serves report data, the CSV download, and dashboard counters

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use super::auth::CurrentUser;
use super::error::AppError;
use super::response::ok_or_error;
use super::state::DbState;
use vendorworld_reports::{export_file_name, to_csv, DateRange};

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    #[serde(default)]
    pub range: DateRange,
}

pub async fn dashboard(State(db): State<DbState>, current_user: CurrentUser) -> impl IntoResponse {
    info!("Loading dashboard for user: {}", current_user.id);

    let result = db.report_storage.dashboard_stats(&current_user.id).await;
    ok_or_error(result, "Failed to load dashboard")
}

pub async fn get_report(
    State(db): State<DbState>,
    current_user: CurrentUser,
    Query(query): Query<ReportQuery>,
) -> impl IntoResponse {
    info!("Loading {} report for user: {}", query.range, current_user.id);

    let result = db
        .report_storage
        .load_report(&current_user.id, query.range, Utc::now())
        .await;
    ok_or_error(result, "Failed to load report data")
}

/// CSV download of the report
pub async fn export_report(
    State(db): State<DbState>,
    current_user: CurrentUser,
    Query(query): Query<ReportQuery>,
) -> Response {
    info!("Exporting {} report for user: {}", query.range, current_user.id);

    let now = Utc::now();
    match db
        .report_storage
        .load_report(&current_user.id, query.range, now)
        .await
    {
        Ok(report) => (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", export_file_name(now)),
                ),
            ],
            to_csv(&report),
        )
            .into_response(),
        Err(e) => AppError::from_storage(e, "Failed to export report").into_response(),
    }
}
