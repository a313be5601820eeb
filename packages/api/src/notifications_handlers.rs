// ABOUTME: HTTP request handlers for the notification feed
// ABOUTME: Handles listing notifications and marking them read

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::info;

use super::auth::CurrentUser;
use super::response::{message, ok_or_error};
use super::state::DbState;

pub async fn list_notifications(
    State(db): State<DbState>,
    current_user: CurrentUser,
) -> impl IntoResponse {
    info!("Loading notifications for user: {}", current_user.id);

    let result = db.report_storage.notifications(&current_user.id).await;
    ok_or_error(result, "Failed to load notifications")
}

pub async fn mark_read(
    State(db): State<DbState>,
    current_user: CurrentUser,
    Path(notification_id): Path<String>,
) -> impl IntoResponse {
    info!("Marking notification {} read", notification_id);

    let result = db
        .report_storage
        .mark_read(&current_user.id, &notification_id)
        .await
        .map(|_| message("Notification marked as read"));
    ok_or_error(result, "Failed to update notification")
}

pub async fn mark_all_read(
    State(db): State<DbState>,
    current_user: CurrentUser,
) -> impl IntoResponse {
    info!("Marking all notifications read for user: {}", current_user.id);

    let result = db
        .report_storage
        .mark_all_read(&current_user.id)
        .await
        .map(|count| serde_json::json!({ "marked": count }));
    ok_or_error(result, "Failed to update notifications")
}
