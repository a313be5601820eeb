// ABOUTME: Health check endpoint
// ABOUTME: Reports service status and verifies the database answers

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::error;

use super::state::DbState;

pub async fn health_check(State(db): State<DbState>) -> (StatusCode, Json<Value>) {
    let database = match sqlx::query("SELECT 1").execute(&db.pool).await {
        Ok(_) => "ok",
        Err(e) => {
            error!("Health check database probe failed: {}", e);
            "unavailable"
        }
    };

    let status = if database == "ok" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if status == StatusCode::OK { "healthy" } else { "degraded" },
            "database": database,
            "timestamp": Utc::now().timestamp(),
            "version": env!("CARGO_PKG_VERSION"),
            "service": "vendorworld-api"
        })),
    )
}
