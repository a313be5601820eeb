// ABOUTME: Shared API response types
// ABOUTME: Success envelope plus helpers turning storage results into responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::AppError;
use vendorworld_storage::StorageError;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Respond 200 with the data, or render the error with `context` as the failed operation
pub fn ok_or_error<T: Serialize>(result: Result<T, StorageError>, context: &str) -> Response {
    respond(StatusCode::OK, result, context)
}

/// Respond 201 with the created record
pub fn created_or_error<T: Serialize>(result: Result<T, StorageError>, context: &str) -> Response {
    respond(StatusCode::CREATED, result, context)
}

fn respond<T: Serialize>(
    status: StatusCode,
    result: Result<T, StorageError>,
    context: &str,
) -> Response {
    match result {
        Ok(data) => (status, Json(ApiResponse::success(data))).into_response(),
        Err(err) => AppError::from_storage(err, context).into_response(),
    }
}

/// `{"message": ...}` payload for operations without a record to return
pub fn message(text: &str) -> serde_json::Value {
    serde_json::json!({ "message": text })
}
