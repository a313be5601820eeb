// ABOUTME: API error type and its HTTP rendering
// ABOUTME: Maps storage failures to status codes, machine codes, and sanitized messages

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use vendorworld_storage::StorageError;

/// Error type returned by every handler
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Unauthenticated request")]
    Unauthenticated,

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Storage failure; `context` names the operation that failed
    #[error("{context}: {source}")]
    Storage {
        context: String,
        #[source]
        source: StorageError,
    },
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: ErrorDetail,
    request_id: String,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

impl AppError {
    /// Wrap a storage error, keeping `context` for the user message of internal failures
    pub fn from_storage(err: StorageError, context: impl Into<String>) -> Self {
        match err {
            StorageError::NotFound(entity) => AppError::NotFound(entity),
            StorageError::Validation(msg) => AppError::Validation(msg),
            StorageError::Forbidden(message) => AppError::Forbidden { message },
            StorageError::Conflict(msg) => AppError::Conflict(msg),
            other => AppError::Storage {
                context: context.into(),
                source: other,
            },
        }
    }

    fn to_status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Unauthenticated => (StatusCode::UNAUTHORIZED, "UNAUTHENTICATED"),
            AppError::Forbidden { .. } => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            AppError::Storage { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
        }
    }

    /// Message safe to show to the caller
    fn to_user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => format!("Validation failed: {}", msg),
            AppError::NotFound(entity) => format!("{} not found", entity),
            AppError::Unauthenticated => "Authentication required".to_string(),
            AppError::Forbidden { message } => message.clone(),
            AppError::Conflict(msg) => msg.clone(),
            AppError::Storage { context, .. } => format!("{}. Please try again.", context),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::from_storage(err, "Request failed")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let request_id = Uuid::new_v4().to_string();
        let (status_code, error_code) = self.to_status_and_code();
        let user_message = self.to_user_message();

        match &self {
            AppError::Storage { context, source } => {
                error!(
                    request_id = %request_id,
                    context = %context,
                    storage_error = %source,
                    "Storage system error"
                );
            }
            _ => {
                info!(
                    request_id = %request_id,
                    error_code = %error_code,
                    error = %self,
                    "API error response"
                );
            }
        }

        let body = ErrorResponse {
            success: false,
            error: ErrorDetail {
                code: error_code.to_string(),
                message: user_message,
            },
            request_id,
        };

        (status_code, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_errors_map_to_status_codes() {
        let cases = [
            (StorageError::not_found("RFQ"), StatusCode::NOT_FOUND),
            (StorageError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (StorageError::Forbidden("x".into()), StatusCode::FORBIDDEN),
            (StorageError::Conflict("x".into()), StatusCode::CONFLICT),
            (
                StorageError::Sqlx(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let (status, _) = AppError::from(err).to_status_and_code();
            assert_eq!(status, expected);
        }
    }

    #[test]
    fn test_storage_failure_message_hides_detail() {
        let err = AppError::from_storage(
            StorageError::Sqlx(sqlx::Error::RowNotFound),
            "Failed to load RFQs",
        );
        assert_eq!(err.to_user_message(), "Failed to load RFQs. Please try again.");
    }
}
