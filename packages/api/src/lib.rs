// ABOUTME: HTTP API layer for VendorWorld providing REST endpoints and routing
// ABOUTME: Integration layer that depends on all domain packages

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod error;
pub mod health;
pub mod notifications_handlers;
pub mod participants_handlers;
pub mod profiles_handlers;
pub mod quotes_handlers;
pub mod reports_handlers;
pub mod response;
pub mod rfqs_handlers;
pub mod state;

pub use error::AppError;
pub use response::ApiResponse;
pub use state::DbState;

/// RFQ routes (nested under /api/rfqs)
pub fn create_rfqs_router() -> Router<DbState> {
    Router::new()
        .route(
            "/",
            get(rfqs_handlers::list_rfqs).post(rfqs_handlers::create_rfq),
        )
        .route(
            "/{id}",
            get(rfqs_handlers::get_rfq)
                .put(rfqs_handlers::update_rfq)
                .delete(rfqs_handlers::delete_rfq),
        )
        .route("/{id}/publish", post(rfqs_handlers::publish_rfq))
        .route("/{id}/close", post(rfqs_handlers::close_rfq))
        .route("/{id}/cancel", post(rfqs_handlers::cancel_rfq))
        // Participant management
        .route(
            "/{id}/participants",
            get(participants_handlers::list_participants)
                .post(participants_handlers::invite_vendor),
        )
        .route(
            "/{id}/participants/{participant_id}",
            delete(participants_handlers::remove_participant),
        )
        .route(
            "/{id}/available-vendors",
            get(participants_handlers::available_vendors),
        )
        // Vendor quote
        .route(
            "/{id}/quote",
            get(quotes_handlers::get_own_quote).put(quotes_handlers::submit_quote),
        )
}

/// Notification routes (nested under /api/notifications)
pub fn create_notifications_router() -> Router<DbState> {
    Router::new()
        .route("/", get(notifications_handlers::list_notifications))
        .route("/read-all", post(notifications_handlers::mark_all_read))
        .route("/{id}/read", post(notifications_handlers::mark_read))
}

/// Full application router with request tracing
pub fn create_router(state: DbState) -> Router {
    let api = Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/profiles/me",
            get(profiles_handlers::get_me)
                .post(profiles_handlers::register)
                .put(profiles_handlers::update_me),
        )
        .route("/vendors", get(profiles_handlers::list_vendors))
        .route("/dashboard", get(reports_handlers::dashboard))
        .route("/reports", get(reports_handlers::get_report))
        .route("/reports/export", get(reports_handlers::export_report))
        .nest("/rfqs", create_rfqs_router())
        .nest("/notifications", create_notifications_router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
