// ABOUTME: HTTP request handlers for vendor quotes
// ABOUTME: Handles reading and submitting the caller's quote on an RFQ

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tracing::info;

use super::auth::CurrentUser;
use super::response::ok_or_error;
use super::state::DbState;
use vendorworld_quotes::QuoteSubmitInput;

/// The caller's quote on the RFQ, `null` when none was submitted
pub async fn get_own_quote(
    State(db): State<DbState>,
    current_user: CurrentUser,
    Path(rfq_id): Path<String>,
) -> impl IntoResponse {
    info!("Getting quote of {} for RFQ {}", current_user.id, rfq_id);

    let result = match db
        .rfq_storage
        .get_visible_rfq(&rfq_id, &current_user.id)
        .await
    {
        Ok(_) => {
            db.quote_storage
                .get_vendor_quote(&rfq_id, &current_user.id)
                .await
        }
        Err(e) => Err(e),
    };
    ok_or_error(result, "Failed to load quote")
}

/// Submit a new quote or update the existing one
pub async fn submit_quote(
    State(db): State<DbState>,
    current_user: CurrentUser,
    Path(rfq_id): Path<String>,
    Json(input): Json<QuoteSubmitInput>,
) -> impl IntoResponse {
    info!("Submitting quote of {} for RFQ {}", current_user.id, rfq_id);

    let result = db
        .quote_storage
        .submit_quote(&rfq_id, &current_user.id, input)
        .await;
    ok_or_error(result, "Failed to submit quote")
}
