// ABOUTME: HTTP request handlers for RFQ participants
// ABOUTME: Handles invitations, removals, and the invitable vendor search for RFQ owners

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use tracing::info;

use super::auth::CurrentUser;
use super::profiles_handlers::SearchQuery;
use super::response::{created_or_error, message, ok_or_error};
use super::state::DbState;
use vendorworld_participants::InviteInput;
use vendorworld_rfqs::is_owner;
use vendorworld_storage::StorageError;

/// Fail unless the user created the RFQ
async fn ensure_owner(db: &DbState, rfq_id: &str, user_id: &str) -> Result<(), StorageError> {
    let rfq = db.rfq_storage.get_visible_rfq(rfq_id, user_id).await?;
    if is_owner(&rfq, user_id) {
        Ok(())
    } else {
        Err(StorageError::Forbidden(
            "Only the RFQ owner can manage participants".to_string(),
        ))
    }
}

pub async fn list_participants(
    State(db): State<DbState>,
    current_user: CurrentUser,
    Path(rfq_id): Path<String>,
) -> impl IntoResponse {
    info!("Listing participants for RFQ: {}", rfq_id);

    let result = match ensure_owner(&db, &rfq_id, &current_user.id).await {
        Ok(()) => db.participant_storage.list_participants(&rfq_id).await,
        Err(e) => Err(e),
    };
    ok_or_error(result, "Failed to load participants")
}

pub async fn invite_vendor(
    State(db): State<DbState>,
    current_user: CurrentUser,
    Path(rfq_id): Path<String>,
    Json(input): Json<InviteInput>,
) -> impl IntoResponse {
    info!("Inviting vendor {} to RFQ {}", input.vendor_id, rfq_id);

    let result = db
        .participant_storage
        .invite_vendor(&rfq_id, &current_user.id, &input.vendor_id)
        .await;
    created_or_error(result, "Failed to invite vendor")
}

pub async fn remove_participant(
    State(db): State<DbState>,
    current_user: CurrentUser,
    Path((rfq_id, participant_id)): Path<(String, String)>,
) -> impl IntoResponse {
    info!("Removing participant {} from RFQ {}", participant_id, rfq_id);

    let result = remove_from_rfq(&db, &rfq_id, &participant_id, &current_user.id)
        .await
        .map(|_| message("Participant removed successfully"));

    ok_or_error(result, "Failed to remove participant")
}

/// Remove the participant only when it belongs to the RFQ in the path
async fn remove_from_rfq(
    db: &DbState,
    rfq_id: &str,
    participant_id: &str,
    user_id: &str,
) -> Result<(), StorageError> {
    let participant = db.participant_storage.get_participant(participant_id).await?;
    if participant.rfq_id != rfq_id {
        return Err(StorageError::not_found("Participant"));
    }
    db.participant_storage
        .remove_participant(participant_id, user_id)
        .await
}

/// Vendors the owner can still invite
pub async fn available_vendors(
    State(db): State<DbState>,
    current_user: CurrentUser,
    Path(rfq_id): Path<String>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    info!("Listing available vendors for RFQ: {}", rfq_id);

    let result = match ensure_owner(&db, &rfq_id, &current_user.id).await {
        Ok(()) => {
            db.participant_storage
                .available_vendors(&rfq_id, query.search.as_deref())
                .await
        }
        Err(e) => Err(e),
    };
    ok_or_error(result, "Failed to load vendors")
}
