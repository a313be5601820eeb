// ABOUTME: HTTP request handlers for RFQ operations
// ABOUTME: Handles listing, CRUD, the detail view with actions, and status transitions

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::info;

use super::auth::CurrentUser;
use super::response::{created_or_error, message, ok_or_error};
use super::state::DbState;
use vendorworld_participants::ParticipantWithProfile;
use vendorworld_profiles::UserRole;
use vendorworld_quotes::Quote;
use vendorworld_rfqs::{
    available_actions, is_owner, Rfq, RfqAction, RfqCreateInput, RfqFilter, RfqUpdateInput,
};
use vendorworld_storage::StorageError;

/// RFQ with everything the detail page shows for the viewer
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RfqDetail {
    #[serde(flatten)]
    pub rfq: Rfq,
    pub is_owner: bool,
    pub actions: Vec<RfqAction>,
    pub can_submit_quote: bool,
    /// Every quote for the owner; only the viewer's own quote otherwise
    pub quotes: Vec<Quote>,
    /// Empty unless the viewer owns the RFQ
    pub participants: Vec<ParticipantWithProfile>,
}

/// List RFQs: clients see their own, vendors see open and invited RFQs
pub async fn list_rfqs(
    State(db): State<DbState>,
    current_user: CurrentUser,
    Query(filter): Query<RfqFilter>,
) -> impl IntoResponse {
    info!("Listing RFQs for user: {}", current_user.id);

    let result = match db.role_of(&current_user.id).await {
        Ok(UserRole::Client) => db.rfq_storage.list_for_client(&current_user.id, &filter).await,
        Ok(UserRole::Vendor) => db.rfq_storage.list_for_vendor(&current_user.id, &filter).await,
        Err(e) => Err(e),
    };

    ok_or_error(result, "Failed to load RFQs")
}

pub async fn create_rfq(
    State(db): State<DbState>,
    current_user: CurrentUser,
    Json(input): Json<RfqCreateInput>,
) -> impl IntoResponse {
    info!("Creating RFQ for user: {}", current_user.id);

    let result = match db
        .profile_storage
        .require_role(&current_user.id, UserRole::Client)
        .await
    {
        Ok(()) => db.rfq_storage.create_rfq(&current_user.id, input).await,
        Err(e) => Err(e),
    };

    created_or_error(result, "Failed to create RFQ")
}

pub async fn get_rfq(
    State(db): State<DbState>,
    current_user: CurrentUser,
    Path(rfq_id): Path<String>,
) -> impl IntoResponse {
    info!("Getting RFQ: {}", rfq_id);

    let result = load_detail(&db, &rfq_id, &current_user.id).await;
    ok_or_error(result, "Failed to load RFQ")
}

async fn load_detail(db: &DbState, rfq_id: &str, user_id: &str) -> Result<RfqDetail, StorageError> {
    let rfq = db.rfq_storage.get_visible_rfq(rfq_id, user_id).await?;
    let owner = is_owner(&rfq, user_id);

    let (quotes, participants) = if owner {
        (
            db.quote_storage.list_quotes_for_rfq(&rfq.id).await?,
            db.participant_storage.list_participants(&rfq.id).await?,
        )
    } else {
        let own_quote = db.quote_storage.get_vendor_quote(&rfq.id, user_id).await?;
        (own_quote.into_iter().collect(), Vec::new())
    };

    let is_vendor = db.profile_storage.get_role(user_id).await? == Some(UserRole::Vendor);

    Ok(RfqDetail {
        actions: available_actions(&rfq, user_id),
        can_submit_quote: is_vendor && !owner && rfq.status.accepts_quotes(),
        is_owner: owner,
        quotes,
        participants,
        rfq,
    })
}

pub async fn update_rfq(
    State(db): State<DbState>,
    current_user: CurrentUser,
    Path(rfq_id): Path<String>,
    Json(input): Json<RfqUpdateInput>,
) -> impl IntoResponse {
    info!("Updating RFQ: {}", rfq_id);

    let result = db
        .rfq_storage
        .update_rfq(&rfq_id, &current_user.id, input)
        .await;
    ok_or_error(result, "Failed to update RFQ")
}

pub async fn delete_rfq(
    State(db): State<DbState>,
    current_user: CurrentUser,
    Path(rfq_id): Path<String>,
) -> impl IntoResponse {
    info!("Deleting RFQ: {}", rfq_id);

    let result = db
        .rfq_storage
        .delete_rfq(&rfq_id, &current_user.id)
        .await
        .map(|_| message("RFQ deleted successfully"));
    ok_or_error(result, "Failed to delete RFQ")
}

pub async fn publish_rfq(
    State(db): State<DbState>,
    current_user: CurrentUser,
    Path(rfq_id): Path<String>,
) -> impl IntoResponse {
    info!("Publishing RFQ: {}", rfq_id);

    let result = db.rfq_storage.publish(&rfq_id, &current_user.id).await;
    ok_or_error(result, "Failed to publish RFQ")
}

pub async fn close_rfq(
    State(db): State<DbState>,
    current_user: CurrentUser,
    Path(rfq_id): Path<String>,
) -> impl IntoResponse {
    info!("Closing RFQ: {}", rfq_id);

    let result = db.rfq_storage.close(&rfq_id, &current_user.id).await;
    ok_or_error(result, "Failed to close RFQ")
}

pub async fn cancel_rfq(
    State(db): State<DbState>,
    current_user: CurrentUser,
    Path(rfq_id): Path<String>,
) -> impl IntoResponse {
    info!("Cancelling RFQ: {}", rfq_id);

    let result = db.rfq_storage.cancel(&rfq_id, &current_user.id).await;
    ok_or_error(result, "Failed to cancel RFQ")
}
