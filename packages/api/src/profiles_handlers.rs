// ABOUTME: HTTP request handlers for profiles and the vendor directory
// ABOUTME: Handles registration, profile settings, and vendor search

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;

use super::auth::CurrentUser;
use super::response::{created_or_error, ok_or_error};
use super::state::DbState;
use vendorworld_profiles::{ProfileUpdateInput, RegisterInput};

/// Create the caller's profile and role
pub async fn register(
    State(db): State<DbState>,
    current_user: CurrentUser,
    Json(input): Json<RegisterInput>,
) -> impl IntoResponse {
    info!("Registering user {} as {}", current_user.id, input.role);

    let result = db.profile_storage.register(&current_user.id, input).await;
    created_or_error(result, "Failed to create profile")
}

/// Get the caller's profile with role
pub async fn get_me(State(db): State<DbState>, current_user: CurrentUser) -> impl IntoResponse {
    info!("Getting profile: {}", current_user.id);

    let result = db.profile_storage.get_account(&current_user.id).await;
    ok_or_error(result, "Failed to load profile")
}

pub async fn update_me(
    State(db): State<DbState>,
    current_user: CurrentUser,
    Json(input): Json<ProfileUpdateInput>,
) -> impl IntoResponse {
    info!("Updating profile: {}", current_user.id);

    let result = db
        .profile_storage
        .update_profile(&current_user.id, input)
        .await;
    ok_or_error(result, "Failed to update profile")
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

/// Vendor directory
pub async fn list_vendors(
    State(db): State<DbState>,
    _current_user: CurrentUser,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    info!("Listing vendors (search: {:?})", query.search);

    let result = db
        .profile_storage
        .list_vendors(query.search.as_deref())
        .await;
    ok_or_error(result, "Failed to load vendors")
}
