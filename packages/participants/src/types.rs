// ABOUTME: Participant type definitions
// ABOUTME: Invitation records linking vendors to RFQs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ParticipantStatus {
    Invited,
    Accepted,
    Declined,
    Submitted,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub rfq_id: String,
    pub vendor_id: String,
    pub status: ParticipantStatus,
    pub invited_at: DateTime<Utc>,
}

/// Participant row joined with the invited vendor's profile
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantWithProfile {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub participant: Participant,
    pub full_name: Option<String>,
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteInput {
    pub vendor_id: String,
}
