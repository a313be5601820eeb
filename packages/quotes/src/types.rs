// ABOUTME: Quote type definitions
// ABOUTME: Structures for vendor quotes and the submission form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    Draft,
    Submitted,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub rfq_id: String,
    pub vendor_id: String,
    pub amount: f64,
    pub currency: String,
    pub message: Option<String>,
    pub status: QuoteStatus,
    pub submitted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Quote form as entered by the vendor; `amount` is free text
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSubmitInput {
    pub amount: String,
    pub currency: Option<String>,
    pub message: Option<String>,
}
