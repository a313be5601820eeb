// ABOUTME: RFQ type definitions
// ABOUTME: Structures for RFQ records, their status, and create/update inputs

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of an RFQ. Variant order is lifecycle order and drives report ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RfqStatus {
    Draft,
    Open,
    Closed,
    Awarded,
    Cancelled,
}

impl RfqStatus {
    pub const ALL: [RfqStatus; 5] = [
        RfqStatus::Draft,
        RfqStatus::Open,
        RfqStatus::Closed,
        RfqStatus::Awarded,
        RfqStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RfqStatus::Draft => "draft",
            RfqStatus::Open => "open",
            RfqStatus::Closed => "closed",
            RfqStatus::Awarded => "awarded",
            RfqStatus::Cancelled => "cancelled",
        }
    }

    /// Closed and awarded RFQs count toward the completion rate
    pub fn is_completed(&self) -> bool {
        matches!(self, RfqStatus::Closed | RfqStatus::Awarded)
    }

    pub fn accepts_quotes(&self) -> bool {
        !matches!(
            self,
            RfqStatus::Closed | RfqStatus::Awarded | RfqStatus::Cancelled
        )
    }
}

impl fmt::Display for RfqStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RfqStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RfqStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("unknown RFQ status '{}'", s))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Rfq {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: RfqStatus,
    pub due_date: Option<DateTime<Utc>>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RfqCreateInput {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    /// Draft (save) or open (publish immediately); defaults to draft
    pub status: Option<RfqStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RfqUpdateInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}
