// ABOUTME: RFQ lifecycle rules
// ABOUTME: Which actions the viewer may take on an RFQ in its current status

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Rfq, RfqStatus};
use vendorworld_storage::StorageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RfqAction {
    Edit,
    Publish,
    Close,
    Cancel,
    Delete,
    ManageParticipants,
}

impl RfqAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RfqAction::Edit => "edit",
            RfqAction::Publish => "publish",
            RfqAction::Close => "close",
            RfqAction::Cancel => "cancel",
            RfqAction::Delete => "delete",
            RfqAction::ManageParticipants => "manage-participants",
        }
    }

    /// Status written when the action is a transition
    pub fn target_status(&self) -> Option<RfqStatus> {
        match self {
            RfqAction::Publish => Some(RfqStatus::Open),
            RfqAction::Close => Some(RfqStatus::Closed),
            RfqAction::Cancel => Some(RfqStatus::Cancelled),
            RfqAction::Edit | RfqAction::Delete | RfqAction::ManageParticipants => None,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LifecycleError {
    #[error("Only the RFQ owner can {0} it")]
    NotOwner(&'static str),

    #[error("Cannot {action} an RFQ that is {status}")]
    NotAllowed {
        action: &'static str,
        status: RfqStatus,
    },

    #[error("Quotes are no longer accepted for an RFQ that is {0}")]
    QuotingClosed(RfqStatus),
}

impl From<LifecycleError> for StorageError {
    fn from(err: LifecycleError) -> Self {
        StorageError::Forbidden(err.to_string())
    }
}

/// Owner action table keyed by status
fn owner_actions(status: RfqStatus) -> &'static [RfqAction] {
    use RfqAction::*;

    match status {
        RfqStatus::Draft => &[Edit, Publish, Cancel, ManageParticipants, Delete],
        RfqStatus::Open => &[Close, Cancel, ManageParticipants, Delete],
        RfqStatus::Closed | RfqStatus::Awarded => &[Cancel, Delete],
        RfqStatus::Cancelled => &[Delete],
    }
}

pub fn is_owner(rfq: &Rfq, user_id: &str) -> bool {
    rfq.created_by == user_id
}

/// Actions offered to `user_id` for this RFQ. Non-owners get none.
pub fn available_actions(rfq: &Rfq, user_id: &str) -> Vec<RfqAction> {
    if !is_owner(rfq, user_id) {
        return Vec::new();
    }
    owner_actions(rfq.status).to_vec()
}

pub fn authorize(rfq: &Rfq, user_id: &str, action: RfqAction) -> Result<(), LifecycleError> {
    if !is_owner(rfq, user_id) {
        return Err(LifecycleError::NotOwner(action.as_str()));
    }
    if !owner_actions(rfq.status).contains(&action) {
        return Err(LifecycleError::NotAllowed {
            action: action.as_str(),
            status: rfq.status,
        });
    }
    Ok(())
}

/// Owners and participants always see an RFQ; everyone else only while it is open
pub fn can_view(rfq: &Rfq, user_id: &str, is_participant: bool) -> bool {
    is_owner(rfq, user_id) || is_participant || rfq.status == RfqStatus::Open
}

pub fn ensure_accepts_quotes(status: RfqStatus) -> Result<(), LifecycleError> {
    if status.accepts_quotes() {
        Ok(())
    } else {
        Err(LifecycleError::QuotingClosed(status))
    }
}
