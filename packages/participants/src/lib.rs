// ABOUTME: RFQ participant management
// ABOUTME: Invitations of vendors to RFQs and the candidate vendor search

pub mod storage;
pub mod types;

pub use storage::ParticipantStorage;
pub use types::{InviteInput, Participant, ParticipantStatus, ParticipantWithProfile};
