// ABOUTME: Requests for Quotation with lifecycle rules
// ABOUTME: Provides RFQ types, the owner/status action table, list filters, and storage

pub mod filter;
pub mod lifecycle;
pub mod storage;
pub mod types;

pub use filter::RfqFilter;
pub use lifecycle::{
    authorize, available_actions, can_view, ensure_accepts_quotes, is_owner, LifecycleError,
    RfqAction,
};
pub use storage::RfqStorage;
pub use types::{Rfq, RfqCreateInput, RfqStatus, RfqUpdateInput};
