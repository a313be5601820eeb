// ABOUTME: Vendor quotes on RFQs
// ABOUTME: Amount parsing, quote types, and the submit-or-update workflow

pub mod amount;
pub mod storage;
pub mod types;

pub use amount::parse_amount;
pub use storage::QuoteStorage;
pub use types::{Quote, QuoteStatus, QuoteSubmitInput};
