// ABOUTME: Core types and utilities for VendorWorld
// ABOUTME: Foundational package providing shared functionality across all VendorWorld packages

pub mod constants;
pub mod utils;
pub mod validation;

// Re-export constants
pub use constants::{database_file, vendorworld_dir, DEFAULT_CURRENCY, USER_ID_HEADER};

// Re-export utilities
pub use utils::{generate_id, matches_search, short_id};

// Re-export validation
pub use validation::{normalize_optional, require_text, ValidationError};
