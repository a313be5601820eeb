// ABOUTME: User profiles and roles for VendorWorld
// ABOUTME: Provides types and storage for profiles, client/vendor roles, and the vendor directory

pub mod storage;
pub mod types;

// Re-export main types
pub use storage::ProfileStorage;
pub use types::{Account, Profile, ProfileUpdateInput, RegisterInput, UserRole};
