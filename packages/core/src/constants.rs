// ABOUTME: Shared constants and default paths for VendorWorld
// ABOUTME: Identity header, default currency, and the data directory location

use std::env;
use std::path::PathBuf;

/// Header an upstream auth proxy uses to forward the authenticated user id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Currency applied to quotes submitted without one
pub const DEFAULT_CURRENCY: &str = "USD";

/// Get the path to the VendorWorld directory (~/.vendorworld)
pub fn vendorworld_dir() -> PathBuf {
    // First try HOME environment variable (useful for tests)
    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(".vendorworld")
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".vendorworld")
    }
}

/// Get the path to the default database file (~/.vendorworld/vendorworld.db)
pub fn database_file() -> PathBuf {
    vendorworld_dir().join("vendorworld.db")
}
