// ABOUTME: Data layer and persistence for VendorWorld
// ABOUTME: Shared storage error type, SQLite pool setup, and embedded migrations

pub mod error;
pub mod pool;

pub use error::StorageError;
pub use pool::{connect, connect_in_memory, run_migrations, DatabaseOptions};
