// ABOUTME: Shared handler state
// ABOUTME: One storage per domain package, all backed by the same SQLite pool

use std::sync::Arc;

use sqlx::SqlitePool;

use vendorworld_participants::ParticipantStorage;
use vendorworld_profiles::{ProfileStorage, UserRole};
use vendorworld_quotes::QuoteStorage;
use vendorworld_reports::ReportStorage;
use vendorworld_rfqs::RfqStorage;
use vendorworld_storage::StorageError;

#[derive(Clone)]
pub struct DbState {
    pub pool: SqlitePool,
    pub profile_storage: Arc<ProfileStorage>,
    pub rfq_storage: Arc<RfqStorage>,
    pub participant_storage: Arc<ParticipantStorage>,
    pub quote_storage: Arc<QuoteStorage>,
    pub report_storage: Arc<ReportStorage>,
}

impl DbState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            profile_storage: Arc::new(ProfileStorage::new(pool.clone())),
            rfq_storage: Arc::new(RfqStorage::new(pool.clone())),
            participant_storage: Arc::new(ParticipantStorage::new(pool.clone())),
            quote_storage: Arc::new(QuoteStorage::new(pool.clone())),
            report_storage: Arc::new(ReportStorage::new(pool.clone())),
            pool,
        }
    }

    /// Role of a registered user; unregistered users cannot use role-specific endpoints
    pub async fn role_of(&self, user_id: &str) -> Result<UserRole, StorageError> {
        self.profile_storage.get_role(user_id).await?.ok_or_else(|| {
            StorageError::Forbidden("Register a profile before using this endpoint".to_string())
        })
    }
}
