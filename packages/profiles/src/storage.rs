// ABOUTME: Profile storage layer using SQLite
// ABOUTME: Handles registration, profile edits, role lookups, and the vendor directory

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use super::types::{Account, Profile, ProfileUpdateInput, RegisterInput, UserRole};
use vendorworld_core::{matches_search, normalize_optional};
use vendorworld_storage::StorageError;

pub struct ProfileStorage {
    pool: SqlitePool,
}

impl ProfileStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the profile and role for a freshly authenticated user
    pub async fn register(
        &self,
        user_id: &str,
        input: RegisterInput,
    ) -> Result<Account, StorageError> {
        debug!("Registering user: {} as {}", user_id, input.role);

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO profiles (id, full_name, company_name, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(normalize_optional(input.full_name.as_deref()))
        .bind(normalize_optional(input.company_name.as_deref()))
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            StorageError::conflict_on_unique(
                e,
                format!("Profile for user '{}' already exists", user_id),
            )
        })?;

        sqlx::query("INSERT INTO user_roles (user_id, role) VALUES (?, ?)")
            .bind(user_id)
            .bind(input.role)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        self.get_account(user_id).await
    }

    pub async fn get_profile(&self, user_id: &str) -> Result<Profile, StorageError> {
        debug!("Fetching profile: {}", user_id);

        sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StorageError::not_found("Profile"))
    }

    pub async fn get_role(&self, user_id: &str) -> Result<Option<UserRole>, StorageError> {
        let role = sqlx::query_scalar::<_, UserRole>("SELECT role FROM user_roles WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(role)
    }

    pub async fn get_account(&self, user_id: &str) -> Result<Account, StorageError> {
        let profile = self.get_profile(user_id).await?;
        let role = self
            .get_role(user_id)
            .await?
            .ok_or_else(|| StorageError::not_found("User role"))?;
        Ok(Account { profile, role })
    }

    /// Fail with `Forbidden` unless the user holds `role`
    pub async fn require_role(&self, user_id: &str, role: UserRole) -> Result<(), StorageError> {
        match self.get_role(user_id).await? {
            Some(actual) if actual == role => Ok(()),
            _ => Err(StorageError::Forbidden(format!(
                "This action is only available to {} accounts",
                role
            ))),
        }
    }

    pub async fn update_profile(
        &self,
        user_id: &str,
        input: ProfileUpdateInput,
    ) -> Result<Profile, StorageError> {
        debug!("Updating profile: {}", user_id);

        let result = sqlx::query(
            r#"
            UPDATE profiles
            SET full_name = ?, company_name = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(normalize_optional(input.full_name.as_deref()))
        .bind(normalize_optional(input.company_name.as_deref()))
        .bind(Utc::now())
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("Profile"));
        }

        self.get_profile(user_id).await
    }

    /// All vendor profiles, newest first, filtered by name or company
    pub async fn list_vendors(&self, search: Option<&str>) -> Result<Vec<Profile>, StorageError> {
        debug!("Listing vendors (search: {:?})", search);

        let vendors = sqlx::query_as::<_, Profile>(
            r#"
            SELECT p.*
            FROM profiles p
            INNER JOIN user_roles r ON r.user_id = p.id
            WHERE r.role = 'vendor'
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let term = search.unwrap_or_default();
        Ok(vendors
            .into_iter()
            .filter(|v| matches_search(term, &[v.full_name.as_deref(), v.company_name.as_deref()]))
            .collect())
    }

    pub async fn count_vendors(&self) -> Result<i64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_roles WHERE role = 'vendor'")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
