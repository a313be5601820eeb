// ABOUTME: RFQ storage layer using SQLite
// ABOUTME: Handles CRUD operations and owner-gated status transitions for RFQs

use chrono::Utc;
use sqlx::{QueryBuilder, SqlitePool};
use tracing::{debug, warn};

use crate::filter::RfqFilter;
use crate::lifecycle::{self, RfqAction};
use crate::types::{Rfq, RfqCreateInput, RfqStatus, RfqUpdateInput};
use vendorworld_core::{generate_id, normalize_optional, require_text};
use vendorworld_storage::StorageError;

pub const MAX_TITLE_LEN: usize = 200;

pub struct RfqStorage {
    pool: SqlitePool,
}

impl RfqStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_rfq(
        &self,
        owner_id: &str,
        input: RfqCreateInput,
    ) -> Result<Rfq, StorageError> {
        let title = require_text("title", &input.title, MAX_TITLE_LEN)?;
        let status = input.status.unwrap_or(RfqStatus::Draft);
        if !matches!(status, RfqStatus::Draft | RfqStatus::Open) {
            return Err(StorageError::Validation(format!(
                "New RFQs must be draft or open, not {}",
                status
            )));
        }

        let rfq_id = generate_id("rfq");
        let now = Utc::now();

        debug!("Creating RFQ: {} (owner: {}, status: {})", rfq_id, owner_id, status);

        sqlx::query(
            r#"
            INSERT INTO rfqs (id, title, description, status, due_date, created_by, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&rfq_id)
        .bind(&title)
        .bind(normalize_optional(input.description.as_deref()))
        .bind(status)
        .bind(input.due_date)
        .bind(owner_id)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.get_rfq(&rfq_id).await
    }

    pub async fn get_rfq(&self, rfq_id: &str) -> Result<Rfq, StorageError> {
        debug!("Fetching RFQ: {}", rfq_id);

        sqlx::query_as::<_, Rfq>("SELECT * FROM rfqs WHERE id = ?")
            .bind(rfq_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StorageError::not_found("RFQ"))
    }

    /// Fetch an RFQ the viewer is allowed to see; hidden RFQs read as not found
    pub async fn get_visible_rfq(&self, rfq_id: &str, user_id: &str) -> Result<Rfq, StorageError> {
        let rfq = self.get_rfq(rfq_id).await?;
        let participant = self.is_participant(rfq_id, user_id).await?;

        if lifecycle::can_view(&rfq, user_id, participant) {
            Ok(rfq)
        } else {
            Err(StorageError::not_found("RFQ"))
        }
    }

    pub async fn is_participant(&self, rfq_id: &str, vendor_id: &str) -> Result<bool, StorageError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM rfq_participants WHERE rfq_id = ? AND vendor_id = ?",
        )
        .bind(rfq_id)
        .bind(vendor_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    /// RFQs created by the client, newest first
    pub async fn list_for_client(
        &self,
        owner_id: &str,
        filter: &RfqFilter,
    ) -> Result<Vec<Rfq>, StorageError> {
        debug!("Listing RFQs for client: {}", owner_id);

        let rfqs = sqlx::query_as::<_, Rfq>(
            "SELECT * FROM rfqs WHERE created_by = ? ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(filter.apply(rfqs))
    }

    /// Open RFQs plus any RFQ the vendor was invited to, newest first
    pub async fn list_for_vendor(
        &self,
        vendor_id: &str,
        filter: &RfqFilter,
    ) -> Result<Vec<Rfq>, StorageError> {
        debug!("Listing RFQs for vendor: {}", vendor_id);

        let rfqs = sqlx::query_as::<_, Rfq>(
            r#"
            SELECT r.*
            FROM rfqs r
            LEFT JOIN rfq_participants p ON p.rfq_id = r.id AND p.vendor_id = ?
            WHERE r.status = 'open' OR p.id IS NOT NULL
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(vendor_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(filter.apply(rfqs))
    }

    /// Edit title, description, or due date of a draft RFQ
    pub async fn update_rfq(
        &self,
        rfq_id: &str,
        user_id: &str,
        input: RfqUpdateInput,
    ) -> Result<Rfq, StorageError> {
        debug!("Updating RFQ: {}", rfq_id);

        let rfq = self.get_rfq(rfq_id).await?;
        lifecycle::authorize(&rfq, user_id, RfqAction::Edit)?;

        let mut query_builder = QueryBuilder::new("UPDATE rfqs SET updated_at = ");
        query_builder.push_bind(Utc::now());

        if let Some(title) = &input.title {
            let title = require_text("title", title, MAX_TITLE_LEN)?;
            query_builder.push(", title = ");
            query_builder.push_bind(title);
        }
        if let Some(description) = &input.description {
            query_builder.push(", description = ");
            query_builder.push_bind(normalize_optional(Some(description.as_str())));
        }
        if let Some(due_date) = input.due_date {
            query_builder.push(", due_date = ");
            query_builder.push_bind(due_date);
        }

        query_builder.push(" WHERE id = ");
        query_builder.push_bind(rfq_id);

        query_builder.build().execute(&self.pool).await?;

        self.get_rfq(rfq_id).await
    }

    /// Apply a status transition (publish, close, cancel) for the owner.
    ///
    /// The write only lands if the status is still the one the action was
    /// authorized against; a concurrent transition yields `Conflict`.
    pub async fn transition(
        &self,
        rfq_id: &str,
        user_id: &str,
        action: RfqAction,
    ) -> Result<Rfq, StorageError> {
        let target = action.target_status().ok_or_else(|| {
            StorageError::Validation(format!("'{}' is not a status transition", action.as_str()))
        })?;

        let rfq = self.get_rfq(rfq_id).await?;
        if let Err(err) = lifecycle::authorize(&rfq, user_id, action) {
            warn!("Rejected {} on RFQ {} by {}: {}", action.as_str(), rfq_id, user_id, err);
            return Err(err.into());
        }

        self.apply_status(rfq_id, rfq.status, target).await?;
        self.get_rfq(rfq_id).await
    }

    /// Move `rfq_id` from `from` to `to`; `Conflict` if the stored status is no longer `from`
    async fn apply_status(
        &self,
        rfq_id: &str,
        from: RfqStatus,
        to: RfqStatus,
    ) -> Result<(), StorageError> {
        debug!("Transitioning RFQ {}: {} -> {}", rfq_id, from, to);

        let result = sqlx::query(
            "UPDATE rfqs SET status = ?, updated_at = ? WHERE id = ? AND status = ?",
        )
        .bind(to)
        .bind(Utc::now())
        .bind(rfq_id)
        .bind(from)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::Conflict(format!(
                "RFQ {} changed status while it was being updated",
                rfq_id
            )));
        }

        Ok(())
    }

    pub async fn publish(&self, rfq_id: &str, user_id: &str) -> Result<Rfq, StorageError> {
        self.transition(rfq_id, user_id, RfqAction::Publish).await
    }

    pub async fn close(&self, rfq_id: &str, user_id: &str) -> Result<Rfq, StorageError> {
        self.transition(rfq_id, user_id, RfqAction::Close).await
    }

    pub async fn cancel(&self, rfq_id: &str, user_id: &str) -> Result<Rfq, StorageError> {
        self.transition(rfq_id, user_id, RfqAction::Cancel).await
    }

    /// Delete an RFQ with its quotes and participants (any status, owner only)
    pub async fn delete_rfq(&self, rfq_id: &str, user_id: &str) -> Result<(), StorageError> {
        debug!("Deleting RFQ: {}", rfq_id);

        let rfq = self.get_rfq(rfq_id).await?;
        lifecycle::authorize(&rfq, user_id, RfqAction::Delete)?;

        sqlx::query("DELETE FROM rfqs WHERE id = ?")
            .bind(rfq_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
