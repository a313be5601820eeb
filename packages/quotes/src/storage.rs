// ABOUTME: Quote storage layer using SQLite
// ABOUTME: Handles quote submission (insert or update per vendor) and quote lookups

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use super::amount::parse_amount;
use super::types::{Quote, QuoteStatus, QuoteSubmitInput};
use vendorworld_core::{generate_id, normalize_optional, DEFAULT_CURRENCY};
use vendorworld_profiles::{ProfileStorage, UserRole};
use vendorworld_rfqs::{ensure_accepts_quotes, RfqStorage};
use vendorworld_storage::StorageError;

pub struct QuoteStorage {
    pool: SqlitePool,
    rfqs: RfqStorage,
    profiles: ProfileStorage,
}

impl QuoteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            rfqs: RfqStorage::new(pool.clone()),
            profiles: ProfileStorage::new(pool.clone()),
            pool,
        }
    }

    /// Submit the vendor's quote for an RFQ.
    ///
    /// A vendor holds at most one quote per RFQ: a second submission updates
    /// the existing quote in place. Either way the quote ends up `submitted`
    /// with a fresh `submitted_at`.
    pub async fn submit_quote(
        &self,
        rfq_id: &str,
        vendor_id: &str,
        input: QuoteSubmitInput,
    ) -> Result<Quote, StorageError> {
        let amount = parse_amount(&input.amount)?;
        let currency = normalize_optional(input.currency.as_deref())
            .map(|c| c.to_uppercase())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let message = normalize_optional(input.message.as_deref());

        self.profiles.require_role(vendor_id, UserRole::Vendor).await?;
        let rfq = self.rfqs.get_visible_rfq(rfq_id, vendor_id).await?;
        ensure_accepts_quotes(rfq.status)?;

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let existing: Option<String> =
            sqlx::query_scalar("SELECT id FROM quotes WHERE rfq_id = ? AND vendor_id = ?")
                .bind(rfq_id)
                .bind(vendor_id)
                .fetch_optional(&mut *tx)
                .await?;

        let quote_id = match existing {
            Some(quote_id) => {
                debug!("Updating quote {} for RFQ {}", quote_id, rfq_id);

                sqlx::query(
                    r#"
                    UPDATE quotes
                    SET amount = ?, currency = ?, message = ?, status = ?,
                        submitted_at = ?, updated_at = ?
                    WHERE id = ?
                    "#,
                )
                .bind(amount)
                .bind(&currency)
                .bind(&message)
                .bind(QuoteStatus::Submitted)
                .bind(now)
                .bind(now)
                .bind(&quote_id)
                .execute(&mut *tx)
                .await?;

                quote_id
            }
            None => {
                let quote_id = generate_id("quote");
                debug!("Creating quote {} for RFQ {}", quote_id, rfq_id);

                sqlx::query(
                    r#"
                    INSERT INTO quotes (
                        id, rfq_id, vendor_id, amount, currency, message, status,
                        submitted_at, created_at, updated_at
                    )
                    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(&quote_id)
                .bind(rfq_id)
                .bind(vendor_id)
                .bind(amount)
                .bind(&currency)
                .bind(&message)
                .bind(QuoteStatus::Submitted)
                .bind(now)
                .bind(now)
                .bind(now)
                .execute(&mut *tx)
                .await
                .map_err(|e| StorageError::conflict_on_unique(e, "Quote was submitted concurrently"))?;

                quote_id
            }
        };

        tx.commit().await?;

        self.get_quote(&quote_id).await
    }

    pub async fn get_quote(&self, quote_id: &str) -> Result<Quote, StorageError> {
        sqlx::query_as::<_, Quote>("SELECT * FROM quotes WHERE id = ?")
            .bind(quote_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StorageError::not_found("Quote"))
    }

    /// The vendor's own quote on an RFQ, if one was submitted
    pub async fn get_vendor_quote(
        &self,
        rfq_id: &str,
        vendor_id: &str,
    ) -> Result<Option<Quote>, StorageError> {
        let quote = sqlx::query_as::<_, Quote>(
            "SELECT * FROM quotes WHERE rfq_id = ? AND vendor_id = ?",
        )
        .bind(rfq_id)
        .bind(vendor_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(quote)
    }

    pub async fn list_quotes_for_rfq(&self, rfq_id: &str) -> Result<Vec<Quote>, StorageError> {
        debug!("Listing quotes for RFQ: {}", rfq_id);

        let quotes = sqlx::query_as::<_, Quote>(
            "SELECT * FROM quotes WHERE rfq_id = ? ORDER BY created_at DESC",
        )
        .bind(rfq_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(quotes)
    }

    pub async fn list_quotes_for_vendor(&self, vendor_id: &str) -> Result<Vec<Quote>, StorageError> {
        debug!("Listing quotes for vendor: {}", vendor_id);

        let quotes = sqlx::query_as::<_, Quote>(
            "SELECT * FROM quotes WHERE vendor_id = ? ORDER BY created_at DESC",
        )
        .bind(vendor_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(quotes)
    }
}
