// ABOUTME: Report storage layer using SQLite
// ABOUTME: Loads the records behind reports, dashboard counters, and notifications

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::dashboard::DashboardStats;
use crate::notifications::{build_feed, Notification};
use crate::range::DateRange;
use crate::report::{build_report, ReportData};
use vendorworld_quotes::Quote;
use vendorworld_rfqs::Rfq;
use vendorworld_storage::StorageError;

pub struct ReportStorage {
    pool: SqlitePool,
}

impl ReportStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Report over the user's RFQs created within `range` and the quotes they received
    pub async fn load_report(
        &self,
        user_id: &str,
        range: DateRange,
        now: DateTime<Utc>,
    ) -> Result<ReportData, StorageError> {
        debug!("Building {} report for user: {}", range, user_id);

        let rfqs: Vec<Rfq> = self
            .owned_rfqs(user_id)
            .await?
            .into_iter()
            .filter(|rfq| range.contains(rfq.created_at, now))
            .collect();

        let rfq_ids: HashSet<&str> = rfqs.iter().map(|rfq| rfq.id.as_str()).collect();

        let quotes: Vec<Quote> = self
            .received_quotes(user_id)
            .await?
            .into_iter()
            .filter(|quote| range.contains(quote.created_at, now))
            .filter(|quote| rfq_ids.contains(quote.rfq_id.as_str()))
            .collect();

        debug!(
            "Report inputs: {} RFQs, {} quotes since {}",
            rfqs.len(),
            quotes.len(),
            range.start(now)
        );

        Ok(build_report(&rfqs, &quotes, now))
    }

    pub async fn dashboard_stats(&self, user_id: &str) -> Result<DashboardStats, StorageError> {
        let rfqs = self.owned_rfqs(user_id).await?;
        let quotes = self.own_quotes(user_id).await?;
        let total_vendors: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM user_roles WHERE role = 'vendor'")
                .fetch_one(&self.pool)
                .await?;

        Ok(DashboardStats::compute(&rfqs, &quotes, total_vendors))
    }

    pub async fn notifications(&self, user_id: &str) -> Result<Vec<Notification>, StorageError> {
        debug!("Loading notifications for user: {}", user_id);

        let owned: HashMap<String, Rfq> = self
            .owned_rfqs(user_id)
            .await?
            .into_iter()
            .map(|rfq| (rfq.id.clone(), rfq))
            .collect();
        let received = pair_with_rfq(self.received_quotes(user_id).await?, &owned);

        let quoted: HashMap<String, Rfq> = sqlx::query_as::<_, Rfq>(
            r#"
            SELECT r.*
            FROM rfqs r
            INNER JOIN quotes q ON q.rfq_id = r.id
            WHERE q.vendor_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|rfq| (rfq.id.clone(), rfq))
        .collect();
        let own = pair_with_rfq(self.own_quotes(user_id).await?, &quoted);

        let read_ids: HashSet<String> = sqlx::query_scalar(
            "SELECT notification_id FROM notification_reads WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .collect();

        Ok(build_feed(&received, &own, &read_ids))
    }

    /// Mark one notification from the user's current feed as read
    pub async fn mark_read(&self, user_id: &str, notification_id: &str) -> Result<(), StorageError> {
        let feed = self.notifications(user_id).await?;
        if !feed.iter().any(|n| n.id == notification_id) {
            return Err(StorageError::not_found("Notification"));
        }

        self.insert_read(user_id, notification_id).await
    }

    /// Mark the whole current feed as read, returning how many were unread
    pub async fn mark_all_read(&self, user_id: &str) -> Result<usize, StorageError> {
        let unread: Vec<Notification> = self
            .notifications(user_id)
            .await?
            .into_iter()
            .filter(|n| !n.read)
            .collect();

        for notification in &unread {
            self.insert_read(user_id, &notification.id).await?;
        }

        debug!("Marked {} notifications read for user: {}", unread.len(), user_id);
        Ok(unread.len())
    }

    async fn insert_read(&self, user_id: &str, notification_id: &str) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO notification_reads (user_id, notification_id, read_at)
            VALUES (?, ?, ?)
            ON CONFLICT (user_id, notification_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(notification_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn owned_rfqs(&self, user_id: &str) -> Result<Vec<Rfq>, StorageError> {
        let rfqs = sqlx::query_as::<_, Rfq>(
            "SELECT * FROM rfqs WHERE created_by = ? ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rfqs)
    }

    /// Quotes on any RFQ the user created
    async fn received_quotes(&self, user_id: &str) -> Result<Vec<Quote>, StorageError> {
        let quotes = sqlx::query_as::<_, Quote>(
            r#"
            SELECT q.*
            FROM quotes q
            INNER JOIN rfqs r ON r.id = q.rfq_id
            WHERE r.created_by = ?
            ORDER BY q.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(quotes)
    }

    async fn own_quotes(&self, user_id: &str) -> Result<Vec<Quote>, StorageError> {
        let quotes = sqlx::query_as::<_, Quote>(
            "SELECT * FROM quotes WHERE vendor_id = ? ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(quotes)
    }
}

fn pair_with_rfq(quotes: Vec<Quote>, rfqs: &HashMap<String, Rfq>) -> Vec<(Quote, Rfq)> {
    quotes
        .into_iter()
        .filter_map(|quote| {
            let rfq = rfqs.get(&quote.rfq_id)?.clone();
            Some((quote, rfq))
        })
        .collect()
}
