// ABOUTME: Integration tests for report storage
// ABOUTME: Tests report loading, dashboard counters, and notification read state

use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use vendorworld_profiles::{ProfileStorage, RegisterInput, UserRole};
use vendorworld_quotes::{QuoteStorage, QuoteSubmitInput};
use vendorworld_reports::{DateRange, NotificationKind, ReportStorage};
use vendorworld_rfqs::{Rfq, RfqCreateInput, RfqStatus, RfqStorage};
use vendorworld_storage::{connect_in_memory, StorageError};

async fn register(pool: &SqlitePool, id: &str, role: UserRole) {
    ProfileStorage::new(pool.clone())
        .register(
            id,
            RegisterInput {
                role,
                full_name: None,
                company_name: None,
            },
        )
        .await
        .unwrap();
}

async fn open_rfq(pool: &SqlitePool, owner: &str, title: &str) -> Rfq {
    RfqStorage::new(pool.clone())
        .create_rfq(
            owner,
            RfqCreateInput {
                title: title.to_string(),
                description: None,
                due_date: None,
                status: Some(RfqStatus::Open),
            },
        )
        .await
        .unwrap()
}

async fn submit(pool: &SqlitePool, rfq: &Rfq, vendor: &str, amount: &str) {
    QuoteStorage::new(pool.clone())
        .submit_quote(
            &rfq.id,
            vendor,
            QuoteSubmitInput {
                amount: amount.to_string(),
                currency: None,
                message: None,
            },
        )
        .await
        .unwrap();
}

async fn setup() -> (SqlitePool, Rfq, Rfq) {
    let pool = connect_in_memory().await.unwrap();
    register(&pool, "client-1", UserRole::Client).await;
    register(&pool, "client-2", UserRole::Client).await;
    register(&pool, "vendor-a", UserRole::Vendor).await;
    register(&pool, "vendor-b", UserRole::Vendor).await;

    let mine = open_rfq(&pool, "client-1", "Chairs").await;
    let theirs = open_rfq(&pool, "client-2", "Desks").await;

    submit(&pool, &mine, "vendor-a", "100").await;
    submit(&pool, &mine, "vendor-b", "300").await;
    submit(&pool, &theirs, "vendor-a", "999").await;

    (pool, mine, theirs)
}

#[tokio::test]
async fn test_report_only_counts_own_rfqs() {
    let (pool, mine, _) = setup().await;
    RfqStorage::new(pool.clone())
        .close(&mine.id, "client-1")
        .await
        .unwrap();

    let report = ReportStorage::new(pool)
        .load_report("client-1", DateRange::Week, Utc::now())
        .await
        .unwrap();

    assert_eq!(report.total_rfqs, 1);
    assert_eq!(report.total_quotes, 2);
    assert_eq!(report.average_quote_value, 200.0);
    assert_eq!(report.completion_rate, 100.0);
    assert_eq!(report.rfqs_by_status.get(&RfqStatus::Closed), Some(&1));
    assert_eq!(report.quotes_over_time.last().map(|d| d.count), Some(2));
}

#[tokio::test]
async fn test_report_excludes_records_outside_range() {
    let (pool, _, _) = setup().await;

    let report = ReportStorage::new(pool)
        .load_report("client-1", DateRange::Week, Utc::now() - Duration::days(30))
        .await
        .unwrap();

    assert_eq!(report.total_rfqs, 0);
    assert_eq!(report.total_quotes, 0);
    assert_eq!(report.quotes_over_time.len(), 7);
}

#[tokio::test]
async fn test_dashboard_stats() {
    let (pool, _, _) = setup().await;

    let stats = ReportStorage::new(pool)
        .dashboard_stats("client-1")
        .await
        .unwrap();

    assert_eq!(stats.active_rfqs, 1);
    assert_eq!(stats.completed_rfqs, 0);
    assert_eq!(stats.pending_quotes, 0);
    assert_eq!(stats.total_vendors, 2);
}

#[tokio::test]
async fn test_notifications_for_owner_and_vendor() {
    let (pool, _, theirs) = setup().await;
    RfqStorage::new(pool.clone())
        .close(&theirs.id, "client-2")
        .await
        .unwrap();
    let reports = ReportStorage::new(pool);

    let owner_feed = reports.notifications("client-1").await.unwrap();
    assert_eq!(owner_feed.len(), 2);
    assert!(owner_feed
        .iter()
        .all(|n| n.kind == NotificationKind::QuoteReceived));

    let vendor_feed = reports.notifications("vendor-a").await.unwrap();
    assert_eq!(vendor_feed.len(), 1);
    assert_eq!(vendor_feed[0].kind, NotificationKind::RfqClosed);
    assert_eq!(vendor_feed[0].rfq_id, theirs.id);
}

#[tokio::test]
async fn test_mark_read_and_mark_all_read() {
    let (pool, _, _) = setup().await;
    let reports = ReportStorage::new(pool);

    let feed = reports.notifications("client-1").await.unwrap();
    reports.mark_read("client-1", &feed[0].id).await.unwrap();

    let feed = reports.notifications("client-1").await.unwrap();
    assert_eq!(feed.iter().filter(|n| n.read).count(), 1);

    let missing = reports.mark_read("client-1", "quote-unknown").await;
    assert!(matches!(missing, Err(StorageError::NotFound(_))));

    assert_eq!(reports.mark_all_read("client-1").await.unwrap(), 1);
    let feed = reports.notifications("client-1").await.unwrap();
    assert!(feed.iter().all(|n| n.read));
    assert_eq!(reports.mark_all_read("client-1").await.unwrap(), 0);
}
