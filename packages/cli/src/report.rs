// ABOUTME: Offline report export
// ABOUTME: Writes a user's RFQ report to disk as CSV

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::info;

use vendorworld_reports::{export_file_name, to_csv, DateRange, ReportStorage};

/// Build the report for `user_id` and write it into `out_dir`, returning the file path
pub async fn write_report(
    pool: SqlitePool,
    user_id: &str,
    range: DateRange,
    out_dir: &Path,
    now: DateTime<Utc>,
) -> anyhow::Result<PathBuf> {
    let report = ReportStorage::new(pool)
        .load_report(user_id, range, now)
        .await
        .context("Failed to load report data")?;

    tokio::fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let path = out_dir.join(export_file_name(now));
    tokio::fs::write(&path, to_csv(&report))
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(
        "Wrote {} report for {} ({} RFQs, {} quotes) to {}",
        range,
        user_id,
        report.total_rfqs,
        report.total_quotes,
        path.display()
    );

    Ok(path)
}
