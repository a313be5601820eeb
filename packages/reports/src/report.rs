// ABOUTME: Report aggregation over loaded RFQs and quotes
// ABOUTME: Totals, completion rate, status breakdown, daily quote counts, and top vendors

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use vendorworld_core::short_id;
use vendorworld_quotes::Quote;
use vendorworld_rfqs::{Rfq, RfqStatus};

/// Days covered by `quotes_over_time`, ending today
pub const TREND_DAYS: i64 = 7;

/// Vendors kept in `top_vendors`
pub const TOP_VENDOR_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub total_rfqs: usize,
    pub total_quotes: usize,
    pub average_quote_value: f64,
    /// Percentage of RFQs that are closed or awarded, 0-100
    pub completion_rate: f64,
    pub rfqs_by_status: BTreeMap<RfqStatus, usize>,
    pub quotes_over_time: Vec<DailyCount>,
    pub top_vendors: Vec<VendorSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCount {
    /// Day label such as `Mar 09`
    pub date: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorSummary {
    pub vendor_id: String,
    pub name: String,
    pub quote_count: usize,
    pub avg_amount: f64,
}

/// Reduce the viewer's RFQs and the quotes on them into a report.
///
/// Callers pass records already limited to the report's date range.
pub fn build_report(rfqs: &[Rfq], quotes: &[Quote], now: DateTime<Utc>) -> ReportData {
    let total_rfqs = rfqs.len();
    let total_quotes = quotes.len();

    let average_quote_value = if quotes.is_empty() {
        0.0
    } else {
        quotes.iter().map(|q| q.amount).sum::<f64>() / total_quotes as f64
    };

    let completed = rfqs.iter().filter(|r| r.status.is_completed()).count();
    let completion_rate = if total_rfqs == 0 {
        0.0
    } else {
        completed as f64 / total_rfqs as f64 * 100.0
    };

    let mut rfqs_by_status = BTreeMap::new();
    for rfq in rfqs {
        *rfqs_by_status.entry(rfq.status).or_insert(0) += 1;
    }

    ReportData {
        total_rfqs,
        total_quotes,
        average_quote_value,
        completion_rate,
        rfqs_by_status,
        quotes_over_time: quotes_over_time(quotes, now),
        top_vendors: top_vendors(quotes),
    }
}

/// One bucket per calendar day (UTC) for the trailing week, oldest first
fn quotes_over_time(quotes: &[Quote], now: DateTime<Utc>) -> Vec<DailyCount> {
    (0..TREND_DAYS)
        .map(|i| {
            let day = now - Duration::days(TREND_DAYS - 1 - i);
            let key = day.format("%Y-%m-%d").to_string();
            let count = quotes
                .iter()
                .filter(|q| q.created_at.format("%Y-%m-%d").to_string() == key)
                .count();

            DailyCount {
                date: day.format("%b %d").to_string(),
                count,
            }
        })
        .collect()
}

/// Vendors by quote count, descending. Ties keep the order vendors were first seen.
fn top_vendors(quotes: &[Quote]) -> Vec<VendorSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<(&str, usize, f64)> = Vec::new();

    for quote in quotes {
        let slot = *index.entry(quote.vendor_id.as_str()).or_insert_with(|| {
            stats.push((quote.vendor_id.as_str(), 0, 0.0));
            stats.len() - 1
        });
        stats[slot].1 += 1;
        stats[slot].2 += quote.amount;
    }

    let mut vendors: Vec<VendorSummary> = stats
        .into_iter()
        .map(|(vendor_id, count, total)| VendorSummary {
            vendor_id: vendor_id.to_string(),
            name: format!("Vendor {}", short_id(vendor_id, 8)),
            quote_count: count,
            avg_amount: total / count as f64,
        })
        .collect();

    // sort_by is stable
    vendors.sort_by(|a, b| b.quote_count.cmp(&a.quote_count));
    vendors.truncate(TOP_VENDOR_LIMIT);
    vendors
}
