// ABOUTME: CSV export of report data
// ABOUTME: Produces the downloadable metric/value sheet and its file name

use chrono::{DateTime, Utc};

use crate::report::ReportData;

/// Render the report as comma-separated rows.
///
/// Cells are written verbatim; vendor rows embed `", "` in their value cell.
pub fn to_csv(report: &ReportData) -> String {
    let mut rows: Vec<Vec<String>> = vec![
        vec!["Metric".into(), "Value".into()],
        vec!["Total RFQs".into(), report.total_rfqs.to_string()],
        vec!["Total Quotes".into(), report.total_quotes.to_string()],
        vec![
            "Average Quote Value".into(),
            format!("${}", to_fixed(report.average_quote_value, 2)),
        ],
        vec![
            "Completion Rate".into(),
            format!("{}%", to_fixed(report.completion_rate, 1)),
        ],
        vec![String::new()],
        vec!["RFQ Status Breakdown".into()],
    ];

    rows.extend(
        report
            .rfqs_by_status
            .iter()
            .map(|(status, count)| vec![status.to_string(), count.to_string()]),
    );

    rows.push(vec![String::new()]);
    rows.push(vec!["Top Vendors".into()]);

    rows.extend(report.top_vendors.iter().map(|vendor| {
        vec![
            vendor.name.clone(),
            format!(
                "{} quotes, ${} avg",
                vendor.quote_count,
                to_fixed(vendor.avg_amount, 2)
            ),
        ]
    }));

    rows.iter()
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("rfq-report-{}.csv", now.format("%Y-%m-%d"))
}

/// Digits requested beyond `digits` to see the exact binary value of an f64
const EXACT_DIGITS: usize = 1100;

/// Fixed-point text with `digits` decimals where an exact half rounds away from zero.
///
/// `format!("{:.2}")` sends exact binary halves such as `0.125` to the even
/// neighbour (`0.12`); report cells show `0.13`.
fn to_fixed(value: f64, digits: usize) -> String {
    let rounded = format!("{:.*}", digits, value);
    if !value.is_finite() {
        return rounded;
    }

    let exact = format!("{:.*}", digits + EXACT_DIGITS, value.abs());
    let Some(dot) = exact.find('.') else {
        return rounded;
    };
    let (kept, tail) = exact.split_at(dot + 1 + digits);

    let is_half = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_half {
        return rounded;
    }

    let mut kept: Vec<u8> = kept.trim_end_matches('.').bytes().collect();
    let mut i = kept.len();
    loop {
        if i == 0 {
            kept.insert(0, b'1');
            break;
        }
        i -= 1;
        match kept[i] {
            b'.' => continue,
            b'9' => kept[i] = b'0',
            digit => {
                kept[i] = digit + 1;
                break;
            }
        }
    }

    let magnitude: String = kept.into_iter().map(char::from).collect();
    if value.is_sign_negative() {
        format!("-{}", magnitude)
    } else {
        magnitude
    }
}
