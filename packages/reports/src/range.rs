// ABOUTME: Report date ranges
// ABOUTME: Maps week/month/quarter selections to a start instant

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    /// Trailing 7 days
    Week,
    /// Since midnight UTC on the first of the current month
    #[default]
    Month,
    /// Trailing 90 days
    Quarter,
}

impl DateRange {
    pub fn start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            DateRange::Week => now - Duration::days(7),
            DateRange::Quarter => now - Duration::days(90),
            DateRange::Month => now
                .date_naive()
                .with_day(1)
                .and_then(|day| day.and_hms_opt(0, 0, 0))
                .map(|start| start.and_utc())
                .unwrap_or(now),
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        instant >= self.start(now) && instant <= now
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::Week => "week",
            DateRange::Month => "month",
            DateRange::Quarter => "quarter",
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(DateRange::Week),
            "month" => Ok(DateRange::Month),
            "quarter" => Ok(DateRange::Quarter),
            other => Err(format!(
                "unknown date range '{}' (expected week, month, or quarter)",
                other
            )),
        }
    }
}
