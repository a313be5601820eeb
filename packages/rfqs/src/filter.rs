// ABOUTME: Search and status filtering for RFQ lists
// ABOUTME: Query-string driven filter applied to loaded RFQ records

use serde::{Deserialize, Deserializer};

use crate::types::{Rfq, RfqStatus};
use vendorworld_core::matches_search;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RfqFilter {
    pub search: Option<String>,
    /// `None` means every status (`?status=all` or no parameter)
    #[serde(default, deserialize_with = "deserialize_status")]
    pub status: Option<RfqStatus>,
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<Option<RfqStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(value) => value
            .parse::<RfqStatus>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl RfqFilter {
    pub fn matches(&self, rfq: &Rfq) -> bool {
        let matches_status = self.status.map_or(true, |status| rfq.status == status);
        let matches_text = matches_search(
            self.search.as_deref().unwrap_or_default(),
            &[Some(rfq.title.as_str()), rfq.description.as_deref()],
        );
        matches_status && matches_text
    }

    pub fn apply(&self, rfqs: Vec<Rfq>) -> Vec<Rfq> {
        rfqs.into_iter().filter(|rfq| self.matches(rfq)).collect()
    }
}
