// ABOUTME: Dashboard counters shown on the landing page
// ABOUTME: Derived from the viewer's RFQs, own quotes, and the vendor directory size

use serde::Serialize;

use vendorworld_quotes::{Quote, QuoteStatus};
use vendorworld_rfqs::{Rfq, RfqStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_rfqs: usize,
    pub completed_rfqs: usize,
    pub pending_quotes: usize,
    pub total_vendors: i64,
}

impl DashboardStats {
    /// `owned_rfqs` are RFQs the viewer created, `own_quotes` quotes the viewer wrote
    pub fn compute(owned_rfqs: &[Rfq], own_quotes: &[Quote], total_vendors: i64) -> Self {
        Self {
            active_rfqs: owned_rfqs
                .iter()
                .filter(|r| r.status == RfqStatus::Open)
                .count(),
            completed_rfqs: owned_rfqs.iter().filter(|r| r.status.is_completed()).count(),
            pending_quotes: own_quotes
                .iter()
                .filter(|q| q.status == QuoteStatus::Draft)
                .count(),
            total_vendors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::{now, quote, rfq};

    #[test]
    fn test_compute() {
        let rfqs = vec![
            rfq("1", RfqStatus::Open),
            rfq("2", RfqStatus::Open),
            rfq("3", RfqStatus::Awarded),
            rfq("4", RfqStatus::Cancelled),
        ];
        let mut draft = quote("A", 1.0, now());
        draft.status = QuoteStatus::Draft;
        let quotes = vec![draft, quote("A", 2.0, now())];

        let stats = DashboardStats::compute(&rfqs, &quotes, 7);

        assert_eq!(
            stats,
            DashboardStats {
                active_rfqs: 2,
                completed_rfqs: 1,
                pending_quotes: 1,
                total_vendors: 7,
            }
        );
    }
}
