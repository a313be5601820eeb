// ABOUTME: Derived notification feed
// ABOUTME: Builds notifications from quote and RFQ activity; only read state is stored

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use vendorworld_quotes::{Quote, QuoteStatus};
use vendorworld_rfqs::Rfq;

/// Maximum number of notifications returned
pub const FEED_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    QuoteReceived,
    RfqAwarded,
    RfqClosed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub rfq_id: String,
    pub rfq_title: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Build the viewer's feed, newest first.
///
/// `received` holds quotes on RFQs the viewer owns, `own` holds quotes the
/// viewer submitted; each paired with its RFQ.
pub fn build_feed(
    received: &[(Quote, Rfq)],
    own: &[(Quote, Rfq)],
    read_ids: &HashSet<String>,
) -> Vec<Notification> {
    let mut feed: Vec<Notification> = Vec::new();

    for (quote, rfq) in received {
        if quote.status == QuoteStatus::Draft {
            continue;
        }
        feed.push(Notification {
            id: format!("quote-{}", quote.id),
            kind: NotificationKind::QuoteReceived,
            title: "New Quote Received".to_string(),
            message: format!("You received a new quote for \"{}\"", rfq.title),
            rfq_id: rfq.id.clone(),
            rfq_title: rfq.title.clone(),
            read: false,
            created_at: quote.submitted_at.unwrap_or(quote.created_at),
        });
    }

    for (quote, rfq) in own {
        let (kind, title, message, created_at) = if quote.status == QuoteStatus::Accepted {
            (
                NotificationKind::RfqAwarded,
                "Quote Accepted!",
                format!("Your quote for \"{}\" was accepted!", rfq.title),
                quote.updated_at,
            )
        } else if !rfq.status.accepts_quotes() {
            (
                NotificationKind::RfqClosed,
                "RFQ Status Update",
                format!("RFQ \"{}\" status changed to {}", rfq.title, rfq.status),
                rfq.updated_at,
            )
        } else {
            continue;
        };

        feed.push(Notification {
            id: format!("status-{}", quote.id),
            kind,
            title: title.to_string(),
            message,
            rfq_id: rfq.id.clone(),
            rfq_title: rfq.title.clone(),
            read: false,
            created_at,
        });
    }

    for notification in &mut feed {
        notification.read = read_ids.contains(&notification.id);
    }

    feed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    feed.truncate(FEED_LIMIT);
    feed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::{now, quote, rfq};
    use chrono::Duration;
    use vendorworld_rfqs::RfqStatus;

    #[test]
    fn test_received_quotes_notify_owner() {
        let open = rfq("rfq-1", RfqStatus::Open);
        let mut draft = quote("A", 1.0, now());
        draft.status = QuoteStatus::Draft;
        let received = vec![(quote("B", 2.0, now()), open.clone()), (draft, open)];

        let feed = build_feed(&received, &[], &HashSet::new());

        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].kind, NotificationKind::QuoteReceived);
        assert_eq!(feed[0].message, "You received a new quote for \"RFQ rfq-1\"");
        assert!(!feed[0].read);
    }

    #[test]
    fn test_vendor_status_updates() {
        let mut accepted = quote("me", 5.0, now() - Duration::days(2));
        accepted.status = QuoteStatus::Accepted;
        accepted.updated_at = now() - Duration::days(1);
        let own = vec![
            (accepted, rfq("rfq-a", RfqStatus::Awarded)),
            (quote("me", 6.0, now()), rfq("rfq-b", RfqStatus::Closed)),
            (quote("me", 7.0, now()), rfq("rfq-c", RfqStatus::Open)),
        ];

        let feed = build_feed(&[], &own, &HashSet::new());

        let kinds: Vec<NotificationKind> = feed.iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NotificationKind::RfqClosed, NotificationKind::RfqAwarded]);
        assert_eq!(feed[0].message, "RFQ \"RFQ rfq-b\" status changed to closed");
    }

    #[test]
    fn test_read_state_and_limit() {
        let open = rfq("rfq-1", RfqStatus::Open);
        let received: Vec<(Quote, Rfq)> = (0..25)
            .map(|i| {
                let mut q = quote("V", i as f64, now() - Duration::minutes(i));
                q.id = format!("q{}", i);
                (q, open.clone())
            })
            .collect();
        let read: HashSet<String> = ["quote-q0".to_string()].into_iter().collect();

        let feed = build_feed(&received, &[], &read);

        assert_eq!(feed.len(), FEED_LIMIT);
        assert_eq!(feed[0].id, "quote-q0");
        assert!(feed[0].read);
        assert!(!feed[1].read);
        assert!(feed.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }
}
