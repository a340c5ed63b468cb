// src/mailbox/ordering.rs
// Inbox ordering and filtering, kept as pure functions so they can be
// tested without the store or the HTTP layer.

use super::types::Email;
use crate::triage::Priority;

/// Rank table for inbox ordering. Unanalyzed emails sort below `low`.
pub fn priority_rank(priority: Option<Priority>) -> u8 {
    priority.map(Priority::rank).unwrap_or(0)
}

/// Order emails for display: priority rank descending, ties broken by
/// timestamp descending (most recent first). The sort is stable, so fully
/// tied pairs keep their existing relative order.
pub fn sort_for_inbox(emails: &mut [Email]) {
    emails.sort_by(|a, b| {
        let a_rank = priority_rank(a.analysis.as_ref().map(|x| x.priority));
        let b_rank = priority_rank(b.analysis.as_ref().map(|x| x.priority));
        b_rank
            .cmp(&a_rank)
            .then_with(|| b.timestamp.cmp(&a.timestamp))
    });
}

/// The triage queue: emails flagged by upstream ingestion.
pub fn triage_only(emails: Vec<Email>) -> Vec<Email> {
    emails.into_iter().filter(|e| e.is_triaged).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::{EmailAnalysis, Sentiment};
    use chrono::{TimeZone, Utc};

    fn email(id: &str, priority: Option<Priority>, hour: u32) -> Email {
        Email {
            id: id.to_string(),
            subject: "subject".to_string(),
            sender: "sender@example.com".to_string(),
            body: "body".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 15, hour, 0, 0).unwrap(),
            analysis: priority.map(|priority| EmailAnalysis {
                sentiment: Sentiment::Neutral,
                priority,
                summary: String::new(),
                keywords: vec![],
            }),
            draft_response: None,
            is_triaged: false,
        }
    }

    #[test]
    fn test_rank_table() {
        assert_eq!(priority_rank(Some(Priority::Urgent)), 4);
        assert_eq!(priority_rank(Some(Priority::High)), 3);
        assert_eq!(priority_rank(Some(Priority::Medium)), 2);
        assert_eq!(priority_rank(Some(Priority::Low)), 1);
        assert_eq!(priority_rank(None), 0);
    }

    #[test]
    fn test_urgent_entries_lead_and_tie_break_on_recency() {
        let mut emails = vec![
            email("a", Some(Priority::Low), 9),
            email("b", Some(Priority::Urgent), 7),
            email("c", Some(Priority::Medium), 12),
            email("d", Some(Priority::Urgent), 10),
        ];

        sort_for_inbox(&mut emails);

        let ids: Vec<&str> = emails.iter().map(|e| e.id.as_str()).collect();
        // Both urgent entries first, newer urgent before older urgent.
        assert_eq!(ids, vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn test_unanalyzed_sorts_last() {
        let mut emails = vec![email("a", None, 23), email("b", Some(Priority::Low), 1)];

        sort_for_inbox(&mut emails);

        assert_eq!(emails[0].id, "b");
        assert_eq!(emails[1].id, "a");
    }

    #[test]
    fn test_triage_filter() {
        let mut flagged = email("a", None, 1);
        flagged.is_triaged = true;
        let unflagged = email("b", None, 2);

        let kept = triage_only(vec![flagged, unflagged]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "a");
    }
}
