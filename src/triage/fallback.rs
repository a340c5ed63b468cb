// src/triage/fallback.rs
// Degraded-mode heuristics, substituted whenever the completion endpoint
// fails. Pure string matching over already-validated inputs; must never
// panic and must stay byte-for-byte deterministic.

use super::types::{EmailAnalysis, Priority, Sentiment};

/// Keyword-based stand-in for the remote analysis.
pub fn heuristic_analysis(subject: &str, body: &str) -> EmailAnalysis {
    let subject_lower = subject.to_lowercase();
    let body_lower = body.to_lowercase();

    let sentiment = if body_lower.contains("urgent") || body_lower.contains("problem") {
        Sentiment::Negative
    } else if body_lower.contains("thank") || body_lower.contains("great") {
        Sentiment::Positive
    } else {
        Sentiment::Neutral
    };

    let priority = if subject_lower.contains("urgent") {
        Priority::Urgent
    } else if subject_lower.contains("support") || subject_lower.contains("help") {
        Priority::High
    } else {
        Priority::Medium
    };

    EmailAnalysis {
        sentiment,
        priority,
        summary: format!("Email regarding: {}", subject),
        keywords: vec!["email".to_string(), "request".to_string()],
    }
}

/// Templated stand-in for the remote draft, keyed by priority and
/// sentiment of the given analysis.
pub fn heuristic_response(analysis: &EmailAnalysis) -> String {
    let noun = if analysis.sentiment == Sentiment::Negative {
        "concern"
    } else {
        "message"
    };

    let timeline = match analysis.priority {
        Priority::Urgent => {
            "We understand the critical nature of this issue and will provide updates within the next hour."
        }
        Priority::High => "We will get back to you within 24 hours with a detailed response.",
        _ => "We will respond within 2-3 business days.",
    };

    format!(
        "Dear Customer,\n\nThank you for your {} priority {}. We have received your request and our team will address this promptly.\n\n{}\n\nBest regards,\nSupport Team",
        analysis.priority.as_str(),
        noun,
        timeline
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(sentiment: Sentiment, priority: Priority) -> EmailAnalysis {
        EmailAnalysis {
            sentiment,
            priority,
            summary: "test".to_string(),
            keywords: vec![],
        }
    }

    #[test]
    fn test_priority_urgent_from_subject() {
        let result = heuristic_analysis("URGENT: everything is on fire", "body");
        assert_eq!(result.priority, Priority::Urgent);
    }

    #[test]
    fn test_priority_high_from_support_or_help() {
        let support = heuristic_analysis("Support needed for login", "body");
        assert_eq!(support.priority, Priority::High);

        let help = heuristic_analysis("Please HELP with my account", "body");
        assert_eq!(help.priority, Priority::High);
    }

    #[test]
    fn test_priority_urgent_wins_over_support() {
        let result = heuristic_analysis("Urgent support request", "body");
        assert_eq!(result.priority, Priority::Urgent);
    }

    #[test]
    fn test_priority_defaults_to_medium() {
        let result = heuristic_analysis("Quarterly newsletter", "body");
        assert_eq!(result.priority, Priority::Medium);
    }

    #[test]
    fn test_sentiment_negative_from_body() {
        let urgent = heuristic_analysis("subject", "this is urgent, please act");
        assert_eq!(urgent.sentiment, Sentiment::Negative);

        let problem = heuristic_analysis("subject", "we found a Problem with billing");
        assert_eq!(problem.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_sentiment_negative_wins_over_positive() {
        let result = heuristic_analysis("subject", "thank you, but there is a problem");
        assert_eq!(result.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_sentiment_positive_from_body() {
        let thanks = heuristic_analysis("subject", "Thank you for the quick reply");
        assert_eq!(thanks.sentiment, Sentiment::Positive);

        let great = heuristic_analysis("subject", "the new release is great");
        assert_eq!(great.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_sentiment_defaults_to_neutral() {
        let result = heuristic_analysis("subject", "see attached invoice");
        assert_eq!(result.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_summary_and_keywords_are_fixed() {
        let result = heuristic_analysis("Renewal question", "body");
        assert_eq!(result.summary, "Email regarding: Renewal question");
        assert_eq!(result.keywords, vec!["email", "request"]);
    }

    #[test]
    fn test_heuristic_analysis_is_deterministic() {
        let first = heuristic_analysis("Some subject", "some body text");
        let second = heuristic_analysis("Some subject", "some body text");
        assert_eq!(first, second);
    }

    #[test]
    fn test_response_timeline_urgent() {
        let draft = heuristic_response(&analysis(Sentiment::Negative, Priority::Urgent));
        assert!(draft.contains(
            "We understand the critical nature of this issue and will provide updates within the next hour."
        ));
        assert!(draft.contains("your urgent priority concern"));
    }

    #[test]
    fn test_response_timeline_high() {
        let draft = heuristic_response(&analysis(Sentiment::Neutral, Priority::High));
        assert!(draft.contains("We will get back to you within 24 hours with a detailed response."));
        assert!(draft.contains("your high priority message"));
        assert!(!draft.contains("concern"));
    }

    #[test]
    fn test_response_timeline_medium_and_low() {
        for priority in [Priority::Medium, Priority::Low] {
            let draft = heuristic_response(&analysis(Sentiment::Positive, priority));
            assert!(draft.contains("We will respond within 2-3 business days."));
        }
    }

    #[test]
    fn test_response_frame() {
        let draft = heuristic_response(&analysis(Sentiment::Neutral, Priority::Medium));
        assert!(draft.starts_with("Dear Customer,"));
        assert!(draft.ends_with("Best regards,\nSupport Team"));
    }
}
