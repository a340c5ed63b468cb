// src/mailbox/fixtures.rs
// Seed data for the demo inbox. Ids are fixed so the dashboard and the
// tests can address individual records.

use chrono::{DateTime, TimeZone, Utc};

use crate::triage::{EmailAnalysis, Priority, Sentiment};

use super::types::Email;

fn at(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, min, 0).unwrap()
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// The five demo emails, four of them pre-analyzed.
pub fn seed_emails() -> Vec<Email> {
    vec![
        Email {
            id: "1".to_string(),
            subject: "Urgent Support Request - System Down".to_string(),
            sender: "john.doe@company.com".to_string(),
            body: "Hi, our entire system has been down for the past 2 hours. This is affecting all our customers and we need immediate assistance. Please prioritize this request.".to_string(),
            timestamp: at(15, 9, 30),
            analysis: Some(EmailAnalysis {
                sentiment: Sentiment::Negative,
                priority: Priority::Urgent,
                summary: "Critical system outage affecting all customers, requires immediate attention.".to_string(),
                keywords: keywords(&["urgent", "system down", "customers affected"]),
            }),
            draft_response: None,
            is_triaged: true,
        },
        Email {
            id: "2".to_string(),
            subject: "Query about Product Features".to_string(),
            sender: "sarah.wilson@client.com".to_string(),
            body: "Hello, I hope you are doing well. I wanted to inquire about the advanced features available in your premium plan. Could you please send me detailed information?".to_string(),
            timestamp: at(15, 8, 15),
            analysis: Some(EmailAnalysis {
                sentiment: Sentiment::Positive,
                priority: Priority::Medium,
                summary: "Customer inquiry about premium plan features, needs product information.".to_string(),
                keywords: keywords(&["query", "product features", "premium plan"]),
            }),
            draft_response: None,
            is_triaged: true,
        },
        Email {
            id: "3".to_string(),
            subject: "Help with Account Setup".to_string(),
            sender: "mike.chen@startup.io".to_string(),
            body: "I am having trouble setting up my new account. The verification email is not arriving and I have checked my spam folder multiple times. Can you help me resolve this issue?".to_string(),
            timestamp: at(15, 7, 45),
            analysis: Some(EmailAnalysis {
                sentiment: Sentiment::Neutral,
                priority: Priority::High,
                summary: "Account setup issue with email verification, technical support needed.".to_string(),
                keywords: keywords(&["help", "account setup", "verification"]),
            }),
            draft_response: None,
            is_triaged: true,
        },
        Email {
            id: "4".to_string(),
            subject: "Weekly Newsletter Feedback".to_string(),
            sender: "emma.taylor@reader.com".to_string(),
            body: "I really enjoy reading your weekly newsletter. The content is always relevant and well-written. Keep up the great work! Looking forward to next week's edition.".to_string(),
            timestamp: at(14, 16, 20),
            analysis: Some(EmailAnalysis {
                sentiment: Sentiment::Positive,
                priority: Priority::Low,
                summary: "Positive feedback about newsletter content, no action required.".to_string(),
                keywords: keywords(&["feedback", "newsletter", "positive"]),
            }),
            draft_response: None,
            is_triaged: false,
        },
        Email {
            id: "5".to_string(),
            subject: "Partnership Proposal".to_string(),
            sender: "david.brown@partner.com".to_string(),
            body: "We would like to propose a strategic partnership between our companies. Our team believes there are significant synergies that could benefit both organizations. Would you be available for a call next week?".to_string(),
            timestamp: at(14, 14, 30),
            analysis: None,
            draft_response: None,
            is_triaged: false,
        },
    ]
}
