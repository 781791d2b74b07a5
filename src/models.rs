//! Frontend Models
//!
//! Re-exports of the core entities plus presentation helpers.

pub use console_core::domain::{Lead, LeadStatus, Opportunity, Stage};

/// Badge class for a lead status
pub fn status_class(status: LeadStatus) -> &'static str {
    match status {
        LeadStatus::New => "badge badge-new",
        LeadStatus::Contacted => "badge badge-contacted",
        LeadStatus::Qualified => "badge badge-qualified",
        LeadStatus::Disqualified => "badge badge-disqualified",
    }
}

/// Text class for a score: 90+ high, 80+ medium, otherwise low
pub fn score_class(score: u32) -> &'static str {
    if score >= 90 {
        "score score-high"
    } else if score >= 80 {
        "score score-medium"
    } else {
        "score score-low"
    }
}

pub fn stage_class(stage: Stage) -> &'static str {
    match stage {
        Stage::ClosedWon => "badge badge-won",
        Stage::ClosedLost => "badge badge-lost",
        Stage::Negotiation | Stage::Proposal => "badge badge-advanced",
        Stage::Prospecting | Stage::Qualification => "badge badge-early",
    }
}

/// Amount cell text; a missing amount renders as a dash
pub fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(value) => console_core::stats::format_currency(value),
        None => "-".to_string(),
    }
}

/// Date part of an ISO timestamp, or the raw text if it does not parse
pub fn format_date(iso: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(iso)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}
