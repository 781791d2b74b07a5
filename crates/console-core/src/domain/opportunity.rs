//! Opportunity Entity
//!
//! A sales pipeline entry produced by converting a lead.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Pipeline position of an opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Stage {
    #[default]
    Prospecting,
    Qualification,
    Proposal,
    Negotiation,
    #[serde(rename = "Closed Won")]
    ClosedWon,
    #[serde(rename = "Closed Lost")]
    ClosedLost,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Prospecting,
        Stage::Qualification,
        Stage::Proposal,
        Stage::Negotiation,
        Stage::ClosedWon,
        Stage::ClosedLost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Prospecting => "Prospecting",
            Stage::Qualification => "Qualification",
            Stage::Proposal => "Proposal",
            Stage::Negotiation => "Negotiation",
            Stage::ClosedWon => "Closed Won",
            Stage::ClosedLost => "Closed Lost",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| format!("unknown stage: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    pub name: String,
    pub stage: Stage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub account_name: String,
    /// Originating lead (not unique across opportunities)
    pub lead_id: String,
    /// ISO-8601
    pub created_at: String,
    /// ISO-8601
    pub updated_at: String,
}

impl Entity for Opportunity {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Input for creating an opportunity
#[derive(Debug, Clone, PartialEq)]
pub struct NewOpportunity {
    pub name: String,
    pub stage: Stage,
    pub amount: Option<f64>,
    pub account_name: String,
    pub lead_id: String,
}

/// Partial update of an opportunity.
///
/// `amount: Some(None)` clears the amount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpportunityPatch {
    pub name: Option<String>,
    pub stage: Option<Stage>,
    pub amount: Option<Option<f64>>,
    pub account_name: Option<String>,
}

impl OpportunityPatch {
    pub fn stage(stage: Stage) -> Self {
        Self {
            stage: Some(stage),
            ..Default::default()
        }
    }

    pub(crate) fn apply_to(&self, opportunity: &mut Opportunity) {
        if let Some(name) = &self.name {
            opportunity.name = name.clone();
        }
        if let Some(stage) = self.stage {
            opportunity.stage = stage;
        }
        if let Some(amount) = self.amount {
            opportunity.amount = amount;
        }
        if let Some(account_name) = &self.account_name {
            opportunity.account_name = account_name.clone();
        }
    }
}

/// Format a timestamp the way browsers render `Date.toISOString()`
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// Generates `opp_<epoch millis>_<random base36 suffix>` identifiers
pub struct IdGenerator {
    rng: StdRng,
}

impl IdGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_id(&mut self, at: DateTime<Utc>) -> String {
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| SUFFIX_ALPHABET[self.rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
            .collect();
        format!("opp_{}_{}", at.timestamp_millis(), suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use regex::Regex;

    fn sample() -> Opportunity {
        Opportunity {
            id: "opp_1_abc".to_string(),
            name: "Ana Souza".to_string(),
            stage: Stage::Proposal,
            amount: None,
            account_name: "Tech Solutions".to_string(),
            lead_id: "1".to_string(),
            created_at: "2025-01-01T00:00:00.000Z".to_string(),
            updated_at: "2025-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_stage_wire_names() {
        assert_eq!(serde_json::to_string(&Stage::ClosedWon).unwrap(), "\"Closed Won\"");
        assert_eq!("Closed Lost".parse::<Stage>(), Ok(Stage::ClosedLost));
        assert!("closed-lost".parse::<Stage>().is_err());
    }

    #[test]
    fn test_camel_case_and_missing_amount() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["accountName"], "Tech Solutions");
        assert_eq!(json["leadId"], "1");
        assert!(json.get("amount").is_none());

        let back: Opportunity = serde_json::from_value(json).unwrap();
        assert_eq!(back.amount, None);
    }

    #[test]
    fn test_patch_can_clear_amount() {
        let mut opp = sample();
        opp.amount = Some(500.0);
        OpportunityPatch { amount: Some(None), ..Default::default() }.apply_to(&mut opp);
        assert_eq!(opp.amount, None);
        assert_eq!(opp.stage, Stage::Proposal);
    }

    #[test]
    fn test_iso_timestamp_matches_browser_format() {
        let at = Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(iso_timestamp(at), "2025-03-04T05:06:07.000Z");
    }

    #[test]
    fn test_id_format() {
        let pattern = Regex::new(r"^opp_\d+_[0-9a-z]{9}$").unwrap();
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let mut ids = IdGenerator::new(7);
        let first = ids.next_id(at);
        let second = ids.next_id(at);

        assert!(pattern.is_match(&first), "{}", first);
        assert!(first.starts_with("opp_1700000000123_"));
        assert_ne!(first, second);
    }
}
