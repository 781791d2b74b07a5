//! Lead Entity
//!
//! A prospective customer record awaiting triage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Triage state of a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Disqualified,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Disqualified,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Disqualified => "disqualified",
        }
    }

    /// Capitalized label for select options
    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Disqualified => "Disqualified",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown lead status: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub company: String,
    /// Free text at rest; validated only when edited
    pub email: String,
    /// Origin channel (web, referral, ...)
    pub source: String,
    /// Conventionally 0-100
    pub score: u32,
    pub status: LeadStatus,
}

impl Entity for Lead {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The mutable subset of a lead
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
}

impl LeadPatch {
    /// Merge into a copy of `lead`; the identifier is never touched
    pub fn apply_to(&self, lead: &Lead) -> Lead {
        let mut updated = lead.clone();
        if let Some(email) = &self.email {
            updated.email = email.clone();
        }
        if let Some(status) = self.status {
            updated.status = status;
        }
        updated
    }
}
