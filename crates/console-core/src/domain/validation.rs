//! Form Validation
//!
//! Client-side checks run before any update or conversion is attempted.
//! Errors are collected per field so the form can render them inline.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use super::lead::{Lead, LeadPatch, LeadStatus};
use super::opportunity::{NewOpportunity, Stage};

pub const INVALID_EMAIL: &str = "Invalid email format";
pub const INVALID_STATUS: &str = "Invalid status";
pub const NAME_REQUIRED: &str = "Opportunity name is required";
pub const ACCOUNT_REQUIRED: &str = "Account name is required";
pub const INVALID_STAGE: &str = "Invalid stage";
pub const AMOUNT_NOT_NUMBER: &str = "Amount must be a number";
pub const AMOUNT_NEGATIVE: &str = "Amount must be zero or greater";

/// Field name -> message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
            .expect("email pattern is valid")
    })
}

/// Standard address grammar; leading dots, `..` and surrounding whitespace
/// are rejected
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.starts_with('.') || email.contains("..") || !email_pattern().is_match(email) {
        return Err(INVALID_EMAIL);
    }
    Ok(())
}

/// Lead edit form as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadEditForm {
    pub email: String,
    pub status: String,
}

impl LeadEditForm {
    pub fn from_lead(lead: &Lead) -> Self {
        Self {
            email: lead.email.clone(),
            status: lead.status.as_str().to_string(),
        }
    }

    pub fn validate(&self) -> Result<LeadPatch, FieldErrors> {
        let mut errors = FieldErrors::default();
        if let Err(message) = validate_email(&self.email) {
            errors.add("email", message);
        }
        let status = self.status.parse::<LeadStatus>().ok();
        if status.is_none() {
            errors.add("status", INVALID_STATUS);
        }
        errors.into_result(|| LeadPatch {
            email: Some(self.email.clone()),
            status,
        })
    }
}

/// Conversion form as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionForm {
    pub name: String,
    pub account_name: String,
    pub stage: String,
    pub amount: String,
}

impl ConversionForm {
    /// Name and account come from the lead and are not independently editable
    pub fn from_lead(lead: &Lead) -> Self {
        Self {
            name: lead.name.clone(),
            account_name: lead.company.clone(),
            stage: Stage::Prospecting.as_str().to_string(),
            amount: String::new(),
        }
    }

    pub fn validate(&self, lead_id: &str) -> Result<NewOpportunity, FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.add("name", NAME_REQUIRED);
        }
        if self.account_name.trim().is_empty() {
            errors.add("accountName", ACCOUNT_REQUIRED);
        }
        let stage = self.stage.parse::<Stage>().ok();
        if stage.is_none() {
            errors.add("stage", INVALID_STAGE);
        }
        let amount = match parse_amount(&self.amount) {
            Ok(amount) => amount,
            Err(message) => {
                errors.add("amount", message);
                None
            }
        };
        errors.into_result(|| NewOpportunity {
            name: self.name.trim().to_string(),
            stage: stage.unwrap_or_default(),
            amount,
            account_name: self.account_name.trim().to_string(),
            lead_id: lead_id.to_string(),
        })
    }
}

/// Blank input means "no amount", never zero
pub fn parse_amount(input: &str) -> Result<Option<f64>, &'static str> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    let value: f64 = input.parse().map_err(|_| AMOUNT_NOT_NUMBER)?;
    if !value.is_finite() {
        return Err(AMOUNT_NOT_NUMBER);
    }
    if value < 0.0 {
        return Err(AMOUNT_NEGATIVE);
    }
    Ok(Some(value))
}
