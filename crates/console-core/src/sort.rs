//! Sortable Table Ordering
//!
//! Column sort state for tabular views. Selecting the same column cycles
//! ascending, descending, unsorted.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::domain::{Lead, Opportunity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Stored as `{"key": string|null, "direction": "asc"|"desc"|null}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: Option<SortDirection>,
}

impl SortState {
    pub fn new(key: &str, direction: SortDirection) -> Self {
        Self {
            key: Some(key.to_string()),
            direction: Some(direction),
        }
    }

    pub fn unsorted() -> Self {
        Self::default()
    }

    /// State after the user selects `column`
    pub fn toggle(&self, column: &str) -> Self {
        let same_column = self.key.as_deref() == Some(column);
        match (same_column, self.direction) {
            (true, Some(SortDirection::Asc)) => Self::new(column, SortDirection::Desc),
            (true, Some(SortDirection::Desc)) => Self::unsorted(),
            _ => Self::new(column, SortDirection::Asc),
        }
    }

    /// Active direction for `column`, if it is the sorted one
    pub fn direction_for(&self, column: &str) -> Option<SortDirection> {
        if self.key.as_deref() == Some(column) {
            self.direction
        } else {
            None
        }
    }

    fn active(&self) -> Option<(&str, SortDirection)> {
        Some((self.key.as_deref()?, self.direction?))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(f64),
}

impl SortValue {
    fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => compare_text(a, b),
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
            (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
        }
    }
}

/// Caseless, accent-folded order with a caseless tie-break, so "Émile"
/// sorts between "Elena" and "Fatima".
///
/// This is not full locale collation: letters such as `ß` or `ø` that do not
/// decompose still order by code point.
fn compare_text(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
}

fn collation_key(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// A row whose columns can be compared by name
pub trait SortableRow {
    /// `None` for unknown columns and missing values
    fn sort_value(&self, column: &str) -> Option<SortValue>;
}

/// Rows ordered by `state`; missing values always go last.
///
/// Unsorted state returns the rows in their given order.
pub fn sort_rows<T: SortableRow + Clone>(rows: &[T], state: &SortState) -> Vec<T> {
    let mut sorted = rows.to_vec();
    let Some((column, direction)) = state.active() else {
        return sorted;
    };
    sorted.sort_by(|a, b| match (a.sort_value(column), b.sort_value(column)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => direction.apply(a.compare(&b)),
    });
    sorted
}

pub const LEAD_COLUMNS: [(&str, &str); 6] = [
    ("name", "Name"),
    ("company", "Company"),
    ("email", "Email"),
    ("source", "Source"),
    ("score", "Score"),
    ("status", "Status"),
];

pub const OPPORTUNITY_COLUMNS: [(&str, &str); 5] = [
    ("name", "Name"),
    ("accountName", "Account"),
    ("stage", "Stage"),
    ("amount", "Amount"),
    ("createdAt", "Created"),
];

fn text(value: &str) -> Option<SortValue> {
    Some(SortValue::Text(value.to_string()))
}

impl SortableRow for Lead {
    fn sort_value(&self, column: &str) -> Option<SortValue> {
        match column {
            "id" => text(&self.id),
            "name" => text(&self.name),
            "company" => text(&self.company),
            "email" => text(&self.email),
            "source" => text(&self.source),
            "score" => Some(SortValue::Number(f64::from(self.score))),
            "status" => text(self.status.as_str()),
            _ => None,
        }
    }
}

impl SortableRow for Opportunity {
    fn sort_value(&self, column: &str) -> Option<SortValue> {
        match column {
            "id" => text(&self.id),
            "name" => text(&self.name),
            "accountName" => text(&self.account_name),
            "stage" => text(self.stage.as_str()),
            "amount" => self.amount.map(SortValue::Number),
            "leadId" => text(&self.lead_id),
            "createdAt" => text(&self.created_at),
            "updatedAt" => text(&self.updated_at),
            _ => None,
        }
    }
}
