//! Derived Lead View
//!
//! Pure computation of the leads shown for the current criteria.

use serde::{Deserialize, Serialize};

use crate::domain::{Lead, LeadStatus};

/// `all` or a single status; stored as its string form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(LeadStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: LeadStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == "all" {
            return Ok(StatusFilter::All);
        }
        value.parse::<LeadStatus>().map(StatusFilter::Only)
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        filter.as_str().to_string()
    }
}

/// Search term and status filter for the leads list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search_term: String,
    pub status_filter: StatusFilter,
}

impl FilterState {
    pub fn matches(&self, lead: &Lead, term: &str) -> bool {
        self.status_filter.matches(lead.status)
            && (term.is_empty()
                || lead.name.to_lowercase().contains(term)
                || lead.company.to_lowercase().contains(term))
    }

    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || self.status_filter != StatusFilter::All
    }
}

/// Leads matching `filter`, highest score first.
///
/// Ties keep their relative order from `leads`.
pub fn filter_and_sort_leads(leads: &[Lead], filter: &FilterState) -> Vec<Lead> {
    let term = filter.search_term.to_lowercase();
    let mut visible: Vec<Lead> = leads
        .iter()
        .filter(|lead| filter.matches(lead, &term))
        .cloned()
        .collect();
    visible.sort_by(|a, b| b.score.cmp(&a.score));
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(id: &str, name: &str, company: &str, score: u32, status: LeadStatus) -> Lead {
        Lead {
            id: id.to_string(),
            name: name.to_string(),
            company: company.to_string(),
            email: format!("{}@example.com", id),
            source: "website".to_string(),
            score,
            status,
        }
    }

    fn criteria(term: &str, status: StatusFilter) -> FilterState {
        FilterState {
            search_term: term.to_string(),
            status_filter: status,
        }
    }

    fn scores(leads: &[Lead]) -> Vec<u32> {
        leads.iter().map(|l| l.score).collect()
    }

    #[test]
    fn test_all_sorted_by_score_desc() {
        let leads = vec![
            lead("1", "Ana", "Acme", 85, LeadStatus::New),
            lead("2", "Bruno", "Globex", 92, LeadStatus::Contacted),
        ];
        let view = filter_and_sort_leads(&leads, &FilterState::default());
        assert_eq!(scores(&view), vec![92, 85]);
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let leads = vec![
            lead("a", "A", "X", 70, LeadStatus::New),
            lead("b", "B", "X", 90, LeadStatus::New),
            lead("c", "C", "X", 70, LeadStatus::New),
            lead("d", "D", "X", 70, LeadStatus::New),
        ];
        let ids: Vec<_> = filter_and_sort_leads(&leads, &FilterState::default())
            .into_iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(ids, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_search_matches_name_or_company() {
        let leads = vec![
            lead("1", "Maria", "Tech Solutions", 95, LeadStatus::New),
            lead("2", "John", "Tech Corp", 85, LeadStatus::Qualified),
            lead("3", "Paul", "Foods Inc", 99, LeadStatus::New),
        ];
        let view = filter_and_sort_leads(&leads, &criteria("tech", StatusFilter::All));
        assert_eq!(scores(&view), vec![95, 85]);

        let by_name = filter_and_sort_leads(&leads, &criteria("pau", StatusFilter::All));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "3");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let leads = vec![
            lead("1", "Maria", "Tech Solutions", 95, LeadStatus::New),
            lead("2", "john", "tech corp", 85, LeadStatus::New),
        ];
        for term in ["tech", "TECH", "TeCh"] {
            let view = filter_and_sort_leads(&leads, &criteria(term, StatusFilter::All));
            assert_eq!(scores(&view), vec![95, 85], "term {}", term);
        }
    }

    #[test]
    fn test_status_filter_combines_with_search() {
        let leads = vec![
            lead("1", "Maria", "Tech Solutions", 95, LeadStatus::New),
            lead("2", "John", "Tech Corp", 85, LeadStatus::Qualified),
            lead("3", "Paul", "Foods Inc", 99, LeadStatus::Qualified),
        ];
        let view = filter_and_sort_leads(&leads, &criteria("tech", StatusFilter::Only(LeadStatus::Qualified)));
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "2");

        let qualified = filter_and_sort_leads(&leads, &criteria("", StatusFilter::Only(LeadStatus::Qualified)));
        assert_eq!(scores(&qualified), vec![99, 85]);
    }

    #[test]
    fn test_input_untouched() {
        let leads = vec![
            lead("1", "A", "X", 10, LeadStatus::New),
            lead("2", "B", "X", 20, LeadStatus::New),
        ];
        let before = leads.clone();
        let _ = filter_and_sort_leads(&leads, &FilterState::default());
        assert_eq!(leads, before);
    }

    #[test]
    fn test_no_matches() {
        let leads = vec![lead("1", "A", "X", 10, LeadStatus::New)];
        assert!(filter_and_sort_leads(&leads, &criteria("zzz", StatusFilter::All)).is_empty());
        assert!(filter_and_sort_leads(&[], &FilterState::default()).is_empty());
    }

    #[test]
    fn test_status_filter_wire_format() {
        assert_eq!(serde_json::to_string(&StatusFilter::All).unwrap(), "\"all\"");
        let parsed: StatusFilter = serde_json::from_str("\"contacted\"").unwrap();
        assert_eq!(parsed, StatusFilter::Only(LeadStatus::Contacted));
        assert!(serde_json::from_str::<StatusFilter>("\"archived\"").is_err());
    }

    #[test]
    fn test_is_active() {
        assert!(!FilterState::default().is_active());
        assert!(criteria("a", StatusFilter::All).is_active());
        assert!(criteria("", StatusFilter::Only(LeadStatus::New)).is_active());
    }
}
