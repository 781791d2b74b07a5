//! Lead Query Cache
//!
//! Owns the lead collection fetched from the gateway and merges single
//! record updates into it.

use crate::domain::{replace_by_id, DomainResult, Lead};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeadCache {
    pub leads: Vec<Lead>,
    pub status: LoadStatus,
}

impl LeadCache {
    /// Previously loaded leads stay visible while a refetch is in flight
    pub fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
    }

    pub fn finish_load(&mut self, result: DomainResult<Vec<Lead>>) {
        match result {
            Ok(leads) => {
                self.leads = leads;
                self.status = LoadStatus::Ready;
            }
            Err(e) => self.status = LoadStatus::Failed(e.to_string()),
        }
    }

    /// Merge a record returned by a successful update
    pub fn apply_update(&mut self, updated: Lead) {
        if self.leads.is_empty() {
            self.leads.push(updated);
        } else if !replace_by_id(&mut self.leads, updated) {
            log::debug!("updated lead is not in the cache, ignoring");
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn find(&self, id: &str) -> Option<&Lead> {
        self.leads.iter().find(|lead| lead.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, LeadStatus};

    fn lead(id: &str, status: LeadStatus) -> Lead {
        Lead {
            id: id.to_string(),
            name: format!("Lead {}", id),
            company: "Acme".to_string(),
            email: "a@acme.com".to_string(),
            source: "web".to_string(),
            score: 60,
            status,
        }
    }

    #[test]
    fn test_load_lifecycle() {
        let mut cache = LeadCache::default();
        assert_eq!(cache.status, LoadStatus::Idle);

        cache.begin_load();
        assert!(cache.is_loading());

        cache.finish_load(Ok(vec![lead("1", LeadStatus::New)]));
        assert_eq!(cache.status, LoadStatus::Ready);
        assert_eq!(cache.leads.len(), 1);
    }

    #[test]
    fn test_failed_load_keeps_previous_leads() {
        let mut cache = LeadCache::default();
        cache.finish_load(Ok(vec![lead("1", LeadStatus::New)]));
        cache.begin_load();
        cache.finish_load(Err(DomainError::Transient("Simulated network error".into())));

        assert_eq!(cache.error(), Some("Simulated network error"));
        assert_eq!(cache.leads.len(), 1);
    }

    #[test]
    fn test_apply_update_replaces_in_place() {
        let mut cache = LeadCache::default();
        cache.finish_load(Ok(vec![
            lead("1", LeadStatus::New),
            lead("2", LeadStatus::New),
            lead("3", LeadStatus::New),
        ]));
        cache.apply_update(lead("2", LeadStatus::Qualified));

        let ids: Vec<_> = cache.leads.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(cache.find("2").map(|l| l.status), Some(LeadStatus::Qualified));
    }

    #[test]
    fn test_apply_update_on_empty_cache() {
        let mut cache = LeadCache::default();
        cache.apply_update(lead("9", LeadStatus::Contacted));
        assert_eq!(cache.leads.len(), 1);
    }

    #[test]
    fn test_apply_update_unknown_id_is_ignored() {
        let mut cache = LeadCache::default();
        cache.finish_load(Ok(vec![lead("1", LeadStatus::New)]));
        cache.apply_update(lead("2", LeadStatus::New));
        assert_eq!(cache.leads.len(), 1);
    }
}
