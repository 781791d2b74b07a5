//! Opportunity Collection Manager
//!
//! CRUD over the opportunity collection. The in-memory collection is the
//! source of truth; every mutation stores a full snapshot through the
//! repository.

use std::rc::Rc;

use crate::clock::{Clock, SystemClock};
use crate::config::ConversionPolicy;
use crate::domain::{
    iso_timestamp, DomainError, DomainResult, IdGenerator, NewOpportunity, Opportunity,
    OpportunityPatch,
};
use crate::repository::OpportunityRepository;

pub struct OpportunityManager<R> {
    repository: R,
    opportunities: Vec<Opportunity>,
    policy: ConversionPolicy,
    clock: Rc<dyn Clock>,
    ids: IdGenerator,
}

impl<R: OpportunityRepository> OpportunityManager<R> {
    pub fn new(repository: R, policy: ConversionPolicy) -> Self {
        let clock = SystemClock;
        let seed = clock.now().timestamp_millis() as u64;
        Self::with_clock(repository, policy, Rc::new(clock), seed)
    }

    pub fn with_clock(repository: R, policy: ConversionPolicy, clock: Rc<dyn Clock>, id_seed: u64) -> Self {
        let opportunities = repository.load().unwrap_or_else(|e| {
            log::warn!("could not load opportunities, starting empty: {}", e);
            Vec::new()
        });
        log::info!("loaded {} opportunities", opportunities.len());
        Self {
            repository,
            opportunities,
            policy,
            clock,
            ids: IdGenerator::new(id_seed),
        }
    }

    pub fn all(&self) -> &[Opportunity] {
        &self.opportunities
    }

    pub fn policy(&self) -> ConversionPolicy {
        self.policy
    }

    pub fn create(&mut self, new: NewOpportunity) -> DomainResult<Opportunity> {
        require_text("name", &new.name)?;
        require_text("account name", &new.account_name)?;
        require_amount(new.amount)?;

        let now = self.clock.now();
        let timestamp = iso_timestamp(now);
        let opportunity = Opportunity {
            id: self.ids.next_id(now),
            name: new.name,
            stage: new.stage,
            amount: new.amount,
            account_name: new.account_name,
            lead_id: new.lead_id,
            created_at: timestamp.clone(),
            updated_at: timestamp,
        };

        self.opportunities.push(opportunity.clone());
        self.persist();
        log::info!("created opportunity {} for lead {}", opportunity.id, opportunity.lead_id);
        Ok(opportunity)
    }

    /// Merge `patch` into the opportunity with `id` and refresh `updatedAt`
    pub fn update(&mut self, id: &str, patch: OpportunityPatch) -> DomainResult<Opportunity> {
        let index = self
            .opportunities
            .iter()
            .position(|o| o.id == id)
            .ok_or(DomainError::NotFound("Opportunity"))?;

        if let Some(name) = &patch.name {
            require_text("name", name)?;
        }
        if let Some(account_name) = &patch.account_name {
            require_text("account name", account_name)?;
        }
        if let Some(amount) = patch.amount {
            require_amount(amount)?;
        }

        let updated_at = iso_timestamp(self.clock.now());
        let opportunity = &mut self.opportunities[index];
        patch.apply_to(opportunity);
        opportunity.updated_at = updated_at;
        let updated = opportunity.clone();

        self.persist();
        Ok(updated)
    }

    /// Remove the opportunity if present. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.opportunities.len();
        self.opportunities.retain(|o| o.id != id);
        let removed = self.opportunities.len() != before;
        self.persist();
        removed
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Opportunity> {
        self.opportunities.iter().find(|o| o.id == id)
    }

    /// All opportunities converted from `lead_id`, in insertion order
    pub fn find_by_lead_id(&self, lead_id: &str) -> Vec<&Opportunity> {
        self.opportunities.iter().filter(|o| o.lead_id == lead_id).collect()
    }

    pub fn can_convert(&self, lead_id: &str) -> bool {
        match self.policy {
            ConversionPolicy::AllowMultiple => true,
            ConversionPolicy::OncePerLead => !self.opportunities.iter().any(|o| o.lead_id == lead_id),
        }
    }

    /// Create an opportunity from a lead, honouring the conversion policy
    pub fn convert(&mut self, new: NewOpportunity) -> DomainResult<Opportunity> {
        if !self.can_convert(&new.lead_id) {
            return Err(DomainError::Conflict("Lead has already been converted".to_string()));
        }
        self.create(new)
    }

    fn persist(&self) {
        if let Err(e) = self.repository.save_all(&self.opportunities) {
            log::error!("failed to persist opportunities: {}", e);
        }
    }
}

fn require_text(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidInput(format!("{} is required", field)));
    }
    Ok(())
}

fn require_amount(amount: Option<f64>) -> DomainResult<()> {
    match amount {
        Some(value) if !value.is_finite() || value < 0.0 => Err(DomainError::InvalidInput(
            "amount must be a non-negative number".to_string(),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::domain::Stage;
    use crate::repository::{LocalOpportunityRepository, MemoryStorage};
    use chrono::{Duration, TimeZone, Utc};
    use regex::Regex;

    const KEY: &str = "opportunities";

    struct Fixture {
        storage: Rc<MemoryStorage>,
        clock: Rc<ManualClock>,
    }

    impl Fixture {
        fn new() -> Self {
            Self::with_storage(MemoryStorage::new())
        }

        fn with_storage(storage: MemoryStorage) -> Self {
            let start = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
            Self {
                storage: Rc::new(storage),
                clock: Rc::new(ManualClock::new(start)),
            }
        }

        fn manager(&self, policy: ConversionPolicy) -> OpportunityManager<LocalOpportunityRepository> {
            let repo = LocalOpportunityRepository::new(KEY, self.storage.clone());
            OpportunityManager::with_clock(repo, policy, self.clock.clone(), 3)
        }
    }

    fn new_opp(lead_id: &str) -> NewOpportunity {
        NewOpportunity {
            name: "Test Opportunity".to_string(),
            stage: Stage::Prospecting,
            amount: Some(1000.0),
            account_name: "Test Account".to_string(),
            lead_id: lead_id.to_string(),
        }
    }

    #[test]
    fn test_create_stamps_id_and_timestamps() {
        let fx = Fixture::new();
        let mut manager = fx.manager(ConversionPolicy::OncePerLead);
        let created = manager.create(new_opp("lead_123")).unwrap();

        let pattern = Regex::new(r"^opp_\d+_[0-9a-z]+$").unwrap();
        assert!(pattern.is_match(&created.id), "{}", created.id);
        assert_eq!(created.amount, Some(1000.0));
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(created.created_at, "2025-06-01T12:00:00.000Z");
        assert_eq!(manager.all().len(), 1);
    }

    #[test]
    fn test_create_persists_full_collection() {
        let fx = Fixture::new();
        {
            let mut manager = fx.manager(ConversionPolicy::AllowMultiple);
            manager.create(new_opp("a")).unwrap();
            manager.create(new_opp("b")).unwrap();
        }
        let reloaded = fx.manager(ConversionPolicy::AllowMultiple);
        let leads: Vec<_> = reloaded.all().iter().map(|o| o.lead_id.as_str()).collect();
        assert_eq!(leads, vec!["a", "b"]);
    }

    #[test]
    fn test_create_rejects_blank_name_and_negative_amount() {
        let fx = Fixture::new();
        let mut manager = fx.manager(ConversionPolicy::OncePerLead);

        let mut blank = new_opp("a");
        blank.name = " ".to_string();
        assert!(matches!(manager.create(blank), Err(DomainError::InvalidInput(_))));

        let mut negative = new_opp("a");
        negative.amount = Some(-5.0);
        assert!(matches!(manager.create(negative), Err(DomainError::InvalidInput(_))));
        assert!(manager.all().is_empty());
    }

    #[test]
    fn test_update_merges_and_refreshes_timestamp() {
        let fx = Fixture::new();
        let mut manager = fx.manager(ConversionPolicy::OncePerLead);
        let created = manager.create(new_opp("a")).unwrap();

        fx.clock.advance(Duration::seconds(90));
        let updated = manager.update(&created.id, OpportunityPatch::stage(Stage::Negotiation)).unwrap();

        assert_eq!(updated.stage, Stage::Negotiation);
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.updated_at, "2025-06-01T12:01:30.000Z");
        assert_eq!(manager.find_by_id(&created.id), Some(&updated));
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let fx = Fixture::new();
        let mut manager = fx.manager(ConversionPolicy::OncePerLead);
        manager.create(new_opp("a")).unwrap();
        let before = manager.all().to_vec();
        let writes = fx.storage.write_count();

        let patch = OpportunityPatch {
            name: Some("x".to_string()),
            ..Default::default()
        };
        let err = manager.update("nonexistent", patch).unwrap_err();

        assert_eq!(err.to_string(), "Opportunity not found");
        assert_eq!(manager.all(), before.as_slice());
        assert_eq!(fx.storage.write_count(), writes);
    }

    #[test]
    fn test_update_unknown_id_with_invalid_patch_is_not_found() {
        let fx = Fixture::new();
        let mut manager = fx.manager(ConversionPolicy::OncePerLead);

        let blank_name = OpportunityPatch {
            name: Some(String::new()),
            ..Default::default()
        };
        let blank_account = OpportunityPatch {
            account_name: Some("  ".to_string()),
            ..Default::default()
        };
        let negative_amount = OpportunityPatch {
            amount: Some(Some(-5.0)),
            ..Default::default()
        };

        for patch in [blank_name, blank_account, negative_amount] {
            let err = manager.update("nonexistent", patch).unwrap_err();
            assert_eq!(err, DomainError::NotFound("Opportunity"));
        }
        assert!(manager.all().is_empty());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let fx = Fixture::new();
        let mut manager = fx.manager(ConversionPolicy::OncePerLead);
        let created = manager.create(new_opp("a")).unwrap();

        assert!(!manager.delete("missing"));
        assert_eq!(manager.all().len(), 1);

        assert!(manager.delete(&created.id));
        assert!(!manager.delete(&created.id));
        assert!(manager.all().is_empty());
        assert_eq!(fx.storage.raw(KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_find_by_lead_id_in_insertion_order() {
        let fx = Fixture::new();
        let mut manager = fx.manager(ConversionPolicy::AllowMultiple);
        let first = manager.create(new_opp("lead_1")).unwrap();
        manager.create(new_opp("lead_2")).unwrap();
        fx.clock.advance(Duration::milliseconds(5));
        let third = manager.create(new_opp("lead_1")).unwrap();

        let found: Vec<_> = manager.find_by_lead_id("lead_1").into_iter().map(|o| o.id.clone()).collect();
        assert_eq!(found, vec![first.id, third.id]);
        assert!(manager.find_by_lead_id("lead_9").is_empty());
    }

    #[test]
    fn test_once_per_lead_policy_blocks_second_conversion() {
        let fx = Fixture::new();
        let mut manager = fx.manager(ConversionPolicy::OncePerLead);
        assert!(manager.can_convert("lead_1"));
        manager.convert(new_opp("lead_1")).unwrap();

        assert!(!manager.can_convert("lead_1"));
        assert!(matches!(manager.convert(new_opp("lead_1")), Err(DomainError::Conflict(_))));
        // The data model itself still allows it
        assert!(manager.create(new_opp("lead_1")).is_ok());
        assert_eq!(manager.find_by_lead_id("lead_1").len(), 2);
    }

    #[test]
    fn test_allow_multiple_policy() {
        let fx = Fixture::new();
        let mut manager = fx.manager(ConversionPolicy::AllowMultiple);
        manager.convert(new_opp("lead_1")).unwrap();
        assert!(manager.can_convert("lead_1"));
        assert!(manager.convert(new_opp("lead_1")).is_ok());
    }

    #[test]
    fn test_malformed_storage_loads_empty() {
        for raw in ["not json", r#"{"id":"x"}"#, "42"] {
            let fx = Fixture::with_storage(MemoryStorage::new().with_item(KEY, raw));
            let manager = fx.manager(ConversionPolicy::OncePerLead);
            assert!(manager.all().is_empty(), "{}", raw);
        }
    }

    #[test]
    fn test_write_failure_keeps_collection() {
        let fx = Fixture::new();
        fx.storage.set_fail_writes(true);
        let mut manager = fx.manager(ConversionPolicy::OncePerLead);

        let created = manager.create(new_opp("a")).unwrap();
        assert_eq!(manager.find_by_id(&created.id), Some(&created));
        assert!(fx.storage.raw(KEY).is_none());
    }
}
