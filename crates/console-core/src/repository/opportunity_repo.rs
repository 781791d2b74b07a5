//! Opportunity Repository
//!
//! Stores the whole opportunity collection as one JSON array under a fixed
//! key, reusing the persisted-state slot for deduplication and error routing.

use std::cell::RefCell;
use std::rc::Rc;

use super::traits::{KeyValueStorage, OpportunityRepository};
use crate::domain::{DomainResult, Opportunity};
use crate::persisted::{ErrorHook, PersistedState};

pub struct LocalOpportunityRepository {
    state: RefCell<PersistedState<Vec<Opportunity>>>,
}

impl LocalOpportunityRepository {
    pub fn new(key: &str, storage: Rc<dyn KeyValueStorage>) -> Self {
        Self {
            state: RefCell::new(PersistedState::open(key, Vec::new(), storage)),
        }
    }

    pub fn with_hook(key: &str, storage: Rc<dyn KeyValueStorage>, on_error: ErrorHook) -> Self {
        Self {
            state: RefCell::new(PersistedState::open_with_hook(key, Vec::new(), storage, on_error)),
        }
    }
}

impl OpportunityRepository for LocalOpportunityRepository {
    fn load(&self) -> DomainResult<Vec<Opportunity>> {
        Ok(self.state.borrow().get().clone())
    }

    /// Persistence failures are reported through the hook, never returned
    fn save_all(&self, opportunities: &[Opportunity]) -> DomainResult<()> {
        self.state.borrow_mut().set(opportunities.to_vec());
        Ok(())
    }
}
