//! Remote Data Gateway
//!
//! Presents the lead collection as an asynchronous resource. The simulated
//! implementation answers from a bundled seed dataset after an artificial
//! delay and fails a configurable share of updates with a transient error.

use std::cell::RefCell;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GatewayConfig;
use crate::domain::{find_by_id, DomainError, DomainResult, Lead, LeadPatch};

pub const SIMULATED_FAILURE: &str = "Simulated network error";

const SEED_LEADS: &str = include_str!("../data/leads.json");

/// Parse the bundled seed dataset
pub fn seed_leads() -> DomainResult<Vec<Lead>> {
    serde_json::from_str(SEED_LEADS)
        .map_err(|e| DomainError::Internal(format!("seed dataset is invalid: {}", e)))
}

#[async_trait(?Send)]
pub trait LeadGateway {
    async fn fetch_all(&self) -> DomainResult<Vec<Lead>>;

    /// Apply `patch` to the lead with `id` and return the merged record
    async fn update(&self, id: &str, patch: &LeadPatch) -> DomainResult<Lead>;
}

/// Artificial network delay
#[async_trait(?Send)]
pub trait Latency {
    async fn wait(&self, duration: Duration);
}

/// Resolves immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait(?Send)]
impl Latency for NoLatency {
    async fn wait(&self, _duration: Duration) {}
}

/// In-memory stand-in for a backend.
///
/// Updates are not written back: every call sees the original seed.
pub struct SimulatedLeadGateway<L> {
    seed: Vec<Lead>,
    config: GatewayConfig,
    latency: L,
    rng: RefCell<StdRng>,
}

impl<L: Latency> SimulatedLeadGateway<L> {
    pub fn new(seed: Vec<Lead>, config: GatewayConfig, latency: L, rng_seed: u64) -> Self {
        Self {
            seed,
            config,
            latency,
            rng: RefCell::new(StdRng::seed_from_u64(rng_seed)),
        }
    }

    fn should_fail(&self) -> bool {
        let rate = self.config.failure_rate;
        rate > 0.0 && self.rng.borrow_mut().gen::<f64>() < rate
    }
}

#[async_trait(?Send)]
impl<L: Latency> LeadGateway for SimulatedLeadGateway<L> {
    async fn fetch_all(&self) -> DomainResult<Vec<Lead>> {
        self.latency.wait(self.config.latency()).await;
        log::debug!("fetched {} leads", self.seed.len());
        Ok(self.seed.clone())
    }

    async fn update(&self, id: &str, patch: &LeadPatch) -> DomainResult<Lead> {
        self.latency.wait(self.config.latency()).await;

        let lead = find_by_id(&self.seed, id).ok_or(DomainError::NotFound("Lead"))?;
        let updated = patch.apply_to(lead);

        if self.should_fail() {
            log::warn!("injected failure updating lead {}", id);
            return Err(DomainError::Transient(SIMULATED_FAILURE.to_string()));
        }
        Ok(updated)
    }
}
