//! Console Configuration
//!
//! Passed explicitly to every service so tests can build isolated
//! instances. A partial JSON override may be stored under
//! [`CONFIG_KEY`]; missing fields keep their defaults.

use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::persisted::PersistedState;
use crate::repository::KeyValueStorage;

pub const CONFIG_KEY: &str = "lead-console-config";

/// Local storage keys, one per concern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageKeys {
    pub leads_filter: String,
    pub leads_table_sort: String,
    pub opportunities_table_sort: String,
    pub opportunities: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            leads_filter: "leads-filter-state".to_string(),
            leads_table_sort: "leads-table-sort".to_string(),
            opportunities_table_sort: "opportunities-table-sort".to_string(),
            opportunities: "opportunities".to_string(),
        }
    }
}

/// Simulated backend behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GatewayConfig {
    pub latency_ms: u64,
    /// Probability that an update fails with a transient error; 0 disables
    pub failure_rate: f64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            latency_ms: 500,
            failure_rate: 0.1,
        }
    }
}

impl GatewayConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Whether a lead may be converted more than once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConversionPolicy {
    #[default]
    OncePerLead,
    AllowMultiple,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsoleConfig {
    pub storage: StorageKeys,
    pub gateway: GatewayConfig,
    pub conversion_policy: ConversionPolicy,
    pub leads_page_size: usize,
    pub opportunities_page_size: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            storage: StorageKeys::default(),
            gateway: GatewayConfig::default(),
            conversion_policy: ConversionPolicy::default(),
            leads_page_size: 10,
            opportunities_page_size: 6,
        }
    }
}

impl ConsoleConfig {
    /// Defaults overlaid with the stored override, if any
    pub fn load(storage: Rc<dyn KeyValueStorage>) -> Self {
        PersistedState::open(CONFIG_KEY, ConsoleConfig::default(), storage)
            .get()
            .clone()
            .normalized()
    }

    /// Clamp values into usable ranges
    pub fn normalized(mut self) -> Self {
        self.gateway.failure_rate = if self.gateway.failure_rate.is_finite() {
            self.gateway.failure_rate.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.leads_page_size = self.leads_page_size.max(1);
        self.opportunities_page_size = self.opportunities_page_size.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStorage;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.storage.leads_filter, "leads-filter-state");
        assert_eq!(config.storage.leads_table_sort, "leads-table-sort");
        assert_eq!(config.gateway.latency(), Duration::from_millis(500));
        assert_eq!(config.gateway.failure_rate, 0.1);
        assert_eq!(config.conversion_policy, ConversionPolicy::OncePerLead);
    }

    #[test]
    fn test_partial_override() {
        let storage = Rc::new(MemoryStorage::new().with_item(
            CONFIG_KEY,
            r#"{"gateway":{"failureRate":0},"conversionPolicy":"allowMultiple"}"#,
        ));
        let config = ConsoleConfig::load(storage);
        assert_eq!(config.gateway.failure_rate, 0.0);
        assert_eq!(config.gateway.latency_ms, 500);
        assert_eq!(config.conversion_policy, ConversionPolicy::AllowMultiple);
        assert_eq!(config.leads_page_size, 10);
    }

    #[test]
    fn test_malformed_override_uses_defaults() {
        let storage = Rc::new(MemoryStorage::new().with_item(CONFIG_KEY, "[1,2]"));
        assert_eq!(ConsoleConfig::load(storage), ConsoleConfig::default());
    }

    #[test]
    fn test_normalized_clamps() {
        let mut config = ConsoleConfig::default();
        config.gateway.failure_rate = 4.0;
        config.leads_page_size = 0;
        let config = config.normalized();
        assert_eq!(config.gateway.failure_rate, 1.0);
        assert_eq!(config.leads_page_size, 1);
    }
}
