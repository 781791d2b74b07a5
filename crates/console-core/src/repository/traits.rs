//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use browser local storage, in-memory maps, etc.

use crate::domain::{DomainResult, Opportunity, StorageError};

/// String key/value store with the shape of `window.localStorage`
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Whole-collection persistence for opportunities
///
/// The manager owns the in-memory collection; the repository only loads it
/// once and stores full snapshots.
pub trait OpportunityRepository {
    /// Load the stored collection; malformed content yields an empty list
    fn load(&self) -> DomainResult<Vec<Opportunity>>;

    /// Replace the stored collection
    fn save_all(&self, opportunities: &[Opportunity]) -> DomainResult<()>;
}
