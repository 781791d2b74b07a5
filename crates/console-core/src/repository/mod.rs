//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod memory;
mod opportunity_repo;


pub use traits::{KeyValueStorage, OpportunityRepository};
pub use memory::MemoryStorage;
pub use opportunity_repo::LocalOpportunityRepository;
