//! Lead Console Core
//!
//! Framework-free logic behind the lead console:
//! - domain: leads, opportunities, validation and errors
//! - repository: key/value storage and opportunity persistence
//! - gateway: the asynchronous lead source
//! - view, sort, pagination, stats: derived presentation data

pub mod clock;
pub mod config;
pub mod domain;
pub mod gateway;
pub mod lead_cache;
pub mod opportunities;
pub mod pagination;
pub mod persisted;
pub mod repository;
pub mod sort;
pub mod stats;
pub mod view;

pub use config::ConsoleConfig;
pub use opportunities::OpportunityManager;
