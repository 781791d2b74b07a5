//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has no I/O; persistence lives in `repository`.

mod entity;
mod error;
mod lead;
mod opportunity;
mod validation;

pub use entity::{find_by_id, replace_by_id, Entity};
pub use error::{DomainError, DomainResult, StorageError};
pub use lead::{Lead, LeadPatch, LeadStatus};
pub use opportunity::{iso_timestamp, IdGenerator, NewOpportunity, Opportunity, OpportunityPatch, Stage};
pub use validation::{parse_amount, validate_email, ConversionForm, FieldErrors, LeadEditForm};
