//! Service Command Wrappers
//!
//! Frontend entry points into the gateway and the opportunity manager,
//! organized by domain. Each command keeps the reactive store in step with
//! the service it calls.

mod leads;
mod opportunities;

pub use leads::*;
pub use opportunities::*;
