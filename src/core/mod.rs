pub mod runner;
pub mod status;

pub use crate::domain::model::{Credentials, LookupOutcome, Mva, RunSummary, WorkItemStatus};
pub use crate::domain::ports::FleetPortal;
pub use crate::utils::error::Result;
