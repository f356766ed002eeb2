pub mod config;
pub mod core;
pub mod domain;
pub mod portal;
pub mod utils;

pub use config::{CliConfig, Settings};
pub use core::runner::StatusRunner;
pub use core::status::classify;
pub use domain::model::{Credentials, FieldEntry, LookupOutcome, Mva, RunSummary, WorkItemStatus};
pub use domain::ports::FleetPortal;
pub use portal::WebDriverPortal;
pub use utils::error::{AppError, Result};
