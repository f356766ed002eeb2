use crate::domain::model::{Credentials, FieldEntry, Mva, WorkItemStatus};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Port over the fleet-operations web application. The WebDriver adapter is the
/// production implementation; tests substitute a scripted fake.
#[async_trait]
pub trait FleetPortal: Send + Sync {
    /// Drive the login form to an authenticated state.
    async fn login(&self, credentials: &Credentials) -> Result<()>;

    /// Locate the MVA search input, clear it, and type the identifier.
    /// A missing input field is the expected skip path, not an error.
    async fn enter_mva(&self, mva: &Mva) -> Result<FieldEntry>;

    /// Whether the application recognized the identifier just entered.
    async fn is_mva_known(&self, mva: &Mva) -> Result<bool>;

    /// Read the PM work item status from the record currently on screen.
    /// Single attempt; locate failures are absorbed into `Unknown`.
    async fn work_item_status(&self, mva: &Mva) -> WorkItemStatus;

    /// Tear down the browser session. Called exactly once per run.
    async fn close(self) -> Result<()>
    where
        Self: Sized;
}
