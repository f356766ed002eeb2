use crate::domain::model::{Credentials, FieldEntry, LookupOutcome, Mva, RunSummary, WorkItemStatus};
use crate::domain::ports::FleetPortal;
use crate::utils::error::Result;
use std::time::Duration;

/// Separator line used around run and per-identifier log sections.
pub const BANNER: &str =
    "================================================================================";

/// Sequences login and the per-identifier loop over a `FleetPortal`. The portal
/// is owned by the runner and closed exactly once, whether the loop completed or
/// failed mid-run.
pub struct StatusRunner<P: FleetPortal> {
    portal: P,
    delay: Duration,
}

impl<P: FleetPortal> StatusRunner<P> {
    pub fn new(portal: P, delay: Duration) -> Self {
        Self { portal, delay }
    }

    /// Run the full confirmation pass. Any error from login or the loop is
    /// returned to the caller, but only after the session has been torn down.
    pub async fn run(self, credentials: &Credentials, mvas: &[Mva]) -> Result<RunSummary> {
        let Self { portal, delay } = self;

        let outcome = process_all(&portal, delay, credentials, mvas).await;

        tracing::info!("Process finished. Closing browser...");
        if let Err(e) = portal.close().await {
            tracing::warn!("browser teardown failed: {}", e);
        } else {
            tracing::info!("Browser closed.");
        }

        outcome
    }
}

async fn process_all<P: FleetPortal>(
    portal: &P,
    delay: Duration,
    credentials: &Credentials,
    mvas: &[Mva],
) -> Result<RunSummary> {
    portal.login(credentials).await?;
    tracing::info!("Login successful.");
    tokio::time::sleep(delay).await;

    let mut summary = RunSummary::default();

    for mva in mvas {
        tracing::info!("{}", BANNER);
        tracing::info!(">>> Processing MVA: {}", mva);
        tracing::info!("{}", BANNER);

        let outcome = process_one(portal, delay, mva).await?;
        summary.record(mva.clone(), outcome);
    }

    Ok(summary)
}

async fn process_one<P: FleetPortal>(
    portal: &P,
    delay: Duration,
    mva: &Mva,
) -> Result<LookupOutcome> {
    match portal.enter_mva(mva).await? {
        FieldEntry::FieldMissing => {
            tracing::error!("[MVA] {} - input field not found, skipping.", mva);
            return Ok(LookupOutcome::FieldMissing);
        }
        FieldEntry::Entered => {}
    }

    // Give the page time to react to the typed identifier.
    tokio::time::sleep(delay).await;

    if !portal.is_mva_known(mva).await? {
        tracing::warn!("[MVA] {} - invalid/unknown MVA, skipping.", mva);
        return Ok(LookupOutcome::UnknownMva);
    }

    let status = portal.work_item_status(mva).await;
    match status {
        WorkItemStatus::Closed => tracing::info!("[WORKITEM] {} - work item is CLOSED.", mva),
        WorkItemStatus::Open => tracing::info!("[WORKITEM] {} - work item is OPEN.", mva),
        WorkItemStatus::Unknown => {
            tracing::warn!("[WORKITEM] {} - work item status is UNKNOWN.", mva)
        }
    }

    Ok(LookupOutcome::Status(status))
}
