use serde::{Deserialize, Serialize};
use std::fmt;

/// An MVA identifier as read from the input file. Opaque, nonempty token;
/// uniqueness is not enforced and processing order follows the file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mva(String);

impl Mva {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Mva {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Three-way classification of the PM work item. `Unknown` is a first-class
/// outcome (tab or label could not be located), not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkItemStatus {
    Closed,
    Open,
    Unknown,
}

impl fmt::Display for WorkItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WorkItemStatus::Closed => "closed",
            WorkItemStatus::Open => "open",
            WorkItemStatus::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Login credentials for the fleet-operations application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub login_id: String,
}

/// Whether the MVA search field accepted the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEntry {
    Entered,
    FieldMissing,
}

/// Per-identifier outcome of one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    Status(WorkItemStatus),
    /// Search input could not be located; identifier skipped.
    FieldMissing,
    /// Identifier not recognized by the application; skipped.
    UnknownMva,
}

/// Ordered outcomes of a full run, one entry per input identifier.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub outcomes: Vec<(Mva, LookupOutcome)>,
}

impl RunSummary {
    pub fn record(&mut self, mva: Mva, outcome: LookupOutcome) {
        self.outcomes.push((mva, outcome));
    }

    pub fn closed(&self) -> usize {
        self.count(LookupOutcome::Status(WorkItemStatus::Closed))
    }

    pub fn open(&self) -> usize {
        self.count(LookupOutcome::Status(WorkItemStatus::Open))
    }

    pub fn unknown(&self) -> usize {
        self.count(LookupOutcome::Status(WorkItemStatus::Unknown))
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, LookupOutcome::FieldMissing | LookupOutcome::UnknownMva))
            .count()
    }

    fn count(&self, wanted: LookupOutcome) -> usize {
        self.outcomes.iter().filter(|(_, o)| *o == wanted).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_by_outcome() {
        let mut summary = RunSummary::default();
        summary.record(Mva::new("A100"), LookupOutcome::Status(WorkItemStatus::Closed));
        summary.record(Mva::new("A101"), LookupOutcome::UnknownMva);
        summary.record(Mva::new("A102"), LookupOutcome::Status(WorkItemStatus::Unknown));
        summary.record(Mva::new("A103"), LookupOutcome::FieldMissing);

        assert_eq!(summary.closed(), 1);
        assert_eq!(summary.open(), 0);
        assert_eq!(summary.unknown(), 1);
        assert_eq!(summary.skipped(), 2);
    }

    #[test]
    fn status_display_is_lowercase() {
        assert_eq!(WorkItemStatus::Closed.to_string(), "closed");
        assert_eq!(WorkItemStatus::Open.to_string(), "open");
        assert_eq!(WorkItemStatus::Unknown.to_string(), "unknown");
    }
}
