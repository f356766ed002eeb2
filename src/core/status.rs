use crate::domain::model::WorkItemStatus;

/// Classify the scraped status label text. Normalization is trim + lowercase.
/// "complete" maps to Closed; anything else, empty text included, maps to
/// Open. Unknown is reserved for a tab or label that could not be located at
/// all.
pub fn classify(raw: &str) -> WorkItemStatus {
    let text = raw.trim().to_lowercase();
    if text == "complete" {
        WorkItemStatus::Closed
    } else {
        WorkItemStatus::Open
    }
}
