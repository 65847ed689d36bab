use crate::capture::CaptureEntry;
use crate::classify::{Outcome, classify};
use crate::conf::FormatProfile;
use crate::operation::{OperationName, extract_operation};
use chrono::{DateTime, Utc};

/// A capture entry reduced to what aggregation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedEntry {
    pub timestamp: Option<DateTime<Utc>>,
    pub operation: OperationName,
    pub outcome: Outcome,
}

pub fn classify_entry(entry: &CaptureEntry, profile: &FormatProfile) -> ClassifiedEntry {
    let operation = extract_operation(&entry.request_text, profile.extraction);
    let outcome = classify(entry, &operation, profile.classification);

    ClassifiedEntry {
        timestamp: entry.timestamp,
        operation,
        outcome,
    }
}

pub fn classify_entries(entries: &[CaptureEntry], profile: &FormatProfile) -> Vec<ClassifiedEntry> {
    entries.iter().map(|e| classify_entry(e, profile)).collect()
}
