use crate::coverage::{ClassifiedEntry, CoverageReport, CutoffWindow};
use chrono::{DateTime, Utc};

/// Accumulates classified entries into a [`CoverageReport`].
///
/// The aggregator owns all of its state, so windows over the same capture
/// never interfere with each other.
pub struct CoverageAggregator {
    window: Option<CutoffWindow>,
    earliest: Option<DateTime<Utc>>,
    report: CoverageReport,
}

impl CoverageAggregator {
    /// `earliest` anchors the window; it should be the earliest timestamp of
    /// the whole capture.
    pub fn new(window: Option<CutoffWindow>, earliest: Option<DateTime<Utc>>) -> Self {
        Self {
            window,
            earliest,
            report: CoverageReport {
                window,
                ..Default::default()
            },
        }
    }

    /// Untimed entries, and every entry when no window is set, are in scope.
    pub fn in_window(&self, entry: &ClassifiedEntry) -> bool {
        match (self.window, self.earliest, entry.timestamp) {
            (Some(window), Some(earliest), Some(ts)) => window.contains(earliest, ts),
            _ => true,
        }
    }

    pub fn push(&mut self, entry: &ClassifiedEntry) {
        if !self.in_window(entry) {
            return;
        }
        self.report.entries_in_window += 1;

        let operation = &entry.operation;
        if operation.is_unknown() {
            self.report.unknown.record(entry.outcome);
        } else if let Some(reason) = operation.exclusion() {
            tracing::trace!(operation = %operation, ?reason, "excluding operation");
            self.report.excluded_entries += 1;
        } else {
            self.report
                .operations
                .entry(operation.clone())
                .or_default()
                .record(entry.outcome);
        }
    }

    pub fn finish(self) -> CoverageReport {
        self.report
    }
}

pub fn earliest_timestamp(entries: &[ClassifiedEntry]) -> Option<DateTime<Utc>> {
    entries.iter().filter_map(|e| e.timestamp).min()
}

/// Aggregates `entries` under `window`, anchored at their earliest timestamp.
pub fn aggregate(entries: &[ClassifiedEntry], window: Option<CutoffWindow>) -> CoverageReport {
    let mut aggregator = CoverageAggregator::new(window, earliest_timestamp(entries));
    for entry in entries {
        aggregator.push(entry);
    }
    aggregator.finish()
}
