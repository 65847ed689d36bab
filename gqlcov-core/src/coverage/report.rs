use crate::classify::Outcome;
use crate::coverage::CutoffWindow;
use crate::operation::OperationName;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OperationStats {
    pub pass: u64,
    pub fail: u64,
}

impl OperationStats {
    /// Indeterminate outcomes leave the counts untouched.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Pass => self.pass += 1,
            Outcome::Fail => self.fail += 1,
            Outcome::Indeterminate => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pass == 0 && self.fail == 0
    }
}

/// Result of aggregating one capture under one window.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoverageReport {
    /// `None` when no time filter was applied.
    pub window: Option<CutoffWindow>,
    /// Entries inside the window, whatever their operation.
    pub entries_in_window: usize,
    /// Entries whose operation name was filtered out.
    pub excluded_entries: usize,
    pub operations: BTreeMap<OperationName, OperationStats>,
    /// Entries whose operation could not be determined.
    pub unknown: OperationStats,
}

impl CoverageReport {
    pub fn summary(&self) -> CoverageSummary {
        let operations = self.operations.len();
        let passes: u64 = self.operations.values().map(|s| s.pass).sum();
        let fails: u64 = self.operations.values().map(|s| s.fail).sum();

        CoverageSummary {
            cutoff_seconds: self.window.map(|w| w.seconds()),
            operations,
            positive_coverage: hits_per_operation(passes, operations),
            negative_coverage: hits_per_operation(fails, operations),
            operations_with_pass: self.operations.values().filter(|s| s.pass > 0).count(),
            operations_with_fail: self.operations.values().filter(|s| s.fail > 0).count(),
        }
    }
}

/// Pass or fail events per distinct operation, as a percentage.
///
/// Operations hit many times count every hit, so the value may exceed 100.
pub fn hits_per_operation(hits: u64, operations: usize) -> f64 {
    if operations == 0 {
        return 0.0;
    }
    (hits as f64 / operations as f64) * 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageSummary {
    pub cutoff_seconds: Option<u64>,
    pub operations: usize,
    pub positive_coverage: f64,
    pub negative_coverage: f64,
    pub operations_with_pass: usize,
    pub operations_with_fail: usize,
}
