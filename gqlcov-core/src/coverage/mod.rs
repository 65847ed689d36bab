//! Coverage Aggregation
//!
//! The last pipeline stage. Captured exchanges flow through it as:
//!
//! CaptureEntry
//! classify_entries
//! ClassifiedEntry
//! CoverageAggregator (one per cutoff window)
//! CoverageReport
//! CoverageSummary
//!
//! Classification happens once per capture; every cutoff window then
//! aggregates the same classified entries independently.

mod aggregation;
mod entry;
mod report;
mod window;

pub use aggregation::*;
pub use entry::*;
pub use report::*;
pub use window::*;

use crate::capture::CaptureEntry;
use crate::conf::FormatProfile;

/// Classifies `entries` under `profile` and aggregates them once per window.
///
/// Reports are returned in the order of `windows`.
pub fn analyze_windows(
    entries: &[CaptureEntry],
    profile: &FormatProfile,
    windows: &[CutoffWindow],
) -> Vec<CoverageReport> {
    let classified = classify_entries(entries, profile);
    windows
        .iter()
        .map(|window| aggregate(&classified, Some(*window)))
        .collect()
}
