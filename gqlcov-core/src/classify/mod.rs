//! Outcome Classification
//!
//! Decides whether a captured exchange exercised its operation successfully.
//!
//! GraphQL servers answer `200 OK` for most field-level failures, so the
//! response body shape is inspected first and the HTTP status is only a
//! secondary signal. Each classification mode is an ordered decision table:
//! rules are tried in order and the first one that decides wins.

mod body;
mod rules;
mod types;
mod view;

pub use body::*;
pub use rules::*;
pub use types::*;
pub use view::*;

use crate::capture::CaptureEntry;
use crate::operation::OperationName;

/// Classifies one exchange under `mode`.
pub fn classify(entry: &CaptureEntry, operation: &OperationName, mode: ClassificationMode) -> Outcome {
    explain(entry, operation, mode).outcome
}

/// Like [`classify`], also naming the rule that decided.
pub fn explain(
    entry: &CaptureEntry,
    operation: &OperationName,
    mode: ClassificationMode,
) -> Decision {
    let view = ResponseView::parse(&entry.response_text);
    let subject = Subject {
        operation,
        status_code: entry.status_code.as_deref(),
    };

    let decision = mode.table().evaluate(&view, &subject);
    tracing::trace!(
        operation = %operation,
        rule = decision.rule,
        outcome = ?decision.outcome,
        "classified exchange"
    );
    decision
}
