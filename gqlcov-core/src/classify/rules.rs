use crate::classify::{ClassificationMode, Decision, Outcome, ResponseView, Subject, contains_non_null};

/// Substrings that mark an error response as an expected rejection of a
/// malformed query rather than a failure of the operation.
pub const BENIGN_ERROR_MARKERS: &[&str] = &["syntax error", "validation error", "query error"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Decide(Outcome),
    Continue,
}

/// One row of a decision table.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub check: fn(&ResponseView<'_>, &Subject<'_>) -> Verdict,
}

/// Ordered rules plus the outcome used when none decides.
pub struct DecisionTable {
    pub rules: &'static [Rule],
    pub fallback: Outcome,
}

pub const FALLBACK_RULE: &str = "fallback";

impl DecisionTable {
    pub fn evaluate(&self, view: &ResponseView<'_>, subject: &Subject<'_>) -> Decision {
        self.rules
            .iter()
            .find_map(|rule| match (rule.check)(view, subject) {
                Verdict::Decide(outcome) => Some(Decision {
                    outcome,
                    rule: rule.name,
                }),
                Verdict::Continue => None,
            })
            .unwrap_or(Decision {
                outcome: self.fallback,
                rule: FALLBACK_RULE,
            })
    }
}

impl ClassificationMode {
    pub fn table(self) -> &'static DecisionTable {
        match self {
            ClassificationMode::StatusAware => &STATUS_AWARE,
            ClassificationMode::BodyShape => &BODY_SHAPE,
        }
    }
}

//-----------------------------------------------------------------------------
// Status-aware table
//-----------------------------------------------------------------------------

pub static STATUS_AWARE: DecisionTable = DecisionTable {
    rules: &[
        Rule {
            name: "unparseable_response",
            check: unparseable_response,
        },
        Rule {
            name: "missing_operation_data",
            check: missing_operation_data,
        },
        Rule {
            name: "error_text",
            check: error_text,
        },
        Rule {
            name: "ok_with_operation_data",
            check: ok_with_operation_data,
        },
        Rule {
            name: "bad_request",
            check: bad_request,
        },
    ],
    fallback: Outcome::Indeterminate,
};

pub fn unparseable_response(view: &ResponseView<'_>, _: &Subject<'_>) -> Verdict {
    if view.is_json() {
        Verdict::Continue
    } else {
        Verdict::Decide(Outcome::Fail)
    }
}

/// No data for the operation is a failure, unless the server reported
/// errors, in which case later rules decide.
pub fn missing_operation_data(view: &ResponseView<'_>, subject: &Subject<'_>) -> Verdict {
    if view.has_operation_key(subject.operation) || view.non_null("errors").is_some() {
        Verdict::Continue
    } else {
        Verdict::Decide(Outcome::Fail)
    }
}

pub fn error_text(view: &ResponseView<'_>, _: &Subject<'_>) -> Verdict {
    let mentions_error = view.lowered.contains("error");
    let benign = BENIGN_ERROR_MARKERS
        .iter()
        .any(|marker| view.lowered.contains(marker));

    if mentions_error && !benign {
        Verdict::Decide(Outcome::Fail)
    } else {
        Verdict::Continue
    }
}

pub fn ok_with_operation_data(view: &ResponseView<'_>, subject: &Subject<'_>) -> Verdict {
    if subject.status_code == Some("200") && view.operation_data(subject.operation).is_some() {
        Verdict::Decide(Outcome::Pass)
    } else {
        Verdict::Continue
    }
}

pub fn bad_request(_: &ResponseView<'_>, subject: &Subject<'_>) -> Verdict {
    if subject.status_code == Some("400") {
        Verdict::Decide(Outcome::Fail)
    } else {
        Verdict::Continue
    }
}

//-----------------------------------------------------------------------------
// Body-shape table
//-----------------------------------------------------------------------------

pub static BODY_SHAPE: DecisionTable = DecisionTable {
    rules: &[
        Rule {
            name: "unparseable_response",
            check: unparseable_response,
        },
        Rule {
            name: "errors_present",
            check: errors_present,
        },
        Rule {
            name: "non_null_data",
            check: non_null_data,
        },
    ],
    fallback: Outcome::Fail,
};

/// Any top-level `errors` member fails the exchange, even a null one.
pub fn errors_present(view: &ResponseView<'_>, _: &Subject<'_>) -> Verdict {
    if view.member("errors").is_some() {
        Verdict::Decide(Outcome::Fail)
    } else {
        Verdict::Continue
    }
}

pub fn non_null_data(view: &ResponseView<'_>, _: &Subject<'_>) -> Verdict {
    if view.member("data").is_some_and(contains_non_null) {
        Verdict::Decide(Outcome::Pass)
    } else {
        Verdict::Continue
    }
}
