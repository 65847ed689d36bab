use serde::Serialize;
use std::fmt;

pub const UNKNOWN_OPERATION: &str = "unknown";

const INTROSPECTION_PREFIX: &str = "__";
const ROOT_KEYWORDS: &[&str] = &["query", "mutation"];

/// Why an extracted name is kept out of published statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    Empty,
    Whitespace,
    Introspection,
    RootKeyword,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OperationName(String);

impl OperationName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn unknown() -> Self {
        Self(UNKNOWN_OPERATION.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_OPERATION
    }

    /// Names that are artifacts of malformed captures or introspection
    /// traffic rather than real operations of the API under test.
    pub fn exclusion(&self) -> Option<ExclusionReason> {
        let name = self.0.as_str();

        if name.is_empty() {
            Some(ExclusionReason::Empty)
        } else if name.chars().any(char::is_whitespace) {
            Some(ExclusionReason::Whitespace)
        } else if name.starts_with(INTROSPECTION_PREFIX) {
            Some(ExclusionReason::Introspection)
        } else if ROOT_KEYWORDS.contains(&name) {
            Some(ExclusionReason::RootKeyword)
        } else {
            None
        }
    }

    /// True when the name may appear in coverage figures.
    pub fn is_reportable(&self) -> bool {
        !self.is_unknown() && self.exclusion().is_none()
    }
}

impl fmt::Display for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OperationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
