use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
    /// Neither a definite pass nor a definite fail; counted nowhere.
    Indeterminate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMode {
    /// Body shape first, then the HTTP status code. For captures that
    /// record a status per exchange.
    #[default]
    StatusAware,
    /// Body shape only. For captures without status codes.
    BodyShape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub outcome: Outcome,
    /// Name of the deciding rule, or the table's fallback label.
    pub rule: &'static str,
}
