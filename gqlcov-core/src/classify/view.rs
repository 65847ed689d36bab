use crate::operation::OperationName;
use serde_json::{Map, Value};

/// A response body parsed once and shared by every rule.
#[derive(Debug)]
pub struct ResponseView<'a> {
    pub text: &'a str,
    pub lowered: String,
    /// `None` when the text is not valid JSON.
    pub body: Option<Value>,
}

impl<'a> ResponseView<'a> {
    pub fn parse(text: &'a str) -> Self {
        Self {
            text,
            lowered: text.to_lowercase(),
            body: serde_json::from_str(text).ok(),
        }
    }

    pub fn is_json(&self) -> bool {
        self.body.is_some()
    }

    fn object(&self) -> Option<&Map<String, Value>> {
        self.body.as_ref()?.as_object()
    }

    /// Top-level member `key`, present but possibly null.
    pub fn member(&self, key: &str) -> Option<&Value> {
        self.object()?.get(key)
    }

    /// Top-level member `key` when present and not null.
    pub fn non_null(&self, key: &str) -> Option<&Value> {
        self.member(key).filter(|v| !v.is_null())
    }

    /// `data` is a non-null object holding a key for `operation`, whatever
    /// its value.
    pub fn has_operation_key(&self, operation: &OperationName) -> bool {
        self.non_null("data")
            .and_then(Value::as_object)
            .is_some_and(|data| data.contains_key(operation.as_str()))
    }

    /// `data[operation]` when present and not null.
    pub fn operation_data(&self, operation: &OperationName) -> Option<&Value> {
        self.non_null("data")?
            .as_object()?
            .get(operation.as_str())
            .filter(|v| !v.is_null())
    }
}

/// The request-side facts a rule may consult.
#[derive(Debug, Clone, Copy)]
pub struct Subject<'a> {
    pub operation: &'a OperationName,
    pub status_code: Option<&'a str>,
}
