use serde_json::Value;

/// True when any leaf reachable from `value` is not null.
///
/// Empty objects and arrays hold no leaves and count as null.
pub fn contains_non_null(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Object(map) => map.values().any(contains_non_null),
        Value::Array(items) => items.iter().any(contains_non_null),
        _ => true,
    }
}
