use base64::Engine;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use chrono::{DateTime, NaiveDateTime, Utc};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M:%S%.f%z"];

/// Decodes a base64 message and returns the text from its first `{` onward.
///
/// Captured messages usually carry an HTTP preamble (request line, headers)
/// before the JSON body. When no `{` is present the decoded text is returned
/// unchanged. Any decode failure yields an empty string.
pub fn decode_payload(encoded: &str) -> String {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    if compact.is_empty() {
        return String::new();
    }

    let bytes = match STANDARD
        .decode(&compact)
        .or_else(|_| STANDARD_NO_PAD.decode(&compact))
    {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!(error = %err, "payload is not valid base64");
            return String::new();
        }
    };

    let Ok(decoded) = String::from_utf8(bytes) else {
        tracing::debug!("decoded payload is not valid UTF-8");
        return String::new();
    };

    match decoded.find('{') {
        Some(start) => decoded[start..].to_string(),
        None => decoded,
    }
}

/// Parses an ISO-8601 capture timestamp.
///
/// Timestamps without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(ts) = DateTime::parse_from_str(raw, fmt) {
            return Some(ts.with_timezone(&Utc));
        }
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}
