use chrono::{DateTime, Utc};

/// One request/response exchange recovered from a capture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureEntry {
    /// Absent for capture formats without per-exchange timing.
    pub timestamp: Option<DateTime<Utc>>,
    /// HTTP status as written in the capture, e.g. "200".
    pub status_code: Option<String>,
    pub request_text: String,
    pub response_text: String,
}

impl CaptureEntry {
    pub fn untimed(request_text: impl Into<String>, response_text: impl Into<String>) -> Self {
        Self {
            timestamp: None,
            status_code: None,
            request_text: request_text.into(),
            response_text: response_text.into(),
        }
    }
}
