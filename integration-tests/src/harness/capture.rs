use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory that capture fixtures are written into.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

fn request_body(query: &str) -> String {
    json!({ "query": query }).to_string()
}

/// Builds CSV captures the way an intercepting proxy exports them: raw HTTP
/// messages, base64 encoded, one exchange per row.
pub struct CaptureBuilder {
    start: DateTime<Utc>,
    rows: Vec<String>,
}

impl CaptureBuilder {
    pub fn new() -> Self {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(10, 0, 0))
            .unwrap()
            .and_utc();

        Self {
            start,
            rows: Vec::new(),
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Adds an exchange `offset_secs` after the start of the capture.
    pub fn exchange(mut self, offset_secs: i64, status: u16, query: &str, response: &str) -> Self {
        let time = self.start + TimeDelta::seconds(offset_secs);
        let request = format!(
            "POST /graphql HTTP/1.1\r\nContent-Type: application/json\r\n\r\n{}",
            request_body(query)
        );
        let response =
            format!("HTTP/1.1 {status} OK\r\nContent-Type: application/json\r\n\r\n{response}");

        self.rows.push(format!(
            "{},api.local,{status},{},{}",
            time.format("%Y-%m-%dT%H:%M:%S%.3f"),
            STANDARD.encode(request),
            STANDARD.encode(response),
        ));
        self
    }

    /// Adds a row as-is, for malformed input.
    pub fn raw_row(mut self, row: &str) -> Self {
        self.rows.push(row.to_string());
        self
    }

    pub fn build(&self) -> String {
        let mut csv = String::from("Time,Host,Status code,Request,Response\n");
        for row in &self.rows {
            csv.push_str(row);
            csv.push('\n');
        }
        csv
    }
}

impl Default for CaptureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds delimited message logs: `==== <n> ==========` followed by the
/// request and response bodies.
#[derive(Default)]
pub struct MessageLogBuilder {
    sections: Vec<String>,
}

impl MessageLogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exchange(mut self, query: &str, response: &str) -> Self {
        let index = self.sections.len() + 1;
        self.sections.push(format!(
            "==== {index} ==========\nPOST /graphql HTTP/1.1\n\n{}\n\nHTTP/1.1 200 OK\n\n{response}\n",
            request_body(query)
        ));
        self
    }

    pub fn build(&self) -> String {
        self.sections.concat()
    }
}
