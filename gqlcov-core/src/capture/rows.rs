use crate::capture::{CaptureEntry, CaptureError, decode_payload, parse_timestamp};
use csv::{ReaderBuilder, StringRecord};
use std::io;
use std::path::Path;

pub const TIME_COLUMN: &str = "Time";
pub const STATUS_COLUMN: &str = "Status code";
pub const REQUEST_COLUMN: &str = "Request";
pub const RESPONSE_COLUMN: &str = "Response";

/// Column positions resolved from the CSV header row.
#[derive(Debug, Default, Clone, Copy)]
struct RowLayout {
    time: Option<usize>,
    status: Option<usize>,
    request: Option<usize>,
    response: Option<usize>,
}

impl RowLayout {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        Self {
            time: find(TIME_COLUMN),
            status: find(STATUS_COLUMN),
            request: find(REQUEST_COLUMN),
            response: find(RESPONSE_COLUMN),
        }
    }

    fn entry(&self, record: &StringRecord) -> CaptureEntry {
        let field = |idx: Option<usize>| idx.and_then(|i| record.get(i));

        CaptureEntry {
            timestamp: field(self.time).and_then(parse_timestamp),
            status_code: field(self.status)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            request_text: field(self.request).map(decode_payload).unwrap_or_default(),
            response_text: field(self.response).map(decode_payload).unwrap_or_default(),
        }
    }
}

/// Decodes a row-based capture read from `reader`.
///
/// Records the CSV reader rejects are skipped; every other row yields one
/// entry, in input order.
pub fn decode_rows<R: io::Read>(reader: R) -> Vec<CaptureEntry> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let layout = match reader.headers() {
        Ok(headers) => RowLayout::from_headers(headers),
        Err(err) => {
            tracing::warn!(error = %err, "capture has no readable header row");
            return Vec::new();
        }
    };

    if layout.request.is_none() || layout.response.is_none() {
        tracing::warn!("capture header is missing the Request or Response column");
    }

    let mut entries = Vec::new();
    for (i, record) in reader.records().enumerate() {
        match record {
            Ok(record) => entries.push(layout.entry(&record)),
            Err(err) => {
                tracing::warn!(row = i + 1, error = %err, "skipping unreadable capture row");
            }
        }
    }

    entries
}

pub fn decode_rows_file(path: &Path) -> Result<Vec<CaptureEntry>, CaptureError> {
    let file = std::fs::File::open(path).map_err(|e| CaptureError::read_file(path, e))?;
    let entries = decode_rows(io::BufReader::new(file));

    tracing::info!(
        path = %path.display(),
        entries = entries.len(),
        "decoded row capture"
    );

    Ok(entries)
}
