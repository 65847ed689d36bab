use crate::capture::{
    CaptureEntry, CaptureError, REQUEST_COLUMN, RESPONSE_COLUMN, STATUS_COLUMN, TIME_COLUMN,
    decode_rows_file,
};
use crate::cli::{DECODED_SUFFIX, require_file};
use crate::conf::resolve_config;
use crate::operation::{ExtractionMode, extract_operation};
use anyhow::Result;
use clap::Args;
use csv::Writer;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const OPERATION_COLUMN: &str = "Operation";

#[derive(Args, Debug, Clone)]
pub struct DecodeArgs {
    /// CSV capture with base64 payloads
    pub input: PathBuf,

    /// Output path (defaults to `<stem>-decoded.csv` next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML file with analysis settings
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn decoded_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "capture".to_string(), |s| s.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}{DECODED_SUFFIX}"))
}

/// Writes `entries` as plain-text CSV with the extracted operation name.
pub fn write_decoded_capture(
    entries: &[CaptureEntry],
    extraction: ExtractionMode,
    path: &Path,
) -> Result<(), CaptureError> {
    let mut writer = Writer::from_path(path).map_err(|e| CaptureError::write_csv(path, e))?;

    writer
        .write_record([
            TIME_COLUMN,
            STATUS_COLUMN,
            OPERATION_COLUMN,
            REQUEST_COLUMN,
            RESPONSE_COLUMN,
        ])
        .map_err(|e| CaptureError::write_csv(path, e))?;

    for entry in entries {
        let time = entry
            .timestamp
            .map(|ts| ts.to_rfc3339())
            .unwrap_or_default();
        let operation = extract_operation(&entry.request_text, extraction);

        writer
            .write_record([
                time.as_str(),
                entry.status_code.as_deref().unwrap_or_default(),
                operation.as_str(),
                entry.request_text.as_str(),
                entry.response_text.as_str(),
            ])
            .map_err(|e| CaptureError::write_csv(path, e))?;
    }

    writer
        .flush()
        .map_err(|e| CaptureError::write_csv(path, e.into()))
}

pub fn write_decode(args: &DecodeArgs, out: &mut impl Write) -> Result<()> {
    require_file(&args.input)?;
    let config = resolve_config(args.config.as_deref(), &[])?;

    let entries = decode_rows_file(&args.input)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| decoded_path(&args.input));

    write_decoded_capture(&entries, config.rows.extraction, &output)?;
    tracing::info!(path = %output.display(), entries = entries.len(), "wrote decoded capture");

    writeln!(
        out,
        "Decoded {} entries to {}",
        entries.len(),
        output.display()
    )?;
    Ok(())
}

pub fn run_decode(args: &DecodeArgs) -> Result<()> {
    let stdout = io::stdout();
    write_decode(args, &mut stdout.lock())
}
