use crate::capture::decode_rows_file;
use crate::cli::discover::discover;
use crate::cli::{InputPathError, display_name, render_file_coverage};
use crate::conf::{AnalysisConfig, resolve_config};
use crate::coverage::{CoverageReport, CoverageSummary, analyze_windows};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const CAPTURE_PATTERN: &str = "*.csv";
pub const DECODED_SUFFIX: &str = "-decoded.csv";

#[derive(Args, Debug, Clone)]
pub struct RowsArgs {
    /// CSV capture, or a directory of captures
    pub path: PathBuf,

    /// Cutoff window in seconds; repeat for several windows
    #[arg(long = "cutoff", value_name = "SECONDS")]
    pub cutoffs: Vec<u64>,

    /// TOML file with analysis settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Summaries of one capture file, one per cutoff window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileCoverage {
    pub file: String,
    pub summaries: Vec<CoverageSummary>,
}

pub fn is_decoded_capture(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(DECODED_SUFFIX))
}

/// Capture files under `path`: the file itself, or the `*.csv` files of a
/// directory (non-recursive, sorted) without previously decoded copies.
pub fn capture_files(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        Err(InputPathError::NotFound {
            path: path.to_path_buf(),
        }
        .into())
    } else if path.is_dir() {
        let files = discover(path, CAPTURE_PATTERN)?;
        Ok(files
            .into_iter()
            .filter(|p| !is_decoded_capture(p))
            .collect())
    } else if path.is_file() {
        Ok(vec![path.to_path_buf()])
    } else {
        Err(InputPathError::NotAFile {
            path: path.to_path_buf(),
        }
        .into())
    }
}

pub fn analyze_capture(path: &Path, config: &AnalysisConfig) -> Result<FileCoverage> {
    let entries = decode_rows_file(path)?;
    let reports = analyze_windows(&entries, &config.rows, config.cutoffs());

    Ok(FileCoverage {
        file: display_name(path),
        summaries: reports.iter().map(CoverageReport::summary).collect(),
    })
}

pub fn write_rows(args: &RowsArgs, out: &mut impl Write) -> Result<()> {
    let config = resolve_config(args.config.as_deref(), &args.cutoffs)?;
    let files = capture_files(&args.path)?;

    if files.is_empty() {
        tracing::warn!(path = %args.path.display(), "no capture files found");
    }

    let mut coverage = Vec::with_capacity(files.len());
    for file in &files {
        let analyzed = analyze_capture(file, &config)?;

        if !args.json {
            out.write_all(render_file_coverage(&analyzed).as_bytes())?;
        }
        coverage.push(analyzed);
    }

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&coverage)?)?;
    }

    Ok(())
}

pub fn run_rows(args: &RowsArgs) -> Result<()> {
    let stdout = io::stdout();
    write_rows(args, &mut stdout.lock())
}
