use crate::capture::decode_blocks_file;
use crate::cli::{render_blocks, require_file};
use crate::conf::resolve_config;
use crate::coverage::{CoverageReport, OperationStats, aggregate, classify_entries};
use crate::operation::UNKNOWN_OPERATION;
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct BlocksArgs {
    /// Delimited message log
    #[arg(short, long)]
    pub file: PathBuf,

    /// TOML file with analysis settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlocksOutput<'a> {
    pub operations: BTreeMap<&'a str, OperationStats>,
    pub operations_with_pass: usize,
    pub operations_with_fail: usize,
}

/// Per-operation counts as published, with the `unknown` bucket appended
/// when it recorded anything.
pub fn operation_table(report: &CoverageReport) -> BTreeMap<&str, OperationStats> {
    let mut table: BTreeMap<&str, OperationStats> = report
        .operations
        .iter()
        .map(|(name, stats)| (name.as_str(), *stats))
        .collect();

    if !report.unknown.is_empty() {
        table.insert(UNKNOWN_OPERATION, report.unknown);
    }
    table
}

impl<'a> BlocksOutput<'a> {
    pub fn from_report(report: &'a CoverageReport) -> Self {
        let summary = report.summary();
        Self {
            operations: operation_table(report),
            operations_with_pass: summary.operations_with_pass,
            operations_with_fail: summary.operations_with_fail,
        }
    }
}

pub fn write_blocks(args: &BlocksArgs, out: &mut impl Write) -> Result<()> {
    require_file(&args.file)?;
    let config = resolve_config(args.config.as_deref(), &[])?;

    let entries = decode_blocks_file(&args.file)?;
    let report = aggregate(&classify_entries(&entries, &config.blocks), None);
    let output = BlocksOutput::from_report(&report);

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        out.write_all(render_blocks(&output)?.as_bytes())?;
    }

    Ok(())
}

pub fn run_blocks(args: &BlocksArgs) -> Result<()> {
    let stdout = io::stdout();
    write_blocks(args, &mut stdout.lock())
}
