use crate::cli::discover::discover;
use crate::cli::{display_name, require_dir};
use crate::evomaster::{FAULTS_PATTERN, SUCCESSES_PATTERN, read_fault_count, read_successes};
use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct EvomasterArgs {
    /// Directory holding the generated test suites
    pub dir: PathBuf,
}

pub fn write_evomaster(args: &EvomasterArgs, out: &mut impl Write) -> Result<()> {
    require_dir(&args.dir)?;

    let successes = discover(&args.dir, SUCCESSES_PATTERN)?;
    if successes.is_empty() {
        writeln!(out, "No '_successes_Test.java' file found in directory.")?;
    }
    for path in &successes {
        let summary = read_successes(path)?;
        for test in &summary.tests {
            tracing::debug!(
                file = %display_name(path),
                test = %test.name,
                operation = %test.operation,
                assertions = test.non_null_assertions,
                "success test"
            );
        }
        writeln!(
            out,
            "Total tests with non-nullValue assertions: {}",
            summary.flagged
        )?;
    }

    let faults = discover(&args.dir, FAULTS_PATTERN)?;
    if faults.is_empty() {
        writeln!(out, "No '_faults_Test.java' file found in directory.")?;
    }
    for path in &faults {
        let count = read_fault_count(path)?;
        writeln!(out, "Total number of tests in faults file: {count}")?;
    }

    Ok(())
}

pub fn run_evomaster(args: &EvomasterArgs) -> Result<()> {
    let stdout = io::stdout();
    write_evomaster(args, &mut stdout.lock())
}
