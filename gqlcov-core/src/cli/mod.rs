//! Command Runners
//!
//! Each subcommand of the `gqlcov` binary has an argument type and a runner
//! here. Runners write their report to any `io::Write` so they can be
//! exercised without a terminal; the `run_*` wrappers bind them to stdout.
//!
//! - **rows**: time-windowed coverage for CSV captures with base64 payloads
//! - **blocks**: whole-log coverage for delimited message dumps
//! - **evomaster**: assertion counts for generated EvoMaster suites
//! - **decode**: writes a readable copy of a CSV capture

mod blocks;
mod decode;
pub mod discover;
mod evomaster;
mod input;
mod render;
mod rows;
#[cfg(test)]
mod tests;

pub use blocks::*;
pub use decode::*;
pub use evomaster::*;
pub use input::*;
pub use render::*;
pub use rows::*;

use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Coverage per cutoff window for CSV captures
    Rows(RowsArgs),

    /// Coverage for a delimited message log
    Blocks(BlocksArgs),

    /// Summarize generated EvoMaster test suites
    Evomaster(EvomasterArgs),

    /// Write a decoded copy of a CSV capture
    Decode(DecodeArgs),
}

pub fn run(command: &Command) -> Result<()> {
    match command {
        Command::Rows(args) => run_rows(args),
        Command::Blocks(args) => run_blocks(args),
        Command::Evomaster(args) => run_evomaster(args),
        Command::Decode(args) => run_decode(args),
    }
}
