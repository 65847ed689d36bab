use clap::Parser;
use gqlcov_core::cli::{self, Command, render_error};
use gqlcov_core::logging::{LogFormat, init_logging};
use std::io::{self, IsTerminal};

#[derive(Parser, Debug)]
#[command(
    name = "gqlcov",
    version,
    about = "gqlcov: GraphQL API coverage from captured traffic"
)]
struct Cli {
    /// Emit diagnostics as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();

    init_logging(LogFormat::from_json_flag(cli.log_json));
    tracing::debug!(command = ?cli.command, "starting");

    if let Err(err) = cli::run(&cli.command) {
        let plain = !io::stderr().is_terminal();
        eprint!("{}", render_error(&err, plain));
        std::process::exit(1);
    }
}
