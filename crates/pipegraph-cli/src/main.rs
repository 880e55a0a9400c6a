//! Entry point for the `pipegraph` binary.
//!
//! Parses the CLI, reads the input once through [`io::read_input`], and
//! dispatches to the subcommand implementation. Every [`error::CliError`]
//! is printed to stderr and mapped to its stable exit code.
use clap::Parser;

mod cli;
mod cmd;
mod error;
mod format;
mod io;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Dispatches the parsed CLI to the subcommand implementations.
fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Analyze {
            file,
            fail_on_cycle,
        } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::analyze::run(
                &content,
                *fail_on_cycle,
                &cli.format,
                cli.quiet,
                cli.verbose,
                cli.no_color,
            )
        }
        Command::Inspect { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::inspect::run(&content, &cli.format)
        }
        Command::Init { example } => cmd::init::run(*example),
    }
}
