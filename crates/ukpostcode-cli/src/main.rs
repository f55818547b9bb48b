//! ukpostcode CLI - validate UK postcodes from arguments or stdin.
//!
//! Exit codes:
//! - 0: Every candidate is valid
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: At least one candidate is invalid

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod output;

use output::Report;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "ukpostcode", version, about = "Validate the structure of UK postcodes")]
struct Cli {
    /// Postcodes to validate; reads one per line from stdin when omitted.
    /// Put `--` before a postcode that starts with `-`
    postcodes: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print nothing, report only through the exit status
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(ExitCodes::INVALID_ARGS)
            } else {
                ExitCode::from(ExitCodes::SUCCESS)
            };
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::from(ExitCodes::SUCCESS),
        Ok(false) => ExitCode::from(ExitCodes::VALIDATION_FAILURE),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(ExitCodes::GENERAL_ERROR)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "ukpostcode={default_level},ukpostcode_core={default_level}"
        ))
    });

    // Ignore a second initialization; logging is best-effort.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .try_init();
}

/// Validate every candidate and print the report. Returns whether all were valid.
fn run(cli: &Cli) -> Result<bool> {
    let candidates = if cli.postcodes.is_empty() {
        debug!("No postcodes given, reading stdin");
        read_candidates(io::stdin().lock())?
    } else {
        cli.postcodes.clone()
    };

    let report = Report::build(candidates);
    info!(
        total = report.total,
        invalid = report.invalid,
        "Validation finished"
    );

    if !cli.quiet {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        match cli.format {
            OutputFormat::Text => report.write_text(&mut out)?,
            OutputFormat::Json => report.write_json(&mut out)?,
        }
        out.flush().context("Failed to flush stdout")?;
    }

    Ok(report.invalid == 0)
}

/// One candidate per line; only line terminators are stripped.
fn read_candidates(reader: impl BufRead) -> Result<Vec<String>> {
    reader
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read postcodes from stdin")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_candidates_keeps_inner_whitespace() {
        let input = "EC1A 1BB\r\n M1 1AE\nGU26 6\n";
        let candidates = read_candidates(input.as_bytes()).unwrap();
        assert_eq!(candidates, vec!["EC1A 1BB", " M1 1AE", "GU26 6"]);
    }

    #[test]
    fn test_cli_parses_format() {
        let cli = Cli::try_parse_from(["ukpostcode", "--format", "json", "M1 1AE"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.postcodes, vec!["M1 1AE"]);
    }
}
