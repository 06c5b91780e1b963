//! Marquee - content-based movie recommender CLI
//!
//! Builds per-movie tag documents from TMDB-style metadata, embeds them as
//! bag-of-words vectors and recommends the most similar titles.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use marquee_core::error::{ExitCode as MarqueeExitCode, MarqueeError};
use marquee_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();
    let args: Vec<String> = std::env::args().collect();

    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_code(MarqueeExitCode::Success),
        Err(e) => report(&cli, &e),
    }
}

/// Parse argv. Clap failures are printed as a JSON envelope when
/// `--format json` appears anywhere on the command line, since the parsed
/// `Cli` is not available yet.
fn parse_args(args: &[String]) -> Result<Cli, ExitCode> {
    let err = match Cli::try_parse_from(args) {
        Ok(cli) => return Ok(cli),
        Err(err) => err,
    };

    match usage_error(&err) {
        Some(usage) if wants_json(args) => {
            eprintln!("{}", usage.to_json());
            Err(exit_code(usage.exit_code()))
        }
        _ => err.exit(),
    }
}

/// Usage error for a failed parse; `None` for `--help` and `--version`
fn usage_error(err: &clap::Error) -> Option<MarqueeError> {
    err.use_stderr()
        .then(|| MarqueeError::UsageError(err.to_string()))
}

fn wants_json(args: &[String]) -> bool {
    args.iter().enumerate().skip(1).any(|(i, arg)| {
        arg == "--format=json"
            || (arg == "--format" && args.get(i + 1).is_some_and(|v| v == "json"))
    })
}

fn report(cli: &Cli, err: &MarqueeError) -> ExitCode {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        OutputFormat::Human if !cli.quiet => eprintln!("error: {}", err),
        OutputFormat::Human => {}
    }
    exit_code(err.exit_code())
}

fn exit_code(code: MarqueeExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}
