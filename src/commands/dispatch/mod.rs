//! Command dispatch logic for marquee

use std::time::Instant;

use marquee_core::error::Result;
use marquee_core::MarqueeConfig;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands::{recommend, tags, vocab};

mod command;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = load_config(cli)?;
    debug!(elapsed = ?start.elapsed(), ?config, "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

/// Explicit `--config` path, else `marquee.toml` in the working directory
fn load_config(cli: &Cli) -> Result<MarqueeConfig> {
    match &cli.config {
        Some(path) => MarqueeConfig::load(path),
        None => MarqueeConfig::discover(&std::env::current_dir()?),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Recommend(args) => recommend::execute(ctx, args),
            Commands::Tags(args) => tags::execute(ctx, args),
            Commands::Vocab(args) => vocab::execute(ctx, args),
        }
    }
}
