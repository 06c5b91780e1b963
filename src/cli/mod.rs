//! CLI argument parsing for marquee
//!
//! Global flags: --format, --config, --quiet, --verbose, --log-level, --log-json

pub mod args;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{DatasetArgs, RecommendArgs, TagsArgs, VocabArgs};
pub use marquee_core::format::OutputFormat;

/// Marquee - content-based movie recommender
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Configuration file (defaults to ./marquee.toml when present)
    #[arg(long, global = true, env = "MARQUEE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend movies similar to a title
    Recommend(RecommendArgs),

    /// Show the tag document built for a title
    Tags(TagsArgs),

    /// Show the vocabulary learned from the catalog
    Vocab(VocabArgs),
}
