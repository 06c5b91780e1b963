//! Command trait and context for dispatching commands

use std::time::Instant;

use marquee_core::catalog::load_catalog;
use marquee_core::error::Result;
use marquee_core::{Catalog, Corpus, MarqueeConfig, Pipeline, Recommender};
use tracing::debug;

use crate::cli::{Cli, DatasetArgs};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: MarqueeConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: MarqueeConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Load the datasets and run the full pipeline once
    pub fn build_recommender(
        &self,
        dataset: &DatasetArgs,
        limit: Option<usize>,
    ) -> Result<Recommender> {
        let (pipeline, catalog) = self.prepare(dataset, limit)?;
        let recommender = pipeline.build(catalog)?;
        debug!(
            elapsed = ?self.start.elapsed(),
            vocabulary = recommender.vocabulary().len(),
            "build_recommender"
        );
        Ok(recommender)
    }

    /// Load the datasets and stop after vectorizing; no similarity matrix
    pub fn build_corpus(&self, dataset: &DatasetArgs) -> Result<Corpus> {
        let (pipeline, catalog) = self.prepare(dataset, None)?;
        let corpus = pipeline.vectorize(catalog)?;
        debug!(
            elapsed = ?self.start.elapsed(),
            vocabulary = corpus.vocabulary().len(),
            "build_corpus"
        );
        Ok(corpus)
    }

    fn prepare(&self, dataset: &DatasetArgs, limit: Option<usize>) -> Result<(Pipeline, Catalog)> {
        let config = self
            .config
            .clone()
            .with_overrides(dataset.max_features, limit)?;

        let catalog = load_catalog(&dataset.movies, &dataset.credits)?;
        debug!(elapsed = ?self.start.elapsed(), rows = catalog.len(), "load_catalog");
        Ok((Pipeline::new(config), catalog))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("marquee {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("A content-based movie recommender.");
        println!();
        println!("Run `marquee --help` for usage information.");
        Ok(())
    }
}
