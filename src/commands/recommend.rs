//! `marquee recommend` command - titles most similar to a query title

use marquee_core::error::Result;
use marquee_core::Recommendation;
use serde::Serialize;

use crate::cli::{OutputFormat, RecommendArgs};
use crate::commands::dispatch::CommandContext;

#[derive(Serialize)]
struct RecommendOutput<'a> {
    query: &'a str,
    results: &'a [Recommendation],
}

/// Execute the recommend command
pub fn execute(ctx: &CommandContext, args: &RecommendArgs) -> Result<()> {
    let recommender = ctx.build_recommender(&args.dataset, args.limit)?;
    let results = recommender.recommend(&args.title)?;

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = RecommendOutput {
                query: &args.title,
                results: &results,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Movies similar to {}:", args.title);
            }
            if results.is_empty() && !ctx.cli.quiet {
                println!("No other movies in the catalog");
            }
            for r in &results {
                if ctx.cli.verbose {
                    println!("{}. {} ({:.3})", r.rank, r.title, r.score);
                } else {
                    println!("{}. {}", r.rank, r.title);
                }
            }
        }
    }

    Ok(())
}
