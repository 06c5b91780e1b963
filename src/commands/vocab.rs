//! `marquee vocab` command - vocabulary size and most frequent terms

use marquee_core::error::Result;

use crate::cli::{OutputFormat, VocabArgs};
use crate::commands::dispatch::CommandContext;

/// Execute the vocab command
pub fn execute(ctx: &CommandContext, args: &VocabArgs) -> Result<()> {
    let corpus = ctx.build_corpus(&args.dataset)?;
    let vocabulary = corpus.vocabulary();
    let top = vocabulary.most_frequent(args.top);
    let max_features = args
        .dataset
        .max_features
        .unwrap_or(ctx.config.vectorizer.max_features);

    match ctx.cli.format {
        OutputFormat::Json => {
            let terms: Vec<_> = top
                .iter()
                .map(|(term, frequency)| serde_json::json!({ "term": term, "frequency": frequency }))
                .collect();
            let output = serde_json::json!({
                "movies": corpus.catalog().len(),
                "size": vocabulary.len(),
                "max_features": max_features,
                "top": terms,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "{} terms from {} movies (max {})",
                    vocabulary.len(),
                    corpus.catalog().len(),
                    max_features
                );
            }
            for (term, frequency) in top {
                println!("{}\t{}", term, frequency);
            }
        }
    }

    Ok(())
}
