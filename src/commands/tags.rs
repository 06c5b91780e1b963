//! `marquee tags` command - print the stemmed tag document of one movie

use marquee_core::error::Result;

use crate::cli::{OutputFormat, TagsArgs};
use crate::commands::dispatch::CommandContext;

/// Execute the tags command
pub fn execute(ctx: &CommandContext, args: &TagsArgs) -> Result<()> {
    let corpus = ctx.build_corpus(&args.dataset)?;
    let document = corpus.document(&args.title)?;

    match ctx.cli.format {
        OutputFormat::Json => {
            let id = corpus
                .catalog()
                .position(&args.title)
                .and_then(|i| corpus.catalog().get(i))
                .map(|m| m.id);
            let output = serde_json::json!({
                "id": id,
                "title": args.title,
                "tags": document,
                "tokens": document.tokens().count(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", document);
        }
    }

    Ok(())
}
