//! Sentiment command handler

use crate::args::SentimentArgs;
use crate::context::ChatsenseCliContext;
use crate::output::*;
use crate::utils::resolve_text;

pub fn handle_sentiment_command(
    args: SentimentArgs,
    ctx: &ChatsenseCliContext,
    output_format: &str,
) -> chatsense::Result<()> {
    let text = resolve_text(&args.text)?;
    let analysis = ctx.analyzer.analyze_sentiment(&text);

    if output_format == "json" {
        print_json(&analysis);
    } else {
        print_sentiment(&analysis);
    }
    Ok(())
}
