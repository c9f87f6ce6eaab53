//! Classify command handler

use crate::args::ClassifyArgs;
use crate::context::ChatsenseCliContext;
use crate::output::*;
use crate::utils::resolve_text;
use chatsense::classification::ClassifyRequest;

pub async fn handle_classify_command(
    args: ClassifyArgs,
    ctx: &ChatsenseCliContext,
    output_format: &str,
) -> chatsense::Result<()> {
    let text = resolve_text(&args.text)?;
    let message_id = args
        .id
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let record = if args.no_entities {
        ctx.analyzer.classify(&message_id, &text)
    } else {
        ctx.analyzer
            .classify_message(&ClassifyRequest::new(message_id, text))
            .await?
    };

    if output_format == "json" {
        print_json(&record);
    } else {
        print_classification(&record);
    }
    Ok(())
}
