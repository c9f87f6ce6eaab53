//! Entities command handler

use crate::args::EntitiesArgs;
use crate::context::ChatsenseCliContext;
use crate::output::*;
use crate::utils::{parse_entity_type, resolve_text};
use chatsense::entity_extraction::{
    EntityExtractor, EntityPostProcessor, NamedEntity, OverlapResolver,
};

/// Extract entities, optionally resolving overlaps and filtering by type.
pub fn extract(
    ctx: &ChatsenseCliContext,
    text: &str,
    entity_type: Option<&str>,
    resolve_overlaps: bool,
) -> chatsense::Result<Vec<NamedEntity>> {
    let entity_type = entity_type.map(parse_entity_type).transpose()?;

    let mut entities = ctx.analyzer.pipeline().extractor().extract_entities(text);
    if resolve_overlaps && !ctx.config.entities.resolve_overlaps {
        entities = OverlapResolver::new().process(entities);
    }
    if let Some(entity_type) = entity_type {
        entities.retain(|e| e.entity_type == entity_type);
    }
    Ok(entities)
}

pub fn handle_entities_command(
    args: EntitiesArgs,
    ctx: &ChatsenseCliContext,
    output_format: &str,
) -> chatsense::Result<()> {
    let text = resolve_text(&args.text)?;
    let entities = extract(ctx, &text, args.entity_type.as_deref(), args.resolve_overlaps)?;

    if output_format == "json" {
        print_json(&entities);
    } else {
        print_entity_list(&entities);
    }
    Ok(())
}
