//! Conversation command handler

use crate::args::ConversationArgs;
use crate::context::ChatsenseCliContext;
use crate::output::*;
use crate::utils::{last_window, load_messages};
use chatsense::ChatsenseError;
use chatsense::analyzer::MessageAnalyzer;
use chatsense::classification::{MessageClassification, MessageInput, intent_distribution};
use chatsense::entity_extraction::EntityType;
use chatsense::intent::Intent;
use chatsense::sentiment::AggregateSentiment;
use colored::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Analysis of a whole conversation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationReport {
    pub messages: Vec<MessageClassification>,
    pub window: usize,
    pub sentiment: AggregateSentiment,
    pub intent_distribution: BTreeMap<Intent, usize>,
    pub entity_counts: BTreeMap<EntityType, usize>,
}

pub async fn build_conversation_report(
    analyzer: &MessageAnalyzer,
    messages: &[MessageInput],
    window: usize,
) -> ConversationReport {
    let records = analyzer.classify_multiple_messages(messages).await;

    let recent: Vec<&str> = last_window(messages, window)
        .iter()
        .map(|m| m.text.as_str())
        .collect();
    let sentiment = analyzer.average_sentiment(&recent).await;

    let mut entity_counts = BTreeMap::new();
    for entity in records.iter().flat_map(|r| r.entities()) {
        *entity_counts.entry(entity.entity_type).or_insert(0) += 1;
    }

    ConversationReport {
        intent_distribution: intent_distribution(&records),
        messages: records,
        window,
        sentiment,
        entity_counts,
    }
}

pub async fn handle_conversation_command(
    args: ConversationArgs,
    ctx: &ChatsenseCliContext,
    output_format: &str,
) -> chatsense::Result<()> {
    let window = args.window.unwrap_or(ctx.config.aggregation.window);
    if window == 0 {
        return Err(ChatsenseError::InvalidInput {
            fields: vec!["window".to_string()],
            message: "Window must be at least 1".to_string(),
        });
    }

    let messages = load_messages(&args.file)?;
    tracing::debug!(count = messages.len(), window, "Loaded conversation");

    let report = build_conversation_report(&ctx.analyzer, &messages, window).await;

    if output_format == "json" {
        print_json(&report);
        return Ok(());
    }

    if report.messages.is_empty() {
        println!("{}", format_warning("Conversation has no messages."));
    }
    for record in &report.messages {
        println!(
            "{:<8} {:<10} {}",
            record.message_id.color(CliColors::muted()),
            format_intent(record.intent),
            record.text
        );
    }
    println!();
    print_aggregate(&report.sentiment, window.min(report.messages.len()));
    println!();
    print_intent_distribution(&report.intent_distribution);
    print_entity_summary(&report.entity_counts);
    Ok(())
}
