//! Integration tests for the Chatsense CLI
//!
//! These tests exercise the library side of the CLI:
//! - Conversation file loading
//! - Argument helpers
//! - Command handlers' computations

use chatsense::config::ConfigBuilder;
use chatsense::prelude::*;
use chatsense_cli::handlers::build_conversation_report;
use chatsense_cli::handlers::entities::extract;
use chatsense_cli::{ChatsenseCliContext, last_window, load_messages, parse_entity_type};
use std::fs;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

fn test_context() -> ChatsenseCliContext {
    let config = ConfigBuilder::testing().build().expect("Failed to build config");
    ChatsenseCliContext::from_config(config).expect("Failed to build context")
}

#[test]
fn test_load_messages_objects_and_strings() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "conversation.json",
        r#"[
            {"id": "a1", "text": "Oi, bom dia"},
            {"messageId": "a2", "text": "Qual o prazo?"},
            "Obrigado!"
        ]"#,
    );

    let messages = load_messages(&path).unwrap();
    assert_eq!(
        messages,
        vec![
            MessageInput::new("a1", "Oi, bom dia"),
            MessageInput::new("a2", "Qual o prazo?"),
            MessageInput::new("3", "Obrigado!"),
        ]
    );
}

#[test]
fn test_load_messages_errors() {
    let dir = TempDir::new().unwrap();
    let invalid = write_file(&dir, "invalid.json", r#"{"id": "1"}"#);

    assert!(load_messages(&invalid).is_err());
    assert!(load_messages(&dir.path().join("missing.json")).is_err());
}

#[test]
fn test_parse_entity_type() {
    assert_eq!(parse_entity_type("email").unwrap(), EntityType::Email);
    assert_eq!(parse_entity_type("URL").unwrap(), EntityType::Url);
    assert!(parse_entity_type("person").is_err());
    assert!(parse_entity_type("fax").is_err());
}

#[test]
fn test_last_window() {
    let items = [1, 2, 3, 4, 5, 6];
    assert_eq!(last_window(&items, 5), &[2, 3, 4, 5, 6]);
    assert_eq!(last_window(&items, 10), &items);
    assert!(last_window(&items[..0], 3).is_empty());
}

#[test]
fn test_extract_with_filter_and_overlap_resolution() {
    let ctx = test_context();
    let text = "Pedido https://loja.com/p/1234567890 entregue em 01/12/2024";

    let all = extract(&ctx, text, None, false).unwrap();
    assert!(all.iter().any(|e| e.entity_type == EntityType::Phone));

    let resolved = extract(&ctx, text, None, true).unwrap();
    let types: Vec<EntityType> = resolved.iter().map(|e| e.entity_type).collect();
    assert_eq!(types, vec![EntityType::Url, EntityType::Date]);

    let dates = extract(&ctx, text, Some("date"), false).unwrap();
    assert_eq!(dates.len(), 1);
    assert_eq!(dates[0].text, "01/12/2024");

    assert!(extract(&ctx, text, Some("fax"), false).is_err());
}

#[tokio::test]
async fn test_conversation_report() {
    let ctx = test_context();
    let messages = vec![
        MessageInput::new("1", "Olá, tudo bem"),
        MessageInput::new("2", "Excelente atendimento, adorei"),
        MessageInput::new("3", "Mas o pedido chegou quebrado"),
        MessageInput::new("4", "Que absurdo, produto com defeito"),
        MessageInput::new("5", "Meu email é ana@exemplo.com"),
    ];

    let report = build_conversation_report(&ctx.analyzer, &messages, 3).await;

    assert_eq!(report.messages.len(), 5);
    assert_eq!(report.messages[0].intent, Intent::Greeting);
    assert_eq!(report.window, 3);
    // last three: -1, -1, 0
    assert_eq!(report.sentiment.dominant_sentiment, Sentiment::Negative);
    assert_eq!(report.intent_distribution.values().sum::<usize>(), 5);
    assert_eq!(report.entity_counts.get(&EntityType::Email), Some(&1));

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["intentDistribution"]["greeting"], 1);
    assert_eq!(value["sentiment"]["dominantSentiment"], "negative");
}

#[tokio::test]
async fn test_conversation_report_empty() {
    let ctx = test_context();
    let report = build_conversation_report(&ctx.analyzer, &[], 5).await;

    assert!(report.messages.is_empty());
    assert_eq!(report.sentiment, AggregateSentiment::empty());
    assert!(report.entity_counts.is_empty());
}

#[test]
fn test_context_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "chatsense.toml",
        "[aggregation]\nwindow = 3\n\n[sentiment]\nextra_negative = [\"travou\"]\n",
    );

    let ctx = ChatsenseCliContext::new(Some(&path)).unwrap();
    assert_eq!(ctx.config.aggregation.window, 3);
    assert_eq!(
        ctx.analyzer.analyze_sentiment("O app travou").sentiment,
        Sentiment::Negative
    );
}

#[test]
fn test_context_rejects_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "bad.toml", "[aggregation]\nwindow = 0\n");

    assert!(ChatsenseCliContext::new(Some(&path)).is_err());
}
