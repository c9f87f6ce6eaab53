use chatsense::ChatsenseError;
use chatsense::classification::MessageClassification;
use chatsense::entity_extraction::{EntityType, NamedEntity};
use chatsense::intent::Intent;
use chatsense::sentiment::{AggregateSentiment, Sentiment, SentimentAnalysis};
use colored::*;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;

pub struct CliColors;

impl CliColors {
    pub fn success() -> Color {
        Color::TrueColor {
            r: 34,
            g: 197,
            b: 94,
        }
    }

    pub fn error() -> Color {
        Color::TrueColor {
            r: 239,
            g: 68,
            b: 68,
        }
    }

    pub fn warning() -> Color {
        Color::TrueColor {
            r: 245,
            g: 158,
            b: 11,
        }
    }

    pub fn info() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }

    pub fn intent() -> Color {
        Color::TrueColor {
            r: 168,
            g: 85,
            b: 247,
        }
    }

    pub fn entity() -> Color {
        Color::TrueColor {
            r: 245,
            g: 158,
            b: 11,
        }
    }

    pub fn muted() -> Color {
        Color::TrueColor {
            r: 148,
            g: 163,
            b: 184,
        }
    }

    pub fn primary() -> Color {
        Color::White
    }
}

pub fn output_error(error_msg: &str, output_format: &str) {
    if output_format == "json" {
        let error_response = json!({
            "error": true,
            "message": error_msg,
            "timestamp": chrono::Utc::now().to_rfc3339()
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&error_response).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        eprintln!("{}", format_error(error_msg));
    }
}

/// Output a ChatsenseError in structured JSON format
pub fn output_error_json(error: &ChatsenseError, output_format: &str) {
    if output_format != "json" {
        output_error(&error.to_string(), output_format);
        return;
    }

    let (code, details) = match error {
        ChatsenseError::InvalidInput { fields, .. } => {
            ("INVALID_INPUT", Some(json!({ "fields": fields })))
        }
        ChatsenseError::Processing(_) => ("PROCESSING_ERROR", None),
        ChatsenseError::Configuration(_) => ("CONFIGURATION_ERROR", None),
        ChatsenseError::Logging(_) => ("LOGGING_ERROR", None),
        ChatsenseError::Other(_) => ("ERROR", None),
    };

    let mut response = json!({
        "error": true,
        "code": code,
        "message": error.to_string(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });
    if let Some(details) = details {
        response["details"] = details;
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&response).unwrap_or_else(|_| "{}".to_string())
    );
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    );
}

pub fn format_success(msg: &str) -> String {
    format!(
        "{} {}",
        "✓".color(CliColors::success()).bold(),
        msg.color(CliColors::success())
    )
}

pub fn format_error(msg: &str) -> String {
    format!(
        "{} {}",
        "✗".color(CliColors::error()).bold(),
        msg.color(CliColors::error())
    )
}

pub fn format_warning(msg: &str) -> String {
    format!(
        "{} {}",
        "⚠".color(CliColors::warning()).bold(),
        msg.color(CliColors::warning())
    )
}

pub fn format_info(msg: &str) -> String {
    format!(
        "{} {}",
        "ℹ".color(CliColors::info()).bold(),
        msg.color(CliColors::info())
    )
}

pub fn format_sentiment(sentiment: Sentiment) -> ColoredString {
    match sentiment {
        Sentiment::Positive => "positive".color(CliColors::success()).bold(),
        Sentiment::Neutral => "neutral".color(CliColors::muted()),
        Sentiment::Negative => "negative".color(CliColors::error()).bold(),
    }
}

pub fn format_intent(intent: Intent) -> ColoredString {
    match intent {
        Intent::Complaint => intent.as_str().color(CliColors::error()),
        Intent::Other => intent.as_str().color(CliColors::muted()),
        _ => intent.as_str().color(CliColors::intent()),
    }
}

fn label(name: &str) -> ColoredString {
    name.color(CliColors::muted())
}

pub fn print_sentiment(analysis: &SentimentAnalysis) {
    println!(
        "{}",
        "━━━ Sentiment ━━━".color(CliColors::info()).bold()
    );
    println!("{}: {}", label("Text"), analysis.text.color(CliColors::primary()));
    println!("{}: {}", label("Sentiment"), format_sentiment(analysis.sentiment));
    println!("{}: {:+.2}", label("Score"), analysis.score);
    println!("{}: {:.2}", label("Confidence"), analysis.confidence);
}

pub fn print_classification(record: &MessageClassification) {
    println!(
        "{}",
        "━━━ Classification ━━━".color(CliColors::intent()).bold()
    );
    println!("{}: {}", label("ID"), record.message_id.color(CliColors::primary()));
    println!("{}: {}", label("Text"), record.text.color(CliColors::primary()));
    println!("{}: {}", label("Intent"), format_intent(record.intent));
    println!("{}: {:.2}", label("Confidence"), record.confidence);

    if !record.entities().is_empty() {
        println!();
        print_entity_list(record.entities());
    }
}

pub fn print_entity_list(entities: &[NamedEntity]) {
    if entities.is_empty() {
        println!("{}", format_info("No entities found."));
        return;
    }

    println!(
        "{}",
        format_info(&format!("Found {} entities:", entities.len()))
    );
    println!();

    println!(
        "{:<8} {:<12} {:<6} {}",
        "Type".color(CliColors::muted()).bold(),
        "Span".color(CliColors::muted()).bold(),
        "Score".color(CliColors::muted()).bold(),
        "Text".color(CliColors::muted()).bold()
    );
    println!("{}", "─".repeat(60).color(CliColors::muted()));

    for entity in entities {
        println!(
            "{:<8} {:<12} {:<6.2} {}",
            entity.entity_type.as_str().color(CliColors::entity()),
            format!("{}..{}", entity.start, entity.end),
            entity.score,
            entity.text.color(CliColors::primary())
        );
    }
}

pub fn print_aggregate(verdict: &AggregateSentiment, window: usize) {
    println!(
        "{}",
        format!("━━━ Sentiment (last {} messages) ━━━", window)
            .color(CliColors::info())
            .bold()
    );
    println!(
        "{}: {}",
        label("Dominant"),
        format_sentiment(verdict.dominant_sentiment)
    );
    println!("{}: {:+.2}", label("Average score"), verdict.average_score);
    println!("{}: {:.2}", label("Confidence"), verdict.confidence);
}

pub fn print_intent_distribution(distribution: &BTreeMap<Intent, usize>) {
    println!(
        "{}",
        "━━━ Intent Distribution ━━━".color(CliColors::intent()).bold()
    );
    let total: usize = distribution.values().sum();

    for (intent, count) in distribution {
        let bar = "█".repeat(*count).color(CliColors::intent());
        println!("{:<10} {:>4}  {}", format_intent(*intent), count, bar);
    }
    println!("{}", "─".repeat(30).color(CliColors::muted()));
    println!("{:<10} {:>4}", "total".color(CliColors::muted()), total);
}

pub fn print_entity_summary(counts: &BTreeMap<EntityType, usize>) {
    if counts.is_empty() {
        return;
    }
    let summary: Vec<String> = counts
        .iter()
        .map(|(entity_type, count)| format!("{} {}", count, entity_type))
        .collect();
    println!("{}", format_info(&format!("Entities: {}", summary.join(", "))));
}
