//! Command enum definitions

use crate::args::*;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Display version information
    Version,

    /// Score the sentiment of a text
    #[command(long_about = r#"
Score the sentiment of a text by counting positive and negative keywords.

  score      = (positive - negative) / (positive + negative), 0 without hits
  confidence = hits / 10, capped at 1

A score above 0.2 is positive, below -0.2 negative, anything else neutral.
"#)]
    Sentiment(SentimentArgs),

    /// Classify the intent of a message and extract its entities
    #[command(long_about = r#"
Classify a message into one of: question, complaint, feedback, request,
greeting, goodbye, gratitude or other. Rules are checked in that order and
the first match wins. Emails, phone numbers, URLs and dates found in the
message are attached unless --no-entities is given.
"#)]
    Classify(ClassifyArgs),

    /// Extract emails, phone numbers, URLs and dates from a text
    Entities(EntitiesArgs),

    /// Analyze a whole conversation from a JSON file
    #[command(long_about = r#"
Classify every message of a conversation, compute the rolling sentiment over
the last N messages (--window, default from configuration) and report the
intent distribution.

The file must hold a JSON array of messages, either objects with "id" (or
"messageId") and "text", or plain strings:

  [{"id": "1", "text": "Oi, bom dia"}, "Meu pedido atrasou"]
"#)]
    Conversation(ConversationArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}
