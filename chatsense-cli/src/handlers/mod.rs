//! Command handlers for the Chatsense CLI

pub mod classify;
pub mod conversation;
pub mod entities;
pub mod sentiment;

pub use classify::handle_classify_command;
pub use conversation::{ConversationReport, build_conversation_report, handle_conversation_command};
pub use entities::handle_entities_command;
pub use sentiment::handle_sentiment_command;
