use chatsense::ChatsenseError;
use chatsense::classification::MessageInput;
use chatsense::entity_extraction::EntityType;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

pub fn parse_entity_type(type_str: &str) -> chatsense::Result<EntityType> {
    match type_str.parse::<EntityType>().map_err(ChatsenseError::Other)? {
        t @ (EntityType::Email | EntityType::Phone | EntityType::Url | EntityType::Date) => Ok(t),
        other => Err(ChatsenseError::Other(format!(
            "Entity type '{}' is not produced by the pattern extractor",
            other
        ))),
    }
}

/// Join positional words into one text, or read stdin for none or "-".
pub fn resolve_text(parts: &[String]) -> chatsense::Result<String> {
    if parts.is_empty() || (parts.len() == 1 && parts[0] == "-") {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .map_err(|e| ChatsenseError::Other(format!("Failed to read stdin: {}", e)))?;
        return Ok(input.trim_end_matches(['\n', '\r']).to_string());
    }
    Ok(parts.join(" "))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MessageRecord {
    Text(String),
    Message(MessageInput),
}

/// Load a conversation from a JSON array.
///
/// Elements are `{"id", "text"}` objects (`messageId` is accepted for `id`)
/// or plain strings, which get their 1-based position as ID.
pub fn load_messages(path: &Path) -> chatsense::Result<Vec<MessageInput>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ChatsenseError::Other(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let records: Vec<MessageRecord> = serde_json::from_str(&content).map_err(|e| {
        ChatsenseError::Other(format!("Invalid message file {}: {}", path.display(), e))
    })?;

    Ok(records
        .into_iter()
        .enumerate()
        .map(|(i, record)| match record {
            MessageRecord::Text(text) => MessageInput::new((i + 1).to_string(), text),
            MessageRecord::Message(message) => message,
        })
        .collect())
}

/// The last `window` elements (all of them when shorter).
pub fn last_window<T>(items: &[T], window: usize) -> &[T] {
    &items[items.len().saturating_sub(window)..]
}
