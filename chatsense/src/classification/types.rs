//! Classification record types.

use crate::entity_extraction::NamedEntity;
use crate::intent::Intent;
use serde::{Deserialize, Serialize};

/// Intent and entities recognised in a single message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageClassification {
    /// Caller-supplied message identifier, echoed back
    pub message_id: String,
    /// The input text, unmodified
    pub text: String,
    /// Winning intent
    pub intent: Intent,
    /// Fixed confidence of the winning rule
    pub confidence: f32,
    /// Extracted entities; absent when none were found or extraction was skipped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<NamedEntity>>,
}

impl MessageClassification {
    /// Zero-confidence `other` record used when classification fails.
    pub fn fallback(message_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            text: text.into(),
            intent: Intent::Other,
            confidence: 0.0,
            entities: None,
        }
    }

    /// Entities as a slice, empty when absent.
    pub fn entities(&self) -> &[NamedEntity] {
        self.entities.as_deref().unwrap_or_default()
    }
}

/// One element of a classification batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageInput {
    /// Caller-supplied message identifier
    #[serde(alias = "messageId")]
    pub id: String,
    /// Message text
    pub text: String,
}

impl MessageInput {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity_extraction::EntityType;

    #[test]
    fn test_fallback_record() {
        let fallback = MessageClassification::fallback("m1", "texto");
        assert_eq!(fallback.intent, Intent::Other);
        assert_eq!(fallback.confidence, 0.0);
        assert!(fallback.entities().is_empty());
    }

    #[test]
    fn test_wire_shape_skips_absent_entities() {
        let record = MessageClassification::fallback("m1", "oi");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["messageId"], "m1");
        assert_eq!(value["intent"], "other");
        assert!(value.get("entities").is_none());
    }

    #[test]
    fn test_wire_shape_with_entities() {
        let mut record = MessageClassification::fallback("m2", "a@b.com");
        record.entities = Some(vec![NamedEntity::new("a@b.com", EntityType::Email, 0, 7, 0.99)]);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["entities"][0]["type"], "email");
        assert_eq!(record.entities().len(), 1);
    }

    #[test]
    fn test_message_input_accepts_message_id_key() {
        let input: MessageInput =
            serde_json::from_str(r#"{"messageId": "7", "text": "oi"}"#).unwrap();
        assert_eq!(input, MessageInput::new("7", "oi"));
    }
}
