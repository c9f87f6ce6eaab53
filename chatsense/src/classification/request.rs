//! Validated input for the asynchronous classification entry point.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single message submitted for classification.
///
/// Both fields must be non-empty; validation runs before any analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    #[validate(length(min = 1))]
    pub message_id: String,
    #[validate(length(min = 1))]
    pub text: String,
}

impl ClassifyRequest {
    pub fn new(message_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            text: text.into(),
        }
    }
}
