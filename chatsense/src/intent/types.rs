//! Intent labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Communicative purpose of a message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Asks something ("Como faço para cancelar?")
    Question,
    /// Reports a problem or complains
    Complaint,
    /// Gives an opinion or suggestion
    Feedback,
    /// Asks for an action to be performed
    Request,
    /// Opens the conversation
    Greeting,
    /// Closes the conversation
    Goodbye,
    /// Thanks the agent
    Gratitude,
    /// Nothing else matched
    Other,
}

impl Intent {
    /// Every intent, in rule precedence order with the fallback last.
    pub const ALL: [Intent; 8] = [
        Intent::Question,
        Intent::Complaint,
        Intent::Feedback,
        Intent::Request,
        Intent::Greeting,
        Intent::Goodbye,
        Intent::Gratitude,
        Intent::Other,
    ];

    /// Get a string representation of the intent.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Question => "question",
            Intent::Complaint => "complaint",
            Intent::Feedback => "feedback",
            Intent::Request => "request",
            Intent::Greeting => "greeting",
            Intent::Goodbye => "goodbye",
            Intent::Gratitude => "gratitude",
            Intent::Other => "other",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Intent::ALL
            .into_iter()
            .find(|intent| intent.as_str() == lowered)
            .ok_or_else(|| format!("Invalid intent: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_labels_round_trip() {
        for intent in Intent::ALL {
            assert_eq!(intent.as_str().parse::<Intent>().unwrap(), intent);
        }
        assert_eq!(" Greeting ".parse::<Intent>().unwrap(), Intent::Greeting);
        assert!("smalltalk".parse::<Intent>().is_err());
    }

    #[test]
    fn test_intent_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Intent::Gratitude).unwrap(),
            "\"gratitude\""
        );
    }
}
