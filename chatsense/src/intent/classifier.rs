//! Rule-based intent classifier.

use super::{FALLBACK_CONFIDENCE, Intent, IntentRule, Trigger, default_rules};
use crate::config::IntentConfig;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Outcome of classifying a single text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntentMatch {
    /// Winning intent
    pub intent: Intent,
    /// Fixed confidence of the winning rule
    pub confidence: f32,
}

impl IntentMatch {
    /// The fallback outcome when no rule fires.
    pub fn fallback() -> Self {
        Self {
            intent: Intent::Other,
            confidence: FALLBACK_CONFIDENCE,
        }
    }
}

/// Classifies text by evaluating ordered keyword rules; the first rule that
/// fires wins.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl IntentClassifier {
    /// Create a classifier with the built-in rules.
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Create a classifier with the built-in rules widened by configured keywords.
    pub fn from_config(config: &IntentConfig) -> Self {
        let mut rules = default_rules();

        for (intent, keywords) in &config.extra_keywords {
            let extra = keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .map(Trigger::Contains);

            match rules.iter_mut().find(|rule| rule.intent == *intent) {
                Some(rule) => rule.triggers.extend(extra),
                None => tracing::warn!(
                    intent = %intent,
                    "Ignoring extra keywords for an intent without a rule"
                ),
            }
        }

        Self { rules }
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    /// Classify a text. Never fails; unmatched text yields [`Intent::Other`].
    pub fn classify(&self, text: &str) -> IntentMatch {
        let lowered = text.trim().to_lowercase();

        let result = self
            .rules
            .iter()
            .find(|rule| rule.fires(&lowered))
            .map(|rule| IntentMatch {
                intent: rule.intent,
                confidence: rule.confidence,
            })
            .unwrap_or_else(IntentMatch::fallback);

        trace!(intent = %result.intent, "Classified intent");
        result
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}
