//! Synchronous analysis pipeline combining the three primitives.
//!
//! Every method here is pure: no I/O, no shared mutable state, and no failure
//! mode beyond construction. The asynchronous facade in [`crate::analyzer`]
//! wraps these calls with validation, concurrency and fault recovery.

use crate::classification::MessageClassification;
use crate::config::ChatsenseConfig;
use crate::entity_extraction::{EntityExtractor, NamedEntity, PatternEntityExtractor};
use crate::intent::IntentClassifier;
use crate::sentiment::{SentimentAnalysis, SentimentScorer};
use crate::Result;
use tracing::debug;

/// Sentiment scorer, intent classifier and entity extractor sharing one configuration.
#[derive(Debug)]
pub struct MessagePipeline {
    scorer: SentimentScorer,
    classifier: IntentClassifier,
    extractor: PatternEntityExtractor,
}

impl MessagePipeline {
    /// Create a pipeline with the built-in lexicons and rules.
    pub fn new() -> Self {
        Self {
            scorer: SentimentScorer::new(),
            classifier: IntentClassifier::new(),
            extractor: PatternEntityExtractor::new(),
        }
    }

    /// Create a pipeline with configured lexicons, keywords and entity options.
    ///
    /// Fails when the configured lexicons are malformed.
    pub fn from_config(config: &ChatsenseConfig) -> Result<Self> {
        Ok(Self {
            scorer: SentimentScorer::from_config(&config.sentiment)?,
            classifier: IntentClassifier::from_config(&config.intent),
            extractor: PatternEntityExtractor::from_config(&config.entities),
        })
    }

    pub fn scorer(&self) -> &SentimentScorer {
        &self.scorer
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    pub fn extractor(&self) -> &PatternEntityExtractor {
        &self.extractor
    }

    /// Score the sentiment of a text.
    pub fn analyze_sentiment(&self, text: &str) -> SentimentAnalysis {
        self.scorer.analyze(text)
    }

    /// Extract entities from a text.
    pub fn extract_entities(&self, text: &str) -> Vec<NamedEntity> {
        self.extractor.extract_entities(text)
    }

    /// Classify intent only. Intended for low-latency inline use.
    pub fn classify(&self, message_id: &str, text: &str) -> MessageClassification {
        let matched = self.classifier.classify(text);
        MessageClassification {
            message_id: message_id.to_string(),
            text: text.to_string(),
            intent: matched.intent,
            confidence: matched.confidence,
            entities: None,
        }
    }

    /// Classify intent and attach extracted entities, if any.
    pub fn classify_with_entities(&self, message_id: &str, text: &str) -> MessageClassification {
        let mut classification = self.classify(message_id, text);
        let entities = self.extract_entities(text);

        debug!(
            message_id,
            intent = %classification.intent,
            entity_count = entities.len(),
            "Classified message"
        );

        if !entities.is_empty() {
            classification.entities = Some(entities);
        }
        classification
    }
}

impl Default for MessagePipeline {
    fn default() -> Self {
        Self::new()
    }
}
