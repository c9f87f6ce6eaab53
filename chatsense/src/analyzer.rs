//! Caller-facing analysis facade.
//!
//! [`MessageAnalyzer`] offers two kinds of entry points over the same
//! lexicons and rules:
//!
//! - direct synchronous calls (`analyze_sentiment`, `classify`,
//!   `extract_entities`) for low-latency inline use;
//! - asynchronous calls that validate input, fan batches out concurrently
//!   and recover from processing faults with fallback records.

use crate::classification::{ClassifyRequest, MessageClassification, MessageInput};
use crate::config::ChatsenseConfig;
use crate::entity_extraction::NamedEntity;
use crate::pipeline::MessagePipeline;
use crate::provider::{AnalysisProvider, RuleBasedProvider};
use crate::sentiment::{AggregateSentiment, SentimentAnalysis, aggregate};
use crate::Result;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use validator::Validate;

/// Sentiment, intent and entity analysis for conversation messages.
#[derive(Debug, Clone)]
pub struct MessageAnalyzer {
    pipeline: Arc<MessagePipeline>,
    provider: Arc<dyn AnalysisProvider>,
}

impl MessageAnalyzer {
    /// Create an analyzer with the built-in lexicons and rules.
    pub fn new() -> Self {
        Self::with_pipeline(MessagePipeline::new())
    }

    /// Create an analyzer from configuration.
    ///
    /// Fails when the configured lexicons are malformed.
    pub fn from_config(config: &ChatsenseConfig) -> Result<Self> {
        Ok(Self::with_pipeline(MessagePipeline::from_config(config)?))
    }

    fn with_pipeline(pipeline: MessagePipeline) -> Self {
        let pipeline = Arc::new(pipeline);
        let provider = Arc::new(RuleBasedProvider::new(Arc::clone(&pipeline)));
        Self { pipeline, provider }
    }

    /// Replace the provider used by the asynchronous entry points.
    ///
    /// The synchronous calls keep using the local pipeline.
    pub fn with_provider(mut self, provider: Arc<dyn AnalysisProvider>) -> Self {
        self.provider = provider;
        self
    }

    pub fn pipeline(&self) -> &MessagePipeline {
        &self.pipeline
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Score the sentiment of a single text.
    pub fn analyze_sentiment(&self, text: &str) -> SentimentAnalysis {
        self.pipeline.analyze_sentiment(text)
    }

    /// Classify intent without extracting entities.
    pub fn classify(&self, message_id: &str, text: &str) -> MessageClassification {
        self.pipeline.classify(message_id, text)
    }

    /// Extract entities from a single text.
    pub fn extract_entities(&self, text: &str) -> Vec<NamedEntity> {
        self.pipeline.extract_entities(text)
    }

    /// Validate and classify one message, attaching its entities.
    ///
    /// An empty `message_id` or `text` yields [`crate::ChatsenseError::InvalidInput`]
    /// before any analysis runs. A processing fault is logged and replaced by
    /// [`MessageClassification::fallback`].
    #[instrument(skip_all, fields(message_id = %request.message_id))]
    pub async fn classify_message(
        &self,
        request: &ClassifyRequest,
    ) -> Result<MessageClassification> {
        request.validate()?;
        Ok(self
            .classify_or_fallback(&request.message_id, &request.text)
            .await)
    }

    /// Classify a batch of messages concurrently.
    ///
    /// Returns one record per input, in input order. Elements that fail, or
    /// that have an empty id or text, get a fallback record.
    pub async fn classify_multiple_messages(
        &self,
        messages: &[MessageInput],
    ) -> Vec<MessageClassification> {
        debug!(
            batch_size = messages.len(),
            provider = self.provider.name(),
            "Classifying message batch"
        );

        join_all(messages.iter().map(|message| async move {
            if message.id.is_empty() || message.text.is_empty() {
                warn!(message_id = %message.id, "Skipping batch element with empty id or text");
                return MessageClassification::fallback(&message.id, &message.text);
            }
            self.classify_or_fallback(&message.id, &message.text).await
        }))
        .await
    }

    /// Score a batch of texts concurrently, in input order.
    ///
    /// Faulted elements get [`SentimentAnalysis::fallback`].
    pub async fn analyze_texts<S: AsRef<str>>(&self, texts: &[S]) -> Vec<SentimentAnalysis> {
        debug!(
            batch_size = texts.len(),
            provider = self.provider.name(),
            "Analyzing text batch"
        );

        join_all(texts.iter().map(|text| async move {
            let text = text.as_ref();
            match self.provider.analyze_sentiment(text).await {
                Ok(analysis) => analysis,
                Err(e) => {
                    warn!(error = %e, "Sentiment analysis failed; using neutral fallback");
                    SentimentAnalysis::fallback(text)
                }
            }
        }))
        .await
    }

    /// Average the sentiment of a batch of texts.
    ///
    /// The window policy (e.g. "last five messages") belongs to the caller.
    pub async fn average_sentiment<S: AsRef<str>>(&self, texts: &[S]) -> AggregateSentiment {
        if texts.is_empty() {
            return AggregateSentiment::empty();
        }

        let results = self.analyze_texts(texts).await;
        let verdict = aggregate(&results);
        debug!(
            count = results.len(),
            average_score = verdict.average_score,
            dominant = %verdict.dominant_sentiment,
            "Aggregated sentiment"
        );
        verdict
    }

    async fn classify_or_fallback(&self, message_id: &str, text: &str) -> MessageClassification {
        match self.provider.classify_message(message_id, text).await {
            Ok(classification) => classification,
            Err(e) => {
                warn!(
                    message_id,
                    provider = self.provider.name(),
                    error = %e,
                    "Classification failed; using fallback"
                );
                MessageClassification::fallback(message_id, text)
            }
        }
    }
}

impl Default for MessageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
