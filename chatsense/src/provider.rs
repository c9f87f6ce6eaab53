//! Asynchronous analysis providers.
//!
//! [`AnalysisProvider`] is the seam between the facade and whatever performs
//! the analysis. The built-in [`RuleBasedProvider`] runs the local lexicon,
//! rule and pattern primitives; an implementation backed by a remote AI
//! service can be substituted without changing any caller.
//!
//! # Examples
//!
//! ```no_run
//! use async_trait::async_trait;
//! use chatsense::classification::MessageClassification;
//! use chatsense::provider::AnalysisProvider;
//! use chatsense::sentiment::SentimentAnalysis;
//! use chatsense::Result;
//!
//! #[derive(Debug)]
//! struct RemoteProvider;
//!
//! #[async_trait]
//! impl AnalysisProvider for RemoteProvider {
//!     async fn analyze_sentiment(&self, text: &str) -> Result<SentimentAnalysis> {
//!         Ok(SentimentAnalysis::fallback(text))
//!     }
//!
//!     async fn classify_message(&self, id: &str, text: &str) -> Result<MessageClassification> {
//!         Ok(MessageClassification::fallback(id, text))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "remote"
//!     }
//! }
//! ```

use crate::classification::MessageClassification;
use crate::pipeline::MessagePipeline;
use crate::sentiment::SentimentAnalysis;
use crate::{ChatsenseError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Performs sentiment analysis and message classification.
///
/// Errors returned here are processing faults; the facade logs them and
/// substitutes fallback records.
#[async_trait]
pub trait AnalysisProvider: Send + Sync + std::fmt::Debug {
    /// Score the sentiment of a text.
    async fn analyze_sentiment(&self, text: &str) -> Result<SentimentAnalysis>;

    /// Classify a message and attach its entities.
    async fn classify_message(
        &self,
        message_id: &str,
        text: &str,
    ) -> Result<MessageClassification>;

    /// Name used in logs.
    fn name(&self) -> &str;
}

/// Provider backed by the local [`MessagePipeline`].
///
/// Each call runs on the blocking pool, so a panic inside a primitive is
/// reported as a processing fault instead of unwinding into the caller.
#[derive(Debug, Clone)]
pub struct RuleBasedProvider {
    pipeline: Arc<MessagePipeline>,
}

impl RuleBasedProvider {
    pub fn new(pipeline: Arc<MessagePipeline>) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &Arc<MessagePipeline> {
        &self.pipeline
    }
}

impl Default for RuleBasedProvider {
    fn default() -> Self {
        Self::new(Arc::new(MessagePipeline::new()))
    }
}

#[async_trait]
impl AnalysisProvider for RuleBasedProvider {
    async fn analyze_sentiment(&self, text: &str) -> Result<SentimentAnalysis> {
        tokio::task::spawn_blocking({
            let pipeline = Arc::clone(&self.pipeline);
            let text = text.to_string();
            move || pipeline.analyze_sentiment(&text)
        })
        .await
        .map_err(|e| ChatsenseError::Processing(format!("Sentiment task failed: {}", e)))
    }

    async fn classify_message(
        &self,
        message_id: &str,
        text: &str,
    ) -> Result<MessageClassification> {
        tokio::task::spawn_blocking({
            let pipeline = Arc::clone(&self.pipeline);
            let message_id = message_id.to_string();
            let text = text.to_string();
            move || pipeline.classify_with_entities(&message_id, &text)
        })
        .await
        .map_err(|e| ChatsenseError::Processing(format!("Classification task failed: {}", e)))
    }

    fn name(&self) -> &str {
        "rule-based"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::Intent;
    use crate::sentiment::Sentiment;

    #[tokio::test]
    async fn test_rule_based_sentiment() {
        let provider = RuleBasedProvider::default();
        let analysis = provider
            .analyze_sentiment("Excelente atendimento, gostei muito")
            .await
            .unwrap();

        assert_eq!(analysis.sentiment, Sentiment::Positive);
        assert_eq!(analysis.score, 1.0);
    }

    #[tokio::test]
    async fn test_rule_based_classification_matches_pipeline() {
        let provider = RuleBasedProvider::default();
        let text = "Como faço para cancelar?";

        let from_provider = provider.classify_message("m1", text).await.unwrap();
        let direct = provider.pipeline().classify_with_entities("m1", text);

        assert_eq!(from_provider, direct);
        assert_eq!(from_provider.intent, Intent::Question);
    }
}
