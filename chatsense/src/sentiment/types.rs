//! Sentiment value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores strictly above this are positive, strictly below its negation negative.
pub const POLARITY_THRESHOLD: f32 = 0.2;

/// Emotional polarity of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Score above the polarity threshold
    Positive,
    /// Score within the polarity threshold
    Neutral,
    /// Score below the negated polarity threshold
    Negative,
}

impl Sentiment {
    /// Derive the label from a score. Used for single texts and aggregates alike.
    pub fn from_score(score: f32) -> Self {
        if score > POLARITY_THRESHOLD {
            Sentiment::Positive
        } else if score < -POLARITY_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Get a string representation of the sentiment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment of a single text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    /// The input text, unmodified
    pub text: String,
    /// Polarity label derived from `score`
    pub sentiment: Sentiment,
    /// Polarity and strength in `[-1.0, 1.0]`
    pub score: f32,
    /// Amount of lexical evidence in `[0.0, 1.0]`
    pub confidence: f32,
}

impl SentimentAnalysis {
    /// Neutral, zero-confidence record used when analysis fails.
    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sentiment: Sentiment::Neutral,
            score: 0.0,
            confidence: 0.0,
        }
    }
}

/// Sentiment averaged over a batch of texts. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSentiment {
    /// Mean of the per-text scores
    pub average_score: f32,
    /// Label derived from `average_score` with the single-text thresholds
    pub dominant_sentiment: Sentiment,
    /// Mean of the per-text confidences
    pub confidence: f32,
}

impl AggregateSentiment {
    /// The verdict for an empty batch.
    pub fn empty() -> Self {
        Self {
            average_score: 0.0,
            dominant_sentiment: Sentiment::Neutral,
            confidence: 0.0,
        }
    }
}
