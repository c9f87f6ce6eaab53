//! Reduction of per-text sentiment into a batch verdict.

use super::{AggregateSentiment, Sentiment, SentimentAnalysis};

/// Fold per-text results into one averaged verdict.
///
/// An empty slice yields [`AggregateSentiment::empty`]. The dominant sentiment
/// is derived from the average score with the same thresholds as a single
/// text.
pub fn aggregate(results: &[SentimentAnalysis]) -> AggregateSentiment {
    if results.is_empty() {
        return AggregateSentiment::empty();
    }

    let count = results.len() as f32;
    let average_score = (results.iter().map(|r| r.score).sum::<f32>() / count).clamp(-1.0, 1.0);
    let confidence = (results.iter().map(|r| r.confidence).sum::<f32>() / count).clamp(0.0, 1.0);

    AggregateSentiment {
        average_score,
        dominant_sentiment: Sentiment::from_score(average_score),
        confidence,
    }
}
