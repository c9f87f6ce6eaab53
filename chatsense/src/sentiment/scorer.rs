//! Lexicon sentiment scorer.

use super::{Lexicon, Sentiment, SentimentAnalysis};
use crate::config::SentimentConfig;
use crate::{ChatsenseError, Result};

/// Keyword hits needed for full confidence.
pub const CONFIDENCE_NORMALIZATION: f32 = 10.0;

/// Scores text polarity by counting positive and negative lexicon hits.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    positive: Lexicon,
    negative: Lexicon,
}

impl SentimentScorer {
    /// Create a scorer with the built-in lexicons.
    pub fn new() -> Self {
        Self {
            positive: Lexicon::positive(),
            negative: Lexicon::negative(),
        }
    }

    /// Create a scorer from explicit lexicons.
    pub fn with_lexicons(positive: Lexicon, negative: Lexicon) -> Result<Self> {
        if let Some(word) = positive.words().iter().find(|w| negative.contains(w)) {
            return Err(ChatsenseError::Configuration(format!(
                "Keyword '{}' appears in both lexicons",
                word
            )));
        }
        Ok(Self { positive, negative })
    }

    /// Create a scorer with the built-in lexicons extended by configured words.
    pub fn from_config(config: &SentimentConfig) -> Result<Self> {
        let positive = Lexicon::positive().extended(&config.extra_positive)?;
        let negative = Lexicon::negative().extended(&config.extra_negative)?;
        Self::with_lexicons(positive, negative)
    }

    /// Score a single text. Pure and infallible.
    ///
    /// `score = (pos - neg) / (pos + neg)`, or 0 with no hits;
    /// `confidence = min(1, hits / CONFIDENCE_NORMALIZATION)`.
    pub fn analyze(&self, text: &str) -> SentimentAnalysis {
        let lowered = text.to_lowercase();
        let positive_hits = self.positive.count_matches(&lowered);
        let negative_hits = self.negative.count_matches(&lowered);
        let total = positive_hits + negative_hits;

        let score = if total == 0 {
            0.0
        } else {
            (positive_hits as f32 - negative_hits as f32) / total as f32
        };

        let confidence = (total as f32 / CONFIDENCE_NORMALIZATION).min(1.0);

        SentimentAnalysis {
            text: text.to_string(),
            sentiment: Sentiment::from_score(score),
            score,
            confidence,
        }
    }

    /// The positive lexicon.
    pub fn positive_lexicon(&self) -> &Lexicon {
        &self.positive
    }

    /// The negative lexicon.
    pub fn negative_lexicon(&self) -> &Lexicon {
        &self.negative
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_scenario() {
        let result = SentimentScorer::new().analyze("Foi um excelente atendimento, gostei muito");
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert!(result.score > 0.2);
        assert_eq!(result.text, "Foi um excelente atendimento, gostei muito");
    }

    #[test]
    fn test_negative_scenario() {
        let result = SentimentScorer::new().analyze("Isso é um problema terrível");
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert!(result.score < -0.2);
    }

    #[test]
    fn test_zero_evidence_is_neutral() {
        let scorer = SentimentScorer::new();
        for text in ["", "Meu pedido é o 1234", "   "] {
            let result = scorer.analyze(text);
            assert_eq!(result.score, 0.0);
            assert_eq!(result.confidence, 0.0);
            assert_eq!(result.sentiment, Sentiment::Neutral);
        }
    }

    #[test]
    fn test_request_verbs_carry_no_polarity() {
        let result = SentimentScorer::new().analyze("Como faço para cancelar?");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_mixed_evidence() {
        // one positive, one negative
        let result = SentimentScorer::new().analyze("O app é ótimo mas está lento");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert!((result.confidence - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_case_insensitive_and_original_text_preserved() {
        let result = SentimentScorer::new().analyze("EXCELENTE");
        assert_eq!(result.score, 1.0);
        assert_eq!(result.text, "EXCELENTE");
    }

    #[test]
    fn test_confidence_saturates() {
        let text = "ótimo ".repeat(25);
        let result = SentimentScorer::new().analyze(&text);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_bounds_hold_for_assorted_inputs() {
        let scorer = SentimentScorer::new();
        let inputs = [
            "péssimo péssimo ótimo",
            "ruim ruim ruim ruim ruim ruim ruim ruim ruim ruim ruim ruim",
            "🙂 emoji only",
            "Obrigado! Resolvido rápido, mas houve atraso.",
        ];
        for text in inputs {
            let result = scorer.analyze(text);
            assert!((-1.0..=1.0).contains(&result.score), "{text}");
            assert!((0.0..=1.0).contains(&result.confidence), "{text}");
            assert_eq!(result.sentiment, Sentiment::from_score(result.score));
        }
    }

    #[test]
    fn test_idempotent() {
        let scorer = SentimentScorer::new();
        let text = "Atendimento excelente, mas a entrega teve atraso";
        assert_eq!(scorer.analyze(text), scorer.analyze(text));
    }

    #[test]
    fn test_custom_lexicon() {
        let config = SentimentConfig {
            extra_positive: vec!["sensacional".to_string()],
            extra_negative: vec![],
        };
        let scorer = SentimentScorer::from_config(&config).unwrap();
        assert_eq!(scorer.analyze("sensacional").sentiment, Sentiment::Positive);

        let conflicting = SentimentConfig {
            extra_positive: vec!["lento".to_string()],
            extra_negative: vec![],
        };
        assert!(SentimentScorer::from_config(&conflicting).is_err());
    }
}
