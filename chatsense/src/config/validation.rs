//! Configuration validation utilities.
//!
//! This module provides validation functions for configuration values.

use super::ConfigError;
use super::models::*;
use crate::intent::Intent;
use std::collections::HashSet;

/// Validate the entire configuration.
pub fn validate_config(config: &ChatsenseConfig) -> Result<(), ConfigError> {
    validate_sentiment_config(&config.sentiment)?;
    validate_intent_config(&config.intent)?;
    validate_aggregation_config(&config.aggregation)?;

    Ok(())
}

/// Validate custom lexicon entries.
fn validate_sentiment_config(config: &SentimentConfig) -> Result<(), ConfigError> {
    for (name, words) in [
        ("extra_positive", &config.extra_positive),
        ("extra_negative", &config.extra_negative),
    ] {
        if words.iter().any(|w| w.trim().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "sentiment.{} contains an empty keyword",
                name
            )));
        }
    }

    let positive: HashSet<String> = config
        .extra_positive
        .iter()
        .map(|w| w.trim().to_lowercase())
        .collect();

    if let Some(word) = config
        .extra_negative
        .iter()
        .map(|w| w.trim().to_lowercase())
        .find(|w| positive.contains(w))
    {
        return Err(ConfigError::ValidationError(format!(
            "Keyword '{}' cannot be both positive and negative",
            word
        )));
    }

    Ok(())
}

/// Validate custom intent keywords.
fn validate_intent_config(config: &IntentConfig) -> Result<(), ConfigError> {
    for (intent, keywords) in &config.extra_keywords {
        if *intent == Intent::Other && !keywords.is_empty() {
            return Err(ConfigError::ValidationError(
                "intent.extra_keywords.other is not allowed: the fallback intent has no rule"
                    .to_string(),
            ));
        }
        if keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "intent.extra_keywords.{} contains an empty keyword",
                intent
            )));
        }
    }

    Ok(())
}

fn validate_aggregation_config(config: &AggregationConfig) -> Result<(), ConfigError> {
    if config.window == 0 {
        return Err(ConfigError::ValidationError(
            "aggregation.window must be greater than 0".to_string(),
        ));
    }

    Ok(())
}
