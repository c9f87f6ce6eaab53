//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{Result, models::*, validation};
use crate::intent::Intent;
use std::path::Path;

/// Builder for creating ChatsenseConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: ChatsenseConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: ChatsenseConfig::default(),
        }
    }

    /// Start from an existing configuration, e.g. one produced by [`super::ConfigLoader`].
    pub fn from_config(config: ChatsenseConfig) -> Self {
        Self { config }
    }

    /// Add custom positive lexicon words.
    pub fn with_positive_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .sentiment
            .extra_positive
            .extend(words.into_iter().map(Into::into));
        self
    }

    /// Add custom negative lexicon words.
    pub fn with_negative_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .sentiment
            .extra_negative
            .extend(words.into_iter().map(Into::into));
        self
    }

    /// Add extra trigger keywords to an intent rule.
    pub fn with_intent_keywords<I, S>(mut self, intent: Intent, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .intent
            .extra_keywords
            .entry(intent)
            .or_default()
            .extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Resolve overlapping entity spans and order them by position.
    pub fn with_overlap_resolution(mut self, enabled: bool) -> Self {
        self.config.entities.resolve_overlaps = enabled;
        self
    }

    /// Set the rolling window used for conversation sentiment.
    pub fn with_aggregation_window(mut self, window: usize) -> Self {
        self.config.aggregation.window = window;
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Configure logging to a file.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self.config.logging.stdout = false;
        self
    }

    /// Use default logging configuration (console output at Info level)
    pub fn with_default_logging(mut self) -> Self {
        self.config.logging.level = LogLevel::Info;
        self.config.logging.format = LogFormat::Json;
        self.config.logging.file = None;
        self.config.logging.stdout = true;
        self
    }

    /// Create a configuration for development.
    ///
    /// Debug-level, human readable logging and the built-in tables only.
    pub fn development() -> Self {
        Self::new()
            .with_log_level(LogLevel::Debug)
            .with_log_format(LogFormat::Pretty)
    }

    /// Create a configuration for automated testing.
    pub fn testing() -> Self {
        Self::new()
            .with_log_level(LogLevel::Warn)
            .with_log_format(LogFormat::Compact)
    }

    /// Create a production-ready configuration with JSON logging.
    pub fn production() -> Self {
        Self::new().with_default_logging()
    }

    /// Build the configuration, validating it in the process.
    pub fn build(self) -> Result<ChatsenseConfig> {
        validation::validate_config(&self.config)?;

        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
