//! Configuration model definitions.
//!
//! This module contains the configuration structures for all Chatsense components.

use crate::intent::Intent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration structure for Chatsense.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChatsenseConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Sentiment lexicon configuration
    pub sentiment: SentimentConfig,

    /// Intent rule configuration
    pub intent: IntentConfig,

    /// Entity extraction configuration
    pub entities: EntityConfig,

    /// Conversation-level aggregation configuration
    pub aggregation: AggregationConfig,
}

/// Extra lexicon words merged into the built-in sentiment lexicons.
///
/// Words are matched as whole words, case-insensitively, exactly like the
/// built-in entries. A word may only appear in one of the two lists.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SentimentConfig {
    /// Additional positive keywords
    pub extra_positive: Vec<String>,

    /// Additional negative keywords
    pub extra_negative: Vec<String>,
}

/// Extra substring triggers appended to the built-in intent rules.
///
/// Rule precedence never changes; a keyword only widens the rule it is
/// attached to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct IntentConfig {
    /// Additional keywords per intent
    pub extra_keywords: BTreeMap<Intent, Vec<String>>,
}

/// Entity extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EntityConfig {
    /// Sort entities by position and drop overlapping spans.
    ///
    /// Off by default: the extractor reports every pattern type's matches
    /// independently, in pattern-type order.
    pub resolve_overlaps: bool,
}

/// Conversation-level aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AggregationConfig {
    /// Number of most recent messages fed to the rolling sentiment verdict
    pub window: usize,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self { window: 5 }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,

    /// Log format
    pub format: LogFormat,

    /// File to log to (if any)
    pub file: Option<PathBuf>,

    /// Whether to log to stdout
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Default,
            file: None,
            stdout: true,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level
    Trace,

    /// Debug level
    Debug,

    /// Info level
    Info,

    /// Warn level
    Warn,

    /// Error level
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default format
    Default,

    /// JSON format
    Json,

    /// Compact format
    Compact,

    /// Pretty format
    Pretty,
}
