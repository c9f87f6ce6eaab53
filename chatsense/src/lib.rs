//! # Chatsense
//!
//! Rule-based message understanding for customer conversations: sentiment
//! scoring, intent classification and structured entity extraction, plus
//! conversation-level sentiment aggregation.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatsense::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let analyzer = MessageAnalyzer::new();
//!
//!     // Direct, synchronous calls
//!     let sentiment = analyzer.analyze_sentiment("Foi um excelente atendimento, gostei muito");
//!     assert_eq!(sentiment.sentiment, Sentiment::Positive);
//!
//!     // Validated, asynchronous classification with entities
//!     let request = ClassifyRequest::new("m1", "Meu email é joao@exemplo.com, podem me ligar?");
//!     let record = analyzer.classify_message(&request).await?;
//!     assert_eq!(record.intent, Intent::Question);
//!
//!     // Rolling verdict over the last messages of a conversation
//!     let verdict = analyzer.average_sentiment(&["Oi", "Tive um problema"]).await;
//!     println!("{}", verdict.dominant_sentiment);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Primitives**: [`sentiment::SentimentScorer`], [`intent::IntentClassifier`]
//!   and [`entity_extraction::PatternEntityExtractor`] are pure and synchronous.
//! - **Pipeline**: [`pipeline::MessagePipeline`] combines them under one configuration.
//! - **Facade**: [`analyzer::MessageAnalyzer`] adds validation, concurrent batches
//!   and fallback records, delegating asynchronous work to an
//!   [`provider::AnalysisProvider`].

pub mod analyzer;
pub mod classification;
pub mod config;
pub mod entity_extraction;
pub mod intent;
pub mod logging;
pub mod pipeline;
pub mod provider;
pub mod sentiment;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::analyzer::MessageAnalyzer;
    pub use crate::{init, init_with_defaults};

    pub use crate::config::{ChatsenseConfig, ConfigBuilder, ConfigLoader, LogFormat, LogLevel};

    pub use crate::classification::{
        ClassifyRequest, MessageClassification, MessageInput, entities_by_type,
        intent_distribution,
    };
    pub use crate::entity_extraction::{EntityExtractor, EntityType, NamedEntity};
    pub use crate::intent::Intent;
    pub use crate::provider::{AnalysisProvider, RuleBasedProvider};
    pub use crate::sentiment::{AggregateSentiment, Sentiment, SentimentAnalysis};

    pub use crate::{ChatsenseError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for Chatsense operations
#[derive(Debug, thiserror::Error)]
pub enum ChatsenseError {
    /// Input rejected at a validated entry point; no analysis ran
    #[error("Invalid input ({}): {message}", .fields.join(", "))]
    InvalidInput {
        fields: Vec<String>,
        message: String,
    },

    /// Unexpected failure while analyzing
    #[error("Processing error: {0}")]
    Processing(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// Other unclassified errors
    #[error("{0}")]
    Other(String),
}

impl From<crate::config::ConfigError> for ChatsenseError {
    fn from(err: crate::config::ConfigError) -> Self {
        ChatsenseError::Configuration(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ChatsenseError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = err
            .field_errors()
            .keys()
            .map(|field| camel_case(field))
            .collect();
        fields.sort();

        ChatsenseError::InvalidInput {
            message: format!("Validation errors: {}", err),
            fields,
        }
    }
}

// Field names are reported with their wire spelling.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Result type for Chatsense operations
pub type Result<T> = std::result::Result<T, ChatsenseError>;

/// Initialize Chatsense with configuration discovered from the environment
///
/// Loads default configuration files and `CHATSENSE_` environment variables,
/// then behaves like [`init`].
pub fn init_with_defaults() -> Result<analyzer::MessageAnalyzer> {
    let config = config::ConfigLoader::new()
        .load_default_files()
        .load_env()
        .extract()?;
    init(&config)
}

/// Initialize Chatsense with the provided configuration
///
/// Installs the global logging subscriber (an existing one is kept) and
/// builds a [`analyzer::MessageAnalyzer`].
///
/// # Examples
///
/// ```rust
/// use chatsense::prelude::*;
///
/// fn example() -> Result<()> {
///     let config = ConfigBuilder::testing()
///         .with_negative_words(["lento demais"])
///         .build()?;
///
///     let analyzer = init(&config)?;
///     let analysis = analyzer.analyze_sentiment("O app ficou lento demais");
///     assert_eq!(analysis.sentiment, Sentiment::Negative);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub fn init(config: &config::ChatsenseConfig) -> Result<analyzer::MessageAnalyzer> {
    logging::init(&config.logging)?;
    analyzer::MessageAnalyzer::from_config(config)
}
