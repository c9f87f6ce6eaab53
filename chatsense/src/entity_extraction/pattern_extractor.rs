//! Pattern-based entity extractor using regular expressions.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use super::{EntityExtractor, EntityPostProcessor, EntityType, NamedEntity, OverlapResolver};
use crate::config::EntityConfig;

/// Fixed score for email matches.
pub const EMAIL_SCORE: f32 = 0.99;
/// Fixed score for phone matches.
pub const PHONE_SCORE: f32 = 0.95;
/// Fixed score for URL matches.
pub const URL_SCORE: f32 = 0.98;
/// Fixed score for date matches.
pub const DATE_SCORE: f32 = 0.90;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap();
    static ref PHONE_REGEX: Regex =
        Regex::new(r"(?:\+\d{1,3}[\s-]?)?(?:\(\d{2,3}\)\s?)?\d{4,5}[\s-]?\d{4}").unwrap();
    static ref URL_REGEX: Regex = Regex::new(r"https?://\S+").unwrap();
    static ref DATE_REGEX: Regex = Regex::new(r"\b\d{1,2}/\d{1,2}/\d{2,4}\b").unwrap();
}

/// Pattern passes in the order their entities are reported.
const PATTERNS: [EntityType; 4] = [
    EntityType::Email,
    EntityType::Phone,
    EntityType::Url,
    EntityType::Date,
];

/// Regex-based extractor for emails, phone numbers, URLs and dates.
///
/// Each pattern scans the text independently. By default the result lists all
/// email matches, then phones, then URLs, then dates, each group in document
/// order, and spans from different groups may overlap.
#[derive(Debug)]
pub struct PatternEntityExtractor {
    name: String,
    post_processors: Vec<Box<dyn EntityPostProcessor>>,
}

impl PatternEntityExtractor {
    /// Create an extractor with no post-processing.
    pub fn new() -> Self {
        Self {
            name: "pattern".to_string(),
            post_processors: Vec::new(),
        }
    }

    /// Create an extractor following the entity configuration.
    pub fn from_config(config: &EntityConfig) -> Self {
        let extractor = Self::new();
        if config.resolve_overlaps {
            extractor.with_post_processor(Box::new(OverlapResolver::new()))
        } else {
            extractor
        }
    }

    /// Append a post-processor applied after all pattern passes.
    pub fn with_post_processor(mut self, processor: Box<dyn EntityPostProcessor>) -> Self {
        self.post_processors.push(processor);
        self
    }

    /// Run a single pattern pass, reporting character offsets.
    fn scan(regex: &Regex, entity_type: EntityType, score: f32, content: &str) -> Vec<NamedEntity> {
        // matches are non-overlapping and ascending, so chars are counted once
        let mut byte_cursor = 0;
        let mut char_cursor = 0;

        regex
            .find_iter(content)
            .map(|m| {
                let start = char_cursor + content[byte_cursor..m.start()].chars().count();
                let end = start + m.as_str().chars().count();
                byte_cursor = m.end();
                char_cursor = end;
                NamedEntity::new(m.as_str(), entity_type, start, end, score)
            })
            .collect()
    }

    /// Extract email addresses from text.
    pub fn extract_emails(&self, content: &str) -> Vec<NamedEntity> {
        Self::scan(&EMAIL_REGEX, EntityType::Email, EMAIL_SCORE, content)
    }

    /// Extract phone numbers from text.
    pub fn extract_phones(&self, content: &str) -> Vec<NamedEntity> {
        Self::scan(&PHONE_REGEX, EntityType::Phone, PHONE_SCORE, content)
    }

    /// Extract URLs from text.
    pub fn extract_urls(&self, content: &str) -> Vec<NamedEntity> {
        Self::scan(&URL_REGEX, EntityType::Url, URL_SCORE, content)
    }

    /// Extract dates from text.
    pub fn extract_dates(&self, content: &str) -> Vec<NamedEntity> {
        Self::scan(&DATE_REGEX, EntityType::Date, DATE_SCORE, content)
    }
}

impl EntityExtractor for PatternEntityExtractor {
    fn extract_entities(&self, content: &str) -> Vec<NamedEntity> {
        let mut entities = Vec::new();

        for entity_type in PATTERNS {
            let found = match entity_type {
                EntityType::Email => self.extract_emails(content),
                EntityType::Phone => self.extract_phones(content),
                EntityType::Url => self.extract_urls(content),
                EntityType::Date => self.extract_dates(content),
                _ => continue,
            };
            trace!(entity_type = %entity_type, count = found.len(), "Pattern pass finished");
            entities.extend(found);
        }

        self.post_processors
            .iter()
            .fold(entities, |entities, processor| processor.process(entities))
    }

    fn supported_types(&self) -> Vec<EntityType> {
        PATTERNS.to_vec()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Default for PatternEntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}
