//! Entity types and structures for entity extraction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter;
use std::ops::Range;
use std::str::FromStr;

/// Types of entities that can be extracted from text.
///
/// Only the structured types are produced by [`super::PatternEntityExtractor`];
/// the named-entity types are reserved for other recognizers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    /// Email addresses (e.g., "joao@exemplo.com")
    Email,
    /// Phone numbers (e.g., "(11) 98888-7777")
    Phone,
    /// URLs (e.g., "https://exemplo.com")
    Url,
    /// Slash-separated dates (e.g., "01/12/2024")
    Date,
    /// Person names
    Person,
    /// Organizations
    Organization,
    /// Locations
    Location,
    /// Products
    Product,
    /// Anything else
    Other,
}

impl EntityType {
    /// Get a string representation of the entity type.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Email => "email",
            EntityType::Phone => "phone",
            EntityType::Url => "url",
            EntityType::Date => "date",
            EntityType::Person => "person",
            EntityType::Organization => "organization",
            EntityType::Location => "location",
            EntityType::Product => "product",
            EntityType::Other => "other",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" => Ok(EntityType::Email),
            "phone" => Ok(EntityType::Phone),
            "url" => Ok(EntityType::Url),
            "date" => Ok(EntityType::Date),
            "person" => Ok(EntityType::Person),
            "organization" => Ok(EntityType::Organization),
            "location" => Ok(EntityType::Location),
            "product" => Ok(EntityType::Product),
            "other" => Ok(EntityType::Other),
            _ => Err(format!("Invalid entity type: {}", s)),
        }
    }
}

/// An entity extracted from text content.
///
/// `start`/`end` are zero-based character (Unicode scalar) offsets into the
/// source text, `end` exclusive. Use [`NamedEntity::byte_span`] to slice the
/// source string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedEntity {
    /// Exact matched substring
    pub text: String,
    /// The type of entity detected
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    /// Starting character offset in the original text
    pub start: usize,
    /// Ending character offset in the original text (exclusive)
    pub end: usize,
    /// Fixed confidence of the pattern that produced the entity
    pub score: f32,
}

impl NamedEntity {
    /// Create a new named entity.
    pub fn new(
        text: impl Into<String>,
        entity_type: EntityType,
        start: usize,
        end: usize,
        score: f32,
    ) -> Self {
        Self {
            text: text.into(),
            entity_type,
            start,
            end,
            score,
        }
    }

    /// Get the length of the entity in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the entity text is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether two spans share at least one character.
    pub fn overlaps(&self, other: &NamedEntity) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Convert the character span into a UTF-8 byte range of `source`.
    ///
    /// `source` must be the text the entity was extracted from; offsets past
    /// its end clamp to `source.len()`.
    pub fn byte_span(&self, source: &str) -> Range<usize> {
        let mut offsets = source
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(iter::once(source.len()));

        let start = offsets.nth(self.start).unwrap_or(source.len());
        let end = match self.end.checked_sub(self.start + 1) {
            Some(rest) => offsets.nth(rest).unwrap_or(source.len()),
            None => start,
        };
        start..end
    }

    /// Get a formatted string representation of the entity.
    pub fn format(&self) -> String {
        format!(
            "{} [{}] ({}..{}, score: {:.2})",
            self.text, self.entity_type, self.start, self.end, self.score
        )
    }
}
