//! Traits for entity extraction functionality.

use super::{EntityType, NamedEntity};

/// Trait for extracting entities from text content.
///
/// Implementations are pure: the same input always yields the same entities.
pub trait EntityExtractor: Send + Sync + std::fmt::Debug {
    /// Extract entities from the given text content.
    fn extract_entities(&self, content: &str) -> Vec<NamedEntity>;

    /// Get the entity types supported by this extractor.
    fn supported_types(&self) -> Vec<EntityType>;

    /// Get the name of this extractor for identification purposes.
    fn name(&self) -> &str;
}

/// Trait for post-processing a list of extracted entities.
pub trait EntityPostProcessor: Send + Sync + std::fmt::Debug {
    /// Process a list of entities
    fn process(&self, entities: Vec<NamedEntity>) -> Vec<NamedEntity>;

    /// Get the name of this post-processor
    fn name(&self) -> &str;
}
