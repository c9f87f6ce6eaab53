//! Overlap resolution for pattern matches.

use crate::entity_extraction::{EntityPostProcessor, EntityType, NamedEntity};

/// Drops overlapping entity spans, keeping the strongest match.
///
/// When two spans overlap, the entity whose type has the higher priority wins;
/// ties go to the longer span, then to the higher score. The output is sorted
/// by start offset.
#[derive(Debug, Default)]
pub struct OverlapResolver;

impl OverlapResolver {
    pub fn new() -> Self {
        Self
    }

    fn priority(entity_type: EntityType) -> u8 {
        match entity_type {
            EntityType::Email => 100,
            EntityType::Url => 90,
            EntityType::Date => 80,
            EntityType::Phone => 70,
            _ => 10,
        }
    }

    /// Whether `candidate` should replace `existing` when their spans overlap.
    fn beats(candidate: &NamedEntity, existing: &NamedEntity) -> bool {
        let candidate_key = (Self::priority(candidate.entity_type), candidate.len());
        let existing_key = (Self::priority(existing.entity_type), existing.len());

        candidate_key > existing_key
            || (candidate_key == existing_key && candidate.score > existing.score)
    }
}

impl EntityPostProcessor for OverlapResolver {
    fn process(&self, mut entities: Vec<NamedEntity>) -> Vec<NamedEntity> {
        entities.sort_by_key(|e| (e.start, e.end));

        let mut kept: Vec<NamedEntity> = Vec::with_capacity(entities.len());
        for entity in entities {
            let rivals: Vec<usize> = kept
                .iter()
                .enumerate()
                .filter(|(_, existing)| existing.overlaps(&entity))
                .map(|(idx, _)| idx)
                .collect();

            if rivals.iter().all(|&idx| Self::beats(&entity, &kept[idx])) {
                for idx in rivals.into_iter().rev() {
                    kept.remove(idx);
                }
                kept.push(entity);
            }
        }

        kept.sort_by_key(|e| e.start);
        kept
    }

    fn name(&self) -> &str {
        "overlap_resolver"
    }
}
