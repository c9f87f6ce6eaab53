//! Batch-level views over classification records.

use super::MessageClassification;
use crate::entity_extraction::{EntityType, NamedEntity};
use crate::intent::Intent;
use std::collections::BTreeMap;

/// Count records per intent. Every intent is present, zero when unseen.
pub fn intent_distribution(records: &[MessageClassification]) -> BTreeMap<Intent, usize> {
    let mut distribution: BTreeMap<Intent, usize> =
        Intent::ALL.iter().map(|intent| (*intent, 0)).collect();

    for record in records {
        *distribution.entry(record.intent).or_default() += 1;
    }
    distribution
}

/// Collect every entity of one type across records, in record order.
pub fn entities_by_type(
    records: &[MessageClassification],
    entity_type: EntityType,
) -> Vec<NamedEntity> {
    records
        .iter()
        .flat_map(|record| record.entities())
        .filter(|entity| entity.entity_type == entity_type)
        .cloned()
        .collect()
}
