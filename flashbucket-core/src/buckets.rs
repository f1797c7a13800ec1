use crate::{BucketMap, BucketSets, CoreError, Flashcard};
use std::collections::HashMap;

/// Highest bucket number present, or 0 for an empty map.
pub fn max_bucket(buckets: &BucketMap) -> u32 {
    buckets.keys().next_back().copied().unwrap_or(0)
}

/// Expands the sparse map into one set per bucket, `0..=max_bucket`.
/// Missing buckets come back empty; present ones are cloned.
pub fn to_bucket_sets(buckets: &BucketMap) -> BucketSets {
    (0..=max_bucket(buckets))
        .map(|b| buckets.get(&b).cloned().unwrap_or_default())
        .collect()
}

pub fn bucket_of(buckets: &BucketMap, card: &Flashcard) -> Option<u32> {
    buckets
        .iter()
        .find(|(_, cards)| cards.contains(card))
        .map(|(b, _)| *b)
}

/// Checks that no card is filed in two buckets. Nothing else calls this;
/// a map built only through [`crate::update`] never fails it.
pub fn validate_buckets(buckets: &BucketMap) -> Result<(), CoreError> {
    let mut seen: HashMap<&Flashcard, Vec<u32>> = HashMap::new();
    let mut order: Vec<&Flashcard> = Vec::new();
    for (b, cards) in buckets {
        for card in cards {
            let tiers = seen.entry(card).or_default();
            if tiers.is_empty() {
                order.push(card);
            }
            tiers.push(*b);
        }
    }

    if let Some(card) = order.into_iter().find(|c| seen[c].len() > 1) {
        return Err(CoreError::DuplicateCard {
            front: card.front.clone(),
            back: card.back.clone(),
            buckets: seen[card].clone(),
        });
    }
    Ok(())
}
