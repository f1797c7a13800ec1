use crate::{bucket_of, AnswerDifficulty, BucketMap, Flashcard, PracticeRecord};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

pub struct ScheduleOutcome {
    pub buckets: BucketMap,
    pub record: PracticeRecord,
}

/// Bucket 0 is due every day; bucket `t` every `2^t` days. Day 0 is due
/// for every bucket.
pub fn is_due(bucket: usize, day: u64) -> bool {
    if bucket == 0 {
        return true;
    }
    match u32::try_from(bucket).ok().and_then(|t| 1u64.checked_shl(t)) {
        Some(period) => day % period == 0,
        None => day == 0,
    }
}

/// Cards due on `day`, merged across buckets.
pub fn practice(bucket_sets: &[HashSet<Flashcard>], day: u64) -> HashSet<Flashcard> {
    let mut due = HashSet::new();
    for (bucket, cards) in bucket_sets.iter().enumerate() {
        if is_due(bucket, day) {
            due.extend(cards.iter().cloned());
        }
    }
    log::trace!("day {day}: {} card(s) due", due.len());
    due
}

fn next_bucket(current: u32, difficulty: AnswerDifficulty) -> u32 {
    match difficulty {
        AnswerDifficulty::Wrong => 0,
        AnswerDifficulty::Hard => current,
        AnswerDifficulty::Easy => current.saturating_add(1),
    }
}

/// Returns a new map with `card` moved according to `difficulty`. The input
/// map is left as it was. A card found in no bucket is treated as sitting
/// in bucket 0.
pub fn update(buckets: &BucketMap, card: &Flashcard, difficulty: AnswerDifficulty) -> BucketMap {
    let mut next = buckets.clone();

    let current = match bucket_of(&next, card) {
        Some(b) => {
            if let Some(cards) = next.get_mut(&b) {
                cards.remove(card);
            }
            b
        }
        None => {
            next.entry(0).or_default();
            0
        }
    };

    let target = next_bucket(current, difficulty);
    next.entry(target).or_default().insert(card.clone());

    log::debug!(
        "moved {:?} from bucket {current} to {target} ({difficulty:?})",
        card.front
    );
    next
}

/// Applies [`update`] and builds the matching history entry.
pub fn record_answer(
    buckets: &BucketMap,
    card: &Flashcard,
    difficulty: AnswerDifficulty,
    practiced_at: DateTime<Utc>,
) -> ScheduleOutcome {
    let previous = bucket_of(buckets, card).unwrap_or(0);
    let next = update(buckets, card, difficulty);
    let new_bucket = next_bucket(previous, difficulty);

    let record = PracticeRecord::new(card, difficulty, practiced_at, previous, new_bucket);

    ScheduleOutcome {
        buckets: next,
        record,
    }
}

pub fn record_answer_now(
    buckets: &BucketMap,
    card: &Flashcard,
    difficulty: AnswerDifficulty,
) -> ScheduleOutcome {
    record_answer(buckets, card, difficulty, Utc::now())
}
