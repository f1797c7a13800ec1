use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Returned by [`get_hint`] when a card carries no hint.
pub const NO_HINT: &str = "No hint available";

/// Sparse system of record: bucket number to the cards filed there.
/// Buckets with no cards may be missing.
pub type BucketMap = BTreeMap<u32, HashSet<Flashcard>>;

/// Dense view of a [`BucketMap`], indexed by bucket number.
pub type BucketSets = Vec<HashSet<Flashcard>>;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AnswerDifficulty {
    Wrong,
    Hard,
    Easy,
}

impl AnswerDifficulty {
    /// Hard still counts: the card was recalled.
    pub fn is_success(&self) -> bool {
        !matches!(self, AnswerDifficulty::Wrong)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
    pub hint: Option<String>,
    pub tags: Vec<String>,
}

impl Flashcard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            hint: None,
            tags: Vec::new(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

pub fn get_hint(card: &Flashcard) -> &str {
    card.hint.as_deref().unwrap_or(NO_HINT)
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PracticeRecord {
    pub card_front: String,
    pub card_back: String,
    pub difficulty: AnswerDifficulty,
    pub practiced_at: DateTime<Utc>,
    pub previous_bucket: u32,
    pub new_bucket: u32,
}

impl PracticeRecord {
    pub fn new(
        card: &Flashcard,
        difficulty: AnswerDifficulty,
        practiced_at: DateTime<Utc>,
        previous_bucket: u32,
        new_bucket: u32,
    ) -> Self {
        Self {
            card_front: card.front.clone(),
            card_back: card.back.clone(),
            difficulty,
            practiced_at,
            previous_bucket,
            new_bucket,
        }
    }

    /// Key used to group history by card.
    pub fn card_key(&self) -> (&str, &str) {
        (&self.card_front, &self.card_back)
    }
}
