use crate::{max_bucket, AnswerDifficulty, BucketMap, PracticeRecord};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressStats {
    pub total_cards: usize,
    pub cards_by_bucket: Vec<usize>,
    /// Percentage, 0 to 100.
    pub success_rate: f64,
    pub average_moves_per_card: f64,
    pub total_practice_events: usize,
}

pub fn compute_progress(buckets: &BucketMap, history: &[PracticeRecord]) -> ProgressStats {
    let mut cards_by_bucket = vec![0usize; max_bucket(buckets) as usize + 1];
    for (b, cards) in buckets {
        cards_by_bucket[*b as usize] = cards.len();
    }
    let total_cards = cards_by_bucket.iter().sum();

    let totals = summarize(history).totals;

    let mut per_card: HashMap<(&str, &str), usize> = HashMap::new();
    for r in history {
        *per_card.entry(r.card_key()).or_default() += 1;
    }
    let average_moves_per_card = if per_card.is_empty() {
        0.0
    } else {
        history.len() as f64 / per_card.len() as f64
    };

    ProgressStats {
        total_cards,
        cards_by_bucket,
        success_rate: totals.success_rate(),
        average_moves_per_card,
        total_practice_events: history.len(),
    }
}

#[derive(Clone, Debug, Default)]
pub struct Totals {
    pub total: u32,
    pub wrong: u32,
    pub hard: u32,
    pub easy: u32,
}

impl Totals {
    pub fn record(&mut self, d: AnswerDifficulty) {
        self.total += 1;
        match d {
            AnswerDifficulty::Wrong => self.wrong += 1,
            AnswerDifficulty::Hard => self.hard += 1,
            AnswerDifficulty::Easy => self.easy += 1,
        }
    }

    /// Share of Hard and Easy answers, as a percentage.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.hard + self.easy) as f64 / self.total as f64 * 100.0
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct StatsSummary {
    pub totals: Totals,
    pub per_day: BTreeMap<NaiveDate, Totals>,
}

pub fn summarize(history: &[PracticeRecord]) -> StatsSummary {
    let mut summary = StatsSummary::default();
    for r in history {
        summary.totals.record(r.difficulty);
        let d = r.practiced_at.date_naive();
        summary.per_day.entry(d).or_default().record(r.difficulty);
    }
    summary
}

/// Consecutive days with at least one answer, counting back from `today`.
pub fn daily_streak(history: &[PracticeRecord], today: NaiveDate) -> u32 {
    let per_day = summarize(history).per_day;
    let mut streak = 0u32;
    let mut day = today;
    while per_day.get(&day).map(|t| t.total > 0).unwrap_or(false) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}
