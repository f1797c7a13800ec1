use chrono::{Duration, TimeZone, Utc};
use flashbucket_core::{
    compute_progress, daily_streak, summarize, AnswerDifficulty, BucketMap, Flashcard,
    PracticeRecord,
};

fn rec(card: &Flashcard, d: AnswerDifficulty, days_ago: i64) -> PracticeRecord {
    let base = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
    PracticeRecord::new(card, d, base - Duration::days(days_ago), 0, 0)
}

#[test]
fn empty_inputs_give_zeroed_stats() {
    let s = compute_progress(&BucketMap::new(), &[]);
    assert_eq!(s.total_cards, 0);
    assert_eq!(s.cards_by_bucket, vec![0]);
    assert_eq!(s.success_rate, 0.0);
    assert_eq!(s.average_moves_per_card, 0.0);
    assert_eq!(s.total_practice_events, 0);
}

#[test]
fn hard_counts_as_success() {
    let c = Flashcard::new("q", "a");
    let history = vec![
        rec(&c, AnswerDifficulty::Easy, 0),
        rec(&c, AnswerDifficulty::Hard, 0),
        rec(&c, AnswerDifficulty::Wrong, 0),
        rec(&c, AnswerDifficulty::Wrong, 0),
    ];
    let s = compute_progress(&BucketMap::new(), &history);
    assert!(AnswerDifficulty::Hard.is_success());
    assert!(!AnswerDifficulty::Wrong.is_success());
    assert_eq!(s.success_rate, 50.0);
    assert_eq!(s.total_practice_events, 4);
}

#[test]
fn bucket_counts_are_dense() {
    let a = Flashcard::new("q1", "a1");
    let b = Flashcard::new("q2", "a2");
    let c = Flashcard::new("q3", "a3");
    let mut m = BucketMap::new();
    m.insert(0, [a].into_iter().collect());
    m.insert(3, [b, c].into_iter().collect());

    let s = compute_progress(&m, &[]);
    assert_eq!(s.total_cards, 3);
    assert_eq!(s.cards_by_bucket, vec![1, 0, 0, 2]);
}

#[test]
fn average_moves_groups_by_front_and_back() {
    let a = Flashcard::new("q1", "a1");
    let b = Flashcard::new("q2", "a2");
    // same text as `a`, different hint: still the same history key
    let a_hinted = Flashcard::new("q1", "a1").with_hint("think");
    let history = vec![
        rec(&a, AnswerDifficulty::Easy, 2),
        rec(&a_hinted, AnswerDifficulty::Wrong, 1),
        rec(&a, AnswerDifficulty::Hard, 0),
        rec(&b, AnswerDifficulty::Easy, 0),
    ];
    let s = compute_progress(&BucketMap::new(), &history);
    assert_eq!(s.average_moves_per_card, 2.0);
    assert_eq!(s.success_rate, 75.0);
}

#[test]
fn summary_and_streak() {
    let c = Flashcard::new("hola", "hello");
    let history = vec![
        rec(&c, AnswerDifficulty::Easy, 2),
        rec(&c, AnswerDifficulty::Hard, 1),
        rec(&c, AnswerDifficulty::Wrong, 0),
        rec(&c, AnswerDifficulty::Easy, 0),
        rec(&c, AnswerDifficulty::Easy, 5),
    ];

    let s = summarize(&history);
    assert_eq!(s.totals.total, 5);
    assert_eq!(s.totals.wrong, 1);
    assert_eq!(s.totals.hard, 1);
    assert_eq!(s.totals.easy, 3);
    assert_eq!(s.totals.success_rate(), 80.0);
    assert_eq!(s.per_day.len(), 4);

    let today = Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap().date_naive();
    assert_eq!(s.per_day[&today].total, 2);
    assert_eq!(daily_streak(&history, today), 3);
    assert_eq!(daily_streak(&history, today + Duration::days(1)), 0);
    assert_eq!(daily_streak(&[], today), 0);
}
