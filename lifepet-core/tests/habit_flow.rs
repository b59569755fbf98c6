//! Habit streaks driven through the engine against seeded histories.

use chrono::{Days, NaiveDate, TimeZone, Utc};
use lifepet_core::{
    DocumentStore, FixedClock, Habit, HabitCompletion, MemoryBackend, TrackerEngine, keys,
};

const TODAY: (i32, u32, u32) = (2024, 5, 10);

fn clock() -> FixedClock {
    let (y, m, d) = TODAY;
    FixedClock(Utc.with_ymd_and_hms(y, m, d, 7, 30, 0).unwrap())
}

fn day(offset_back: u64) -> NaiveDate {
    let (y, m, d) = TODAY;
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .checked_sub_days(Days::new(offset_back))
        .unwrap()
}

/// Seed a habit whose completions sit `offsets_back` days in the past.
fn seed_habit(backend: &MemoryBackend, id: &str, offsets_back: &[u64]) {
    let store = DocumentStore::new(backend.clone());
    let mut habits = store.get(keys::HABITS, Vec::new());
    habits.push(Habit {
        id: id.to_string(),
        name: id.to_string(),
        completions: offsets_back
            .iter()
            .map(|&offset| HabitCompletion {
                date: day(offset),
                completed_at: clock().0,
            })
            .collect(),
        created_at: clock().0,
    });
    assert!(store.set(keys::HABITS, &habits));
}

#[test]
fn unbroken_run_counts_every_day() {
    let backend = MemoryBackend::new();
    seed_habit(&backend, "walk", &[2, 1, 0]);
    let engine = TrackerEngine::new(backend, clock());
    assert_eq!(engine.habit_streak("walk"), 3);
}

#[test]
fn skipped_days_break_the_run() {
    let backend = MemoryBackend::new();
    seed_habit(&backend, "walk", &[3, 0]);
    let engine = TrackerEngine::new(backend, clock());
    assert_eq!(engine.habit_streak("walk"), 1);
}

#[test]
fn yesterday_only_counts_for_nothing() {
    let backend = MemoryBackend::new();
    seed_habit(&backend, "walk", &[1]);
    let engine = TrackerEngine::new(backend, clock());
    assert_eq!(engine.habit_streak("walk"), 0);
}

#[test]
fn ticking_today_extends_a_run_ending_yesterday() {
    let backend = MemoryBackend::new();
    seed_habit(&backend, "walk", &[2, 1]);
    let mut engine = TrackerEngine::new(backend, clock());
    assert_eq!(engine.habit_streak("walk"), 0);

    let outcome = engine.complete_habit("walk").unwrap();
    assert_eq!(outcome.streak, 3);
    assert_eq!(outcome.profile.total_xp, 10);
}

#[test]
fn double_tick_on_one_day_appends_but_does_not_double_count() {
    let backend = MemoryBackend::new();
    seed_habit(&backend, "walk", &[]);
    let mut engine = TrackerEngine::new(backend, clock());

    let first = engine.complete_habit("walk").unwrap();
    assert_eq!(first.streak, 1);
    let second = engine.complete_habit("walk").unwrap();
    // Both ticks are stored; the arithmetic walk still reports one day.
    assert_eq!(second.habit.completions.len(), 2);
    assert_eq!(second.streak, 1);
    // Each tick still pays out, since nothing dedupes the award.
    assert_eq!(second.profile.total_xp, 20);
}

#[test]
fn streaks_are_tracked_per_habit() {
    let backend = MemoryBackend::new();
    seed_habit(&backend, "walk", &[1, 0]);
    seed_habit(&backend, "read", &[0]);
    let engine = TrackerEngine::new(backend, clock());
    assert_eq!(engine.habit_streak("walk"), 2);
    assert_eq!(engine.habit_streak("read"), 1);
    assert_eq!(engine.habit_streak("absent"), 0);
}
