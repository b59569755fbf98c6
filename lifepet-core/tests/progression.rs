//! End-to-end progression rules through the engine.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{TimeZone, Utc};
use lifepet_core::{
    FixedClock, MemoryBackend, StorageBackend, TrackError, TrackerEngine, XpAction,
};

fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap())
}

/// Wraps the in-memory backend with a switchable "disk full" flag.
#[derive(Clone, Default)]
struct QuotaBackend {
    inner: MemoryBackend,
    full: Rc<Cell<bool>>,
}

impl QuotaBackend {
    fn fill(&self) {
        self.full.set(true);
    }
}

impl StorageBackend for QuotaBackend {
    fn load(&self, key: &str) -> Option<String> {
        self.inner.load(key)
    }

    fn store(&self, key: &str, value: &str) -> bool {
        !self.full.get() && self.inner.store(key, value)
    }

    fn remove(&self, key: &str) {
        self.inner.remove(key);
    }
}

#[test]
fn totals_accumulate_and_xp_stays_below_threshold() {
    let mut engine = TrackerEngine::new(MemoryBackend::new(), fixed_clock());
    let awards = [
        (20, XpAction::Transaction),
        (50, XpAction::Workout),
        (10, XpAction::Meal),
        (15, XpAction::Mood),
        (10, XpAction::Habit),
        (30, XpAction::Meditation),
        (400, XpAction::Workout),
    ];
    let mut expected_total = 0u64;
    for (amount, action) in awards {
        let profile = engine.add_xp(amount, action).unwrap();
        expected_total += u64::from(amount);
        assert_eq!(profile.total_xp, expected_total);
        assert!(profile.xp < profile.level * 100);
    }
}

#[test]
fn multi_level_rollover_through_the_staircase() {
    let mut engine = TrackerEngine::new(MemoryBackend::new(), fixed_clock());
    // 350 funds two level-ups: 100 leaves level 1, 200 leaves level 2.
    let profile = engine.add_xp(350, XpAction::Workout).unwrap();
    assert_eq!(profile.level, 3);
    assert_eq!(profile.xp, 50);
}

#[test]
fn default_profile_is_persisted_on_first_access() {
    let backend = MemoryBackend::new();
    let mut engine = TrackerEngine::new(backend.clone(), fixed_clock());
    assert!(backend.raw("userProfile").is_none());

    let created = engine.get_or_create_profile().unwrap();
    let stored = backend.raw("userProfile").expect("profile was written");

    // A second engine over the same medium reads the same document back.
    let mut second = TrackerEngine::new(backend.clone(), fixed_clock());
    assert_eq!(second.get_or_create_profile().unwrap(), created);
    assert_eq!(backend.raw("userProfile").unwrap(), stored);
}

#[test]
fn rejected_write_is_surfaced_and_old_value_stays() {
    let backend = QuotaBackend::default();
    let mut engine = TrackerEngine::new(backend.clone(), fixed_clock());
    engine.add_xp(40, XpAction::Mood).unwrap();
    let before = backend.load("userProfile").unwrap();

    backend.fill();
    let err = engine.add_xp(40, XpAction::Mood).unwrap_err();
    assert!(matches!(err, TrackError::WriteRejected { key: "userProfile" }));
    // The medium kept the previous document.
    assert_eq!(backend.load("userProfile").unwrap(), before);
}

#[test]
fn rejected_write_during_first_create_is_surfaced() {
    let backend = QuotaBackend::default();
    backend.fill();
    let mut engine = TrackerEngine::new(backend, fixed_clock());
    assert!(matches!(
        engine.get_or_create_profile(),
        Err(TrackError::WriteRejected { .. })
    ));
}

#[test]
fn corrupt_profile_is_replaced_by_the_default() {
    let backend = MemoryBackend::new();
    backend.insert_raw("userProfile", "][ not a profile");
    let mut engine = TrackerEngine::new(backend, fixed_clock());
    let profile = engine.get_or_create_profile().unwrap();
    assert_eq!(profile.level, 1);
    assert_eq!(profile.pet_name, "Barbaura");
}
