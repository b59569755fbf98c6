//! Lifepet Core Engine
//!
//! Platform-agnostic logic for the Lifepet virtual-pet self-tracker: the
//! persisted document layout, the pet progression rules, and the habit streak
//! scan. Hosts provide the storage medium (browser `localStorage`, an
//! in-memory map for tests) and render the results; nothing in this crate
//! touches a UI.

pub mod clock;
pub mod constants;
pub mod engine;
pub mod profile;
pub mod records;
pub mod store;
pub mod streak;
pub mod xp;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{
    ActivityStats, HabitCompletionOutcome, TodaySummary, TrackError, TrackerEngine,
};
pub use profile::{PetType, Profile};
pub use records::{
    Achievement, CalorieEntry, Goal, Habit, HabitCompletion, Intensity, JournalEntry, MealType,
    Meditation, MeditationKind, Mood, Transaction, TransactionKind, Workout, WorkoutKind,
};
pub use store::{DocumentStore, MemoryBackend, StorageBackend, StoreKey, keys};
pub use streak::compute_streak;
pub use xp::XpAction;
