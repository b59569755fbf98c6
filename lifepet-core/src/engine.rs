//! Tracker engine: pet progression plus per-category logging.
//!
//! Every operation is a full read-mutate-write cycle against the document
//! store; the engine keeps no document state between calls. The host
//! environment delivers one user action at a time, so there is no
//! concurrent-writer protection here; two windows sharing one medium
//! would race and lose updates.

use chrono::NaiveDate;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use thiserror::Error;

use crate::clock::Clock;
use crate::constants::MOOD_RATING_MAX;
use crate::profile::{PetType, Profile};
use crate::records::{
    Achievement, CalorieEntry, Goal, Habit, HabitCompletion, Intensity, JournalEntry, MealType,
    Meditation, MeditationKind, Mood, Transaction, TransactionKind, Workout, WorkoutKind,
};
use crate::store::{DocumentStore, StorageBackend, StoreKey, keys};
use crate::streak::compute_streak;
use crate::xp::XpAction;

/// Errors surfaced by engine operations.
#[derive(Debug, Error)]
pub enum TrackError {
    /// The medium rejected a write. The returned/in-memory state is ahead
    /// of the persisted copy; callers should re-fetch before retrying.
    #[error("storage rejected write to '{key}'; in-memory state is not durable")]
    WriteRejected { key: &'static str },
    /// XP awards must be positive.
    #[error("xp amount must be positive")]
    ZeroXpAmount,
    /// No habit with the given id exists.
    #[error("unknown habit '{0}'")]
    UnknownHabit(String),
}

/// Outcome of ticking a habit for the day.
#[derive(Debug, Clone, PartialEq)]
pub struct HabitCompletionOutcome {
    pub habit: Habit,
    /// Streak recomputed over the updated completion history.
    pub streak: u32,
    pub profile: Profile,
}

/// All-time activity counts shown on the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActivityStats {
    pub transactions: usize,
    pub workouts: usize,
    pub mood_checkins: usize,
    pub meditations: usize,
}

/// Counts of records logged today, for the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodaySummary {
    pub transactions: usize,
    pub workouts: usize,
    pub moods: usize,
    pub meditations: usize,
}

/// Main engine for one user's tracked state.
pub struct TrackerEngine<B, C>
where
    B: StorageBackend,
    C: Clock,
{
    store: DocumentStore<B>,
    clock: C,
    ids: SmallRng,
}

impl<B, C> TrackerEngine<B, C>
where
    B: StorageBackend,
    C: Clock,
{
    /// Create an engine over the provided medium and clock.
    pub fn new(backend: B, clock: C) -> Self {
        let seed = clock.now().timestamp_millis().unsigned_abs();
        Self {
            store: DocumentStore::new(backend),
            clock,
            ids: SmallRng::seed_from_u64(seed),
        }
    }

    /// Access to the underlying typed store.
    #[must_use]
    pub const fn store(&self) -> &DocumentStore<B> {
        &self.store
    }

    /// Millisecond stamp plus an entropy suffix so records created within
    /// the same millisecond stay distinct.
    fn next_id(&mut self) -> String {
        let millis = self.clock.now().timestamp_millis();
        let suffix = self.ids.next_u32() & 0xFFFF;
        format!("{millis}-{suffix:04x}")
    }

    fn persist<T: Serialize>(&self, key: StoreKey<T>, value: &T) -> Result<(), TrackError> {
        if self.store.set(key, value) {
            Ok(())
        } else {
            Err(TrackError::WriteRejected { key: key.name() })
        }
    }

    fn append<T: Serialize + Clone + serde::de::DeserializeOwned>(
        &self,
        key: StoreKey<Vec<T>>,
        record: &T,
    ) -> Result<(), TrackError> {
        let mut all = self.store.get(key, Vec::new());
        all.push(record.clone());
        self.persist(key, &all)
    }

    // --- profile & progression ---------------------------------------

    /// Load the profile, creating and persisting the default on first
    /// access. Calling this twice with no stored profile yields the same
    /// shape both times; the second call reads back the first call's write.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial profile cannot be persisted.
    pub fn get_or_create_profile(&mut self) -> Result<Profile, TrackError> {
        if let Some(profile) = self.store.get_opt(keys::PROFILE) {
            return Ok(profile);
        }
        let profile = Profile::new(self.clock.now());
        self.persist(keys::PROFILE, &profile)?;
        Ok(profile)
    }

    /// Award XP for `action` and roll levels as thresholds are crossed.
    /// Returns the persisted profile.
    ///
    /// # Errors
    ///
    /// Rejects a zero amount, and surfaces a rejected write; the returned
    /// profile change is then not durable.
    pub fn add_xp(&mut self, amount: u32, action: XpAction) -> Result<Profile, TrackError> {
        if amount == 0 {
            return Err(TrackError::ZeroXpAmount);
        }
        let mut profile = self.get_or_create_profile()?;
        let level_before = profile.level;
        profile.apply_xp(amount);
        if profile.level > level_before {
            log::info!("{action} raised {} to level {}", profile.pet_name, profile.level);
        } else {
            log::debug!(
                "{action} awarded {amount} xp ({}/{})",
                profile.xp,
                profile.xp_to_next_level()
            );
        }
        self.persist(keys::PROFILE, &profile)?;
        Ok(profile)
    }

    /// Switch the companion shown for this profile.
    ///
    /// # Errors
    ///
    /// Surfaces a rejected write.
    pub fn set_pet_type(&mut self, pet_type: PetType) -> Result<Profile, TrackError> {
        let mut profile = self.get_or_create_profile()?;
        profile.pet_type = pet_type;
        self.persist(keys::PROFILE, &profile)?;
        Ok(profile)
    }

    /// Rename the companion.
    ///
    /// # Errors
    ///
    /// Surfaces a rejected write.
    pub fn set_pet_name(&mut self, name: impl Into<String>) -> Result<Profile, TrackError> {
        let mut profile = self.get_or_create_profile()?;
        profile.pet_name = name.into();
        self.persist(keys::PROFILE, &profile)?;
        Ok(profile)
    }

    // --- finance ------------------------------------------------------

    /// Record a finance entry and award its XP.
    ///
    /// # Errors
    ///
    /// Surfaces a rejected write.
    pub fn log_transaction(
        &mut self,
        kind: TransactionKind,
        amount_cents: i64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<(Transaction, Profile), TrackError> {
        let record = Transaction {
            id: self.next_id(),
            kind,
            amount_cents,
            category: category.into(),
            description: description.into(),
            created_at: self.clock.now(),
        };
        self.append(keys::TRANSACTIONS, &record)?;
        let profile = self.add_xp(XpAction::Transaction.award(), XpAction::Transaction)?;
        Ok((record, profile))
    }

    /// Drop a finance entry by id. Unknown ids are a no-op.
    ///
    /// # Errors
    ///
    /// Surfaces a rejected write.
    pub fn delete_transaction(&mut self, id: &str) -> Result<(), TrackError> {
        let mut all = self.store.get(keys::TRANSACTIONS, Vec::new());
        all.retain(|t| t.id != id);
        self.persist(keys::TRANSACTIONS, &all)
    }

    /// Net balance in cents over every recorded transaction.
    #[must_use]
    pub fn balance_cents(&self) -> i64 {
        self.store
            .get(keys::TRANSACTIONS, Vec::new())
            .iter()
            .map(Transaction::signed_cents)
            .sum()
    }

    /// Create a savings goal. Goals award no XP.
    ///
    /// # Errors
    ///
    /// Surfaces a rejected write.
    pub fn add_goal(
        &mut self,
        name: impl Into<String>,
        target_cents: i64,
    ) -> Result<Goal, TrackError> {
        let goal = Goal {
            id: self.next_id(),
            name: name.into(),
            target_cents,
            current_cents: 0,
            created_at: self.clock.now(),
        };
        self.append(keys::GOALS, &goal)?;
        Ok(goal)
    }

    // --- fitness ------------------------------------------------------

    /// Record a training session and award its XP.
    ///
    /// # Errors
    ///
    /// Surfaces a rejected write.
    pub fn log_workout(
        &mut self,
        kind: WorkoutKind,
        duration_min: u32,
        intensity: Intensity,
    ) -> Result<(Workout, Profile), TrackError> {
        let record = Workout {
            id: self.next_id(),
            kind,
            duration_min,
            intensity,
            completed_at: self.clock.now(),
        };
        self.append(keys::WORKOUTS, &record)?;
        let profile = self.add_xp(XpAction::Workout.award(), XpAction::Workout)?;
        Ok((record, profile))
    }

    /// Record a meal and award its XP.
    ///
    /// # Errors
    ///
    /// Surfaces a rejected write.
    pub fn log_meal(
        &mut self,
        food: impl Into<String>,
        calories: u32,
        meal: MealType,
    ) -> Result<(CalorieEntry, Profile), TrackError> {
        let record = CalorieEntry {
            id: self.next_id(),
            food: food.into(),
            calories,
            meal,
            created_at: self.clock.now(),
        };
        self.append(keys::CALORIES, &record)?;
        let profile = self.add_xp(XpAction::Meal.award(), XpAction::Meal)?;
        Ok((record, profile))
    }

    /// Calories logged on the given calendar date.
    #[must_use]
    pub fn calories_on(&self, date: NaiveDate) -> u32 {
        self.store
            .get(keys::CALORIES, Vec::new())
            .iter()
            .filter(|e| e.created_at.date_naive() == date)
            .map(|e| e.calories)
            .sum()
    }

    // --- mental wellness ----------------------------------------------

    /// Record a mood check-in and award its XP. Ratings above the form's
    /// scale are clamped to its maximum.
    ///
    /// # Errors
    ///
    /// Surfaces a rejected write.
    pub fn log_mood(
        &mut self,
        emoji: impl Into<String>,
        rating: u8,
        notes: impl Into<String>,
    ) -> Result<(Mood, Profile), TrackError> {
        let record = Mood {
            id: self.next_id(),
            emoji: emoji.into(),
            rating: rating.min(MOOD_RATING_MAX),
            notes: notes.into(),
            created_at: self.clock.now(),
        };
        self.append(keys::MOODS, &record)?;
        let profile = self.add_xp(XpAction::Mood.award(), XpAction::Mood)?;
        Ok((record, profile))
    }

    /// Save a journal entry. Journaling awards no XP.
    ///
    /// # Errors
    ///
    /// Surfaces a rejected write.
    pub fn add_journal_entry(&mut self, content: impl Into<String>) -> Result<JournalEntry, TrackError> {
        let entry = JournalEntry {
            id: self.next_id(),
            content: content.into(),
            created_at: self.clock.now(),
        };
        self.append(keys::JOURNAL, &entry)?;
        Ok(entry)
    }

    /// Record a started meditation session and award its XP.
    ///
    /// # Errors
    ///
    /// Surfaces a rejected write.
    pub fn log_meditation(
        &mut self,
        duration_min: u32,
    ) -> Result<(Meditation, Profile), TrackError> {
        let record = Meditation {
            id: self.next_id(),
            duration_min,
            kind: MeditationKind::Guided,
            completed_at: self.clock.now(),
        };
        self.append(keys::MEDITATIONS, &record)?;
        let profile = self.add_xp(XpAction::Meditation.award(), XpAction::Meditation)?;
        Ok((record, profile))
    }

    // --- habits -------------------------------------------------------

    /// Create a habit with an empty completion history. Creation awards no
    /// XP; only ticking the habit does.
    ///
    /// # Errors
    ///
    /// Surfaces a rejected write.
    pub fn add_habit(&mut self, name: impl Into<String>) -> Result<Habit, TrackError> {
        let habit = Habit {
            id: self.next_id(),
            name: name.into(),
            completions: Vec::new(),
            created_at: self.clock.now(),
        };
        self.append(keys::HABITS, &habit)?;
        Ok(habit)
    }

    /// Tick a habit for today: append a completion, award XP, and report
    /// the recomputed streak. Completions are append-only and nothing here
    /// dedupes a second tick on the same day.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::UnknownHabit`] for an id with no habit, and
    /// surfaces rejected writes.
    pub fn complete_habit(&mut self, id: &str) -> Result<HabitCompletionOutcome, TrackError> {
        let mut habits = self.store.get(keys::HABITS, Vec::new());
        let today = self.clock.today();
        let now = self.clock.now();

        let habit = habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| TrackError::UnknownHabit(id.to_string()))?;
        habit.completions.push(HabitCompletion {
            date: today,
            completed_at: now,
        });
        let snapshot = habit.clone();

        self.persist(keys::HABITS, &habits)?;
        let profile = self.add_xp(XpAction::Habit.award(), XpAction::Habit)?;
        let streak = compute_streak(&snapshot.completions, today);
        Ok(HabitCompletionOutcome {
            habit: snapshot,
            streak,
            profile,
        })
    }

    /// Whether the habit already has a completion stamped today.
    #[must_use]
    pub fn habit_completed_today(&self, id: &str) -> bool {
        let today = self.clock.today();
        self.store
            .get(keys::HABITS, Vec::new())
            .iter()
            .any(|h| h.id == id && h.completed_on(today))
    }

    /// Current streak for the habit; unknown ids count as zero.
    #[must_use]
    pub fn habit_streak(&self, id: &str) -> u32 {
        let today = self.clock.today();
        self.store
            .get(keys::HABITS, Vec::new())
            .iter()
            .find(|h| h.id == id)
            .map_or(0, |h| compute_streak(&h.completions, today))
    }

    // --- read accessors -----------------------------------------------

    #[must_use]
    pub fn transactions(&self) -> Vec<Transaction> {
        self.store.get(keys::TRANSACTIONS, Vec::new())
    }

    #[must_use]
    pub fn goals(&self) -> Vec<Goal> {
        self.store.get(keys::GOALS, Vec::new())
    }

    #[must_use]
    pub fn workouts(&self) -> Vec<Workout> {
        self.store.get(keys::WORKOUTS, Vec::new())
    }

    #[must_use]
    pub fn calorie_entries(&self) -> Vec<CalorieEntry> {
        self.store.get(keys::CALORIES, Vec::new())
    }

    #[must_use]
    pub fn moods(&self) -> Vec<Mood> {
        self.store.get(keys::MOODS, Vec::new())
    }

    #[must_use]
    pub fn journal(&self) -> Vec<JournalEntry> {
        self.store.get(keys::JOURNAL, Vec::new())
    }

    #[must_use]
    pub fn habits(&self) -> Vec<Habit> {
        self.store.get(keys::HABITS, Vec::new())
    }

    #[must_use]
    pub fn meditations(&self) -> Vec<Meditation> {
        self.store.get(keys::MEDITATIONS, Vec::new())
    }

    #[must_use]
    pub fn achievements(&self) -> Vec<Achievement> {
        self.store.get(keys::ACHIEVEMENTS, Vec::new())
    }

    /// All-time counts for the profile page.
    #[must_use]
    pub fn activity_stats(&self) -> ActivityStats {
        ActivityStats {
            transactions: self.transactions().len(),
            workouts: self.workouts().len(),
            mood_checkins: self.moods().len(),
            meditations: self.meditations().len(),
        }
    }

    /// Counts of records logged today, for the dashboard cards.
    #[must_use]
    pub fn today_summary(&self) -> TodaySummary {
        let today = self.clock.today();
        TodaySummary {
            transactions: self
                .transactions()
                .iter()
                .filter(|t| t.created_at.date_naive() == today)
                .count(),
            workouts: self
                .workouts()
                .iter()
                .filter(|w| w.completed_at.date_naive() == today)
                .count(),
            moods: self
                .moods()
                .iter()
                .filter(|m| m.created_at.date_naive() == today)
                .count(),
            meditations: self
                .meditations()
                .iter()
                .filter(|m| m.completed_at.date_naive() == today)
                .count(),
        }
    }
}
