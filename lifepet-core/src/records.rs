//! Stored record shapes for the tracked categories.
//!
//! Each list lives under its own key (see [`crate::store::keys`]);
//! entries are append-only from the user's point of view and carry wire
//! names in camelCase.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a finance entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A single finance entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    /// Amount in cents to avoid floating-point issues
    pub amount_cents: i64,
    pub category: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Signed contribution of this entry to the running balance.
    #[must_use]
    pub const fn signed_cents(&self) -> i64 {
        match self.kind {
            TransactionKind::Income => self.amount_cents,
            TransactionKind::Expense => -self.amount_cents,
        }
    }
}

/// A savings goal, stored under `finance-goals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_cents: i64,
    /// Starts at zero; the host updates it as money is set aside.
    pub current_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Fraction of the target reached, clamped to `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f32 {
        if self.target_cents <= 0 {
            return 0.0;
        }
        (self.current_cents as f32 / self.target_cents as f32).clamp(0.0, 1.0)
    }
}

/// Workout categories offered by the fitness form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Hiit,
    Strength,
    Yoga,
    Pilates,
    Cardio,
    Stretching,
}

/// Workout effort level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    Moderate,
    Intense,
}

/// A logged training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    pub kind: WorkoutKind,
    pub duration_min: u32,
    pub intensity: Intensity,
    pub completed_at: DateTime<Utc>,
}

/// Meal slot for calorie entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

/// A logged meal, stored under `calories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieEntry {
    pub id: String,
    pub food: String,
    pub calories: u32,
    pub meal: MealType,
    pub created_at: DateTime<Utc>,
}

/// A mood check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mood {
    pub id: String,
    pub emoji: String,
    /// 1..=10 on the check-in form.
    pub rating: u8,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

/// A free-form journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Meditation style. The app currently only offers guided sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeditationKind {
    #[default]
    Guided,
}

/// A started meditation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meditation {
    pub id: String,
    pub duration_min: u32,
    pub kind: MeditationKind,
    pub completed_at: DateTime<Utc>,
}

/// An unlockable achievement, stored under `achievements`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// One day's tick for a habit. The date serializes as a plain
/// `YYYY-MM-DD` string; the full timestamp records when the tick happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitCompletion {
    pub date: NaiveDate,
    pub completed_at: DateTime<Utc>,
}

/// A recurring habit with its append-only completion history.
///
/// Nothing enforces at most one completion per calendar day; duplicates
/// are possible and the streak scan must tolerate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub completions: Vec<HabitCompletion>,
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Whether a completion exists for the given calendar date.
    #[must_use]
    pub fn completed_on(&self, date: NaiveDate) -> bool {
        self.completions.iter().any(|c| c.date == date)
    }
}
