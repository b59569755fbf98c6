//! XP award policy for user actions.
//!
//! The engine does not choose award sizes; actions carry their fixed award
//! and callers hand both to [`crate::engine::TrackerEngine::add_xp`].

use serde::{Deserialize, Serialize};

use crate::constants::{
    XP_HABIT, XP_MEAL, XP_MEDITATION, XP_MOOD, XP_TRANSACTION, XP_WORKOUT,
};

/// The user action that triggered an XP award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XpAction {
    Transaction,
    Workout,
    Meal,
    Mood,
    Habit,
    Meditation,
}

impl XpAction {
    /// The fixed XP this action is worth.
    #[must_use]
    pub const fn award(self) -> u32 {
        match self {
            XpAction::Transaction => XP_TRANSACTION,
            XpAction::Workout => XP_WORKOUT,
            XpAction::Meal => XP_MEAL,
            XpAction::Mood => XP_MOOD,
            XpAction::Habit => XP_HABIT,
            XpAction::Meditation => XP_MEDITATION,
        }
    }

    /// Stable tag used in logs.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            XpAction::Transaction => "transaction",
            XpAction::Workout => "workout",
            XpAction::Meal => "meal",
            XpAction::Mood => "mood",
            XpAction::Habit => "habit",
            XpAction::Meditation => "meditation",
        }
    }
}

impl std::fmt::Display for XpAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn award_table_matches_policy() {
        assert_eq!(XpAction::Transaction.award(), 20);
        assert_eq!(XpAction::Workout.award(), 50);
        assert_eq!(XpAction::Meal.award(), 10);
        assert_eq!(XpAction::Mood.award(), 15);
        assert_eq!(XpAction::Habit.award(), 10);
        assert_eq!(XpAction::Meditation.award(), 30);
    }

    #[test]
    fn tags_are_lowercase_stable() {
        assert_eq!(XpAction::Meditation.to_string(), "meditation");
        assert_eq!(
            serde_json::to_string(&XpAction::Workout).unwrap(),
            "\"workout\""
        );
    }
}
