//! User profile and pet leveling rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PET_NAME, DEFAULT_PROFILE_ID, XP_LEVEL_STEP};

/// Which companion the profile renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    #[default]
    Cat,
    Panda,
}

impl std::fmt::Display for PetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PetType::Cat => write!(f, "cat"),
            PetType::Panda => write!(f, "panda"),
        }
    }
}

/// The singleton user/pet state document, stored under `userProfile`.
///
/// `level` and `total_xp` only ever increase; `xp` cycles within
/// `[0, level * 100)` after every award.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub pet_type: PetType,
    pub pet_name: String,
    pub level: u32,
    pub xp: u32,
    #[serde(rename = "totalXP")]
    pub total_xp: u64,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub customizations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// The default profile created lazily on first access.
    #[must_use]
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            id: DEFAULT_PROFILE_ID.to_string(),
            pet_type: PetType::Cat,
            pet_name: DEFAULT_PET_NAME.to_string(),
            level: 1,
            xp: 0,
            total_xp: 0,
            achievements: Vec::new(),
            customizations: Vec::new(),
            created_at,
        }
    }

    /// XP required to leave the current level.
    #[must_use]
    pub const fn xp_to_next_level(&self) -> u32 {
        self.level * XP_LEVEL_STEP
    }

    /// Apply an XP award, carrying overflow across as many level-ups as it
    /// funds. The threshold is re-evaluated against the current level on
    /// every pass, so this is a staircase that grows with each level, not a
    /// fixed modulo.
    pub fn apply_xp(&mut self, amount: u32) {
        self.xp += amount;
        self.total_xp += u64::from(amount);
        while self.xp >= self.xp_to_next_level() {
            self.xp -= self.xp_to_next_level();
            self.level += 1;
        }
    }

    /// Progress through the current level as a ratio in `[0, 1)`, for the
    /// host's XP bar.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn level_progress(&self) -> f32 {
        self.xp as f32 / self.xp_to_next_level() as f32
    }
}
