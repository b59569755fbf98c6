//! Centralized progression and policy constants for Lifepet.
//!
//! These values define the deterministic math for pet leveling and the
//! fixed XP award per logged action. Keeping them together ensures the
//! economy can only be adjusted via code changes reviewed in version
//! control.

// XP awards per logged action ----------------------------------------------
pub(crate) const XP_TRANSACTION: u32 = 20;
pub(crate) const XP_WORKOUT: u32 = 50;
pub(crate) const XP_MEAL: u32 = 10;
pub(crate) const XP_MOOD: u32 = 15;
pub(crate) const XP_HABIT: u32 = 10;
pub(crate) const XP_MEDITATION: u32 = 30;

// Leveling ------------------------------------------------------------------
/// Leaving level `L` costs `L * XP_LEVEL_STEP` XP, so each level is a
/// longer climb than the one before it.
pub(crate) const XP_LEVEL_STEP: u32 = 100;

// Profile defaults -----------------------------------------------------------
pub(crate) const DEFAULT_PROFILE_ID: &str = "1";
pub(crate) const DEFAULT_PET_NAME: &str = "Barbaura";

// Mood ratings run 1..=10 on the check-in form.
pub(crate) const MOOD_RATING_MAX: u8 = 10;
