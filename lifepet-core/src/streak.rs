//! Consecutive-day streak scan over habit completions.

use chrono::NaiveDate;

use crate::records::HabitCompletion;

/// Count consecutive calendar days with a completion, walking backward
/// from `today`.
///
/// The most recent completion must land on `today` itself; each one after
/// it must land exactly one day before the last counted day. Any gap stops
/// the scan. Duplicate same-day entries are not deduplicated; the
/// comparison is purely arithmetic, so a duplicate either breaks the walk
/// or is skipped over depending on where it sorts.
#[must_use]
pub fn compute_streak(completions: &[HabitCompletion], today: NaiveDate) -> u32 {
    if completions.is_empty() {
        return 0;
    }

    let mut dates: Vec<NaiveDate> = completions.iter().map(|c| c.date).collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));

    let mut streak = 0u32;
    for date in dates {
        let diff_days = (today - date).num_days();
        if diff_days == i64::from(streak) {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}
