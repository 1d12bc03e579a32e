//! Daily streak calculation.

use chrono::{Days, NaiveDate};
use std::collections::BTreeSet;

/// Consecutive days with at least one completed mission.
///
/// The run ends today, or yesterday when nothing has been completed yet
/// today, so a streak does not read as broken until the day is over.
/// Days after `today` are ignored.
pub fn streak(completion_days: &[NaiveDate], today: NaiveDate) -> u32 {
    let days: BTreeSet<NaiveDate> = completion_days
        .iter()
        .copied()
        .filter(|d| *d <= today)
        .collect();

    let mut cursor = if days.contains(&today) {
        today
    } else {
        match today.checked_sub_days(Days::new(1)) {
            Some(yesterday) => yesterday,
            None => return 0,
        }
    };

    let mut count = 0;
    while days.contains(&cursor) {
        count += 1;
        match cursor.checked_sub_days(Days::new(1)) {
            Some(prev) => cursor = prev,
            None => break,
        }
    }
    count
}
