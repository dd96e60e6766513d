//! Consecutive-check-in-day streak, recomputed from scratch on every query.

use crate::models::MoodEntry;
use chrono::{Duration, Local, NaiveDate};

pub fn current_streak(entries: &[MoodEntry]) -> u32 {
    streak_at(Local::now().date_naive(), entries)
}

/// Walks entry days newest-first. The head is lenient (a streak is alive if
/// the latest entry is today or yesterday, so a not-yet-checked-in morning
/// does not read as broken), the tail is strict: every further step must be
/// exactly one calendar day earlier.
pub fn streak_at(today: NaiveDate, entries: &[MoodEntry]) -> u32 {
    if entries.is_empty() {
        return 0;
    }

    let mut days: Vec<NaiveDate> = entries.iter().map(|entry| entry.date.date_naive()).collect();
    days.sort_unstable_by(|a, b| b.cmp(a));

    let latest = days[0];
    if latest != today && latest != today - Duration::days(1) {
        return 0;
    }

    let mut streak = 1;
    let mut expected = latest - Duration::days(1);
    for day in &days[1..] {
        if *day != expected {
            break;
        }
        streak += 1;
        expected -= Duration::days(1);
    }

    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MoodEntry;
    use chrono::{DateTime, Local, TimeZone};

    fn entry_on(date: NaiveDate) -> MoodEntry {
        let stamp: DateTime<Local> = Local
            .from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
            .single()
            .unwrap();
        MoodEntry {
            id: date.to_string(),
            date: stamp,
            emoji: "😊".to_string(),
            sentiment: 0.8,
            note: None,
            user_id: None,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_collection_has_no_streak() {
        assert_eq!(streak_at(day(2026, 3, 10), &[]), 0);
    }

    #[test]
    fn three_consecutive_days_count_three() {
        let today = day(2026, 3, 10);
        let entries: Vec<_> = [0, 1, 2]
            .iter()
            .map(|offset| entry_on(today - Duration::days(*offset)))
            .collect();
        assert_eq!(streak_at(today, &entries), 3);
    }

    #[test]
    fn gap_in_the_walk_stops_the_count() {
        let today = day(2026, 3, 10);
        let entries = vec![entry_on(today), entry_on(today - Duration::days(2))];
        assert_eq!(streak_at(today, &entries), 1);
    }

    #[test]
    fn stale_latest_entry_breaks_the_streak() {
        let today = day(2026, 3, 10);
        let entries = vec![
            entry_on(today - Duration::days(2)),
            entry_on(today - Duration::days(3)),
        ];
        assert_eq!(streak_at(today, &entries), 0);
    }

    #[test]
    fn yesterday_head_keeps_the_streak_alive() {
        let today = day(2026, 3, 10);
        let entries = vec![
            entry_on(today - Duration::days(1)),
            entry_on(today - Duration::days(2)),
            entry_on(today - Duration::days(3)),
        ];
        assert_eq!(streak_at(today, &entries), 3);
    }

    #[test]
    fn unsorted_input_is_sorted_before_walking() {
        let today = day(2026, 3, 10);
        let entries = vec![
            entry_on(today - Duration::days(1)),
            entry_on(today),
            entry_on(today - Duration::days(2)),
        ];
        assert_eq!(streak_at(today, &entries), 3);
    }
}
