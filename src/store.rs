//! Entry store: the mood-entry collection and its day-granularity rules.
//!
//! The collection itself lives in [`crate::state::AppData`]; the functions
//! here enforce the one-entry-per-calendar-day invariant and answer the
//! date queries. Day equality always goes through [`day_key`] so the
//! normalization strategy (format both sides to `YYYY-MM-DD`, compare
//! strings) exists in exactly one place.

use crate::catalog;
use crate::errors::AppError;
use crate::models::MoodEntry;
use chrono::{DateTime, Datelike, Local, NaiveDate};
use uuid::Uuid;

/// Normalizes a timestamp to its calendar-day key, ignoring time of day.
pub fn day_key(date: &DateTime<Local>) -> String {
    date.date_naive().to_string()
}

/// Records a check-in for the current day, replacing any entry already
/// recorded today. Fails before any mutation if `emoji` is not in the
/// catalog.
pub fn upsert_today(
    entries: &mut Vec<MoodEntry>,
    emoji: &str,
    note: Option<String>,
    user_id: Option<String>,
) -> Result<MoodEntry, AppError> {
    upsert_at(Local::now(), entries, emoji, note, user_id)
}

pub fn upsert_at(
    now: DateTime<Local>,
    entries: &mut Vec<MoodEntry>,
    emoji: &str,
    note: Option<String>,
    user_id: Option<String>,
) -> Result<MoodEntry, AppError> {
    let option = catalog::lookup(emoji).ok_or_else(|| AppError::invalid_mood(emoji))?;

    let entry = MoodEntry {
        id: Uuid::new_v4().to_string(),
        date: now,
        emoji: emoji.to_string(),
        sentiment: option.sentiment,
        note,
        user_id,
    };

    // Replace semantics: drop whatever was recorded today, then insert.
    let today = day_key(&now);
    entries.retain(|existing| day_key(&existing.date) != today);
    entries.push(entry.clone());

    Ok(entry)
}

pub fn find_by_date<'a>(entries: &'a [MoodEntry], date: NaiveDate) -> Option<&'a MoodEntry> {
    let key = date.to_string();
    entries.iter().find(|entry| day_key(&entry.date) == key)
}

/// All entries falling within the given calendar month, in storage order.
pub fn find_by_month<'a>(entries: &'a [MoodEntry], year: i32, month: u32) -> Vec<&'a MoodEntry> {
    entries
        .iter()
        .filter(|entry| {
            let day = entry.date.date_naive();
            day.year() == year && day.month() == month
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(year, month, day, hour, 30, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn upsert_rejects_unknown_emoji_without_mutating() {
        let mut entries = Vec::new();
        let err = upsert_at(at(2026, 3, 10, 9), &mut entries, "🦀", None, None)
            .expect_err("catalog miss should fail");
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert!(entries.is_empty());
    }

    #[test]
    fn upsert_copies_sentiment_from_catalog() {
        let mut entries = Vec::new();
        let entry = upsert_at(at(2026, 3, 10, 9), &mut entries, "😊", None, None).unwrap();
        assert!((entry.sentiment - 0.8).abs() < 1e-9);
    }

    #[test]
    fn same_day_checkin_replaces_even_at_different_hours() {
        let mut entries = Vec::new();
        upsert_at(at(2026, 3, 10, 8), &mut entries, "😊", None, None).unwrap();
        upsert_at(at(2026, 3, 10, 22), &mut entries, "😔", Some("rough evening".into()), None)
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].emoji, "😔");
        assert_eq!(entries[0].note.as_deref(), Some("rough evening"));
    }

    #[test]
    fn different_days_accumulate() {
        let mut entries = Vec::new();
        upsert_at(at(2026, 3, 10, 9), &mut entries, "😊", None, None).unwrap();
        upsert_at(at(2026, 3, 11, 9), &mut entries, "😌", None, None).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn find_by_date_matches_day_not_time() {
        let mut entries = Vec::new();
        upsert_at(at(2026, 3, 10, 23), &mut entries, "😊", None, None).unwrap();

        let hit = find_by_date(&entries, NaiveDate::from_ymd_opt(2026, 3, 10).unwrap());
        assert_eq!(hit.map(|e| e.emoji.as_str()), Some("😊"));
        assert!(find_by_date(&entries, NaiveDate::from_ymd_opt(2026, 3, 11).unwrap()).is_none());
    }

    #[test]
    fn find_by_month_filters_by_calendar_month() {
        let mut entries = Vec::new();
        upsert_at(at(2026, 2, 28, 9), &mut entries, "😊", None, None).unwrap();
        upsert_at(at(2026, 3, 1, 9), &mut entries, "😌", None, None).unwrap();
        upsert_at(at(2026, 3, 15, 9), &mut entries, "😐", None, None).unwrap();

        let march = find_by_month(&entries, 2026, 3);
        assert_eq!(march.len(), 2);
        assert!(march.iter().all(|e| e.date.date_naive().month() == 3));
        assert_eq!(find_by_month(&entries, 2026, 2).len(), 1);
        assert!(find_by_month(&entries, 2025, 3).is_empty());
    }
}
