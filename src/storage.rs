//! Durable mirror of the session state: JSON files in a local data
//! directory, one file per storage key (`moodEntries`, `snugUser`, plus the
//! `snugGuest` presence marker).
//!
//! Reads are lenient: a missing file is an empty state, and a malformed
//! persisted entry is dropped individually rather than aborting the restore.
//! Write failures are reported to the caller, which logs and carries on with
//! the in-memory state.

use crate::errors::AppError;
use crate::models::{MoodEntry, User};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, warn};

pub fn resolve_data_dir() -> Result<PathBuf, std::io::Error> {
    if let Ok(dir) = env::var("SNUG_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }

    Ok(PathBuf::from("data"))
}

pub fn entries_path(data_dir: &Path) -> PathBuf {
    data_dir.join("moodEntries.json")
}

pub fn user_path(data_dir: &Path) -> PathBuf {
    data_dir.join("snugUser.json")
}

pub fn guest_marker_path(data_dir: &Path) -> PathBuf {
    data_dir.join("snugGuest")
}

/// Restores the persisted entry collection. Entries that fail to parse are
/// dropped one by one; the rest of the collection survives.
pub async fn load_entries(data_dir: &Path) -> Vec<MoodEntry> {
    let path = entries_path(data_dir);
    let bytes = match fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(err) => {
            error!("failed to read {}: {err}", path.display());
            return Vec::new();
        }
    };

    let raw: Vec<serde_json::Value> = match serde_json::from_slice(&bytes) {
        Ok(raw) => raw,
        Err(err) => {
            error!("failed to parse {}: {err}", path.display());
            return Vec::new();
        }
    };

    let mut entries = Vec::with_capacity(raw.len());
    for value in raw {
        match serde_json::from_value::<MoodEntry>(value) {
            Ok(entry) => entries.push(entry),
            Err(err) => warn!("dropping malformed mood entry: {err}"),
        }
    }
    entries
}

pub async fn persist_entries(data_dir: &Path, entries: &[MoodEntry]) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(entries).map_err(AppError::internal)?;
    fs::write(entries_path(data_dir), payload).await?;
    Ok(())
}

pub async fn clear_entries(data_dir: &Path) -> Result<(), AppError> {
    match fs::remove_file(entries_path(data_dir)).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

pub async fn load_user(data_dir: &Path) -> Option<User> {
    let path = user_path(data_dir);
    match fs::read(&path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!("dropping malformed user profile: {err}");
                None
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => {
            error!("failed to read {}: {err}", path.display());
            None
        }
    }
}

pub async fn persist_user(data_dir: &Path, user: &User) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(user).map_err(AppError::internal)?;
    fs::write(user_path(data_dir), payload).await?;
    Ok(())
}

pub async fn remove_user(data_dir: &Path) -> Result<(), AppError> {
    match fs::remove_file(user_path(data_dir)).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

pub async fn load_guest_marker(data_dir: &Path) -> bool {
    fs::metadata(guest_marker_path(data_dir)).await.is_ok()
}

pub async fn set_guest_marker(data_dir: &Path, guest: bool) -> Result<(), AppError> {
    let path = guest_marker_path(data_dir);
    if guest {
        fs::write(path, b"true").await?;
        return Ok(());
    }
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store;

    fn temp_dir(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("snug_{tag}_{}_{nanos}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn entries_round_trip_preserves_day_and_fields() {
        let dir = temp_dir("roundtrip");
        let mut entries = Vec::new();
        store::upsert_today(&mut entries, "😊", Some("good day".into()), Some("u-1".into()))
            .unwrap();

        persist_entries(&dir, &entries).await.unwrap();
        let restored = load_entries(&dir).await;

        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0].emoji, entries[0].emoji);
        assert_eq!(restored[0].note, entries[0].note);
        assert_eq!(restored[0].user_id, entries[0].user_id);
        assert_eq!(restored[0].date.date_naive(), entries[0].date.date_naive());
    }

    #[tokio::test]
    async fn malformed_entries_are_dropped_individually() {
        let dir = temp_dir("lenient");
        let payload = r#"[
            {"id":"a","date":"2026-03-10T09:00:00+00:00","emoji":"😊","sentiment":0.8},
            {"id":"b","date":"not a date","emoji":"😔","sentiment":-0.7},
            {"bogus":true}
        ]"#;
        std::fs::write(entries_path(&dir), payload).unwrap();

        let restored = load_entries(&dir).await;
        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0].id, "a");
    }

    #[tokio::test]
    async fn missing_files_read_as_empty_state() {
        let dir = temp_dir("missing");
        assert!(load_entries(&dir).await.is_empty());
        assert!(load_user(&dir).await.is_none());
        assert!(!load_guest_marker(&dir).await);
    }

    #[tokio::test]
    async fn guest_marker_toggles() {
        let dir = temp_dir("guest");
        set_guest_marker(&dir, true).await.unwrap();
        assert!(load_guest_marker(&dir).await);
        set_guest_marker(&dir, false).await.unwrap();
        assert!(!load_guest_marker(&dir).await);
    }
}
