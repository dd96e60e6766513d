use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One mood check-in. The collection holds at most one entry per calendar
/// day; `sentiment` is copied from the catalog when the entry is created and
/// never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: String,
    pub date: DateTime<Local>,
    pub emoji: String,
    pub sentiment: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub earned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earned_at: Option<DateTime<Local>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub streak: u32,
    pub badges: Vec<Badge>,
    pub prefers_dark_mode: bool,
}

/// Simulated cross-user rollup. `average_sentiment` is the true running mean
/// of every sentiment folded in so far; `quotes` keeps the 10 most recent
/// substantial notes, oldest evicted first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityMood {
    pub date: DateTime<Local>,
    pub mood_counts: BTreeMap<String, u64>,
    pub average_sentiment: f64,
    pub total_entries: u64,
    pub quotes: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CheckInRequest {
    pub emoji: String,
    pub note: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckInResponse {
    pub entry: MoodEntry,
    pub streak: u32,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayResponse {
    pub date: String,
    pub entry: Option<MoodEntry>,
    pub streak: u32,
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MonthResponse {
    pub year: i32,
    pub month: u32,
    pub entries: Vec<MoodEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StreakResponse {
    pub streak: u32,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub score: f64,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeStatus {
    #[serde(flatten)]
    pub badge: Badge,
    pub current: u32,
    pub target: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: Option<User>,
    pub guest: bool,
    pub badges: Vec<BadgeStatus>,
}
