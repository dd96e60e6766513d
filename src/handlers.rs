use crate::bot;
use crate::catalog;
use crate::errors::AppError;
use crate::models::{
    BadgeStatus, ChatRequest, ChatResponse, CheckInRequest, CheckInResponse, CommunityMood,
    LoginRequest, MonthQuery, MonthResponse, MoodEntry, ProfileResponse, StreakResponse,
    TodayResponse, User,
};
use crate::state::AppState;
use crate::storage;
use crate::streak;
use crate::store;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::Local;
use std::time::Duration;
use tracing::error;
use uuid::Uuid;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    let name = data.user.as_ref().map(|user| user.name.as_str()).unwrap_or("friend");
    Html(render_index(&today_string(), name))
}

pub async fn check_in(
    State(state): State<AppState>,
    Json(payload): Json<CheckInRequest>,
) -> Result<Json<CheckInResponse>, AppError> {
    let emoji = payload.emoji.trim();
    if emoji.is_empty() {
        return Err(AppError::bad_request("select a mood before checking in"));
    }
    let note = payload
        .note
        .map(|note| note.trim().to_string())
        .filter(|note| !note.is_empty());

    let mut data = state.data.lock().await;
    let user_id = current_user_id(&data.user);
    let entry = store::upsert_today(&mut data.entries, emoji, note.clone(), user_id)?;

    // Availability over durability: the in-memory check-in stands even if
    // the mirror write fails.
    if let Err(err) = storage::persist_entries(&state.data_dir, &data.entries).await {
        error!("mood entries not persisted: {}", err.message);
    }

    crate::community::fold(&mut data.community, emoji, note.as_deref());

    let streak = streak::current_streak(&data.entries);
    if let Some(user) = data.user.as_mut() {
        if user.streak != streak {
            user.streak = streak;
            let user = user.clone();
            if let Err(err) = storage::persist_user(&state.data_dir, &user).await {
                error!("user profile not persisted: {}", err.message);
            }
        }
    }

    let message = catalog::motivational_message(entry.sentiment).to_string();
    Ok(Json(CheckInResponse { entry, streak, message }))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<TodayResponse>, AppError> {
    let data = state.data.lock().await;
    let today = Local::now().date_naive();
    let entry = store::find_by_date(&data.entries, today).cloned();

    Ok(Json(TodayResponse {
        date: today.to_string(),
        entry,
        streak: streak::current_streak(&data.entries),
    }))
}

pub async fn get_month(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthResponse>, AppError> {
    if !(1..=12).contains(&query.month) {
        return Err(AppError::bad_request("month must be between 1 and 12"));
    }

    let data = state.data.lock().await;
    let entries: Vec<MoodEntry> = store::find_by_month(&data.entries, query.year, query.month)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(MonthResponse {
        year: query.year,
        month: query.month,
        entries,
    }))
}

pub async fn get_streak(State(state): State<AppState>) -> Result<Json<StreakResponse>, AppError> {
    let data = state.data.lock().await;
    let streak = streak::current_streak(&data.entries);

    Ok(Json(StreakResponse {
        streak,
        message: catalog::streak_message(streak),
    }))
}

pub async fn get_community(State(state): State<AppState>) -> Result<Json<CommunityMood>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(data.community.clone()))
}

pub async fn chat(
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let text = payload.text.trim();
    if text.is_empty() {
        return Err(AppError::bad_request("message must not be empty"));
    }

    // Simulated analysis round-trip; suspends only this request.
    tokio::time::sleep(Duration::from_millis(bot::RESPONSE_DELAY_MS)).await;

    let score = bot::analyze_sentiment(text);
    Ok(Json(ChatResponse {
        reply: bot::reply_for(score).to_string(),
        score,
    }))
}

pub async fn get_profile(State(state): State<AppState>) -> Result<Json<ProfileResponse>, AppError> {
    let data = state.data.lock().await;
    let badges = data
        .user
        .as_ref()
        .map(|user| user.badges.clone())
        .unwrap_or_else(catalog::initial_badges)
        .into_iter()
        .map(|badge| {
            let (current, target) = catalog::badge_progress(&badge.id);
            BadgeStatus { badge, current, target }
        })
        .collect();

    Ok(Json(ProfileResponse {
        user: data.user.clone(),
        guest: data.guest,
        badges,
    }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<User>, AppError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("name must not be empty"));
    }

    let mut data = state.data.lock().await;
    let user = User {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        streak: streak::current_streak(&data.entries),
        badges: catalog::initial_badges(),
        prefers_dark_mode: false,
    };
    data.user = Some(user.clone());
    data.guest = false;

    if let Err(err) = storage::persist_user(&state.data_dir, &user).await {
        error!("user profile not persisted: {}", err.message);
    }
    if let Err(err) = storage::set_guest_marker(&state.data_dir, false).await {
        error!("guest marker not cleared: {}", err.message);
    }

    Ok(Json(user))
}

pub async fn continue_as_guest(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    data.guest = true;

    if let Err(err) = storage::set_guest_marker(&state.data_dir, true).await {
        error!("guest marker not persisted: {}", err.message);
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn logout(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    data.user = None;
    data.guest = false;

    if let Err(err) = storage::remove_user(&state.data_dir).await {
        error!("user profile not removed: {}", err.message);
    }
    if let Err(err) = storage::set_guest_marker(&state.data_dir, false).await {
        error!("guest marker not cleared: {}", err.message);
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Bulk "clear my data" action: entries go, the profile stays but its streak
/// and badges reset.
pub async fn reset_data(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    data.entries.clear();

    if let Err(err) = storage::clear_entries(&state.data_dir).await {
        error!("persisted entries not cleared: {}", err.message);
    }

    if let Some(user) = data.user.as_mut() {
        user.streak = 0;
        user.badges = catalog::initial_badges();
        let user = user.clone();
        if let Err(err) = storage::persist_user(&state.data_dir, &user).await {
            error!("user profile not persisted: {}", err.message);
        }
    }

    Ok(StatusCode::NO_CONTENT)
}

fn current_user_id(user: &Option<User>) -> Option<String> {
    user.as_ref().map(|user| user.id.clone())
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
