use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/checkin", post(handlers::check_in))
        .route("/api/today", get(handlers::get_today))
        .route("/api/month", get(handlers::get_month))
        .route("/api/streak", get(handlers::get_streak))
        .route("/api/community", get(handlers::get_community))
        .route("/api/chat", post(handlers::chat))
        .route("/api/profile", get(handlers::get_profile))
        .route("/api/login", post(handlers::login))
        .route("/api/guest", post(handlers::continue_as_guest))
        .route("/api/logout", post(handlers::logout))
        .route("/api/reset", post(handlers::reset_data))
        .with_state(state)
}
