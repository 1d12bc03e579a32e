//! Route table for the HTTP API.

use axum::{
    routing::{get, post},
    Router,
};

use super::chat::chat;
use super::journal::{get_entry, list_entries, revise_entry, submit_entry};
use super::missions::{complete_mission, generate_missions, list_missions};
use super::overview::{get_dashboard, get_stats, health};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/entries", post(submit_entry).get(list_entries))
        .route("/api/entries/:date", get(get_entry).put(revise_entry))
        .route("/api/stats", get(get_stats))
        .route("/api/missions", get(list_missions))
        .route("/api/missions/generate", post(generate_missions))
        .route("/api/missions/:id/complete", post(complete_mission))
        .route("/api/chat", post(chat))
        .route("/api/dashboard", get(get_dashboard))
        .with_state(state)
}
