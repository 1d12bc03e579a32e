//! Read-only endpoints: stats, dashboard and health.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::adapters::http::error::handle_domain_error;
use crate::adapters::http::state::AppState;
use crate::application::{GetDashboardQuery, GetStatsQuery};
use crate::domain::chat::ChatSource;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub ai_mode: ChatSource,
}

/// GET /api/stats - Current stats and recent history
pub async fn get_stats(State(state): State<AppState>) -> Response {
    let query = GetStatsQuery {
        user_id: state.user_id.clone(),
        history_limit: state.history_days,
    };

    match state.get_stats.handle(query).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/dashboard - Today's overview
pub async fn get_dashboard(State(state): State<AppState>) -> Response {
    let query = GetDashboardQuery {
        user_id: state.user_id.clone(),
        date: state.today(),
    };

    match state.get_dashboard.handle(query).await {
        Ok(overview) => (StatusCode::OK, Json(overview)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        ai_mode: state.chat.mode(),
    })
}
