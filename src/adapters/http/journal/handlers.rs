//! HTTP handlers for journal endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::dates::parse_date_param;
use crate::adapters::http::error::{handle_journal_error, ErrorResponse};
use crate::adapters::http::state::AppState;
use crate::application::{GetEntryQuery, ListEntriesQuery, ReviseEntryCommand, SubmitEntryCommand};

use super::dto::{
    EntryListResponse, EntryRequest, EntryResponse, ListEntriesParams, DEFAULT_LIST_LIMIT,
};

fn invalid_date(raw: &str) -> Response {
    ErrorResponse::bad_request(format!("Invalid date '{}', expected YYYY-MM-DD or 'today'", raw))
        .into_response_with(StatusCode::BAD_REQUEST)
}

/// POST /api/entries - Submit today's entry
pub async fn submit_entry(State(state): State<AppState>, Json(req): Json<EntryRequest>) -> Response {
    let cmd = SubmitEntryCommand {
        user_id: state.user_id.clone(),
        date: state.today(),
        content: req.content,
        mood: req.mood,
        metrics: req.metrics,
    };

    match state.submit_entry.handle(cmd).await {
        Ok(result) => {
            let response = EntryResponse {
                entry: result.entry,
                stats: result.stats,
                previous_stats: Some(result.previous_stats),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_journal_error(e),
    }
}

/// GET /api/entries - Most recent entries, newest first
pub async fn list_entries(
    State(state): State<AppState>,
    Query(params): Query<ListEntriesParams>,
) -> Response {
    let query = ListEntriesQuery {
        user_id: state.user_id.clone(),
        limit: params.limit.unwrap_or(DEFAULT_LIST_LIMIT),
    };

    match state.get_entry.list(query).await {
        Ok(items) => (StatusCode::OK, Json(EntryListResponse { items })).into_response(),
        Err(e) => handle_journal_error(e),
    }
}

/// GET /api/entries/:date - One entry
pub async fn get_entry(State(state): State<AppState>, Path(raw): Path<String>) -> Response {
    let Some(date) = parse_date_param(&raw, state.today()) else {
        return invalid_date(&raw);
    };
    let query = GetEntryQuery {
        user_id: state.user_id.clone(),
        date,
    };

    match state.get_entry.handle(query).await {
        Ok(entry) => (StatusCode::OK, Json(entry)).into_response(),
        Err(e) => handle_journal_error(e),
    }
}

/// PUT /api/entries/:date - Revise an entry; only today's can change
pub async fn revise_entry(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Json(req): Json<EntryRequest>,
) -> Response {
    let today = state.today();
    let Some(date) = parse_date_param(&raw, today) else {
        return invalid_date(&raw);
    };
    let cmd = ReviseEntryCommand {
        user_id: state.user_id.clone(),
        date,
        today,
        content: req.content,
        mood: req.mood,
        metrics: req.metrics,
    };

    match state.revise_entry.handle(cmd).await {
        Ok(result) => {
            let response = EntryResponse {
                entry: result.entry,
                stats: result.stats,
                previous_stats: None,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_journal_error(e),
    }
}
