//! Integration tests for the HTTP API.
//!
//! Requests go through the full router over the in-memory Entry Store, with
//! the calendar pinned so dates are predictable.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt; // for oneshot

use soulsync::adapters::ai::MockAIProvider;
use soulsync::adapters::http::{api_router, AppState, Repositories};
use soulsync::application::{ChatAdvisor, ChatSettings};
use soulsync::domain::foundation::UserId;
use soulsync::domain::missions::MissionGenerator;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

fn state_with(advisor: ChatAdvisor) -> AppState {
    AppState::new(
        Repositories::in_memory(),
        advisor,
        MissionGenerator::default(),
        UserId::new("student").unwrap(),
        30,
    )
    .with_today(today())
}

fn app() -> Router {
    api_router(state_with(ChatAdvisor::fallback_only()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

// =============================================================================
// Journal
// =============================================================================

#[tokio::test]
async fn submit_entry_returns_created_with_updated_stats() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/entries",
        Some(json!({ "content": "skipped workout", "mood": "tired" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["entry"]["date"], "2025-01-15");
    assert_eq!(body["previous_stats"]["discipline"], 50);
    assert_eq!(body["stats"]["discipline"], 45);
    assert_eq!(body["stats"]["wellbeing"], 47);
    assert_eq!(body["stats"]["focus"], 50);
}

#[tokio::test]
async fn second_entry_on_same_day_conflicts() {
    let app = app();
    send(&app, "POST", "/api/entries", Some(json!({ "content": "first" }))).await;

    let (status, body) =
        send(&app, "POST", "/api/entries", Some(json!({ "content": "second" }))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "DUPLICATE_ENTRY");
}

#[tokio::test]
async fn blank_entry_without_mood_is_rejected() {
    let app = app();

    let (status, body) = send(&app, "POST", "/api/entries", Some(json!({ "content": "  " }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "content");
}

#[tokio::test]
async fn entry_can_be_read_by_date_or_today() {
    let app = app();
    send(&app, "POST", "/api/entries", Some(json!({ "content": "studied" }))).await;

    let (status, by_date) = send(&app, "GET", "/api/entries/2025-01-15", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_date["content"], "studied");

    let (status, by_today) = send(&app, "GET", "/api/entries/today", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_today, by_date);

    let (status, _) = send(&app, "GET", "/api/entries/2025-01-14", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/api/entries/yesterday-ish", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn revise_today_recomputes_stats() {
    let app = app();
    send(&app, "POST", "/api/entries", Some(json!({ "content": "skipped workout" }))).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/entries/today",
        Some(json!({ "content": "did my workout" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entry"]["content"], "did my workout");
    assert_eq!(body["stats"]["discipline"], 54);

    let (_, list) = send(&app, "GET", "/api/entries", None).await;
    assert_eq!(list["items"].as_array().unwrap().len(), 1);
}

// =============================================================================
// Missions
// =============================================================================

#[tokio::test]
async fn generate_requires_todays_entry() {
    let app = app();

    let (status, body) = send(&app, "POST", "/api/missions/generate", None).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["message"].as_str().unwrap().contains("2025-01-15"));
}

#[tokio::test]
async fn mission_flow_generates_completes_and_lists() {
    let app = app();
    send(
        &app,
        "POST",
        "/api/entries",
        Some(json!({ "content": "skipped workout, missed the gym" })),
    )
    .await;

    let (status, generated) = send(&app, "POST", "/api/missions/generate", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(generated["created"], true);
    assert_eq!(generated["total_count"], 3);
    assert_eq!(generated["missions"][0]["target_stat"], "discipline");
    assert_eq!(generated["missions"][0]["description"], "Do a 10-minute workout");

    let (status, again) = send(&app, "POST", "/api/missions/generate", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(again["missions"], generated["missions"]);

    let id = generated["missions"][0]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/missions/{}/complete", id);

    let (status, completed) = send(&app, "POST", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(completed["outcome"], "completed");
    assert_eq!(completed["mission"]["status"], "completed");
    assert_eq!(completed["stats"]["discipline"], 42);
    assert_eq!(completed["progress"]["level"], 1);
    assert_eq!(completed["progress"]["xp"], 15);

    let (status, repeat) = send(&app, "POST", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(repeat["outcome"], "already_completed");
    assert_eq!(repeat["stats"]["discipline"], 42);
    assert_eq!(repeat["progress"]["xp"], 15);

    let (_, dashboard) = send(&app, "GET", "/api/dashboard", None).await;
    assert_eq!(dashboard["progress"]["level"], 1);
    assert_eq!(dashboard["progress"]["xp"], 15);

    let (status, listed) = send(&app, "GET", "/api/missions?date=2025-01-15", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["completed_count"], 1);
    assert_eq!(listed["total_count"], 3);
}

#[tokio::test]
async fn completing_unknown_mission_is_not_found() {
    let app = app();

    let uri = format!("/api/missions/{}/complete", uuid::Uuid::new_v4());
    let (status, _) = send(&app, "POST", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "POST", "/api/missions/not-a-uuid/complete", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Stats and dashboard
// =============================================================================

#[tokio::test]
async fn stats_default_before_any_entry() {
    let app = app();

    let (status, body) = send(&app, "GET", "/api/stats", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current"]["social"], 50);
    assert_eq!(body["progress"]["level"], 1);
    assert_eq!(body["progress"]["xp"], 0);
    assert_eq!(body["history"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn dashboard_reflects_todays_progress() {
    let app = app();
    send(&app, "POST", "/api/entries", Some(json!({ "content": "went to the gym" }))).await;
    send(&app, "POST", "/api/missions/generate", None).await;

    let (status, body) = send(&app, "GET", "/api/dashboard", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2025-01-15");
    assert_eq!(body["stats"]["discipline"], 54);
    assert_eq!(body["total_count"], 3);
    assert_eq!(body["completed_count"], 0);
    assert_eq!(body["streak"], 0);
    assert_eq!(body["progress"]["level"], 1);
    assert_eq!(body["progress"]["xp"], 0);
    assert_eq!(body["ai_mode"], "fallback");
}

// =============================================================================
// Chat and health
// =============================================================================

#[tokio::test]
async fn chat_without_provider_uses_fallback() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/chat",
        Some(json!({ "prompt": "how do I start studying?" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"]["source"], "fallback");
    assert!(!body["response"]["text"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn chat_with_provider_returns_ai_reply() {
    let mock = MockAIProvider::new().with_response("Start with one pomodoro.");
    let advisor = ChatAdvisor::new(Some(Arc::new(mock)), ChatSettings::default());
    let app = api_router(state_with(advisor));

    let (status, body) = send(
        &app,
        "POST",
        "/api/chat",
        Some(json!({ "prompt": "how do I start?", "mode": "help_me_plan" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mode"], "help_me_plan");
    assert_eq!(body["response"]["source"], "ai");
    assert_eq!(body["response"]["text"], "Start with one pomodoro.");
}

#[tokio::test]
async fn blank_chat_prompt_is_rejected() {
    let app = app();

    let (status, _) = send(&app, "POST", "/api/chat", Some(json!({ "prompt": "   " }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_ai_mode() {
    let app = app();

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["ai_mode"], "fallback");
}
