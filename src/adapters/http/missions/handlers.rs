//! HTTP handlers for mission endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::dates::parse_date_param;
use crate::adapters::http::error::{handle_mission_error, ErrorResponse};
use crate::adapters::http::state::AppState;
use crate::application::{CompleteMissionCommand, GenerateMissionsCommand, ListMissionsQuery};
use crate::domain::foundation::MissionId;

use super::dto::{
    CompleteMissionResponse, GenerateMissionsResponse, ListMissionsParams, MissionListResponse,
};

/// POST /api/missions/generate - Today's missions, created on first call
pub async fn generate_missions(State(state): State<AppState>) -> Response {
    let cmd = GenerateMissionsCommand {
        user_id: state.user_id.clone(),
        date: state.today(),
    };

    match state.generate_missions.handle(cmd).await {
        Ok(result) => {
            let status = if result.created {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            let response = GenerateMissionsResponse {
                created: result.created,
                list: result.missions.into(),
            };
            (status, Json(response)).into_response()
        }
        Err(e) => handle_mission_error(e),
    }
}

/// GET /api/missions?date= - Missions for a date
pub async fn list_missions(
    State(state): State<AppState>,
    Query(params): Query<ListMissionsParams>,
) -> Response {
    let today = state.today();
    let date = match params.date.as_deref() {
        None => today,
        Some(raw) => match parse_date_param(raw, today) {
            Some(date) => date,
            None => {
                return ErrorResponse::bad_request(format!("Invalid date '{}'", raw))
                    .into_response_with(StatusCode::BAD_REQUEST)
            }
        },
    };
    let query = ListMissionsQuery {
        user_id: state.user_id.clone(),
        date,
    };

    match state.list_missions.handle(query).await {
        Ok(missions) => {
            (StatusCode::OK, Json(MissionListResponse::from(missions))).into_response()
        }
        Err(e) => handle_mission_error(e),
    }
}

/// POST /api/missions/:id/complete - Mark a mission in today's set done
pub async fn complete_mission(State(state): State<AppState>, Path(raw): Path<String>) -> Response {
    let mission_id = match raw.parse::<MissionId>() {
        Ok(id) => id,
        Err(_) => {
            return ErrorResponse::bad_request("Invalid mission ID")
                .into_response_with(StatusCode::BAD_REQUEST)
        }
    };
    let cmd = CompleteMissionCommand {
        user_id: state.user_id.clone(),
        mission_id,
        today: state.today(),
    };

    match state.complete_mission.handle(cmd).await {
        Ok(result) => {
            let response = CompleteMissionResponse {
                mission: result.mission,
                outcome: result.outcome,
                stats: result.stats,
                progress: result.progress,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_mission_error(e),
    }
}
