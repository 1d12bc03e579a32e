//! JSON error responses and the mapping from module errors to HTTP status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::journal::JournalError;
use crate::domain::missions::MissionError;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Pairs the body with a status code.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

pub fn handle_journal_error(error: JournalError) -> Response {
    let status = match &error {
        JournalError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        JournalError::NotFound(_) => StatusCode::NOT_FOUND,
        JournalError::DuplicateEntry(_) | JournalError::EditWindowClosed(_) => StatusCode::CONFLICT,
        JournalError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "journal request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let mut body = ErrorResponse::new(error.code(), error.message());
    if let JournalError::ValidationFailed { field, .. } = &error {
        body = body.with_details(serde_json::json!({ "field": field }));
    }
    body.into_response_with(status)
}

pub fn handle_mission_error(error: MissionError) -> Response {
    let status = match &error {
        MissionError::NotFound(_) => StatusCode::NOT_FOUND,
        MissionError::NoEntryForDate(_) => StatusCode::CONFLICT,
        MissionError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "mission request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    ErrorResponse::new(error.code(), error.message()).into_response_with(status)
}

pub fn handle_domain_error(error: DomainError) -> Response {
    tracing::error!(error = %error, "request failed");
    ErrorResponse::new(error.code, error.message).into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn journal_errors_map_to_statuses() {
        assert_eq!(
            handle_journal_error(JournalError::validation("content", "too long")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            handle_journal_error(JournalError::NotFound(day())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            handle_journal_error(JournalError::DuplicateEntry(day())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            handle_journal_error(JournalError::EditWindowClosed(day())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            handle_journal_error(JournalError::infrastructure("db down")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn mission_errors_map_to_statuses() {
        assert_eq!(
            handle_mission_error(MissionError::NoEntryForDate(day())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            handle_mission_error(MissionError::infrastructure("db down")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_response_uses_error_code_names() {
        let body = ErrorResponse::new(ErrorCode::DuplicateEntry, "exists");
        assert_eq!(body.code, "DUPLICATE_ENTRY");
        assert!(body.details.is_none());
    }
}
