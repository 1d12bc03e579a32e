//! Mission-specific error types.

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, ErrorCode, MissionId};

/// Mission-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissionError {
    /// No such mission in today's set.
    NotFound(MissionId),
    /// Missions need a journal entry for the date.
    NoEntryForDate(NaiveDate),
    /// Infrastructure error.
    Infrastructure(String),
}

impl MissionError {
    pub fn not_found(id: MissionId) -> Self {
        MissionError::NotFound(id)
    }
    pub fn no_entry_for_date(date: NaiveDate) -> Self {
        MissionError::NoEntryForDate(date)
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        MissionError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            MissionError::NotFound(_) => ErrorCode::MissionNotFound,
            MissionError::NoEntryForDate(_) => ErrorCode::EntryNotFound,
            MissionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            MissionError::NotFound(id) => format!("Mission not found: {}", id),
            MissionError::NoEntryForDate(date) => {
                format!("Write a journal entry for {} before generating missions", date)
            }
            MissionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for MissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MissionError {}

impl From<DomainError> for MissionError {
    fn from(err: DomainError) -> Self {
        MissionError::Infrastructure(err.to_string())
    }
}
