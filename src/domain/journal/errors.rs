//! Journal-specific error types.

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Journal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalError {
    /// Entry content or metrics failed validation.
    ValidationFailed { field: String, message: String },
    /// An entry already exists for this date.
    DuplicateEntry(NaiveDate),
    /// No entry exists for this date.
    NotFound(NaiveDate),
    /// The entry's day is over and it can no longer be revised.
    EditWindowClosed(NaiveDate),
    /// Infrastructure error.
    Infrastructure(String),
}

impl JournalError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        JournalError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn duplicate(date: NaiveDate) -> Self {
        JournalError::DuplicateEntry(date)
    }
    pub fn not_found(date: NaiveDate) -> Self {
        JournalError::NotFound(date)
    }
    pub fn edit_window_closed(date: NaiveDate) -> Self {
        JournalError::EditWindowClosed(date)
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        JournalError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            JournalError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            JournalError::DuplicateEntry(_) => ErrorCode::DuplicateEntry,
            JournalError::NotFound(_) => ErrorCode::EntryNotFound,
            JournalError::EditWindowClosed(_) => ErrorCode::EditWindowClosed,
            JournalError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            JournalError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            JournalError::DuplicateEntry(date) => {
                format!("A journal entry already exists for {}", date)
            }
            JournalError::NotFound(date) => format!("No journal entry for {}", date),
            JournalError::EditWindowClosed(date) => {
                format!("Entry for {} can no longer be edited", date)
            }
            JournalError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for JournalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for JournalError {}

impl From<DomainError> for JournalError {
    fn from(err: DomainError) -> Self {
        let date = err.detail("date").and_then(|d| d.parse::<NaiveDate>().ok());
        match (err.code, date) {
            (ErrorCode::ValidationFailed, _) => JournalError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            (ErrorCode::DuplicateEntry, Some(date)) => JournalError::DuplicateEntry(date),
            (ErrorCode::EntryNotFound, Some(date)) => JournalError::NotFound(date),
            (ErrorCode::EditWindowClosed, Some(date)) => JournalError::EditWindowClosed(date),
            _ => JournalError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn codes_match_variants() {
        assert_eq!(JournalError::duplicate(day()).code(), ErrorCode::DuplicateEntry);
        assert_eq!(JournalError::not_found(day()).code(), ErrorCode::EntryNotFound);
        assert_eq!(
            JournalError::edit_window_closed(day()).code(),
            ErrorCode::EditWindowClosed
        );
    }

    #[test]
    fn validation_domain_error_keeps_field() {
        let err: JournalError = DomainError::validation("content", "too long").into();
        assert_eq!(err, JournalError::validation("content", "too long"));
    }

    #[test]
    fn dated_domain_error_maps_to_variant() {
        let err = DomainError::new(ErrorCode::EditWindowClosed, "closed")
            .with_detail("date", "2025-01-15");
        assert_eq!(JournalError::from(err), JournalError::EditWindowClosed(day()));
    }

    #[test]
    fn database_error_becomes_infrastructure() {
        let err: JournalError = DomainError::database("connection reset").into();
        assert!(matches!(err, JournalError::Infrastructure(_)));
    }
}
