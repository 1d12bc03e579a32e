//! Journal queries: one entry by date, or the most recent entries.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::UserId;
use crate::domain::journal::{JournalEntry, JournalError};
use crate::ports::JournalRepository;

/// Query for the entry on a given date.
#[derive(Debug, Clone)]
pub struct GetEntryQuery {
    pub user_id: UserId,
    pub date: NaiveDate,
}

/// Query for the latest entries, newest first.
#[derive(Debug, Clone)]
pub struct ListEntriesQuery {
    pub user_id: UserId,
    pub limit: u32,
}

pub struct GetEntryHandler {
    journal: Arc<dyn JournalRepository>,
}

impl GetEntryHandler {
    pub fn new(journal: Arc<dyn JournalRepository>) -> Self {
        Self { journal }
    }

    pub async fn handle(&self, query: GetEntryQuery) -> Result<JournalEntry, JournalError> {
        self.journal
            .find_by_date(&query.user_id, query.date)
            .await?
            .ok_or(JournalError::NotFound(query.date))
    }

    pub async fn list(&self, query: ListEntriesQuery) -> Result<Vec<JournalEntry>, JournalError> {
        Ok(self.journal.list_recent(&query.user_id, query.limit).await?)
    }
}
