//! In-memory JournalRepository.
//!
//! Used when no database is configured, and in tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, EntryId, ErrorCode, UserId};
use crate::domain::journal::JournalEntry;
use crate::ports::JournalRepository;

/// In-memory storage for journal entries, keyed by (user, date).
#[derive(Debug, Clone, Default)]
pub struct InMemoryJournalRepository {
    entries: Arc<RwLock<HashMap<(UserId, NaiveDate), JournalEntry>>>,
}

impl InMemoryJournalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries (useful for tests)
    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl JournalRepository for InMemoryJournalRepository {
    async fn save(&self, entry: &JournalEntry) -> Result<(), DomainError> {
        let key = (entry.user_id().clone(), entry.date());
        let mut entries = self.entries.write().await;
        if entries.contains_key(&key) {
            return Err(DomainError::new(
                ErrorCode::DuplicateEntry,
                format!("Entry already exists for {}", entry.date()),
            )
            .with_detail("date", entry.date().to_string()));
        }
        entries.insert(key, entry.clone());
        Ok(())
    }

    async fn update(&self, entry: &JournalEntry) -> Result<(), DomainError> {
        let key = (entry.user_id().clone(), entry.date());
        let mut entries = self.entries.write().await;
        match entries.get_mut(&key) {
            Some(existing) if existing.id() == entry.id() => {
                *existing = entry.clone();
                Ok(())
            }
            _ => Err(DomainError::new(
                ErrorCode::EntryNotFound,
                format!("Entry not found: {}", entry.id()),
            )
            .with_detail("date", entry.date().to_string())),
        }
    }

    async fn find_by_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<JournalEntry>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.get(&(user_id.clone(), date)).cloned())
    }

    async fn find_by_id(&self, id: &EntryId) -> Result<Option<JournalEntry>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.values().find(|e| e.id() == id).cloned())
    }

    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<JournalEntry>, DomainError> {
        let entries = self.entries.read().await;
        let mut mine: Vec<JournalEntry> = entries
            .values()
            .filter(|e| e.user_id() == user_id)
            .cloned()
            .collect();
        mine.sort_by_key(|e| std::cmp::Reverse(e.date()));
        mine.truncate(limit as usize);
        Ok(mine)
    }
}
