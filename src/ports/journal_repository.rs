//! Journal repository port.
//!
//! Defines the contract for persisting and retrieving journal entries.
//! One entry per user per calendar date.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, EntryId, UserId};
use crate::domain::journal::JournalEntry;

/// Repository port for JournalEntry persistence.
#[async_trait]
pub trait JournalRepository: Send + Sync {
    /// Save a new entry.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntry` (with a `date` detail) if the user already has an
    ///   entry for that date
    /// - `DatabaseError` on persistence failure
    async fn save(&self, entry: &JournalEntry) -> Result<(), DomainError>;

    /// Update an existing entry.
    ///
    /// # Errors
    ///
    /// - `EntryNotFound` if the entry doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, entry: &JournalEntry) -> Result<(), DomainError>;

    /// Find the user's entry for a date.
    async fn find_by_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<JournalEntry>, DomainError>;

    /// Find an entry by its ID.
    async fn find_by_id(&self, id: &EntryId) -> Result<Option<JournalEntry>, DomainError>;

    /// Most recent entries first, at most `limit`.
    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<JournalEntry>, DomainError>;
}
