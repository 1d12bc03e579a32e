//! PostgreSQL implementation of JournalRepository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, EntryId, ErrorCode, Timestamp, UserId};
use crate::domain::journal::{DailyMetrics, JournalEntry, Mood};
use crate::ports::JournalRepository;

/// PostgreSQL implementation of JournalRepository.
#[derive(Clone)]
pub struct PostgresJournalRepository {
    pool: PgPool,
}

impl PostgresJournalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, user_id, entry_date, content, mood,
           sleep_hours, study_minutes, movement_minutes,
           created_at, updated_at
    FROM journal_entries
"#;

#[async_trait]
impl JournalRepository for PostgresJournalRepository {
    async fn save(&self, entry: &JournalEntry) -> Result<(), DomainError> {
        let metrics = entry.metrics();
        sqlx::query(
            r#"
            INSERT INTO journal_entries (
                id, user_id, entry_date, content, mood,
                sleep_hours, study_minutes, movement_minutes,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(entry.id().as_uuid())
        .bind(entry.user_id().as_str())
        .bind(entry.date())
        .bind(entry.content())
        .bind(entry.mood().map(|m| m.as_str()))
        .bind(metrics.sleep_hours)
        .bind(metrics.study_minutes.map(|m| m as i32))
        .bind(metrics.movement_minutes.map(|m| m as i32))
        .bind(entry.created_at().as_datetime())
        .bind(entry.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::new(
                ErrorCode::DuplicateEntry,
                format!("Entry already exists for {}", entry.date()),
            )
            .with_detail("date", entry.date().to_string()),
            _ => DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert journal entry: {}", e),
            ),
        })?;

        Ok(())
    }

    async fn update(&self, entry: &JournalEntry) -> Result<(), DomainError> {
        let metrics = entry.metrics();
        let result = sqlx::query(
            r#"
            UPDATE journal_entries SET
                content = $2,
                mood = $3,
                sleep_hours = $4,
                study_minutes = $5,
                movement_minutes = $6,
                updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(entry.id().as_uuid())
        .bind(entry.content())
        .bind(entry.mood().map(|m| m.as_str()))
        .bind(metrics.sleep_hours)
        .bind(metrics.study_minutes.map(|m| m as i32))
        .bind(metrics.movement_minutes.map(|m| m as i32))
        .bind(entry.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update journal entry: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::EntryNotFound,
                format!("Entry not found: {}", entry.id()),
            )
            .with_detail("date", entry.date().to_string()));
        }

        Ok(())
    }

    async fn find_by_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<JournalEntry>, DomainError> {
        let row = sqlx::query_as::<_, EntryRow>(&format!(
            "{} WHERE user_id = $1 AND entry_date = $2",
            SELECT_COLUMNS
        ))
        .bind(user_id.as_str())
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch journal entry: {}", e),
            )
        })?;

        row.map(EntryRow::into_entry).transpose()
    }

    async fn find_by_id(&self, id: &EntryId) -> Result<Option<JournalEntry>, DomainError> {
        let row = sqlx::query_as::<_, EntryRow>(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch journal entry: {}", e),
                )
            })?;

        row.map(EntryRow::into_entry).transpose()
    }

    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<JournalEntry>, DomainError> {
        let rows = sqlx::query_as::<_, EntryRow>(&format!(
            "{} WHERE user_id = $1 ORDER BY entry_date DESC LIMIT $2",
            SELECT_COLUMNS
        ))
        .bind(user_id.as_str())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list journal entries: {}", e),
            )
        })?;

        rows.into_iter().map(EntryRow::into_entry).collect()
    }
}

/// Internal row type for sqlx query mapping.
#[derive(Debug, sqlx::FromRow)]
struct EntryRow {
    id: uuid::Uuid,
    user_id: String,
    entry_date: NaiveDate,
    content: String,
    mood: Option<String>,
    sleep_hours: Option<f32>,
    study_minutes: Option<i32>,
    movement_minutes: Option<i32>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl EntryRow {
    fn into_entry(self) -> Result<JournalEntry, DomainError> {
        let user_id = UserId::new(self.user_id).map_err(|e| {
            DomainError::new(ErrorCode::InvalidFormat, format!("Invalid user_id: {}", e))
        })?;
        let mood = self
            .mood
            .as_deref()
            .map(str::parse::<Mood>)
            .transpose()
            .map_err(|e| DomainError::new(ErrorCode::InvalidFormat, format!("Invalid mood: {}", e)))?;

        Ok(JournalEntry::reconstitute(
            EntryId::from_uuid(self.id),
            user_id,
            self.entry_date,
            self.content,
            mood,
            DailyMetrics {
                sleep_hours: self.sleep_hours,
                study_minutes: self.study_minutes.map(|m| m.max(0) as u32),
                movement_minutes: self.movement_minutes.map(|m| m.max(0) as u32),
            },
            Timestamp::from_datetime(self.created_at),
            Timestamp::from_datetime(self.updated_at),
        ))
    }
}
