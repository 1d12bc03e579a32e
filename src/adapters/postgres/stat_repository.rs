//! PostgreSQL implementation of StatRepository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, Score, Timestamp, UserId};
use crate::domain::progress::Progress;
use crate::domain::stats::{StatSet, StatSnapshot};
use crate::ports::StatRepository;

/// PostgreSQL implementation of StatRepository.
#[derive(Clone)]
pub struct PostgresStatRepository {
    pool: PgPool,
}

impl PostgresStatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatRepository for PostgresStatRepository {
    async fn save_snapshot(&self, snapshot: &StatSnapshot) -> Result<(), DomainError> {
        let stats = &snapshot.stats;
        sqlx::query(
            r#"
            INSERT INTO stat_snapshots (
                user_id, snapshot_date, discipline, wellbeing, focus,
                knowledge, social, level, xp, recorded_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (user_id, snapshot_date) DO UPDATE SET
                discipline = EXCLUDED.discipline,
                wellbeing = EXCLUDED.wellbeing,
                focus = EXCLUDED.focus,
                knowledge = EXCLUDED.knowledge,
                social = EXCLUDED.social,
                level = EXCLUDED.level,
                xp = EXCLUDED.xp,
                recorded_at = EXCLUDED.recorded_at
            "#,
        )
        .bind(snapshot.user_id.as_str())
        .bind(snapshot.date)
        .bind(i16::from(stats.discipline.value()))
        .bind(i16::from(stats.wellbeing.value()))
        .bind(i16::from(stats.focus.value()))
        .bind(i16::from(stats.knowledge.value()))
        .bind(i16::from(stats.social.value()))
        .bind(i32::try_from(snapshot.progress.level).unwrap_or(i32::MAX))
        .bind(i32::try_from(snapshot.progress.xp).unwrap_or(i32::MAX))
        .bind(snapshot.recorded_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to save stat snapshot: {}", e),
            )
        })?;

        Ok(())
    }

    async fn latest(&self, user_id: &UserId) -> Result<Option<StatSnapshot>, DomainError> {
        let row = sqlx::query_as::<_, SnapshotRow>(
            r#"
            SELECT user_id, snapshot_date, discipline, wellbeing, focus,
                   knowledge, social, level, xp, recorded_at
            FROM stat_snapshots
            WHERE user_id = $1
            ORDER BY snapshot_date DESC
            LIMIT 1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch latest stats: {}", e),
            )
        })?;

        row.map(SnapshotRow::into_snapshot).transpose()
    }

    async fn snapshot_before(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<StatSnapshot>, DomainError> {
        let row = sqlx::query_as::<_, SnapshotRow>(
            r#"
            SELECT user_id, snapshot_date, discipline, wellbeing, focus,
                   knowledge, social, level, xp, recorded_at
            FROM stat_snapshots
            WHERE user_id = $1 AND snapshot_date < $2
            ORDER BY snapshot_date DESC
            LIMIT 1
            "#,
        )
        .bind(user_id.as_str())
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch prior stats: {}", e),
            )
        })?;

        row.map(SnapshotRow::into_snapshot).transpose()
    }

    async fn history(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<StatSnapshot>, DomainError> {
        let rows = sqlx::query_as::<_, SnapshotRow>(
            r#"
            SELECT * FROM (
                SELECT user_id, snapshot_date, discipline, wellbeing, focus,
                       knowledge, social, level, xp, recorded_at
                FROM stat_snapshots
                WHERE user_id = $1
                ORDER BY snapshot_date DESC
                LIMIT $2
            ) recent
            ORDER BY snapshot_date ASC
            "#,
        )
        .bind(user_id.as_str())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch stat history: {}", e),
            )
        })?;

        rows.into_iter().map(SnapshotRow::into_snapshot).collect()
    }
}

/// Internal row type for sqlx query mapping.
#[derive(Debug, sqlx::FromRow)]
struct SnapshotRow {
    user_id: String,
    snapshot_date: NaiveDate,
    discipline: i16,
    wellbeing: i16,
    focus: i16,
    knowledge: i16,
    social: i16,
    level: i32,
    xp: i32,
    recorded_at: chrono::DateTime<chrono::Utc>,
}

impl SnapshotRow {
    fn into_snapshot(self) -> Result<StatSnapshot, DomainError> {
        let user_id = UserId::new(self.user_id).map_err(|e| {
            DomainError::new(ErrorCode::InvalidFormat, format!("Invalid user_id: {}", e))
        })?;
        let score = |v: i16| Score::try_new(i32::from(v)).map_err(DomainError::from);

        Ok(StatSnapshot {
            user_id,
            date: self.snapshot_date,
            stats: StatSet {
                discipline: score(self.discipline)?,
                wellbeing: score(self.wellbeing)?,
                focus: score(self.focus)?,
                knowledge: score(self.knowledge)?,
                social: score(self.social)?,
            },
            progress: Progress::new(
                u32::try_from(self.level).unwrap_or(1),
                u32::try_from(self.xp).unwrap_or(0),
            ),
            recorded_at: Timestamp::from_datetime(self.recorded_at),
        })
    }
}
