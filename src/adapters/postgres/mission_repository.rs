//! PostgreSQL implementation of MissionRepository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, MissionId, Timestamp, UserId};
use crate::domain::missions::{Difficulty, Mission, MissionStatus};
use crate::domain::stats::Stat;
use crate::ports::MissionRepository;

/// PostgreSQL implementation of MissionRepository.
#[derive(Clone)]
pub struct PostgresMissionRepository {
    pool: PgPool,
}

impl PostgresMissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MissionRepository for PostgresMissionRepository {
    async fn save_all(&self, missions: &[Mission]) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to begin transaction: {}", e),
            )
        })?;

        for mission in missions {
            sqlx::query(
                r#"
                INSERT INTO missions (
                    id, user_id, mission_date, sequence, stat, difficulty,
                    description, reason, xp_reward, status, completed_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                "#,
            )
            .bind(mission.id().as_uuid())
            .bind(mission.user_id().as_str())
            .bind(mission.date())
            .bind(mission.sequence() as i32)
            .bind(mission.target_stat().as_str())
            .bind(mission.difficulty().as_str())
            .bind(mission.description())
            .bind(mission.reason())
            .bind(mission.xp_reward() as i32)
            .bind(mission.status().as_str())
            .bind(mission.completed_at().map(|t| *t.as_datetime()))
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to insert mission: {}", e),
                )
            })?;
        }

        tx.commit().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to commit missions: {}", e),
            )
        })?;

        Ok(())
    }

    async fn mark_completed(&self, mission: &Mission) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE missions SET
                status = 'completed',
                completed_at = $2
            WHERE id = $1 AND status = 'pending'
            "#,
        )
        .bind(mission.id().as_uuid())
        .bind(mission.completed_at().map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to complete mission: {}", e),
            )
        })?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }

        match self.find_by_id(mission.id()).await? {
            Some(_) => Ok(false),
            None => Err(DomainError::new(
                ErrorCode::MissionNotFound,
                format!("Mission not found: {}", mission.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &MissionId) -> Result<Option<Mission>, DomainError> {
        let row = sqlx::query_as::<_, MissionRow>(
            r#"
            SELECT id, user_id, mission_date, sequence, stat, difficulty,
                   description, reason, xp_reward, status, completed_at
            FROM missions
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch mission: {}", e),
            )
        })?;

        row.map(MissionRow::into_mission).transpose()
    }

    async fn list_for_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<Mission>, DomainError> {
        let rows = sqlx::query_as::<_, MissionRow>(
            r#"
            SELECT id, user_id, mission_date, sequence, stat, difficulty,
                   description, reason, xp_reward, status, completed_at
            FROM missions
            WHERE user_id = $1 AND mission_date = $2
            ORDER BY sequence ASC
            "#,
        )
        .bind(user_id.as_str())
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list missions: {}", e),
            )
        })?;

        rows.into_iter().map(MissionRow::into_mission).collect()
    }

    async fn completion_dates(&self, user_id: &UserId) -> Result<Vec<NaiveDate>, DomainError> {
        let rows: Vec<(NaiveDate,)> = sqlx::query_as(
            r#"
            SELECT DISTINCT mission_date
            FROM missions
            WHERE user_id = $1 AND status = 'completed'
            ORDER BY mission_date ASC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch completion dates: {}", e),
            )
        })?;

        Ok(rows.into_iter().map(|(d,)| d).collect())
    }
}

/// Internal row type for sqlx query mapping.
#[derive(Debug, sqlx::FromRow)]
struct MissionRow {
    id: uuid::Uuid,
    user_id: String,
    mission_date: NaiveDate,
    sequence: i32,
    stat: String,
    difficulty: String,
    description: String,
    reason: String,
    xp_reward: i32,
    status: String,
    completed_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl MissionRow {
    fn into_mission(self) -> Result<Mission, DomainError> {
        let user_id = UserId::new(self.user_id).map_err(|e| {
            DomainError::new(ErrorCode::InvalidFormat, format!("Invalid user_id: {}", e))
        })?;
        let stat: Stat = self.stat.parse()?;
        let difficulty: Difficulty = self.difficulty.parse()?;
        let status: MissionStatus = self.status.parse()?;

        Ok(Mission::reconstitute(
            MissionId::from_uuid(self.id),
            user_id,
            self.mission_date,
            self.sequence.max(0) as u32,
            stat,
            difficulty,
            self.description,
            self.reason,
            self.xp_reward.max(0) as u32,
            status,
            self.completed_at.map(Timestamp::from_datetime),
        ))
    }
}
