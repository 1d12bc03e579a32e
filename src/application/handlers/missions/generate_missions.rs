//! GenerateMissionsHandler - Command handler producing the day's missions.
//!
//! Generation is idempotent: once a date has missions, the stored set is
//! returned unchanged.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::UserId;
use crate::domain::missions::{Mission, MissionError, MissionGenerator};
use crate::ports::{JournalRepository, MissionRepository, StatRepository};

#[derive(Debug, Clone)]
pub struct GenerateMissionsCommand {
    pub user_id: UserId,
    pub date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct GenerateMissionsResult {
    pub missions: Vec<Mission>,
    /// False when an existing set was returned.
    pub created: bool,
}

/// Handler for generating daily missions.
pub struct GenerateMissionsHandler {
    journal: Arc<dyn JournalRepository>,
    stats: Arc<dyn StatRepository>,
    missions: Arc<dyn MissionRepository>,
    generator: MissionGenerator,
}

impl GenerateMissionsHandler {
    pub fn new(
        journal: Arc<dyn JournalRepository>,
        stats: Arc<dyn StatRepository>,
        missions: Arc<dyn MissionRepository>,
        generator: MissionGenerator,
    ) -> Self {
        Self {
            journal,
            stats,
            missions,
            generator,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateMissionsCommand,
    ) -> Result<GenerateMissionsResult, MissionError> {
        let existing = self.missions.list_for_date(&cmd.user_id, cmd.date).await?;
        if !existing.is_empty() {
            tracing::debug!(user_id = %cmd.user_id, date = %cmd.date, "missions already generated");
            return Ok(GenerateMissionsResult {
                missions: existing,
                created: false,
            });
        }

        let entry = self
            .journal
            .find_by_date(&cmd.user_id, cmd.date)
            .await?
            .ok_or(MissionError::NoEntryForDate(cmd.date))?;

        let stats = self
            .stats
            .latest(&cmd.user_id)
            .await?
            .map(|s| s.stats)
            .unwrap_or_default();

        let missions = self
            .generator
            .generate(&cmd.user_id, cmd.date, &entry, &stats);
        self.missions.save_all(&missions).await?;

        tracing::info!(
            user_id = %cmd.user_id,
            date = %cmd.date,
            count = missions.len(),
            "missions generated"
        );

        Ok(GenerateMissionsResult {
            missions,
            created: true,
        })
    }
}
