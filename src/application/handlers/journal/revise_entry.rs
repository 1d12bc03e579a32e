//! ReviseEntryHandler - Command handler for soft-editing an entry on its own day.
//!
//! The day's stats are recomputed from the previous day's snapshot, then the
//! stat and XP rewards of any missions already completed today are applied
//! again.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::UserId;
use crate::domain::journal::{DailyMetrics, JournalEntry, JournalError, Mood};
use crate::domain::progress::Progress;
use crate::domain::stats::{StatEngine, StatSet, StatSnapshot};
use crate::ports::{JournalRepository, MissionRepository, StatRepository};

/// Command to revise an existing entry.
#[derive(Debug, Clone)]
pub struct ReviseEntryCommand {
    pub user_id: UserId,
    /// Date of the entry being revised.
    pub date: NaiveDate,
    /// The current calendar date.
    pub today: NaiveDate,
    pub content: String,
    pub mood: Option<Mood>,
    pub metrics: DailyMetrics,
}

#[derive(Debug, Clone)]
pub struct ReviseEntryResult {
    pub entry: JournalEntry,
    pub stats: StatSet,
    pub progress: Progress,
}

/// Handler for revising journal entries.
pub struct ReviseEntryHandler {
    journal: Arc<dyn JournalRepository>,
    stats: Arc<dyn StatRepository>,
    missions: Arc<dyn MissionRepository>,
}

impl ReviseEntryHandler {
    pub fn new(
        journal: Arc<dyn JournalRepository>,
        stats: Arc<dyn StatRepository>,
        missions: Arc<dyn MissionRepository>,
    ) -> Self {
        Self {
            journal,
            stats,
            missions,
        }
    }

    pub async fn handle(&self, cmd: ReviseEntryCommand) -> Result<ReviseEntryResult, JournalError> {
        let mut entry = self
            .journal
            .find_by_date(&cmd.user_id, cmd.date)
            .await?
            .ok_or(JournalError::NotFound(cmd.date))?;

        entry.revise(cmd.today, cmd.content, cmd.mood, cmd.metrics)?;
        self.journal.update(&entry).await?;

        let (base, progress) = self
            .stats
            .snapshot_before(&cmd.user_id, cmd.date)
            .await?
            .map(|s| (s.stats, s.progress))
            .unwrap_or_default();

        let (stats, progress) = self
            .missions
            .list_for_date(&cmd.user_id, cmd.date)
            .await?
            .iter()
            .filter(|m| m.is_completed())
            .fold(
                (StatEngine::update(&base, &entry), progress),
                |(stats, progress), mission| {
                    (
                        StatEngine::reward(&stats, mission),
                        progress.gain(mission.xp_reward()),
                    )
                },
            );

        self.stats
            .save_snapshot(&StatSnapshot::new(
                cmd.user_id.clone(),
                cmd.date,
                stats,
                progress,
            ))
            .await?;

        tracing::info!(user_id = %cmd.user_id, date = %cmd.date, "journal entry revised");

        Ok(ReviseEntryResult {
            entry,
            stats,
            progress,
        })
    }
}
