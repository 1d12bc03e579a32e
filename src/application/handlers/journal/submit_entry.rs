//! SubmitEntryHandler - Command handler for writing the day's journal entry.
//!
//! Runs the stat engine over the entry, then persists the entry and the
//! day's stat snapshot. Level progress carries over from the previous day.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::UserId;
use crate::domain::journal::{DailyMetrics, JournalEntry, JournalError, Mood};
use crate::domain::stats::{StatEngine, StatSet, StatSnapshot};
use crate::ports::{JournalRepository, StatRepository};

/// Command to submit a journal entry.
#[derive(Debug, Clone)]
pub struct SubmitEntryCommand {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub content: String,
    pub mood: Option<Mood>,
    pub metrics: DailyMetrics,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitEntryResult {
    pub entry: JournalEntry,
    /// Stats before the entry was applied.
    pub previous_stats: StatSet,
    pub stats: StatSet,
}

/// Handler for submitting journal entries.
pub struct SubmitEntryHandler {
    journal: Arc<dyn JournalRepository>,
    stats: Arc<dyn StatRepository>,
}

impl SubmitEntryHandler {
    pub fn new(journal: Arc<dyn JournalRepository>, stats: Arc<dyn StatRepository>) -> Self {
        Self { journal, stats }
    }

    pub async fn handle(&self, cmd: SubmitEntryCommand) -> Result<SubmitEntryResult, JournalError> {
        let entry = JournalEntry::new(
            cmd.user_id.clone(),
            cmd.date,
            cmd.content,
            cmd.mood,
            cmd.metrics,
        )?;

        let previous = self.stats.snapshot_before(&cmd.user_id, cmd.date).await?;
        let (previous_stats, progress) = previous
            .map(|s| (s.stats, s.progress))
            .unwrap_or_default();
        let stats = StatEngine::update(&previous_stats, &entry);

        self.journal.save(&entry).await?;

        let snapshot = StatSnapshot::new(cmd.user_id.clone(), cmd.date, stats, progress);
        if let Err(e) = self.stats.save_snapshot(&snapshot).await {
            tracing::error!(
                user_id = %cmd.user_id,
                date = %cmd.date,
                error = %e,
                "entry saved but its stat snapshot was not; revise the entry to retry"
            );
            return Err(e.into());
        }

        tracing::info!(
            user_id = %cmd.user_id,
            date = %cmd.date,
            mood = ?entry.mood(),
            "journal entry submitted"
        );

        Ok(SubmitEntryResult {
            entry,
            previous_stats,
            stats,
        })
    }
}
