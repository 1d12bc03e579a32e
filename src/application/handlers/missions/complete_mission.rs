//! CompleteMissionHandler - Command handler for marking a mission done.
//!
//! Only missions in today's set can be completed. The store decides which
//! request completes a mission first; only that request rewards the stat and
//! awards XP. Repeats change nothing.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;

use crate::domain::foundation::{MissionId, UserId};
use crate::domain::missions::{CompletionOutcome, Mission, MissionError};
use crate::domain::progress::Progress;
use crate::domain::stats::{StatEngine, StatSet, StatSnapshot};
use crate::ports::{MissionRepository, StatRepository};

#[derive(Debug, Clone)]
pub struct CompleteMissionCommand {
    pub user_id: UserId,
    pub mission_id: MissionId,
    pub today: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct CompleteMissionResult {
    pub mission: Mission,
    pub outcome: CompletionOutcome,
    pub stats: StatSet,
    pub progress: Progress,
}

/// Handler for completing missions.
pub struct CompleteMissionHandler {
    missions: Arc<dyn MissionRepository>,
    stats: Arc<dyn StatRepository>,
    /// Held while the day's snapshot is read, rewarded and written back.
    snapshot_lock: Mutex<()>,
}

impl CompleteMissionHandler {
    pub fn new(missions: Arc<dyn MissionRepository>, stats: Arc<dyn StatRepository>) -> Self {
        Self {
            missions,
            stats,
            snapshot_lock: Mutex::new(()),
        }
    }

    pub async fn handle(
        &self,
        cmd: CompleteMissionCommand,
    ) -> Result<CompleteMissionResult, MissionError> {
        let mut mission = self
            .missions
            .find_by_id(&cmd.mission_id)
            .await?
            .filter(|m| m.user_id() == &cmd.user_id && m.date() == cmd.today)
            .ok_or(MissionError::NotFound(cmd.mission_id))?;

        let outcome = match mission.complete()? {
            CompletionOutcome::Completed if self.missions.mark_completed(&mission).await? => {
                CompletionOutcome::Completed
            }
            _ => CompletionOutcome::AlreadyCompleted,
        };

        let _guard = self.snapshot_lock.lock().await;
        let (current, progress) = self
            .stats
            .latest(&cmd.user_id)
            .await?
            .map(|s| (s.stats, s.progress))
            .unwrap_or_default();

        if outcome == CompletionOutcome::AlreadyCompleted {
            let mission = self
                .missions
                .find_by_id(&cmd.mission_id)
                .await?
                .unwrap_or(mission);
            return Ok(CompleteMissionResult {
                mission,
                outcome,
                stats: current,
                progress,
            });
        }

        let stats = StatEngine::reward(&current, &mission);
        let gained = progress.gain(mission.xp_reward());
        let leveled_up = gained.level > progress.level;
        self.stats
            .save_snapshot(&StatSnapshot::new(
                cmd.user_id.clone(),
                cmd.today,
                stats,
                gained,
            ))
            .await?;

        tracing::info!(
            user_id = %cmd.user_id,
            mission_id = %cmd.mission_id,
            stat = %mission.target_stat(),
            xp = mission.xp_reward(),
            level = gained.level,
            leveled_up,
            "mission completed"
        );

        Ok(CompleteMissionResult {
            mission,
            outcome,
            stats,
            progress: gained,
        })
    }
}
