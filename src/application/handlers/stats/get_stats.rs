//! GetStatsHandler - Query handler for the current stats and their history.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::progress::Progress;
use crate::domain::stats::{StatSet, StatSnapshot};
use crate::ports::StatRepository;

#[derive(Debug, Clone)]
pub struct GetStatsQuery {
    pub user_id: UserId,
    /// Number of snapshots to include in the history.
    pub history_limit: u32,
}

/// Current stats plus recent snapshots, oldest first.
#[derive(Debug, Clone, Serialize)]
pub struct StatsView {
    pub current: StatSet,
    pub progress: Progress,
    pub history: Vec<StatSnapshot>,
}

pub struct GetStatsHandler {
    stats: Arc<dyn StatRepository>,
}

impl GetStatsHandler {
    pub fn new(stats: Arc<dyn StatRepository>) -> Self {
        Self { stats }
    }

    pub async fn handle(&self, query: GetStatsQuery) -> Result<StatsView, DomainError> {
        let history = self
            .stats
            .history(&query.user_id, query.history_limit)
            .await?;
        let (current, progress) = history
            .last()
            .map(|s| (s.stats, s.progress))
            .unwrap_or_default();
        Ok(StatsView {
            current,
            progress,
            history,
        })
    }
}
