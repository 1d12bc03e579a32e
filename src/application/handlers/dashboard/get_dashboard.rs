//! GetDashboardHandler - Query handler for the daily overview.
//!
//! Reads today's entry, stats and missions plus the completion history for
//! the streak, and assembles them into one read model.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::chat::ChatSource;
use crate::domain::dashboard::DashboardOverview;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{JournalRepository, MissionRepository, StatRepository};

#[derive(Debug, Clone)]
pub struct GetDashboardQuery {
    pub user_id: UserId,
    pub date: NaiveDate,
}

pub struct GetDashboardHandler {
    journal: Arc<dyn JournalRepository>,
    stats: Arc<dyn StatRepository>,
    missions: Arc<dyn MissionRepository>,
    ai_mode: ChatSource,
}

impl GetDashboardHandler {
    pub fn new(
        journal: Arc<dyn JournalRepository>,
        stats: Arc<dyn StatRepository>,
        missions: Arc<dyn MissionRepository>,
        ai_mode: ChatSource,
    ) -> Self {
        Self {
            journal,
            stats,
            missions,
            ai_mode,
        }
    }

    pub async fn handle(&self, query: GetDashboardQuery) -> Result<DashboardOverview, DomainError> {
        let entry = self.journal.find_by_date(&query.user_id, query.date).await?;
        let (stats, progress) = self
            .stats
            .latest(&query.user_id)
            .await?
            .map(|s| (s.stats, s.progress))
            .unwrap_or_default();
        let missions = self
            .missions
            .list_for_date(&query.user_id, query.date)
            .await?;
        let completion_days = self.missions.completion_dates(&query.user_id).await?;

        Ok(DashboardOverview::assemble(
            query.date,
            stats,
            progress,
            missions,
            entry,
            &completion_days,
            self.ai_mode,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryJournalRepository, InMemoryMissionRepository, InMemoryStatRepository,
    };
    use crate::domain::journal::{DailyMetrics, JournalEntry};
    use crate::domain::missions::{Difficulty, Mission};
    use crate::domain::progress::Progress;
    use crate::domain::stats::{Stat, StatSet, StatSnapshot};

    fn user() -> UserId {
        UserId::new("student").unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn completed(date: NaiveDate, stat: Stat) -> Mission {
        let mut m = Mission::new(user(), date, 0, stat, Difficulty::Easy, "d", "r");
        m.complete().unwrap();
        m
    }

    #[tokio::test]
    async fn empty_day_shows_defaults() {
        let handler = GetDashboardHandler::new(
            Arc::new(InMemoryJournalRepository::new()),
            Arc::new(InMemoryStatRepository::new()),
            Arc::new(InMemoryMissionRepository::new()),
            ChatSource::Fallback,
        );

        let overview = handler
            .handle(GetDashboardQuery {
                user_id: user(),
                date: day(15),
            })
            .await
            .unwrap();

        assert_eq!(overview.stats, StatSet::default());
        assert_eq!(overview.progress, Progress::default());
        assert!(overview.entry.is_none());
        assert_eq!(overview.total_count, 0);
        assert_eq!(overview.streak, 0);
        assert_eq!(overview.ai_mode, ChatSource::Fallback);
    }

    #[tokio::test]
    async fn counts_completions_and_streak() {
        let journal = InMemoryJournalRepository::new();
        let missions = InMemoryMissionRepository::new();
        journal
            .save(
                &JournalEntry::new(user(), day(15), "ok".into(), None, DailyMetrics::default())
                    .unwrap(),
            )
            .await
            .unwrap();
        missions
            .save_all(&[
                completed(day(13), Stat::Focus),
                completed(day(14), Stat::Focus),
                completed(day(15), Stat::Focus),
                Mission::new(user(), day(15), 1, Stat::Social, Difficulty::Easy, "d", "r"),
            ])
            .await
            .unwrap();

        let overview = GetDashboardHandler::new(
            Arc::new(journal),
            Arc::new(InMemoryStatRepository::new()),
            Arc::new(missions),
            ChatSource::Ai,
        )
        .handle(GetDashboardQuery {
            user_id: user(),
            date: day(15),
        })
        .await
        .unwrap();

        assert!(overview.entry.is_some());
        assert_eq!(overview.total_count, 2);
        assert_eq!(overview.completed_count, 1);
        assert_eq!(overview.streak, 3);
        assert_eq!(overview.completion_percent(), 50);
    }

    #[tokio::test]
    async fn shows_latest_level_and_xp() {
        let stats = InMemoryStatRepository::new();
        stats
            .save_snapshot(&StatSnapshot::new(
                user(),
                day(14),
                StatSet::default(),
                Progress::new(2, 60),
            ))
            .await
            .unwrap();

        let overview = GetDashboardHandler::new(
            Arc::new(InMemoryJournalRepository::new()),
            Arc::new(stats),
            Arc::new(InMemoryMissionRepository::new()),
            ChatSource::Fallback,
        )
        .handle(GetDashboardQuery {
            user_id: user(),
            date: day(15),
        })
        .await
        .unwrap();

        assert_eq!(overview.progress, Progress::new(2, 60));
    }
}
