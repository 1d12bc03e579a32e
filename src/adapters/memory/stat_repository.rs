//! In-memory StatRepository.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::stats::StatSnapshot;
use crate::ports::StatRepository;

/// In-memory storage for stat snapshots, one per user per day.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStatRepository {
    snapshots: Arc<RwLock<HashMap<UserId, BTreeMap<NaiveDate, StatSnapshot>>>>,
}

impl InMemoryStatRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StatRepository for InMemoryStatRepository {
    async fn save_snapshot(&self, snapshot: &StatSnapshot) -> Result<(), DomainError> {
        let mut snapshots = self.snapshots.write().await;
        snapshots
            .entry(snapshot.user_id.clone())
            .or_default()
            .insert(snapshot.date, snapshot.clone());
        Ok(())
    }

    async fn latest(&self, user_id: &UserId) -> Result<Option<StatSnapshot>, DomainError> {
        let snapshots = self.snapshots.read().await;
        Ok(snapshots
            .get(user_id)
            .and_then(|days| days.values().next_back().cloned()))
    }

    async fn snapshot_before(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<StatSnapshot>, DomainError> {
        let snapshots = self.snapshots.read().await;
        Ok(snapshots
            .get(user_id)
            .and_then(|days| days.range(..date).next_back().map(|(_, s)| s.clone())))
    }

    async fn history(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<StatSnapshot>, DomainError> {
        let snapshots = self.snapshots.read().await;
        let Some(days) = snapshots.get(user_id) else {
            return Ok(Vec::new());
        };
        let mut recent: Vec<StatSnapshot> =
            days.values().rev().take(limit as usize).cloned().collect();
        recent.reverse();
        Ok(recent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Score;
    use crate::domain::progress::Progress;
    use crate::domain::stats::{Stat, StatSet};

    fn user() -> UserId {
        UserId::new("student").unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn snapshot(d: u32, discipline: i32) -> StatSnapshot {
        StatSnapshot::new(
            user(),
            day(d),
            StatSet::default().with(Stat::Discipline, Score::clamped(discipline)),
            Progress::default(),
        )
    }

    #[tokio::test]
    async fn latest_is_most_recent_day() {
        let repo = InMemoryStatRepository::new();
        repo.save_snapshot(&snapshot(15, 40)).await.unwrap();
        repo.save_snapshot(&snapshot(14, 30)).await.unwrap();

        let latest = repo.latest(&user()).await.unwrap().unwrap();
        assert_eq!(latest.date, day(15));
    }

    #[tokio::test]
    async fn same_day_snapshot_is_replaced() {
        let repo = InMemoryStatRepository::new();
        repo.save_snapshot(&snapshot(15, 40)).await.unwrap();
        repo.save_snapshot(&snapshot(15, 45)).await.unwrap();

        let history = repo.history(&user(), 10).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].stats.discipline.value(), 45);
    }

    #[tokio::test]
    async fn snapshot_before_excludes_the_day_itself() {
        let repo = InMemoryStatRepository::new();
        repo.save_snapshot(&snapshot(13, 30)).await.unwrap();
        repo.save_snapshot(&snapshot(15, 40)).await.unwrap();

        let before = repo.snapshot_before(&user(), day(15)).await.unwrap().unwrap();
        assert_eq!(before.date, day(13));
        assert!(repo.snapshot_before(&user(), day(13)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn history_is_oldest_first_and_limited() {
        let repo = InMemoryStatRepository::new();
        for d in 10..=15 {
            repo.save_snapshot(&snapshot(d, 50)).await.unwrap();
        }
        let history = repo.history(&user(), 3).await.unwrap();
        let dates: Vec<NaiveDate> = history.iter().map(|s| s.date).collect();
        assert_eq!(dates, vec![day(13), day(14), day(15)]);
    }
}
