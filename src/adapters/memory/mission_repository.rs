//! In-memory MissionRepository.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, MissionId, UserId};
use crate::domain::missions::Mission;
use crate::ports::MissionRepository;

/// In-memory storage for missions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMissionRepository {
    missions: Arc<RwLock<HashMap<MissionId, Mission>>>,
}

impl InMemoryMissionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored missions (useful for tests)
    pub async fn mission_count(&self) -> usize {
        self.missions.read().await.len()
    }
}

#[async_trait]
impl MissionRepository for InMemoryMissionRepository {
    async fn save_all(&self, missions: &[Mission]) -> Result<(), DomainError> {
        let mut stored = self.missions.write().await;
        if let Some(existing) = missions.iter().find(|m| stored.contains_key(m.id())) {
            return Err(DomainError::database(format!(
                "Mission already exists: {}",
                existing.id()
            )));
        }
        for mission in missions {
            stored.insert(*mission.id(), mission.clone());
        }
        Ok(())
    }

    async fn mark_completed(&self, mission: &Mission) -> Result<bool, DomainError> {
        let mut stored = self.missions.write().await;
        match stored.get_mut(mission.id()) {
            Some(existing) if existing.is_completed() => Ok(false),
            Some(existing) => {
                *existing = mission.clone();
                Ok(true)
            }
            None => Err(DomainError::new(
                ErrorCode::MissionNotFound,
                format!("Mission not found: {}", mission.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &MissionId) -> Result<Option<Mission>, DomainError> {
        Ok(self.missions.read().await.get(id).cloned())
    }

    async fn list_for_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<Mission>, DomainError> {
        let stored = self.missions.read().await;
        let mut missions: Vec<Mission> = stored
            .values()
            .filter(|m| m.user_id() == user_id && m.date() == date)
            .cloned()
            .collect();
        missions.sort_by_key(|m| m.sequence());
        Ok(missions)
    }

    async fn completion_dates(&self, user_id: &UserId) -> Result<Vec<NaiveDate>, DomainError> {
        let stored = self.missions.read().await;
        let dates: BTreeSet<NaiveDate> = stored
            .values()
            .filter(|m| m.user_id() == user_id && m.is_completed())
            .map(|m| m.date())
            .collect();
        Ok(dates.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::missions::Difficulty;
    use crate::domain::stats::Stat;

    fn user() -> UserId {
        UserId::new("student").unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn mission(d: u32, seq: u32, stat: Stat) -> Mission {
        Mission::new(user(), day(d), seq, stat, Difficulty::Easy, "Do it", "Because")
    }

    #[tokio::test]
    async fn list_for_date_is_ordered_by_sequence() {
        let repo = InMemoryMissionRepository::new();
        repo.save_all(&[
            mission(15, 2, Stat::Social),
            mission(15, 0, Stat::Focus),
            mission(15, 1, Stat::Knowledge),
            mission(14, 0, Stat::Focus),
        ])
        .await
        .unwrap();

        let listed = repo.list_for_date(&user(), day(15)).await.unwrap();
        let seqs: Vec<u32> = listed.iter().map(|m| m.sequence()).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn save_all_rejects_existing_mission() {
        let repo = InMemoryMissionRepository::new();
        repo.save_all(&[mission(15, 0, Stat::Focus)]).await.unwrap();

        assert!(repo.save_all(&[mission(15, 0, Stat::Focus)]).await.is_err());
        assert_eq!(repo.mission_count().await, 1);
    }

    #[tokio::test]
    async fn completion_dates_are_distinct_and_sorted() {
        let repo = InMemoryMissionRepository::new();
        let mut a = mission(15, 0, Stat::Focus);
        let mut b = mission(15, 1, Stat::Social);
        let mut c = mission(13, 0, Stat::Focus);
        let d = mission(14, 0, Stat::Focus);
        repo.save_all(&[a.clone(), b.clone(), c.clone(), d]).await.unwrap();

        for m in [&mut a, &mut b, &mut c] {
            m.complete().unwrap();
            assert!(repo.mark_completed(m).await.unwrap());
        }

        assert_eq!(repo.completion_dates(&user()).await.unwrap(), vec![day(13), day(15)]);
    }

    #[tokio::test]
    async fn completing_unknown_mission_fails() {
        let repo = InMemoryMissionRepository::new();
        let err = repo
            .mark_completed(&mission(15, 0, Stat::Focus))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MissionNotFound);
    }

    #[tokio::test]
    async fn only_first_completion_is_stored() {
        let repo = InMemoryMissionRepository::new();
        let pending = mission(15, 0, Stat::Focus);
        repo.save_all(std::slice::from_ref(&pending)).await.unwrap();

        let mut first = pending.clone();
        first.complete().unwrap();
        let mut second = pending;
        second.complete().unwrap();

        assert!(repo.mark_completed(&first).await.unwrap());
        assert!(!repo.mark_completed(&second).await.unwrap());

        let stored = repo.find_by_id(first.id()).await.unwrap().unwrap();
        assert_eq!(stored.completed_at(), first.completed_at());
    }
}
