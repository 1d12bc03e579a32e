//! ListMissionsHandler - Query handler for a day's missions.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::UserId;
use crate::domain::missions::{Mission, MissionError};
use crate::ports::MissionRepository;

#[derive(Debug, Clone)]
pub struct ListMissionsQuery {
    pub user_id: UserId,
    pub date: NaiveDate,
}

pub struct ListMissionsHandler {
    missions: Arc<dyn MissionRepository>,
}

impl ListMissionsHandler {
    pub fn new(missions: Arc<dyn MissionRepository>) -> Self {
        Self { missions }
    }

    /// Missions for the date in generation order; empty if none were generated.
    pub async fn handle(&self, query: ListMissionsQuery) -> Result<Vec<Mission>, MissionError> {
        Ok(self
            .missions
            .list_for_date(&query.user_id, query.date)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryMissionRepository;
    use crate::domain::missions::Difficulty;
    use crate::domain::stats::Stat;

    #[tokio::test]
    async fn lists_in_sequence_order() {
        let user = UserId::new("student").unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let repo = InMemoryMissionRepository::new();
        let missions: Vec<Mission> = [Stat::Social, Stat::Focus, Stat::Wellbeing]
            .into_iter()
            .enumerate()
            .rev()
            .map(|(i, stat)| {
                Mission::new(user.clone(), date, i as u32, stat, Difficulty::Easy, "d", "r")
            })
            .collect();
        repo.save_all(&missions).await.unwrap();

        let listed = ListMissionsHandler::new(Arc::new(repo))
            .handle(ListMissionsQuery {
                user_id: user,
                date,
            })
            .await
            .unwrap();

        let order: Vec<Stat> = listed.iter().map(|m| m.target_stat()).collect();
        assert_eq!(order, vec![Stat::Social, Stat::Focus, Stat::Wellbeing]);
    }

    #[tokio::test]
    async fn empty_day_lists_nothing() {
        let listed = ListMissionsHandler::new(Arc::new(InMemoryMissionRepository::new()))
            .handle(ListMissionsQuery {
                user_id: UserId::new("student").unwrap(),
                date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            })
            .await
            .unwrap();
        assert!(listed.is_empty());
    }
}
