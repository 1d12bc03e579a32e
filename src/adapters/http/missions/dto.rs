//! HTTP DTOs for mission endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::missions::{CompletionOutcome, Mission};
use crate::domain::progress::Progress;
use crate::domain::stats::StatSet;

#[derive(Debug, Clone, Deserialize)]
pub struct ListMissionsParams {
    /// `today` or YYYY-MM-DD; defaults to today.
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MissionListResponse {
    pub missions: Vec<Mission>,
    pub completed_count: usize,
    pub total_count: usize,
}

impl From<Vec<Mission>> for MissionListResponse {
    fn from(missions: Vec<Mission>) -> Self {
        Self {
            completed_count: missions.iter().filter(|m| m.is_completed()).count(),
            total_count: missions.len(),
            missions,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateMissionsResponse {
    pub created: bool,
    #[serde(flatten)]
    pub list: MissionListResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompleteMissionResponse {
    pub mission: Mission,
    pub outcome: CompletionOutcome,
    pub stats: StatSet,
    pub progress: Progress,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::missions::Difficulty;
    use crate::domain::stats::Stat;
    use chrono::NaiveDate;

    #[test]
    fn list_response_counts_completed() {
        let user = UserId::new("student").unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let mut done = Mission::new(user.clone(), date, 0, Stat::Focus, Difficulty::Easy, "d", "r");
        done.complete().unwrap();
        let pending = Mission::new(user, date, 1, Stat::Social, Difficulty::Easy, "d", "r");

        let response = MissionListResponse::from(vec![done, pending]);

        assert_eq!(response.completed_count, 1);
        assert_eq!(response.total_count, 2);
    }

    #[test]
    fn generate_response_flattens_list() {
        let response = GenerateMissionsResponse {
            created: true,
            list: MissionListResponse::from(vec![]),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["created"], true);
        assert_eq!(json["total_count"], 0);
        assert!(json["missions"].as_array().unwrap().is_empty());
    }
}
