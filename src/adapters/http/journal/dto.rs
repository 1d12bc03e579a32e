//! HTTP DTOs for journal endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::journal::{DailyMetrics, JournalEntry, Mood};
use crate::domain::stats::StatSet;

/// Default number of entries listed.
pub const DEFAULT_LIST_LIMIT: u32 = 7;

/// Body for submitting or revising an entry.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub metrics: DailyMetrics,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListEntriesParams {
    pub limit: Option<u32>,
}

/// An entry with the stats it produced.
#[derive(Debug, Clone, Serialize)]
pub struct EntryResponse {
    pub entry: JournalEntry,
    pub stats: StatSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_stats: Option<StatSet>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryListResponse {
    pub items: Vec<JournalEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_request_deserializes_with_defaults() {
        let req: EntryRequest = serde_json::from_str(r#"{"content": "Went to the gym"}"#).unwrap();
        assert_eq!(req.content, "Went to the gym");
        assert!(req.mood.is_none());
        assert!(req.metrics.is_empty());
    }

    #[test]
    fn entry_request_with_mood_and_metrics() {
        let req: EntryRequest = serde_json::from_str(
            r#"{"mood": "tired", "metrics": {"sleep_hours": 5.5, "study_minutes": 40}}"#,
        )
        .unwrap();
        assert_eq!(req.content, "");
        assert_eq!(req.mood, Some(Mood::Tired));
        assert_eq!(req.metrics.sleep_hours, Some(5.5));
        assert_eq!(req.metrics.study_minutes, Some(40));
        assert!(req.metrics.movement_minutes.is_none());
    }

    #[test]
    fn unknown_mood_is_rejected() {
        assert!(serde_json::from_str::<EntryRequest>(r#"{"mood": "bored"}"#).is_err());
    }
}
