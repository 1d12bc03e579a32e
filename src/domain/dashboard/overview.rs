use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::chat::ChatSource;
use crate::domain::journal::JournalEntry;
use crate::domain::missions::Mission;
use crate::domain::progress::{streak, Progress};
use crate::domain::stats::StatSet;

/// Everything the daily screen shows, in one read.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardOverview {
    pub date: NaiveDate,
    pub stats: StatSet,
    pub progress: Progress,

    /// Today's missions in generation order
    pub missions: Vec<Mission>,
    pub completed_count: usize,
    pub total_count: usize,

    /// Consecutive days with a completed mission
    pub streak: u32,

    pub entry: Option<JournalEntry>,

    /// Whether the chat advisor is backed by an AI provider
    pub ai_mode: ChatSource,
}

impl DashboardOverview {
    pub fn assemble(
        date: NaiveDate,
        stats: StatSet,
        progress: Progress,
        missions: Vec<Mission>,
        entry: Option<JournalEntry>,
        completion_days: &[NaiveDate],
        ai_mode: ChatSource,
    ) -> Self {
        let completed_count = missions.iter().filter(|m| m.is_completed()).count();
        Self {
            date,
            stats,
            progress,
            total_count: missions.len(),
            completed_count,
            missions,
            streak: streak(completion_days, date),
            entry,
            ai_mode,
        }
    }

    /// Share of today's missions done, 0..=100.
    pub fn completion_percent(&self) -> u8 {
        if self.total_count == 0 {
            return 0;
        }
        ((self.completed_count * 100) / self.total_count) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::missions::Difficulty;
    use crate::domain::stats::Stat;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn mission(stat: Stat, seq: u32) -> Mission {
        Mission::new(
            UserId::new("student").unwrap(),
            day(15),
            seq,
            stat,
            Difficulty::Standard,
            "Study one topic for 30 minutes",
            "Knowledge is low",
        )
    }

    #[test]
    fn counts_completed_missions() {
        let mut done = mission(Stat::Knowledge, 0);
        done.complete().unwrap();
        let overview = DashboardOverview::assemble(
            day(15),
            StatSet::default(),
            Progress::default(),
            vec![done, mission(Stat::Focus, 1), mission(Stat::Social, 2)],
            None,
            &[day(14), day(15)],
            ChatSource::Fallback,
        );

        assert_eq!(overview.total_count, 3);
        assert_eq!(overview.completed_count, 1);
        assert_eq!(overview.completion_percent(), 33);
        assert_eq!(overview.streak, 2);
    }

    #[test]
    fn empty_day_serializes() {
        let overview = DashboardOverview::assemble(
            day(15),
            StatSet::default(),
            Progress::new(3, 40),
            vec![],
            None,
            &[],
            ChatSource::Ai,
        );
        assert_eq!(overview.completion_percent(), 0);

        let json = serde_json::to_value(&overview).unwrap();
        assert_eq!(json["ai_mode"], "ai");
        assert_eq!(json["date"], "2025-01-15");
        assert!(json["entry"].is_null());
        assert_eq!(json["progress"]["level"], 3);
        assert_eq!(json["progress"]["xp"], 40);
    }
}
