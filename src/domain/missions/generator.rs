//! Mission Generator - derives the day's missions from the entry and stats.
//!
//! Output depends only on the inputs: the weakest stats get a mission each,
//! difficulty follows the stat's score, and mission ids are derived from
//! (user, date, stat) so a regenerated set is identical.

use chrono::NaiveDate;

use super::{Difficulty, Mission};
use crate::domain::foundation::UserId;
use crate::domain::journal::JournalEntry;
use crate::domain::stats::{Stat, StatEngine, StatSet};

/// Default number of missions per day.
pub const DEFAULT_MISSION_COUNT: usize = 3;

/// Generates daily missions.
#[derive(Debug, Clone, Copy)]
pub struct MissionGenerator {
    mission_count: usize,
}

impl MissionGenerator {
    pub fn new(mission_count: usize) -> Self {
        Self { mission_count }
    }

    pub fn mission_count(&self) -> usize {
        self.mission_count
    }

    /// Missions for `date`, weakest stat first.
    pub fn generate(
        &self,
        user_id: &UserId,
        date: NaiveDate,
        entry: &JournalEntry,
        stats: &StatSet,
    ) -> Vec<Mission> {
        let missed = StatEngine::missed_stats(entry.content());

        stats
            .ranked_ascending()
            .into_iter()
            .take(self.mission_count)
            .enumerate()
            .map(|(sequence, (stat, score))| {
                let difficulty = Difficulty::for_score(score);
                let reason = if missed.contains(&stat) {
                    format!(
                        "Your journal says you missed out on {} today.",
                        stat.label().to_lowercase()
                    )
                } else {
                    format!(
                        "{} is one of your lowest stats ({}/100).",
                        stat.label(),
                        score
                    )
                };
                Mission::new(
                    user_id.clone(),
                    date,
                    sequence as u32,
                    stat,
                    difficulty,
                    template(stat, difficulty),
                    reason,
                )
            })
            .collect()
    }
}

impl Default for MissionGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_MISSION_COUNT)
    }
}

/// Mission text for a stat at a difficulty.
pub fn template(stat: Stat, difficulty: Difficulty) -> &'static str {
    use Difficulty::*;
    match (stat, difficulty) {
        (Stat::Discipline, Easy) => "Do a 10-minute workout",
        (Stat::Discipline, Standard) => "Do a 25-minute workout",
        (Stat::Discipline, Hard) => "Finish a 45-minute training session",
        (Stat::Wellbeing, Easy) => "Drink a glass of water and stretch for 5 minutes",
        (Stat::Wellbeing, Standard) => "Go to bed 30 minutes earlier tonight",
        (Stat::Wellbeing, Hard) => "Take a 20-minute screen-free walk outside",
        (Stat::Focus, Easy) => "Do one 15-minute focus block with your phone in another room",
        (Stat::Focus, Standard) => "Complete two 25-minute pomodoro sessions",
        (Stat::Focus, Hard) => "Finish a 90-minute deep work block",
        (Stat::Knowledge, Easy) => "Review your notes for 15 minutes",
        (Stat::Knowledge, Standard) => "Study one topic for 30 minutes",
        (Stat::Knowledge, Hard) => "Work through a full practice set",
        (Stat::Social, Easy) => "Send a kind message to a friend",
        (Stat::Social, Standard) => "Call a friend or family member",
        (Stat::Social, Hard) => "Organise a study session or hangout with classmates",
    }
}
