//! Stat, StatSet and StatSnapshot value objects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Score, Timestamp, UserId, ValidationError};
use crate::domain::progress::Progress;

/// An RPG-style attribute of the student.
///
/// Declaration order is the tie-break order wherever stats are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Discipline,
    Wellbeing,
    Focus,
    Knowledge,
    Social,
}

impl Stat {
    /// Every stat, in tie-break order.
    pub const ALL: [Stat; 5] = [
        Stat::Discipline,
        Stat::Wellbeing,
        Stat::Focus,
        Stat::Knowledge,
        Stat::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Discipline => "discipline",
            Stat::Wellbeing => "wellbeing",
            Stat::Focus => "focus",
            Stat::Knowledge => "knowledge",
            Stat::Social => "social",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Stat::Discipline => "Discipline",
            Stat::Wellbeing => "Wellbeing",
            Stat::Focus => "Focus",
            Stat::Knowledge => "Knowledge",
            Stat::Social => "Social",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stat::ALL
            .into_iter()
            .find(|stat| stat.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::invalid_format("stat", format!("unknown stat '{}'", s)))
    }
}

/// One score per stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatSet {
    pub discipline: Score,
    pub wellbeing: Score,
    pub focus: Score,
    pub knowledge: Score,
    pub social: Score,
}

impl StatSet {
    /// A set with every stat at the same score.
    pub fn uniform(score: Score) -> Self {
        Self {
            discipline: score,
            wellbeing: score,
            focus: score,
            knowledge: score,
            social: score,
        }
    }

    pub fn get(&self, stat: Stat) -> Score {
        match stat {
            Stat::Discipline => self.discipline,
            Stat::Wellbeing => self.wellbeing,
            Stat::Focus => self.focus,
            Stat::Knowledge => self.knowledge,
            Stat::Social => self.social,
        }
    }

    pub fn set(&mut self, stat: Stat, score: Score) {
        match stat {
            Stat::Discipline => self.discipline = score,
            Stat::Wellbeing => self.wellbeing = score,
            Stat::Focus => self.focus = score,
            Stat::Knowledge => self.knowledge = score,
            Stat::Social => self.social = score,
        }
    }

    /// Returns a copy with one stat replaced.
    pub fn with(mut self, stat: Stat, score: Score) -> Self {
        self.set(stat, score);
        self
    }

    /// Iterates stats in tie-break order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, Score)> + '_ {
        Stat::ALL.into_iter().map(move |stat| (stat, self.get(stat)))
    }

    /// Stats ordered weakest first, ties broken by declaration order.
    pub fn ranked_ascending(&self) -> Vec<(Stat, Score)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by_key(|(stat, score)| (*score, *stat));
        ranked
    }
}

impl Default for StatSet {
    fn default() -> Self {
        Self::uniform(Score::BASELINE)
    }
}

/// Stats as recorded after processing a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSnapshot {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub stats: StatSet,
    pub progress: Progress,
    pub recorded_at: Timestamp,
}

impl StatSnapshot {
    pub fn new(user_id: UserId, date: NaiveDate, stats: StatSet, progress: Progress) -> Self {
        Self {
            user_id,
            date,
            stats,
            progress,
            recorded_at: Timestamp::now(),
        }
    }
}
