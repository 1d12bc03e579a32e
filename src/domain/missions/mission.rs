//! Mission aggregate and its status lifecycle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{
    DomainError, MissionId, Score, StateMachine, Timestamp, UserId, ValidationError,
};
use crate::domain::stats::Stat;

/// How demanding a mission is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Standard,
    Hard,
}

impl Difficulty {
    /// Scores below this get easy missions.
    pub const EASY_BELOW: u8 = 45;
    /// Scores below this (and not easy) get standard missions.
    pub const STANDARD_BELOW: u8 = 70;

    /// Picks the difficulty that suits a stat at `score`.
    pub fn for_score(score: Score) -> Self {
        match score.value() {
            s if s < Self::EASY_BELOW => Difficulty::Easy,
            s if s < Self::STANDARD_BELOW => Difficulty::Standard,
            _ => Difficulty::Hard,
        }
    }

    /// Stat points granted on first completion.
    pub fn completion_bonus(&self) -> i32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Standard => 3,
            Difficulty::Hard => 5,
        }
    }

    pub fn xp_reward(&self) -> u32 {
        match self {
            Difficulty::Easy => 15,
            Difficulty::Standard => 20,
            Difficulty::Hard => 30,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Standard => "standard",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "standard" => Ok(Difficulty::Standard),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ValidationError::invalid_format(
                "difficulty",
                format!("unknown difficulty '{}'", other),
            )),
        }
    }
}

/// Mission lifecycle. Completion is one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionStatus {
    #[default]
    Pending,
    Completed,
}

impl MissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissionStatus::Pending => "pending",
            MissionStatus::Completed => "completed",
        }
    }
}

impl FromStr for MissionStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(MissionStatus::Pending),
            "completed" => Ok(MissionStatus::Completed),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown mission status '{}'", other),
            )),
        }
    }
}

impl StateMachine for MissionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!((self, target), (MissionStatus::Pending, MissionStatus::Completed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            MissionStatus::Pending => vec![MissionStatus::Completed],
            MissionStatus::Completed => vec![],
        }
    }
}

/// Result of asking to complete a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionOutcome {
    /// The mission moved from pending to completed.
    Completed,
    /// The mission was already completed; nothing changed.
    AlreadyCompleted,
}

/// A daily mission aimed at one stat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    id: MissionId,
    user_id: UserId,
    date: NaiveDate,
    sequence: u32,
    target_stat: Stat,
    difficulty: Difficulty,
    description: String,
    reason: String,
    xp_reward: u32,
    status: MissionStatus,
    completed_at: Option<Timestamp>,
}

impl Mission {
    /// Creates a pending mission. The id is derived from user, date and stat.
    pub fn new(
        user_id: UserId,
        date: NaiveDate,
        sequence: u32,
        target_stat: Stat,
        difficulty: Difficulty,
        description: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id: MissionId::derive(&user_id, date, target_stat.as_str()),
            user_id,
            date,
            sequence,
            target_stat,
            difficulty,
            description: description.into(),
            reason: reason.into(),
            xp_reward: difficulty.xp_reward(),
            status: MissionStatus::Pending,
            completed_at: None,
        }
    }

    /// Reconstitute a mission from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: MissionId,
        user_id: UserId,
        date: NaiveDate,
        sequence: u32,
        target_stat: Stat,
        difficulty: Difficulty,
        description: String,
        reason: String,
        xp_reward: u32,
        status: MissionStatus,
        completed_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            user_id,
            date,
            sequence,
            target_stat,
            difficulty,
            description,
            reason,
            xp_reward,
            status,
            completed_at,
        }
    }

    pub fn id(&self) -> &MissionId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    pub fn target_stat(&self) -> Stat {
        self.target_stat
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn xp_reward(&self) -> u32 {
        self.xp_reward
    }

    pub fn status(&self) -> MissionStatus {
        self.status
    }

    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    pub fn is_completed(&self) -> bool {
        self.status == MissionStatus::Completed
    }

    /// Marks the mission completed. Completing twice is a no-op.
    pub fn complete(&mut self) -> Result<CompletionOutcome, DomainError> {
        if self.is_completed() {
            return Ok(CompletionOutcome::AlreadyCompleted);
        }
        self.status = self.status.transition_to(MissionStatus::Completed)?;
        self.completed_at = Some(Timestamp::now());
        Ok(CompletionOutcome::Completed)
    }
}
