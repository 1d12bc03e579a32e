//! Journal entry aggregate.
//!
//! One entry per user per calendar day. The entry is the input to the stat
//! engine and the mission generator for that day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, EntryId, ErrorCode, Timestamp, UserId, ValidationError};

/// Maximum length for entry content, in characters.
pub const MAX_CONTENT_LENGTH: usize = 5000;

/// Self-reported mood attached to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Excited,
    Neutral,
    Tired,
    Sad,
    Stressed,
    Anxious,
    Angry,
}

impl Mood {
    /// Returns the lowercase label used in storage and the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Excited => "excited",
            Mood::Neutral => "neutral",
            Mood::Tired => "tired",
            Mood::Sad => "sad",
            Mood::Stressed => "stressed",
            Mood::Anxious => "anxious",
            Mood::Angry => "angry",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "excited" => Ok(Mood::Excited),
            "neutral" => Ok(Mood::Neutral),
            "tired" => Ok(Mood::Tired),
            "sad" => Ok(Mood::Sad),
            "stressed" => Ok(Mood::Stressed),
            "anxious" => Ok(Mood::Anxious),
            "angry" => Ok(Mood::Angry),
            other => Err(ValidationError::invalid_format(
                "mood",
                format!("unknown mood '{}'", other),
            )),
        }
    }
}

/// Optional self-report numbers captured alongside the free text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyMetrics {
    pub sleep_hours: Option<f32>,
    pub study_minutes: Option<u32>,
    pub movement_minutes: Option<u32>,
}

impl DailyMetrics {
    /// Returns true when no field was reported.
    pub fn is_empty(&self) -> bool {
        self.sleep_hours.is_none() && self.study_minutes.is_none() && self.movement_minutes.is_none()
    }

    /// Checks every reported value against its plausible range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(hours) = self.sleep_hours {
            if !hours.is_finite() || !(0.0..=24.0).contains(&hours) {
                return Err(ValidationError::out_of_range("sleep_hours", 0, 24, hours as i32));
            }
        }
        for (field, minutes) in [
            ("study_minutes", self.study_minutes),
            ("movement_minutes", self.movement_minutes),
        ] {
            if let Some(m) = minutes {
                if m > 1440 {
                    return Err(ValidationError::out_of_range(field, 0, 1440, m as i32));
                }
            }
        }
        Ok(())
    }
}

/// Journal entry aggregate.
///
/// # Invariants
///
/// - `content` is at most `MAX_CONTENT_LENGTH` characters
/// - blank content is only allowed when a mood or metrics are present
/// - content may only be revised on the entry's own date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    id: EntryId,
    user_id: UserId,
    date: NaiveDate,
    content: String,
    mood: Option<Mood>,
    metrics: DailyMetrics,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl JournalEntry {
    /// Create a new entry for the given day.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if content is too long, metrics are out of range,
    ///   or the entry carries no information at all
    pub fn new(
        user_id: UserId,
        date: NaiveDate,
        content: String,
        mood: Option<Mood>,
        metrics: DailyMetrics,
    ) -> Result<Self, DomainError> {
        Self::validate(&content, mood, &metrics)?;

        let now = Timestamp::now();
        Ok(Self {
            id: EntryId::new(),
            user_id,
            date,
            content,
            mood,
            metrics,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute an entry from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: EntryId,
        user_id: UserId,
        date: NaiveDate,
        content: String,
        mood: Option<Mood>,
        metrics: DailyMetrics,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            date,
            content,
            mood,
            metrics,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    pub fn metrics(&self) -> &DailyMetrics {
        &self.metrics
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// True when the free text carries nothing to score.
    pub fn has_blank_content(&self) -> bool {
        self.content.trim().is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Soft-edit the entry. Only allowed on the entry's own date.
    ///
    /// # Errors
    ///
    /// - `EditWindowClosed` if `today` is not the entry date
    /// - `ValidationFailed` if the new values are invalid
    pub fn revise(
        &mut self,
        today: NaiveDate,
        content: String,
        mood: Option<Mood>,
        metrics: DailyMetrics,
    ) -> Result<(), DomainError> {
        if today != self.date {
            return Err(DomainError::new(
                ErrorCode::EditWindowClosed,
                format!("Entry for {} can no longer be edited", self.date),
            )
            .with_detail("date", self.date.to_string()));
        }
        Self::validate(&content, mood, &metrics)?;

        self.content = content;
        self.mood = mood;
        self.metrics = metrics;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    fn validate(content: &str, mood: Option<Mood>, metrics: &DailyMetrics) -> Result<(), DomainError> {
        if content.chars().count() > MAX_CONTENT_LENGTH {
            return Err(DomainError::validation(
                "content",
                format!("Content must be {} characters or less", MAX_CONTENT_LENGTH),
            ));
        }
        if content.trim().is_empty() && mood.is_none() && metrics.is_empty() {
            return Err(DomainError::validation(
                "content",
                "Entry needs some text, a mood, or metrics",
            ));
        }
        metrics.validate()?;
        Ok(())
    }
}
