//! Stat Engine - turns a journal entry into stat changes.
//!
//! Pure and deterministic. The same current stats and entry always produce
//! the same new stats.
//!
//! # Heuristic
//!
//! 1. Blank content leaves the stats untouched.
//! 2. Content is split into lowercase words. Words found in the cue table
//!    nudge their stat; a negator in the two preceding words ("skipped",
//!    "didn't", ...) turns the cue into a miss.
//! 3. The entry's mood nudges Wellbeing and its metrics nudge Wellbeing,
//!    Knowledge and Discipline.
//! 4. Per stat the summed delta is capped at `MAX_DELTA_PER_ENTRY` and the
//!    resulting score is clamped to 0..=100.

use std::collections::BTreeMap;

use super::{Stat, StatSet};
use crate::domain::journal::{DailyMetrics, JournalEntry, Mood};
use crate::domain::missions::Mission;

/// Largest change one entry can make to a single stat.
pub const MAX_DELTA_PER_ENTRY: i32 = 15;

/// How many words back a negator may appear.
const NEGATION_WINDOW: usize = 2;

const NEGATORS: &[&str] = &[
    "skipped", "skip", "missed", "didn't", "didnt", "no", "not", "never", "forgot", "avoided",
    "without", "couldn't", "couldnt", "cancelled",
];

/// A journal word that moves one stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cue {
    pub word: &'static str,
    pub stat: Stat,
    /// Applied when the activity happened.
    pub done_delta: i32,
    /// Applied when a negator precedes the word.
    pub missed_delta: i32,
}

const fn cue(word: &'static str, stat: Stat, done_delta: i32, missed_delta: i32) -> Cue {
    Cue {
        word,
        stat,
        done_delta,
        missed_delta,
    }
}

/// Words the engine reacts to.
pub const CUES: &[Cue] = &[
    // Discipline
    cue("workout", Stat::Discipline, 4, -5),
    cue("exercise", Stat::Discipline, 4, -5),
    cue("exercised", Stat::Discipline, 4, -5),
    cue("gym", Stat::Discipline, 4, -5),
    cue("run", Stat::Discipline, 3, -4),
    cue("ran", Stat::Discipline, 3, -4),
    cue("jog", Stat::Discipline, 3, -4),
    cue("routine", Stat::Discipline, 3, -3),
    cue("chores", Stat::Discipline, 2, -2),
    cue("procrastinated", Stat::Discipline, -4, 2),
    // Wellbeing
    cue("slept", Stat::Wellbeing, 3, -4),
    cue("sleep", Stat::Wellbeing, 3, -4),
    cue("meditated", Stat::Wellbeing, 4, -2),
    cue("meditation", Stat::Wellbeing, 4, -2),
    cue("yoga", Stat::Wellbeing, 3, -2),
    cue("breakfast", Stat::Wellbeing, 2, -2),
    cue("relaxed", Stat::Wellbeing, 3, -1),
    cue("exhausted", Stat::Wellbeing, -4, 0),
    cue("sick", Stat::Wellbeing, -3, 0),
    // Focus
    cue("focused", Stat::Focus, 4, -4),
    cue("concentrated", Stat::Focus, 4, -4),
    cue("pomodoro", Stat::Focus, 4, -3),
    cue("productive", Stat::Focus, 3, -3),
    cue("distracted", Stat::Focus, -4, 2),
    cue("scrolling", Stat::Focus, -3, 1),
    // Knowledge
    cue("studied", Stat::Knowledge, 4, -4),
    cue("study", Stat::Knowledge, 3, -4),
    cue("homework", Stat::Knowledge, 3, -4),
    cue("read", Stat::Knowledge, 3, -2),
    cue("lecture", Stat::Knowledge, 3, -3),
    cue("class", Stat::Knowledge, 2, -3),
    cue("learned", Stat::Knowledge, 4, -2),
    cue("practiced", Stat::Knowledge, 3, -3),
    cue("assignment", Stat::Knowledge, 3, -4),
    // Social
    cue("friends", Stat::Social, 4, -3),
    cue("friend", Stat::Social, 3, -3),
    cue("family", Stat::Social, 3, -2),
    cue("called", Stat::Social, 2, -2),
    cue("talked", Stat::Social, 3, -2),
    cue("club", Stat::Social, 3, -3),
    cue("team", Stat::Social, 2, -2),
    cue("lonely", Stat::Social, -4, 1),
];

/// One cue found in an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueHit {
    pub cue: Cue,
    pub missed: bool,
}

impl CueHit {
    pub fn delta(&self) -> i32 {
        if self.missed {
            self.cue.missed_delta
        } else {
            self.cue.done_delta
        }
    }
}

/// Stateless stat computations.
pub struct StatEngine;

impl StatEngine {
    /// Computes the stats after applying `entry` to `current`.
    pub fn update(current: &StatSet, entry: &JournalEntry) -> StatSet {
        if entry.has_blank_content() {
            return *current;
        }

        let mut deltas: BTreeMap<Stat, i32> = BTreeMap::new();
        for hit in Self::scan(entry.content()) {
            *deltas.entry(hit.cue.stat).or_default() += hit.delta();
        }
        if let Some(mood) = entry.mood() {
            *deltas.entry(Stat::Wellbeing).or_default() += Self::mood_delta(mood);
        }
        for (stat, delta) in Self::metric_deltas(entry.metrics()) {
            *deltas.entry(stat).or_default() += delta;
        }

        let mut next = *current;
        for (stat, delta) in deltas {
            let capped = delta.clamp(-MAX_DELTA_PER_ENTRY, MAX_DELTA_PER_ENTRY);
            next.set(stat, current.get(stat).adjust(capped));
        }
        next
    }

    /// Bonus for completing `mission`, applied to its target stat.
    pub fn reward(stats: &StatSet, mission: &Mission) -> StatSet {
        let stat = mission.target_stat();
        let bonus = mission.difficulty().completion_bonus();
        stats.with(stat, stats.get(stat).adjust(bonus))
    }

    /// Finds every cue in `content`. Each cue word counts once.
    pub fn scan(content: &str) -> Vec<CueHit> {
        let words = tokenize(content);
        let mut hits: Vec<CueHit> = Vec::new();

        for (i, word) in words.iter().enumerate() {
            let Some(cue) = CUES.iter().find(|c| c.word == word.as_str()) else {
                continue;
            };
            if hits.iter().any(|h| h.cue.word == cue.word) {
                continue;
            }
            let start = i.saturating_sub(NEGATION_WINDOW);
            let missed = words[start..i]
                .iter()
                .any(|w| NEGATORS.contains(&w.as_str()));
            hits.push(CueHit { cue: *cue, missed });
        }
        hits
    }

    /// Stats the entry reports as neglected.
    pub fn missed_stats(content: &str) -> Vec<Stat> {
        let mut stats: Vec<Stat> = Self::scan(content)
            .into_iter()
            .filter(|h| h.missed && h.cue.missed_delta < 0)
            .map(|h| h.cue.stat)
            .collect();
        stats.sort();
        stats.dedup();
        stats
    }

    fn mood_delta(mood: Mood) -> i32 {
        match mood {
            Mood::Happy => 6,
            Mood::Excited => 5,
            Mood::Neutral => 0,
            Mood::Tired => -3,
            Mood::Angry => -4,
            Mood::Stressed | Mood::Anxious => -5,
            Mood::Sad => -6,
        }
    }

    fn metric_deltas(metrics: &DailyMetrics) -> Vec<(Stat, i32)> {
        let mut deltas = Vec::new();
        if let Some(hours) = metrics.sleep_hours {
            if hours < 6.0 {
                deltas.push((Stat::Wellbeing, -4));
            } else if hours >= 8.0 {
                deltas.push((Stat::Wellbeing, 3));
            }
        }
        if metrics.study_minutes.is_some_and(|m| m >= 30) {
            deltas.push((Stat::Knowledge, 4));
        }
        if metrics.movement_minutes.is_some_and(|m| m >= 15) {
            deltas.push((Stat::Discipline, 3));
        }
        deltas
    }
}

/// Lowercase words, apostrophes kept, everything else a separator.
fn tokenize(content: &str) -> Vec<String> {
    content
        .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase().replace('\u{2019}', "'"))
        .collect()
}
