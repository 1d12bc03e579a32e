//! Score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A stat score between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Score(u8);

impl Score {
    /// Lowest possible score.
    pub const MIN: Self = Self(0);

    /// Highest possible score.
    pub const MAX: Self = Self(100);

    /// Starting score for a fresh character.
    pub const BASELINE: Self = Self(50);

    /// Creates a Score, clamping to the valid range.
    pub fn clamped(value: i32) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// Creates a Score, returning error if out of range.
    pub fn try_new(value: i32) -> Result<Self, ValidationError> {
        if !(0..=100).contains(&value) {
            return Err(ValidationError::out_of_range("score", 0, 100, value));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Applies a signed delta and clamps the result.
    pub fn adjust(self, delta: i32) -> Self {
        Self::clamped(i32::from(self.0) + delta)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::BASELINE
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for Score {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Score> for i32 {
    fn from(score: Score) -> Self {
        i32::from(score.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_keeps_values_in_range() {
        assert_eq!(Score::clamped(-20).value(), 0);
        assert_eq!(Score::clamped(42).value(), 42);
        assert_eq!(Score::clamped(250).value(), 100);
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        match Score::try_new(101) {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "score");
                assert_eq!((min, max, actual), (0, 100, 101));
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
        assert!(Score::try_new(-1).is_err());
        assert!(Score::try_new(0).is_ok());
    }

    #[test]
    fn adjust_saturates_at_bounds() {
        assert_eq!(Score::clamped(95).adjust(10), Score::MAX);
        assert_eq!(Score::clamped(3).adjust(-10), Score::MIN);
        assert_eq!(Score::clamped(40).adjust(-8).value(), 32);
    }

    #[test]
    fn default_is_baseline() {
        assert_eq!(Score::default().value(), 50);
    }

    #[test]
    fn deserializing_rejects_out_of_range() {
        assert!(serde_json::from_str::<Score>("75").is_ok());
        assert!(serde_json::from_str::<Score>("120").is_err());
    }
}
