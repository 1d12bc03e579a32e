//! Game loop configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Settings for the daily loop
#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// The single local player
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Missions generated per day
    #[serde(default = "default_missions_per_day")]
    pub missions_per_day: usize,

    /// Stat snapshots returned with the current stats
    #[serde(default = "default_history_days")]
    pub history_days: u32,
}

impl GameConfig {
    /// Validate game configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.user_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("GAME__USER_ID"));
        }
        if self.missions_per_day == 0 || self.missions_per_day > 5 {
            return Err(ValidationError::InvalidMissionCount);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            missions_per_day: default_missions_per_day(),
            history_days: default_history_days(),
        }
    }
}

fn default_user_id() -> String {
    "local".to_string()
}

fn default_missions_per_day() -> usize {
    3
}

fn default_history_days() -> u32 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_config_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.user_id, "local");
        assert_eq!(config.missions_per_day, 3);
        assert_eq!(config.history_days, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_mission_count() {
        for count in [0, 6] {
            let config = GameConfig {
                missions_per_day: count,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidMissionCount));
        }
    }

    #[test]
    fn test_validation_blank_user() {
        let config = GameConfig {
            user_id: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
