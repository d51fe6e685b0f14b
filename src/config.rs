//! Session settings.
//!
//! Every field has a default matching the classic layout: two gems, five
//! bugs with speeds in `[1, 10)`. A JSON file may override any subset.

use std::fs;
use std::ops::Range;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pickups::SPAWN_CELLS;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "CROSSING_GAME_CONFIG";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Gems kept on the map at rest.
    pub pickup_count: usize,
    pub hazard_count: usize,
    /// Lowest bug speed, inclusive.
    pub hazard_speed_min: u32,
    /// Highest bug speed, exclusive.
    pub hazard_speed_max: u32,
    /// Fixed RNG seed for a reproducible session.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pickup_count: 2,
            hazard_count: 5,
            hazard_speed_min: 1,
            hazard_speed_max: 10,
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Defaults, or the file named by [`CONFIG_ENV`] when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Collecting a gem briefly holds one extra, which must still fit.
        if self.pickup_count == 0 || self.pickup_count >= SPAWN_CELLS {
            return Err(ConfigError::Invalid(format!(
                "pickup_count must be in 1..={}, got {}",
                SPAWN_CELLS - 1,
                self.pickup_count
            )));
        }
        if self.hazard_speed_min == 0 {
            return Err(ConfigError::Invalid(
                "hazard_speed_min must be at least 1".to_string(),
            ));
        }
        if self.hazard_speed_min >= self.hazard_speed_max {
            return Err(ConfigError::Invalid(format!(
                "hazard speed range {}..{} is empty",
                self.hazard_speed_min, self.hazard_speed_max
            )));
        }
        if self.hazard_speed_max > i32::MAX as u32 {
            return Err(ConfigError::Invalid(format!(
                "hazard_speed_max {} is too large",
                self.hazard_speed_max
            )));
        }
        Ok(())
    }

    pub fn hazard_speeds(&self) -> Range<u32> {
        self.hazard_speed_min..self.hazard_speed_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_layout() {
        let c = SessionConfig::default();
        assert_eq!(c.pickup_count, 2);
        assert_eq!(c.hazard_count, 5);
        assert_eq!(c.hazard_speeds(), 1..10);
        assert_eq!(c.seed, None);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = SessionConfig::from_json_str(r#"{ "hazard_count": 3, "seed": 9 }"#).unwrap();
        assert_eq!(c.hazard_count, 3);
        assert_eq!(c.seed, Some(9));
        assert_eq!(c.pickup_count, 2);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(
            SessionConfig::from_json_str("{}").unwrap(),
            SessionConfig::default()
        );
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let err = SessionConfig::from_json_str(r#"{ "lives": 3 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_pickups_rejected() {
        let err = SessionConfig::from_json_str(r#"{ "pickup_count": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn pickups_must_leave_room_for_replacement() {
        let ok = SessionConfig {
            pickup_count: SPAWN_CELLS - 1,
            ..SessionConfig::default()
        };
        assert!(ok.validate().is_ok());

        let full = SessionConfig {
            pickup_count: SPAWN_CELLS,
            ..SessionConfig::default()
        };
        assert!(matches!(full.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn speed_range_checked() {
        let zero = SessionConfig {
            hazard_speed_min: 0,
            ..SessionConfig::default()
        };
        assert!(zero.validate().is_err());

        let empty = SessionConfig {
            hazard_speed_min: 5,
            hazard_speed_max: 5,
            ..SessionConfig::default()
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SessionConfig::load("/nonexistent/crossing.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
