//! Difficulty configuration.
//!
//! A session is parameterized by one [`Difficulty`] picked from a
//! [`DifficultyTable`]. The table has built-in values and can be overridden
//! from a JSON file with any subset of the `easy`, `hard` and `extreme` keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a difficulty table.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid {level} difficulty: {reason}")]
    Invalid {
        level: DifficultyLevel,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Named difficulty presets
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    #[default]
    Easy,
    Hard,
    Extreme,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 3] = [Self::Easy, Self::Hard, Self::Extreme];

    pub fn name(&self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "easy",
            DifficultyLevel::Hard => "hard",
            DifficultyLevel::Extreme => "extreme",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters bound at session start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Number of agents, taken from the front of the stage's spawn list
    pub monsters: usize,
    pub speed_mult: f32,
    pub melee_damage: i32,
    pub player_hp: i32,
    pub detection_range: f32,
}

impl Difficulty {
    pub const EASY: Difficulty = Difficulty {
        monsters: 3,
        speed_mult: 0.6,
        melee_damage: 5,
        player_hp: 150,
        detection_range: 8.0,
    };

    pub const HARD: Difficulty = Difficulty {
        monsters: 6,
        speed_mult: 1.0,
        melee_damage: 12,
        player_hp: 100,
        detection_range: 12.0,
    };

    pub const EXTREME: Difficulty = Difficulty {
        monsters: 10,
        speed_mult: 1.5,
        melee_damage: 25,
        player_hp: 75,
        detection_range: 16.0,
    };

    fn validate(&self, level: DifficultyLevel) -> Result<()> {
        let reason = if self.player_hp <= 0 {
            "player_hp must be positive"
        } else if !(self.speed_mult >= 0.0) {
            "speed_mult must not be negative"
        } else if !(self.detection_range > 0.0) {
            "detection_range must be positive"
        } else if self.melee_damage < 0 {
            "melee_damage must not be negative"
        } else {
            return Ok(());
        };
        Err(ConfigError::Invalid { level, reason })
    }
}

/// One [`Difficulty`] per level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyTable {
    pub easy: Difficulty,
    pub hard: Difficulty,
    pub extreme: Difficulty,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            easy: Difficulty::EASY,
            hard: Difficulty::HARD,
            extreme: Difficulty::EXTREME,
        }
    }
}

impl DifficultyTable {
    pub fn get(&self, level: DifficultyLevel) -> Difficulty {
        match level {
            DifficultyLevel::Easy => self.easy,
            DifficultyLevel::Hard => self.hard,
            DifficultyLevel::Extreme => self.extreme,
        }
    }

    /// Parse and validate a table. Missing levels keep their built-in values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        for level in DifficultyLevel::ALL {
            if value.get(level.name()).is_none() {
                tracing::warn!(%level, "difficulty missing from config, using built-in preset");
            }
        }

        let table: DifficultyTable = serde_json::from_value(value)?;
        table.validate()?;
        Ok(table)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_json_str(&json).map_err(|err| match err {
            ConfigError::Json(source) => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        tracing::info!("Loaded difficulty table from {}", path.display());
        Ok(table)
    }

    pub fn validate(&self) -> Result<()> {
        for level in DifficultyLevel::ALL {
            self.get(level).validate(level)?;
        }
        Ok(())
    }
}
