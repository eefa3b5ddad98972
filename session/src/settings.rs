use serde::{Deserialize, Serialize};
use sweeper_core::{Difficulty, GameConfig};

use crate::Result;

/// Settings shared by every game a store starts.
///
/// ```toml
/// difficulty = "intermediate"
/// seed = 42
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    /// Fixed base seed for reproducible games, entropy when absent.
    pub seed: Option<u64>,
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn game_config(&self) -> GameConfig {
        self.difficulty.config()
    }

    /// Seed for the `game_index`-th game, distinct per game but stable for a fixed base.
    pub fn game_seed(&self, game_index: u64) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(game_index))
    }
}
