use serde::Deserialize;
use thiserror::Error;

use crate::simulation::{DEFAULT_FOOD_TARGET, MAX_COLONIES};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid must be at least 2x2, got {rows}x{cols}")]
    GridTooSmall { rows: usize, cols: usize },
    #[error("colony count must be between 1 and {max}, got {0}", max = MAX_COLONIES)]
    ColonyCount(usize),
    #[error("sensing range must be at least 1")]
    ZeroSensingRange,
    #[error("food target must be at least 1")]
    ZeroFoodTarget,
    #[error("food spawn interval is inverted: {min}s > {max}s")]
    SpawnInterval { min: u64, max: u64 },
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    pub colony_count: usize,
    pub ants_per_colony: usize,
    pub initial_food: usize,
    pub sensing_range: usize,
    pub food_target: u32,
    pub spawn_interval_min_secs: u64,
    pub spawn_interval_max_secs: u64,
    pub seed: Option<u64>, // Random when absent
    pub max_ticks: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 30,
            cols: 40,
            colony_count: MAX_COLONIES,
            ants_per_colony: 10,
            initial_food: 10,
            sensing_range: 1,
            food_target: DEFAULT_FOOD_TARGET,
            spawn_interval_min_secs: 5,
            spawn_interval_max_secs: 15,
            seed: None,
            max_ticks: 100_000,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 2 || self.cols < 2 {
            return Err(ConfigError::GridTooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.colony_count == 0 || self.colony_count > MAX_COLONIES {
            return Err(ConfigError::ColonyCount(self.colony_count));
        }
        if self.sensing_range == 0 {
            return Err(ConfigError::ZeroSensingRange);
        }
        if self.food_target == 0 {
            return Err(ConfigError::ZeroFoodTarget);
        }
        if self.spawn_interval_min_secs > self.spawn_interval_max_secs {
            return Err(ConfigError::SpawnInterval {
                min: self.spawn_interval_min_secs,
                max: self.spawn_interval_max_secs,
            });
        }
        Ok(())
    }
}
