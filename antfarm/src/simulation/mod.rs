pub mod ant;
mod colony;
mod environment;
pub mod food;
mod grid;
mod nest;
mod pheromone;
mod sim;
mod timer;

// Re-export key types for easier imports
pub use ant::{Ant, AntKey, VisitedHistory};
pub use colony::Colony;
pub use environment::Environment;
pub use food::{FoodField, FoodItem, generate_random_food};
pub use grid::SpatialGrid;
pub use nest::{Nest, NestId};
pub use pheromone::{PheromoneField, PheromoneGrid};
pub use sim::Simulation;
pub use timer::{SimTime, Timer};

// Time constants (virtual milliseconds)
pub const ANT_ACTION_MS: SimTime = 100; // Every ant acts once per tick
pub const PICKUP_COOLDOWN_MS: SimTime = 2_000;
pub const DEPOSIT_COOLDOWN_MS: SimTime = 3_000;
pub const IGNORE_PHEROMONE_MS: SimTime = 5_000;

// Pheromone constants
// Trail lifetime = DEPOSIT / DECAY_STEP * DECAY_INTERVAL = 10 * 1s = 10s
pub const PHEROMONE_DEPOSIT: f32 = 10.0;
pub const PHEROMONE_DECAY_STEP: f32 = 1.0;
pub const PHEROMONE_DECAY_INTERVAL_MS: SimTime = 1_000;

// Ant behavior constants
pub const VISITED_HISTORY_CAPACITY: usize = 50;

// Food constants
pub const FOOD_SPAWN_MAX_ATTEMPTS: usize = 100;

// Game constants
pub const DEFAULT_FOOD_TARGET: u32 = 50;
pub const MAX_COLONIES: usize = 4;
