//! Competing ant colonies foraging on a grid.
//!
//! The [`simulation`] module holds the per-ant state machine and the shared
//! environment it reads and mutates; rendering and input are left to callers.

pub mod config;
pub mod simulation;

pub use config::{ConfigError, SimulationConfig};
pub use simulation::Simulation;
