pub mod api;
pub mod util;

pub use api::{ColonyId, FoodType, Goal, Position};
pub use util::{chebyshev_distance, distance_squared, facing_angle, step_towards};
