use rand::Rng;
use shared::{ColonyId, Position};
use std::ops::Range;

/// Index of a nest inside the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NestId(pub usize);

/// A colony's home cell and the food it has gathered so far.
#[derive(Debug, Clone)]
pub struct Nest {
    position: Position,
    colony_id: ColonyId,
    total_food: u32,
}

impl Nest {
    pub fn new(position: Position, colony_id: ColonyId) -> Self {
        Self {
            position,
            colony_id,
            total_food: 0,
        }
    }

    /// Places the nest uniformly at random inside the given quadrant.
    pub fn in_quadrant<R: Rng + ?Sized>(
        rng: &mut R,
        rows: Range<usize>,
        cols: Range<usize>,
        colony_id: ColonyId,
    ) -> Self {
        let position = Position::new(rng.random_range(rows), rng.random_range(cols));
        Self::new(position, colony_id)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn colony_id(&self) -> ColonyId {
        self.colony_id
    }

    pub fn total_food(&self) -> u32 {
        self.total_food
    }

    pub fn deposit_food(&mut self) {
        self.total_food += 1;
    }
}
