use rand::Rng;
use shared::{ColonyId, Position};

use super::{FoodField, FoodItem, Nest, NestId, PheromoneField, SpatialGrid};

/// The world all ants share: bounds, food, per-colony trails and nests.
///
/// Ants never hold a copy of any of this. They receive `&mut Environment` for the
/// duration of their own step, so only one ant mutates it at a time.
pub struct Environment {
    pub grid: SpatialGrid,
    pub food: FoodField,
    pub pheromones: PheromoneField,
    nests: Vec<Nest>,
}

impl Environment {
    pub fn new(rows: usize, cols: usize, food_items: Vec<FoodItem>, nests: Vec<Nest>) -> Self {
        let pheromones = PheromoneField::new(rows, cols, nests.iter().map(Nest::colony_id));
        Self {
            grid: SpatialGrid::new(rows, cols),
            food: FoodField::new(food_items),
            pheromones,
            nests,
        }
    }

    pub fn nests(&self) -> &[Nest] {
        &self.nests
    }

    pub fn nest(&self, id: NestId) -> Option<&Nest> {
        self.nests.get(id.0)
    }

    pub fn nest_mut(&mut self, id: NestId) -> Option<&mut Nest> {
        self.nests.get_mut(id.0)
    }

    pub fn nest_ids(&self) -> impl Iterator<Item = NestId> + '_ {
        (0..self.nests.len()).map(NestId)
    }

    pub fn food_items(&self) -> &[FoodItem] {
        self.food.items()
    }

    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        self.grid.neighbors(pos)
    }

    pub fn drop_pheromone(&mut self, pos: Position, colony: ColonyId) {
        self.pheromones.deposit(pos, colony);
    }

    pub fn pheromone_at(&self, pos: Position, colony: ColonyId) -> f32 {
        self.pheromones.intensity_at(pos, colony)
    }

    /// One bite of the food at exactly `pos`; true if it was used up.
    pub fn consume_food_at(&mut self, pos: Position) -> bool {
        self.food.consume_at(pos)
    }

    pub fn decay_tick(&mut self) {
        self.pheromones.decay_tick();
    }

    /// Attempts to spawn one food item clear of existing food and every nest.
    pub fn spawn_tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let nest_positions: Vec<Position> = self.nests.iter().map(Nest::position).collect();
        self.food.spawn(rng, &self.grid, &nest_positions).is_some()
    }

    /// First colony whose nest has gathered at least `target` food.
    pub fn leader_at_or_above(&self, target: u32) -> Option<ColonyId> {
        self.nests
            .iter()
            .find(|nest| nest.total_food() >= target)
            .map(Nest::colony_id)
    }
}
