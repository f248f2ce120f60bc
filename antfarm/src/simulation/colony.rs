use super::ant::{Ant, AntKey};
use super::{Environment, NestId, SimTime};
use rand::Rng;
use shared::{ColonyId, Position};
use slotmap::SlotMap;

/// A nest's permanently affiliated ants.
pub struct Colony {
    pub colony_id: ColonyId,
    pub nest: NestId,
    pub ants: SlotMap<AntKey, Ant>,
}

impl Colony {
    pub fn new(colony_id: ColonyId, nest: NestId) -> Self {
        Self {
            colony_id,
            nest,
            ants: SlotMap::with_key(),
        }
    }

    pub fn spawn_ants(&mut self, start: Position, count: usize, sensing_range: usize) {
        self.ants.reserve(count);
        for _ in 0..count {
            self.spawn_ant(start, sensing_range);
        }
    }

    pub fn spawn_ant(&mut self, start: Position, sensing_range: usize) -> AntKey {
        self.ants
            .insert(Ant::new(start, self.nest, self.colony_id, sensing_range))
    }

    /// Steps every ant once, in creation order.
    pub fn update<R: Rng + ?Sized>(&mut self, now: SimTime, env: &mut Environment, rng: &mut R) {
        for ant in self.ants.values_mut() {
            ant.step(now, env, rng);
        }
    }

    pub fn carrying_count(&self) -> usize {
        self.ants.values().filter(|ant| ant.carrying_food).count()
    }
}
