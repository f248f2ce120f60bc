use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::{ColonyId, Position};

use crate::config::{ConfigError, SimulationConfig};

use super::ant::Ant;
use super::colony::Colony;
use super::environment::Environment;
use super::food::generate_random_food;
use super::nest::{Nest, NestId};
use super::{ANT_ACTION_MS, PHEROMONE_DECAY_INTERVAL_MS, SimTime, Timer};

pub struct Simulation {
    pub tick: u64,
    /// Virtual time of the last tick.
    pub clock: SimTime,
    pub env: Environment,
    pub colonies: Vec<Colony>,
    pub config: SimulationConfig,
    pub seed: u64,
    pheromone_decay_timer: Timer,
    food_spawn_timer: Timer,
    rng: StdRng,
    winner: Option<ColonyId>,
}

impl Simulation {
    /// Builds a fresh world from the configuration: one nest per quadrant,
    /// every colony's ants on its nest, and scattered initial food.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        tracing::info!("Starting simulation with seed {}", seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let env = Self::build_environment(&config, &mut rng);
        Ok(Self::assemble(config, seed, env, rng))
    }

    /// Runs on a prepared environment; ants are still created from the configuration.
    pub fn from_environment(
        config: SimulationConfig,
        env: Environment,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_default();
        let rng = StdRng::seed_from_u64(seed);
        Ok(Self::assemble(config, seed, env, rng))
    }

    fn assemble(config: SimulationConfig, seed: u64, env: Environment, mut rng: StdRng) -> Self {
        let colonies = Self::populate(&config, &env);
        let first_spawn = Self::next_spawn_wait(&config, &mut rng);
        Self {
            tick: 0,
            clock: 0,
            env,
            colonies,
            config,
            seed,
            pheromone_decay_timer: Timer::new(PHEROMONE_DECAY_INTERVAL_MS, 0),
            food_spawn_timer: Timer::new(first_spawn, 0),
            rng,
            winner: None,
        }
    }

    fn build_environment(config: &SimulationConfig, rng: &mut StdRng) -> Environment {
        let (rows, cols) = (config.rows, config.cols);
        let mid_row = rows / 2;
        let mid_col = cols / 2;
        let quadrants = [
            (0..mid_row, 0..mid_col),
            (0..mid_row, mid_col..cols),
            (mid_row..rows, 0..mid_col),
            (mid_row..rows, mid_col..cols),
        ];

        let nests: Vec<Nest> = quadrants
            .into_iter()
            .take(config.colony_count)
            .enumerate()
            .map(|(i, (row_range, col_range))| {
                Nest::in_quadrant(rng, row_range, col_range, ColonyId(i as u32))
            })
            .collect();
        for nest in &nests {
            tracing::debug!("Nest for {} at {}", nest.colony_id(), nest.position());
        }

        let food = generate_random_food(rng, rows, cols, config.initial_food);
        Environment::new(rows, cols, food, nests)
    }

    fn populate(config: &SimulationConfig, env: &Environment) -> Vec<Colony> {
        env.nest_ids()
            .filter_map(|id| env.nest(id).map(|nest| (id, nest)))
            .map(|(id, nest)| {
                let mut colony = Colony::new(nest.colony_id(), id);
                colony.spawn_ants(nest.position(), config.ants_per_colony, config.sensing_range);
                colony
            })
            .collect()
    }

    fn next_spawn_wait<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> SimTime {
        let secs = rng.random_range(config.spawn_interval_min_secs..=config.spawn_interval_max_secs);
        secs * 1_000
    }

    /// Advances virtual time by one ant action. Every colony steps every ant, in
    /// ascending colony order; then the periodic decay and spawn processes catch up.
    /// Returns the winner once a nest reaches the food target.
    pub fn tick(&mut self) -> Option<ColonyId> {
        if self.winner.is_some() {
            return self.winner;
        }

        self.tick += 1;
        self.clock += ANT_ACTION_MS;

        for colony in &mut self.colonies {
            colony.update(self.clock, &mut self.env, &mut self.rng);
        }

        self.pheromone_decay_timer.update(ANT_ACTION_MS);
        while self.pheromone_decay_timer.is_ready() {
            self.env.decay_tick();
            self.pheromone_decay_timer.wrap();
        }

        self.food_spawn_timer.update(ANT_ACTION_MS);
        if self.food_spawn_timer.is_ready() {
            self.env.spawn_tick(&mut self.rng);
            let wait = Self::next_spawn_wait(&self.config, &mut self.rng);
            self.food_spawn_timer.rearm(wait);
        }

        self.winner = self.env.leader_at_or_above(self.config.food_target);
        if let Some(winner) = self.winner {
            tracing::info!("{} reached {} food after {} ticks", winner, self.config.food_target, self.tick);
        }
        self.winner
    }

    /// Ticks until a colony wins or `max_ticks` ticks have run.
    pub fn run(&mut self, max_ticks: u64) -> Option<ColonyId> {
        for _ in 0..max_ticks {
            if self.tick().is_some() {
                break;
            }
        }
        self.winner
    }

    pub fn winner(&self) -> Option<ColonyId> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Discards the whole world and rebuilds it from the configuration.
    /// The random stream carries on, so the new layout differs from the last.
    pub fn reset(&mut self) {
        let env = Self::build_environment(&self.config, &mut self.rng);
        self.colonies = Self::populate(&self.config, &env);
        self.env = env;
        self.tick = 0;
        self.clock = 0;
        self.winner = None;
        self.pheromone_decay_timer = Timer::new(PHEROMONE_DECAY_INTERVAL_MS, 0);
        let first_spawn = Self::next_spawn_wait(&self.config, &mut self.rng);
        self.food_spawn_timer = Timer::new(first_spawn, 0);
    }

    pub fn colony(&self, colony_id: ColonyId) -> Option<&Colony> {
        self.colonies.iter().find(|colony| colony.colony_id == colony_id)
    }

    pub fn ants(&self) -> impl Iterator<Item = &Ant> {
        self.colonies.iter().flat_map(|colony| colony.ants.values())
    }

    pub fn nest_of(&self, colony: &Colony) -> Option<&Nest> {
        self.env.nest(colony.nest)
    }

    pub fn total_ant_count(&self) -> usize {
        self.colonies.iter().map(|colony| colony.ants.len()).sum()
    }

    /// Nest position and food total per colony, in colony order.
    pub fn scores(&self) -> Vec<(ColonyId, Position, u32)> {
        self.env
            .nests()
            .iter()
            .map(|nest| (nest.colony_id(), nest.position(), nest.total_food()))
            .collect()
    }

    pub fn nest_id_of(&self, colony_id: ColonyId) -> Option<NestId> {
        self.colony(colony_id).map(|colony| colony.nest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::PHEROMONE_DEPOSIT;

    fn config() -> SimulationConfig {
        SimulationConfig {
            rows: 20,
            cols: 24,
            ants_per_colony: 6,
            initial_food: 8,
            seed: Some(1234),
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_setup_places_one_nest_per_quadrant() {
        let sim = Simulation::new(config()).expect("valid config");
        let nests = sim.env.nests();
        assert_eq!(nests.len(), 4);
        assert!(nests[0].position().row < 10 && nests[0].position().col < 12);
        assert!(nests[1].position().row < 10 && nests[1].position().col >= 12);
        assert!(nests[2].position().row >= 10 && nests[2].position().col < 12);
        assert!(nests[3].position().row >= 10 && nests[3].position().col >= 12);
        assert_eq!(sim.total_ant_count(), 24);
        for colony in &sim.colonies {
            let home = sim.nest_of(colony).map(Nest::position);
            assert!(colony.ants.values().all(|ant| Some(ant.position) == home));
        }
    }

    #[test]
    fn test_same_seed_replays_identically() {
        let mut a = Simulation::new(config()).expect("valid config");
        let mut b = Simulation::new(config()).expect("valid config");
        for _ in 0..300 {
            a.tick();
            b.tick();
        }
        let positions_a: Vec<_> = a.ants().map(|ant| (ant.position, ant.carrying_food)).collect();
        let positions_b: Vec<_> = b.ants().map(|ant| (ant.position, ant.carrying_food)).collect();
        assert_eq!(positions_a, positions_b);
        assert_eq!(a.scores(), b.scores());
        assert_eq!(a.env.food_items(), b.env.food_items());
    }

    #[test]
    fn test_pheromone_decays_once_per_second() {
        let env = Environment::new(6, 6, Vec::new(), vec![Nest::new(Position::new(0, 0), ColonyId(0))]);
        let mut sim = Simulation::from_environment(
            SimulationConfig {
                rows: 6,
                cols: 6,
                colony_count: 1,
                ants_per_colony: 0,
                ..SimulationConfig::default()
            },
            env,
        )
        .expect("valid config");
        let cell = Position::new(4, 4);
        sim.env.drop_pheromone(cell, ColonyId(0));
        for _ in 0..9 {
            sim.tick();
        }
        assert_eq!(sim.env.pheromone_at(cell, ColonyId(0)), PHEROMONE_DEPOSIT);
        sim.tick();
        assert_eq!(sim.env.pheromone_at(cell, ColonyId(0)), PHEROMONE_DEPOSIT - 1.0);
        for _ in 0..90 {
            sim.tick();
        }
        assert_eq!(sim.env.pheromone_at(cell, ColonyId(0)), 0.0);
    }

    #[test]
    fn test_food_spawns_within_configured_interval() {
        let config = SimulationConfig {
            initial_food: 0,
            ants_per_colony: 0,
            seed: Some(8),
            ..SimulationConfig::default()
        };
        let min_wait_ticks = config.spawn_interval_min_secs * 1_000 / ANT_ACTION_MS;
        let max_wait_ticks = config.spawn_interval_max_secs * 1_000 / ANT_ACTION_MS;
        let mut sim = Simulation::new(config).expect("valid config");
        for _ in 0..min_wait_ticks - 1 {
            sim.tick();
        }
        assert!(sim.env.food_items().is_empty());
        for _ in min_wait_ticks - 1..max_wait_ticks {
            sim.tick();
        }
        assert!(!sim.env.food_items().is_empty());
    }

    #[test]
    fn test_game_over_and_reset() {
        let mut sim = Simulation::new(SimulationConfig {
            food_target: 1,
            ..config()
        })
        .expect("valid config");
        let nest_id = sim.nest_id_of(ColonyId(2)).expect("colony 2 exists");
        let key = sim.colonies[2].ants.keys().next().expect("colony has ants");
        sim.colonies[2].ants[key].carrying_food = true;

        assert_eq!(sim.tick(), Some(ColonyId(2)));
        assert!(sim.is_over());
        assert_eq!(sim.winner(), Some(ColonyId(2)));
        assert_eq!(sim.env.nest(nest_id).map(Nest::total_food), Some(1));

        let tick = sim.tick;
        assert_eq!(sim.tick(), Some(ColonyId(2)));
        assert_eq!(sim.tick, tick);
        assert_eq!(sim.total_ant_count(), 24);

        sim.reset();
        assert!(!sim.is_over());
        assert_eq!(sim.winner(), None);
        assert_eq!(sim.tick, 0);
        assert!(sim.scores().iter().all(|&(_, _, food)| food == 0));
        assert_eq!(sim.total_ant_count(), 24);
    }

    #[test]
    fn test_from_environment_rejects_inverted_spawn_interval() {
        let env = Environment::new(6, 6, Vec::new(), vec![Nest::new(Position::new(0, 0), ColonyId(0))]);
        let result = Simulation::from_environment(
            SimulationConfig {
                rows: 6,
                cols: 6,
                colony_count: 1,
                spawn_interval_min_secs: 9,
                spawn_interval_max_secs: 3,
                ..SimulationConfig::default()
            },
            env,
        );
        assert!(matches!(
            result,
            Err(ConfigError::SpawnInterval { min: 9, max: 3 })
        ));
    }
}
