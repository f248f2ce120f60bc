use rand::Rng;
use rand::seq::IndexedRandom;
use shared::{ColonyId, Goal, Position, distance_squared, facing_angle, step_towards};
use slotmap::new_key_type;
use std::collections::VecDeque;

use super::{
    DEPOSIT_COOLDOWN_MS, Environment, IGNORE_PHEROMONE_MS, NestId, PICKUP_COOLDOWN_MS, SimTime,
    SpatialGrid, VISITED_HISTORY_CAPACITY,
};

new_key_type! {
    /// Key for ant slotmap.
    pub struct AntKey;
}

/// Most recently left cells, oldest evicted first once full.
#[derive(Debug, Clone)]
pub struct VisitedHistory {
    cells: VecDeque<Position>,
}

impl Default for VisitedHistory {
    fn default() -> Self {
        Self {
            cells: VecDeque::with_capacity(VISITED_HISTORY_CAPACITY),
        }
    }
}

impl VisitedHistory {
    pub fn push(&mut self, pos: Position) {
        if self.cells.len() == VISITED_HISTORY_CAPACITY {
            self.cells.pop_front();
        }
        self.cells.push_back(pos);
    }

    pub fn last(&self) -> Option<Position> {
        self.cells.back().copied()
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.cells.contains(pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// State of an ant.
#[derive(Debug, Clone)]
pub struct Ant {
    pub position: Position,
    pub carrying_food: bool,
    pub nest: NestId,
    pub colony_id: ColonyId,
    pub sensing_range: usize,
    pub following_pheromone: bool,
    pub visited: VisitedHistory,
    pub ignore_pheromone_until: Option<SimTime>,
    pub current_goal: Goal,
    pub sleep_until: Option<SimTime>,
    /// Heading of the last move in radians. Cosmetic.
    pub facing_direction: f32,
}

impl Ant {
    pub fn new(position: Position, nest: NestId, colony_id: ColonyId, sensing_range: usize) -> Self {
        Self {
            position,
            carrying_food: false,
            nest,
            colony_id,
            sensing_range,
            following_pheromone: false,
            visited: VisitedHistory::default(),
            ignore_pheromone_until: None,
            current_goal: Goal::Exploring,
            sleep_until: None,
            facing_direction: 0.0,
        }
    }

    pub fn is_sleeping(&self, now: SimTime) -> bool {
        self.sleep_until.is_some_and(|until| now < until)
    }

    /// Runs one decision cycle. The first matching state wins:
    /// sleeping, carrying food, food in range, following a trail,
    /// ignoring trails, then detect-or-explore.
    pub fn step<R: Rng + ?Sized>(&mut self, now: SimTime, env: &mut Environment, rng: &mut R) {
        if self.is_sleeping(now) {
            return;
        }
        self.sleep_until = None;

        let Some(home) = env.nest(self.nest).map(|nest| nest.position()) else {
            tracing::warn!("Ant of {} has no nest {:?}, wandering", self.colony_id, self.nest);
            self.random_move(env, rng);
            return;
        };

        if self.carrying_food {
            self.return_to_nest(home, now, env);
        } else if let Some(food_pos) = self.check_for_food_in_range(env) {
            self.approach_food(food_pos, now, env);
        } else if self.following_pheromone {
            self.follow_pheromone_trail(home, now, env);
        } else if self.ignore_pheromone_until.is_some_and(|until| now < until) {
            self.random_move(env, rng);
        } else if !self.start_following_pheromone(env) {
            self.random_move(env, rng);
        }
    }

    fn return_to_nest(&mut self, home: Position, now: SimTime, env: &mut Environment) {
        if self.position == home {
            if let Some(nest) = env.nest_mut(self.nest) {
                nest.deposit_food();
                tracing::trace!(
                    "{} ant dropped food at {}, nest total {}",
                    self.colony_id,
                    home,
                    nest.total_food()
                );
            }
            self.carrying_food = false;
            self.sleep_until = Some(now + DEPOSIT_COOLDOWN_MS);
            self.current_goal = Goal::DepositingFood;
        } else {
            env.drop_pheromone(self.position, self.colony_id);
            self.move_towards(home, &env.grid);
            self.current_goal = Goal::ReturningWithFood;
        }
    }

    /// Position of the first food within sensing range. Sensing food always
    /// lifts any pheromone-ignore window.
    fn check_for_food_in_range(&mut self, env: &Environment) -> Option<Position> {
        let food_pos = env
            .food
            .food_near(self.position, self.sensing_range)
            .map(|food| food.position)?;
        self.ignore_pheromone_until = None;
        Some(food_pos)
    }

    /// Steps onto the food if needed; standing on it (before or after the step)
    /// takes one bite.
    fn approach_food(&mut self, food_pos: Position, now: SimTime, env: &mut Environment) {
        self.current_goal = Goal::PickingUpFood;
        if self.position != food_pos {
            self.move_towards(food_pos, &env.grid);
        }
        if self.position == food_pos && env.consume_food_at(food_pos) {
            self.carrying_food = true;
            self.following_pheromone = false;
            self.sleep_until = Some(now + PICKUP_COOLDOWN_MS);
            tracing::trace!("{} ant picked up food at {}", self.colony_id, food_pos);
        }
    }

    /// Follows the own-colony trail away from the nest.
    fn follow_pheromone_trail(&mut self, home: Position, now: SimTime, env: &mut Environment) {
        let last_visited = self.visited.last();
        let mut target = None;
        let mut max_distance = 0;

        for neighbor in env.neighbors(self.position) {
            if Some(neighbor) == last_visited {
                continue; // no immediate backtrack
            }
            if env.pheromone_at(neighbor, self.colony_id) > 0.0 {
                let distance_from_nest = distance_squared(neighbor, home);
                if distance_from_nest > max_distance {
                    max_distance = distance_from_nest;
                    target = Some(neighbor);
                }
            }
        }

        match target {
            Some(target) => {
                self.visited.push(self.position);
                self.move_towards(target, &env.grid);
                self.current_goal = Goal::FollowingPheromone;
                if self.check_for_food_in_range(env).is_some() {
                    self.following_pheromone = false;
                }
            }
            None => {
                self.following_pheromone = false;
                self.ignore_pheromone_until = Some(now + IGNORE_PHEROMONE_MS);
                self.current_goal = Goal::Exploring;
            }
        }
    }

    /// Scans the sensing window for own-colony trail and steps onto the first hit.
    fn start_following_pheromone(&mut self, env: &Environment) -> bool {
        let found = env
            .grid
            .window(self.position, self.sensing_range)
            .find(|&cell| env.pheromone_at(cell, self.colony_id) > 0.0);

        match found {
            Some(cell) => {
                self.move_towards(cell, &env.grid);
                self.following_pheromone = true;
                self.current_goal = Goal::DetectedPheromone;
                true
            }
            None => false,
        }
    }

    /// Random step, preferring cells not in the recent history.
    fn random_move<R: Rng + ?Sized>(&mut self, env: &Environment, rng: &mut R) {
        self.current_goal = Goal::Exploring;
        let neighbors = env.neighbors(self.position);
        let unvisited: Vec<Position> = neighbors
            .iter()
            .copied()
            .filter(|n| !self.visited.contains(n))
            .collect();

        let target = if unvisited.is_empty() {
            neighbors.choose(rng).copied()
        } else {
            unvisited.choose(rng).copied()
        };
        let Some(target) = target else {
            return;
        };

        self.visited.push(self.position);
        self.move_towards(target, &env.grid);
    }

    /// Single king-move step towards `target`. Steps that would leave the grid are dropped.
    pub fn move_towards(&mut self, target: Position, grid: &SpatialGrid) {
        let (drow, dcol) = step_towards(self.position, target);
        if drow == 0 && dcol == 0 {
            return;
        }
        if let Some(next) = grid.offset(self.position, drow, dcol) {
            self.position = next;
            self.facing_direction = facing_angle(drow, dcol);
        }
    }
}
