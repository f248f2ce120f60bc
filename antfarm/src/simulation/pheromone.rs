use shared::{ColonyId, Position};
use std::collections::HashMap;

use super::{PHEROMONE_DECAY_STEP, PHEROMONE_DEPOSIT};

/// Trail intensity for a single colony, indexed `[row][col]`.
#[derive(Clone, Debug)]
pub struct PheromoneGrid {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f32>>,
}

impl PheromoneGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Resets the cell to the deposit value; laying twice does not stack.
    #[inline(always)]
    pub fn lay(&mut self, pos: Position) {
        if let Some(cell) = self.data.get_mut(pos.row).and_then(|row| row.get_mut(pos.col)) {
            *cell = PHEROMONE_DEPOSIT;
        }
    }

    #[inline(always)]
    pub fn get(&self, pos: Position) -> f32 {
        self.data
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn decay(&mut self) {
        for row in &mut self.data {
            for cell in row.iter_mut() {
                if *cell > 0.0 {
                    *cell = (*cell - PHEROMONE_DECAY_STEP).max(0.0);
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|row| row.iter().all(|&v| v == 0.0))
    }
}

/// One independent pheromone grid per colony.
#[derive(Clone, Debug, Default)]
pub struct PheromoneField {
    grids: HashMap<ColonyId, PheromoneGrid>,
}

impl PheromoneField {
    pub fn new<I>(rows: usize, cols: usize, colonies: I) -> Self
    where
        I: IntoIterator<Item = ColonyId>,
    {
        let grids = colonies
            .into_iter()
            .map(|colony| (colony, PheromoneGrid::new(rows, cols)))
            .collect();
        Self { grids }
    }

    /// Sets the colony's intensity at `pos` to the deposit constant.
    pub fn deposit(&mut self, pos: Position, colony: ColonyId) {
        match self.grids.get_mut(&colony) {
            Some(grid) => grid.lay(pos),
            None => tracing::warn!("Pheromone dropped for unknown {} at {}", colony, pos),
        }
    }

    pub fn decay_tick(&mut self) {
        for grid in self.grids.values_mut() {
            grid.decay();
        }
    }

    /// Intensity of the colony's trail at `pos`; 0 for unknown colonies or cells.
    pub fn intensity_at(&self, pos: Position, colony: ColonyId) -> f32 {
        self.grids.get(&colony).map_or(0.0, |grid| grid.get(pos))
    }

    pub fn grid(&self, colony: ColonyId) -> Option<&PheromoneGrid> {
        self.grids.get(&colony)
    }
}
