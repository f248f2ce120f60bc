use shared::Position;

/// King-move offsets in enumeration order: orthogonals first, then diagonals.
/// The order is observable: it breaks ties in pheromone following.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),  // up
    (1, 0),   // down
    (0, -1),  // left
    (0, 1),   // right
    (-1, -1), // top-left
    (-1, 1),  // top-right
    (1, -1),  // bottom-left
    (1, 1),   // bottom-right
];

/// Bounds of the world grid. Holds no cell state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpatialGrid {
    pub rows: usize,
    pub cols: usize,
}

impl SpatialGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    #[inline(always)]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Applies a signed offset, returning `None` if the result leaves the grid.
    #[inline(always)]
    pub fn offset(&self, pos: Position, drow: isize, dcol: isize) -> Option<Position> {
        let row = pos.row.checked_add_signed(drow)?;
        let col = pos.col.checked_add_signed(dcol)?;
        let moved = Position::new(row, col);
        self.contains(moved).then_some(moved)
    }

    /// The up-to-8 adjacent cells of `pos` that lie inside the grid.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| self.offset(pos, dr, dc))
            .collect()
    }

    /// Every in-bounds cell within Chebyshev distance `range` of `pos`, row-major,
    /// excluding `pos` itself.
    pub fn window(&self, pos: Position, range: usize) -> impl Iterator<Item = Position> + '_ {
        let row_start = pos.row.saturating_sub(range);
        let row_end = pos.row.saturating_add(range).min(self.rows.saturating_sub(1));
        let col_start = pos.col.saturating_sub(range);
        let col_end = pos.col.saturating_add(range).min(self.cols.saturating_sub(1));
        (row_start..=row_end)
            .flat_map(move |row| (col_start..=col_end).map(move |col| Position::new(row, col)))
            .filter(move |&cell| cell != pos && self.contains(cell))
    }
}
