use crate::api::Position;

/// max(|drow|, |dcol|)
#[inline(always)]
pub fn chebyshev_distance(a: Position, b: Position) -> usize {
    a.row.abs_diff(b.row).max(a.col.abs_diff(b.col))
}

/// Squared Euclidean distance between two cells.
#[inline(always)]
pub fn distance_squared(a: Position, b: Position) -> usize {
    let dr = a.row.abs_diff(b.row);
    let dc = a.col.abs_diff(b.col);
    dr * dr + dc * dc
}

/// Per-axis unit step from `from` towards `to`: each component is -1, 0 or +1.
#[inline(always)]
pub fn step_towards(from: Position, to: Position) -> (isize, isize) {
    let sign = |a: usize, b: usize| match b.cmp(&a) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
    };
    (sign(from.row, to.row), sign(from.col, to.col))
}

/// Screen-space heading for a (drow, dcol) move. Rows grow downwards, so a positive
/// row delta points "down" the screen at +PI/2.
#[inline(always)]
pub fn facing_angle(drow: isize, dcol: isize) -> f32 {
    (drow as f32).atan2(dcol as f32)
}
