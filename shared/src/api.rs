use std::fmt;

/// Grid cell as (row, col). Rows grow downwards on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Identity of a colony: one nest, its ants and its own pheromone grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColonyId(pub u32);

impl fmt::Display for ColonyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "colony {}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodType {
    Berry,
    Nut,
    Leaf,
    Bug,
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FoodType::Berry => "Berry",
            FoodType::Nut => "Nut",
            FoodType::Leaf => "Leaf",
            FoodType::Bug => "Bug",
        };
        f.write_str(name)
    }
}

/// What an ant is currently busy with. Only used for inspection, never for decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Goal {
    #[default]
    Exploring,
    ReturningWithFood,
    PickingUpFood,
    DepositingFood,
    FollowingPheromone,
    DetectedPheromone,
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Goal::Exploring => "exploring",
            Goal::ReturningWithFood => "returning to nest with food",
            Goal::PickingUpFood => "picking up food",
            Goal::DepositingFood => "depositing food",
            Goal::FollowingPheromone => "following pheromone trail",
            Goal::DetectedPheromone => "detected pheromone trail",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_labels() {
        assert_eq!(Goal::ReturningWithFood.to_string(), "returning to nest with food");
        assert_eq!(Goal::default(), Goal::Exploring);
    }

    #[test]
    fn test_position_from_tuple() {
        let pos: Position = (3, 7).into();
        assert_eq!(pos, Position::new(3, 7));
        assert_eq!(pos.to_string(), "(3, 7)");
    }
}
