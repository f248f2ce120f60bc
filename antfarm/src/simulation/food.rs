use rand::Rng;
use rand::seq::IndexedRandom;
use shared::{FoodType, Position, chebyshev_distance};
use std::ops::RangeInclusive;

use super::{FOOD_SPAWN_MAX_ATTEMPTS, SpatialGrid};

/// Static properties of a food type.
#[derive(Debug, Clone, Copy)]
pub struct FoodSpec {
    pub food_type: FoodType,
    pub durability: (u32, u32),
    /// Footprint as (rows, cols), used only to keep spawned items apart.
    pub footprint: (usize, usize),
    pub weight: u32,
}

pub static FOOD_SPECS: [FoodSpec; 4] = [
    FoodSpec {
        food_type: FoodType::Berry,
        durability: (5, 10),
        footprint: (2, 3),
        weight: 5,
    },
    FoodSpec {
        food_type: FoodType::Nut,
        durability: (2, 5),
        footprint: (2, 2),
        weight: 5,
    },
    FoodSpec {
        food_type: FoodType::Leaf,
        durability: (10, 15),
        footprint: (4, 4),
        weight: 3,
    },
    FoodSpec {
        food_type: FoodType::Bug,
        durability: (15, 20),
        footprint: (8, 3),
        weight: 2,
    },
];

pub fn spec_for(food_type: FoodType) -> &'static FoodSpec {
    match food_type {
        FoodType::Berry => &FOOD_SPECS[0],
        FoodType::Nut => &FOOD_SPECS[1],
        FoodType::Leaf => &FOOD_SPECS[2],
        FoodType::Bug => &FOOD_SPECS[3],
    }
}

impl FoodSpec {
    pub fn durability_range(&self) -> RangeInclusive<u32> {
        self.durability.0..=self.durability.1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodItem {
    pub position: Position,
    pub food_type: FoodType,
    /// Remaining hit points, always > 0 while the item is in a field.
    pub durability: u32,
}

impl FoodItem {
    pub fn new(position: Position, food_type: FoodType, durability: u32) -> Self {
        Self {
            position,
            food_type,
            durability,
        }
    }

    /// A randomly typed item at `position` with durability drawn from its type's range.
    pub fn random_at<R: Rng + ?Sized>(rng: &mut R, position: Position) -> Self {
        let spec = FOOD_SPECS
            .choose_weighted(rng, |spec| spec.weight)
            .unwrap_or(&FOOD_SPECS[0]);
        let durability = rng.random_range(spec.durability_range());
        Self::new(position, spec.food_type, durability)
    }

    /// Removes one hit point. Returns true once the item is depleted.
    fn reduce(&mut self) -> bool {
        self.durability = self.durability.saturating_sub(1);
        self.durability == 0
    }
}

/// Scatters `count` random items over the grid. Overlap is not checked here.
pub fn generate_random_food<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    count: usize,
) -> Vec<FoodItem> {
    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    (0..count)
        .map(|_| {
            let position = Position::new(rng.random_range(0..rows), rng.random_range(0..cols));
            FoodItem::random_at(rng, position)
        })
        .collect()
}

fn rects_overlap(a: Position, a_size: (usize, usize), b: Position, b_size: (usize, usize)) -> bool {
    a.row < b.row + b_size.0
        && a.row + a_size.0 > b.row
        && a.col < b.col + b_size.1
        && a.col + a_size.1 > b.col
}

/// All food currently on the map. Items are kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct FoodField {
    items: Vec<FoodItem>,
}

impl FoodField {
    pub fn new(items: Vec<FoodItem>) -> Self {
        let items = items.into_iter().filter(|item| item.durability > 0).collect();
        Self { items }
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The oldest item within Chebyshev distance `range` of `pos`.
    pub fn food_near(&self, pos: Position, range: usize) -> Option<&FoodItem> {
        self.items
            .iter()
            .find(|item| chebyshev_distance(item.position, pos) <= range)
    }

    pub fn food_at(&self, pos: Position) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.position == pos)
    }

    /// Takes one bite of the item at exactly `pos`. Returns true if that bite
    /// depleted it, in which case it is removed.
    pub fn consume_at(&mut self, pos: Position) -> bool {
        let Some(index) = self.items.iter().position(|item| item.position == pos) else {
            return false;
        };
        if self.items[index].reduce() {
            let item = self.items.remove(index);
            tracing::trace!("{} at {} fully consumed", item.food_type, item.position);
            return true;
        }
        false
    }

    /// Tries to place a new random item whose footprint clears every existing item
    /// and nest. Gives up silently after a bounded number of attempts.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        grid: &SpatialGrid,
        nests: &[Position],
    ) -> Option<&FoodItem> {
        if grid.rows == 0 || grid.cols == 0 {
            return None;
        }

        for _ in 0..FOOD_SPAWN_MAX_ATTEMPTS {
            let candidate = Position::new(
                rng.random_range(0..grid.rows),
                rng.random_range(0..grid.cols),
            );
            let food_type = FOOD_SPECS
                .choose_weighted(rng, |spec| spec.weight)
                .map_or(FoodType::Berry, |spec| spec.food_type);
            let size = spec_for(food_type).footprint;

            let hits_food = self.items.iter().any(|item| {
                rects_overlap(candidate, size, item.position, spec_for(item.food_type).footprint)
            });
            if hits_food {
                continue;
            }
            let hits_nest = nests
                .iter()
                .any(|&nest| rects_overlap(candidate, size, nest, (1, 1)));
            if hits_nest {
                continue;
            }

            let durability = rng.random_range(spec_for(food_type).durability_range());
            let item = FoodItem::new(candidate, food_type, durability);
            tracing::debug!(
                "Spawned {} at {} with durability {}",
                item.food_type,
                item.position,
                item.durability
            );
            self.items.push(item);
            return self.items.last();
        }

        tracing::debug!("Failed to find a valid position for food, skipping spawn");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn item(row: usize, col: usize, durability: u32) -> FoodItem {
        FoodItem::new(Position::new(row, col), FoodType::Nut, durability)
    }

    #[test]
    fn test_consume_last_hit_point_removes_item() {
        let mut field = FoodField::new(vec![item(5, 7, 1)]);
        assert!(field.consume_at(Position::new(5, 7)));
        assert!(field.is_empty());
    }

    #[test]
    fn test_consume_partial() {
        let mut field = FoodField::new(vec![item(5, 7, 3)]);
        assert!(!field.consume_at(Position::new(5, 7)));
        assert_eq!(field.food_at(Position::new(5, 7)).map(|f| f.durability), Some(2));
    }

    #[test]
    fn test_consume_elsewhere_is_noop() {
        let mut field = FoodField::new(vec![item(5, 7, 3)]);
        assert!(!field.consume_at(Position::new(5, 6)));
        assert_eq!(field.items()[0].durability, 3);
    }

    #[test]
    fn test_food_near_uses_chebyshev_and_insertion_order() {
        let field = FoodField::new(vec![item(0, 0, 1), item(4, 6, 1), item(5, 6, 1)]);
        let origin = Position::new(5, 5);
        // (4,6) was inserted before the closer-or-equal (5,6)
        assert_eq!(field.food_near(origin, 1).map(|f| f.position), Some(Position::new(4, 6)));
        assert!(field.food_near(Position::new(9, 9), 2).is_none());
        assert_eq!(field.food_near(Position::new(2, 2), 2).map(|f| f.position), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_zero_durability_items_are_dropped() {
        let field = FoodField::new(vec![item(1, 1, 0), item(2, 2, 4)]);
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn test_random_item_durability_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..300 {
            let food = FoodItem::random_at(&mut rng, Position::new(0, 0));
            assert!(spec_for(food.food_type).durability_range().contains(&food.durability));
        }
    }

    #[test]
    fn test_spawn_avoids_nests_and_other_food() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = SpatialGrid::new(40, 40);
        let nest = Position::new(20, 20);
        let mut field = FoodField::default();
        for _ in 0..30 {
            field.spawn(&mut rng, &grid, &[nest]);
        }
        assert!(!field.is_empty());

        let items = field.items();
        for (i, a) in items.iter().enumerate() {
            let a_size = spec_for(a.food_type).footprint;
            assert!(!rects_overlap(a.position, a_size, nest, (1, 1)));
            for b in &items[i + 1..] {
                let b_size = spec_for(b.food_type).footprint;
                assert!(!rects_overlap(a.position, a_size, b.position, b_size));
            }
        }
    }

    #[test]
    fn test_spawn_skips_when_no_room() {
        let mut rng = StdRng::seed_from_u64(5);
        let grid = SpatialGrid::new(1, 1);
        let mut field = FoodField::default();
        assert!(field.spawn(&mut rng, &grid, &[Position::new(0, 0)]).is_none());
        assert!(field.is_empty());
    }

    #[test]
    fn test_generate_random_food() {
        let mut rng = StdRng::seed_from_u64(1);
        let food = generate_random_food(&mut rng, 10, 12, 25);
        assert_eq!(food.len(), 25);
        assert!(food.iter().all(|f| f.position.row < 10 && f.position.col < 12 && f.durability > 0));
    }
}
