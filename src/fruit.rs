use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GridSize;
use crate::snake::Position;

/// Sample budget for one respawn before giving up on randomness.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

/// Where the fruit lands when the sample budget is exhausted.
///
/// Placing it at a fixed interior cell even if occupied keeps respawn from
/// ever looping forever on a crowded board.
pub const FALLBACK_POSITION: Position = Position { x: 1, y: 1 };

/// Fruit entity: a position inside the walls plus its own RNG.
///
/// Placement knows nothing about the snake; callers describe occupied cells
/// through the predicate passed to [`Fruit::respawn`].
#[derive(Debug, Clone)]
pub struct Fruit {
    bounds: GridSize,
    position: Position,
    rng: StdRng,
}

impl Fruit {
    /// Creates a fruit for a grid of `bounds` cells (wall ring included).
    ///
    /// The position stays at the `(0, 0)` sentinel, which lies on the wall
    /// ring and therefore never collides with gameplay, until the first
    /// [`Fruit::respawn`].
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a fruit with a deterministic RNG for reproducible sessions.
    #[must_use]
    pub fn with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    /// Creates a fruit already placed at `position`, for scripted setups.
    #[must_use]
    pub fn at(bounds: GridSize, position: Position) -> Self {
        let mut fruit = Self::new(bounds);
        fruit.position = position;
        fruit
    }

    fn with_rng(bounds: GridSize, rng: StdRng) -> Self {
        debug_assert!(bounds.width > 2 && bounds.height > 2);
        Self {
            bounds,
            position: Position { x: 0, y: 0 },
            rng,
        }
    }

    /// Returns the current fruit location.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Moves the fruit to a uniformly random free cell strictly inside the
    /// walls.
    ///
    /// Candidates are drawn until `is_occupied` rejects one or the attempt
    /// budget runs out, at which point the fruit lands on
    /// [`FALLBACK_POSITION`] regardless of occupancy.
    pub fn respawn(&mut self, is_occupied: impl Fn(Position) -> bool) {
        let max_x = i32::from(self.bounds.width) - 2;
        let max_y = i32::from(self.bounds.height) - 2;

        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let candidate = Position {
                x: self.rng.gen_range(1..=max_x),
                y: self.rng.gen_range(1..=max_y),
            };
            if !is_occupied(candidate) {
                self.position = candidate;
                return;
            }
        }

        self.position = FALLBACK_POSITION;
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{Fruit, FALLBACK_POSITION};

    const BOUNDS: GridSize = GridSize {
        width: 10,
        height: 8,
    };

    #[test]
    fn position_starts_at_the_sentinel() {
        let fruit = Fruit::with_seed(BOUNDS, 1);
        assert_eq!(fruit.position(), Position { x: 0, y: 0 });
    }

    #[test]
    fn respawn_stays_strictly_inside_the_walls() {
        let mut fruit = Fruit::with_seed(BOUNDS, 7);

        for _ in 0..500 {
            fruit.respawn(|_| false);
            let p = fruit.position();
            assert!(p.x >= 1 && p.x <= 8, "x on or beyond wall ring: {p:?}");
            assert!(p.y >= 1 && p.y <= 6, "y on or beyond wall ring: {p:?}");
        }
    }

    #[test]
    fn respawn_avoids_cells_the_predicate_marks_occupied() {
        let mut fruit = Fruit::with_seed(BOUNDS, 11);
        let mut snake = Snake::new(Position { x: 5, y: 3 }, 3);
        snake.set_direction(Direction::Down);

        for _ in 0..200 {
            fruit.respawn(|p| snake.contains(p));
            assert!(!snake.contains(fruit.position()));
        }
    }

    #[test]
    fn exhausted_attempt_budget_falls_back_to_the_fixed_cell() {
        let mut fruit = Fruit::with_seed(BOUNDS, 3);

        fruit.respawn(|_| true);

        assert_eq!(fruit.position(), FALLBACK_POSITION);
    }
}
