use std::collections::VecDeque;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighboring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

/// Snake body and heading.
///
/// Segments are stored head-first; the body is never empty.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
}

impl Snake {
    /// Creates a snake headed `Right` with its head at `start` and the body
    /// trailing one cell to the left per segment.
    ///
    /// The caller guarantees the layout fits inside the playable area.
    ///
    /// # Panics
    ///
    /// Panics when `initial_length` is zero.
    #[must_use]
    pub fn new(start: Position, initial_length: usize) -> Self {
        assert!(
            initial_length >= 1,
            "snake must start with at least one segment"
        );

        let mut body = VecDeque::with_capacity(initial_length);
        let mut cell = start;
        for _ in 0..initial_length {
            body.push_back(cell);
            cell = cell.step(Direction::Left);
        }

        Self {
            body,
            direction: Direction::Right,
        }
    }

    /// Creates a snake from explicit segments (front is head), for scripted
    /// setups and tests.
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(
            !segments.is_empty(),
            "snake must start with at least one segment"
        );
        Self {
            body: VecDeque::from(segments),
            direction,
        }
    }

    /// Changes the heading unless `direction` directly reverses the current
    /// one, in which case the request is silently ignored.
    ///
    /// This is the sole mechanism preventing the snake from reversing into
    /// its own neck on the next tick.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.direction = direction;
    }

    /// Returns the current heading.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the cell the head would occupy after one step in the current
    /// heading. Pure query; no state changes.
    #[must_use]
    pub fn next_head(&self) -> Position {
        self.head().step(self.direction)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true when `candidate` coincides with any current segment.
    ///
    /// Used against the *prospective* next head before it is committed, so
    /// the current tail cell counts as a collision.
    #[must_use]
    pub fn hits_self(&self, candidate: Position) -> bool {
        self.body.contains(&candidate)
    }

    /// Returns true when `position` coincides with any current segment.
    ///
    /// Same membership test as [`Snake::hits_self`]; named for occupancy
    /// callers such as fruit placement.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Moves one step in the current heading: the next head is pushed to the
    /// front and, unless `grow` is set, the tail is dropped.
    pub fn advance(&mut self, grow: bool) {
        let next = self.next_head();
        self.body.push_front(next);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments. Never the case for a live
    /// snake; present to pair with [`Snake::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::input::Direction;

    use super::{Position, Snake};

    fn segments(snake: &Snake) -> Vec<Position> {
        snake.segments().copied().collect()
    }

    #[test]
    fn new_snake_trails_left_of_its_head() {
        let snake = Snake::new(Position { x: 5, y: 5 }, 3);

        assert_eq!(
            segments(&snake),
            vec![
                Position { x: 5, y: 5 },
                Position { x: 4, y: 5 },
                Position { x: 3, y: 5 },
            ]
        );
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.next_head(), Position { x: 6, y: 5 });
    }

    #[test]
    fn advance_without_growth_shifts_the_body() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, 3);

        let expected_head = snake.next_head();
        snake.advance(false);

        assert_eq!(snake.head(), expected_head);
        assert_eq!(
            segments(&snake),
            vec![
                Position { x: 6, y: 5 },
                Position { x: 5, y: 5 },
                Position { x: 4, y: 5 },
            ]
        );
    }

    #[test]
    fn advance_with_growth_keeps_the_tail() {
        let mut snake = Snake::new(Position { x: 6, y: 5 }, 3);

        let expected_head = snake.next_head();
        snake.advance(true);

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), expected_head);
        assert_eq!(
            segments(&snake),
            vec![
                Position { x: 7, y: 5 },
                Position { x: 6, y: 5 },
                Position { x: 5, y: 5 },
                Position { x: 4, y: 5 },
            ]
        );
    }

    #[test]
    fn reversal_requests_are_ignored_for_every_heading() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let mut snake = Snake::from_segments(vec![Position { x: 5, y: 5 }], direction);

            snake.set_direction(direction.opposite());
            assert_eq!(snake.direction(), direction);
        }
    }

    #[test]
    fn non_reversal_requests_update_the_heading() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, 3);

        snake.set_direction(Direction::Up);
        assert_eq!(snake.direction(), Direction::Up);

        snake.set_direction(Direction::Left);
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn reversal_from_initial_heading_keeps_next_head_unchanged() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, 3);

        snake.set_direction(Direction::Left);

        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.next_head(), Position { x: 6, y: 5 });
    }

    #[test]
    fn hits_self_and_contains_agree_on_membership() {
        let snake = Snake::new(Position { x: 5, y: 5 }, 3);

        for x in 0..10 {
            let p = Position { x, y: 5 };
            assert_eq!(snake.hits_self(p), snake.contains(p));
        }

        // The tail cell counts as occupied for collision purposes.
        assert!(snake.hits_self(Position { x: 3, y: 5 }));
        assert!(!snake.hits_self(Position { x: 6, y: 5 }));
    }

    #[test]
    #[should_panic(expected = "at least one segment")]
    fn zero_initial_length_is_rejected() {
        let _ = Snake::new(Position { x: 5, y: 5 }, 0);
    }
}
