use thiserror::Error;

use crate::config::{GridSize, INITIAL_SNAKE_LENGTH};
use crate::fruit::Fruit;
use crate::input::GameInput;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
///
/// `GameOver` is terminal until an explicit [`GameState::reset`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
}

/// What ended the session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Construction-time validation failures.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(
        "grid {width}x{height} is too small: the playable interior must fit \
         a {snake_length}-segment snake with room on both sides"
    )]
    GridTooSmall {
        width: u16,
        height: u16,
        snake_length: usize,
    },
}

/// Complete mutable game state for one session.
///
/// Owns exactly one [`Snake`] and one [`Fruit`] and is their sole mutator
/// during a tick. Rendering only ever reads this struct.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub fruit: Fruit,
    pub score: u32,
    pub high_score: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
    bounds: GridSize,
    points_per_fruit: u32,
}

impl GameState {
    /// Creates a fresh session on a validated grid.
    ///
    /// `bounds` counts the wall ring; `points_per_fruit` is the score delta
    /// awarded per fruit eaten.
    pub fn new(bounds: GridSize, points_per_fruit: u32) -> Result<Self, GameError> {
        validate_bounds(bounds)?;
        Ok(Self::build(bounds, points_per_fruit, Fruit::new(bounds)))
    }

    /// Creates a deterministic session for tests and reproducible runs.
    pub fn new_with_seed(
        bounds: GridSize,
        points_per_fruit: u32,
        seed: u64,
    ) -> Result<Self, GameError> {
        validate_bounds(bounds)?;
        Ok(Self::build(
            bounds,
            points_per_fruit,
            Fruit::with_seed(bounds, seed),
        ))
    }

    fn build(bounds: GridSize, points_per_fruit: u32, mut fruit: Fruit) -> Self {
        let snake = spawn_snake(bounds);
        fruit.respawn(|p| snake.contains(p));

        Self {
            snake,
            fruit,
            score: 0,
            high_score: 0,
            status: GameStatus::Playing,
            death_reason: None,
            tick_count: 0,
            bounds,
            points_per_fruit,
        }
    }

    /// Returns the grid dimensions, wall ring included.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns the configured score delta per fruit.
    #[must_use]
    pub fn points_per_fruit(&self) -> u32 {
        self.points_per_fruit
    }

    /// Returns true when the session is paused before its first tick.
    #[must_use]
    pub fn is_start_screen(&self) -> bool {
        self.status == GameStatus::Paused && self.tick_count == 0 && self.score == 0
    }

    /// Advances the simulation by one gameplay tick.
    ///
    /// Collisions are judged against the *prospective* next head: when the
    /// session ends, the snake is exactly as it was before the tick.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }
        self.tick_count += 1;

        let next = self.snake.next_head();

        if hits_wall(next, self.bounds) {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(DeathReason::WallCollision);
            return;
        }

        if self.snake.hits_self(next) {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(DeathReason::SelfCollision);
            return;
        }

        let grow = next == self.fruit.position();
        self.snake.advance(grow);

        if grow {
            self.score += self.points_per_fruit;
            if self.score > self.high_score {
                self.high_score = self.score;
            }

            // The predicate also rejects the just-eaten cell so placement
            // never depends on how far the body update has propagated.
            let snake = &self.snake;
            self.fruit.respawn(|p| snake.contains(p) || p == next);
        }
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Playing {
                    self.snake.set_direction(direction);
                }
            }
            GameInput::Pause => {
                self.status = match self.status {
                    GameStatus::Playing => GameStatus::Paused,
                    GameStatus::Paused => GameStatus::Playing,
                    GameStatus::GameOver => GameStatus::GameOver,
                };
            }
            GameInput::Restart => self.reset(),
            GameInput::Quit | GameInput::Confirm | GameInput::CycleTheme => {}
        }
    }

    /// Starts a new session on the same grid: snake and fruit are replaced
    /// wholesale, score and flags cleared, high score kept.
    pub fn reset(&mut self) {
        self.snake = spawn_snake(self.bounds);
        self.fruit = Fruit::new(self.bounds);
        let snake = &self.snake;
        self.fruit.respawn(|p| snake.contains(p));

        self.score = 0;
        self.status = GameStatus::Playing;
        self.death_reason = None;
        self.tick_count = 0;
    }
}

fn spawn_snake(bounds: GridSize) -> Snake {
    let start = Position {
        x: i32::from(bounds.width / 2),
        y: i32::from(bounds.height / 2),
    };
    Snake::new(start, INITIAL_SNAKE_LENGTH)
}

fn hits_wall(position: Position, bounds: GridSize) -> bool {
    position.x <= 0
        || position.x >= i32::from(bounds.width) - 1
        || position.y <= 0
        || position.y >= i32::from(bounds.height) - 1
}

fn validate_bounds(bounds: GridSize) -> Result<(), GameError> {
    let error = GameError::GridTooSmall {
        width: bounds.width,
        height: bounds.height,
        snake_length: INITIAL_SNAKE_LENGTH,
    };

    // At least three interior rows so the spawn row has space on both sides.
    if bounds.height < 5 {
        return Err(error);
    }

    // The spawn layout extends left from the center column; require one free
    // interior cell behind the tail and one ahead of the head.
    let snake_length =
        i32::try_from(INITIAL_SNAKE_LENGTH).expect("initial snake length fits in i32");
    let start_x = i32::from(bounds.width / 2);
    let tail_x = start_x - (snake_length - 1);
    if tail_x < 2 || start_x + 1 > i32::from(bounds.width) - 2 {
        return Err(error);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::fruit::Fruit;
    use crate::input::{Direction, GameInput};
    use crate::snake::{Position, Snake};

    use super::{DeathReason, GameError, GameState, GameStatus};

    const BOUNDS: GridSize = GridSize {
        width: 12,
        height: 10,
    };

    fn scripted_state(points_per_fruit: u32) -> GameState {
        let mut state =
            GameState::new_with_seed(BOUNDS, points_per_fruit, 1).expect("grid should be valid");
        state.snake = Snake::new(Position { x: 4, y: 4 }, 1);
        state.fruit = Fruit::at(BOUNDS, Position { x: 5, y: 4 });
        state
    }

    #[test]
    fn degenerate_grids_are_rejected_at_construction() {
        for (width, height) in [(2, 10), (10, 2), (6, 10), (10, 4)] {
            let result = GameState::new(GridSize { width, height }, 1);
            assert!(
                matches!(result, Err(GameError::GridTooSmall { .. })),
                "{width}x{height} should be rejected"
            );
        }

        assert!(GameState::new(GridSize { width: 8, height: 5 }, 1).is_ok());
    }

    #[test]
    fn initial_fruit_never_overlaps_the_snake() {
        for seed in 0..20 {
            let state = GameState::new_with_seed(BOUNDS, 1, seed).expect("grid should be valid");
            assert!(!state.snake.contains(state.fruit.position()));
        }
    }

    #[test]
    fn eating_fruit_grows_scores_and_respawns() {
        let mut state = scripted_state(1);

        state.tick();

        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.score, 1);
        assert_eq!(state.high_score, 1);
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.snake.head(), Position { x: 5, y: 4 });

        let fruit = state.fruit.position();
        assert_ne!(fruit, Position { x: 5, y: 4 });
        assert!(!state.snake.contains(fruit));
    }

    #[test]
    fn score_delta_per_fruit_is_configurable() {
        let mut state = scripted_state(10);

        state.tick();

        assert_eq!(state.score, 10);
    }

    #[test]
    fn wall_collision_ends_the_session_without_moving_the_snake() {
        let mut state = GameState::new_with_seed(BOUNDS, 1, 2).expect("grid should be valid");
        state.snake = Snake::new(Position { x: 10, y: 4 }, 3);
        let before: Vec<Position> = state.snake.segments().copied().collect();

        state.tick();

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
        let after: Vec<Position> = state.snake.segments().copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn self_collision_ends_the_session_without_moving_the_snake() {
        let mut state = GameState::new_with_seed(BOUNDS, 1, 3).expect("grid should be valid");
        state.snake = Snake::from_segments(
            vec![
                Position { x: 3, y: 3 },
                Position { x: 2, y: 3 },
                Position { x: 2, y: 4 },
                Position { x: 3, y: 4 },
                Position { x: 4, y: 4 },
                Position { x: 4, y: 3 },
            ],
            Direction::Left,
        );
        let before: Vec<Position> = state.snake.segments().copied().collect();

        state.tick();

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::SelfCollision));
        let after: Vec<Position> = state.snake.segments().copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn ticks_are_inert_once_the_session_is_over() {
        let mut state = GameState::new_with_seed(BOUNDS, 1, 4).expect("grid should be valid");
        state.snake = Snake::new(Position { x: 10, y: 4 }, 3);

        state.tick();
        assert_eq!(state.status, GameStatus::GameOver);
        let ticks = state.tick_count;

        state.tick();
        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.tick_count, ticks);
    }

    #[test]
    fn pause_toggles_and_blocks_direction_input() {
        let mut state = GameState::new_with_seed(BOUNDS, 1, 5).expect("grid should be valid");

        state.apply_input(GameInput::Pause);
        assert_eq!(state.status, GameStatus::Paused);

        state.apply_input(GameInput::Direction(Direction::Up));
        assert_eq!(state.snake.direction(), Direction::Right);

        state.apply_input(GameInput::Pause);
        assert_eq!(state.status, GameStatus::Playing);

        state.apply_input(GameInput::Direction(Direction::Up));
        assert_eq!(state.snake.direction(), Direction::Up);
    }

    #[test]
    fn reset_keeps_the_high_score_and_is_idempotent() {
        let mut state = scripted_state(3);
        state.tick();
        assert_eq!(state.high_score, 3);

        state.reset();
        let canonical: Vec<Position> = state.snake.segments().copied().collect();
        assert_eq!(state.score, 0);
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.death_reason, None);
        assert_eq!(state.tick_count, 0);
        assert_eq!(state.high_score, 3);
        assert_eq!(state.bounds(), BOUNDS);

        state.reset();
        let again: Vec<Position> = state.snake.segments().copied().collect();
        assert_eq!(canonical, again);
        assert_eq!(state.score, 0);
        assert_eq!(state.status, GameStatus::Playing);
        assert!(!state.snake.contains(state.fruit.position()));
    }
}
