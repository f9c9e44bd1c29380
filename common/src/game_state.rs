use anyhow::{Result, ensure};
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::constants::{
    DEFAULT_TICK_INTERVAL_MS, INITIAL_SNAKE_LENGTH, MIN_BOARD_HEIGHT, MIN_BOARD_WIDTH,
    MIN_TICK_INTERVAL_MS, REVIVE_SCORE_THRESHOLD, TICK_INTERVAL_STEP_MS,
};
use crate::snake::{Direction, Position, Snake};

/// What a single tick did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake advanced one cell.
    Moved,
    /// The snake advanced onto food, grew, and scored.
    Ate,
    /// The next head cell was a wall or the snake itself.
    Died,
    /// The game is already over; nothing happened.
    Idle,
}

/// The whole game: one snake, one food cell, the score, and the mutable
/// tick interval. Updated in place by [`GameState::tick`] and the input
/// operations, redrawn by the front end after every update.
#[derive(Debug, Clone)]
pub struct GameState {
    pub width: u16,
    pub height: u16,
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub game_over: bool,
    pub tick_interval_ms: u64,
    rng: SmallRng,
}

impl GameState {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        Self::with_rng(width, height, SmallRng::from_os_rng())
    }

    /// Deterministic variant for tests.
    pub fn new_seeded(width: u16, height: u16, seed: u64) -> Result<Self> {
        Self::with_rng(width, height, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(width: u16, height: u16, rng: SmallRng) -> Result<Self> {
        ensure!(
            width >= MIN_BOARD_WIDTH && height >= MIN_BOARD_HEIGHT,
            "board must be at least {}x{}, got {}x{}",
            MIN_BOARD_WIDTH,
            MIN_BOARD_HEIGHT,
            width,
            height
        );
        let start = start_cell(width, height);
        let snake = Snake::horizontal(start, INITIAL_SNAKE_LENGTH);
        let mut state = GameState {
            width,
            height,
            food: start, // replaced by the respawn below
            snake,
            score: 0,
            game_over: false,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            rng,
        };
        state.respawn_food();
        Ok(state)
    }

    pub fn in_bounds(&self, cell: Position) -> bool {
        cell.x >= 0 && cell.x < self.width as i16 && cell.y >= 0 && cell.y < self.height as i16
    }

    /// Advance the game by one step. The collision check runs against the
    /// occupancy before the move, so stepping into the cell the tail is about
    /// to vacate still kills.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Idle;
        }

        let next = self.snake.next_head();
        if !self.in_bounds(next) || self.snake.contains(next) {
            self.game_over = true;
            info!("snake died entering {:?}, final score {}", next, self.score);
            return TickOutcome::Died;
        }

        if next == self.food {
            self.snake.push_head(next);
            self.score += 1;
            debug!("food eaten at {:?}, score now {}", next, self.score);
            self.respawn_food();
            TickOutcome::Ate
        } else {
            self.snake.push_head(next);
            self.snake.pop_tail();
            TickOutcome::Moved
        }
    }

    /// Apply a direction input. Turns along the current axis of motion are
    /// rejected; the accepted direction takes effect on the next tick.
    pub fn steer(&mut self, direction: Direction) -> bool {
        self.snake.steer(direction)
    }

    pub fn speed_up(&mut self) {
        self.tick_interval_ms = self
            .tick_interval_ms
            .saturating_sub(TICK_INTERVAL_STEP_MS)
            .max(MIN_TICK_INTERVAL_MS);
    }

    pub fn slow_down(&mut self) {
        self.tick_interval_ms += TICK_INTERVAL_STEP_MS;
    }

    /// Reset everything to a fresh game: starting snake, zero score, default
    /// speed, new food.
    pub fn restart(&mut self) {
        self.snake = Snake::horizontal(self.start_cell(), INITIAL_SNAKE_LENGTH);
        self.score = 0;
        self.game_over = false;
        self.tick_interval_ms = DEFAULT_TICK_INTERVAL_MS;
        self.respawn_food();
        info!("game restarted");
    }

    /// Second chance after a death: only once the score has passed
    /// [`REVIVE_SCORE_THRESHOLD`]. The snake keeps its length (clamped to the
    /// cells available left of the start column) and is laid out horizontally
    /// at the start cell; the score resets to zero but the player's speed
    /// setting survives. Returns whether the revive happened.
    pub fn revive(&mut self) -> bool {
        if !self.game_over || self.score <= REVIVE_SCORE_THRESHOLD {
            return false;
        }
        let start = self.start_cell();
        let length = self.snake.len().min(start.x as usize + 1);
        self.snake = Snake::horizontal(start, length);
        self.score = 0;
        self.game_over = false;
        if self.snake.contains(self.food) {
            self.respawn_food();
        }
        info!("snake revived with length {}", length);
        true
    }

    fn start_cell(&self) -> Position {
        start_cell(self.width, self.height)
    }

    /// Place food on a random free cell of the interior (one cell in from
    /// every wall). Rejection sampling is fine while the board is mostly
    /// empty; once the snake covers most of the interior the free cells are
    /// collected and drawn from directly. A full interior ends the game.
    fn respawn_food(&mut self) {
        let interior = (self.width as usize - 2) * (self.height as usize - 2);
        if self.snake.len() * 5 >= interior * 4 {
            let free: Vec<Position> = self
                .interior_cells()
                .filter(|cell| !self.snake.contains(*cell))
                .collect();
            if free.is_empty() {
                self.game_over = true;
                info!("board full, final score {}", self.score);
                return;
            }
            self.food = free[self.rng.random_range(0..free.len())];
        } else {
            loop {
                let cell = Position::new(
                    self.rng.random_range(1..self.width as i16 - 1),
                    self.rng.random_range(1..self.height as i16 - 1),
                );
                if !self.snake.contains(cell) {
                    self.food = cell;
                    break;
                }
            }
        }
        debug!("food spawned at {:?}", self.food);
    }

    fn interior_cells(&self) -> impl Iterator<Item = Position> + '_ {
        (1..self.width as i16 - 1)
            .flat_map(move |x| (1..self.height as i16 - 1).map(move |y| Position::new(x, y)))
    }
}

fn start_cell(width: u16, height: u16) -> Position {
    Position::new((width / 2) as i16, (height / 2) as i16)
}
