/// Default tick interval in milliseconds for the game loop
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Floor for the tick interval when speeding up
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Amount each speed adjustment adds to or removes from the tick interval
pub const TICK_INTERVAL_STEP_MS: u64 = 10;

/// Length of a freshly spawned snake
pub const INITIAL_SNAKE_LENGTH: usize = 1;

/// Score that must be exceeded before a revive is allowed
pub const REVIVE_SCORE_THRESHOLD: u32 = 4;

/// Smallest board that fits the starting layout and a food margin
pub const MIN_BOARD_WIDTH: u16 = 12;

/// See [`MIN_BOARD_WIDTH`]
pub const MIN_BOARD_HEIGHT: u16 = 8;
