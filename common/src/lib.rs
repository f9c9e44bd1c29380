mod constants;
mod game_state;
mod snake;

pub use constants::*;
pub use game_state::*;
pub use snake::*;
