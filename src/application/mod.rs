mod config;
mod game_state;
mod viewport;

pub use config::{Config, ConfigError, MAX_GRID_SIDE};
pub use game_state::{DEFAULT_UPDATES_PER_SECOND, FrameInput, GameState};
pub use viewport::Viewport;
