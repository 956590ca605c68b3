// Domain layer - grid, cells and the two per-frame rules
pub mod domain;

// Application layer - state, viewport and startup configuration
pub mod application;

// Infrastructure layer - host input and rendering
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, CellPos, Grid, Mode};
pub use application::{Config, ConfigError, FrameInput, GameState, Viewport};
pub use rendering::{DisplayBuffer, Screen};
