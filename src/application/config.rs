use clap::Parser;
use macroquad::prelude::Conf;
use thiserror::Error;

use super::{Viewport, game_state::DEFAULT_UPDATES_PER_SECOND};

/// Largest grid side the display texture accepts
pub const MAX_GRID_SIDE: usize = u16::MAX as usize;

/// Startup configuration. Fixed for the lifetime of the process.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about = "Paint cells, then watch Conway's Game of Life evolve them", long_about = None)]
pub struct Config {
    /// Grid width in cells
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 80)]
    pub height: usize,

    /// On-screen pixels per cell
    #[arg(long, default_value_t = 8)]
    pub scale: u32,

    /// Simulation updates per second
    #[arg(long, default_value_t = DEFAULT_UPDATES_PER_SECOND)]
    pub ticks_per_second: f32,

    /// Window title
    #[arg(long, default_value = "Conway's Game of Life")]
    pub title: String,
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("grid must contain at least one cell, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("grid {width}x{height} exceeds the maximum side of 65535 cells")]
    GridTooLarge { width: usize, height: usize },

    #[error("scale must be at least 1")]
    ZeroScale,

    #[error("window of {width}x{height} cells at scale {scale} is too large")]
    WindowTooLarge { width: usize, height: usize, scale: u32 },

    #[error("ticks per second must be positive and finite, got {0}")]
    InvalidTickRate(f32),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = self.dimensions();
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        if width > MAX_GRID_SIDE || height > MAX_GRID_SIDE {
            return Err(ConfigError::GridTooLarge { width, height });
        }
        if self.scale == 0 {
            return Err(ConfigError::ZeroScale);
        }
        let fits = |side: usize| side as u64 * self.scale as u64 <= i32::MAX as u64;
        if !fits(width) || !fits(height) {
            return Err(ConfigError::WindowTooLarge { width, height, scale: self.scale });
        }
        if !self.ticks_per_second.is_finite() || self.ticks_per_second <= 0.0 {
            return Err(ConfigError::InvalidTickRate(self.ticks_per_second));
        }
        Ok(())
    }

    /// Grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn viewport(&self) -> Viewport {
        Viewport::new(self.scale)
    }

    /// Window setup: grid size times scale, not resizable.
    /// Only meaningful after `validate` succeeded.
    pub fn window_conf(&self) -> Conf {
        let (width, height) = self.viewport().window_size(self.dimensions());
        Conf {
            window_title: self.title.clone(),
            window_width: width as i32,
            window_height: height as i32,
            window_resizable: false,
            ..Default::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 80,
            height: 80,
            scale: 8,
            ticks_per_second: DEFAULT_UPDATES_PER_SECOND,
            title: "Conway's Game of Life".to_owned(),
        }
    }
}
