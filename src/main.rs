use anyhow::{Context, Result};
use clap::Parser;
use macroquad::Window;
use macroquad::prelude::{BLACK, clear_background, get_frame_time, next_frame};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use conway_paint::{Config, DisplayBuffer, GameState, Screen, input, rendering};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "conway_paint=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    config.validate().context("invalid configuration")?;

    info!(
        width = config.width,
        height = config.height,
        scale = config.scale,
        ticks_per_second = config.ticks_per_second,
        "starting: click to paint, hold Space to run, hold Escape to edit again"
    );

    // Window creation failures abort inside macroquad
    Window::from_config(config.window_conf(), run(config));
    Ok(())
}

async fn run(config: Config) {
    let dimensions = config.dimensions();
    let viewport = config.viewport();

    let mut state = GameState::new(dimensions.0, dimensions.1)
        .with_updates_per_second(config.ticks_per_second);
    let mut buffer = DisplayBuffer::new(dimensions.0, dimensions.1);
    let mut screen = Screen::new(dimensions, &viewport);

    loop {
        let frame_input = input::poll(&viewport, dimensions);
        state.tick(get_frame_time(), &frame_input);

        rendering::render(&state.grid, &mut buffer);
        clear_background(BLACK);
        screen.present(&buffer);

        next_frame().await;
    }
}
