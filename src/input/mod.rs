use macroquad::prelude::*;

use crate::application::{FrameInput, Viewport};

/// Held to start the simulation while editing
pub const START_KEY: KeyCode = KeyCode::Space;
/// Held to stop the simulation and return to editing
pub const STOP_KEY: KeyCode = KeyCode::Escape;
/// Held to pin cells while editing
pub const PAINT_BUTTON: MouseButton = MouseButton::Left;

/// Snapshot the host input for this frame.
///
/// Everything here is level-triggered (`*_down`, not `*_pressed`):
/// holding a key keeps reporting it every frame.
pub fn poll(viewport: &Viewport, dimensions: (usize, usize)) -> FrameInput {
    let (mouse_x, mouse_y) = mouse_position();
    FrameInput {
        cursor: viewport.screen_to_cell(mouse_x, mouse_y, dimensions),
        painting: is_mouse_button_down(PAINT_BUTTON),
        start_held: is_key_down(START_KEY),
        stop_held: is_key_down(STOP_KEY),
    }
}
