use macroquad::prelude::*;

use crate::application::Viewport;
use crate::domain::Grid;

/// Opaque white
pub const ALIVE_PIXEL: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];
/// Opaque black
pub const DEAD_PIXEL: [u8; 4] = [0x00, 0x00, 0x00, 0xFF];

const BYTES_PER_PIXEL: usize = 4;

/// RGBA8 pixel buffer with one pixel per cell, row-major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl DisplayBuffer {
    /// Create a buffer of opaque black pixels
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: DEAD_PIXEL.repeat(width * height),
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// RGBA value of the pixel at (row, col)
    pub fn pixel(&self, row: usize, col: usize) -> Option<[u8; 4]> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let start = (row * self.width + col) * BYTES_PER_PIXEL;
        self.pixels
            .get(start..start + BYTES_PER_PIXEL)
            .and_then(|px| px.try_into().ok())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}

/// Project the grid onto the buffer. Every pixel is rewritten.
pub fn render(grid: &Grid, buffer: &mut DisplayBuffer) {
    debug_assert_eq!(grid.dimensions(), buffer.dimensions());

    buffer
        .pixels
        .chunks_exact_mut(BYTES_PER_PIXEL)
        .zip(grid.iter_cells())
        .for_each(|(px, (_, _, cell))| {
            px.copy_from_slice(if cell.is_alive() { &ALIVE_PIXEL } else { &DEAD_PIXEL });
        });
}

/// Presentation sink: a nearest-filtered texture stretched over the window
pub struct Screen {
    image: Image,
    texture: Texture2D,
    size: Vec2,
}

impl Screen {
    /// Requires a live window. Dimensions must fit in u16.
    pub fn new(dimensions: (usize, usize), viewport: &Viewport) -> Self {
        let (width, height) = dimensions;
        let image = Image::gen_image_color(width as u16, height as u16, BLACK);
        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Nearest);
        let (screen_w, screen_h) = viewport.window_size(dimensions);

        Self {
            image,
            texture,
            size: vec2(screen_w, screen_h),
        }
    }

    /// Upload the buffer and draw it over the whole grid area
    pub fn present(&mut self, buffer: &DisplayBuffer) {
        self.image.bytes.copy_from_slice(buffer.as_bytes());
        self.texture.update(&self.image);

        draw_texture_ex(
            &self.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(self.size),
                ..Default::default()
            },
        );
    }
}
