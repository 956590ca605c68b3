use crate::domain::CellPos;

/// Viewport maps window pixels to grid cells.
/// Every cell is drawn as a `scale`×`scale` square starting at the window origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub scale: u32,
}

impl Viewport {
    pub const fn new(scale: u32) -> Self {
        Self { scale }
    }

    /// Convert screen coordinates to the cell under them.
    ///
    /// Each axis is clamped to `[0, width]` and `[0, height]`, one past the
    /// last index, so a cursor beyond the right or bottom edge lands on no cell.
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32, dimensions: (usize, usize)) -> CellPos {
        let (width, height) = dimensions;
        CellPos::new(
            self.clamp_axis(screen_y, height),
            self.clamp_axis(screen_x, width),
        )
    }

    fn clamp_axis(&self, screen: f32, limit: usize) -> usize {
        let cell = (screen / self.scale.max(1) as f32).floor();
        if cell > 0.0 {
            (cell as usize).min(limit)
        } else {
            0
        }
    }

    /// Window size in pixels for a grid of the given dimensions
    pub fn window_size(&self, dimensions: (usize, usize)) -> (f32, f32) {
        let (width, height) = dimensions;
        let scale = self.scale as f32;
        (width as f32 * scale, height as f32 * scale)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIMS: (usize, usize) = (80, 60);

    #[test]
    fn test_inverts_scale() {
        let viewport = Viewport::new(8);
        assert_eq!(viewport.screen_to_cell(0.0, 0.0, DIMS), CellPos::new(0, 0));
        assert_eq!(viewport.screen_to_cell(7.9, 7.9, DIMS), CellPos::new(0, 0));
        assert_eq!(viewport.screen_to_cell(8.0, 17.0, DIMS), CellPos::new(2, 1));
        assert_eq!(viewport.screen_to_cell(639.0, 479.0, DIMS), CellPos::new(59, 79));
    }

    #[test]
    fn test_clamps_negative_to_zero() {
        let viewport = Viewport::new(8);
        assert_eq!(viewport.screen_to_cell(-40.0, -0.5, DIMS), CellPos::new(0, 0));
    }

    #[test]
    fn test_clamps_one_past_last_index() {
        let viewport = Viewport::new(8);
        assert_eq!(viewport.screen_to_cell(640.0, 480.0, DIMS), CellPos::new(60, 80));
        assert_eq!(viewport.screen_to_cell(5000.0, 5000.0, DIMS), CellPos::new(60, 80));
    }

    #[test]
    fn test_window_size() {
        assert_eq!(Viewport::new(8).window_size((80, 80)), (640.0, 640.0));
        assert_eq!(Viewport::default().window_size(DIMS), (80.0, 60.0));
    }
}
