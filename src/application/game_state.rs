use tracing::{debug, info};

use crate::domain::{CellPos, Grid, Mode};

/// Updates per second when no rate is configured
pub const DEFAULT_UPDATES_PER_SECOND: f32 = 60.0;

/// Input snapshot read once at the top of a frame.
/// All fields are level-triggered: they report what is held right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Cell under the cursor, possibly one past the last row/column
    pub cursor: CellPos,
    /// Primary mouse button held
    pub painting: bool,
    pub start_held: bool,
    pub stop_held: bool,
}

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub grid: Grid,
    pub mode: Mode,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
}

impl GameState {
    /// Create new game state with given grid dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            mode: Mode::default(),
            generation: 0,
            update_timer: 0.0,
            updates_per_second: DEFAULT_UPDATES_PER_SECOND,
        }
    }

    /// Set update rate (builder pattern)
    pub fn with_updates_per_second(mut self, updates_per_second: f32) -> Self {
        self.updates_per_second = updates_per_second;
        self
    }

    /// Run one update: apply the rule for the current mode, then check
    /// whether the held keys switch the mode for the next update.
    pub fn update(&mut self, input: &FrameInput) {
        match self.mode {
            Mode::Editing => self.grid.paint(input.cursor, input.painting),
            Mode::Running => {
                self.grid = self.grid.evolve();
                self.generation += 1;
                debug!(
                    generation = self.generation,
                    population = self.grid.population(),
                    "evolved"
                );
            }
        }

        let next = self.mode.next(input.start_held, input.stop_held);
        if next != self.mode {
            info!(
                from = self.mode.name(),
                to = next.name(),
                generation = self.generation,
                population = self.grid.population(),
                "mode changed"
            );
            self.mode = next;
        }
    }

    /// Advance by one frame of `delta_time` seconds.
    /// Runs at most one update per frame; returns whether it ran.
    pub fn tick(&mut self, delta_time: f32, input: &FrameInput) -> bool {
        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer < update_interval {
            return false;
        }

        // Carry the remainder, capped at one interval
        self.update_timer = (self.update_timer - update_interval).min(update_interval);
        self.update(input);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    fn hover(row: usize, col: usize) -> FrameInput {
        FrameInput {
            cursor: CellPos::new(row, col),
            ..FrameInput::default()
        }
    }

    fn click(row: usize, col: usize) -> FrameInput {
        FrameInput {
            painting: true,
            ..hover(row, col)
        }
    }

    #[test]
    fn test_starts_editing_on_empty_grid() {
        let state = GameState::new(10, 10);
        assert_eq!(state.mode, Mode::Editing);
        assert_eq!(state.generation, 0);
        assert_eq!(state.grid.population(), 0);
    }

    #[test]
    fn test_editing_previews_cursor() {
        let mut state = GameState::new(10, 10);
        state.update(&hover(3, 4));
        assert_eq!(state.grid.get(3, 4), Some(Cell { alive: true, placed: false }));
        assert_eq!(state.grid.population(), 1);
    }

    #[test]
    fn test_start_key_switches_after_the_edit() {
        let mut state = GameState::new(10, 10);
        state.update(&FrameInput {
            start_held: true,
            ..click(5, 5)
        });
        assert_eq!(state.mode, Mode::Running);
        assert_eq!(state.generation, 0);
        assert_eq!(state.grid.population(), 1);
    }

    #[test]
    fn test_running_ignores_pointer() {
        let mut state = GameState::new(10, 10);
        state.mode = Mode::Running;
        state.update(&click(2, 2));
        assert_eq!(state.grid.population(), 0);
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn test_stop_key_returns_to_editing() {
        let mut state = GameState::new(10, 10);
        state.mode = Mode::Running;
        state.update(&FrameInput {
            stop_held: true,
            ..FrameInput::default()
        });
        assert_eq!(state.mode, Mode::Editing);
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut state = GameState::new(4, 4).with_updates_per_second(10.0);
        let input = hover(1, 1);
        assert!(!state.tick(0.05, &input));
        assert_eq!(state.grid.population(), 0);
        assert!(state.tick(0.06, &input));
        assert_eq!(state.grid.population(), 1);
    }

    #[test]
    fn test_tick_runs_one_update_per_frame() {
        let mut state = GameState::new(4, 4).with_updates_per_second(10.0);
        state.mode = Mode::Running;
        assert!(state.tick(1.0, &FrameInput::default()));
        assert_eq!(state.generation, 1);
        assert!(state.update_timer <= 0.1 + f32::EPSILON);
    }
}
