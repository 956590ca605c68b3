/// Simulation mode. The board starts in `Editing`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Cursor previews and paints cells
    #[default]
    Editing,
    /// Conway's rule advances the board every update
    Running,
}

impl Mode {
    /// Level-triggered transition evaluated once per update.
    /// Editing only watches the start key, Running only the stop key,
    /// so holding either key is a no-op once the target mode is reached.
    pub const fn next(self, start_held: bool, stop_held: bool) -> Self {
        match self {
            Mode::Editing if start_held => Mode::Running,
            Mode::Running if stop_held => Mode::Editing,
            mode => mode,
        }
    }

    pub const fn is_running(self) -> bool {
        matches!(self, Mode::Running)
    }

    /// Display name for logs
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Editing => "Editing",
            Mode::Running => "Running",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_editing() {
        assert_eq!(Mode::default(), Mode::Editing);
    }

    #[test]
    fn test_start_and_stop() {
        assert_eq!(Mode::Editing.next(true, false), Mode::Running);
        assert_eq!(Mode::Running.next(false, true), Mode::Editing);
    }

    #[test]
    fn test_held_keys_are_idempotent() {
        assert_eq!(Mode::Running.next(true, false), Mode::Running);
        assert_eq!(Mode::Editing.next(false, true), Mode::Editing);
        assert_eq!(Mode::Editing.next(false, false), Mode::Editing);
        assert_eq!(Mode::Running.next(false, false), Mode::Running);
    }

    #[test]
    fn test_both_keys_flip_once() {
        assert_eq!(Mode::Editing.next(true, true), Mode::Running);
        assert_eq!(Mode::Running.next(true, true), Mode::Editing);
    }
}
