/// Cell is the fundamental unit of the board.
/// `alive` is the simulated state, `placed` marks a cell the user pinned
/// while editing so the cursor preview never clears it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cell {
    pub alive: bool,
    pub placed: bool,
}

impl Cell {
    /// Dead, unplaced cell
    pub const DEAD: Self = Self { alive: false, placed: false };

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        self.alive
    }

    /// Pure function to compute the next state based on Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    ///
    /// `placed` only matters while editing and is carried over as-is.
    pub const fn evolve(self, neighbors: u8) -> Self {
        let alive = matches!((self.alive, neighbors), (true, 2 | 3) | (false, 3));
        Self { alive, placed: self.placed }
    }
}
