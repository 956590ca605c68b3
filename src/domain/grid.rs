use super::Cell;

/// Offsets of the eight Moore neighbors as (row, col) deltas
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Row-major cell coordinate
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Grid manages the fixed-size board of cells.
/// Edges are hard boundaries: there is no wraparound.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead and unplaced
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::DEAD; width * height],
        }
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.contains(row, col)
            .then(|| self.cells[self.get_index(row, col)])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if !self.contains(row, col) {
            return None;
        }
        let idx = self.get_index(row, col);
        self.cells.get_mut(idx)
    }

    /// Set cell at position, ignored outside the grid
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(slot) = self.get_mut(row, col) {
            *slot = cell;
        }
    }

    /// Neighbors inside the grid: 3 for corners, 5 for edges, 8 otherwise.
    /// Order is unspecified.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = Cell> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            self.get(r, c)
        })
    }

    /// Count live neighbors, never more than 8
    pub fn count_alive_neighbors(&self, row: usize, col: usize) -> u8 {
        self.neighbors(row, col)
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Editing rule: light the cell under the cursor, pin it while the
    /// primary button is held, and clear every other unpinned cell.
    ///
    /// `cursor` may lie one past the last row or column; it then matches
    /// no cell and only the clearing half of the rule applies.
    pub fn paint(&mut self, cursor: CellPos, painting: bool) {
        let width = self.width;
        for (idx, cell) in self.cells.iter_mut().enumerate() {
            if CellPos::new(idx / width, idx % width) == cursor {
                cell.alive = true;
                if painting {
                    cell.placed = true;
                }
            } else if !cell.placed {
                cell.alive = false;
            }
        }
    }

    /// Pure evolution - returns the next generation.
    /// Every neighbor count reads `self`, never a partially updated grid.
    pub fn evolve(&self) -> Self {
        let cells = self
            .iter_cells()
            .map(|(row, col, cell)| cell.evolve(self.count_alive_neighbors(row, col)))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells in row-major order with their (row, col)
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / width, idx % width, cell))
    }
}
