mod cell;
mod grid;
mod mode;

pub use cell::Cell;
pub use grid::{CellPos, Grid};
pub use mode::Mode;
