//! A live cell dies if it has fewer than two live neighbors.
//! A live cell with two or three live neighbors lives on to the next generation.
//! A live cell with more than three live neighbors dies.
//! A dead cell will be brought back to live if it has exactly three live neighbors.
//!
//! The grid is bounded: cells beyond the edges do not exist and never count as neighbors.
//!
//! ```
//! use shared::Grid;
//!
//! let blinker = Grid::empty(5, 5).place(2, 1).place(2, 2).place(2, 3);
//! assert_ne!(blinker.step(), blinker);
//! assert_eq!(blinker.step().step(), blinker);
//! ```

pub mod grid;
pub mod neighborhood;
pub mod rules;
pub mod seed;
pub mod step;

pub use grid::{Cell, CellState, Grid};
pub use step::{par_step, step};
