use log::trace;
use rayon::prelude::*;

use crate::grid::{Cell, CellState, Grid};
use crate::neighborhood::alive_neighbor_count;
use crate::rules::next_state;

/// Advance the grid by one generation.
///
/// Every cell of the result is computed from `grid` alone; the input is never
/// touched, so no cell can observe a neighbor's already-updated state.
pub fn step(grid: &Grid) -> Grid {
    let next = Grid::from_fn(grid.rows(), grid.cols(), |row, col| next_cell_state(grid, row, col));
    trace!("stepped {}x{} grid, population {}", next.rows(), next.cols(), next.population());
    next
}

/// Same result as [`step`], with rows computed on the rayon thread pool.
pub fn par_step(grid: &Grid) -> Grid {
    let states: Vec<Vec<CellState>> = (0..grid.rows())
        .into_par_iter()
        .map(|row| (0..grid.cols()).map(|col| next_cell_state(grid, row, col)).collect::<Vec<_>>())
        .collect();

    let next = Grid::from_fn(grid.rows(), grid.cols(), |row, col| states[row][col]);
    trace!("stepped {}x{} grid in parallel, population {}", next.rows(), next.cols(), next.population());
    next
}

fn next_cell_state(grid: &Grid, row: usize, col: usize) -> CellState {
    // grid dimensions come from Vec lengths, so they always fit in isize
    let (row, col) = (row as isize, col as isize);
    let state = grid.get(row, col).map_or(CellState::Dead, Cell::state);
    next_state(state, alive_neighbor_count(grid, row, col))
}
