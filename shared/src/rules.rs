use crate::grid::CellState::{self, Alive, Dead};

/// The next state of a cell given its current state and how many of its neighbors are alive (B3/S23).
pub fn next_state(state: CellState, alive_neighbors: u8) -> CellState {
    match (state, alive_neighbors) {
        (Alive, 0..=1) => Dead,  // Underpopulation
        (Alive, 2..=3) => Alive, // Survives
        (Alive, _) => Dead,      // Overpopulation
        (Dead, 3) => Alive,      // Becomes alive
        (Dead, _) => Dead,
    }
}
