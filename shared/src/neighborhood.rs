use crate::grid::Grid;

/// Relative positions of the eight surrounding cells, row-major.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The eight coordinates around `(row, col)`, in [`NEIGHBOR_OFFSETS`] order.
/// Some of them may lie outside any grid. Coordinates wrap at the `isize` limits, which
/// still lands outside every grid.
pub fn neighbor_coords(row: isize, col: isize) -> [(isize, isize); 8] {
    NEIGHBOR_OFFSETS.map(|(dr, dc)| (row.wrapping_add(dr), col.wrapping_add(dc)))
}

/// Count the number of alive neighbors for a cell. Positions past the edge count as nothing.
pub fn alive_neighbor_count(grid: &Grid, row: isize, col: isize) -> u8 {
    let mut count = 0;
    for (neighbor_row, neighbor_col) in neighbor_coords(row, col) {
        if grid.is_alive(neighbor_row, neighbor_col) {
            count += 1;
        }
    }
    count
}
