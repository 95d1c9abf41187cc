use shared::seed::{self, BEACON, BLINKER, BLOCK, GLIDER, LWSS, TOAD};
use shared::{par_step, step, Grid};

const SIZE: usize = 50;

fn alive_positions(grid: &Grid) -> Vec<(isize, isize)> {
    grid.cells()
        .filter(|cell| cell.is_alive())
        .map(|cell| (cell.row() as isize, cell.col() as isize))
        .collect()
}

/// Alive positions shifted so the top-left of their bounding box sits at the origin.
fn normalized(grid: &Grid) -> Vec<(isize, isize)> {
    let positions = alive_positions(grid);
    let min_row = positions.iter().map(|&(row, _)| row).min().unwrap_or(0);
    let min_col = positions.iter().map(|&(_, col)| col).min().unwrap_or(0);
    let mut shifted: Vec<_> = positions.into_iter().map(|(row, col)| (row - min_row, col - min_col)).collect();
    shifted.sort();
    shifted
}

fn advance(grid: &Grid, generations: usize) -> Grid {
    (0..generations).fold(grid.clone(), |grid, _| step(&grid))
}

#[test]
fn reference_grid_starts_empty() {
    let grid = Grid::empty(SIZE, SIZE);
    assert_eq!(grid.rows(), SIZE);
    assert_eq!(grid.cols(), SIZE);
    assert_eq!(grid.population(), 0);
    assert_eq!(step(&grid), grid);
}

#[test]
fn glider_travels_diagonally() {
    let start = GLIDER.place_at(Grid::empty(SIZE, SIZE), 5, 5);
    let mut grid = start.clone();
    for period in 1..=8 {
        grid = advance(&grid, 4);
        let expected = GLIDER.place_at(Grid::empty(SIZE, SIZE), 5 + period, 5 + period);
        assert_eq!(grid, expected, "after {} generations", period * 4);
    }
}

#[test]
fn oscillators_return_after_two_generations() {
    for pattern in [BLINKER, TOAD, BEACON] {
        let start = pattern.place_centered(Grid::empty(SIZE, SIZE));
        let once = step(&start);
        assert_ne!(once, start, "{} should change", pattern.name);
        assert_eq!(step(&once), start, "{} should have period 2", pattern.name);
    }
}

#[test]
fn still_life_stays_put() {
    let start = BLOCK.place_at(Grid::empty(SIZE, SIZE), 20, 30);
    assert_eq!(advance(&start, 10), start);
}

#[test]
fn spaceship_keeps_its_shape() {
    let start = LWSS.place_centered(Grid::empty(SIZE, SIZE));
    let later = advance(&start, 4);
    assert_ne!(later, start);
    assert_eq!(normalized(&later), normalized(&start));
}

#[test]
fn parallel_stepping_follows_the_same_history() {
    let start = seed::find_pattern("r-pentomino").unwrap().place_centered(Grid::empty(SIZE, SIZE));
    let mut sequential = start.clone();
    let mut parallel = start;
    for _ in 0..60 {
        sequential = step(&sequential);
        parallel = par_step(&parallel);
        assert_eq!(sequential, parallel);
    }
    assert!(sequential.population() > 5);
}

#[test]
fn generations_only_ever_hold_in_bounds_cells() {
    let mut grid = seed::ACORN.place_at(Grid::empty(SIZE, SIZE), 0, 0);
    for _ in 0..30 {
        grid = grid.step();
        assert_eq!(grid.cells().count(), SIZE * SIZE);
        for (row, line) in grid.row_slices().enumerate() {
            assert_eq!(line.len(), SIZE);
            for (col, cell) in line.iter().enumerate() {
                assert_eq!((cell.row(), cell.col()), (row, col));
            }
        }
    }
}
