//! Initial patterns written into a grid before the simulation starts.

use log::debug;
use rand::Rng;

use crate::grid::Grid;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),
    #[error("density must be between 0 and 1, got {0}")]
    InvalidDensity(f64),
}

/// A named shape, given as `(row, col)` offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(isize, isize)],
}

pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "r-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

pub const DIEHARD: Pattern = Pattern {
    name: "diehard",
    cells: &[(0, 6), (1, 0), (1, 1), (2, 1), (2, 5), (2, 6), (2, 7)],
};

pub const ACORN: Pattern = Pattern {
    name: "acorn",
    cells: &[(0, 1), (1, 3), (2, 0), (2, 1), (2, 4), (2, 5), (2, 6)],
};

/// Lightweight spaceship.
pub const LWSS: Pattern = Pattern {
    name: "lwss",
    cells: &[(0, 1), (0, 4), (1, 0), (2, 0), (2, 4), (3, 0), (3, 1), (3, 2), (3, 3)],
};

pub const PATTERNS: &[Pattern] = &[
    BLOCK,
    BLINKER,
    TOAD,
    BEACON,
    GLIDER,
    R_PENTOMINO,
    DIEHARD,
    ACORN,
    LWSS,
];

impl Pattern {
    /// `(height, width)` of the pattern's bounding box.
    pub fn bounds(&self) -> (isize, isize) {
        let height = self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0);
        let width = self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0);
        (height, width)
    }

    /// Places the pattern with its top-left corner at `(row, col)`. Cells landing
    /// outside the grid are dropped.
    pub fn place_at(&self, grid: Grid, row: isize, col: isize) -> Grid {
        debug!("placing {} at ({row}, {col})", self.name);
        self.cells
            .iter()
            .fold(grid, |grid, &(dr, dc)| grid.place(row + dr, col + dc))
    }

    pub fn place_centered(&self, grid: Grid) -> Grid {
        let (height, width) = self.bounds();
        let row = (grid.rows() as isize - height) / 2;
        let col = (grid.cols() as isize - width) / 2;
        self.place_at(grid, row, col)
    }
}

/// Case-insensitive lookup in [`PATTERNS`].
pub fn find_pattern(name: &str) -> Result<&'static Pattern, SeedError> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| SeedError::UnknownPattern(name.to_owned()))
}

/// Sets every cell of the grid alive with probability `density`, dead otherwise.
pub fn randomize<R: Rng + ?Sized>(mut grid: Grid, rng: &mut R, density: f64) -> Result<Grid, SeedError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(SeedError::InvalidDensity(density));
    }

    for row in 0..grid.rows() as isize {
        for col in 0..grid.cols() as isize {
            grid = grid.set_alive(row, col, rng.random_bool(density));
        }
    }
    Ok(grid)
}
