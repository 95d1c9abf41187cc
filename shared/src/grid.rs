use std::fmt;

use log::debug;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

/// A single cell. `row` and `col` always match the cell's position in its [`Grid`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Cell {
    row: usize,
    col: usize,
    state: CellState,
}

impl Cell {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }
}

/// A fixed-size, bounded grid of cells stored row by row.
///
/// Lookups and writes take signed coordinates so that positions above or to the
/// left of the grid can be expressed; such positions are simply out of bounds.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// A grid where every cell is dead.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self::from_fn(rows, cols, |_, _| CellState::Dead)
    }

    /// Builds a grid by asking `state_at` for the state of every position, row by row.
    pub fn from_fn<F>(rows: usize, cols: usize, mut state_at: F) -> Self
    where
        F: FnMut(usize, usize) -> CellState,
    {
        let mut cells = Vec::with_capacity(rows);
        for row in 0..rows {
            let mut line = Vec::with_capacity(cols);
            for col in 0..cols {
                line.push(Cell {
                    row,
                    col,
                    state: state_at(row, col),
                });
            }
            cells.push(line);
        }
        Grid { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at `(row, col)`, or `None` when the position lies outside the grid.
    pub fn get(&self, row: isize, col: isize) -> Option<&Cell> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.cells.get(row)?.get(col)
    }

    fn get_mut(&mut self, row: isize, col: isize) -> Option<&mut Cell> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.cells.get_mut(row)?.get_mut(col)
    }

    /// Out-of-bounds positions are never alive.
    pub fn is_alive(&self, row: isize, col: isize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Returns the grid with the cell at `(row, col)` set to `alive`.
    ///
    /// Writing outside the grid is a no-op: the grid comes back unchanged. Seeding code
    /// relies on this to place patterns that hang over an edge.
    pub fn set_alive(mut self, row: isize, col: isize, alive: bool) -> Self {
        match self.get_mut(row, col) {
            Some(cell) => cell.state = CellState::from(alive),
            None => debug!(
                "discarding write outside the {}x{} grid at ({row}, {col})",
                self.rows, self.cols
            ),
        }
        self
    }

    pub fn place(self, row: isize, col: isize) -> Self {
        self.set_alive(row, col, true)
    }

    /// Read access for renderers, one slice per row.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter().flatten()
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells().filter(|cell| cell.is_alive()).count()
    }

    /// Advance by one generation. See [`crate::step::step`].
    pub fn step(&self) -> Grid {
        crate::step::step(self)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.cells {
            for cell in line {
                f.write_str(if cell.is_alive() { "O" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
