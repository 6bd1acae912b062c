//! Cell grid storage for the Game of Life.

use serde::{Deserialize, Serialize};

/// Two-dimensional matrix of cell states on a toroidal surface.
///
/// Shape is fixed at construction. Data is stored as a flat array with
/// indexing: [row * columns + column], which makes ragged rows
/// unrepresentable once a grid exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<bool>,
    rows: usize,
    columns: usize,
}

impl Grid {
    /// Create an all-dead grid of the given shape.
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            cells: vec![false; rows * columns],
            rows,
            columns,
        })
    }

    /// Build a grid from nested rows, validating rectangularity.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, GridError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(GridError::Empty);
        }
        let columns = rows[0].len();
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(GridError::RaggedRows {
                    row: index,
                    length: row.len(),
                    expected: columns,
                });
            }
        }
        let cells = rows.iter().flat_map(|row| row.iter().copied()).collect();
        Ok(Self {
            cells,
            rows: rows.len(),
            columns,
        })
    }

    /// Wrap an existing flat buffer. Length must match the shape.
    pub(crate) fn from_flat(cells: Vec<bool>, rows: usize, columns: usize) -> Self {
        debug_assert_eq!(cells.len(), rows * columns);
        Self {
            cells,
            rows,
            columns,
        }
    }

    /// Number of rows (Y dimension).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (X dimension).
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Shape as (rows, columns).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Convert (row, column) coordinates to flat index.
    #[inline]
    pub fn idx(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// Cell state at (row, column).
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> bool {
        self.cells[self.idx(row, column)]
    }

    /// Set cell state at (row, column).
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, alive: bool) {
        let idx = self.idx(row, column);
        self.cells[idx] = alive;
    }

    /// Flip the cell at (row, column), returning its new state.
    pub fn toggle(&mut self, row: usize, column: usize) -> bool {
        let idx = self.idx(row, column);
        self.cells[idx] = !self.cells[idx];
        self.cells[idx]
    }

    /// Set every cell dead in place. Shape and allocation are unchanged.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Count of alive cells.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// True if no cell is alive.
    pub fn is_dead(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }

    /// Flat cell buffer, row-major.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// Iterate rows as slices, top to bottom.
    pub fn row_slices(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.columns)
    }
}

/// Grid construction errors.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    Empty,
    #[error("row {row} has {length} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        length: usize,
        expected: usize,
    },
}
