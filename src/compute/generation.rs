//! Generation engine - the Game of Life rule applied over a toroidal grid.
//!
//! Implements the classic rules:
//! - A live cell with 2-3 neighbors survives
//! - A dead cell with exactly 3 neighbors becomes alive
//! - All other cells die or stay dead
//!
//! Performance optimized with buffer swapping instead of per-step allocation.

use super::Grid;

/// Offsets of the 8 neighbors, (row, column).
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Double-buffered generation calculator.
///
/// Owns three same-shaped buffers: the current cell states, the write buffer
/// for the next generation, and the per-cell neighbor counts. [`advance`]
/// swaps the two cell buffers instead of reallocating, which keeps each step
/// at O(rows * columns) time with no allocation. Callers only ever receive
/// deep copies, so engine-internal storage cannot be aliased or corrupted
/// from outside.
///
/// [`advance`]: Generation::advance
pub struct Generation {
    current: Vec<bool>,
    next: Vec<bool>,
    neighbor_count: Vec<u8>,
    rows: usize,
    columns: usize,
}

impl Generation {
    /// Create a new calculator seeded from the given grid.
    ///
    /// The grid is deep-copied in; later mutation of `initial` does not
    /// affect the engine.
    pub fn new(initial: &Grid) -> Result<Self, EngineError> {
        if initial.rows() == 0 || initial.columns() == 0 {
            return Err(EngineError::EmptyGrid);
        }
        let size = initial.rows() * initial.columns();
        Ok(Self {
            current: initial.as_slice().to_vec(),
            next: vec![false; size],
            neighbor_count: vec![0; size],
            rows: initial.rows(),
            columns: initial.columns(),
        })
    }

    /// Number of rows in the fixed shape.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the fixed shape.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Deep copy of the current generation.
    pub fn current(&self) -> Grid {
        Grid::from_flat(self.current.clone(), self.rows, self.columns)
    }

    /// Replace the current generation.
    ///
    /// Fails if the supplied grid's shape differs from the engine's fixed
    /// shape. On success the input is deep-copied in; neighbor counts are
    /// stale until the next [`advance`](Generation::advance).
    pub fn set_current(&mut self, grid: &Grid) -> Result<(), EngineError> {
        if grid.rows() != self.rows || grid.columns() != self.columns {
            return Err(EngineError::DimensionMismatch {
                expected: (self.rows, self.columns),
                actual: (grid.rows(), grid.columns()),
            });
        }
        self.current.copy_from_slice(grid.as_slice());
        Ok(())
    }

    /// Compute the next generation and return a deep copy of it.
    ///
    /// Deterministic and infallible: recomputes neighbor counts from the
    /// current buffer, applies the rule into the write buffer, then swaps
    /// the two buffers. Repeated calls reproduce the same trajectory as an
    /// unbuffered implementation.
    pub fn advance(&mut self) -> Grid {
        self.count_neighbors();
        self.apply_rule();
        std::mem::swap(&mut self.current, &mut self.next);
        Grid::from_flat(self.current.clone(), self.rows, self.columns)
    }

    /// Count live neighbors for every cell, toroidal wrap on both axes.
    fn count_neighbors(&mut self) {
        let rows = self.rows as isize;
        let columns = self.columns as isize;
        for row in 0..self.rows {
            for column in 0..self.columns {
                let mut count = 0u8;
                for (dr, dc) in NEIGHBOR_OFFSETS {
                    let r = (row as isize + dr).rem_euclid(rows) as usize;
                    let c = (column as isize + dc).rem_euclid(columns) as usize;
                    if self.current[r * self.columns + c] {
                        count += 1;
                    }
                }
                self.neighbor_count[row * self.columns + column] = count;
            }
        }
    }

    /// Fill the write buffer from counts and current states.
    fn apply_rule(&mut self) {
        for (idx, (&count, &alive)) in self
            .neighbor_count
            .iter()
            .zip(self.current.iter())
            .enumerate()
        {
            self.next[idx] = match count {
                // Birth, or survival with 3 neighbors
                3 => true,
                // Survival only if already alive
                2 => alive,
                // Under- or overpopulation
                _ => false,
            };
        }
    }
}

/// Engine construction and injection errors.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("cell grid cannot be empty")]
    EmptyGrid,
    #[error("grid shape {actual:?} does not match engine shape {expected:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}
