use std::fmt;

use itertools::Itertools;
use rayon::prelude::*;

use crate::error::GridError;

/// Absolute cell coordinate. Signed so that probes stepping off the grid stay representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: isize,
    pub col: isize,
}

impl Position {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row as isize, col as isize)
    }
}

/// Immutable row-major byte grid. Every row has the same length and both
/// dimensions are at least one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Builds a grid from equal-length lines.
    ///
    /// # Errors
    /// * [`GridError::Empty`] if there are no lines
    /// * [`GridError::EmptyRow`] if the first line is empty
    /// * [`GridError::RaggedRow`] if any line differs in length from the first
    pub fn from_lines<I, S>(lines: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut lines = lines.into_iter();
        let first = lines.next().ok_or(GridError::Empty)?;
        let first = first.as_ref();
        if first.is_empty() {
            return Err(GridError::EmptyRow);
        }

        let cols = first.len();
        let mut data = first.to_vec();
        for (idx, line) in lines.enumerate() {
            let line = line.as_ref();
            if line.len() != cols {
                return Err(GridError::RaggedRow {
                    row: idx + 1,
                    expected: cols,
                    found: line.len(),
                });
            }
            data.extend_from_slice(line);
        }

        let rows = data.len() / cols;
        tracing::debug!("Built {}x{} grid", rows, cols);
        Ok(Self { data, rows, cols })
    }

    /// Builds a grid from a flat row-major buffer split into rows of `cols` bytes.
    pub fn from_raw(data: Vec<u8>, cols: usize) -> Result<Self, GridError> {
        if data.is_empty() {
            return Err(GridError::Empty);
        }
        if cols == 0 {
            return Err(GridError::EmptyRow);
        }
        if data.len() % cols != 0 {
            return Err(GridError::UnevenBuffer {
                len: data.len(),
                cols,
            });
        }

        let rows = data.len() / cols;
        Ok(Self { data, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells, always `rows() * cols()`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw cell access. Callers are expected to have checked bounds already.
    pub fn at(&self, row: usize, col: usize) -> Result<u8, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.data[row * self.cols + col])
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        let row_bounds = 0 <= row && row < self.rows as isize;
        let col_bounds = 0 <= col && col < self.cols as isize;
        row_bounds && col_bounds
    }

    /// Bounds-checked read used by the matchers.
    #[inline]
    pub fn get(&self, position: Position) -> Option<u8> {
        self.in_bounds(position.row, position.col)
            .then(|| self.data[position.row as usize * self.cols + position.col as usize])
    }

    /// Every cell position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| row_positions(row, cols))
    }

    /// Sums `count` over every cell. Rows are scanned in parallel.
    pub fn scan<F>(&self, count: F) -> usize
    where
        F: Fn(Position) -> usize + Sync,
    {
        (0..self.rows)
            .into_par_iter()
            .map(|row| row_positions(row, self.cols).map(&count).sum::<usize>())
            .sum()
    }
}

fn row_positions(row: usize, cols: usize) -> impl Iterator<Item = Position> {
    (0..cols).map(move |col| Position::from((row, col)))
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            writeln!(f, "{}", row.iter().map(|&cell| cell as char).join(""))?;
        }
        Ok(())
    }
}
