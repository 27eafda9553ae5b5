//! Dense row-major matrix snapshot

use std::fmt;

use super::Value;
use crate::TraceError;

/// Rectangular grid of values (row-major storage)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: Vec<Value>,
}

impl Matrix {
    /// Create `rows × cols` matrix of blank cells
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, Value::blank())
    }

    /// Create `rows × cols` matrix with every cell set to `value`
    pub fn filled(rows: usize, cols: usize, value: Value) -> Self {
        if rows == 0 || cols == 0 {
            return Self::default();
        }
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    /// Build from nested rows; every row must have the same length
    pub fn from_rows<R, T>(rows: impl IntoIterator<Item = R>) -> Result<Self, TraceError>
    where
        R: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut count = 0;

        for (r, row) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(row.into_iter().map(Into::into));
            let width = cells.len() - before;
            match cols {
                None => cols = Some(width),
                Some(expected) if expected != width => {
                    return Err(TraceError::RaggedMatrix {
                        row: r,
                        expected,
                        found: width,
                    });
                }
                Some(_) => {}
            }
            count += 1;
        }

        let cols = cols.unwrap_or(0);
        if cols == 0 {
            return Ok(Self::default());
        }
        Ok(Self {
            rows: count,
            cols,
            cells,
        })
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix has no cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Total number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether `(row, col)` lies inside the grid
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Cell value
    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        if self.contains(row, col) {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Overwrite a cell; returns false when out of range
    pub fn set(&mut self, row: usize, col: usize, value: Value) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        self.cells[row * self.cols + col] = value;
        true
    }

    /// Row slice
    pub fn row(&self, row: usize) -> Option<&[Value]> {
        if row < self.rows {
            Some(&self.cells[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    /// `B[j][i] = A[i][j]`
    pub fn transposed(&self) -> Self {
        let mut out = Self::new(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.cells[j * out.cols + i] = self.cells[i * self.cols + j].clone();
            }
        }
        out
    }

    /// `B[j][rows-1-i] = A[i][j]` (90° clockwise)
    pub fn rotated_clockwise(&self) -> Self {
        let mut out = Self::new(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                let (ni, nj) = (j, self.rows - 1 - i);
                out.cells[ni * out.cols + nj] = self.cells[i * self.cols + j].clone();
            }
        }
        out
    }

    /// Cells visited by the clockwise boundary spiral, tagged with
    /// the side of the current ring each visit belongs to
    pub fn spiral_walk(&self) -> Vec<SpiralVisit> {
        let mut walk = Vec::with_capacity(self.len());
        if self.is_empty() {
            return walk;
        }

        let visit = |row: isize, col: isize, side: SpiralSide| SpiralVisit {
            row: row as usize,
            col: col as usize,
            side,
        };

        // signed bounds so that shrinking past zero inverts cleanly
        let (mut top, mut bottom) = (0isize, self.rows as isize - 1);
        let (mut left, mut right) = (0isize, self.cols as isize - 1);

        while top <= bottom && left <= right {
            for j in left..=right {
                walk.push(visit(top, j, SpiralSide::Top));
            }
            top += 1;
            if top > bottom {
                break;
            }

            for i in top..=bottom {
                walk.push(visit(i, right, SpiralSide::Right));
            }
            right -= 1;
            if left > right {
                break;
            }

            for j in (left..=right).rev() {
                walk.push(visit(bottom, j, SpiralSide::Bottom));
            }
            bottom -= 1;
            if top > bottom {
                break;
            }

            for i in (top..=bottom).rev() {
                walk.push(visit(i, left, SpiralSide::Left));
            }
            left += 1;
        }

        walk
    }

    /// `(row, col)` pairs in clockwise spiral order
    pub fn spiral_order(&self) -> Vec<(usize, usize)> {
        self.spiral_walk().into_iter().map(|v| (v.row, v.col)).collect()
    }
}

/// Ring side a spiral visit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiralSide {
    /// Top row, left to right
    Top,
    /// Right column, top to bottom
    Right,
    /// Bottom row, right to left
    Bottom,
    /// Left column, bottom to top
    Left,
}

/// One cell of a spiral walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiralVisit {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
    /// Side of the ring
    pub side: SpiralSide,
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "(empty matrix)");
        }
        for row in (0..self.rows).filter_map(|r| self.row(r)) {
            let cells: Vec<&str> = row.iter().map(Value::as_str).collect();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}
