//! The rectangular [`Grid`] model.
//!
//! A `Grid` is a fixed-size, row-major mapping from `(row, col)` to
//! [`Cell`]. It is a plain value: `Clone` produces the caller-isolated
//! snapshot that algorithms receive, so the engine never aliases
//! caller-owned state.

use crate::cell::{Cell, CellKind};
use crate::coord::Coord;
use crate::error::{Error, Result};

/// Orthogonal neighbor offsets in enumeration order: down, up, right, left.
///
/// This order is the tie-breaker for every traversal algorithm and must be
/// held fixed so results are reproducible across runs and algorithms.
const DIRS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A rectangular grid of [`Cell`]s with row-major flat storage.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of empty cells. Both dimensions must be ≥ 1.
    pub fn new(rows: i32, cols: i32) -> Result<Self> {
        if rows < 1 || cols < 1 {
            return Err(Error::EmptyGrid);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::empty(); (rows * cols) as usize],
        })
    }

    /// Build a grid from explicit rows, validating rectangularity.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(Error::EmptyGrid);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::NonRectangular {
                    row: i,
                    expected: width,
                    got: row.len(),
                });
            }
        }
        Ok(Self {
            rows: height as i32,
            cols: width as i32,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: constructors reject empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the coordinate is inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Convert a coordinate to a flat index. `None` if out of bounds.
    #[inline]
    pub fn idx(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some((c.row * self.cols + c.col) as usize)
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new(idx as i32 / self.cols, idx as i32 % self.cols)
    }

    /// The cell at a coordinate, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Cell> {
        self.idx(c).map(|i| self.cells[i])
    }

    /// Set the cell at a coordinate. Does nothing if out of bounds.
    #[inline]
    pub fn set(&mut self, c: Coord, cell: Cell) {
        if let Some(i) = self.idx(c) {
            self.cells[i] = cell;
        }
    }

    /// Append the in-bounds, non-obstacle orthogonal neighbors of `c` to
    /// `buf`, in the fixed order down, up, right, left. The caller clears
    /// `buf` before calling.
    pub fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        for (drow, dcol) in DIRS {
            let n = c.shift(drow, dcol);
            if let Some(cell) = self.at(n) {
                if cell.is_passable() {
                    buf.push(n);
                }
            }
        }
    }

    /// Locate the unique start cell, if present.
    pub fn start(&self) -> Option<Coord> {
        self.position(CellKind::Start)
    }

    /// Locate the unique goal cell, if present.
    pub fn goal(&self) -> Option<Coord> {
        self.position(CellKind::Goal)
    }

    fn position(&self, kind: CellKind) -> Option<Coord> {
        self.cells
            .iter()
            .position(|cell| cell.kind == kind)
            .map(|i| self.coord(i))
    }

    /// Check the traversal entry contract: both coordinates are in bounds
    /// and carry the expected cell kinds.
    pub fn validate(&self, start: Coord, goal: Coord) -> Result<()> {
        let s = self.at(start).ok_or(Error::OutOfBounds(start))?;
        let g = self.at(goal).ok_or(Error::OutOfBounds(goal))?;
        if s.kind != CellKind::Start {
            return Err(Error::MissingStart(start));
        }
        if g.kind != CellKind::Goal {
            return Err(Error::MissingGoal(goal));
        }
        Ok(())
    }

    /// Iterate over `(Coord, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (self.coord(i), cell))
    }

    /// Count cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|cell| cell.kind == kind).count()
    }
}
