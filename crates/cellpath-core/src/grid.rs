//! The [`CostGrid`] type — a rectangular grid of traversal costs.
//!
//! Each cell holds a signed cost: [`BLOCKED`] (`-1`) marks the cell as
//! impassable, any value ≥ 0 is the cost incurred when *entering* the cell.
//! The grid is supplied by the caller and never mutated by the search engine.

use crate::geom::Point;

/// Cell value marking a non-walkable cell.
pub const BLOCKED: i32 = -1;

/// Errors raised when constructing a [`CostGrid`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A row's length differs from row 0's.
    #[error("row {row} has {len} columns, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// A rectangular mapping from [`Point`] to a signed traversal cost,
/// stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostGrid {
    cells: Vec<i32>,
    width: usize,
    height: usize,
}

impl CostGrid {
    /// Build a grid from rows of per-cell costs. Row 0's length defines the
    /// width; every other row must match it.
    ///
    /// Empty input (no rows, or an empty row 0) yields a degenerate 0-sized
    /// grid; degenerate grids are representable here and rejected by the
    /// search engine at construction.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != width {
                return Err(GridError::Ragged {
                    row,
                    len: r.len(),
                    expected: width,
                });
            }
            cells.extend(r);
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Create a `width × height` grid with every cell set to `cost`.
    pub fn filled(width: usize, height: usize, cost: i32) -> Self {
        Self {
            cells: vec![cost; width * height],
            width,
            height,
        }
    }

    /// Width (number of columns).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height (number of rows).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.in_bounds(p) {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    /// Whether both components of `p` lie within `[0, width) × [0, height)`.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Raw cell value at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<i32> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether the cell at `p` can be traversed. Out-of-bounds points and
    /// [`BLOCKED`] cells report `false`.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| c != BLOCKED)
    }

    /// Cost of entering the cell at `p`. `None` if `p` is out of bounds or
    /// blocked; callers guard with [`in_bounds`](Self::in_bounds) and
    /// [`is_walkable`](Self::is_walkable) first.
    #[inline]
    pub fn entry_cost(&self, p: Point) -> Option<i32> {
        self.at(p).filter(|&c| c != BLOCKED)
    }

    /// Set the cell at `p`. No-op if out of bounds. Builder-side mutation
    /// only; the search engine never mutates a grid.
    pub fn set(&mut self, p: Point, cost: i32) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cost;
        }
    }
}
