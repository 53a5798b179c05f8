//! A* route search over weighted cost grids.
//!
//! This crate computes a lowest-cost route between two cells of a
//! [`CostGrid`](cellpath_core::CostGrid) using best-first expansion over the
//! 8-neighborhood, a Euclidean heuristic, and backtracking reconstruction:
//!
//! - [`AStar`] — the single-use search engine
//! - [`SearchError`] — construction and search failures
//! - [`SearchObserver`] — optional per-iteration diagnostics hook
//!
//! ```
//! use cellpath_astar::AStar;
//! use cellpath_core::{CostGrid, Point};
//!
//! let grid = CostGrid::filled(3, 3, 1);
//! let mut search = AStar::new(&grid, Point::new(0, 0), Point::new(2, 2))?;
//! let route = search.find_path()?;
//! assert_eq!(route.first(), Some(&Point::new(0, 0)));
//! assert_eq!(route.last(), Some(&Point::new(2, 2)));
//! # Ok::<(), cellpath_astar::SearchError>(())
//! ```

mod astar;
mod distance;
mod error;
mod trace;

pub use astar::{AStar, DEFAULT_BUDGET};
pub use distance::euclidean;
pub use error::SearchError;
pub use trace::{IterationSnapshot, LogObserver, SearchObserver};
