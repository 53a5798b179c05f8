//! **cellpath-core** — Weighted-grid route search (core types).
//!
//! This crate provides the foundational types used across the *cellpath*
//! workspace: the [`Point`] geometry primitive and the [`CostGrid`]
//! walkability/cost model that the search engine queries.

pub mod geom;
pub mod grid;

pub use geom::Point;
pub use grid::{BLOCKED, CostGrid, GridError};
