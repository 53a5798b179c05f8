use cellpath_core::Point;

/// Errors raised by [`AStar`](crate::AStar) construction and search.
///
/// All variants are terminal for the engine instance that produced them;
/// nothing is retried internally.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// The grid has zero rows or zero columns.
    #[error("grid has zero rows or zero columns")]
    InvalidGrid,

    /// The start cell is out of bounds or not walkable.
    #[error("start cell {0} is out of bounds or not walkable")]
    StartBlocked(Point),

    /// The end cell is out of bounds or not walkable.
    #[error("end cell {0} is out of bounds or not walkable")]
    EndBlocked(Point),

    /// The open set emptied or the iteration budget ran out before the end
    /// cell was reached.
    #[error("no route from {start} to {end}")]
    PathNotFound { start: Point, end: Point },
}
