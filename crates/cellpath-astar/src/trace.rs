//! Optional per-iteration diagnostics for [`AStar`](crate::AStar) searches.
//!
//! Observation is pure: a [`SearchObserver`] sees each select-expand
//! iteration but has no effect on the search outcome.

use cellpath_core::Point;

/// Snapshot of the search state at one select-expand iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationSnapshot {
    /// 1-based iteration counter.
    pub iteration: usize,
    /// Coordinate selected for expansion.
    pub selected: Point,
    /// Accumulated cost from the start.
    pub g: f64,
    /// Heuristic estimate to the end.
    pub h: f64,
    /// Total estimated cost (`g + h`).
    pub f: f64,
    /// Open set size after removing the selected entry, counting live
    /// coordinates only (superseded entries excluded).
    pub open_len: usize,
    /// Closed set size before this iteration finalizes anything.
    pub closed_len: usize,
}

/// Receives one [`IterationSnapshot`] per select-expand iteration.
pub trait SearchObserver {
    fn on_iteration(&mut self, snapshot: &IterationSnapshot);
}

/// Observer that forwards each snapshot to `log::trace!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn on_iteration(&mut self, s: &IterationSnapshot) {
        log::trace!(
            "iter {}: select {} g={:.3} h={:.3} f={:.3} open={} closed={}",
            s.iteration,
            s.selected,
            s.g,
            s.h,
            s.f,
            s.open_len,
            s.closed_len,
        );
    }
}
