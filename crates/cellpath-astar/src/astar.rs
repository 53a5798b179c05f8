use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use cellpath_core::{CostGrid, Point};
use log::debug;

use crate::distance::euclidean;
use crate::error::SearchError;
use crate::trace::{IterationSnapshot, SearchObserver};

/// Default iteration budget: the upper bound on select-expand iterations per
/// search. The only defense against unbounded work on pathological inputs.
pub const DEFAULT_BUDGET: usize = 1000;

/// A coordinate with its three scores.
#[derive(Debug, Clone, Copy)]
struct Scored {
    pos: Point,
    g: f64,
    h: f64,
    f: f64,
}

/// A frontier edge: a scored node plus the arena index of the node it was
/// generated from (`None` for the start node). Back-references are walked
/// during route reconstruction.
#[derive(Debug, Clone, Copy)]
struct Edge {
    node: Scored,
    parent: Option<usize>,
}

/// Heap entry for the open set, ordered by lowest `f`, then earliest
/// insertion among equal `f`.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    f: f64,
    seq: u64,
    edge: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (a max-heap) pops lowest f, earliest seq.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-known open entry for a coordinate. `seq` identifies the live heap
/// entry; older heap entries for the same coordinate are stale.
#[derive(Debug, Clone, Copy)]
struct OpenSlot {
    f: f64,
    seq: u64,
}

/// Single-use A* search over a borrowed [`CostGrid`].
///
/// Constructed per (grid, start, end) triple; [`find_path`](AStar::find_path)
/// is invoked once and runs synchronously to completion. Independent engines
/// may search the same grid concurrently, since none of them mutate it.
#[derive(Debug)]
pub struct AStar<'g> {
    grid: &'g CostGrid,
    start: Point,
    end: Point,
    budget: Option<usize>,
    /// Arena of every frontier edge created during the search.
    edges: Vec<Edge>,
    open: BinaryHeap<OpenEntry>,
    open_best: HashMap<Point, OpenSlot>,
    /// Finalized edges, append-only, in finalization order.
    closed: Vec<usize>,
    closed_best: HashMap<Point, f64>,
    next_seq: u64,
}

impl<'g> AStar<'g> {
    /// Create an engine for a route from `start` to `end` on `grid`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidGrid`] if the grid has zero rows or columns.
    /// - [`SearchError::StartBlocked`] / [`SearchError::EndBlocked`] if an
    ///   endpoint is out of bounds or not walkable.
    pub fn new(grid: &'g CostGrid, start: Point, end: Point) -> Result<Self, SearchError> {
        if grid.width() == 0 || grid.height() == 0 {
            return Err(SearchError::InvalidGrid);
        }
        if !grid.in_bounds(start) || !grid.is_walkable(start) {
            return Err(SearchError::StartBlocked(start));
        }
        if !grid.in_bounds(end) || !grid.is_walkable(end) {
            return Err(SearchError::EndBlocked(end));
        }

        let mut engine = Self {
            grid,
            start,
            end,
            budget: Some(DEFAULT_BUDGET),
            edges: Vec::new(),
            open: BinaryHeap::new(),
            open_best: HashMap::new(),
            closed: Vec::new(),
            closed_best: HashMap::new(),
            next_seq: 0,
        };
        engine.push_open(
            Scored {
                pos: start,
                g: 0.0,
                h: 0.0,
                f: 0.0,
            },
            None,
        );
        Ok(engine)
    }

    /// Set the iteration budget. `None` disables the cap entirely.
    #[must_use]
    pub fn with_budget(mut self, budget: Option<usize>) -> Self {
        self.budget = budget;
        self
    }

    /// The start coordinate.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The end coordinate.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Run the search and return the route from start to end, inclusive.
    ///
    /// The engine is single-use: the first call consumes the search state,
    /// and the instance must not be re-invoked after success or failure.
    ///
    /// The first expansion that touches the end cell is accepted as final,
    /// without comparing it against cheaper in-flight candidates still in
    /// the open set. Inherited behavior; the route is not guaranteed to be
    /// globally optimal.
    ///
    /// # Errors
    ///
    /// [`SearchError::PathNotFound`] if the open set empties or the
    /// iteration budget runs out before the end cell is reached.
    pub fn find_path(&mut self) -> Result<Vec<Point>, SearchError> {
        self.run(None)
    }

    /// Like [`find_path`](AStar::find_path), reporting each select-expand
    /// iteration to `observer`.
    pub fn find_path_with(
        &mut self,
        observer: &mut dyn SearchObserver,
    ) -> Result<Vec<Point>, SearchError> {
        self.run(Some(observer))
    }

    fn run(
        &mut self,
        mut observer: Option<&mut dyn SearchObserver>,
    ) -> Result<Vec<Point>, SearchError> {
        let (start, end) = (self.start, self.end);

        // Expansion excludes the selected cell itself, so a trivial search
        // can never discover its own start; short-circuit to the degenerate
        // route the endpoint-append rule produces.
        if start == end {
            debug!("trivial route, start equals end at {start}");
            return Ok(vec![start, end]);
        }

        let mut iterations = 0usize;
        let mut goal: Option<usize> = None;

        'search: loop {
            if self.budget.is_some_and(|b| iterations >= b) {
                break;
            }
            let Some(entry) = self.open.pop() else {
                break;
            };
            let current = self.edges[entry.edge];

            // Skip heap entries superseded by a later, cheaper insertion
            // for the same coordinate.
            match self.open_best.get(&current.node.pos) {
                Some(slot) if slot.seq == entry.seq => {}
                _ => continue,
            }
            self.open_best.remove(&current.node.pos);
            iterations += 1;

            if let Some(obs) = observer.as_mut() {
                obs.on_iteration(&IterationSnapshot {
                    iteration: iterations,
                    selected: current.node.pos,
                    g: current.node.g,
                    h: current.node.h,
                    f: current.node.f,
                    open_len: self.open_best.len(),
                    closed_len: self.closed.len(),
                });
            }

            for np in current.node.pos.neighbors_8() {
                if !self.grid.in_bounds(np) || !self.grid.is_walkable(np) {
                    continue;
                }
                let Some(step) = self.grid.entry_cost(np) else {
                    continue;
                };
                let g = current.node.g + f64::from(step);
                let h = euclidean(np, end);
                let f = g + h;

                if np == end {
                    // Goal shortcut: the first arrival at the end cell wins.
                    self.closed.push(entry.edge);
                    let gi = self.push_edge(Scored { pos: np, g, h, f }, Some(entry.edge));
                    self.closed.push(gi);
                    goal = Some(gi);
                    break 'search;
                }

                if self.should_prune(np, f) {
                    continue;
                }
                self.push_open(Scored { pos: np, g, h, f }, Some(entry.edge));
            }

            self.finalize(entry.edge);
        }

        let Some(gi) = goal else {
            debug!("no route from {start} to {end} after {iterations} iterations");
            return Err(SearchError::PathNotFound { start, end });
        };

        // Walk back-references from the goal edge; the start and end cells
        // are added explicitly so both endpoints are always present.
        let mut route = vec![end];
        let mut cur = self.edges[gi].parent;
        while let Some(i) = cur {
            let e = self.edges[i];
            if e.node.pos == start {
                break;
            }
            route.push(e.node.pos);
            cur = e.parent;
        }
        route.push(start);
        route.reverse();

        debug!(
            "route from {start} to {end}: {} cells in {iterations} iterations",
            route.len()
        );
        Ok(route)
    }

    /// Whether a candidate for `pos` scoring `f` is provably worse than a
    /// known entry. Only a strictly lower score in the open or closed set
    /// prunes; an equal score gets re-inserted.
    fn should_prune(&self, pos: Point, f: f64) -> bool {
        self.open_best.get(&pos).is_some_and(|s| s.f < f)
            || self.closed_best.get(&pos).is_some_and(|&cf| cf < f)
    }

    fn push_edge(&mut self, node: Scored, parent: Option<usize>) -> usize {
        self.edges.push(Edge { node, parent });
        self.edges.len() - 1
    }

    fn push_open(&mut self, node: Scored, parent: Option<usize>) {
        let idx = self.push_edge(node, parent);
        // An exactly-equal replacement keeps the original insertion order,
        // so the coordinate does not forfeit the earliest-inserted tie-break
        // to equal-f entries that arrived in between.
        let seq = match self.open_best.get(&node.pos) {
            Some(slot) if slot.f == node.f => slot.seq,
            _ => {
                let seq = self.next_seq;
                self.next_seq += 1;
                seq
            }
        };
        // Overwriting the slot lazily invalidates any previous heap entry
        // for this coordinate.
        self.open_best.insert(node.pos, OpenSlot { f: node.f, seq });
        self.open.push(OpenEntry {
            f: node.f,
            seq,
            edge: idx,
        });
    }

    fn finalize(&mut self, edge: usize) {
        let node = self.edges[edge].node;
        self.closed.push(edge);
        let best = self.closed_best.entry(node.pos).or_insert(node.f);
        if node.f < *best {
            *best = node.f;
        }
    }
}
