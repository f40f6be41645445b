//! The traversal engine.
//!
//! One loop drives all three algorithms; the [`Strategy`] only decides the
//! frontier ordering and whether costs are tracked. Each call owns its
//! search state exclusively and the grid is only borrowed, so searches are
//! naturally reentrant and repeatable.

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::frontier::Frontier;
use crate::frontier::Strategy;
use crate::grid::{Cell, Grid};
use crate::path;
use crate::path::Path;

/// Path cost in unit steps.
pub type Cost = u32;

/// Per-call tuning knobs.
#[derive(Copy, Clone, Debug, Default)]
pub struct SearchOptions {
    /// Upper bound on cell expansions. When the bound is hit the search
    /// fails with [`SearchError::StepLimitExceeded`] instead of running
    /// unboundedly. `None` means no bound.
    pub max_expansions: Option<usize>,
}

#[derive(Copy, Clone, Debug, derive_more::Display, PartialEq, Eq)]
pub enum Endpoint {
    #[display("Start")]
    Start,
    #[display("Goal")]
    Goal,
}

#[derive(Debug, Error)]
pub enum SearchError {
    /// The start or goal is out of bounds or on a wall. Fatal to the call.
    #[error("{role} cell {cell} is out of bounds or a wall")]
    InvalidEndpoint { role: Endpoint, cell: Cell },
    /// The caller-supplied expansion budget ran out.
    #[error("Search aborted after {limit} expansions")]
    StepLimitExceeded { limit: usize },
    /// Predecessor bookkeeping broke. An engine bug, not a caller error.
    #[error(transparent)]
    DisconnectedPredecessorChain(#[from] path::DisconnectedPredecessorChain),
}

/// The outcome of a completed search.
///
/// `path: None` is the no-route outcome. It is a normal result, not an
/// error: the frontier exhausted without reaching the goal, and `explored`
/// holds everything that was reachable from the start.
#[derive(Clone, Debug)]
pub struct SearchReport {
    /// The start→goal route, or `None` when no route exists.
    pub path: Option<Path>,
    /// Every cell that was expanded, goal included when it was reached.
    pub explored: FxHashSet<Cell>,
    /// How many cells had their neighbors examined.
    pub expansions: usize,
}

impl SearchReport {
    #[inline(always)]
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// Ephemeral per-call bookkeeping, discarded on completion.
struct SearchState {
    frontier: Frontier,
    /// Cells already expanded. Doubles as the reported explored set.
    expanded: FxHashSet<Cell>,
    /// How each enqueued cell was reached; the start maps to `None`.
    ///
    /// For FIFO/LIFO an entry is never overwritten (first discovery wins,
    /// which is what makes the BFS predecessor shortest). For ranked
    /// search an entry is replaced only together with a strictly better
    /// cost.
    predecessor: FxHashMap<Cell, Option<Cell>>,
    /// Best known g-cost per cell. Ranked search only.
    cost_so_far: FxHashMap<Cell, Cost>,
}

impl SearchState {
    fn new(strategy: Strategy) -> Self {
        Self {
            frontier: Frontier::new(strategy),
            expanded: FxHashSet::default(),
            predecessor: FxHashMap::default(),
            cost_so_far: FxHashMap::default(),
        }
    }
}

/// Searches `grid` for a route from `start` to `goal` with no expansion
/// bound. See [`search_with`].
pub fn search(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    strategy: Strategy,
) -> Result<SearchReport, SearchError> {
    search_with(grid, start, goal, strategy, SearchOptions::default())
}

/// Searches `grid` for a route from `start` to `goal`.
///
/// Guarantees on success:
/// - [`Strategy::BreadthFirst`] returns a shortest path by edge count.
/// - [`Strategy::BestFirst`] returns a shortest path by unit-step cost
///   (its heuristics are admissible).
/// - [`Strategy::DepthFirst`] returns *a* path; it may be arbitrarily
///   longer than the shortest one.
///
/// Results are deterministic: the neighbor expansion order is fixed and
/// ranked ties break by insertion order, so identical inputs yield
/// identical paths and explored sets.
pub fn search_with(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    strategy: Strategy,
    options: SearchOptions,
) -> Result<SearchReport, SearchError> {
    for (role, cell) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        if !grid.is_passable(cell) {
            return Err(SearchError::InvalidEndpoint { role, cell });
        }
    }

    let heuristic = match strategy {
        Strategy::BestFirst(h) => Some(h),
        Strategy::BreadthFirst | Strategy::DepthFirst => None,
    };

    let mut state = SearchState::new(strategy);
    state.predecessor.insert(start, None);
    match heuristic {
        Some(h) => {
            state.cost_so_far.insert(start, 0);
            state.frontier.push(start, Some((h.estimate(start, goal), 0)));
        }
        None => state.frontier.push(start, None),
    }

    let mut expansions = 0usize;

    while let Some(popped) = state.frontier.pop() {
        let cell = popped.cell;

        // A ranked frontier may hold several entries for one cell; pushes
        // at different priorities are expected. An entry is stale once a
        // cheaper cost was recorded after it was pushed, and expanding it
        // would corrupt the explored set.
        if let Some(g) = popped.g_at_push {
            if state.cost_so_far.get(&cell).is_some_and(|&best| g > best) {
                trace!("Skipping stale entry for {cell} (g={g})");
                continue;
            }
        }
        debug_assert!(
            !state.expanded.contains(&cell),
            "Expanded {cell} twice; stale-entry detection is broken"
        );

        if cell == goal {
            state.expanded.insert(cell);
            let path = path::reconstruct(&state.predecessor, start, goal)?;
            debug!(
                "{strategy}: reached {goal} in {} steps after {expansions} expansions",
                path.steps()
            );
            return Ok(SearchReport {
                path: Some(path),
                explored: state.expanded,
                expansions,
            });
        }

        if let Some(limit) = options.max_expansions {
            if expansions >= limit {
                debug!("{strategy}: expansion budget of {limit} exhausted");
                return Err(SearchError::StepLimitExceeded { limit });
            }
        }
        expansions += 1;
        state.expanded.insert(cell);
        trace!("Expanding {cell}");

        for neighbor in grid.neighbors(cell) {
            match heuristic {
                None => {
                    // Dedupe at enqueue time; the first discovery records
                    // the predecessor and later routes never replace it.
                    if !state.predecessor.contains_key(&neighbor) {
                        state.predecessor.insert(neighbor, Some(cell));
                        state.frontier.push(neighbor, None);
                    }
                }
                Some(h) => {
                    let tentative = state.cost_so_far[&cell] + 1;
                    let improves = state
                        .cost_so_far
                        .get(&neighbor)
                        .is_none_or(|&best| tentative < best);
                    if improves {
                        // Relaxation: cost and predecessor move together.
                        state.cost_so_far.insert(neighbor, tentative);
                        state.predecessor.insert(neighbor, Some(cell));
                        let f = tentative + h.estimate(neighbor, goal);
                        state.frontier.push(neighbor, Some((f, tentative)));
                    }
                }
            }
        }
    }

    debug!("{strategy}: frontier exhausted after {expansions} expansions, no route");
    Ok(SearchReport {
        path: None,
        explored: state.expanded,
        expansions,
    })
}
