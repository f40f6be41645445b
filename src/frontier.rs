//! Frontier strategies: the one part where the three algorithms differ.
//!
//! The traversal engine is uniform; picking FIFO, LIFO, or a ranked heap as
//! the pending-cell store is what turns it into breadth-first, depth-first,
//! or best-first search.

use std::collections::BinaryHeap;
use std::collections::VecDeque;

use derive_more::Display;

use crate::grid::Cell;
use crate::heuristic::Heuristic;
use crate::search::Cost;

/// Which frontier drives the search.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Strategy {
    /// FIFO frontier. Finds a shortest path by edge count.
    #[display("bfs")]
    BreadthFirst,
    /// LIFO frontier. Finds *a* path with no optimality guarantee; useful
    /// for reachability-style exploration.
    #[display("dfs")]
    DepthFirst,
    /// Ranked frontier ordered by `g + h`. Finds a shortest path as long
    /// as the heuristic is admissible.
    #[display("astar/{_0}")]
    BestFirst(Heuristic),
}

/// The ranking tuple for the best-first frontier.
///
/// We prefer lower f-values and break ties by insertion order, which keeps
/// equally-good pops deterministic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Rank {
    f: Cost,
    seq: u64,
}

#[derive(Copy, Clone, Debug)]
struct HeapEntry {
    rank: Rank,
    cell: Cell,
    /// The g-cost recorded when this entry was pushed. A later, cheaper
    /// route makes the entry stale; the engine detects that on pop.
    g: Cost,
}

impl PartialEq for HeapEntry {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}
impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for HeapEntry {
    /// Reversed so the max-heap `BinaryHeap` pops the lowest rank first.
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.rank.cmp(&self.rank)
    }
}

/// A popped frontier entry.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Popped {
    pub cell: Cell,
    /// For ranked frontiers, the g-cost the entry was pushed with.
    pub g_at_push: Option<Cost>,
}

/// The pending-cell store, in one of the three orderings.
#[derive(Debug)]
pub(crate) enum Frontier {
    Fifo(VecDeque<Cell>),
    Lifo(Vec<Cell>),
    Ranked { heap: BinaryHeap<HeapEntry>, seq: u64 },
}

impl Frontier {
    pub(crate) fn new(strategy: Strategy) -> Self {
        match strategy {
            Strategy::BreadthFirst => Frontier::Fifo(VecDeque::new()),
            Strategy::DepthFirst => Frontier::Lifo(Vec::new()),
            Strategy::BestFirst(_) => Frontier::Ranked {
                heap: BinaryHeap::new(),
                seq: 0,
            },
        }
    }

    /// Adds a cell. `priority` is `(f, g)` and only meaningful for the
    /// ranked frontier; FIFO/LIFO ignore it.
    pub(crate) fn push(&mut self, cell: Cell, priority: Option<(Cost, Cost)>) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(cell),
            Frontier::Lifo(stack) => stack.push(cell),
            Frontier::Ranked { heap, seq } => {
                let (f, g) = priority.expect("ranked frontier needs a priority");
                heap.push(HeapEntry {
                    rank: Rank { f, seq: *seq },
                    cell,
                    g,
                });
                *seq += 1;
            }
        }
    }

    pub(crate) fn pop(&mut self) -> Option<Popped> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front().map(|cell| Popped {
                cell,
                g_at_push: None,
            }),
            Frontier::Lifo(stack) => stack.pop().map(|cell| Popped {
                cell,
                g_at_push: None,
            }),
            Frontier::Ranked { heap, .. } => heap.pop().map(|entry| Popped {
                cell: entry.cell,
                g_at_push: Some(entry.g),
            }),
        }
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            Frontier::Fifo(queue) => queue.is_empty(),
            Frontier::Lifo(stack) => stack.is_empty(),
            Frontier::Ranked { heap, .. } => heap.is_empty(),
        }
    }
}
