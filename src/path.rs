//! Paths and their reconstruction from recorded predecessors.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::grid::Cell;

const MAX_ELEMENTS_DISPLAYED: usize = 20;

/// An ordered route from start to goal, both inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    #[inline(always)]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    #[inline(always)]
    pub fn goal(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Number of cells, endpoints included.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of steps taken, one less than the cell count.
    #[inline(always)]
    pub fn steps(&self) -> usize {
        self.cells.len() - 1
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Path({} steps:", self.steps())?;
        for cell in self.cells.iter().take(MAX_ELEMENTS_DISPLAYED) {
            write!(f, " {cell}")?;
        }
        if self.cells.len() > MAX_ELEMENTS_DISPLAYED {
            write!(f, " …{}", self.goal())?;
        }
        write!(f, ")")
    }
}

/// A broken predecessor chain.
///
/// This means the engine recorded predecessors inconsistently. It cannot
/// happen after a successful search; the check exists to fail loudly
/// instead of returning a garbage path.
#[derive(Debug, Error)]
#[error("Predecessor chain from {cell} does not reach the start")]
pub struct DisconnectedPredecessorChain {
    pub cell: Cell,
}

/// Walks predecessor links from `goal` back to `start` and reverses.
///
/// `start` must map to the sentinel `None`; every other reached cell must
/// have a recorded predecessor.
pub fn reconstruct(
    predecessor: &FxHashMap<Cell, Option<Cell>>,
    start: Cell,
    goal: Cell,
) -> Result<Path, DisconnectedPredecessorChain> {
    let mut cells = vec![goal];

    let mut current = goal;
    loop {
        match predecessor.get(&current) {
            Some(Some(parent)) => {
                debug_assert!(*parent != current);
                cells.push(*parent);
                current = *parent;
            }
            // Reached a root. Only the start is recorded without a parent.
            Some(None) if current == start => break,
            Some(None) | None => return Err(DisconnectedPredecessorChain { cell: current }),
        }
    }

    cells.reverse();
    Ok(Path { cells })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(links: &[(Cell, Option<Cell>)]) -> FxHashMap<Cell, Option<Cell>> {
        links.iter().copied().collect()
    }

    #[test]
    fn walks_back_and_reverses() {
        let a = Cell::new(2, 0);
        let b = Cell::new(1, 0);
        let c = Cell::new(0, 0);
        let predecessor = chain(&[(a, None), (b, Some(a)), (c, Some(b))]);

        let path = reconstruct(&predecessor, a, c).unwrap();
        assert_eq!(path.cells(), &[a, b, c]);
        assert_eq!(path.start(), a);
        assert_eq!(path.goal(), c);
        assert_eq!(path.len(), 3);
        assert_eq!(path.steps(), 2);
    }

    #[test]
    fn single_cell_path() {
        let a = Cell::new(0, 0);
        let predecessor = chain(&[(a, None)]);

        let path = reconstruct(&predecessor, a, a).unwrap();
        assert_eq!(path.cells(), &[a]);
        assert_eq!(path.steps(), 0);
    }

    #[test]
    fn missing_goal_is_detected() {
        let a = Cell::new(0, 0);
        let predecessor = chain(&[(a, None)]);

        let err = reconstruct(&predecessor, a, Cell::new(5, 5)).unwrap_err();
        assert_eq!(err.cell, Cell::new(5, 5));
    }

    #[test]
    fn chain_rooted_elsewhere_is_detected() {
        let a = Cell::new(0, 0);
        let b = Cell::new(0, 1);
        // b's chain roots at b, not at the claimed start a.
        let predecessor = chain(&[(b, None)]);

        assert!(reconstruct(&predecessor, a, b).is_err());
    }
}
