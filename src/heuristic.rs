//! Admissible goal-distance estimates for best-first search.

use derive_more::Display;

use crate::grid::Cell;
use crate::search::Cost;

/// A cost-to-go estimate.
///
/// Both variants are admissible on a 4-connected unit-cost grid: they never
/// exceed the true remaining step count, which A* needs for optimal paths.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// `|Δrow| + |Δcol|`. Exact on an obstacle-free grid.
    #[default]
    #[display("manhattan")]
    Manhattan,
    /// `⌊√(Δrow² + Δcol²)⌋`. Always ≤ Manhattan, so also admissible;
    /// flooring keeps the estimate integral without overestimating.
    #[display("euclidean")]
    Euclidean,
}

impl Heuristic {
    #[inline(always)]
    pub fn estimate(&self, from: Cell, to: Cell) -> Cost {
        let dr = from.row.abs_diff(to.row);
        let dc = from.col.abs_diff(to.col);

        match self {
            Heuristic::Manhattan => dr + dc,
            Heuristic::Euclidean => {
                let squared = dr as u64 * dr as u64 + dc as u64 * dc as u64;
                squared.isqrt() as Cost
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        let h = Heuristic::Manhattan;
        assert_eq!(h.estimate(Cell::new(0, 0), Cell::new(0, 0)), 0);
        assert_eq!(h.estimate(Cell::new(9, 0), Cell::new(0, 9)), 18);
        assert_eq!(h.estimate(Cell::new(2, 7), Cell::new(5, 3)), 7);
    }

    #[test]
    fn euclidean_distance_floors() {
        let h = Heuristic::Euclidean;
        assert_eq!(h.estimate(Cell::new(0, 0), Cell::new(3, 4)), 5);
        // √2 floors to 1.
        assert_eq!(h.estimate(Cell::new(0, 0), Cell::new(1, 1)), 1);
        assert_eq!(h.estimate(Cell::new(4, 4), Cell::new(4, 4)), 0);
    }

    #[test]
    fn euclidean_never_exceeds_manhattan() {
        for (a, b) in [
            (Cell::new(0, 0), Cell::new(9, 9)),
            (Cell::new(3, 1), Cell::new(0, 7)),
            (Cell::new(5, 5), Cell::new(5, 0)),
        ] {
            assert!(
                Heuristic::Euclidean.estimate(a, b) <= Heuristic::Manhattan.estimate(a, b),
                "euclidean must not exceed manhattan between {a} and {b}"
            );
        }
    }
}
