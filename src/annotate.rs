//! Post-hoc projection of a search onto a grid-shaped output.
//!
//! The engine never mutates the [`Grid`]; this module copies its shape and
//! layers the explored set and the path on top, for rendering.

use derive_more::Display;
use rustc_hash::FxHashSet;

use crate::grid::{Cell, Coord, Grid, Tile};
use crate::path::Path;

/// What a cell ended up as, after a search.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Mark {
    #[display("#")]
    Wall,
    #[display(" ")]
    Free,
    /// Expanded during the search but not on the returned path.
    #[display(".")]
    Explored,
    /// On the returned path. Takes precedence over [`Mark::Explored`].
    #[display("*")]
    PathStep,
}

/// A derived, output-only classification of every cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotatedGrid {
    height: Coord,
    width: Coord,
    marks: Vec<Mark>,
}

impl AnnotatedGrid {
    /// Classifies every cell of `grid` as wall, free, explored, or path.
    ///
    /// Cells on the path are marked as path even when they were also
    /// explored. Pure projection: no input is modified.
    pub fn project(grid: &Grid, explored: &FxHashSet<Cell>, path: Option<&Path>) -> Self {
        let on_path: FxHashSet<Cell> = match path {
            Some(path) => path.iter().copied().collect(),
            None => FxHashSet::default(),
        };

        let (height, width) = grid.dimensions();
        let mut marks = Vec::with_capacity(height as usize * width as usize);
        for row in 0..height {
            for col in 0..width {
                let cell = Cell { row, col };
                let mark = match grid.tile(cell) {
                    Tile::Wall => Mark::Wall,
                    Tile::Free if on_path.contains(&cell) => Mark::PathStep,
                    Tile::Free if explored.contains(&cell) => Mark::Explored,
                    Tile::Free => Mark::Free,
                };
                marks.push(mark);
            }
        }

        Self {
            height,
            width,
            marks,
        }
    }

    #[inline(always)]
    pub fn dimensions(&self) -> (Coord, Coord) {
        (self.height, self.width)
    }

    /// The mark at `cell`, which must be in bounds.
    #[inline(always)]
    pub fn mark(&self, cell: Cell) -> Mark {
        debug_assert!(cell.row < self.height && cell.col < self.width);
        self.marks[cell.row as usize * self.width as usize + cell.col as usize]
    }
}

impl std::fmt::Display for AnnotatedGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                write!(f, "{}", self.mark(Cell { row, col }))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    use crate::frontier::Strategy;
    use crate::search::search;

    #[test]
    fn path_wins_over_explored() {
        let grid = Grid::try_from("0 0 0\n").unwrap();
        let (start, goal) = (Cell::new(0, 0), Cell::new(0, 2));

        let report = search(&grid, start, goal, Strategy::BreadthFirst).unwrap();
        let annotated = AnnotatedGrid::project(&grid, &report.explored, report.path.as_ref());

        // Every cell is both explored and on the path; path wins.
        for col in 0..3 {
            assert_eq!(annotated.mark(Cell::new(0, col)), Mark::PathStep);
        }
    }

    #[test]
    fn classification_covers_all_four_marks() {
        let grid = Grid::try_from(indoc! {"
            0 1 0
            0 1 0
            0 0 0
            0 1 0
        "})
        .unwrap();
        let (start, goal) = (Cell::new(0, 0), Cell::new(2, 2));

        let report = search(&grid, start, goal, Strategy::BreadthFirst).unwrap();
        let annotated = AnnotatedGrid::project(&grid, &report.explored, report.path.as_ref());

        assert_eq!(annotated.mark(Cell::new(0, 1)), Mark::Wall);
        assert_eq!(annotated.mark(Cell::new(0, 0)), Mark::PathStep);
        assert_eq!(annotated.mark(Cell::new(2, 2)), Mark::PathStep);
        // The dead-end below the path is explored but not on it; the
        // right column above the goal is never reached at all.
        assert_eq!(annotated.mark(Cell::new(3, 0)), Mark::Explored);
        assert_eq!(annotated.mark(Cell::new(0, 2)), Mark::Free);
    }

    #[test]
    fn no_path_renders_exploration_only() {
        let grid = Grid::try_from(indoc! {"
            0 1 0
            0 1 0
        "})
        .unwrap();
        let (start, goal) = (Cell::new(0, 0), Cell::new(0, 2));

        let report = search(&grid, start, goal, Strategy::BreadthFirst).unwrap();
        assert!(report.path.is_none());

        let annotated = AnnotatedGrid::project(&grid, &report.explored, report.path.as_ref());
        let rendered = annotated.to_string();
        assert_eq!(rendered, ".# \n.# \n");
    }

    #[test]
    fn display_uses_the_symbol_convention() {
        let grid = Grid::try_from("0 0\n").unwrap();
        let report = search(&grid, Cell::new(0, 0), Cell::new(0, 1), Strategy::BreadthFirst)
            .unwrap();
        let annotated = AnnotatedGrid::project(&grid, &report.explored, report.path.as_ref());
        assert_eq!(annotated.to_string(), "**\n");
    }
}
