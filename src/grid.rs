//! The maze grid: cells, tiles, and passability queries.
//!
//! A [`Grid`] is an immutable rectangular map of [`Tile`]s. The engine only
//! borrows it; all mutation for output happens on a derived
//! [`AnnotatedGrid`](crate::annotate::AnnotatedGrid).

use derive_more::Display;
use smallvec::SmallVec;
use thiserror::Error;

pub type Coord = u32;

/// A grid position, identified by value.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
#[display("({row},{col})")]
pub struct Cell {
    pub row: Coord,
    pub col: Coord,
}

impl Cell {
    #[inline(always)]
    pub fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }
}

/// The four orthogonal moves.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Direction {
    #[display("↑")]
    Up, // row--
    #[display("→")]
    Right, // col++
    #[display("↓")]
    Down, // row++
    #[display("←")]
    Left, // col--
}

/// Neighbor expansion order.
///
/// Fixed at Up, Right, Down, Left. This order decides tie-breaking between
/// equally good routes, so changing it changes which path is returned.
pub const EXPANSION_ORDER: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

impl Direction {
    /// Row/column deltas, with `Coord::MAX` standing in for -1 under
    /// wrapping addition.
    #[inline(always)]
    fn deltas(self) -> (Coord, Coord) {
        let prev = Coord::MAX;
        match self {
            Direction::Up => (prev, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, prev),
        }
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Tile {
    #[display(" ")]
    Free,
    #[display("#")]
    Wall,
}

#[derive(Debug, Error)]
pub enum TileParseError {
    #[error("Invalid tile character '{0}' found.")]
    InvalidCharacter(char),
}

impl std::convert::TryFrom<char> for Tile {
    type Error = TileParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '0' => Ok(Tile::Free),
            '1' => Ok(Tile::Wall),
            ch => Err(TileParseError::InvalidCharacter(ch)),
        }
    }
}

/// Malformed maze input.
#[derive(Debug, Error)]
pub enum GridParseError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("Invalid tile at ({row},{col}): {e}")]
    InvalidTile {
        e: TileParseError,
        row: usize,
        col: usize,
    },
    #[error("Grid dimensions {height}x{width} exceed the coordinate range")]
    TooLarge { height: usize, width: usize },
}

/// An immutable rectangular maze.
///
/// All rows have equal length and dimensions are fixed at construction.
/// Queries are pure; searching never mutates the grid, so one grid can be
/// reused across any number of searches.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    height: Coord,
    width: Coord,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Builds a grid from rows of tiles, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridParseError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(GridParseError::EmptyInput);
        }
        let height = rows.len();
        let width = rows[0].len();
        if height >= Coord::MAX as usize || width >= Coord::MAX as usize {
            return Err(GridParseError::TooLarge { height, width });
        }

        let mut tiles = Vec::with_capacity(height * width);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != width {
                return Err(GridParseError::RaggedRow {
                    row,
                    len: line.len(),
                    expected: width,
                });
            }
            tiles.extend(line);
        }

        Ok(Self {
            height: height as Coord,
            width: width as Coord,
            tiles,
        })
    }

    /// (height, width) in cells.
    #[inline(always)]
    pub fn dimensions(&self) -> (Coord, Coord) {
        (self.height, self.width)
    }
    #[inline(always)]
    pub fn height(&self) -> Coord {
        self.height
    }
    #[inline(always)]
    pub fn width(&self) -> Coord {
        self.width
    }

    #[inline(always)]
    pub(crate) fn index(&self, cell: Cell) -> usize {
        debug_assert!(self.in_bounds(cell));
        cell.row as usize * self.width as usize + cell.col as usize
    }

    #[inline(always)]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// The tile at `cell`, which must be in bounds.
    #[inline(always)]
    pub fn tile(&self, cell: Cell) -> Tile {
        self.tiles[self.index(cell)]
    }

    /// Whether `cell` can be stepped on. Out-of-bounds cells are not.
    #[inline(always)]
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.tile(cell) == Tile::Free
    }

    /// The in-bounds cell one step from `cell` in `dir`, if any.
    #[inline(always)]
    pub fn step(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        let (dr, dc) = dir.deltas();
        let stepped = Cell {
            row: cell.row.wrapping_add(dr),
            col: cell.col.wrapping_add(dc),
        };
        self.in_bounds(stepped).then_some(stepped)
    }

    /// In-bounds passable neighbors of `cell`, in [`EXPANSION_ORDER`].
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        let mut v = SmallVec::new();
        for dir in EXPANSION_ORDER {
            if let Some(neighbor) = self.step(cell, dir) {
                if self.is_passable(neighbor) {
                    v.push(neighbor);
                }
            }
        }
        v
    }

    /// The unique free cell in `row`, if there is exactly one.
    ///
    /// Maze files conventionally leave a single opening in the top and
    /// bottom rows to mark the exit and entrance.
    pub fn opening_in_row(&self, row: Coord) -> Option<Cell> {
        if row >= self.height {
            return None;
        }
        let mut opening = None;
        for col in 0..self.width {
            let cell = Cell { row, col };
            if self.tile(cell) == Tile::Free {
                if opening.is_some() {
                    return None;
                }
                opening = Some(cell);
            }
        }
        opening
    }

    /// A random free cell, or `None` if none was found within a bounded
    /// number of tries.
    pub fn random_free_cell<R: rand::Rng>(&self, r: &mut R) -> Option<Cell> {
        const MAX_TRIES: usize = 1_000;

        for _tries in 0..MAX_TRIES {
            let cell = Cell {
                row: r.random_range(0..self.height),
                col: r.random_range(0..self.width),
            };
            if self.tile(cell) == Tile::Free {
                return Some(cell);
            }
        }
        None
    }

    /// A random grid where each cell is a wall with probability
    /// `wall_density`.
    pub fn random<R: rand::Rng>(
        r: &mut R,
        height: Coord,
        width: Coord,
        wall_density: f64,
    ) -> Self {
        debug_assert!(height > 0 && width > 0);
        let mut tiles = Vec::with_capacity(height as usize * width as usize);
        for _ in 0..height as usize * width as usize {
            tiles.push(if r.random::<f64>() < wall_density {
                Tile::Wall
            } else {
                Tile::Free
            });
        }
        Self {
            height,
            width,
            tiles,
        }
    }
}

impl std::convert::TryFrom<&str> for Grid {
    type Error = GridParseError;

    /// Parses the two observed maze formats: whitespace-separated digits
    /// (`0 1 0`) and undelimited digit runs (`010`).
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut rows = Vec::new();

        for (row, line) in s.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let chars: Vec<char> = if line.contains(char::is_whitespace) {
                line.split_whitespace()
                    .flat_map(|token| token.chars())
                    .collect()
            } else {
                line.trim().chars().collect()
            };

            let mut tiles = Vec::with_capacity(chars.len());
            for (col, ch) in chars.into_iter().enumerate() {
                let tile =
                    Tile::try_from(ch).map_err(|e| GridParseError::InvalidTile { e, row, col })?;
                tiles.push(tile);
            }
            rows.push(tiles);
        }

        Self::from_rows(rows)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                write!(f, "{}", self.tile(Cell { row, col }))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Grid({}x{})", self.height, self.width)
    }
}
