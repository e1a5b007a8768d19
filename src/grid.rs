//! Sparse letter grid.
//!
//! This module defines the board the solver writes on:
//! - `Orientation`: the axis a word runs along.
//! - `Placement`: a word anchored at an origin cell with an orientation.
//! - `Grid`: an unbounded map from integer coordinates to letters, with
//!   neighbor-density queries and text rendering.
use std::collections::BTreeMap;
use std::fmt;

use crate::errors::GridError;

/// A cell coordinate `(x, y)`. `x` grows to the right, `y` grows downwards.
pub type Coord = (i32, i32);

/// Offsets of the eight cells surrounding a coordinate.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The axis a word is written along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left to right, advancing `x`.
    Horizontal,
    /// Top to bottom, advancing `y`.
    Vertical,
}

impl Orientation {
    /// Placement order used by the solver: horizontal first.
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// Unit step along this axis.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }

    /// The coordinate `n` steps from `from` along this axis. `n` may be negative.
    pub fn step(&self, from: Coord, n: i32) -> Coord {
        let (dx, dy) = self.delta();
        (from.0 + dx * n, from.1 + dy * n)
    }
}

/// A word written cell by cell from `origin` along `orientation`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub origin: Coord,
    pub orientation: Orientation,
    pub word: String,
}

impl Placement {
    pub fn new(origin: Coord, orientation: Orientation, word: &str) -> Self {
        Placement {
            origin,
            orientation,
            word: word.to_string(),
        }
    }

    /// Each target cell paired with the letter written there.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.word
            .chars()
            .enumerate()
            .map(move |(i, letter)| (self.orientation.step(self.origin, i as i32), letter))
    }
}

/// Inclusive bounding box of the occupied cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

/// Unbounded 2D map of placed letters. Absent coordinates are unoccupied.
///
/// `Clone` produces an independent copy; the solver relies on this to give
/// each search branch its own grid.
///
/// # Examples
/// ```
/// use wordgrid_solver::grid::Grid;
/// let mut grid = Grid::new();
/// grid.set(-2, 5, 'q');
/// assert_eq!(grid.get(-2, 5), Some('q'));
/// assert_eq!(grid.get(0, 0), None);
/// assert_eq!(grid.occupied_neighbor_count(-1, 4), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    cells: BTreeMap<Coord, char>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, x: i32, y: i32, letter: char) {
        self.cells.insert((x, y), letter);
    }

    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.cells.get(&(x, y)).copied()
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.cells.contains_key(&(x, y))
    }

    /// Number of occupied cells among the eight around `(x, y)`.
    pub fn occupied_neighbor_count(&self, x: i32, y: i32) -> usize {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| self.is_occupied(x + dx, y + dy))
            .count()
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Occupied cells ordered by `x`, then `y`.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.cells.iter().map(|(&coord, &letter)| (coord, letter))
    }

    /// Bounding box of occupied cells, or `None` for an empty grid.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut iter = self.cells.keys();
        let &(x0, y0) = iter.next()?;
        let mut bounds = Bounds {
            min_x: x0,
            max_x: x0,
            min_y: y0,
            max_y: y0,
        };
        for &(x, y) in iter {
            bounds.min_x = bounds.min_x.min(x);
            bounds.max_x = bounds.max_x.max(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_y = bounds.max_y.max(y);
        }
        Some(bounds)
    }

    /// Writes a placement onto the grid.
    ///
    /// Cells that already hold the same letter are left alone (that is how a
    /// crossing word shares its anchor). Returns the cells that were newly
    /// written. A cell holding a different letter aborts the write with
    /// [`GridError::Collision`] and leaves the grid unchanged.
    pub fn place_word(&mut self, placement: &Placement) -> Result<Vec<(Coord, char)>, GridError> {
        let mut written = Vec::with_capacity(placement.word.len());
        for ((x, y), letter) in placement.cells() {
            match self.get(x, y) {
                Some(existing) if existing == letter => {}
                Some(existing) => {
                    return Err(GridError::Collision {
                        x,
                        y,
                        existing,
                        attempted: letter,
                    })
                }
                None => written.push(((x, y), letter)),
            }
        }
        for &((x, y), letter) in &written {
            self.set(x, y, letter);
        }
        Ok(written)
    }
}

impl fmt::Display for Grid {
    /// Renders the bounding box row by row: letters separated by single spaces,
    /// unoccupied cells as a blank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bounds = match self.bounds() {
            Some(bounds) => bounds,
            None => return Ok(()),
        };
        for y in bounds.min_y..=bounds.max_y {
            let row: Vec<String> = (bounds.min_x..=bounds.max_x)
                .map(|x| self.get(x, y).unwrap_or(' ').to_string())
                .collect();
            write!(f, "{}", row.join(" "))?;
            if y < bounds.max_y {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
