use crate::grid::{Coord, Grid, Orientation};

/// Number of cells surrounding any coordinate.
pub const NEIGHBORHOOD: usize = 8;

/// An occupied cell considered as the crossing point for the next word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnchorPoint {
    pub x: i32,
    pub y: i32,
    pub letter: char,
    /// Occupied cells among the eight neighbors.
    pub occupied_neighbors: usize,
}

impl AnchorPoint {
    /// How much free space surrounds the anchor: `8 - occupied_neighbors`.
    pub fn openness(&self) -> usize {
        NEIGHBORHOOD - self.occupied_neighbors
    }

    pub fn coord(&self) -> Coord {
        (self.x, self.y)
    }
}

/// Ranks every occupied cell as a potential anchor.
///
/// Cells with the fewest occupied neighbors come first, since a crossing word
/// has the most room there. Ties keep grid order (by `x`, then `y`).
///
/// # Arguments
/// * `grid`: The grid to analyze.
///
/// # Returns
/// One `AnchorPoint` per occupied cell, least crowded first. Empty for an
/// empty grid.
pub fn select_anchors(grid: &Grid) -> Vec<AnchorPoint> {
    let mut anchors: Vec<AnchorPoint> = grid
        .cells()
        .map(|((x, y), letter)| AnchorPoint {
            x,
            y,
            letter,
            occupied_neighbors: grid.occupied_neighbor_count(x, y),
        })
        .collect();
    anchors.sort_by_key(|a| a.occupied_neighbors);
    anchors
}

/// Checks whether `word` can be written through the occupied cell `(x, y)`.
///
/// The anchor letter's first occurrence in `word` splits it into a prefix and
/// a suffix. Along `orientation`, the `prefix.len() + 1` cells before the
/// anchor and the `suffix.len() + 1` cells after it must all be unoccupied;
/// the extra cell on each side keeps the new word from running into another
/// one end to end.
///
/// # Returns
/// * `Some(origin)`: the coordinate where the word's first letter lands.
/// * `None`: the anchor is empty, its letter is not in `word`, or a checked
///   cell is occupied.
///
/// # Examples
/// ```
/// use wordgrid_solver::grid::{Grid, Orientation};
/// use wordgrid_solver::heuristics::can_place;
///
/// let mut grid = Grid::new();
/// for (i, c) in "cat".chars().enumerate() {
///     grid.set(i as i32, 0, c);
/// }
/// assert_eq!(can_place(&grid, 1, 0, "art", Orientation::Vertical), Some((1, 0)));
/// assert_eq!(can_place(&grid, 1, 0, "art", Orientation::Horizontal), None);
/// ```
pub fn can_place(grid: &Grid, x: i32, y: i32, word: &str, orientation: Orientation) -> Option<Coord> {
    let anchor_letter = grid.get(x, y)?;
    let letters: Vec<char> = word.chars().collect();
    let index = letters.iter().position(|&c| c == anchor_letter)?;

    let prefix_len = index as i32;
    let suffix_len = (letters.len() - index - 1) as i32;
    let anchor = (x, y);

    for i in 1..=prefix_len + 1 {
        let (cx, cy) = orientation.step(anchor, -i);
        if grid.is_occupied(cx, cy) {
            return None;
        }
    }
    for i in 1..=suffix_len + 1 {
        let (cx, cy) = orientation.step(anchor, i);
        if grid.is_occupied(cx, cy) {
            return None;
        }
    }

    Some(orientation.step(anchor, -prefix_len))
}
