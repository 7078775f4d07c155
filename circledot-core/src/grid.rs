//! Grid geometry with row-parity offset coordinates
//!
//! The board is stored as a square array, but rows are staggered so that
//! every cell touches six others. Even rows lean left, odd rows lean right.

use serde::{Deserialize, Serialize};

/// Number of neighbours of every cell
pub const NEIGHBOR_COUNT: usize = 6;

/// Row/column coordinates (signed so off-board neighbours are representable)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check if this coordinate lies on a board of the given size
    pub fn in_bounds(&self, size: usize) -> bool {
        let n = size as i32;
        (0..n).contains(&self.row) && (0..n).contains(&self.col)
    }

    /// Check if this coordinate lies on the outer ring of the board
    pub fn is_border(&self, size: usize) -> bool {
        let last = size as i32 - 1;
        self.in_bounds(size)
            && (self.row == 0 || self.row == last || self.col == 0 || self.col == last)
    }

    /// The six neighbours, in the order the path search expands them
    pub fn neighbors(&self) -> [Coord; NEIGHBOR_COUNT] {
        let offsets = if self.row % 2 == 0 {
            &EVEN_ROW_OFFSETS
        } else {
            &ODD_ROW_OFFSETS
        };
        offsets.map(|(dr, dc)| Coord::new(self.row + dr, self.col + dc))
    }

    /// Check if `other` is one of the six neighbours
    pub fn is_adjacent(&self, other: Coord) -> bool {
        self.neighbors().contains(&other)
    }

    /// Flat index into a row-major array (caller guarantees bounds)
    pub(crate) fn index(&self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Neighbour offsets (drow, dcol) for cells on even rows
/// Order: E, W, NE, NW, SE, SW
pub const EVEN_ROW_OFFSETS: [(i32, i32); NEIGHBOR_COUNT] = [
    (0, 1),
    (0, -1),
    (-1, 0),
    (-1, -1),
    (1, 0),
    (1, -1),
];

/// Neighbour offsets (drow, dcol) for cells on odd rows
pub const ODD_ROW_OFFSETS: [(i32, i32); NEIGHBOR_COUNT] = [
    (0, 1),
    (0, -1),
    (-1, 0),
    (-1, 1),
    (1, 0),
    (1, 1),
];

/// Central cells a token may start on
///
/// A 2x2 block for even sizes and a 3x3 block for odd sizes, clipped to the board.
pub fn center_candidates(size: usize) -> Vec<Coord> {
    let half = (size / 2) as i32;
    let span: &[i32] = if size % 2 == 0 { &[-1, 0] } else { &[-1, 0, 1] };

    let mut cells = Vec::with_capacity(span.len() * span.len());
    for &dr in span {
        for &dc in span {
            let c = Coord::new(half + dr, half + dc);
            if c.in_bounds(size) {
                cells.push(c);
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Coord::new(0, 0).in_bounds(5));
        assert!(Coord::new(4, 4).in_bounds(5));
        assert!(!Coord::new(5, 0).in_bounds(5));
        assert!(!Coord::new(-1, 2).in_bounds(5));
    }

    #[test]
    fn test_border() {
        assert!(Coord::new(0, 2).is_border(5));
        assert!(Coord::new(4, 2).is_border(5));
        assert!(Coord::new(2, 0).is_border(5));
        assert!(Coord::new(2, 4).is_border(5));
        assert!(Coord::new(0, 0).is_border(5)); // corner
        assert!(!Coord::new(2, 2).is_border(5));
        assert!(!Coord::new(-1, 2).is_border(5)); // off-board
    }

    #[test]
    fn test_even_row_neighbors() {
        let n = Coord::new(2, 2).neighbors();
        assert_eq!(
            n,
            [
                Coord::new(2, 3),
                Coord::new(2, 1),
                Coord::new(1, 2),
                Coord::new(1, 1),
                Coord::new(3, 2),
                Coord::new(3, 1),
            ]
        );
    }

    #[test]
    fn test_odd_row_neighbors() {
        let n = Coord::new(3, 2).neighbors();
        assert_eq!(
            n,
            [
                Coord::new(3, 3),
                Coord::new(3, 1),
                Coord::new(2, 2),
                Coord::new(2, 3),
                Coord::new(4, 2),
                Coord::new(4, 3),
            ]
        );
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        for row in 0..8 {
            for col in 0..8 {
                let c = Coord::new(row, col);
                for n in c.neighbors() {
                    assert!(n.is_adjacent(c), "{} -> {} not symmetric", c, n);
                }
            }
        }
    }

    #[test]
    fn test_center_candidates() {
        let even = center_candidates(6);
        assert_eq!(even.len(), 4);
        assert!(even.contains(&Coord::new(2, 2)));
        assert!(even.contains(&Coord::new(3, 3)));

        let odd = center_candidates(9);
        assert_eq!(odd.len(), 9);
        assert!(odd.contains(&Coord::new(3, 3)));
        assert!(odd.contains(&Coord::new(5, 5)));

        // Clipped on tiny boards
        assert_eq!(center_candidates(1), vec![Coord::new(0, 0)]);
    }
}
