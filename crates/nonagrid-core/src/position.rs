//! Board coordinates.

use std::fmt::{self, Display};

use crate::CellSet;

/// A board position, addressed by row and column (both 0-8).
///
/// Coordinates are fixed at construction. The containing 3×3 block and the
/// "sees" relation are derived from the coordinates on demand; no adjacency
/// is stored anywhere.
///
/// # Examples
///
/// ```
/// use nonagrid_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.block(), 5);
/// assert!(pos.sees(Position::new(4, 0))); // same row
/// assert!(pos.sees(Position::new(3, 8))); // same block
/// assert!(!pos.sees(Position::new(0, 0)));
/// assert_eq!(pos.to_string(), "r5c8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if either index is 9 or more.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Creates a position from a row-major board index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or more.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 81);
        Self {
            row: index / 9,
            col: index % 9,
        }
    }

    /// Creates the `i`-th position (0-8, row-major) of the given 3×3 block.
    ///
    /// # Panics
    ///
    /// Panics if either argument is 9 or more.
    #[must_use]
    pub const fn in_block(block: u8, i: u8) -> Self {
        assert!(block < 9 && i < 9);
        Self {
            row: block / 3 * 3 + i / 3,
            col: block % 3 * 3 + i % 3,
        }
    }

    /// Row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Index of the containing 3×3 block (0-8, row-major).
    #[must_use]
    pub const fn block(self) -> u8 {
        self.row / 3 * 3 + self.col / 3
    }

    /// Row-major board index (0-80).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.row * 9 + self.col
    }

    /// Returns `true` if the two positions are distinct and share a row,
    /// column, or block.
    ///
    /// The relation is symmetric but not transitive, and a position never
    /// sees itself.
    #[must_use]
    pub const fn sees(self, other: Self) -> bool {
        if self.row == other.row && self.col == other.col {
            return false;
        }
        self.row == other.row || self.col == other.col || self.block() == other.block()
    }

    /// The 20 cells this position sees.
    #[must_use]
    pub fn peers(self) -> CellSet {
        let mut peers = CellSet::ROWS[self.row as usize]
            | CellSet::COLS[self.col as usize]
            | CellSet::BLOCKS[self.block() as usize];
        peers.remove(self);
        peers
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row + 1, self.col + 1)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_block_layout() {
        assert_eq!(Position::new(0, 0).block(), 0);
        assert_eq!(Position::new(0, 8).block(), 2);
        assert_eq!(Position::new(4, 4).block(), 4);
        assert_eq!(Position::new(8, 0).block(), 6);
        assert_eq!(Position::new(8, 8).block(), 8);
    }

    #[test]
    fn test_index_round_trip() {
        for index in 0..81 {
            assert_eq!(Position::from_index(index).index(), index);
        }
    }

    #[test]
    fn test_in_block_covers_block() {
        for block in 0..9 {
            for i in 0..9 {
                assert_eq!(Position::in_block(block, i).block(), block);
            }
        }
    }

    #[test]
    fn test_sees_is_irreflexive() {
        let pos = Position::new(3, 3);
        assert!(!pos.sees(pos));
    }

    #[test]
    fn test_peers_has_twenty_cells() {
        for index in 0..81 {
            let pos = Position::from_index(index);
            let peers = pos.peers();
            assert_eq!(peers.len(), 20);
            assert!(!peers.contains(pos));
        }
    }

    proptest! {
        #[test]
        fn prop_sees_is_symmetric(a in 0u8..81, b in 0u8..81) {
            let (a, b) = (Position::from_index(a), Position::from_index(b));
            prop_assert_eq!(a.sees(b), b.sees(a));
        }

        #[test]
        fn prop_peers_match_sees(a in 0u8..81, b in 0u8..81) {
            let (a, b) = (Position::from_index(a), Position::from_index(b));
            prop_assert_eq!(a.peers().contains(b), a.sees(b));
        }
    }
}
