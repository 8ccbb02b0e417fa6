//! Row/column symmetry for the pattern rules.

use nonagrid_core::{House, Position};

/// One of the two line orientations a fish pattern can be based on.
///
/// The X-wing, swordfish, and skyscraper searches are identical under a swap
/// of rows and columns; they run once per axis. A "line" is a house along
/// the axis, a "cross" index names the perpendicular house a cell falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    /// Base lines are rows; cross indices are columns.
    Rows,
    /// Base lines are columns; cross indices are rows.
    Columns,
}

impl Axis {
    /// The line house with the given index along this axis.
    pub(crate) fn line(self, i: u8) -> House {
        match self {
            Self::Rows => House::Row(i),
            Self::Columns => House::Col(i),
        }
    }

    /// The perpendicular house with the given cross index.
    pub(crate) fn cross(self, i: u8) -> House {
        match self {
            Self::Rows => House::Col(i),
            Self::Columns => House::Row(i),
        }
    }

    /// The position at `line` × `cross`.
    pub(crate) fn position(self, line: u8, cross: u8) -> Position {
        match self {
            Self::Rows => Position::new(line, cross),
            Self::Columns => Position::new(cross, line),
        }
    }
}
