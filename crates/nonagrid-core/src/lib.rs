//! Core data structures for the nonagrid solving engine.
//!
//! This crate provides the board model shared by the deduction rules and
//! their drivers:
//!
//! - [`Digit`] and [`DigitSet`]: a typed digit 1-9 and the 9-bit candidate
//!   set of a single cell
//! - [`Position`] and [`CellSet`]: a board coordinate and an 81-bit mask
//!   over the whole board, with the 27 containers available as constant
//!   tables
//! - [`House`] and [`HouseMask`]: a row/column/block view and the 9-bit
//!   in-house candidate mask the fish rules compare across lines
//! - [`DigitGrid`]: given clues plus the text format they are read from
//! - [`CandidateGrid`]: the full candidate state, one cell mask per digit,
//!   with contradiction-checked mutators that keep every cell non-empty
//!
//! # Examples
//!
//! ```
//! use nonagrid_core::{CandidateGrid, CellSet, Digit, DigitGrid, Position};
//!
//! let givens: DigitGrid = format!("5{}", ".".repeat(80)).parse()?;
//! let mut grid = CandidateGrid::from_digit_grid(&givens);
//!
//! // The clue is settled; everything else is wide open.
//! assert_eq!(grid.candidates_at(Position::new(0, 0)).sole(), Some(Digit::D5));
//! assert_eq!(grid.candidates_at(Position::new(4, 4)).len(), 9);
//!
//! // Container views are mask intersections over shared state.
//! let in_row = grid.positions_of(Digit::D5) & CellSet::ROWS[0];
//! assert_eq!(in_row.len(), 9);
//! # Ok::<(), nonagrid_core::ParseGridError>(())
//! ```

pub use self::{
    candidate_grid::{CandidateGrid, ContradictionError},
    cell_set::CellSet,
    digit::Digit,
    digit_grid::{DigitGrid, ParseGridError},
    digit_set::DigitSet,
    house::{House, HouseMask},
    position::Position,
};

mod candidate_grid;
mod cell_set;
mod digit;
mod digit_grid;
mod digit_set;
mod house;
mod position;
