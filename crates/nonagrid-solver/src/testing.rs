//! Test utilities for rule implementations.
//!
//! [`RuleTester`] tracks a grid's initial and current candidate state,
//! applies rules, and asserts on the difference, so rule tests read as a
//! fluent description of the expected deduction.
//!
//! # Examples
//!
//! ```
//! use nonagrid_core::{Digit, Position};
//! use nonagrid_solver::{rule::NakedSingle, testing::RuleTester};
//!
//! RuleTester::from_str(
//!     "
//!     5.. ... ...
//!     ... ... ...
//!     ... ... ...
//!     ... ... ...
//!     ... ... ...
//!     ... ... ...
//!     ... ... ...
//!     ... ... ...
//!     ... ... ...
//! ",
//! )
//! .apply_once(&NakedSingle::new())
//! .assert_removed_exact(Position::new(0, 5), [Digit::D5])
//! .assert_removed_exact(Position::new(5, 0), [Digit::D5]);
//! ```

use nonagrid_core::{CandidateGrid, Digit, DigitGrid, DigitSet, Position};

use crate::{EventLog, rule::Rule};

/// A fluent test harness for rule implementations.
///
/// All assertion methods consume and return `self` for chaining, panic with
/// detailed messages on failure, and use `#[track_caller]` so failures point
/// at the test line.
#[derive(Debug)]
pub struct RuleTester {
    initial: CandidateGrid,
    current: CandidateGrid,
}

impl RuleTester {
    /// Creates a tester from an initial candidate grid.
    #[must_use]
    pub fn new(initial: CandidateGrid) -> Self {
        let current = initial.clone();
        Self { initial, current }
    }

    /// Creates a tester from a grid string in the [`DigitGrid`] text format.
    ///
    /// # Panics
    ///
    /// Panics if the string does not parse as a grid.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        let grid: DigitGrid = s.parse().unwrap();
        Self::new(CandidateGrid::from_digit_grid(&grid))
    }

    /// Applies the rule once.
    ///
    /// # Panics
    ///
    /// Panics if the rule reports a contradiction.
    #[track_caller]
    pub fn apply_once<R: Rule>(mut self, rule: &R) -> Self {
        rule.apply(&mut self.current, &mut EventLog::new()).unwrap();
        self
    }

    /// Applies the rule repeatedly until it reports no further change.
    ///
    /// # Panics
    ///
    /// Panics if the rule reports a contradiction.
    #[track_caller]
    pub fn apply_until_stuck<R: Rule>(mut self, rule: &R) -> Self {
        let mut events = EventLog::new();
        while rule.apply(&mut self.current, &mut events).unwrap() {}
        self
    }

    /// The current candidate state.
    #[must_use]
    pub fn current(&self) -> &CandidateGrid {
        &self.current
    }

    /// Asserts that the cell went from several candidates to exactly `digit`.
    ///
    /// # Panics
    ///
    /// Panics if the cell was settled initially, or is not settled on `digit`
    /// now.
    #[track_caller]
    pub fn assert_settled(self, pos: Position, digit: Digit) -> Self {
        let initial = self.initial.candidates_at(pos);
        let current = self.current.candidates_at(pos);
        assert!(
            initial.len() > 1,
            "expected {pos} to start unsettled, but candidates were {initial}"
        );
        assert_eq!(
            current.sole(),
            Some(digit),
            "expected {pos} to settle on {digit}, but candidates are {current}"
        );
        self
    }

    /// Asserts that at least the given candidates were removed from a cell.
    ///
    /// # Panics
    ///
    /// Panics if any of the digits was absent initially or is still present.
    #[track_caller]
    pub fn assert_removed_includes<D>(self, pos: Position, digits: D) -> Self
    where
        D: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates_at(pos);
        let current = self.current.candidates_at(pos);
        assert!(
            digits.is_subset(initial),
            "expected initial candidates {initial} at {pos} to include {digits}"
        );
        assert!(
            !current.intersects(digits),
            "expected {digits} to be removed from {pos}, but candidates are {current}"
        );
        self
    }

    /// Asserts that exactly the given candidates were removed from a cell.
    ///
    /// # Panics
    ///
    /// Panics if the removed set differs from `digits`.
    #[track_caller]
    pub fn assert_removed_exact<D>(self, pos: Position, digits: D) -> Self
    where
        D: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates_at(pos);
        let current = self.current.candidates_at(pos);
        let removed = initial.difference(current);
        assert_eq!(
            removed, digits,
            "expected exactly {digits} removed from {pos}, but {removed} was removed \
             (initial {initial}, current {current})"
        );
        self
    }

    /// Asserts that a cell's candidates are unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the cell's candidates differ from the initial state.
    #[track_caller]
    pub fn assert_no_change(self, pos: Position) -> Self {
        let initial = self.initial.candidates_at(pos);
        let current = self.current.candidates_at(pos);
        assert_eq!(
            initial, current,
            "expected no change at {pos}, but candidates went from {initial} to {current}"
        );
        self
    }
}
