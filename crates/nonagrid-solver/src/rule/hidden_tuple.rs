use nonagrid_core::{CandidateGrid, CellSet, ContradictionError, DigitSet, House};

use super::{BoxedRule, Rule, RuleId};
use crate::{EventLog, RuleEvent};

/// Rule 4: N digits confined to N cells of a container lock those cells.
///
/// For every tuple size N and every combination of N digits, the cells of
/// the container holding any of the digits are collected. Exactly N such
/// cells make the combination a locked tuple, and each of the cells is
/// restricted to its intersection with the combination.
///
/// Two conditions gate the match: every tuple digit must occur in at least
/// two of the N cells (a digit confined to one cell belongs to the hidden
/// single), and the cells must hold at least one candidate outside the
/// combination.
#[derive(Debug, Clone, Copy)]
pub struct HiddenTuple {
    max_size: u8,
}

impl HiddenTuple {
    /// Creates the rule with the default size range, N = 2..=6.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_size: 6 }
    }

    /// Creates the rule searching tuple sizes up to `max_size`.
    ///
    /// # Panics
    ///
    /// Panics unless `max_size` is between 2 and 8.
    #[must_use]
    pub const fn with_max_size(max_size: u8) -> Self {
        assert!(max_size >= 2 && max_size <= 8);
        Self { max_size }
    }

    /// The largest tuple size this rule searches.
    #[must_use]
    pub const fn max_size(&self) -> u8 {
        self.max_size
    }
}

impl Default for HiddenTuple {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for HiddenTuple {
    fn id(&self) -> RuleId {
        RuleId::HiddenTuple
    }

    fn clone_dyn(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(
        &self,
        grid: &mut CandidateGrid,
        events: &mut EventLog,
    ) -> Result<bool, ContradictionError> {
        let mut changed = false;
        for house in House::ALL {
            let cells = house.cells();
            for size in 2..=self.max_size {
                for combo in DigitSet::combinations(u32::from(size)) {
                    let mut holders = CellSet::EMPTY;
                    for digit in combo {
                        holders |= grid.positions_of(digit);
                    }
                    holders &= cells;
                    if holders.len() != usize::from(size) {
                        continue;
                    }
                    if combo
                        .iter()
                        .any(|digit| (grid.positions_of(digit) & holders).len() < 2)
                    {
                        continue;
                    }
                    let mut union = DigitSet::EMPTY;
                    for pos in holders {
                        union |= grid.candidates_at(pos);
                    }
                    if union.difference(combo).is_empty() {
                        continue;
                    }

                    let mut removed_cells = CellSet::EMPTY;
                    let mut removed_digits = DigitSet::EMPTY;
                    for pos in holders {
                        let extras = grid.candidates_at(pos).difference(combo);
                        if extras.is_empty() {
                            continue;
                        }
                        let removed = grid.eliminate_digits(pos, extras)?;
                        if !removed.is_empty() {
                            removed_cells.insert(pos);
                            removed_digits |= removed;
                        }
                    }
                    if !removed_cells.is_empty() {
                        changed = true;
                        events.record(RuleEvent {
                            rule: RuleId::HiddenTuple,
                            house: Some(house),
                            cells: removed_cells,
                            digits: removed_digits,
                        });
                    }
                }
            }
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use nonagrid_core::{Digit::*, Position};

    use super::*;
    use crate::testing::RuleTester;

    #[test]
    fn test_hidden_pair_strips_other_candidates() {
        // Digits 1 and 2 fit only in the first two cells of row 0.
        let mut grid = CandidateGrid::new();
        for col in 2..9 {
            grid.remove_candidate(Position::new(0, col), D1);
            grid.remove_candidate(Position::new(0, col), D2);
        }

        RuleTester::new(grid)
            .apply_once(&HiddenTuple::new())
            .assert_removed_exact(Position::new(0, 0), [D3, D4, D5, D6, D7, D8, D9])
            .assert_removed_exact(Position::new(0, 1), [D3, D4, D5, D6, D7, D8, D9])
            .assert_no_change(Position::new(0, 2));
    }

    #[test]
    fn test_hidden_triple_in_block() {
        // Digits 4, 5, 6 fit only in three cells of block 8.
        let mut grid = CandidateGrid::new();
        let keep = [Position::new(6, 6), Position::new(7, 7), Position::new(8, 8)];
        for i in 0..9 {
            let pos = Position::in_block(8, i);
            if !keep.contains(&pos) {
                grid.remove_candidate(pos, D4);
                grid.remove_candidate(pos, D5);
                grid.remove_candidate(pos, D6);
            }
        }

        RuleTester::new(grid)
            .apply_once(&HiddenTuple::new())
            .assert_removed_exact(Position::new(6, 6), [D1, D2, D3, D7, D8, D9])
            .assert_removed_exact(Position::new(7, 7), [D1, D2, D3, D7, D8, D9])
            .assert_removed_exact(Position::new(8, 8), [D1, D2, D3, D7, D8, D9]);
    }

    #[test]
    fn test_skips_tuple_containing_a_single() {
        // Digit 1 fits one cell, digit 2 fits that cell plus one more. The
        // {1,2} combination spans two cells, but digit 1 occurs only once:
        // that is hidden-single territory, not a pair.
        let mut grid = CandidateGrid::new();
        for col in 1..9 {
            grid.remove_candidate(Position::new(0, col), D1);
        }
        for col in 2..9 {
            grid.remove_candidate(Position::new(0, col), D2);
        }

        RuleTester::new(grid)
            .apply_once(&HiddenTuple::new())
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(0, 1));
    }

    #[test]
    fn test_skips_tuple_with_nothing_to_remove() {
        // The two cells already hold exactly the pair digits.
        let mut grid = CandidateGrid::new();
        for col in 2..9 {
            grid.remove_candidate(Position::new(0, col), D1);
            grid.remove_candidate(Position::new(0, col), D2);
        }
        for pos in [Position::new(0, 0), Position::new(0, 1)] {
            grid.eliminate_digits(pos, !DigitSet::from_iter([D1, D2])).unwrap();
        }

        let changed = HiddenTuple::new()
            .apply(&mut grid, &mut EventLog::new())
            .unwrap();
        assert!(!changed);
    }

    #[test]
    fn test_max_size_is_configurable() {
        assert_eq!(HiddenTuple::new().max_size(), 6);
        assert_eq!(HiddenTuple::with_max_size(7).max_size(), 7);
    }
}
