use nonagrid_core::{CandidateGrid, CellSet, ContradictionError, Digit, DigitSet, HouseMask};

use super::{BoxedRule, Rule, RuleId, axis::Axis};
use crate::{EventLog, RuleEvent};

/// Rule 9: skyscraper.
///
/// Two parallel lines each hold a digit as a conjugate pair, and the pairs
/// share exactly one cross line (the base). At least one of the two
/// remaining cells (the roofs) must hold the digit: if a roof were false,
/// its base cell would be true, forcing the other line's roof. The digit is
/// therefore removed from every other cell that sees both roofs. Searched
/// for column pairs first, then row pairs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Skyscraper;

impl Skyscraper {
    /// Creates the rule.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn apply_axis(
        grid: &mut CandidateGrid,
        events: &mut EventLog,
        axis: Axis,
    ) -> Result<bool, ContradictionError> {
        let mut changed = false;
        for digit in Digit::ALL {
            let mut lines: Vec<(u8, HouseMask)> = Vec::new();
            for line in 0..9 {
                let mask = grid.house_mask(axis.line(line), digit);
                if mask.len() == 2 {
                    lines.push((line, mask));
                }
            }
            for (i, &(line1, mask1)) in lines.iter().enumerate() {
                for &(line2, mask2) in &lines[i + 1..] {
                    let shared = mask1 & mask2;
                    let Some(base_cross) = shared.sole() else {
                        continue;
                    };
                    let Some((a, b)) = mask1.as_pair() else {
                        continue;
                    };
                    let roof1_cross = if a == base_cross { b } else { a };
                    let Some((a, b)) = mask2.as_pair() else {
                        continue;
                    };
                    let roof2_cross = if a == base_cross { b } else { a };

                    let roof1 = axis.position(line1, roof1_cross);
                    let roof2 = axis.position(line2, roof2_cross);
                    let pattern = CellSet::from_iter([
                        axis.position(line1, base_cross),
                        axis.position(line2, base_cross),
                        roof1,
                        roof2,
                    ]);
                    let targets = roof1.peers() & roof2.peers() & !pattern;
                    let removed = grid.eliminate(targets, digit)?;
                    if !removed.is_empty() {
                        changed = true;
                        events.record(RuleEvent {
                            rule: RuleId::Skyscraper,
                            house: None,
                            cells: removed,
                            digits: DigitSet::only(digit),
                        });
                    }
                }
            }
        }
        Ok(changed)
    }
}

impl Rule for Skyscraper {
    fn id(&self) -> RuleId {
        RuleId::Skyscraper
    }

    fn clone_dyn(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(
        &self,
        grid: &mut CandidateGrid,
        events: &mut EventLog,
    ) -> Result<bool, ContradictionError> {
        let mut changed = Self::apply_axis(grid, events, Axis::Columns)?;
        changed |= Self::apply_axis(grid, events, Axis::Rows)?;
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use nonagrid_core::Position;

    use super::*;
    use crate::testing::RuleTester;

    /// Confines `digit` in the given column to two rows.
    fn confine_col(grid: &mut CandidateGrid, col: u8, keep: [u8; 2], digit: Digit) {
        for row in 0..9 {
            if !keep.contains(&row) {
                grid.remove_candidate(Position::new(row, col), digit);
            }
        }
    }

    #[test]
    fn test_column_skyscraper_clears_cells_seeing_both_roofs() {
        let mut grid = CandidateGrid::new();
        // Base row 0; roofs at (3, 1) and (4, 7).
        confine_col(&mut grid, 1, [0, 3], Digit::D1);
        confine_col(&mut grid, 7, [0, 4], Digit::D1);

        RuleTester::new(grid)
            .apply_once(&Skyscraper::new())
            // row 4 cells in the block of roof (3, 1) see both roofs
            .assert_removed_includes(Position::new(4, 0), [Digit::D1])
            .assert_removed_includes(Position::new(4, 2), [Digit::D1])
            // row 3 cells in the block of roof (4, 7) see both roofs
            .assert_removed_includes(Position::new(3, 6), [Digit::D1])
            .assert_removed_includes(Position::new(3, 8), [Digit::D1])
            // bases and roofs stay
            .assert_no_change(Position::new(0, 1))
            .assert_no_change(Position::new(0, 7))
            .assert_no_change(Position::new(3, 1))
            .assert_no_change(Position::new(4, 7))
            // cells outside both roofs' sight stay
            .assert_no_change(Position::new(8, 4));
    }

    #[test]
    fn test_row_skyscraper() {
        let mut grid = CandidateGrid::new();
        // Base column 0; roofs at (0, 3) and (4, 4).
        for col in 0..9 {
            if col != 0 && col != 3 {
                grid.remove_candidate(Position::new(0, col), Digit::D2);
            }
            if col != 0 && col != 4 {
                grid.remove_candidate(Position::new(4, col), Digit::D2);
            }
        }

        RuleTester::new(grid)
            .apply_once(&Skyscraper::new())
            // column 4 cells in the block of roof (0, 3) see both roofs
            .assert_removed_includes(Position::new(1, 4), [Digit::D2])
            .assert_removed_includes(Position::new(2, 4), [Digit::D2])
            // column 3 cells in the block of roof (4, 4) see both roofs
            .assert_removed_includes(Position::new(3, 3), [Digit::D2])
            .assert_removed_includes(Position::new(5, 3), [Digit::D2])
            .assert_no_change(Position::new(0, 3))
            .assert_no_change(Position::new(4, 4));
    }

    #[test]
    fn test_requires_exactly_one_shared_line() {
        // Identical conjugate pairs share both rows: that is an X-wing, not
        // a skyscraper.
        let mut grid = CandidateGrid::new();
        confine_col(&mut grid, 1, [0, 4], Digit::D1);
        confine_col(&mut grid, 7, [0, 4], Digit::D1);

        RuleTester::new(grid)
            .apply_once(&Skyscraper::new())
            .assert_no_change(Position::new(4, 0))
            .assert_no_change(Position::new(0, 4));
    }

    #[test]
    fn test_no_change_on_unconstrained_grid() {
        RuleTester::new(CandidateGrid::new())
            .apply_once(&Skyscraper::new())
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(4, 4));
    }
}
