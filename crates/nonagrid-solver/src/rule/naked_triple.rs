use nonagrid_core::{CandidateGrid, CellSet, ContradictionError, House};

use super::{BoxedRule, Rule, RuleId};
use crate::{EventLog, RuleEvent};

/// Rule 3: three cells of a container with the same three candidates.
///
/// Fires only on an exact match: each of the three cells holds the identical
/// 3-set, and no further cell of the container does. The looser pattern where
/// three cells merely *combine* to three digits is out of this rule's scope.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedTriple;

impl NakedTriple {
    /// Creates the rule.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Rule for NakedTriple {
    fn id(&self) -> RuleId {
        RuleId::NakedTriple
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
            let trivalue: CellSet = cells
                .iter()
                .filter(|&pos| grid.candidates_at(pos).len() == 3)
                .collect();
            for pos in trivalue {
                let trio = grid.candidates_at(pos);
                if trio.len() != 3 {
                    continue;
                }
                let matching: CellSet = trivalue
                    .iter()
                    .filter(|&other| grid.candidates_at(other) == trio)
                    .collect();
                if matching.len() != 3 {
                    continue;
                }
                // Fire once per triple, from its first cell.
                if matching.first() != Some(pos) {
                    continue;
                }
                let targets = cells.difference(matching);
                let mut removed_cells = CellSet::EMPTY;
                for digit in trio {
                    removed_cells |= grid.eliminate(targets, digit)?;
                }
                if !removed_cells.is_empty() {
                    changed = true;
                    events.record(RuleEvent {
                        rule: RuleId::NakedTriple,
                        house: Some(house),
                        cells: removed_cells,
                        digits: trio,
                    });
                }
            }
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use nonagrid_core::{Digit::*, DigitSet, Position};

    use super::*;
    use crate::testing::RuleTester;

    fn limit(grid: &mut CandidateGrid, pos: Position, digits: DigitSet) {
        grid.eliminate_digits(pos, !digits).unwrap();
    }

    #[test]
    fn test_identical_triple_eliminates_in_column() {
        let mut grid = CandidateGrid::new();
        let trio = DigitSet::from_iter([D2, D5, D8]);
        limit(&mut grid, Position::new(0, 3), trio);
        limit(&mut grid, Position::new(4, 3), trio);
        limit(&mut grid, Position::new(8, 3), trio);

        RuleTester::new(grid)
            .apply_once(&NakedTriple::new())
            .assert_removed_includes(Position::new(1, 3), [D2, D5, D8])
            .assert_removed_includes(Position::new(7, 3), [D2, D5, D8])
            .assert_no_change(Position::new(0, 3))
            .assert_no_change(Position::new(4, 3))
            // other columns are untouched
            .assert_no_change(Position::new(4, 4));
    }

    #[test]
    fn test_does_not_fire_on_combined_triple() {
        // {2,5} / {5,8} / {2,8} combine to three digits, but no cell holds
        // the full 3-set, so this narrow form stays silent.
        let mut grid = CandidateGrid::new();
        limit(&mut grid, Position::new(0, 0), DigitSet::from_iter([D2, D5]));
        limit(&mut grid, Position::new(0, 1), DigitSet::from_iter([D5, D8]));
        limit(&mut grid, Position::new(0, 2), DigitSet::from_iter([D2, D8]));

        RuleTester::new(grid)
            .apply_once(&NakedTriple::new())
            .assert_no_change(Position::new(0, 4))
            .assert_no_change(Position::new(0, 8));
    }

    #[test]
    fn test_does_not_fire_on_four_matching_cells() {
        let mut grid = CandidateGrid::new();
        let trio = DigitSet::from_iter([D1, D2, D3]);
        for col in [0, 2, 4, 6] {
            limit(&mut grid, Position::new(0, col), trio);
        }

        RuleTester::new(grid)
            .apply_once(&NakedTriple::new())
            .assert_no_change(Position::new(0, 1))
            .assert_no_change(Position::new(0, 8));
    }

    #[test]
    fn test_no_change_without_triples() {
        RuleTester::new(CandidateGrid::new())
            .apply_once(&NakedTriple::new())
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(8, 8));
    }
}
