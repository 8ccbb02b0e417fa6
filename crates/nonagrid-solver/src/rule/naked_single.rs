use nonagrid_core::{CandidateGrid, ContradictionError, Digit, DigitSet, House};

use super::{BoxedRule, Rule, RuleId};
use crate::{EventLog, RuleEvent};

/// Rule 0: a settled cell's value is impossible elsewhere in its containers.
///
/// For every container, the values of its settled cells are removed from all
/// other, still-open cells. This is the workhorse that propagates givens and
/// every placement the other rules make.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates the rule.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Rule for NakedSingle {
    fn id(&self) -> RuleId {
        RuleId::NakedSingle
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
            let settled = grid.settled_cells();
            let open = cells & !settled;
            for digit in Digit::ALL {
                if (grid.positions_of(digit) & cells & settled).is_empty() {
                    continue;
                }
                let removed = grid.eliminate(open, digit)?;
                if !removed.is_empty() {
                    changed = true;
                    events.record(RuleEvent {
                        rule: RuleId::NakedSingle,
                        house: Some(house),
                        cells: removed,
                        digits: DigitSet::only(digit),
                    });
                }
            }
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use nonagrid_core::Position;

    use super::*;
    use crate::testing::RuleTester;

    #[test]
    fn test_clue_eliminates_across_its_containers() {
        RuleTester::from_str(
            "
            5.. ... ...
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ...
        ",
        )
        .apply_once(&NakedSingle::new())
        // same row
        .assert_removed_exact(Position::new(0, 8), [Digit::D5])
        // same column
        .assert_removed_exact(Position::new(8, 0), [Digit::D5])
        // same block
        .assert_removed_exact(Position::new(2, 2), [Digit::D5])
        // unrelated cell
        .assert_no_change(Position::new(4, 4));
    }

    #[test]
    fn test_settles_the_last_open_cell_of_a_row() {
        // Eight givens in a row reduce the ninth cell to a single candidate
        // within one application.
        RuleTester::from_str(
            "
            12345678.
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ...
        ",
        )
        .apply_once(&NakedSingle::new())
        .assert_settled(Position::new(0, 8), Digit::D9);
    }

    #[test]
    fn test_no_change_on_unconstrained_grid() {
        RuleTester::new(CandidateGrid::new())
            .apply_once(&NakedSingle::new())
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(4, 4));
    }

    #[test]
    fn test_contradiction_when_a_cell_runs_dry() {
        // (0, 1) can only be 5 or 6, but both already sit settled in row 0.
        let mut grid = CandidateGrid::new();
        grid.settle(Position::new(0, 0), Digit::D5).unwrap();
        grid.settle(Position::new(0, 2), Digit::D6).unwrap();
        grid.eliminate_digits(
            Position::new(0, 1),
            !DigitSet::from_iter([Digit::D5, Digit::D6]),
        )
        .unwrap();

        let err = NakedSingle::new()
            .apply(&mut grid, &mut EventLog::new())
            .unwrap_err();
        assert_eq!(err.position, Position::new(0, 1));
    }

    #[test]
    fn test_keeps_other_settled_cells_untouched() {
        // Two cells settled on the same digit in one row: neither is touched,
        // the conflict is left for the solved-state check.
        let mut grid = CandidateGrid::new();
        grid.settle(Position::new(0, 0), Digit::D5).unwrap();
        grid.settle(Position::new(0, 8), Digit::D5).unwrap();

        let changed = NakedSingle::new()
            .apply(&mut grid, &mut EventLog::new())
            .unwrap();
        assert!(changed);
        assert!(grid.candidates_at(Position::new(0, 0)).contains(Digit::D5));
        assert!(grid.candidates_at(Position::new(0, 8)).contains(Digit::D5));
    }

    #[test]
    fn test_idempotent() {
        let mut grid = CandidateGrid::new();
        grid.settle(Position::new(3, 3), Digit::D1).unwrap();

        let rule = NakedSingle::new();
        let mut events = EventLog::new();
        assert!(rule.apply(&mut grid, &mut events).unwrap());
        assert!(!rule.apply(&mut grid, &mut events).unwrap());
    }
}
