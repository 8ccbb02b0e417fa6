use nonagrid_core::{CandidateGrid, CellSet, ContradictionError, Digit, House};

use super::{BoxedRule, Rule, RuleId};
use crate::{EventLog, RuleEvent};

/// Rule 1: a digit with a single possible cell in a container settles there.
///
/// Tallies, per container and digit, the cells where the digit is still a
/// candidate; a tally of one on an open cell means every other candidate of
/// that cell is impossible.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    /// Creates the rule.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Rule for HiddenSingle {
    fn id(&self) -> RuleId {
        RuleId::HiddenSingle
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
            for digit in Digit::ALL {
                let holders = grid.positions_of(digit) & house.cells();
                let Some(pos) = holders.sole() else {
                    continue;
                };
                if grid.candidates_at(pos).len() == 1 {
                    continue;
                }
                let removed = grid.settle(pos, digit)?;
                changed = true;
                events.record(RuleEvent {
                    rule: RuleId::HiddenSingle,
                    house: Some(house),
                    cells: CellSet::only(pos),
                    digits: removed,
                });
            }
        }
        Ok(changed)
    }
}
