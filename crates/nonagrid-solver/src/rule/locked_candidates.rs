use nonagrid_core::{CandidateGrid, CellSet, ContradictionError, Digit, DigitSet, House};

use super::{BoxedRule, Rule, RuleId};
use crate::{EventLog, RuleEvent};

/// Rule 5: a digit locked into the intersection of two containers.
///
/// Claiming: when every candidate cell of a digit in a row or column falls
/// inside one block, the digit is removed from the rest of that block.
/// Pointing: when every candidate cell of a digit in a block falls on one
/// row (or one column), the digit is removed from the rest of that line.
///
/// Traversal order is rows claiming, columns claiming, then blocks pointing.
/// Digits down to a single candidate cell are left to the hidden single.
#[derive(Debug, Default, Clone, Copy)]
pub struct LockedCandidates;

impl LockedCandidates {
    /// Creates the rule.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Removes `digit` from `targets`, recording the elimination under
    /// `house`.
    fn eliminate_rest(
        grid: &mut CandidateGrid,
        events: &mut EventLog,
        house: House,
        targets: CellSet,
        digit: Digit,
    ) -> Result<bool, ContradictionError> {
        let removed = grid.eliminate(targets, digit)?;
        if removed.is_empty() {
            return Ok(false);
        }
        events.record(RuleEvent {
            rule: RuleId::LockedCandidates,
            house: Some(house),
            cells: removed,
            digits: DigitSet::only(digit),
        });
        Ok(true)
    }

    /// Claiming: a line's candidates confined to one block clear the rest of
    /// the block.
    fn claim(
        grid: &mut CandidateGrid,
        events: &mut EventLog,
        line: House,
    ) -> Result<bool, ContradictionError> {
        let mut changed = false;
        for digit in Digit::ALL {
            let holders = grid.positions_of(digit) & line.cells();
            if holders.len() < 2 {
                continue;
            }
            let Some(first) = holders.first() else {
                continue;
            };
            let block = CellSet::BLOCKS[first.block() as usize];
            if !holders.is_subset(block) {
                continue;
            }
            changed |= Self::eliminate_rest(
                grid,
                events,
                House::Block(first.block()),
                block.difference(holders),
                digit,
            )?;
        }
        Ok(changed)
    }

    /// Pointing: a block's candidates confined to one line clear the rest of
    /// the line.
    fn point(
        grid: &mut CandidateGrid,
        events: &mut EventLog,
        block: House,
    ) -> Result<bool, ContradictionError> {
        let mut changed = false;
        for digit in Digit::ALL {
            let holders = grid.positions_of(digit) & block.cells();
            if holders.len() < 2 {
                continue;
            }
            let Some(first) = holders.first() else {
                continue;
            };
            let row = CellSet::ROWS[first.row() as usize];
            if holders.is_subset(row) {
                changed |= Self::eliminate_rest(
                    grid,
                    events,
                    House::Row(first.row()),
                    row.difference(holders),
                    digit,
                )?;
            }
            let col = CellSet::COLS[first.col() as usize];
            if holders.is_subset(col) {
                changed |= Self::eliminate_rest(
                    grid,
                    events,
                    House::Col(first.col()),
                    col.difference(holders),
                    digit,
                )?;
            }
        }
        Ok(changed)
    }
}

impl Rule for LockedCandidates {
    fn id(&self) -> RuleId {
        RuleId::LockedCandidates
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
        for line in House::ROWS {
            changed |= Self::claim(grid, events, line)?;
        }
        for line in House::COLS {
            changed |= Self::claim(grid, events, line)?;
        }
        for block in House::BLOCKS {
            changed |= Self::point(grid, events, block)?;
        }
        Ok(changed)
    }
}
