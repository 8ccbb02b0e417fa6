use nonagrid_core::{CandidateGrid, ContradictionError, Digit, DigitSet, HouseMask};

use super::{BoxedRule, Rule, RuleId, axis::Axis};
use crate::{EventLog, RuleEvent};

/// Rule 6: X-wing.
///
/// Two parallel lines whose candidates for a digit sit in the same two cross
/// lines (a conjugate pair each) pin the digit to those four corners; the
/// digit is removed from the rest of the two cross lines. Searched for rows
/// first, then columns.
#[derive(Debug, Default, Clone, Copy)]
pub struct XWing;

impl XWing {
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
            let mut pairs: Vec<(u8, HouseMask)> = Vec::new();
            for line in 0..9 {
                let mask = grid.house_mask(axis.line(line), digit);
                if mask.len() == 2 {
                    pairs.push((line, mask));
                }
            }
            for (i, &(line1, mask1)) in pairs.iter().enumerate() {
                for &(line2, mask2) in &pairs[i + 1..] {
                    if mask1 != mask2 {
                        continue;
                    }
                    let Some((cross1, cross2)) = mask1.as_pair() else {
                        continue;
                    };
                    let targets = (axis.cross(cross1).cells() | axis.cross(cross2).cells())
                        & !(axis.line(line1).cells() | axis.line(line2).cells());
                    let removed = grid.eliminate(targets, digit)?;
                    if !removed.is_empty() {
                        changed = true;
                        events.record(RuleEvent {
                            rule: RuleId::XWing,
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

impl Rule for XWing {
    fn id(&self) -> RuleId {
        RuleId::XWing
    }

    fn clone_dyn(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(
        &self,
        grid: &mut CandidateGrid,
        events: &mut EventLog,
    ) -> Result<bool, ContradictionError> {
        let mut changed = Self::apply_axis(grid, events, Axis::Rows)?;
        changed |= Self::apply_axis(grid, events, Axis::Columns)?;
        Ok(changed)
    }
}
