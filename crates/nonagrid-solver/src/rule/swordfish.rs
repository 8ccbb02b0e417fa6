use nonagrid_core::{CandidateGrid, CellSet, ContradictionError, Digit, DigitSet, HouseMask};

use super::{BoxedRule, Rule, RuleId, axis::Axis};
use crate::{EventLog, RuleEvent};

/// Rule 7: swordfish, the three-line generalization of the X-wing.
///
/// Three parallel lines, each holding a digit in two or three cells, whose
/// candidate cells pairwise overlap and together cover exactly three cross
/// lines, pin the digit to those nine intersections; the digit is removed
/// from the rest of the three cross lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct Swordfish;

impl Swordfish {
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
                if mask.len() == 2 || mask.len() == 3 {
                    lines.push((line, mask));
                }
            }
            for i in 0..lines.len() {
                let (line1, mask1) = lines[i];
                for j in i + 1..lines.len() {
                    let (line2, mask2) = lines[j];
                    if !mask1.intersects(mask2) {
                        continue;
                    }
                    for k in j + 1..lines.len() {
                        let (line3, mask3) = lines[k];
                        if !mask2.intersects(mask3) || !mask1.intersects(mask3) {
                            continue;
                        }
                        let union = mask1 | mask2 | mask3;
                        if union.len() != 3 {
                            continue;
                        }
                        let mut targets = CellSet::EMPTY;
                        for cross in union.iter() {
                            targets |= axis.cross(cross).cells();
                        }
                        targets = targets
                            & !(axis.line(line1).cells()
                                | axis.line(line2).cells()
                                | axis.line(line3).cells());
                        let removed = grid.eliminate(targets, digit)?;
                        if !removed.is_empty() {
                            changed = true;
                            events.record(RuleEvent {
                                rule: RuleId::Swordfish,
                                house: None,
                                cells: removed,
                                digits: DigitSet::only(digit),
                            });
                        }
                    }
                }
            }
        }
        Ok(changed)
    }
}

impl Rule for Swordfish {
    fn id(&self) -> RuleId {
        RuleId::Swordfish
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
