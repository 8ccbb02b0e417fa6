use nonagrid_core::{CandidateGrid, CellSet, ContradictionError, House};

use super::{BoxedRule, Rule, RuleId};
use crate::{EventLog, RuleEvent};

/// Rule 2: two cells of a container with the same two candidates.
///
/// The pair digits must land in those two cells, so they are removed from
/// every other cell of the container. Fires only when the 2-set occurs in
/// exactly two cells of the container.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedPair;

impl NakedPair {
    /// Creates the rule.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Rule for NakedPair {
    fn id(&self) -> RuleId {
        RuleId::NakedPair
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
            let bivalue = grid.bivalue_cells() & cells;
            for pos in bivalue {
                let pair = grid.candidates_at(pos);
                if pair.len() != 2 {
                    continue;
                }
                let matching: CellSet = bivalue
                    .iter()
                    .filter(|&other| grid.candidates_at(other) == pair)
                    .collect();
                if matching.len() != 2 {
                    continue;
                }
                // Fire once per pair, from its first cell.
                if matching.first() != Some(pos) {
                    continue;
                }
                let targets = cells.difference(matching);
                let mut removed_cells = CellSet::EMPTY;
                for digit in pair {
                    removed_cells |= grid.eliminate(targets, digit)?;
                }
                if !removed_cells.is_empty() {
                    changed = true;
                    events.record(RuleEvent {
                        rule: RuleId::NakedPair,
                        house: Some(house),
                        cells: removed_cells,
                        digits: pair,
                    });
                }
            }
        }
        Ok(changed)
    }
}
