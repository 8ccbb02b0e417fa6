use nonagrid_core::{CandidateGrid, ContradictionError, DigitSet};

use super::{BoxedRule, Rule, RuleId};
use crate::{EventLog, RuleEvent};

/// Rule 8: Y-wing.
///
/// A pivot cell with candidates {X,Y} and two wing cells it sees, holding
/// {X,Z} and {Y,Z}: whichever way the pivot settles, one wing becomes Z, so
/// Z is impossible in every cell that sees both wings. The wings must not
/// see each other and must not hold the same pair.
#[derive(Debug, Default, Clone, Copy)]
pub struct YWing;

impl YWing {
    /// Creates the rule.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Rule for YWing {
    fn id(&self) -> RuleId {
        RuleId::YWing
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
        let bivalue = grid.bivalue_cells();
        for pivot in bivalue {
            // Earlier eliminations may have settled the pivot meanwhile.
            let Some((d1, d2)) = grid.candidates_at(pivot).as_pair() else {
                continue;
            };
            let pivot_digits = DigitSet::from_iter([d1, d2]);
            let pivot_peers = pivot.peers();
            for wing1 in pivot_peers & bivalue & grid.positions_of(d1) {
                let wing1_digits = grid.candidates_at(wing1);
                if wing1_digits.len() != 2 {
                    continue;
                }
                let Some(shared) = wing1_digits.difference(pivot_digits).sole() else {
                    continue;
                };
                let wing2_pool = pivot_peers
                    & bivalue
                    & grid.positions_of(d2)
                    & grid.positions_of(shared)
                    & !wing1.peers();
                for wing2 in wing2_pool {
                    if grid.candidates_at(wing2).len() != 2 {
                        continue;
                    }
                    let targets = wing1.peers() & wing2.peers();
                    let removed = grid.eliminate(targets, shared)?;
                    if !removed.is_empty() {
                        changed = true;
                        events.record(RuleEvent {
                            rule: RuleId::YWing,
                            house: None,
                            cells: removed,
                            digits: DigitSet::only(shared),
                        });
                    }
                }
            }
        }
        Ok(changed)
    }
}
