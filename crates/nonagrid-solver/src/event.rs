//! Deduction events as data.
//!
//! Every rule reports what it removed through a [`RuleEvent`] instead of
//! printing its findings: the rule that fired, the container it was looking
//! at (when it works container by container), the cells it touched, and the
//! digits it removed there. Rendering is left entirely to the caller.

use std::fmt::{self, Display};

use nonagrid_core::{CellSet, DigitSet, House};

use crate::RuleId;

/// One deduction: a rule removed some digits from some cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleEvent {
    /// The rule that fired.
    pub rule: RuleId,
    /// The container the rule was scanning, for container-scoped rules.
    pub house: Option<House>,
    /// The cells that lost candidates.
    pub cells: CellSet,
    /// The digits removed from those cells.
    pub digits: DigitSet,
}

impl Display for RuleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: removed {} from", self.rule, self.digits)?;
        for (i, pos) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {pos}")?;
        }
        if let Some(house) = self.house {
            write!(f, " ({house})")?;
        }
        Ok(())
    }
}

/// Collects the [`RuleEvent`]s of a solver run.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<RuleEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one event.
    pub fn record(&mut self, event: RuleEvent) {
        self.events.push(event);
    }

    /// The events recorded so far, in deduction order.
    #[must_use]
    pub fn events(&self) -> &[RuleEvent] {
        &self.events
    }

    /// Consumes the log and returns the events.
    #[must_use]
    pub fn into_events(self) -> Vec<RuleEvent> {
        self.events
    }

    /// Number of events recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
