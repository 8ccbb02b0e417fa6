//! The propagation loop.

use std::fmt::{self, Display};

use derive_more::{Display as DeriveDisplay, Error};
use nonagrid_core::{CandidateGrid, ContradictionError};

use crate::{
    EventLog, RuleEvent,
    rule::{self, BoxedRule, RuleId, RuleSet},
};

/// Fatal solver failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveDisplay, Error)]
pub enum SolverError {
    /// A rule attempted an elimination that would empty a cell.
    #[display("{rule} rule found a contradiction: {source}")]
    Contradiction {
        /// The rule that was running.
        rule: RuleId,
        /// The underlying doomed removal.
        source: ContradictionError,
    },
}

/// How a solver run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every cell is down to a single candidate.
    Solved {
        /// Number of passes run, including the final one.
        passes: u32,
    },
    /// A full pass removed nothing; the enabled rules are exhausted.
    Stuck {
        /// Number of passes run, including the no-progress one.
        passes: u32,
    },
}

impl Outcome {
    /// Returns `true` for [`Outcome::Solved`].
    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    /// Number of passes the run took.
    #[must_use]
    pub const fn passes(self) -> u32 {
        match self {
            Self::Solved { passes } | Self::Stuck { passes } => passes,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved { passes } => write!(f, "solved in {passes} passes"),
            Self::Stuck { passes } => write!(f, "stuck after {passes} passes"),
        }
    }
}

/// Per-rule progress counters for one run.
///
/// Aligned with [`RuleSolver::rules`]: `applications()[i]` is the number of
/// passes in which rule `i` removed at least one candidate.
#[derive(Debug, Clone)]
pub struct RunStats {
    applications: Vec<usize>,
}

impl RunStats {
    fn new(rules: usize) -> Self {
        Self {
            applications: vec![0; rules],
        }
    }

    /// Per-rule application counts in solver rule order.
    #[must_use]
    pub fn applications(&self) -> &[usize] {
        &self.applications
    }

    /// Total number of rule applications that made progress.
    #[must_use]
    pub fn total_applications(&self) -> usize {
        self.applications.iter().sum()
    }
}

/// Result of a completed (non-contradictory) run.
#[derive(Debug, Clone)]
pub struct Report {
    /// Terminal state of the run.
    pub outcome: Outcome,
    /// Per-rule progress counters.
    pub stats: RunStats,
    /// Every deduction made, in order.
    pub events: Vec<RuleEvent>,
}

/// Drives repeated passes of the enabled rules until a fixed point.
///
/// Each pass applies every enabled rule in ascending id order; each rule
/// traverses rows, then columns, then blocks internally. The loop ends when
/// the grid is solved or a whole pass removes nothing. There is no pass cap:
/// a pass either makes progress or terminates the loop, so the pass count is
/// bounded by the number of removable candidates.
///
/// The expensive pattern rules (ids 6-9) can be held back until cheaper
/// rules have had a pass to thin the grid; see
/// [`advanced_start_pass`](Self::advanced_start_pass).
///
/// # Examples
///
/// ```
/// use nonagrid_core::{CandidateGrid, DigitGrid};
/// use nonagrid_solver::RuleSolver;
///
/// let givens: DigitGrid = "
///     53. .7. ...
///     6.. 195 ...
///     .98 ... .6.
///     8.. .6. ..3
///     4.. 8.3 ..1
///     7.. .2. ..6
///     .6. ... 28.
///     ... 419 ..5
///     ... .8. .79
/// "
/// .parse()?;
/// let mut grid = CandidateGrid::from_digit_grid(&givens);
///
/// let solver = RuleSolver::with_all_rules();
/// let report = solver.solve(&mut grid)?;
/// assert!(report.outcome.is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct RuleSolver {
    rules: Vec<BoxedRule>,
    advanced_start_pass: u32,
}

impl RuleSolver {
    /// Creates a solver running the given rules.
    ///
    /// The rules are applied in ascending id order regardless of the order
    /// they are passed in.
    #[must_use]
    pub fn new(mut rules: Vec<BoxedRule>) -> Self {
        rules.sort_by_key(|rule| rule.id());
        Self {
            rules,
            advanced_start_pass: 2,
        }
    }

    /// Creates a solver for a rule selection, with default configurations.
    #[must_use]
    pub fn from_rule_set(set: RuleSet) -> Self {
        Self::new(set.iter().map(rule::rule_for).collect())
    }

    /// Creates a solver running all ten rules.
    #[must_use]
    pub fn with_all_rules() -> Self {
        Self::new(rule::all_rules())
    }

    /// Sets the first pass on which the advanced rules (ids 6-9) run.
    ///
    /// Defaults to 2: the first pass runs only the cheap rules, which often
    /// settle enough cells that the pattern searches never trigger. A value
    /// of 1 applies every enabled rule from the start. This trades time, not
    /// correctness; the fixed point is the same either way.
    #[must_use]
    pub fn advanced_start_pass(mut self, pass: u32) -> Self {
        self.advanced_start_pass = pass;
        self
    }

    /// The configured rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    /// Runs passes until the grid is solved or no enabled rule can remove
    /// another candidate.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] as soon as any rule attempts
    /// to empty a cell; the grid state is not meaningful afterwards.
    pub fn solve(&self, grid: &mut CandidateGrid) -> Result<Report, SolverError> {
        let mut events = EventLog::new();
        let mut stats = RunStats::new(self.rules.len());
        let mut passes = 0u32;
        loop {
            passes += 1;
            let mut changed = false;
            for (i, rule) in self.rules.iter().enumerate() {
                if rule.id().is_advanced() && passes < self.advanced_start_pass {
                    continue;
                }
                let progress = rule
                    .apply(grid, &mut events)
                    .map_err(|source| SolverError::Contradiction {
                        rule: rule.id(),
                        source,
                    })?;
                if progress {
                    stats.applications[i] += 1;
                    changed = true;
                }
            }
            log::debug!(
                "pass {passes}: {} deductions so far, changed={changed}",
                events.len()
            );

            if grid.is_solved() {
                return Ok(self.report(Outcome::Solved { passes }, stats, events));
            }
            if !changed {
                return Ok(self.report(Outcome::Stuck { passes }, stats, events));
            }
        }
    }

    fn report(&self, outcome: Outcome, stats: RunStats, events: EventLog) -> Report {
        log::info!("{outcome}");
        Report {
            outcome,
            stats,
            events: events.into_events(),
        }
    }
}

impl Default for RuleSolver {
    fn default() -> Self {
        Self::with_all_rules()
    }
}
