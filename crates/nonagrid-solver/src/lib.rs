//! Rule-based Sudoku solving engine.
//!
//! The engine solves by candidate elimination only: ten human-style
//! deduction rules ([`rule`]) shrink the candidate sets of a
//! [`CandidateGrid`](nonagrid_core::CandidateGrid) until the puzzle is
//! solved or no enabled rule can make further progress. There is no
//! backtracking and no guessing; puzzles beyond the enabled rules end as
//! [`Outcome::Stuck`].
//!
//! [`RuleSolver`] drives the pass loop, [`RuleSet`] selects the rules by
//! their classic indices 0-9, and every deduction is reported as a
//! [`RuleEvent`] for callers that want to trace the reasoning.
//!
//! # Examples
//!
//! ```
//! use nonagrid_core::{CandidateGrid, DigitGrid};
//! use nonagrid_solver::{RuleSet, RuleSolver};
//!
//! let givens: DigitGrid = "
//!     53. .7. ...
//!     6.. 195 ...
//!     .98 ... .6.
//!     8.. .6. ..3
//!     4.. 8.3 ..1
//!     7.. .2. ..6
//!     .6. ... 28.
//!     ... 419 ..5
//!     ... .8. .79
//! "
//! .parse()?;
//! let mut grid = CandidateGrid::from_digit_grid(&givens);
//!
//! let solver = RuleSolver::from_rule_set("01".parse::<RuleSet>()?);
//! let report = solver.solve(&mut grid)?;
//!
//! println!("{}", report.outcome);
//! for event in &report.events {
//!     println!("  {event}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    event::{EventLog, RuleEvent},
    rule::{BoxedRule, ParseRuleSetError, Rule, RuleId, RuleSet},
    solver::{Outcome, Report, RuleSolver, RunStats, SolverError},
};

mod event;
pub mod rule;
mod solver;
pub mod testing;
