//! The deduction rules.
//!
//! Each rule is a stateless struct implementing [`Rule`]: given the current
//! [`CandidateGrid`] it removes every candidate its pattern justifies and
//! reports whether it changed anything. Rules are identified by the classic
//! indices 0-9 ([`RuleId`]) and dispatched through an explicit table
//! ([`rule_for`]); [`RuleSet`] selects which of them a run enables.

use std::{
    fmt::{self, Debug, Display},
    iter::FusedIterator,
    str::FromStr,
};

use derive_more::{Display as DeriveDisplay, Error};
use nonagrid_core::{CandidateGrid, ContradictionError};

pub use self::{
    hidden_single::HiddenSingle, hidden_tuple::HiddenTuple, locked_candidates::LockedCandidates,
    naked_pair::NakedPair, naked_single::NakedSingle, naked_triple::NakedTriple,
    skyscraper::Skyscraper, swordfish::Swordfish, x_wing::XWing, y_wing::YWing,
};
use crate::EventLog;

mod axis;
mod hidden_single;
mod hidden_tuple;
mod locked_candidates;
mod naked_pair;
mod naked_single;
mod naked_triple;
mod skyscraper;
mod swordfish;
mod x_wing;
mod y_wing;

/// Identifier of a deduction rule, 0-9.
///
/// The discriminants are the classic rule indices callers select rules by;
/// ascending id order is also the application order within a solver pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum RuleId {
    /// Rule 0: settled cells eliminate their value elsewhere in a container.
    NakedSingle = 0,
    /// Rule 1: a digit confined to one cell of a container settles it.
    HiddenSingle = 1,
    /// Rule 2: two cells with the same two candidates.
    NakedPair = 2,
    /// Rule 3: three cells with the same three candidates.
    NakedTriple = 3,
    /// Rule 4: N digits confined to N cells of a container.
    HiddenTuple = 4,
    /// Rule 5: a digit locked into a container intersection.
    LockedCandidates = 5,
    /// Rule 6: X-wing.
    XWing = 6,
    /// Rule 7: swordfish.
    Swordfish = 7,
    /// Rule 8: Y-wing.
    YWing = 8,
    /// Rule 9: skyscraper.
    Skyscraper = 9,
}

impl RuleId {
    /// All rule ids in ascending order.
    pub const ALL: [Self; 10] = [
        Self::NakedSingle,
        Self::HiddenSingle,
        Self::NakedPair,
        Self::NakedTriple,
        Self::HiddenTuple,
        Self::LockedCandidates,
        Self::XWing,
        Self::Swordfish,
        Self::YWing,
        Self::Skyscraper,
    ];

    /// Creates a rule id from its numeric index, or `None` if out of range.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::NakedSingle),
            1 => Some(Self::HiddenSingle),
            2 => Some(Self::NakedPair),
            3 => Some(Self::NakedTriple),
            4 => Some(Self::HiddenTuple),
            5 => Some(Self::LockedCandidates),
            6 => Some(Self::XWing),
            7 => Some(Self::Swordfish),
            8 => Some(Self::YWing),
            9 => Some(Self::Skyscraper),
            _ => None,
        }
    }

    /// The numeric index of this rule (0-9).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns `true` for the expensive pattern rules 6-9, which the solver
    /// may hold back on early passes.
    #[must_use]
    pub const fn is_advanced(self) -> bool {
        self.index() >= 6
    }

    /// The rule's human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NakedSingle => "naked single",
            Self::HiddenSingle => "hidden single",
            Self::NakedPair => "naked pair",
            Self::NakedTriple => "naked triple",
            Self::HiddenTuple => "hidden tuple",
            Self::LockedCandidates => "locked candidates",
            Self::XWing => "X-wing",
            Self::Swordfish => "swordfish",
            Self::YWing => "Y-wing",
            Self::Skyscraper => "skyscraper",
        }
    }
}

impl Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of enabled rule ids, selected once at configuration time.
///
/// Parses from the classic digit-string selection format:
///
/// ```
/// use nonagrid_solver::{RuleId, RuleSet};
///
/// let set: RuleSet = "015".parse()?;
/// assert!(set.contains(RuleId::HiddenSingle));
/// assert!(!set.contains(RuleId::XWing));
/// # Ok::<(), nonagrid_solver::ParseRuleSetError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleSet(u16);

impl RuleSet {
    /// The empty selection.
    pub const EMPTY: Self = Self(0);

    /// All ten rules.
    pub const ALL: Self = Self(0x3ff);

    /// Creates a selection holding a single rule.
    #[must_use]
    pub const fn only(id: RuleId) -> Self {
        Self(1 << id.index())
    }

    /// Returns `true` if `id` is enabled.
    #[must_use]
    pub const fn contains(self, id: RuleId) -> bool {
        self.0 & (1 << id.index()) != 0
    }

    /// Enables a rule.
    pub fn insert(&mut self, id: RuleId) {
        self.0 |= 1 << id.index();
    }

    /// Number of enabled rules.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if no rule is enabled.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the enabled ids in ascending order.
    #[must_use]
    pub fn iter(self) -> RuleSetIter {
        RuleSetIter(self.0)
    }
}

impl FromIterator<RuleId> for RuleSet {
    fn from_iter<I: IntoIterator<Item = RuleId>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl IntoIterator for RuleSet {
    type Item = RuleId;
    type IntoIter = RuleSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the ids of a [`RuleSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct RuleSetIter(u16);

impl Iterator for RuleSetIter {
    type Item = RuleId;

    fn next(&mut self) -> Option<RuleId> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        RuleId::new(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for RuleSetIter {}
impl FusedIterator for RuleSetIter {}

/// Error parsing a rule selection string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveDisplay, Error)]
#[display("invalid rule identifier {ch:?}; expected digits 0-9")]
pub struct ParseRuleSetError {
    /// The offending character.
    pub ch: char,
}

impl FromStr for RuleSet {
    type Err = ParseRuleSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = Self::EMPTY;
        for ch in s.chars() {
            if ch.is_whitespace() || ch == ',' {
                continue;
            }
            let id = ch
                .to_digit(10)
                .and_then(|value| u8::try_from(value).ok())
                .and_then(RuleId::new)
                .ok_or(ParseRuleSetError { ch })?;
            set.insert(id);
        }
        Ok(set)
    }
}

/// A deduction rule.
///
/// Rules are pure functions of the grid they are handed: they hold no state
/// between applications, and applying one twice in a row reports no change
/// the second time.
pub trait Rule: Debug {
    /// The rule's identifier.
    fn id(&self) -> RuleId;

    /// The rule's human-readable name.
    fn name(&self) -> &'static str {
        self.id().name()
    }

    /// Returns a boxed clone of the rule.
    fn clone_dyn(&self) -> BoxedRule;

    /// Applies the rule everywhere it fires, removing candidates in place.
    ///
    /// Returns `Ok(true)` if any candidate was removed or settled, `Ok(false)`
    /// if the grid is unchanged. Every removal is recorded in `events`.
    ///
    /// # Errors
    ///
    /// Returns [`ContradictionError`] if an elimination would leave a cell
    /// with no candidates; the grid state is not meaningful afterwards.
    fn apply(
        &self,
        grid: &mut CandidateGrid,
        events: &mut EventLog,
    ) -> Result<bool, ContradictionError>;
}

/// A boxed rule.
pub type BoxedRule = Box<dyn Rule>;

impl Clone for BoxedRule {
    fn clone(&self) -> Self {
        self.clone_dyn()
    }
}

/// The rule table: maps an id to a rule with default configuration.
#[must_use]
pub fn rule_for(id: RuleId) -> BoxedRule {
    match id {
        RuleId::NakedSingle => Box::new(NakedSingle::new()),
        RuleId::HiddenSingle => Box::new(HiddenSingle::new()),
        RuleId::NakedPair => Box::new(NakedPair::new()),
        RuleId::NakedTriple => Box::new(NakedTriple::new()),
        RuleId::HiddenTuple => Box::new(HiddenTuple::new()),
        RuleId::LockedCandidates => Box::new(LockedCandidates::new()),
        RuleId::XWing => Box::new(XWing::new()),
        RuleId::Swordfish => Box::new(Swordfish::new()),
        RuleId::YWing => Box::new(YWing::new()),
        RuleId::Skyscraper => Box::new(Skyscraper::new()),
    }
}

/// All ten rules in ascending id order.
#[must_use]
pub fn all_rules() -> Vec<BoxedRule> {
    RuleId::ALL.into_iter().map(rule_for).collect()
}
