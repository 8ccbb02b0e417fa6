//! Board-wide candidate state.

use derive_more::{Display, Error};

use crate::{CellSet, Digit, DigitGrid, DigitSet, House, HouseMask, Position};

/// Attempted candidate removal that would leave a cell with no candidates.
///
/// Carries the offending cell and the digits whose removal was attempted.
/// Rules surface this as a fatal solver error together with their rule id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("contradiction at {position}: cannot remove {digits}")]
pub struct ContradictionError {
    /// The cell that would be left without candidates.
    pub position: Position,
    /// The digits whose removal was attempted.
    pub digits: DigitSet,
}

/// Candidate state of the whole board: one 81-cell mask per digit.
///
/// `positions_of(d)` answers "which cells can still hold digit `d`?"; the
/// candidate set of a single cell is derived by probing all nine masks. The
/// 27 containers are mask intersections over the same state, so a mutation
/// made through any container view is immediately visible through all others.
///
/// Every cell keeps at least one candidate at all times. The rule-facing
/// mutators ([`eliminate`](Self::eliminate),
/// [`eliminate_digits`](Self::eliminate_digits), [`settle`](Self::settle))
/// enforce this and fail with [`ContradictionError`] instead of ever storing
/// an empty candidate set; candidate counts only ever shrink.
///
/// # Examples
///
/// ```
/// use nonagrid_core::{CandidateGrid, CellSet, Digit, Position};
///
/// let mut grid = CandidateGrid::new();
/// assert_eq!(grid.candidates_at(Position::new(0, 0)).len(), 9);
///
/// // Remove digit 5 from the whole first row.
/// let removed = grid.eliminate(CellSet::ROWS[0], Digit::D5)?;
/// assert_eq!(removed.len(), 9);
/// assert!(!grid.candidates_at(Position::new(0, 3)).contains(Digit::D5));
/// # Ok::<(), nonagrid_core::ContradictionError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateGrid {
    /// `placements[d]` holds the cells where digit `d` is still possible.
    placements: [CellSet; 9],
}

impl CandidateGrid {
    /// Creates a grid where every cell can hold every digit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            placements: [CellSet::ALL; 9],
        }
    }

    /// Creates a grid from given clues.
    ///
    /// Clue cells start as singletons and empty cells start with all nine
    /// candidates. No eliminations are propagated to the clues' peers; that
    /// is the deduction rules' job.
    #[must_use]
    pub fn from_digit_grid(grid: &DigitGrid) -> Self {
        let mut this = Self::new();
        for index in 0..81 {
            let pos = Position::from_index(index);
            if let Some(given) = grid.get(pos) {
                for digit in Digit::ALL {
                    if digit != given {
                        this.placements[digit.index()].remove(pos);
                    }
                }
            }
        }
        this
    }

    /// Returns a digit grid holding the settled cells; open cells stay empty.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in self.settled_cells() {
            grid.set(pos, self.candidates_at(pos).sole());
        }
        grid
    }

    /// The cells where `digit` is still a candidate.
    #[must_use]
    pub const fn positions_of(&self, digit: Digit) -> CellSet {
        self.placements[digit.index()]
    }

    /// The candidate set of a single cell.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        let mut candidates = DigitSet::EMPTY;
        for digit in Digit::ALL {
            if self.positions_of(digit).contains(pos) {
                candidates.insert(digit);
            }
        }
        candidates
    }

    /// House-local mask of the cells in `house` where `digit` can still go.
    ///
    /// A mask of length 2 is a conjugate pair; a mask of length 1 is a
    /// hidden single.
    #[must_use]
    pub fn house_mask(&self, house: House, digit: Digit) -> HouseMask {
        let cells = self.positions_of(digit) & house.cells();
        let mut mask = HouseMask::EMPTY;
        for i in 0..9 {
            if cells.contains(house.position_at(i)) {
                mask.insert(i);
            }
        }
        mask
    }

    /// The cells holding exactly one candidate.
    #[must_use]
    pub fn settled_cells(&self) -> CellSet {
        let [once, more, ..] = self.candidate_depth();
        once & !more
    }

    /// The cells still holding more than one candidate.
    #[must_use]
    pub fn unsettled_cells(&self) -> CellSet {
        !self.settled_cells()
    }

    /// The cells holding exactly two candidates.
    #[must_use]
    pub fn bivalue_cells(&self) -> CellSet {
        let [_, twice, thrice, ..] = self.candidate_depth();
        twice & !thrice
    }

    /// Returns `true` if every cell is settled.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.settled_cells() == CellSet::ALL
    }

    /// Removes `digit` as a candidate from every cell in `cells`.
    ///
    /// Returns the cells that actually changed (the subset of `cells` that
    /// still held the digit).
    ///
    /// # Errors
    ///
    /// Returns [`ContradictionError`] if any cell in `cells` is settled on
    /// `digit`: removing its only candidate is never legal.
    pub fn eliminate(&mut self, cells: CellSet, digit: Digit) -> Result<CellSet, ContradictionError> {
        let holders = self.positions_of(digit) & cells;
        if holders.is_empty() {
            return Ok(CellSet::EMPTY);
        }
        let doomed = holders & self.settled_cells();
        if let Some(position) = doomed.first() {
            return Err(ContradictionError {
                position,
                digits: DigitSet::only(digit),
            });
        }
        self.placements[digit.index()] = self.positions_of(digit).difference(cells);
        Ok(holders)
    }

    /// Removes several candidate digits from one cell.
    ///
    /// Returns the digits that actually were candidates there.
    ///
    /// # Errors
    ///
    /// Returns [`ContradictionError`] if the removal would leave the cell
    /// with no candidates.
    pub fn eliminate_digits(
        &mut self,
        pos: Position,
        digits: DigitSet,
    ) -> Result<DigitSet, ContradictionError> {
        let current = self.candidates_at(pos);
        let removed = current & digits;
        if removed.is_empty() {
            return Ok(DigitSet::EMPTY);
        }
        if current.difference(digits).is_empty() {
            return Err(ContradictionError {
                position: pos,
                digits: removed,
            });
        }
        for digit in removed {
            self.placements[digit.index()].remove(pos);
        }
        Ok(removed)
    }

    /// Reduces a cell to the single candidate `digit`.
    ///
    /// Returns the digits removed; empty if the cell was already settled on
    /// `digit`.
    ///
    /// # Errors
    ///
    /// Returns [`ContradictionError`] if `digit` is not currently a candidate
    /// of the cell: settling would have to discard every remaining candidate.
    pub fn settle(&mut self, pos: Position, digit: Digit) -> Result<DigitSet, ContradictionError> {
        let current = self.candidates_at(pos);
        if !current.contains(digit) {
            return Err(ContradictionError {
                position: pos,
                digits: current,
            });
        }
        self.eliminate_digits(pos, current.difference(DigitSet::only(digit)))
    }

    /// Removes a single candidate without contradiction checking.
    ///
    /// Low-level accessor for building grid states by hand (tests, loaders).
    /// Deduction code goes through the checked mutators instead; removing a
    /// cell's last candidate here breaks the grid invariant silently.
    pub fn remove_candidate(&mut self, pos: Position, digit: Digit) -> bool {
        self.placements[digit.index()].remove(pos)
    }

    /// Saturating per-cell candidate counters: cells with ≥1, ≥2, ≥3, and ≥4
    /// candidates.
    fn candidate_depth(&self) -> [CellSet; 4] {
        let mut layers = [CellSet::EMPTY; 4];
        for digit in Digit::ALL {
            let mask = self.positions_of(digit);
            layers[3] |= layers[2] & mask;
            layers[2] |= layers[1] & mask;
            layers[1] |= layers[0] & mask;
            layers[0] |= mask;
        }
        layers
    }
}

impl Default for CandidateGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&DigitGrid> for CandidateGrid {
    fn from(grid: &DigitGrid) -> Self {
        Self::from_digit_grid(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Digit::*;

    #[test]
    fn test_new_grid_is_unconstrained() {
        let grid = CandidateGrid::new();
        for digit in Digit::ALL {
            assert_eq!(grid.positions_of(digit), CellSet::ALL);
        }
        assert!(grid.settled_cells().is_empty());
        assert!(!grid.is_solved());
    }

    #[test]
    fn test_from_digit_grid_sets_singletons_without_propagation() {
        let mut givens = DigitGrid::new();
        givens.set(Position::new(0, 0), Some(D5));
        let grid = CandidateGrid::from_digit_grid(&givens);

        assert_eq!(grid.candidates_at(Position::new(0, 0)).sole(), Some(D5));
        // The clue's neighbors are untouched until rules run.
        assert_eq!(grid.candidates_at(Position::new(0, 1)).len(), 9);
        assert_eq!(grid.settled_cells(), CellSet::only(Position::new(0, 0)));
    }

    #[test]
    fn test_eliminate_reports_changed_cells() {
        let mut grid = CandidateGrid::new();
        let removed = grid.eliminate(CellSet::ROWS[2], D7).unwrap();
        assert_eq!(removed, CellSet::ROWS[2]);

        // A second elimination of the same digit changes nothing.
        let removed = grid.eliminate(CellSet::ROWS[2], D7).unwrap();
        assert!(removed.is_empty());
    }

    #[test]
    fn test_eliminate_refuses_to_empty_a_settled_cell() {
        let mut grid = CandidateGrid::new();
        let pos = Position::new(4, 4);
        grid.settle(pos, D3).unwrap();

        let err = grid.eliminate(CellSet::ROWS[4], D3).unwrap_err();
        assert_eq!(err.position, pos);
        assert_eq!(err.digits, DigitSet::only(D3));
        // The grid is untouched on failure.
        assert!(grid.candidates_at(pos).contains(D3));
    }

    #[test]
    fn test_eliminate_digits_refuses_to_empty_a_cell() {
        let mut grid = CandidateGrid::new();
        let pos = Position::new(1, 1);
        let err = grid.eliminate_digits(pos, DigitSet::ALL).unwrap_err();
        assert_eq!(err.position, pos);
        assert_eq!(grid.candidates_at(pos).len(), 9);
    }

    #[test]
    fn test_settle_and_refuse_foreign_digit() {
        let mut grid = CandidateGrid::new();
        let pos = Position::new(6, 2);
        let removed = grid.settle(pos, D9).unwrap();
        assert_eq!(removed.len(), 8);
        assert_eq!(grid.candidates_at(pos).sole(), Some(D9));

        // Settling again on the same digit is a no-op.
        assert!(grid.settle(pos, D9).unwrap().is_empty());

        // Settling on a digit that is no longer a candidate is a contradiction.
        let err = grid.settle(pos, D1).unwrap_err();
        assert_eq!(err.position, pos);
        assert_eq!(err.digits, DigitSet::only(D9));
    }

    #[test]
    fn test_bivalue_cells() {
        let mut grid = CandidateGrid::new();
        let pos = Position::new(3, 3);
        grid.eliminate_digits(pos, DigitSet::ALL.difference(DigitSet::from_iter([D4, D7])))
            .unwrap();
        assert_eq!(grid.bivalue_cells(), CellSet::only(pos));
    }

    #[test]
    fn test_house_mask() {
        let mut grid = CandidateGrid::new();
        for col in [1, 2, 3, 5, 6, 7, 8] {
            grid.remove_candidate(Position::new(0, col), D6);
        }
        let mask = grid.house_mask(House::Row(0), D6);
        assert_eq!(mask.as_pair(), Some((0, 4)));
    }

    #[test]
    fn test_round_trip_through_digit_grid() {
        let mut givens = DigitGrid::new();
        givens.set(Position::new(0, 0), Some(D1));
        givens.set(Position::new(8, 8), Some(D9));
        let grid = CandidateGrid::from_digit_grid(&givens);
        assert_eq!(grid.to_digit_grid(), givens);
    }
}
