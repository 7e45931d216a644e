use gridlace_core::{Digit, Grid, Position};
use gridlace_solver::{SolverError, hint, solve, validate};

/// The mutable state behind the interactive form.
///
/// Holds the board, the error to show in the banner (if any), and whether
/// the board has been completed. All three live here, owned by the caller,
/// and are passed into the solver engine per call; the engine never retains
/// any of them.
///
/// Any single-cell edit dismisses the banner and clears the solved flag,
/// since the edit invalidates whatever the last action established.
///
/// # Example
///
/// ```
/// use gridlace_core::{Digit, Position};
/// use gridlace_game::Session;
///
/// let mut session = Session::new();
/// session.set_cell(Position::new(0, 0), Digit::D5);
///
/// assert!(session.solve());
/// assert!(session.is_solved());
/// assert_eq!(session.cell(Position::new(0, 0)), Some(Digit::D5));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    grid: Grid,
    message: Option<SolverError>,
    solved: bool,
}

impl Session {
    /// Creates a session with an empty board, no banner, and the solved
    /// flag unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Digit> {
        self.grid.get(pos)
    }

    /// Returns whether the last action left the board complete and valid.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Returns the error to surface in the banner, if any.
    ///
    /// The banner text is the error's `Display` form; no further detail is
    /// available by design.
    #[must_use]
    pub fn message(&self) -> Option<SolverError> {
        self.message
    }

    /// Enters a digit at `pos`, replacing whatever the cell held.
    ///
    /// Out-of-range input never reaches the session: [`Digit`] cannot hold
    /// anything outside 1-9, which is the input filtering the form needs.
    pub fn set_cell(&mut self, pos: Position, digit: Digit) {
        self.grid[pos] = Some(digit);
        self.reset_flags();
    }

    /// Empties the cell at `pos`.
    pub fn clear_cell(&mut self, pos: Position) {
        self.grid[pos] = None;
        self.reset_flags();
    }

    /// Resets the whole session: empty board, no banner, not solved.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Checks the board against the Sudoku constraints.
    ///
    /// On success the banner is dismissed; on failure it carries
    /// [`SolverError::InvalidBoard`]. The board itself is never changed.
    /// Returns `true` when the board is consistent.
    pub fn validate(&mut self) -> bool {
        match validate(&self.grid) {
            Ok(()) => {
                self.message = None;
                true
            }
            Err(err) => {
                self.message = Some(err);
                false
            }
        }
    }

    /// Solves the whole board in place.
    ///
    /// Validates first and bails without searching when the board is
    /// inconsistent. On success the board is complete and the solved flag
    /// is set; on failure the board is untouched and the banner carries the
    /// error. Returns `true` on success.
    pub fn solve(&mut self) -> bool {
        if !self.validate() {
            return false;
        }
        match solve(&mut self.grid) {
            Ok(()) => {
                self.solved = true;
                self.message = None;
                true
            }
            Err(err) => {
                self.message = Some(err);
                false
            }
        }
    }

    /// Fills a single cell without revealing the rest of the solution.
    ///
    /// Validates first, like [`solve`](Self::solve). A board with no empty
    /// cell is a quiet no-op. The solved flag is set when the hint
    /// completes the board. Returns `true` unless validation or the hint
    /// search failed.
    pub fn hint(&mut self) -> bool {
        if !self.validate() {
            return false;
        }
        match hint(&mut self.grid) {
            Ok(_) => {
                self.solved = self.grid.is_full();
                self.message = None;
                true
            }
            Err(err) => {
                self.message = Some(err);
                false
            }
        }
    }

    fn reset_flags(&mut self) {
        self.message = None;
        self.solved = false;
    }
}
