//! The 9×9 Sudoku grid.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Digit, Position};

/// A 9×9 Sudoku grid.
///
/// Each cell holds `Some(Digit)` or `None` for empty. The dimensions are
/// fixed: a grid is always exactly 9×9 and is created with every cell empty.
///
/// Grids are cheap to clone (81 bytes of cells), which the solver relies on
/// for validation scratch copies and hint trial boards.
///
/// # Grid literals
///
/// [`FromStr`] parses the textual format used throughout the tests and
/// examples: 81 significant characters in row-major order, where `1`-`9` are
/// digits and `.`, `_`, or `0` mark empty cells. All whitespace is ignored,
/// so literals can be laid out as nine rows with gaps between boxes:
///
/// ```
/// use gridlace_core::{Digit, Grid, Position};
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid[Position::new(2, 0)], None);
/// # Ok::<(), gridlace_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[Self::offset(pos)]
    }

    /// Returns the first empty cell in row-major order, or `None` when the
    /// grid is completely filled.
    ///
    /// The scan order (row 0 left to right, then row 1, ...) is part of the
    /// solver's contract: it determines which cell the search branches on
    /// and therefore which solution is found first and which cell a hint
    /// fills.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self[pos].is_none())
    }

    /// Returns `true` when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    fn offset(pos: Position) -> usize {
        usize::from(pos.y()) * 9 + usize::from(pos.x())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[Self::offset(pos)]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[Self::offset(pos)]
    }
}

/// Error parsing a grid literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The literal does not contain exactly 81 significant characters.
    #[display("expected 81 cells, found {_0}")]
    WrongLength(#[error(not(source))] usize),
    /// The literal contains a character that is neither a digit, an empty
    /// marker, nor whitespace.
    #[display("invalid cell character {_0:?}")]
    InvalidCharacter(#[error(not(source))] char),
}

impl FromStr for Grid {
    type Err = ParseGridError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut positions = Position::ALL.into_iter();
        let mut count = 0_usize;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            count += 1;
            let Some(pos) = positions.next() else {
                continue;
            };
            grid[pos] = match c {
                '.' | '_' | '0' => None,
                '1'..='9' => Digit::try_from_value(c as u8 - b'0'),
                _ => return Err(ParseGridError::InvalidCharacter(c)),
            };
        }
        if count != 81 {
            return Err(ParseGridError::WrongLength(count));
        }
        Ok(grid)
    }
}

impl Display for Grid {
    /// Formats the grid as 81 characters in row-major order, `.` for empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in Position::ALL {
            match self[pos] {
                Some(digit) => Display::fmt(&digit, f)?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}
