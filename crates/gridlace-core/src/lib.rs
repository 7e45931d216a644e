//! Core data structures for the Gridlace Sudoku form.
//!
//! This crate provides the grid representation shared by the solver engine
//! and the form session: a fixed 9×9 board of optional digits, addressed by
//! typed positions.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of Sudoku digits 1-9
//! - [`position`]: Board coordinates (x, y) with the row-major scan order
//!   the solver depends on
//! - [`grid`]: The 9×9 board itself, including the textual grid-literal
//!   format used in tests and examples
//!
//! The grid is always owned by the caller. Solver operations borrow it for
//! the duration of a call and never retain it, so there is no shared state
//! to coordinate between calls.
//!
//! # Examples
//!
//! ```
//! use gridlace_core::{Digit, Grid, Position};
//!
//! let mut grid: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
//! assert_eq!(grid.first_empty(), Some(Position::new(2, 0)));
//!
//! grid[Position::new(2, 0)] = Some(Digit::D4);
//! assert_eq!(grid.first_empty(), Some(Position::new(3, 0)));
//! # Ok::<(), gridlace_core::ParseGridError>(())
//! ```

pub mod digit;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    grid::{Grid, ParseGridError},
    position::Position,
};
