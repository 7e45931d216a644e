//! Board validation and backtracking search for the Gridlace Sudoku form.
//!
//! The engine exposes four operations layered on the shared
//! [`Grid`](gridlace_core::Grid) type:
//!
//! - [`is_valid_placement`]: does a digit fit at a cell without violating a
//!   row, column, or box constraint?
//! - [`validate`]: are the currently occupied cells consistent with each
//!   other?
//! - [`solve`]: fill every empty cell by depth-first backtracking.
//! - [`hint`]: fill exactly one cell, proving first that the rest of the
//!   board remains solvable.
//!
//! Every operation is a plain synchronous function; the engine holds no
//! state of its own and never retains the grid between calls.
//!
//! # Examples
//!
//! ```
//! use gridlace_core::Grid;
//! use gridlace_solver::{solve, validate};
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
//! validate(&grid)?;
//! solve(&mut grid)?;
//! assert!(grid.is_full());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{engine::*, error::*};

mod engine;
mod error;
