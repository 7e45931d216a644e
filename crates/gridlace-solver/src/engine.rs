//! The constraint checker and backtracking search.
//!
//! The search is plain depth-first backtracking over the first empty cell
//! (row-major) with candidates tried in ascending order, pruned only by the
//! row/column/box constraint check. There is no candidate bookkeeping and
//! no human-style technique machinery; on a 9×9 board this is the complete
//! algorithm.
//!
//! All operations run synchronously to completion on the caller's thread.
//! Recursion depth is bounded by the 81 cells of the board.

use gridlace_core::{Digit, Grid, Position};

use crate::SolverError;

/// A single digit assigned to a single cell.
///
/// Returned by [`hint`] to report which cell it filled and with what.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// The cell the digit was placed in.
    pub position: Position,
    /// The digit placed there.
    pub digit: Digit,
}

/// Returns whether `digit` can be placed at `pos` without violating a row,
/// column, or box constraint.
///
/// The scan covers the target cell itself: callers must treat `pos` as
/// empty during the check (clearing it first if it currently holds
/// `digit`), otherwise the value collides with itself. [`validate`] relies
/// on exactly this contract when re-checking occupied cells.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Digit, Grid, Position};
/// use gridlace_solver::is_valid_placement;
///
/// let mut grid = Grid::new();
/// grid[Position::new(0, 0)] = Some(Digit::D5);
///
/// // 5 is taken in row 0, column 0, and the top-left box
/// assert!(!is_valid_placement(&grid, Position::new(8, 0), Digit::D5));
/// assert!(!is_valid_placement(&grid, Position::new(0, 8), Digit::D5));
/// assert!(!is_valid_placement(&grid, Position::new(2, 2), Digit::D5));
///
/// // but an unrelated cell and digit are fine
/// assert!(is_valid_placement(&grid, Position::new(4, 4), Digit::D5));
/// assert!(is_valid_placement(&grid, Position::new(2, 2), Digit::D6));
/// ```
#[must_use]
pub fn is_valid_placement(grid: &Grid, pos: Position, digit: Digit) -> bool {
    for p in pos.row_positions() {
        if grid[p] == Some(digit) {
            return false;
        }
    }
    for p in pos.column_positions() {
        if grid[p] == Some(digit) {
            return false;
        }
    }
    for p in pos.box_positions() {
        if grid[p] == Some(digit) {
            return false;
        }
    }
    true
}

/// Checks that every occupied cell is consistent with all other occupied
/// cells.
///
/// Each occupied cell is temporarily cleared on a scratch copy and
/// re-checked against its own value, so a cell never flags itself as its
/// own duplicate. The check is fail-fast: the first inconsistent cell ends
/// the scan. The caller's grid is never mutated.
///
/// Empty cells are ignored, so a partially filled (or completely empty)
/// grid with no duplicates is valid.
///
/// # Errors
///
/// Returns [`SolverError::InvalidBoard`] if any occupied cell duplicates a
/// digit in its row, column, or box. No detail about the offending cell is
/// carried.
pub fn validate(grid: &Grid) -> Result<(), SolverError> {
    let mut scratch = grid.clone();
    for pos in Position::ALL {
        if let Some(digit) = scratch[pos] {
            scratch[pos] = None;
            if !is_valid_placement(&scratch, pos, digit) {
                return Err(SolverError::InvalidBoard);
            }
            scratch[pos] = Some(digit);
        }
    }
    Ok(())
}

/// Fills every empty cell of `grid` so that all row, column, and box
/// constraints hold.
///
/// The search is depth-first backtracking: branch on the first empty cell
/// in row-major order, try candidates in ascending order, and undo a
/// placement as soon as it cannot be completed. The first solution found
/// wins; the search never continues past it, so the result is
/// deterministic for a given input.
///
/// The grid is assumed to be valid already; run [`validate`] first when
/// that is not known. An already-full grid succeeds immediately without
/// touching any cell.
///
/// # Errors
///
/// Returns [`SolverError::NoSolution`] when no complete assignment exists.
/// In that case every tentative placement has been undone and the grid is
/// exactly as it was before the call.
///
/// # Examples
///
/// ```
/// use gridlace_core::Grid;
/// use gridlace_solver::solve;
///
/// // The empty board always has a solution
/// let mut grid = Grid::new();
/// solve(&mut grid)?;
/// assert!(grid.is_full());
/// # Ok::<(), gridlace_solver::SolverError>(())
/// ```
pub fn solve(grid: &mut Grid) -> Result<(), SolverError> {
    if solve_from(grid) {
        Ok(())
    } else {
        Err(SolverError::NoSolution)
    }
}

/// Recursive worker for [`solve`]; `true` when the grid has been completed.
fn solve_from(grid: &mut Grid) -> bool {
    let Some(pos) = grid.first_empty() else {
        return true;
    };
    for digit in Digit::ALL {
        if is_valid_placement(grid, pos, digit) {
            grid[pos] = Some(digit);
            if solve_from(grid) {
                return true;
            }
            grid[pos] = None;
        }
    }
    false
}

/// Fills in the next cell of `grid` without revealing the rest of the
/// solution.
///
/// The first empty cell (row-major) receives the smallest digit that both
/// passes the constraint check and provably leads to a complete solution.
/// The proof runs on a trial copy of the grid, so nothing but that one
/// cell changes on the real board.
///
/// Returns `Ok(None)` when the grid has no empty cell left; a complete
/// board has nothing to hint.
///
/// # Errors
///
/// Returns [`SolverError::InvalidBoard`] if the grid fails [`validate`],
/// and [`SolverError::NoSolution`] if no candidate for the cell leads to a
/// solvable continuation. The grid is untouched in both cases.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Digit, Grid, Position};
/// use gridlace_solver::hint;
///
/// let mut grid = Grid::new();
/// let placement = hint(&mut grid)?.expect("empty board has empty cells");
/// assert_eq!(placement.position, Position::new(0, 0));
/// assert_eq!(grid[placement.position], Some(placement.digit));
/// # Ok::<(), gridlace_solver::SolverError>(())
/// ```
pub fn hint(grid: &mut Grid) -> Result<Option<Placement>, SolverError> {
    validate(grid)?;
    let Some(pos) = grid.first_empty() else {
        return Ok(None);
    };
    for digit in Digit::ALL {
        if !is_valid_placement(grid, pos, digit) {
            continue;
        }
        let mut trial = grid.clone();
        trial[pos] = Some(digit);
        if solve(&mut trial).is_ok() {
            grid[pos] = Some(digit);
            return Ok(Some(Placement {
                position: pos,
                digit,
            }));
        }
    }
    Err(SolverError::NoSolution)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The reference puzzle used across the test suite; it has a unique
    /// solution, so the solver's output can be compared exactly.
    const PUZZLE: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    /// Valid but unsolvable: (7, 0) can only take 8 (9 is blocked by the
    /// column-7 nine), after which (8, 0) has no candidate left (9 is
    /// blocked by the column-8 nine). The dead end is only reached after a
    /// tentative placement, exercising the backtracking undo.
    const UNSOLVABLE: &str = "
        123 456 7__
        ___ ___ ___
        ___ ___ ___
        ___ ___ _9_
        ___ ___ ___
        ___ ___ ___
        ___ ___ __9
        ___ ___ ___
        ___ ___ ___
    ";

    /// Valid but unsolvable without any tentative placement: (8, 0) must
    /// take 9, which the column-8 nine forbids.
    const DEAD_CELL: &str = "
        123 456 78_
        ___ ___ __9
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
    ";

    fn grid(literal: &str) -> Grid {
        literal.parse().unwrap()
    }

    /// Asserts the strong completion property: every row, column, and box
    /// contains each of 1-9 exactly once.
    fn assert_solved(grid: &Grid) {
        for i in 0..9 {
            assert_unit(grid, Position::new(0, i).row_positions(), "row", i);
            assert_unit(grid, Position::new(i, 0).column_positions(), "column", i);
            let origin = Position::new(i % 3 * 3, i / 3 * 3);
            assert_unit(grid, origin.box_positions(), "box", i);
        }
    }

    fn assert_unit(grid: &Grid, unit: impl Iterator<Item = Position>, kind: &str, i: u8) {
        let mut values: Vec<u8> = unit
            .map(|pos| {
                grid[pos]
                    .unwrap_or_else(|| panic!("{kind} {i} has an empty cell"))
                    .value()
            })
            .collect();
        values.sort_unstable();
        assert_eq!(values, (1..=9).collect::<Vec<_>>(), "{kind} {i}");
    }

    #[test]
    fn placement_allowed_anywhere_on_empty_grid() {
        let grid = Grid::new();
        for pos in [Position::new(0, 0), Position::new(4, 4), Position::new(8, 8)] {
            for digit in Digit::ALL {
                assert!(is_valid_placement(&grid, pos, digit));
            }
        }
    }

    #[test]
    fn placement_rejected_on_row_column_and_box_conflicts() {
        let mut board = Grid::new();
        board[Position::new(4, 4)] = Some(Digit::D7);

        // Same row, same column, same box
        assert!(!is_valid_placement(&board, Position::new(0, 4), Digit::D7));
        assert!(!is_valid_placement(&board, Position::new(4, 0), Digit::D7));
        assert!(!is_valid_placement(&board, Position::new(3, 5), Digit::D7));

        // A different digit, or a cell sharing no unit, is unaffected
        assert!(is_valid_placement(&board, Position::new(0, 4), Digit::D6));
        assert!(is_valid_placement(&board, Position::new(0, 0), Digit::D7));
    }

    #[test]
    fn placement_scans_the_target_cell_too() {
        let mut board = Grid::new();
        let pos = Position::new(2, 6);
        board[pos] = Some(Digit::D3);

        // An occupied cell collides with its own value until cleared
        assert!(!is_valid_placement(&board, pos, Digit::D3));
        board[pos] = None;
        assert!(is_valid_placement(&board, pos, Digit::D3));
    }

    #[test]
    fn validate_accepts_empty_partial_and_full_grids() {
        assert_eq!(validate(&Grid::new()), Ok(()));
        assert_eq!(validate(&grid(PUZZLE)), Ok(()));
        assert_eq!(validate(&grid(SOLUTION)), Ok(()));
    }

    #[test]
    fn validate_rejects_duplicate_in_row() {
        // Two fives in row 0
        let board = grid(&format!("5___5____{}", "_".repeat(72)));
        assert_eq!(validate(&board), Err(SolverError::InvalidBoard));
    }

    #[test]
    fn validate_rejects_duplicate_in_column() {
        let mut board = Grid::new();
        board[Position::new(3, 0)] = Some(Digit::D2);
        board[Position::new(3, 8)] = Some(Digit::D2);
        assert_eq!(validate(&board), Err(SolverError::InvalidBoard));
    }

    #[test]
    fn validate_rejects_duplicate_in_box() {
        let mut board = Grid::new();
        board[Position::new(0, 0)] = Some(Digit::D9);
        board[Position::new(2, 2)] = Some(Digit::D9);
        assert_eq!(validate(&board), Err(SolverError::InvalidBoard));
    }

    #[test]
    fn validate_is_idempotent() {
        let valid = grid(PUZZLE);
        let invalid = grid(&format!("55{}", "_".repeat(79)));
        for _ in 0..3 {
            assert_eq!(validate(&valid), Ok(()));
            assert_eq!(validate(&invalid), Err(SolverError::InvalidBoard));
        }
    }

    #[test]
    fn solve_finds_the_reference_solution() {
        let mut board = grid(PUZZLE);
        let before = board.clone();

        assert_eq!(solve(&mut board), Ok(()));
        assert_eq!(board, grid(SOLUTION));
        assert_solved(&board);

        // Every originally occupied cell keeps its value
        for pos in Position::ALL {
            if let Some(digit) = before[pos] {
                assert_eq!(board[pos], Some(digit));
            }
        }
    }

    #[test]
    fn solve_on_full_grid_succeeds_without_mutation() {
        let mut board = grid(SOLUTION);
        let before = board.clone();
        assert_eq!(solve(&mut board), Ok(()));
        assert_eq!(board, before);
    }

    #[test]
    fn solve_fills_the_empty_grid() {
        let mut board = Grid::new();
        assert_eq!(solve(&mut board), Ok(()));
        assert_solved(&board);
    }

    #[test]
    fn solve_fills_a_single_empty_cell_with_the_forced_value() {
        let mut board = grid(SOLUTION);
        let pos = Position::new(0, 0);
        let forced = board[pos].take().unwrap();

        assert_eq!(solve(&mut board), Ok(()));
        assert_eq!(board[pos], Some(forced));
        assert_eq!(board, grid(SOLUTION));
    }

    #[test]
    fn solve_failure_restores_the_grid_exactly() {
        for literal in [UNSOLVABLE, DEAD_CELL] {
            let mut board = grid(literal);
            assert_eq!(validate(&board), Ok(()), "fixture must be valid");
            let before = board.clone();
            assert_eq!(solve(&mut board), Err(SolverError::NoSolution));
            assert_eq!(board, before);
        }
    }

    #[test]
    fn hint_commits_the_first_provably_solvable_candidate() {
        let mut board = grid(PUZZLE);
        let before = board.clone();

        let placement = hint(&mut board).unwrap().unwrap();

        // First empty cell of the reference puzzle, and (because the
        // solution is unique) its solution digit
        assert_eq!(placement.position, Position::new(2, 0));
        assert_eq!(placement.digit, Digit::D4);

        // Exactly that one cell changed
        for pos in Position::ALL {
            if pos == placement.position {
                assert_eq!(board[pos], Some(placement.digit));
            } else {
                assert_eq!(board[pos], before[pos]);
            }
        }

        // The board stays solvable after the hint
        assert_eq!(solve(&mut board), Ok(()));
    }

    #[test]
    fn hint_on_empty_grid_places_one_in_the_corner() {
        let mut board = Grid::new();
        let placement = hint(&mut board).unwrap().unwrap();
        assert_eq!(
            placement,
            Placement {
                position: Position::new(0, 0),
                digit: Digit::D1,
            }
        );
    }

    #[test]
    fn hint_on_full_grid_is_a_no_op() {
        let mut board = grid(SOLUTION);
        assert_eq!(hint(&mut board), Ok(None));
        assert_eq!(board, grid(SOLUTION));
    }

    #[test]
    fn hint_on_invalid_board_reports_invalid_board() {
        let mut board = grid(&format!("5___5____{}", "_".repeat(72)));
        let before = board.clone();
        assert_eq!(hint(&mut board), Err(SolverError::InvalidBoard));
        assert_eq!(board, before);
    }

    #[test]
    fn hint_unsolvable_board_reports_no_solution() {
        // Both fixtures: one fails before any candidate passes the check,
        // the other fails in the trial solve after a candidate passes
        for literal in [DEAD_CELL, UNSOLVABLE] {
            let mut board = grid(literal);
            let before = board.clone();
            assert_eq!(hint(&mut board), Err(SolverError::NoSolution));
            assert_eq!(board, before);
        }
    }

    mod props {
        use proptest::prelude::*;

        use super::*;

        fn masked_solution(mask: &[bool]) -> Grid {
            let mut board = grid(SOLUTION);
            for (pos, &clear) in Position::ALL.into_iter().zip(mask) {
                if clear {
                    board[pos] = None;
                }
            }
            board
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn cleared_solution_grids_validate_and_solve(
                mask in prop::collection::vec(any::<bool>(), 81)
            ) {
                let mut board = masked_solution(&mask);
                prop_assert_eq!(validate(&board), Ok(()));

                let before = board.clone();
                prop_assert_eq!(solve(&mut board), Ok(()));
                prop_assert!(board.is_full());
                prop_assert_eq!(validate(&board), Ok(()));

                // Solving never rewrites an occupied cell
                for pos in Position::ALL {
                    if let Some(digit) = before[pos] {
                        prop_assert_eq!(board[pos], Some(digit));
                    }
                }
            }

            #[test]
            fn hint_fills_exactly_one_cell_and_keeps_the_grid_solvable(
                mask in prop::collection::vec(any::<bool>(), 81)
                    .prop_filter("needs an empty cell", |mask| mask.contains(&true))
            ) {
                let mut board = masked_solution(&mask);
                let before = board.clone();

                let placement = hint(&mut board).unwrap().unwrap();
                prop_assert_eq!(before[placement.position], None);
                prop_assert_eq!(board[placement.position], Some(placement.digit));

                let changed = Position::ALL
                    .into_iter()
                    .filter(|&pos| board[pos] != before[pos])
                    .count();
                prop_assert_eq!(changed, 1);

                prop_assert_eq!(solve(&mut board), Ok(()));
            }
        }
    }
}
