//! Solver error types.

/// Errors reported by the solver engine.
///
/// Both outcomes are terminal: the engine never retries, never logs, and
/// carries no detail beyond the kind of failure. The calling layer decides
/// how to surface them; the form shows a single generic banner either way.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum SolverError {
    /// The occupied cells violate a row, column, or box constraint against
    /// each other.
    ///
    /// Carries no offending cell or rule; the form reports validation
    /// failure as a single message, and validation stops at the first
    /// inconsistent cell.
    #[display("invalid board configuration")]
    InvalidBoard,
    /// Backtracking exhausted the entire search space without completing
    /// the grid.
    #[display("no solution exists")]
    NoSolution,
}
