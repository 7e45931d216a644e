//! Caller-owned session state for the Gridlace Sudoku form.
//!
//! A [`Session`] bundles everything the interactive form displays: the
//! board itself, the single generic error banner, and the solved flag. The
//! rendering layer owns the session and drives it through cell edits and
//! the four user actions (validate, solve, hint, clear); the solver engine
//! itself stays stateless.

pub use self::session::Session;

mod session;
