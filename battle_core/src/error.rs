//! Engine errors
//!
//! The engine never fails on malformed numeric input; every probability
//! and percentage is clamped at the point of use. The one hard failure
//! is an invalid context, which callers must not confuse with a
//! zero-damage outcome such as a miss or dodge.

use thiserror::Error;

/// Errors from combat resolution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombatError {
    /// A participant profile is absent or was never populated
    #[error("invalid battle context: {0}")]
    InvalidContext(&'static str),
}
