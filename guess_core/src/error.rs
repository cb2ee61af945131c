//! Errors raised when an engine is configured with an unusable range.

use thiserror::Error;

/// Configuration errors for [`GuessEngine`](crate::GuessEngine).
///
/// Bad player input is never an error; it is reported as
/// [`GuessOutcome::InvalidInput`](crate::GuessOutcome::InvalidInput).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("min must be less than max (got min = {min}, max = {max})")]
    InvalidRange { min: i64, max: i64 },

    #[error("first guess {seed} is outside the range [{min}, {max}]")]
    SeedOutOfRange { seed: i64, min: i64, max: i64 },
}

pub type Result<T> = std::result::Result<T, GuessError>;
