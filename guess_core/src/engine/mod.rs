//! The guessing engine - a binary search driven by the player's answers.
//!
//! The engine keeps the closed range `[min, max]` of numbers the player could
//! still be thinking of and always offers its midpoint:
//! 1. **Guess**: offer `(min + max) / 2` (truncating division)
//! 2. **Answer**: the player says correct, higher or lower
//! 3. **Narrow**: move `min` above or `max` below the rejected guess
//! 4. **Check**: an empty range means the answers contradict each other

mod outcome;

#[cfg(test)]
mod proptests;

pub use outcome::*;

use serde::{Deserialize, Serialize};

use crate::error::{GuessError, Result};
use crate::response::Response;

/// Default lower bound of a new game.
pub const DEFAULT_MIN: i64 = 0;

/// Default upper bound of a new game.
pub const DEFAULT_MAX: i64 = 100;

/// Bounded-search state for one game.
///
/// All mutation goes through [`process_guess_response`](Self::process_guess_response),
/// [`process_direction_response`](Self::process_direction_response) and
/// [`reset`](Self::reset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessEngine {
    /// Inclusive lower bound.
    min: i64,
    /// Inclusive upper bound.
    max: i64,
    /// The number currently offered to the player. Stale once `ended` is set.
    current_guess: i64,
    ended: bool,
}

impl GuessEngine {
    /// Create an engine for the range `[min, max]`, opening with the midpoint.
    pub fn new(min: i64, max: i64) -> Result<Self> {
        check_range(min, max)?;
        Ok(Self {
            min,
            max,
            current_guess: midpoint(min, max),
            ended: false,
        })
    }

    /// Create an engine whose first guess is `first_guess` instead of the midpoint.
    ///
    /// Later guesses are midpoints as usual. The older console game always
    /// opened with 64 on `[0, 100]`; this reproduces that opening.
    pub fn with_first_guess(min: i64, max: i64, first_guess: i64) -> Result<Self> {
        check_range(min, max)?;
        if !(min..=max).contains(&first_guess) {
            return Err(GuessError::SeedOutOfRange {
                seed: first_guess,
                min,
                max,
            });
        }
        Ok(Self {
            min,
            max,
            current_guess: first_guess,
            ended: false,
        })
    }

    /// Start over on a fresh range. On error the current state is kept.
    pub fn reset(&mut self, min: i64, max: i64) -> Result<()> {
        check_range(min, max)?;
        self.min = min;
        self.max = max;
        self.current_guess = midpoint(min, max);
        self.ended = false;
        Ok(())
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn current_guess(&self) -> i64 {
        self.current_guess
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Number of candidates still in range; zero once the range is empty.
    pub fn remaining(&self) -> u128 {
        if self.min > self.max {
            0
        } else {
            (self.max as i128 - self.min as i128 + 1) as u128
        }
    }

    /// Handle the answer to "is this your number?".
    ///
    /// Accepts both the combined `C`/`H`/`L` tokens and the legacy `Y`/`N`.
    /// A bare `N` yields [`GuessOutcome::InvalidInput`] without changing
    /// anything: the caller is expected to follow up with
    /// [`process_direction_response`](Self::process_direction_response).
    pub fn process_guess_response(&mut self, text: &str) -> GuessOutcome {
        if self.ended {
            return GuessOutcome::Correct;
        }

        let response = Response::parse(text);
        if response.is_confirmation() {
            self.ended = true;
            return GuessOutcome::Correct;
        }

        match response {
            Response::Higher => self.narrow_up(),
            Response::Lower => self.narrow_down(),
            _ => GuessOutcome::InvalidInput,
        }
    }

    /// Handle the answer to "is your number higher or lower?".
    pub fn process_direction_response(&mut self, text: &str) -> GuessOutcome {
        if self.ended {
            return GuessOutcome::Correct;
        }

        match Response::parse(text) {
            Response::Higher => self.narrow_up(),
            Response::Lower => self.narrow_down(),
            _ => GuessOutcome::InvalidInput,
        }
    }

    /// The hidden number is above the current guess.
    fn narrow_up(&mut self) -> GuessOutcome {
        match self.current_guess.checked_add(1) {
            Some(min) => {
                self.min = min;
                self.reguess()
            }
            None => self.contradiction(),
        }
    }

    /// The hidden number is below the current guess.
    fn narrow_down(&mut self) -> GuessOutcome {
        match self.current_guess.checked_sub(1) {
            Some(max) => {
                self.max = max;
                self.reguess()
            }
            None => self.contradiction(),
        }
    }

    fn reguess(&mut self) -> GuessOutcome {
        if self.min > self.max {
            return self.contradiction();
        }

        self.current_guess = midpoint(self.min, self.max);
        GuessOutcome::Continue
    }

    fn contradiction(&mut self) -> GuessOutcome {
        self.ended = true;
        GuessOutcome::ImpossibleState
    }
}

impl Default for GuessEngine {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            current_guess: midpoint(DEFAULT_MIN, DEFAULT_MAX),
            ended: false,
        }
    }
}

fn check_range(min: i64, max: i64) -> Result<()> {
    if min >= max {
        return Err(GuessError::InvalidRange { min, max });
    }
    Ok(())
}

/// `(min + max) / 2`, truncating toward zero, without overflowing.
fn midpoint(min: i64, max: i64) -> i64 {
    ((min as i128 + max as i128) / 2) as i64
}
