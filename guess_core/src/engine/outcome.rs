//! Outcome of processing one player answer.

use serde::{Deserialize, Serialize};

/// What the engine concluded from an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The guess was confirmed, or the game had already ended.
    Correct,
    /// The answer was not understood (or was a bare legacy `N`); nothing changed.
    InvalidInput,
    /// The answers contradict each other; no integer is left in range.
    ImpossibleState,
    /// The range was narrowed and a new guess is ready.
    Continue,
}

impl GuessOutcome {
    /// Whether the game is over after this outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GuessOutcome::Correct | GuessOutcome::ImpossibleState)
    }
}
