//! # Guess Core
//!
//! The rules of the number guessing game. The player thinks of a number, the
//! engine offers the midpoint of what is still possible and narrows the range
//! from the player's answers.
//! This crate holds no I/O; a front end reads answers and prints outcomes.

pub mod engine;
pub mod error;
pub mod response;
pub mod session;

pub use engine::*;
pub use error::*;
pub use response::*;
pub use session::*;
