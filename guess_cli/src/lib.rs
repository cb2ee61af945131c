//! # Guess CLI
//!
//! The console front end of the number guesser. It owns everything the
//! engine in `guess_core` deliberately leaves out: reading answers, printing
//! prompts, configuration, logging and process exit codes.
//!
//! ## Modules
//!
//! - **args**: command line flags
//! - **cancel**: Ctrl-C and the stdin reader thread
//! - **config**: TOML configuration merged with the flags
//! - **command**: the interactive question/answer loop
//! - **logging**: tracing subscriber setup

pub mod args;
pub mod cancel;
pub mod command;
pub mod config;
pub mod error;
pub mod logging;

pub use args::*;
pub use cancel::*;
pub use command::*;
pub use config::*;
pub use error::*;
