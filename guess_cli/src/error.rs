//! Front-end errors and process exit codes.

use std::io;
use std::path::PathBuf;

use guess_core::GuessError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed command line.
    #[error("{0}")]
    Usage(String),

    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The configured range cannot start a game.
    #[error(transparent)]
    Engine(#[from] GuessError),

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Errors the user can fix by changing flags or configuration.
    pub fn is_usage(&self) -> bool {
        !matches!(self, CliError::Io(_))
    }
}

/// How a session ended, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// The number was found.
    Success,
    /// The player's answers contradicted each other.
    Contradiction,
    /// Input ended or the player interrupted before the game did.
    Cancelled,
    /// Unexpected failure.
    Failure,
    /// Bad flags or configuration.
    Usage,
}

impl ExitStatus {
    pub fn code(&self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Contradiction => 2,
            ExitStatus::Usage => 64,
            ExitStatus::Cancelled => 130,
        }
    }

    /// Classify an error that ended the process, looking through any context.
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<CliError>() {
            Some(cli) if cli.is_usage() => ExitStatus::Usage,
            _ => ExitStatus::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_eq!(ExitStatus::Failure.code(), 1);
        assert_eq!(ExitStatus::Contradiction.code(), 2);
        assert_eq!(ExitStatus::Usage.code(), 64);
        assert_eq!(ExitStatus::Cancelled.code(), 130);
    }

    #[test]
    fn test_usage_errors() {
        assert!(CliError::Usage("bad".into()).is_usage());
        assert!(CliError::from(GuessError::InvalidRange { min: 5, max: 1 }).is_usage());
        assert!(CliError::ConfigRead {
            path: PathBuf::from("missing.toml"),
            source: io::Error::from(io::ErrorKind::NotFound),
        }
        .is_usage());
        assert!(!CliError::from(io::Error::other("closed")).is_usage());
    }

    #[test]
    fn test_status_for_wrapped_errors() {
        use anyhow::Context;

        let read: anyhow::Result<()> = Err(CliError::ConfigRead {
            path: PathBuf::from("missing.toml"),
            source: io::Error::from(io::ErrorKind::NotFound),
        })
        .context("failed to load configuration");
        assert_eq!(ExitStatus::for_error(&read.unwrap_err()), ExitStatus::Usage);

        let engine: anyhow::Result<()> =
            Err(CliError::from(GuessError::InvalidRange { min: 9, max: 1 }))
                .context("cannot start a game with this range");
        assert_eq!(ExitStatus::for_error(&engine.unwrap_err()), ExitStatus::Usage);

        let io_err: anyhow::Result<()> =
            Err(CliError::from(io::Error::other("broken pipe"))).context("game aborted");
        assert_eq!(ExitStatus::for_error(&io_err.unwrap_err()), ExitStatus::Failure);

        let foreign = anyhow::anyhow!("not a front-end error");
        assert_eq!(ExitStatus::for_error(&foreign), ExitStatus::Failure);
    }

    #[test]
    fn test_engine_error_is_transparent() {
        let err = CliError::from(GuessError::InvalidRange { min: 5, max: 1 });
        assert_eq!(
            err.to_string(),
            "min must be less than max (got min = 5, max = 1)"
        );
    }
}
