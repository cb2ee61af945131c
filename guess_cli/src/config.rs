//! Game configuration, read from TOML and overridden by flags.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use guess_core::{GuessEngine, GuessError, DEFAULT_MAX, DEFAULT_MIN};
use serde::{Deserialize, Serialize};

use crate::args::Args;
use crate::error::CliError;

/// The documented default config, shipped next to the binary's sources.
pub static DEFAULT_CONFIG: &str = include_str!("../default_config/guess.toml");

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV: &str = "GUESS_CONFIG";

/// Which wording the console uses. Both accept every token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// One prompt answered with `C`, `L` or `H`.
    #[default]
    Combined,
    /// `Y` / `N`, then a higher-or-lower question.
    Legacy,
}

/// Log levels, most verbose first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Level {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl Level {
    pub fn as_tracing_level(&self) -> tracing::Level {
        match self {
            Level::Trace => tracing::Level::TRACE,
            Level::Debug => tracing::Level::DEBUG,
            Level::Info => tracing::Level::INFO,
            Level::Warn => tracing::Level::WARN,
            Level::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LogConfig {
    pub max_level: Level,
}

/// Everything needed to start a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub min: i64,
    pub max: i64,
    /// Opening guess; the midpoint when absent.
    pub first_guess: Option<i64>,
    pub protocol: Protocol,
    pub log: LogConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            first_guess: None,
            protocol: Protocol::Combined,
            log: LogConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read a TOML config file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build the effective configuration: file (flag, then `env_path`), then flags.
    pub fn resolve(args: &Args, env_path: Option<OsString>) -> Result<Self, CliError> {
        let path = args
            .config
            .clone()
            .or_else(|| env_path.filter(|p| !p.is_empty()).map(PathBuf::from));

        let mut config = match path {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };
        config.apply_args(args);
        Ok(config)
    }

    /// Let flags override file values.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(min) = args.min {
            self.min = min;
        }
        if let Some(max) = args.max {
            self.max = max;
        }
        if args.first_guess.is_some() {
            self.first_guess = args.first_guess;
        }
        if args.legacy {
            self.protocol = Protocol::Legacy;
        }
        // --diagnostic only ever makes logging more verbose.
        if args.diagnostic && self.log.max_level > Level::Debug {
            self.log.max_level = Level::Debug;
        }
    }

    /// Construct the engine this configuration describes.
    pub fn build_engine(&self) -> Result<GuessEngine, GuessError> {
        match self.first_guess {
            Some(seed) => GuessEngine::with_first_guess(self.min, self.max, seed),
            None => GuessEngine::new(self.min, self.max),
        }
    }
}
