//! Command line flags.

use std::path::PathBuf;

use crate::error::CliError;

pub const USAGE: &str = "\
Usage: guess [OPTIONS]

Think of a number and answer my guesses until I find it.

Options:
  --min <N>            Lower bound of the range (default 0)
  --max <N>            Upper bound of the range (default 100)
  --first-guess <N>    Open with this guess instead of the midpoint
  --legacy             Ask Y/N, then higher/lower, instead of C/L/H
  --config <PATH>      Read settings from a TOML file (or set GUESS_CONFIG)
  --diagnostic         Verbose logging and full error details
  -h, --help           Print this help";

/// Parsed flags. `None` means "not given": the config file or default applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub first_guess: Option<i64>,
    pub legacy: bool,
    pub config: Option<PathBuf>,
    pub diagnostic: bool,
    pub help: bool,
}

impl Args {
    /// Parse flags, excluding the program name.
    ///
    /// Values may follow as the next argument or be attached with `=`.
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Args::default();
        let mut iter = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = iter.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => {
                    (flag.to_string(), Some(value.to_string()))
                }
                _ => (arg.clone(), None),
            };

            let mut value = |name: &str| -> Result<String, CliError> {
                inline
                    .clone()
                    .or_else(|| iter.next())
                    .ok_or_else(|| CliError::Usage(format!("missing value for {}", name)))
            };

            match flag.as_str() {
                "--min" => parsed.min = Some(parse_number("--min", &value("--min")?)?),
                "--max" => parsed.max = Some(parse_number("--max", &value("--max")?)?),
                "--first-guess" => {
                    parsed.first_guess =
                        Some(parse_number("--first-guess", &value("--first-guess")?)?)
                }
                "--config" => parsed.config = Some(PathBuf::from(value("--config")?)),
                "--legacy" => parsed.legacy = true,
                "--diagnostic" => parsed.diagnostic = true,
                "-h" | "--help" => parsed.help = true,
                other => return Err(CliError::Usage(format!("unknown argument '{}'", other))),
            }
        }

        Ok(parsed)
    }
}

fn parse_number(flag: &str, text: &str) -> Result<i64, CliError> {
    text.trim()
        .parse()
        .map_err(|_| CliError::Usage(format!("{} expects an integer, got '{}'", flag, text)))
}
