//! The interactive loop: print a guess, read an answer, feed it to the engine.

use std::io::{self, Write};

use guess_core::{GuessEngine, GuessOutcome, Response, SessionId};
use tracing::{debug, info, info_span, warn};

use crate::cancel::{CancelToken, LineSource};
use crate::config::Protocol;
use crate::error::{CliError, ExitStatus};

const DIRECTION_QUESTION: &str = "Is your number higher (H) or lower (L) than my guess?";
const DIRECTION_HINT: &str = "Please enter 'H' for higher or 'L' for lower.";
const CONTRADICTION: &str =
    "It seems there might be an error - are you sure about your responses?";
const CANCELLED: &str = "Game cancelled by user.";
const COMBINED_RULES: &str = "Answer with 'C' if my guess is correct, \
    'L' if your number is lower, or 'H' if your number is higher.";
const COMBINED_HINT: &str = "Please enter 'C' if correct, \
    'L' if your number is lower, or 'H' if your number is higher.";

/// One game session over a reader and a writer.
pub struct GuessCommand<R, W> {
    engine: GuessEngine,
    protocol: Protocol,
    session: SessionId,
    diagnostic: bool,
    cancel: CancelToken,
    input: R,
    output: W,
}

impl<R: LineSource, W: Write> GuessCommand<R, W> {
    pub fn new(engine: GuessEngine, protocol: Protocol, input: R, output: W) -> Self {
        Self {
            engine,
            protocol,
            session: SessionId::new(),
            diagnostic: false,
            cancel: CancelToken::new(),
            input,
            output,
        }
    }

    /// Log a JSON snapshot of the engine after every move.
    pub fn with_diagnostics(mut self, diagnostic: bool) -> Self {
        self.diagnostic = diagnostic;
        self
    }

    /// Stop at the next answer once `cancel` is raised.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn engine(&self) -> &GuessEngine {
        &self.engine
    }

    /// Consume the command, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the game until it ends, input runs out or the player interrupts.
    pub fn execute(&mut self) -> Result<ExitStatus, CliError> {
        let span = info_span!("game", session = %self.session);
        let _enter = span.enter();

        info!(
            min = self.engine.min(),
            max = self.engine.max(),
            protocol = ?self.protocol,
            "game started"
        );
        self.print_intro()?;

        loop {
            let prompt = self.prompt();
            writeln!(self.output, "{}", prompt)?;

            let Some(answer) = self.read_line()? else {
                return self.cancelled();
            };
            let outcome = self.engine.process_guess_response(&answer);
            self.record(&answer, outcome);

            if outcome != GuessOutcome::InvalidInput {
                if let Some(status) = self.finish(outcome)? {
                    return Ok(status);
                }
                continue;
            }

            if !Response::parse(&answer).is_no() {
                let hint = self.hint();
                writeln!(self.output, "{}", hint)?;
                continue;
            }

            writeln!(self.output, "{}", DIRECTION_QUESTION)?;
            let Some(direction) = self.read_line()? else {
                return self.cancelled();
            };
            let outcome = self.engine.process_direction_response(&direction);
            self.record(&direction, outcome);

            match outcome {
                GuessOutcome::InvalidInput => writeln!(self.output, "{}", DIRECTION_HINT)?,
                outcome => {
                    if let Some(status) = self.finish(outcome)? {
                        return Ok(status);
                    }
                }
            }
        }
    }

    /// Report a non-`InvalidInput` outcome; `Some` when the game is over.
    fn finish(&mut self, outcome: GuessOutcome) -> Result<Option<ExitStatus>, CliError> {
        if !outcome.is_terminal() {
            return Ok(None);
        }

        match outcome {
            GuessOutcome::Correct => {
                info!(guess = self.engine.current_guess(), "number found");
                writeln!(
                    self.output,
                    "Great! I guessed your number: {}",
                    self.engine.current_guess()
                )?;
                writeln!(self.output, "Thanks for playing!")?;
                Ok(Some(ExitStatus::Success))
            }
            GuessOutcome::ImpossibleState => {
                info!(
                    min = self.engine.min(),
                    max = self.engine.max(),
                    "answers are contradictory"
                );
                writeln!(self.output, "{}", CONTRADICTION)?;
                Ok(Some(ExitStatus::Contradiction))
            }
            GuessOutcome::Continue | GuessOutcome::InvalidInput => Ok(None),
        }
    }

    fn cancelled(&mut self) -> Result<ExitStatus, CliError> {
        if self.cancel.is_cancelled() {
            info!("game interrupted by the player");
        } else {
            info!("input closed before the game ended");
        }
        writeln!(self.output, "{}", CANCELLED)?;
        Ok(ExitStatus::Cancelled)
    }

    /// `None` at end of input or once the game is cancelled.
    fn read_line(&mut self) -> Result<Option<String>, CliError> {
        self.output.flush()?;
        if self.cancel.is_cancelled() {
            return Ok(None);
        }

        let line = match self.input.next_line() {
            Ok(line) => line,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => None,
            Err(err) => return Err(err.into()),
        };

        if self.cancel.is_cancelled() {
            return Ok(None);
        }
        Ok(line)
    }

    fn record(&self, answer: &str, outcome: GuessOutcome) {
        debug!(
            answer = %Response::normalize(answer),
            ?outcome,
            min = self.engine.min(),
            max = self.engine.max(),
            guess = self.engine.current_guess(),
            remaining = %self.engine.remaining(),
            "answer processed"
        );

        if self.diagnostic {
            match serde_json::to_string(&self.engine) {
                Ok(snapshot) => debug!(%snapshot, "engine state"),
                Err(err) => warn!(%err, "failed to serialize engine state"),
            }
        }
    }

    fn print_intro(&mut self) -> Result<(), CliError> {
        writeln!(
            self.output,
            "Think of a number between {} and {}, and I will guess it!",
            self.engine.min(),
            self.engine.max()
        )?;
        match self.protocol {
            Protocol::Combined => writeln!(self.output, "{}", COMBINED_RULES)?,
            Protocol::Legacy => {
                writeln!(
                    self.output,
                    "Answer with 'Y' if my guess is correct, 'N' if it's not."
                )?;
                writeln!(
                    self.output,
                    "If it's not correct, I'll ask if your number is higher or lower."
                )?;
            }
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn prompt(&self) -> String {
        let guess = self.engine.current_guess();
        match self.protocol {
            Protocol::Combined => format!(
                "Is my guess correct (C), or should it be lower (L) or higher (H)? My guess: {}",
                guess
            ),
            Protocol::Legacy => format!("Is your number {}? (Y/N)", guess),
        }
    }

    fn hint(&self) -> &'static str {
        match self.protocol {
            Protocol::Combined => COMBINED_HINT,
            Protocol::Legacy => "Please enter 'Y' if my guess is correct or 'N' if it's not.",
        }
    }
}
