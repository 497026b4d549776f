//! Interactive read-eval-print loop
//!
//! Reads one line at a time, hands it to the dispatcher and prints the reply.
//! Command errors are printed and the session continues; only terminal I/O
//! failures end it early.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::application::services::{CommandDispatcher, Outcome};
use crate::infrastructure::{InfraError, InfraResult};

/// Loop states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplState {
    WaitingInput,
    Dispatching(String),
    Terminated,
}

pub struct Repl {
    dispatcher: CommandDispatcher,
    prompt: String,
}

impl Repl {
    pub fn new(dispatcher: CommandDispatcher, prompt: impl Into<String>) -> Self {
        Self {
            dispatcher,
            prompt: prompt.into(),
        }
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    /// Run until an exit command or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> InfraResult<()> {
        let mut state = ReplState::WaitingInput;
        loop {
            state = match state {
                ReplState::WaitingInput => self.read(&mut input, &mut output)?,
                ReplState::Dispatching(line) => self.step(&line, &mut output)?,
                ReplState::Terminated => break,
            };
        }
        output
            .flush()
            .map_err(|e| InfraError::io("flush output", e))
    }

    fn read<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> InfraResult<ReplState> {
        write!(output, "{}", self.prompt)
            .and_then(|()| output.flush())
            .map_err(|e| InfraError::io("write prompt", e))?;

        let mut line = String::new();
        let n = input
            .read_line(&mut line)
            .map_err(|e| InfraError::io("read input", e))?;
        if n == 0 {
            debug!("end of input");
            writeln!(output).map_err(|e| InfraError::io("write output", e))?;
            return Ok(ReplState::Terminated);
        }
        Ok(ReplState::Dispatching(line))
    }

    /// Dispatch one line and print whatever comes back.
    pub fn step<W: Write>(&mut self, line: &str, output: &mut W) -> InfraResult<ReplState> {
        let (text, next) = match self.dispatcher.dispatch(line) {
            Ok(Outcome::Ignored) => return Ok(ReplState::WaitingInput),
            Ok(Outcome::Reply { message, exit }) => {
                let next = if exit {
                    ReplState::Terminated
                } else {
                    ReplState::WaitingInput
                };
                (message, next)
            }
            Err(e) => {
                warn!("command failed: {}", e);
                (e.to_string(), ReplState::WaitingInput)
            }
        };
        writeln!(output, "{}", text).map_err(|e| InfraError::io("write output", e))?;
        Ok(next)
    }
}
