//! Command dispatch service
//!
//! Turns one raw input line into a reply: parse, resolve against the command
//! table, execute against the store's book, and persist when configured.

use tracing::{debug, instrument, warn};

use crate::application::services::AddressBookStore;
use crate::application::ApplicationResult;
use crate::domain::parse_line;

/// Result of dispatching a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank line, nothing to print
    Ignored,
    /// Reply to print; `exit` ends the session after printing
    Reply { message: String, exit: bool },
}

/// Executes input lines against an address book store.
pub struct CommandDispatcher {
    store: AddressBookStore,
    autosave: bool,
}

impl CommandDispatcher {
    pub fn new(store: AddressBookStore, autosave: bool) -> Self {
        Self { store, autosave }
    }

    pub fn store(&self) -> &AddressBookStore {
        &self.store
    }

    /// Dispatch one input line.
    ///
    /// Parse errors, missing contacts and autosave failures come back as
    /// errors; the caller decides whether the session survives them.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, line: &str) -> ApplicationResult<Outcome> {
        let Some(command) = parse_line(line)? else {
            return Ok(Outcome::Ignored);
        };
        debug!("dispatch: {:?}", command);

        let message = command.execute(self.store.book_mut())?;

        if self.autosave && command.is_mutating() {
            self.store.dump().inspect_err(|e| warn!("autosave failed: {}", e))?;
        }

        Ok(Outcome::Reply {
            message,
            exit: command.is_exit(),
        })
    }
}
