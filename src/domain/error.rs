//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Contact not found. Please enter a valid name.")]
    ContactNotFound(String),

    #[error("Invalid command. Please try again.")]
    UnknownCommand(String),

    #[error("Invalid command: '{verb}' expects {usage}. Please try again.")]
    WrongArity { verb: String, usage: &'static str },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
