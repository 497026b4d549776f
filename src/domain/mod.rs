//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod command;
pub mod entities;
pub mod error;

pub use command::{parse_line, resolve_verb, Command, CommandKind, COMMAND_TABLE};
pub use entities::{title_case, AddressBook, Contact};
pub use error::{DomainError, DomainResult};
