//! contactbook: an interactive contact manager backed by a local file.
//!
//! Layers, leaves first:
//! - [`domain`]: address book, title-case names, commands and the verb table
//! - [`application`]: persistence and command dispatch services
//! - [`infrastructure`]: filesystem boundary and service wiring
//! - [`cli`]: argument parsing and the read-eval-print loop

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
