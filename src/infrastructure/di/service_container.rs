//! Service container for dependency injection
//!
//! Wires settings and the filesystem into the address book services.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::{AddressBookStore, CommandDispatcher};
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};
use crate::infrastructure::InfraResult;

/// Container holding the application's shared dependencies.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, fs }
    }

    /// Load the configured address book.
    pub fn store(&self) -> InfraResult<AddressBookStore> {
        debug!("store: opening {}", self.settings.book_path.display());
        Ok(AddressBookStore::open(
            self.fs.clone(),
            self.settings.book_path.clone(),
        )?)
    }

    /// Load the address book and wrap it in a dispatcher.
    pub fn dispatcher(&self) -> InfraResult<CommandDispatcher> {
        Ok(CommandDispatcher::new(self.store()?, self.settings.autosave))
    }
}
