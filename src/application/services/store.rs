//! Address book persistence service
//!
//! Owns the in-memory `AddressBook` and moves it to and from its backing
//! file. The file is read and written whole; there is no locking.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::AddressBook;
use crate::infrastructure::traits::FileSystem;

/// File-backed address book.
pub struct AddressBookStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
    book: AddressBook,
}

impl AddressBookStore {
    /// Open the store at `path`, loading the book if the file exists.
    pub fn open(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>) -> ApplicationResult<Self> {
        let mut store = Self {
            fs,
            path: path.into(),
            book: AddressBook::new(),
        };
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    /// Replace the in-memory book with the file contents.
    ///
    /// A missing file yields an empty book with zeroed legacy fields.
    pub fn load(&mut self) -> ApplicationResult<()> {
        if !self.fs.exists(&self.path) {
            debug!("load: {} does not exist, starting empty", self.path.display());
            self.book = AddressBook::new();
            return Ok(());
        }

        // Non-UTF-8 content is a foreign or corrupt file, not an I/O failure
        let content = match self.fs.read_to_string(&self.path) {
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(ApplicationError::InvalidBookFile {
                    path: self.path.clone(),
                    message: e.to_string(),
                });
            }
            other => other.with_path_context("read address book", &self.path)?,
        };

        self.book = toml::from_str(&content).map_err(|e| ApplicationError::InvalidBookFile {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        info!(
            "load: {} contacts from {}",
            self.book.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Overwrite the backing file with the current book.
    pub fn dump(&self) -> ApplicationResult<()> {
        let content =
            toml::to_string_pretty(&self.book).map_err(|e| ApplicationError::OperationFailed {
                context: format!("serialize address book {}", self.path.display()),
                source: Box::new(e),
            })?;

        self.fs
            .ensure_parent(&self.path)
            .and_then(|()| self.fs.write(&self.path, &content))
            .with_path_context("write address book", &self.path)?;
        debug!(
            "dump: {} contacts to {}",
            self.book.len(),
            self.path.display()
        );
        Ok(())
    }
}
