//! Error conversion helpers for file I/O
//!
//! Provides an extension trait that attaches the action and path to an I/O error.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// self.fs.write(&self.path, &content)
    ///     .with_path_context("write address book", &self.path)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{} {}", action, path.display()),
            source: Box::new(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_io_error_when_adding_context_then_names_action_and_path() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));

        let err = result
            .with_path_context("read address book", Path::new("book.toml"))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "operation failed: read address book book.toml"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn given_ok_when_adding_context_then_value_passes_through() {
        let result: io::Result<u8> = Ok(7);
        assert_eq!(
            result
                .with_path_context("read", Path::new("x"))
                .unwrap(),
            7
        );
    }
}
