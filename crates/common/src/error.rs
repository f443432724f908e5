//! Common error type for devkit operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a devkit command outright.
///
/// Validation findings are never reported through this type; they are
/// collected as data. This is reserved for conditions where a run cannot
/// produce a result at all.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Result type alias using common Error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_directory_message() {
        let err = Error::NotADirectory(PathBuf::from("/tmp/nope"));
        assert_eq!(err.to_string(), "Not a directory: /tmp/nope");
    }

    #[test]
    fn test_io_error_wraps() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.to_string().starts_with("IO error"));
    }
}
