//! Error types for the cembed-core library.
//!
//! This module provides error handling using the `thiserror` crate, with
//! one variant per failure point in the transcode pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cembed operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all cembed operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Input file does not exist
    ///
    /// This is the only condition callers are expected to recover from;
    /// everything else signals an unclassified I/O fault.
    #[error("input file not found: '{path}'")]
    FileNotFound {
        /// Path that did not resolve to an existing file
        path: PathBuf,
    },

    /// Failed to read input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        /// Path to the file that failed to write
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to create output directory
    #[error("failed to create directory '{path}': {source}")]
    DirectoryCreate {
        /// Path to the directory that failed to create
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates a new file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Creates a new file read error
    ///
    /// A `NotFound` I/O error is promoted to [`Error::FileNotFound`].
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::FileNotFound { path: path.into() };
        }
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new file write error
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Creates a new directory creation error
    pub fn directory_create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryCreate {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this is the locally recoverable missing-input case
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_path() {
        let err = Error::file_not_found("/tmp/missing.jpg");
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("/tmp/missing.jpg"));
    }

    #[test]
    fn test_file_read_promotes_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::file_read("/tmp/gone.bin", io);
        assert!(matches!(err, Error::FileNotFound { .. }));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = Error::file_read("/tmp/locked.bin", io);
        assert!(matches!(err, Error::FileRead { .. }));
    }

    #[test]
    fn test_is_recoverable() {
        assert!(Error::file_not_found("/test").is_recoverable());
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        assert!(!Error::file_write("/test", io).is_recoverable());
    }
}
