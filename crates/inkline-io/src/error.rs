//! I/O error types
//!
//! Provides a unified error type for image decoding. Each format module
//! maps its underlying library errors into `IoError` variants so that
//! callers only need to handle one error type. Any of these variants is
//! fatal to a pipeline invocation: retrying the same bytes cannot
//! succeed.

use thiserror::Error;

/// Error type for image decoding operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The byte buffer does not start with a recognized image signature
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A format-specific decoder rejected the data
    #[error("decode error: {0}")]
    Decode(String),

    /// Decoding succeeded but produced a zero-dimension image
    #[error("decoded image is empty")]
    EmptyImage,

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] inkline_core::CoreError),
}

/// Convenience alias for decoding results.
pub type IoResult<T> = Result<T, IoError>;
