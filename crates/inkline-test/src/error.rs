//! Error types for inkline-test

use thiserror::Error;

/// Errors raised by test fixture helpers
#[derive(Debug, Error)]
pub enum TestError {
    /// PNG encoding of a synthetic fixture failed
    #[error("fixture encode error: {0}")]
    Encode(String),

    /// Core library error while building a fixture
    #[error("core error: {0}")]
    Core(#[from] inkline_core::CoreError),
}

/// Result type for test helpers
pub type TestResult<T> = Result<T, TestError>;
