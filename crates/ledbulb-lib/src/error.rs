//! Unified error type for the ledbulb-lib crate.
//!
//! [`LedError`] covers the few fallible edges of the component: host surface
//! presentation, color parsing, and configuration loading. `From` impls allow
//! `?` to propagate across module boundaries seamlessly.

use std::fmt;

/// Unified error type for ledbulb-lib operations.
#[derive(Debug)]
pub enum LedError {
    /// Standard I/O error (config file read, frame file write).
    Io(std::io::Error),
    /// Color parsing error.
    Color(String),
    /// Configuration parse or validation error.
    Config(String),
    /// Host surface failure (frame presentation, buffer mismatch).
    Surface(String),
}

impl fmt::Display for LedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedError::Io(e) => write!(f, "I/O error: {e}"),
            LedError::Color(e) => write!(f, "Color error: {e}"),
            LedError::Config(e) => write!(f, "Config error: {e}"),
            LedError::Surface(e) => write!(f, "Surface error: {e}"),
        }
    }
}

impl std::error::Error for LedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LedError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LedError {
    fn from(e: std::io::Error) -> Self {
        LedError::Io(e)
    }
}

/// Crate-level Result alias using [`LedError`].
pub type Result<T> = std::result::Result<T, LedError>;
