//! Error types for the resource checker
//!
//! Only genuine failures live here. An unknown pixel format estimates to zero
//! and a missing reference is a finding, neither is an error.

use std::fmt;

/// Result type for resource checker operations
pub type Result<T> = std::result::Result<T, Error>;

/// Resource checker errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A host collaborator (scene source, dependency resolver, field walker) failed
    HostFailure(String),

    /// A scene snapshot could not be parsed or is inconsistent
    InvalidSnapshot(String),

    /// Scan configuration could not be parsed or serialized
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::HostFailure(msg) => write!(f, "Host failure: {}", msg),
            Error::InvalidSnapshot(msg) => write!(f, "Invalid scene snapshot: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid scan configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
