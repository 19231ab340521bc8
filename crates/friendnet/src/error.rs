//! Error types for friendnet operations.

use std::io;
use thiserror::Error;

/// The error type for graph store and session operations.
///
/// Every variant raised by the graph store leaves the network unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// The referenced user is not part of the network.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// A user with this name already exists.
    #[error("User already exists: {0}")]
    UserAlreadyExists(String),

    /// Both users exist but no chain of connections links them.
    #[error("No path found from {from} to {to}")]
    NoPath {
        /// Start of the requested route
        from: String,
        /// End of the requested route
        to: String,
    },

    /// Connection weights must be finite and strictly positive.
    #[error("Invalid connection weight: {0} (must be finite and greater than zero)")]
    InvalidWeight(f64),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized Result type for friendnet operations.
pub type Result<T> = std::result::Result<T, Error>;
