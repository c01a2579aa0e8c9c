//! Error type for the network model
//!
//! [`CivnetError`] covers the two ways the model refuses input: an edge it
//! will not store and a network name it does not know. Algorithm crates keep
//! their own narrower error enums.
//!
//! # Example
//!
//! ```
//! use civnet_core::{CivnetError, Network};
//!
//! let mut network = Network::weighted();
//! let err = network.add_edge("A", "A", 1.0).unwrap_err();
//! assert!(matches!(err, CivnetError::Validation(_)));
//! ```

use thiserror::Error;

/// Unified error type for all civnet operations.
#[derive(Error, Debug, PartialEq)]
pub enum CivnetError {
    /// Rejected edge data (self-loops, bad weights)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unknown network name
    #[error("Network error: {0}")]
    Network(String),
}

/// Convenience type alias for Results using CivnetError.
pub type CivnetResult<T> = Result<T, CivnetError>;
