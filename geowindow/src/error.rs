//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeoWindowError {
    /// One of the input values cannot be used. The value is the name of the argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
