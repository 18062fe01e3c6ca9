//! Errors
//!
//! Custom error types used throughout the `pdep` crate.
use thiserror::Error;

/// Errors that can occur while building counts or evaluating dependencies.
#[derive(Debug, Error, PartialEq)]
pub enum PdepError {
    /// Shape misuse: wrong attribute-set size, unknown order, out of range column and the like.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Expected pdep divides by the number of rows minus one.
    #[error("Expected pdep is undefined for a table with {0} row(s), at least 2 are required.")]
    DivisionUndefined(usize),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Configuration could not be read or parsed.
    #[error("Unable to read configuration: {0}")]
    InvalidConfig(String),
    /// The worker pool for a parallel run could not be created.
    #[error("Unable to build thread pool: {0}")]
    ThreadPool(String),
}
