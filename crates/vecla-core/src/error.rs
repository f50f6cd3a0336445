//! Error types for vecla operations.
//!
//! The arithmetic in vecla is total: adding, rotating or composing values
//! never fails. Errors only occur at the boundary where untyped data enters
//! the typed API, for example when a slice of unknown length is converted
//! into a vector or a matrix.
//!
//! # Usage
//!
//! ```rust
//! use vecla_core::{Error, Result};
//!
//! fn pair(values: &[f64]) -> Result<[f64; 2]> {
//!     match values {
//!         [x, y] => Ok([*x, *y]),
//!         _ => Err(Error::InvalidLength {
//!             expected: 2,
//!             actual: values.len(),
//!         }),
//!     }
//! }
//!
//! assert!(pair(&[1.0, 2.0]).is_ok());
//! assert!(pair(&[1.0]).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced when converting untyped data into vecla values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A slice had the wrong number of components.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecla_core::Error;
    ///
    /// let err = Error::InvalidLength { expected: 9, actual: 6 };
    /// assert_eq!(err.to_string(), "expected 9 components, got 6");
    /// ```
    #[error("expected {expected} components, got {actual}")]
    InvalidLength {
        /// Number of components the target type holds
        expected: usize,
        /// Number of components that were supplied
        actual: usize,
    },

    /// A matrix does not describe a 2D affine transform.
    ///
    /// Affine matrices always have `[0, 0, 1]` as their bottom row.
    #[error("matrix is not affine: bottom row is {bottom:?}, expected [0, 0, 1]")]
    NotAffine {
        /// The offending bottom row
        bottom: [f64; 3],
    },

    /// A value contains NaN or infinite components.
    ///
    /// Typically the result of normalizing a zero-length vector.
    #[error("{what} has non-finite components")]
    NonFinite {
        /// Kind of value that was rejected
        what: &'static str,
    },
}
