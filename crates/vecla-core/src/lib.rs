//! # vecla-core
//!
//! Core types shared by the vecla crates.
//!
//! - [`Error`], [`Result`] - Failures at the typed API boundary
//! - [`EPSILON`] - Default tolerance for approximate comparisons
//!
//! ## Crate Structure
//!
//! ```text
//! vecla-core (this crate)
//!    ^
//!    |
//!    +-- vecla-math (vectors, matrices, matrix builder)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;

pub use error::*;

/// Default absolute tolerance used by `approx_eq` helpers.
///
/// Chosen for `f64` values of moderate magnitude such as screen or scene
/// coordinates.
pub const EPSILON: f64 = 1e-10;

/// Returns true if `a` and `b` differ by at most `eps`.
///
/// # Example
///
/// ```rust
/// use vecla_core::{approx_eq, EPSILON};
///
/// assert!(approx_eq(0.1 + 0.2, 0.3, EPSILON));
/// assert!(!approx_eq(1.0, 1.1, EPSILON));
/// ```
#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::{approx_eq, EPSILON};
}
