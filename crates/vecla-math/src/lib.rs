//! # vecla-math
//!
//! 2D vector and affine-transform math.
//!
//! This crate provides:
//!
//! - [`Vec2`] - 2D vectors and points with the usual primitives
//!   (add, sub, scale, normalize, rotate, dot, ...)
//! - [`Matrix`] - 3x3 homogeneous matrices for 2D affine transforms
//! - [`MatrixBuilder`] - persistent builder composing translate, rotate,
//!   scale and shear
//!
//! Every primitive is also exported as a free function, so the whole API can
//! be used as one namespace:
//!
//! ```rust
//! use vecla_math as vec;
//!
//! let v = vec::add(vec::Vec2::new(1.0, 2.0), vec::Vec2::new(3.0, 4.0));
//! assert_eq!(v, vec::Vec2::new(4.0, 6.0));
//! ```
//!
//! # Design
//!
//! Matrices are stored **row-major** as nine `f64` values and act on
//! **column vectors**:
//!
//! ```text
//! result = matrix * point
//! ```
//!
//! All types are small `Copy` values. Nothing is mutated in place, which
//! makes every value safe to share across threads.
//!
//! # Usage
//!
//! ```rust
//! use vecla_math::{matrix_builder, transform, Vec2};
//!
//! let m = matrix_builder()
//!     .rotate(std::f64::consts::FRAC_PI_2)
//!     .translate(10.0, 0.0)
//!     .get();
//!
//! let p = transform(Vec2::new(1.0, 0.0), m);
//! assert!(p.approx_eq(Vec2::new(10.0, 1.0), 1e-12));
//! ```
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Vec2`], [`Matrix`] and
//!   [`MatrixBuilder`]
//!
//! # Dependencies
//!
//! - [`glam`] - Conversions to and from `DVec2` / `DMat3`
//! - [`vecla-core`](vecla_core) - Error type
//! - `tracing` - Trace events for builder operations

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod builder;
mod matrix;
mod vector;

pub use builder::*;
pub use matrix::*;
pub use vector::*;

pub use vecla_core::{Error, Result};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use vecla_math::prelude::*;
///
/// let m: Matrix = matrix_builder().scale(2.0, 2.0).get();
/// assert_eq!(m * Vec2::X, Vec2::new(2.0, 0.0));
/// ```
pub mod prelude {
    pub use crate::builder::{matrix_builder, MatrixBuilder};
    pub use crate::matrix::{compose_transform, create_matrix, det, transform, Matrix};
    pub use crate::vector::Vec2;
    pub use vecla_core::{Error, Result};
}
