//! Persistent builder for composing affine transforms.
//!
//! A [`MatrixBuilder`] wraps one [`Matrix`]. Every operation returns a new
//! builder and leaves the receiver untouched, so a builder can be branched
//! freely:
//!
//! ```rust
//! use vecla_math::{matrix_builder, Matrix};
//!
//! let base = matrix_builder().scale(2.0, 2.0);
//! let left = base.translate(-1.0, 0.0);
//! let right = base.translate(1.0, 0.0);
//!
//! assert_eq!(base.get(), Matrix::scaling(2.0, 2.0));
//! assert_ne!(left.get(), right.get());
//! ```
//!
//! # Ordering
//!
//! Each call composes its elementary matrix `E` with the accumulated
//! matrix `M` as [`compose_transform(E, M)`](crate::compose_transform).
//! A chain `rotate(a).translate(x, y)` therefore yields `T * R`.

use tracing::trace;

use crate::{compose_transform, transform, Matrix, Vec2};

/// Immutable, chainable accumulator of affine transforms.
///
/// The wrapped matrix is only reachable by copy through [`get`](Self::get),
/// so no derived builder or returned matrix can alias another builder's
/// state. With the `serde` feature a builder (de)serializes as its
/// [`Matrix`], so a deserialized builder always starts from an affine
/// matrix.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MatrixBuilder {
    matrix: Matrix,
}

impl MatrixBuilder {
    /// Creates a builder holding the identity matrix.
    #[inline]
    pub const fn new() -> Self {
        Self::from_matrix(Matrix::IDENTITY)
    }

    /// Creates a builder seeded with `matrix`.
    #[inline]
    pub const fn from_matrix(matrix: Matrix) -> Self {
        Self { matrix }
    }

    /// Composes an arbitrary matrix onto the current one.
    ///
    /// The result wraps `compose_transform(m, current)`.
    #[must_use]
    pub fn add(&self, m: Matrix) -> Self {
        trace!(m = ?m.m, "builder::add");
        Self::from_matrix(compose_transform(m, self.matrix))
    }

    /// Adds a translation by `(x, y)`.
    #[must_use]
    pub fn translate(&self, x: f64, y: f64) -> Self {
        trace!(x, y, "builder::translate");
        self.compose(Matrix::translation(x, y))
    }

    /// Adds a counter-clockwise rotation by `a` radians.
    #[must_use]
    pub fn rotate(&self, a: f64) -> Self {
        trace!(a, "builder::rotate");
        self.compose(Matrix::rotation(a))
    }

    /// Adds a scale by `x` and `y`.
    #[must_use]
    pub fn scale(&self, x: f64, y: f64) -> Self {
        trace!(x, y, "builder::scale");
        self.compose(Matrix::scaling(x, y))
    }

    /// Adds a shear. See [`Matrix::shearing`].
    #[must_use]
    pub fn shear(&self, x: f64, y: f64) -> Self {
        trace!(x, y, "builder::shear");
        self.compose(Matrix::shearing(x, y))
    }

    /// Returns a copy of the accumulated matrix.
    #[inline]
    pub fn get(&self) -> Matrix {
        self.matrix
    }

    /// Same as [`get`](Self::get).
    #[inline]
    pub fn matrix(&self) -> Matrix {
        self.get()
    }

    /// Applies the accumulated matrix to a point.
    #[inline]
    pub fn apply(&self, v: Vec2) -> Vec2 {
        transform(v, self.matrix)
    }

    #[inline]
    fn compose(&self, elementary: Matrix) -> Self {
        Self::from_matrix(compose_transform(elementary, self.matrix))
    }
}

impl From<Matrix> for MatrixBuilder {
    #[inline]
    fn from(matrix: Matrix) -> Self {
        Self::from_matrix(matrix)
    }
}

impl From<MatrixBuilder> for Matrix {
    #[inline]
    fn from(builder: MatrixBuilder) -> Self {
        builder.get()
    }
}

/// Creates an identity [`MatrixBuilder`].
///
/// # Example
///
/// ```rust
/// use vecla_math::{matrix_builder, Vec2};
///
/// let m = matrix_builder().scale(2.0, 2.0).translate(1.0, 0.0);
/// assert_eq!(m.apply(Vec2::new(1.0, 1.0)), Vec2::new(3.0, 2.0));
/// ```
#[inline]
pub const fn matrix_builder() -> MatrixBuilder {
    MatrixBuilder::new()
}
