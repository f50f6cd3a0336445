//! 3x3 homogeneous matrices for 2D affine transforms.
//!
//! [`Matrix`] stores nine `f64` values in **row-major** order:
//!
//! ```text
//! [ a  b  tx ]
//! [ c  d  ty ]    stored as [a, b, tx, c, d, ty, 0, 0, 1]
//! [ 0  0  1  ]
//! ```
//!
//! The top-left 2x2 block holds the linear part (rotation, scale, shear) and
//! the third column holds the translation. Points are treated as column
//! vectors with an implicit trailing 1:
//!
//! ```text
//! | m0 m1 m2 |   | x |   | m0*x + m1*y + m2 |
//! | m3 m4 m5 | * | y | = | m3*x + m4*y + m5 |
//! | m6 m7 m8 |   | 1 |   |        1         |
//! ```
//!
//! # Composition order
//!
//! [`compose_transform(m, m2)`](compose_transform) is the plain product
//! `m * m2`. The [`MatrixBuilder`](crate::MatrixBuilder) passes each new
//! elementary transform as `m` and the accumulated matrix as `m2`.
//!
//! # Usage
//!
//! ```rust
//! use vecla_math::{compose_transform, transform, Matrix, Vec2};
//!
//! let move_by_ten = Matrix::translation(10.0, 10.0);
//! let scale_by_ten = Matrix::scaling(10.0, 10.0);
//!
//! let m = compose_transform(move_by_ten, scale_by_ten);
//! assert_eq!(transform(Vec2::new(1.0, 1.0), m), Vec2::new(20.0, 20.0));
//! ```

use std::ops::{Index, Mul};

use tracing::debug;
use vecla_core::{Error, Result};

use crate::Vec2;

/// A 3x3 matrix describing a 2D affine transform.
///
/// With the `serde` feature a matrix is (de)serialized as its nine
/// row-major elements. Deserialization rejects a bottom row other than
/// `[0, 0, 1]`.
///
/// # Example
///
/// ```rust
/// use vecla_math::{Matrix, Vec2};
///
/// let identity = Matrix::IDENTITY;
/// let v = Vec2::new(1.0, 2.0);
/// assert_eq!(identity * v, v);
/// assert_eq!(Matrix::default(), identity);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "AffineArray", into = "[f64; 9]")
)]
#[repr(C)]
pub struct Matrix {
    /// Elements in row-major order.
    pub m: [f64; 9],
}

impl Matrix {
    /// Identity matrix.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self::from_array([
        1.0, 0.0, 0.0,
        0.0, 1.0, 0.0,
        0.0, 0.0, 1.0,
    ]);

    /// Creates a matrix from nine row-major elements.
    ///
    /// The bottom row is not checked. Use [`Matrix::try_affine`] for input
    /// that must describe an affine transform.
    #[inline]
    pub const fn from_array(m: [f64; 9]) -> Self {
        Self { m }
    }

    /// Returns the nine row-major elements.
    #[inline]
    pub const fn to_array(self) -> [f64; 9] {
        self.m
    }

    /// Creates a matrix from row-major elements whose bottom row must be
    /// exactly `[0, 0, 1]`.
    ///
    /// # Errors
    ///
    /// [`Error::NotAffine`] if the bottom row differs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecla_math::Matrix;
    ///
    /// assert!(Matrix::try_affine([2.0, 0.0, 1.0, 0.0, 2.0, 1.0, 0.0, 0.0, 1.0]).is_ok());
    /// assert!(Matrix::try_affine([2.0, 0.0, 1.0, 0.0, 2.0, 1.0, 0.0, 1.0, 1.0]).is_err());
    /// ```
    pub fn try_affine(m: [f64; 9]) -> Result<Self> {
        let matrix = Self::from_array(m);
        if matrix.is_affine() {
            Ok(matrix)
        } else {
            let bottom = matrix.row(2);
            debug!(?bottom, "rejecting non-affine matrix");
            Err(Error::NotAffine { bottom })
        }
    }

    /// Translation by `(x, y)`.
    #[inline]
    #[rustfmt::skip]
    pub const fn translation(x: f64, y: f64) -> Self {
        Self::from_array([
            1.0, 0.0, x,
            0.0, 1.0, y,
            0.0, 0.0, 1.0,
        ])
    }

    /// Counter-clockwise rotation by `a` radians about the origin.
    #[inline]
    #[rustfmt::skip]
    pub fn rotation(a: f64) -> Self {
        let (sin, cos) = a.sin_cos();
        Self::from_array([
            cos, -sin, 0.0,
            sin, cos, 0.0,
            0.0, 0.0, 1.0,
        ])
    }

    /// Non-uniform scale by `x` and `y`.
    #[inline]
    #[rustfmt::skip]
    pub const fn scaling(x: f64, y: f64) -> Self {
        Self::from_array([
            x, 0.0, 0.0,
            0.0, y, 0.0,
            0.0, 0.0, 1.0,
        ])
    }

    /// Shear with factor `x` along the x axis and `y` along the y axis.
    ///
    /// Maps `(px, py)` to `(px + x * py, y * px + py)`.
    #[inline]
    #[rustfmt::skip]
    pub const fn shearing(x: f64, y: f64) -> Self {
        Self::from_array([
            1.0, x, 0.0,
            y, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ])
    }

    /// Returns row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 3`.
    #[inline]
    pub fn row(&self, i: usize) -> [f64; 3] {
        [self.m[i * 3], self.m[i * 3 + 1], self.m[i * 3 + 2]]
    }

    /// Translation part `(tx, ty)`.
    #[inline]
    pub fn translation_part(&self) -> Vec2 {
        Vec2::new(self.m[2], self.m[5])
    }

    /// Returns true if the bottom row is exactly `[0, 0, 1]`.
    #[inline]
    pub fn is_affine(&self) -> bool {
        self.m[6] == 0.0 && self.m[7] == 0.0 && self.m[8] == 1.0
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|x| x.is_finite())
    }

    /// Returns `self` if all elements are finite.
    ///
    /// # Errors
    ///
    /// [`Error::NonFinite`] if any element is NaN or infinite.
    pub fn try_finite(self) -> Result<Self> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(Error::NonFinite { what: "matrix" })
        }
    }

    /// Element-wise comparison with an absolute tolerance.
    #[inline]
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| vecla_core::approx_eq(*a, *b, eps))
    }

    /// Determinant of the linear part. See [`det`].
    #[inline]
    pub fn det(&self) -> f64 {
        det(*self)
    }

    /// Applies this matrix to a point. See [`transform`].
    #[inline]
    pub fn transform(&self, v: Vec2) -> Vec2 {
        transform(v, *self)
    }

    /// Converts to glam DMat3 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::DMat3 {
        // glam stores columns, so the row-major array is read transposed
        glam::DMat3::from_cols_array(&self.m).transpose()
    }

    /// Creates from glam DMat3.
    #[inline]
    pub fn from_glam(m: glam::DMat3) -> Self {
        Self::from_array(m.transpose().to_cols_array())
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Creates an affine matrix from its coefficients.
///
/// The result is `[a, c, tx, b, d, ty, 0, 0, 1]`: `b` fills the first
/// column of the second row and `c` the second column of the first row.
/// `create_matrix(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)` is the identity.
///
/// # Example
///
/// ```rust
/// use vecla_math::{create_matrix, Matrix};
///
/// assert_eq!(create_matrix(1.0, 0.0, 0.0, 1.0, 0.0, 0.0), Matrix::IDENTITY);
/// assert_eq!(
///     create_matrix(1.0, 2.0, 3.0, 4.0, 5.0, 6.0).to_array(),
///     [1.0, 3.0, 5.0, 2.0, 4.0, 6.0, 0.0, 0.0, 1.0],
/// );
/// ```
#[inline]
#[rustfmt::skip]
pub const fn create_matrix(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Matrix {
    Matrix::from_array([
        a, c, tx,
        b, d, ty,
        0.0, 0.0, 1.0,
    ])
}

/// Applies `m` to the point `v`.
///
/// Returns `(x*m0 + y*m1 + m2, x*m3 + y*m4 + m5)`.
#[inline]
pub fn transform(v: Vec2, m: Matrix) -> Vec2 {
    let m = &m.m;
    Vec2::new(
        v.x * m[0] + v.y * m[1] + m[2],
        v.x * m[3] + v.y * m[4] + m[5],
    )
}

/// Returns a closure applying `m` to points.
///
/// # Example
///
/// ```rust
/// use vecla_math::{f_transform, Matrix, Vec2};
///
/// let shift = f_transform(Matrix::translation(1.0, 0.0));
/// let moved: Vec<Vec2> = [Vec2::ZERO, Vec2::Y].into_iter().map(shift).collect();
/// assert_eq!(moved, vec![Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)]);
/// ```
#[inline]
pub fn f_transform(m: Matrix) -> impl Fn(Vec2) -> Vec2 {
    move |v| transform(v, m)
}

/// Matrix product `m * m2`.
///
/// `result[row][col] = sum(m[row][k] * m2[k][col])`. Applied to a point,
/// the result applies `m2` first and `m` second in the parent frame; read
/// the other way round, `m` is expressed in the local frame set up by `m2`.
pub fn compose_transform(m: Matrix, m2: Matrix) -> Matrix {
    let a = &m.m;
    let b = &m2.m;
    let mut out = [0.0; 9];
    for row in 0..3 {
        for col in 0..3 {
            out[row * 3 + col] = a[row * 3] * b[col]
                + a[row * 3 + 1] * b[3 + col]
                + a[row * 3 + 2] * b[6 + col];
        }
    }
    Matrix::from_array(out)
}

/// Determinant of the top-left 2x2 block: `m0*m4 - m3*m1`.
///
/// Translation does not affect area, so it is ignored. Singular matrices
/// return zero.
#[inline]
pub fn det(m: Matrix) -> f64 {
    m.m[0] * m.m[4] - m.m[3] * m.m[1]
}

// Matrix * Matrix
impl Mul for Matrix {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        compose_transform(self, rhs)
    }
}

// Matrix * Vec2
impl Mul<Vec2> for Matrix {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        transform(rhs, self)
    }
}

impl Index<usize> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.m[i]
    }
}

impl From<[f64; 9]> for Matrix {
    #[inline]
    fn from(m: [f64; 9]) -> Self {
        Self::from_array(m)
    }
}

impl From<Matrix> for [f64; 9] {
    #[inline]
    fn from(m: Matrix) -> [f64; 9] {
        m.to_array()
    }
}

impl TryFrom<&[f64]> for Matrix {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self> {
        let m: [f64; 9] = values.try_into().map_err(|_| Error::InvalidLength {
            expected: 9,
            actual: values.len(),
        })?;
        Self::try_affine(m)
    }
}

/// Serialized form of [`Matrix`], checked by [`Matrix::try_affine`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(transparent)]
struct AffineArray([f64; 9]);

#[cfg(feature = "serde")]
impl TryFrom<AffineArray> for Matrix {
    type Error = Error;

    fn try_from(raw: AffineArray) -> Result<Self> {
        Self::try_affine(raw.0)
    }
}

impl From<glam::DMat3> for Matrix {
    #[inline]
    fn from(m: glam::DMat3) -> Self {
        Self::from_glam(m)
    }
}

impl From<Matrix> for glam::DMat3 {
    #[inline]
    fn from(m: Matrix) -> glam::DMat3 {
        m.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn assert_mat_eq(a: Matrix, b: Matrix, eps: f64) {
        for i in 0..9 {
            assert_abs_diff_eq!(a[i], b[i], epsilon = eps);
        }
    }

    #[test]
    fn test_create_matrix_identity() {
        let m = create_matrix(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        assert_eq!(
            m.to_array(),
            [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_create_matrix_slot_mapping() {
        let m = create_matrix(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(m.row(0), [1.0, 3.0, 5.0]);
        assert_eq!(m.row(1), [2.0, 4.0, 6.0]);
        assert_eq!(m.row(2), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_transform() {
        let m = Matrix::from_array([10.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 0.0, 1.0]);
        assert_eq!(transform(Vec2::new(3.0, 4.0), m), Vec2::new(40.0, 50.0));
        assert_eq!(m * Vec2::new(3.0, 4.0), Vec2::new(40.0, 50.0));
    }

    #[test]
    fn test_transform_identity() {
        for v in [Vec2::new(3.0, -4.0), Vec2::new(1e-3, 7e5), Vec2::ZERO] {
            assert_eq!(transform(v, Matrix::IDENTITY), v);
        }
    }

    #[test]
    fn test_compose() {
        let m1 = Matrix::from_array([1.0, 0.0, 10.0, 0.0, 1.0, 10.0, 0.0, 0.0, 1.0]);
        let m2 = Matrix::from_array([10.0, 0.0, -5.0, 0.0, 10.0, -5.0, 0.0, 0.0, 1.0]);
        assert_eq!(
            compose_transform(m1, m2).to_array(),
            [10.0, 0.0, 5.0, 0.0, 10.0, 5.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_compose_general_3x3() {
        let a = Matrix::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let b = Matrix::from_array([9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
        assert_eq!(
            compose_transform(a, b).to_array(),
            [30.0, 24.0, 18.0, 84.0, 69.0, 54.0, 138.0, 114.0, 90.0]
        );
        assert_eq!(a * b, compose_transform(a, b));
    }

    #[test]
    fn test_compose_associative() {
        let a = Matrix::rotation(0.3) * Matrix::translation(2.0, -1.0);
        let b = Matrix::from_array([1.5, -0.2, 4.0, 0.7, 2.0, -3.0, 0.1, 0.2, 0.9]);
        let c = Matrix::shearing(0.4, -0.6);
        assert_mat_eq(
            compose_transform(compose_transform(a, b), c),
            compose_transform(a, compose_transform(b, c)),
            1e-12,
        );
    }

    #[test]
    fn test_compose_keeps_affine() {
        let m = Matrix::rotation(1.2) * Matrix::scaling(3.0, 0.5) * Matrix::translation(4.0, 2.0);
        assert!(m.is_affine());
    }

    #[test]
    fn test_det() {
        let m = Matrix::from_array([10.0, 0.0, 0.0, 0.0, 5.0, 0.0, 0.0, 0.0, 1.0]);
        let m2 = Matrix::from_array([1.0, 2.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(det(compose_transform(m, m2)), 50.0);
    }

    #[test]
    fn test_det_ignores_translation_and_singular() {
        assert_eq!(Matrix::translation(100.0, -3.0).det(), 1.0);
        assert_eq!(Matrix::scaling(0.0, 5.0).det(), 0.0);
        assert_abs_diff_eq!(Matrix::rotation(0.9).det(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_elementary_matrices() {
        let p = Vec2::new(2.0, 3.0);
        assert_eq!(Matrix::translation(1.0, -1.0) * p, Vec2::new(3.0, 2.0));
        assert_eq!(Matrix::scaling(2.0, 3.0) * p, Vec2::new(4.0, 9.0));
        assert_eq!(Matrix::shearing(1.0, 0.5) * p, Vec2::new(5.0, 4.0));
        let r = Matrix::rotation(FRAC_PI_2) * Vec2::new(2.0, 0.0);
        assert!(r.approx_eq(Vec2::new(0.0, 2.0), 1e-12));
    }

    #[test]
    fn test_try_affine() {
        assert!(Matrix::try_affine(Matrix::rotation(0.1).to_array()).is_ok());
        let err = Matrix::try_affine([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.5, 0.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            Error::NotAffine {
                bottom: [0.5, 0.0, 1.0]
            }
        );
    }

    #[test]
    fn test_try_from_slice() {
        let values = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        assert_eq!(Matrix::try_from(&values[..]), Ok(Matrix::IDENTITY));
        assert_eq!(
            Matrix::try_from(&values[..6]),
            Err(Error::InvalidLength {
                expected: 9,
                actual: 6
            })
        );
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_range_panics() {
        let _ = Matrix::IDENTITY.row(std::hint::black_box(3));
    }

    #[test]
    fn test_try_from_slice_rejects_non_affine() {
        let values = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 2.0, 0.0, 1.0];
        assert_eq!(
            Matrix::try_from(&values[..]),
            Err(Error::NotAffine {
                bottom: [2.0, 0.0, 1.0]
            })
        );
        // The unchecked constructor still accepts any 3x3
        assert!(!Matrix::from_array(values).is_affine());
    }

    #[test]
    fn test_try_finite() {
        assert!(Matrix::IDENTITY.try_finite().is_ok());
        let mut m = Matrix::IDENTITY;
        m.m[2] = f64::NAN;
        assert_eq!(m.try_finite(), Err(Error::NonFinite { what: "matrix" }));
    }

    #[test]
    fn test_glam_roundtrip_layout() {
        let m = Matrix::translation(7.0, 9.0);
        let g = m.to_glam();
        // Translation lives in glam's third column
        assert_eq!(g.z_axis, glam::DVec3::new(7.0, 9.0, 1.0));
        assert_eq!(Matrix::from_glam(g), m);

        let p = glam::DVec3::new(1.0, 2.0, 1.0);
        let q = Matrix::rotation(0.4) * Matrix::translation(1.0, 2.0);
        let via_glam = q.to_glam() * p;
        let direct = q * Vec2::new(1.0, 2.0);
        assert_abs_diff_eq!(via_glam.x, direct.x, epsilon = 1e-12);
        assert_abs_diff_eq!(via_glam.y, direct.y, epsilon = 1e-12);
    }

    #[test]
    fn test_f_transform() {
        let f = f_transform(Matrix::scaling(2.0, 2.0));
        assert_eq!(f(Vec2::new(1.0, 2.0)), Vec2::new(2.0, 4.0));
    }
}
