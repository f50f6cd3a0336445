//! 2D vector type and vector primitives.
//!
//! [`Vec2`] is an immutable pair of `f64` components. Every operation is
//! available both as a method and as a free function with the same name
//! (`v.dot(w)` and [`dot(v, w)`](dot)), so call sites can pick whichever
//! reads better. [`add`] and [`sub`] map to the `+` and `-` operators.
//!
//! # Conventions
//!
//! Angles are in radians. Positive angles rotate counter-clockwise in a
//! right-handed frame with the y axis pointing up.
//!
//! # Usage
//!
//! ```rust
//! use vecla_math::{Vec2, add, magnitude, normalize};
//!
//! let v = add(Vec2::new(1.0, 2.0), Vec2::new(2.0, 2.0));
//! assert_eq!(v, Vec2::new(3.0, 4.0));
//! assert_eq!(magnitude(v), 5.0);
//! assert_eq!(normalize(v), Vec2::new(0.6, 0.8));
//! ```

use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use vecla_core::{Error, Result};

/// A 2D vector or point.
///
/// # Components
///
/// Access via `.x`, `.y` or index `[0]`, `[1]`.
///
/// # Example
///
/// ```rust
/// use vecla_math::Vec2;
///
/// let v = Vec2::new(3.0, 4.0);
/// assert_eq!(v.x, 3.0);
/// assert_eq!(v[1], 4.0);
/// assert_eq!(v.magnitude(), 5.0);
/// ```
///
/// With the `serde` feature a vector is (de)serialized as an `[x, y]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 2]", into = "[f64; 2]"))]
#[repr(C)]
pub struct Vec2 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
}

impl Vec2 {
    /// Zero vector (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit X vector (1, 0).
    pub const X: Self = Self::new(1.0, 0.0);

    /// Unit Y vector (0, 1).
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to the same value.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Perpendicular vector `(-y, x)`.
    ///
    /// This is a 90° counter-clockwise rotation. The result has the same
    /// length as `self`; it is not a unit vector.
    #[inline]
    pub fn normal(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Scales the vector to unit length.
    ///
    /// A zero vector yields NaN components. Use [`Vec2::try_finite`] on the
    /// result when the input may be degenerate.
    #[inline]
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        Self::new(self.x / mag, self.y / mag)
    }

    /// Multiplies both components by `s`.
    #[inline]
    pub fn scale(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    /// Point a fraction `t` of the way from `self` to `target`.
    ///
    /// For distinct points `t = 0.0` returns `self` and `t = 1.0` returns
    /// `target`. `t` is not clamped, so values outside `[0, 1]` extrapolate
    /// along the same line. Coincident points have no direction and yield NaN
    /// components for every `t`, including zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecla_math::Vec2;
    ///
    /// let a = Vec2::new(0.0, 0.0);
    /// let b = Vec2::new(10.0, 0.0);
    /// assert_eq!(a.towards(b, 0.25), Vec2::new(2.5, 0.0));
    /// assert_eq!(a.towards(b, 2.0), Vec2::new(20.0, 0.0));
    /// ```
    #[inline]
    pub fn towards(self, target: Self, t: f64) -> Self {
        let d = target - self;
        self + d.normalize().scale(t * d.magnitude())
    }

    /// Point `r` units away from `self` along the absolute angle `a`.
    #[inline]
    pub fn along_angle(self, a: f64, r: f64) -> Self {
        Self::new(self.x + a.cos() * r, self.y + a.sin() * r)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Rotates about the origin by `a` radians, counter-clockwise.
    #[inline]
    pub fn rotate(self, a: f64) -> Self {
        let (sin, cos) = a.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Rotates about `center` by `a` radians, counter-clockwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::f64::consts::FRAC_PI_2;
    /// use vecla_math::Vec2;
    ///
    /// let p = Vec2::new(4.0, 0.0).rotate_point_around(Vec2::new(2.0, 0.0), FRAC_PI_2);
    /// assert!(p.approx_eq(Vec2::new(2.0, 2.0), 1e-12));
    /// ```
    #[inline]
    pub fn rotate_point_around(self, center: Self, a: f64) -> Self {
        center + (self - center).rotate(a)
    }

    /// The point halfway between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        (self + other).scale(0.5)
    }

    /// Returns true if both components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns `self` if all components are finite.
    ///
    /// # Errors
    ///
    /// [`Error::NonFinite`] if any component is NaN or infinite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecla_math::Vec2;
    ///
    /// assert!(Vec2::new(3.0, 4.0).normalize().try_finite().is_ok());
    /// assert!(Vec2::ZERO.normalize().try_finite().is_err());
    /// ```
    pub fn try_finite(self) -> Result<Self> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(Error::NonFinite { what: "vector" })
        }
    }

    /// Component-wise comparison with an absolute tolerance.
    #[inline]
    pub fn approx_eq(self, other: Self, eps: f64) -> bool {
        vecla_core::approx_eq(self.x, other.x, eps) && vecla_core::approx_eq(self.y, other.y, eps)
    }

    /// Converts to glam DVec2.
    #[inline]
    pub fn to_glam(self) -> glam::DVec2 {
        glam::DVec2::new(self.x, self.y)
    }

    /// Creates from glam DVec2.
    #[inline]
    pub fn from_glam(v: glam::DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Adds two vectors.
#[inline]
pub fn add(v: Vec2, v2: Vec2) -> Vec2 {
    v + v2
}

/// Subtracts `v2` from `v`.
#[inline]
pub fn sub(v: Vec2, v2: Vec2) -> Vec2 {
    v - v2
}

/// Length of `v`. See [`Vec2::magnitude`].
#[inline]
pub fn magnitude(v: Vec2) -> f64 {
    v.magnitude()
}

/// Perpendicular of `v`. See [`Vec2::normal`].
#[inline]
pub fn normal(v: Vec2) -> Vec2 {
    v.normal()
}

/// Unit vector in the direction of `v`. See [`Vec2::normalize`].
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v.normalize()
}

/// `v` scaled by `s`.
#[inline]
pub fn scale(v: Vec2, s: f64) -> Vec2 {
    v.scale(s)
}

/// Point a fraction `t` of the way from `v` to `v2`. See [`Vec2::towards`].
#[inline]
pub fn towards(v: Vec2, v2: Vec2, t: f64) -> Vec2 {
    v.towards(v2, t)
}

/// Point `r` units from `v` along angle `a`. See [`Vec2::along_angle`].
#[inline]
pub fn along_angle(v: Vec2, a: f64, r: f64) -> Vec2 {
    v.along_angle(a, r)
}

/// Distance between `v` and `v2`.
#[inline]
pub fn distance(v: Vec2, v2: Vec2) -> f64 {
    v.distance(v2)
}

/// Dot product of `v` and `v2`.
#[inline]
pub fn dot(v: Vec2, v2: Vec2) -> f64 {
    v.dot(v2)
}

/// Rotates `v` about the origin. See [`Vec2::rotate`].
#[inline]
pub fn rotate(v: Vec2, a: f64) -> Vec2 {
    v.rotate(a)
}

/// Rotates `v` about `center`. See [`Vec2::rotate_point_around`].
#[inline]
pub fn rotate_point_around(v: Vec2, center: Vec2, a: f64) -> Vec2 {
    v.rotate_point_around(center, a)
}

/// Midpoint of `v` and `v2`.
#[inline]
pub fn midpoint(v: Vec2, v2: Vec2) -> Vec2 {
    v.midpoint(v2)
}

impl Index<usize> for Vec2 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of bounds: {}", i),
        }
    }
}

// Vec2 + Vec2
impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

// Vec2 - Vec2
impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

// Vec2 * f64
impl Mul<f64> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

// f64 * Vec2
impl Mul<Vec2> for f64 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs.scale(self)
    }
}

// Vec2 / f64
impl Div<f64> for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl From<[f64; 2]> for Vec2 {
    #[inline]
    fn from(a: [f64; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<(f64, f64)> for Vec2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for [f64; 2] {
    #[inline]
    fn from(v: Vec2) -> [f64; 2] {
        v.to_array()
    }
}

impl TryFrom<&[f64]> for Vec2 {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self> {
        match values {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(Error::InvalidLength {
                expected: 2,
                actual: values.len(),
            }),
        }
    }
}

impl From<glam::DVec2> for Vec2 {
    #[inline]
    fn from(v: glam::DVec2) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec2> for glam::DVec2 {
    #[inline]
    fn from(v: Vec2) -> glam::DVec2 {
        v.to_glam()
    }
}
