//! Geometric primitives used by the plotting pipeline.
//!
//! [`Vector2`] is shared by every coordinate space (pixels, normalized and
//! math units). Associated functions return new values, while the `_mut`
//! style methods update the receiver in place.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Default tolerance used by [`Vector2::is_normalized`].
pub const NORMALIZED_TOLERANCE: f64 = 1e-6;

/// A 2D vector with `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vector2 {
    /// Create a new vector.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The zero vector.
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Build a vector from a width/height pair.
    pub fn from_width_height(width: f64, height: f64) -> Self {
        Self::new(width, height)
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Component-wise product.
    pub fn scale_vec(a: Self, b: Self) -> Self {
        Self::new(a.x * b.x, a.y * b.y)
    }

    /// Multiply this vector component-wise by `other`.
    pub fn scale_vec_mut(&mut self, other: Self) {
        self.x *= other.x;
        self.y *= other.y;
    }

    /// Uniformly scaled copy.
    pub fn scale(a: Self, factor: f64) -> Self {
        Self::new(a.x * factor, a.y * factor)
    }

    /// Uniformly scale this vector.
    pub fn scale_mut(&mut self, factor: f64) {
        self.x *= factor;
        self.y *= factor;
    }

    /// Component-wise reciprocal.
    ///
    /// Zero components produce infinities.
    pub fn inverse(a: Self) -> Self {
        Self::new(1.0 / a.x, 1.0 / a.y)
    }

    /// Replace each component with its reciprocal.
    pub fn invert(&mut self) {
        self.x = 1.0 / self.x;
        self.y = 1.0 / self.y;
    }

    /// Copy with the X component negated.
    pub fn flip_x(a: Self) -> Self {
        Self::new(-a.x, a.y)
    }

    /// Negate the X component in place.
    pub fn flip_x_mut(&mut self) {
        self.x = -self.x;
    }

    /// Copy with the Y component negated.
    pub fn flip_y(a: Self) -> Self {
        Self::new(a.x, -a.y)
    }

    /// Negate the Y component in place.
    pub fn flip_y_mut(&mut self) {
        self.y = -self.y;
    }

    /// Unit-length copy of `a`.
    ///
    /// A zero-length input yields NaN components.
    pub fn normalized(a: Self) -> Self {
        Self::scale(a, 1.0 / a.length())
    }

    /// Scale this vector to unit length.
    ///
    /// A zero-length vector becomes NaN.
    pub fn normalize(&mut self) {
        let len = self.length();
        self.scale_mut(1.0 / len);
    }

    /// Check whether the length is within `tolerance` of one.
    pub fn is_normalized(self, tolerance: f64) -> bool {
        (self.length() - 1.0).abs() < tolerance
    }

    /// Angle in radians of the direction from `a` to `b`, in `(-PI, PI]`.
    pub fn angle_between(a: Self, b: Self) -> f64 {
        (b.y - a.y).atan2(b.x - a.x)
    }

    /// Angle in radians of this vector relative to the positive X axis.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Check whether both components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::scale(self, rhs)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
