//! Value-type vectors.
//!
//! The coordinate system is right-handed: x points right, y points up and
//! the camera looks down the negative z axis.
//!
//! ```text
//!     y
//!     |
//!     *-- x
//!    /
//!   z
//! ```

use std::ops::{Add, Mul, Neg, Sub};

use approx::AbsDiffEq;
use rand::Rng;
use serde::{Deserialize, Serialize};

// ── Vector2 ───────────────────────────────────────────────────────────────────

/// A point on the 2D drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl AbsDiffEq for Vector2 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

// ── Vector3 ───────────────────────────────────────────────────────────────────

/// A 3D vector. Every operation returns a new value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// A vector whose components are drawn uniformly from `[0, 1)`.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(rng.gen(), rng.gen(), rng.gen())
    }

    pub fn add(self, that: Self) -> Self {
        Self::new(self.x + that.x, self.y + that.y, self.z + that.z)
    }

    pub fn sub(self, that: Self) -> Self {
        Self::new(self.x - that.x, self.y - that.y, self.z - that.z)
    }

    pub fn scale(self, scalar: f64) -> Self {
        Self::new(scalar * self.x, scalar * self.y, scalar * self.z)
    }

    /// Component-wise product.
    pub fn hadamard(self, that: Self) -> Self {
        Self::new(self.x * that.x, self.y * that.y, self.z * that.z)
    }

    /// The vector pointing the opposite way.
    pub fn inverse(self) -> Self {
        self.scale(-1.0)
    }

    pub fn dot(self, that: Self) -> f64 {
        self.x * that.x + self.y * that.y + self.z * that.z
    }

    pub fn squared_length(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length.
    ///
    /// This takes a square root; prefer [`Vector3::squared_length`] when the
    /// value is only compared against something.
    pub fn length(self) -> f64 {
        self.squared_length().sqrt()
    }

    pub fn squared_distance(self, that: Self) -> f64 {
        that.sub(self).squared_length()
    }

    /// The largest of the three components.
    pub fn max_component(self) -> f64 {
        self.x.max(self.y).max(self.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::add(self, rhs)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::sub(self, rhs)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        self.inverse()
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Vector3 {
        self.scale(rhs)
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}
