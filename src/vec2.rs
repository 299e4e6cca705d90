use core::fmt;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

use crate::EPSILON;

const TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Two-component float vector used for world coordinates and tile extents. All operations
/// return new values except [Vec2::set] and [Vec2::floor], which work in place.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

fn float_equals(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() < EPSILON
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }
    pub fn scale(self, n: f64) -> Vec2 {
        Vec2::new(self.x * n, self.y * n)
    }
    pub fn scale_x(self, n: f64) -> Vec2 {
        Vec2::new(self.x * n, self.y)
    }
    pub fn scale_y(self, n: f64) -> Vec2 {
        Vec2::new(self.x, self.y * n)
    }
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }
    /// The z component of the 3D cross product of the two vectors.
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }
    /// Counter-clockwise perpendicular.
    pub fn perp(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }
    pub fn length_sq(self) -> f64 {
        self.dot(self)
    }
    pub fn length(self) -> f64 {
        self.length_sq().sqrt()
    }
    /// Scales the vector to unit length. A zero vector is returned unchanged.
    pub fn normalize(self) -> Vec2 {
        let l = self.length();
        if l > 0.0 {
            self.scale(1.0 / l)
        } else {
            self
        }
    }
    /// Unit vector in the same direction, or [Vec2::ZERO] for a zero-length input.
    pub fn unit(self) -> Vec2 {
        let l = self.length();
        if l > 0.0 {
            self.scale(1.0 / l)
        } else {
            Vec2::ZERO
        }
    }
    /// Projects onto an arbitrary vector. Projecting onto a zero-length vector yields
    /// [Vec2::ZERO].
    pub fn project(self, other: Vec2) -> Vec2 {
        let l = other.length();
        if l > 0.0 {
            other.unit().scale(self.dot(other) / l)
        } else {
            Vec2::ZERO
        }
    }
    /// Projects onto a direction that is assumed to already be of unit length.
    pub fn project_normal(self, dir: Vec2) -> Vec2 {
        dir.scale(self.dot(dir))
    }
    /// Reflects about the line orthogonal to the unit `normal`.
    pub fn reflect(self, normal: Vec2) -> Vec2 {
        self - self.project_normal(normal).scale(2.0)
    }
    /// Vector pointing from `self` to `other`.
    pub fn to(self, other: Vec2) -> Vec2 {
        other - self
    }
    /// Rotates around `origin` by a signed angle given in degrees.
    pub fn rotate(self, origin: Vec2, angle_in_deg: f64) -> Vec2 {
        let (sin, cos) = (angle_in_deg * TO_RAD).sin_cos();
        let d = self - origin;
        Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos) + origin
    }
    pub fn floor(&mut self) -> &mut Self {
        self.x = self.x.floor();
        self.y = self.y.floor();
        self
    }
    pub fn floored(mut self) -> Vec2 {
        *self.floor()
    }
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
    /// True only when both components are NaN.
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() && self.y.is_nan()
    }
}

/// Component-wise comparison with an absolute tolerance of [EPSILON]. Two NaN components on the
/// same axis compare equal.
impl PartialEq for Vec2 {
    fn eq(&self, other: &Self) -> bool {
        let x_nan = self.x.is_nan() && other.x.is_nan();
        let y_nan = self.y.is_nan() && other.y.is_nan();
        (x_nan || float_equals(self.x, other.x)) && (y_nan || float_equals(self.y, other.y))
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, n: f64) -> Vec2 {
        self.scale(n)
    }
}

impl Zero for Vec2 {
    fn zero() -> Vec2 {
        Vec2::ZERO
    }
    fn is_zero(&self) -> bool {
        Vec2::is_zero(self)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(a.scale_x(3.0), Vec2::new(3.0, 2.0));
        assert_eq!(a.scale_y(3.0), Vec2::new(1.0, 6.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        assert_eq!(a.dot(b), 1.0);
        assert_eq!(a.cross(b), -7.0);
        assert_eq!(a.to(b), Vec2::new(2.0, -3.0));
        assert_eq!(a.perp(), Vec2::new(-2.0, 1.0));
    }

    #[test]
    fn length_and_normalize() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length_sq(), 25.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.normalize(), Vec2::new(0.6, 0.8));
        assert_eq!(v.unit(), v.normalize());
        assert!(Vec2::ZERO.normalize().is_zero());
    }

    /// Zero-length operands produce the zero vector rather than NaN or infinity.
    #[test]
    fn zero_length_operands() {
        let v = Vec2::new(2.0, 5.0);
        assert!(Vec2::ZERO.unit().is_zero());
        assert!(v.project(Vec2::ZERO).is_zero());
    }

    #[test]
    fn projection_and_reflection() {
        let v = Vec2::new(2.0, 3.0);
        assert_eq!(v.project(Vec2::new(4.0, 0.0)), Vec2::new(2.0, 0.0));
        assert_eq!(v.project_normal(Vec2::new(0.0, 1.0)), Vec2::new(0.0, 3.0));
        assert_eq!(v.reflect(Vec2::new(0.0, 1.0)), Vec2::new(2.0, -3.0));
    }

    #[test]
    fn rotation_about_origin() {
        let v = Vec2::new(2.0, 1.0);
        let origin = Vec2::new(1.0, 1.0);
        assert_eq!(v.rotate(origin, 90.0), Vec2::new(1.0, 2.0));
        assert_eq!(v.rotate(origin, -90.0), Vec2::new(1.0, 0.0));
        assert_eq!(v.rotate(origin, 360.0), v);
    }

    #[test]
    fn floor_in_place_and_copy() {
        let mut v = Vec2::new(1.7, -0.2);
        assert_eq!(v.floored(), Vec2::new(1.0, -1.0));
        assert_eq!(v, Vec2::new(1.7, -0.2));
        v.floor();
        assert_eq!(v, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn epsilon_and_nan_equality() {
        assert_eq!(Vec2::new(1.0, 1.0), Vec2::new(1.0 + 1e-10, 1.0));
        assert_ne!(Vec2::new(1.0, 1.0), Vec2::new(1.0 + 1e-6, 1.0));
        let nan = Vec2::new(f64::NAN, f64::NAN);
        assert_eq!(nan, nan);
        assert!(nan.is_nan());
        assert!(!Vec2::new(f64::NAN, 0.0).is_nan());
        assert_ne!(Vec2::new(f64::NAN, 0.0), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn set_and_zero() {
        let mut v = Vec2::zero();
        assert!(v.is_zero());
        v.set(4.0, 2.0);
        assert_eq!(v, Vec2::new(4.0, 2.0));
        assert!(!v.is_zero());
    }
}
