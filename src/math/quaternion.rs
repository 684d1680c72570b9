use super::angle::Rad;
use super::euler::Euler;
use super::matrix::Matrix;
use super::vector::Vector;

use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::ops;

/// Magnitude of the pitch term `r·j - i·k` above which [`Quaternion::to_euler`]
/// treats the rotation as gimbal locked.
///
/// The exact boundary would be 0.5 (pitch of ±90°). The margin keeps the
/// closed-form arctangents away from their degenerate arguments and may be
/// tuned; it is not a mathematical constant.
pub const GIMBAL_LOCK_THRESHOLD: f64 = 0.499;

/// A quaternion with real part `r` and imaginary parts `i`, `j` and `k`.
///
/// Only unit quaternions represent pure rotations.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quaternion {
    pub r: f64,
    pub i: f64,
    pub j: f64,
    pub k: f64,
}

impl Quaternion {
    pub const fn new(r: f64, i: f64, j: f64, k: f64) -> Self {
        Self { r, i, j, k }
    }

    /// The quaternion that does not rotate.
    pub const fn identity() -> Self {
        Self::new(1., 0., 0., 0.)
    }

    /// Rotation about `axis` by `angle`. The axis must be normalized.
    pub fn from_axis_angle<A: Into<Rad<f64>>>(axis: Vector<f64, 3>, angle: A) -> Self {
        let (s, c) = (angle.into().0 / 2.).sin_cos();
        Self::new(c, s * axis.x(), s * axis.y(), s * axis.z())
    }

    pub fn length(&self) -> f64 {
        (self.r * self.r + self.i * self.i + self.j * self.j + self.k * self.k).sqrt()
    }

    /// Rescales to unit length, undoing accumulated floating point drift.
    /// The zero quaternion becomes the identity.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0. {
            return Self::identity();
        }
        self.scale(1. / len)
    }

    pub fn scale(self, s: f64) -> Self {
        Self::new(self.r * s, self.i * s, self.j * s, self.k * s)
    }

    pub fn conjugate(self) -> Self {
        Self::new(self.r, -self.i, -self.j, -self.k)
    }

    /// Hamilton product `self · rhs`.
    ///
    /// Rotating by `a` and then by `b` is `b.mult(a)`.
    pub fn mult(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Self::new(
            a.r * b.r - a.i * b.i - a.j * b.j - a.k * b.k,
            a.r * b.i + a.i * b.r + a.j * b.k - a.k * b.j,
            a.r * b.j - a.i * b.k + a.j * b.r + a.k * b.i,
            a.r * b.k + a.i * b.j - a.j * b.i + a.k * b.r,
        )
    }

    /// Rotates `v` by this (unit) quaternion.
    pub fn rotate(self, v: Vector<f64, 3>) -> Vector<f64, 3> {
        let p = Self::new(0., v.x(), v.y(), v.z());
        let q = self.mult(p).mult(self.conjugate());
        Vector::from([q.i, q.j, q.k])
    }

    /// Converts a unit quaternion into a rotation matrix.
    pub fn to_matrix3(self) -> Matrix<f64, 3> {
        let Self { r, i, j, k } = self;
        Matrix::from([
            [
                1. - (2. * j * j + 2. * k * k),
                2. * i * j + 2. * k * r,
                2. * i * k - 2. * j * r,
            ],
            [
                2. * i * j - 2. * k * r,
                1. - (2. * i * i + 2. * k * k),
                2. * j * k + 2. * i * r,
            ],
            [
                2. * i * k + 2. * j * r,
                2. * j * k - 2. * i * r,
                1. - (2. * i * i + 2. * j * j),
            ],
        ])
    }

    /// Decomposes a unit quaternion into rotations about x, y and z, such that
    /// `q.to_euler().to_quaternion()` rotates like `q`.
    ///
    /// Near a pitch of ±90° (see [`GIMBAL_LOCK_THRESHOLD`]) the x and z axes
    /// coincide and only their combined angle is known. Then x is set to zero
    /// and the whole angle goes into z.
    pub fn to_euler(self) -> Euler {
        let Self { r, i, j, k } = self;
        let gimbal = r * j - i * k;

        if gimbal > GIMBAL_LOCK_THRESHOLD {
            return Euler::new(Rad(0.), Rad(FRAC_PI_2), Rad::atan2(i, r) * -2.);
        }
        if gimbal < -GIMBAL_LOCK_THRESHOLD {
            return Euler::new(Rad(0.), Rad(-FRAC_PI_2), Rad::atan2(i, r) * 2.);
        }

        Euler::new(
            Rad::atan2(2. * (r * i + j * k), 1. - 2. * (i * i + j * j)),
            Rad::asin((2. * gimbal).clamp(-1., 1.)),
            Rad::atan2(2. * (r * k + i * j), 1. - 2. * (j * j + k * k)),
        )
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl ops::Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.r + rhs.r, self.i + rhs.i, self.j + rhs.j, self.k + rhs.k)
    }
}

impl ops::Sub for Quaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.r - rhs.r, self.i - rhs.i, self.j - rhs.j, self.k - rhs.k)
    }
}

impl ops::Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mult(rhs)
    }
}

impl From<Matrix<f64, 3>> for Quaternion {
    fn from(m: Matrix<f64, 3>) -> Self {
        m.to_quaternion()
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:.4}, {:.4}, {:.4}, {:.4}}}", self.r, self.i, self.j, self.k)
    }
}
