use rand::Rng;

use std::f64::consts::TAU;
use std::fmt;
use std::ops;

/// A fixed sized vector that is generic over its type and size.
///
/// Equality is exact floating point comparison, so `==` is only
/// suitable for comparing against constants such as the zero vector.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    array: [T; N],
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Gets the first component of a Vector with at least one dimension.
    pub fn x(&self) -> T {
        const { assert!(N > 0, "not enough dimensions") }
        self[0]
    }

    /// Gets the second component of a Vector with at least two dimensions.
    pub fn y(&self) -> T {
        const { assert!(N > 1, "not enough dimensions") }
        self[1]
    }

    /// Gets the third component of a Vector with at least three dimensions.
    pub fn z(&self) -> T {
        const { assert!(N > 2, "not enough dimensions") }
        self[2]
    }

    /// Gets the fourth component of a Vector with at least four dimensions.
    pub fn w(&self) -> T {
        const { assert!(N > 3, "not enough dimensions") }
        self[3]
    }
}

impl<T: Copy + Default, const N: usize> Vector<T, N> {
    /// Copies the first `P` components into a new vector, padding with `T::default()`.
    pub fn resize<const P: usize>(self) -> Vector<T, P> {
        let mut out = Vector::default();
        for i in 0..P.min(N) {
            out[i] = self[i];
        }
        out
    }
}

impl<T: ops::Mul<Output = T> + std::iter::Sum, const N: usize> Vector<T, N> {
    pub fn dot(self, rhs: Self) -> T {
        self.array.into_iter()
            .zip(rhs.array)
            .map(|(a, b)| a * b)
            .sum::<T>()
    }
}

impl<const N: usize> Vector<f64, N> {
    pub fn length_squared(&self) -> f64 {
        self.dot(*self)
    }

    /// Calculates the euclidian magnitude of a vector.
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Returns a normalized vector pointing in the same direction.
    /// The zero vector stays the zero vector.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0. {
            return Self::default();
        }
        self * (1. / len)
    }

    pub fn add_scalar(self, s: f64) -> Self {
        Self { array: self.array.map(|x| x + s) }
    }

    pub fn sub_scalar(self, s: f64) -> Self {
        Self { array: self.array.map(|x| x - s) }
    }
}

impl<T> Vector<T, 2>
where
    T: Copy + ops::Mul<Output = T> + ops::Sub<Output = T>,
{
    /// The z component of the cross product of the two vectors lifted into the xy plane.
    pub fn cross(self, rhs: Self) -> T {
        self.array[0] * rhs.array[1] - self.array[1] * rhs.array[0]
    }
}

impl<T> Vector<T, 3>
where
    T: Copy + ops::Mul<Output = T> + ops::Sub<Output = T>,
{
    pub fn cross(self, rhs: Self) -> Self {
        Self { array: [
            self.array[1] * rhs.array[2] - self.array[2] * rhs.array[1],
            self.array[2] * rhs.array[0] - self.array[0] * rhs.array[2],
            self.array[0] * rhs.array[1] - self.array[1] * rhs.array[0],
        ] }
    }
}

impl Vector<f64, 3> {
    /// Reflects a direction about the (normalized) normal `n`.
    pub fn reflect(self, n: Self) -> Self {
        self - n * (2. * self.dot(n))
    }

    /// Appends `w = 1`, turning the vector into a homogeneous point.
    pub fn to_homogeneous(self) -> Vector<f64, 4> {
        let [x, y, z] = self.array;
        Vector::from([x, y, z, 1.])
    }

    /// Samples a point uniformly distributed inside the unit ball.
    ///
    /// Picks an azimuth and a polar angle such that directions are uniform on
    /// the sphere, then takes the cube root of the radius so that the points
    /// are uniform by volume rather than clustered around the center.
    pub fn random_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let u: f64 = rng.gen();
        let v: f64 = rng.gen();

        let theta = TAU * u;
        let phi = (2. * v - 1.).acos();
        let r = rng.gen::<f64>().cbrt();

        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();

        Self::from([
            r * sin_phi * cos_theta,
            r * sin_phi * sin_theta,
            r * cos_phi,
        ])
    }
}

impl Vector<f64, 4> {
    /// Divides by `w` and drops it. Returns the zero vector for `w == 0`.
    pub fn to_cartesian(self) -> Vector<f64, 3> {
        let w = self.w();
        if w == 0. {
            return Vector::default();
        }
        Vector::from([self.x() / w, self.y() / w, self.z() / w])
    }
}

impl<T: ops::Neg<Output = T>, const N: usize> ops::Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { array: self.array.map(|x| -x) }
    }
}

impl<T: ops::AddAssign, const N: usize> ops::Add for Vector<T, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: ops::AddAssign, const N: usize> ops::AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.array.iter_mut().zip(rhs.array) {
            *a += b;
        }
    }
}

impl<T: ops::SubAssign, const N: usize> ops::Sub for Vector<T, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: ops::SubAssign, const N: usize> ops::SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.array.iter_mut().zip(rhs.array) {
            *a -= b;
        }
    }
}

/// Component-wise product.
impl<T: Copy + ops::Mul<Output = T>, const N: usize> ops::Mul<Self> for Vector<T, N> {
    type Output = Self;
    fn mul(mut self, rhs: Self) -> Self::Output {
        for i in 0..N {
            self.array[i] = self.array[i] * rhs.array[i]
        }
        self
    }
}

impl<T: Copy + ops::Mul<Output = T>, const N: usize> ops::Mul<T> for Vector<T, N> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self::Output {
        Self { array: self.array.map(|x| x * rhs) }
    }
}

impl<T: Copy + ops::Div<Output = T>, const N: usize> ops::Div<T> for Vector<T, N> {
    type Output = Self;
    fn div(self, rhs: T) -> Self::Output {
        Self { array: self.array.map(|x| x / rhs) }
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(val: Vector<T, N>) -> Self {
        val.array
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(array: [T; N]) -> Self {
        Self { array }
    }
}

impl<T, const N: usize> ops::Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.array[idx]
    }
}

impl<T, const N: usize> ops::IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.array[idx]
    }
}

impl<T: Default + Copy, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self { array: [T::default(); N] }
    }
}

impl<const N: usize> fmt::Display for Vector<f64, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, x) in self.array.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x:.4}")?;
        }
        write!(f, "}}")
    }
}
