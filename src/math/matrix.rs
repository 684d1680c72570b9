use super::angle::Rad;
use super::quaternion::Quaternion;
use super::vector::Vector;

use std::fmt;
use std::ops;

/// A column based matrix type that is generic over its type and size.
/// Where `M` is the number of columns and `N` the number of rows.
///
/// Indexing yields a column, so `m[col][row]` addresses a single element.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T, const M: usize, const N: usize = M> {
    cols: [Vector<T, N>; M],
}

impl<T: Default + Copy, const M: usize> Matrix<T, M, M> {
    /// Creates a diagonal matrix with `value` on its main diagonal and zeroes elsewhere.
    pub fn diag(value: T) -> Self {
        let mut out = Self::default();
        for i in 0..M {
            out.cols[i][i] = value;
        }
        out
    }

    /// Creates a diagonal matrix from a diagonal.
    pub fn from_diag(diag: Vector<T, M>) -> Self {
        let mut out = Self::default();
        for i in 0..M {
            out[i][i] = diag[i];
        }
        out
    }

    /// Returns a transposed matrix.
    pub fn transpose(mut self) -> Self {
        for i in 1..M {
            for j in 0..i {
                let tmp = self[i][j];
                self[i][j] = self[j][i];
                self[j][i] = tmp;
            }
        }
        self
    }
}

impl<T: Default + Copy + From<bool>, const M: usize> Matrix<T, M, M> {
    /// Creates a unit matrix where the unit is derived from `true`.
    pub fn unit() -> Self {
        Self::diag(true.into())
    }

    /// Creates a translation matrix from a translation vector.
    /// The dimension of the vector must be one less than the dimension of the matrix.
    pub fn from_translation<const P: usize>(vec: Vector<T, P>) -> Self {
        const { assert!(P + 1 == M, "bad vector dimension") };

        let mut out = Self::unit();
        for i in 0..P {
            out[M - 1][i] = vec[i];
        }
        out
    }

    /// Creates a uniform scaling matrix.
    pub fn from_scale(scale: T) -> Self {
        let mut out = Self::diag(scale);
        out[M - 1][M - 1] = true.into();
        out
    }
}

impl<T, const M: usize> Matrix<T, M, M>
where
    T: Default + Copy + ops::AddAssign + ops::Mul<Output = T>,
{
    /// Standard matrix product `self · rhs`.
    ///
    /// Applied to column vectors the result first applies `rhs`, then `self`.
    pub fn mult(self, rhs: Self) -> Self {
        self * rhs
    }

    /// Product for consumers that read the storage as row-major.
    ///
    /// This is [`mult`](Self::mult) with the operands switched:
    /// `a.mult_x(b) == b.mult(a)`.
    pub fn mult_x(self, rhs: Self) -> Self {
        rhs * self
    }
}

impl Matrix<f64, 3> {
    /// Returns a matrix rotating about `axis` by `angle`.
    ///
    /// Looking down the axis towards the origin the rotation is counterclockwise.
    /// The axis does not need to be normalized, but must not be the zero vector.
    pub fn rotate_axis<A: Into<Rad<f64>>>(axis: Vector<f64, 3>, angle: A) -> Self {
        let [x, y, z]: [f64; 3] = axis.into();
        let l2 = axis.length_squared();
        let l1 = l2.sqrt();
        let (s, c) = angle.into().0.sin_cos();

        Self::from([
            [
                (x * x + (y * y + z * z) * c) / l2,
                (x * y * (1. - c) + z * l1 * s) / l2,
                (x * z * (1. - c) - y * l1 * s) / l2,
            ],
            [
                (x * y * (1. - c) - z * l1 * s) / l2,
                (y * y + (x * x + z * z) * c) / l2,
                (y * z * (1. - c) + x * l1 * s) / l2,
            ],
            [
                (x * z * (1. - c) + y * l1 * s) / l2,
                (y * z * (1. - c) - x * l1 * s) / l2,
                (z * z + (x * x + y * y) * c) / l2,
            ],
        ])
    }

    pub fn mult_v3(self, v: Vector<f64, 3>) -> Vector<f64, 3> {
        self * v
    }

    pub fn determinant(&self) -> f64 {
        let [[a0, a1, a2], [a3, a4, a5], [a6, a7, a8]]: [[f64; 3]; 3] = (*self).into();
        a0 * a4 * a8 + a2 * a3 * a7 + a1 * a5 * a6
            - a2 * a4 * a6 - a1 * a3 * a8 - a0 * a5 * a7
    }

    /// Embeds the matrix as the upper left block of a 4x4 matrix.
    pub fn to_matrix4(self) -> Matrix<f64, 4> {
        let mut out = Matrix::unit();
        for i in 0..3 {
            out[i] = self[i].resize();
        }
        out
    }

    /// Converts a rotation matrix into a quaternion.
    ///
    /// The matrix is assumed to be special orthogonal (a pure rotation).
    /// When the trace is not positive the largest diagonal element picks the
    /// branch, which keeps the divisor away from zero near half turns.
    pub fn to_quaternion(self) -> Quaternion {
        let [[m0, m1, m2], [m3, m4, m5], [m6, m7, m8]]: [[f64; 3]; 3] = self.into();
        let t = m0 + m4 + m8;

        if t > 0. {
            let s = (t + 1.).sqrt() * 2.;
            Quaternion::new(0.25 * s, (m5 - m7) / s, (m6 - m2) / s, (m1 - m3) / s)
        } else if m0 > m4 && m0 > m8 {
            let s = (1. + m0 - m4 - m8).sqrt() * 2.;
            Quaternion::new((m5 - m7) / s, 0.25 * s, (m3 + m1) / s, (m6 + m2) / s)
        } else if m4 > m8 {
            let s = (1. + m4 - m0 - m8).sqrt() * 2.;
            Quaternion::new((m6 - m2) / s, (m3 + m1) / s, 0.25 * s, (m7 + m5) / s)
        } else {
            let s = (1. + m8 - m0 - m4).sqrt() * 2.;
            Quaternion::new((m1 - m3) / s, (m6 + m2) / s, (m7 + m5) / s, 0.25 * s)
        }
    }
}

impl Matrix<f64, 4> {
    /// Creates a scaling matrix with a separate factor per axis.
    pub fn from_nonuniform_scale(scale: Vector<f64, 3>) -> Self {
        Self::from_diag(scale.to_homogeneous())
    }

    /// Creates a rotation matrix around `x` axis.
    pub fn from_angle_x<A: Into<Rad<f64>>>(angle: A) -> Self {
        Matrix::<f64, 3>::rotate_axis(Vector::from([1., 0., 0.]), angle).to_matrix4()
    }

    /// Creates a rotation matrix around `y` axis.
    pub fn from_angle_y<A: Into<Rad<f64>>>(angle: A) -> Self {
        Matrix::<f64, 3>::rotate_axis(Vector::from([0., 1., 0.]), angle).to_matrix4()
    }

    /// Creates a rotation matrix around `z` axis.
    pub fn from_angle_z<A: Into<Rad<f64>>>(angle: A) -> Self {
        Matrix::<f64, 3>::rotate_axis(Vector::from([0., 0., 1.]), angle).to_matrix4()
    }

    /// Orthographic projection mapping the given box onto the -1..1 cube.
    pub fn ortho(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Self {
        let tx = (right + left) / (right - left);
        let ty = (top + bottom) / (top - bottom);
        let tz = (far + near) / (far - near);
        Self::from([
            [2. / (right - left), 0., 0., 0.],
            [0., 2. / (top - bottom), 0., 0.],
            [0., 0., -2. / (far - near), 0.],
            [-tx, -ty, -tz, 1.],
        ])
    }

    /// Transforms a point with an implied `w = 1`. No perspective divide is done.
    pub fn mult_v3(self, v: Vector<f64, 3>) -> Vector<f64, 3> {
        (self * v.to_homogeneous()).resize()
    }

    pub fn mult_v4(self, v: Vector<f64, 4>) -> Vector<f64, 4> {
        self * v
    }

    pub fn determinant(&self) -> f64 {
        let (a, b) = self.sub_determinants();
        a[0] * b[5] - a[1] * b[4] + a[2] * b[3] + a[3] * b[2] - a[4] * b[1] + a[5] * b[0]
    }

    /// 2x2 determinants of the upper two and the lower two rows.
    fn sub_determinants(&self) -> ([f64; 6], [f64; 6]) {
        let [
            [m0, m1, m2, m3],
            [m4, m5, m6, m7],
            [m8, m9, m10, m11],
            [m12, m13, m14, m15],
        ]: [[f64; 4]; 4] = (*self).into();
        (
            [
                m0 * m5 - m4 * m1,
                m0 * m9 - m8 * m1,
                m0 * m13 - m12 * m1,
                m4 * m9 - m8 * m5,
                m4 * m13 - m12 * m5,
                m8 * m13 - m12 * m9,
            ],
            [
                m2 * m7 - m6 * m3,
                m2 * m11 - m10 * m3,
                m2 * m15 - m14 * m3,
                m6 * m11 - m10 * m7,
                m6 * m15 - m14 * m7,
                m10 * m15 - m14 * m11,
            ],
        )
    }

    /// Inverts the matrix through its adjugate.
    ///
    /// A singular matrix (determinant exactly zero) yields the unit matrix.
    pub fn inverse(self) -> Self {
        let (a, b) = self.sub_determinants();
        let det = a[0] * b[5] - a[1] * b[4] + a[2] * b[3] + a[3] * b[2] - a[4] * b[1] + a[5] * b[0];
        if det == 0. {
            log::trace!("inverting singular matrix, falling back to unit");
            return Self::unit();
        }
        let id = 1. / det;

        let [
            [m0, m1, m2, m3],
            [m4, m5, m6, m7],
            [m8, m9, m10, m11],
            [m12, m13, m14, m15],
        ]: [[f64; 4]; 4] = self.into();

        Self::from([
            [
                id * ( m5 * b[5] - m9 * b[4] + m13 * b[3]),
                id * (-m1 * b[5] + m9 * b[2] - m13 * b[1]),
                id * ( m1 * b[4] - m5 * b[2] + m13 * b[0]),
                id * (-m1 * b[3] + m5 * b[1] - m9 * b[0]),
            ],
            [
                id * (-m4 * b[5] + m8 * b[4] - m12 * b[3]),
                id * ( m0 * b[5] - m8 * b[2] + m12 * b[1]),
                id * (-m0 * b[4] + m4 * b[2] - m12 * b[0]),
                id * ( m0 * b[3] - m4 * b[1] + m8 * b[0]),
            ],
            [
                id * ( m7 * a[5] - m11 * a[4] + m15 * a[3]),
                id * (-m3 * a[5] + m11 * a[2] - m15 * a[1]),
                id * ( m3 * a[4] - m7 * a[2] + m15 * a[0]),
                id * (-m3 * a[3] + m7 * a[1] - m11 * a[0]),
            ],
            [
                id * (-m6 * a[5] + m10 * a[4] - m14 * a[3]),
                id * ( m2 * a[5] - m10 * a[2] + m14 * a[1]),
                id * (-m2 * a[4] + m6 * a[2] - m14 * a[0]),
                id * ( m2 * a[3] - m6 * a[1] + m10 * a[0]),
            ],
        ])
    }

    /// Truncates to the upper left 3x3 block.
    pub fn to_matrix3(self) -> Matrix<f64, 3> {
        Matrix::from([self[0].resize(), self[1].resize(), self[2].resize()])
    }

    pub fn translate_part(&self) -> Vector<f64, 3> {
        self[3].resize()
    }

    pub fn scale_part(&self) -> Vector<f64, 3> {
        Vector::from([self[0][0], self[1][1], self[2][2]])
    }
}

/// A rotation block plus a translation column, behaving like a 4x4 matrix
/// whose bottom row is always `0, 0, 0, 1`.
impl Matrix<f64, 4, 3> {
    pub fn identity() -> Self {
        Self::from_rotation_translation(Matrix::unit(), Vector::default())
    }

    pub fn from_rotation_translation(rotation: Matrix<f64, 3>, translation: Vector<f64, 3>) -> Self {
        Self::from([rotation[0], rotation[1], rotation[2], translation])
    }

    /// Rotates and then translates the point `v`.
    pub fn mult_v3(self, v: Vector<f64, 3>) -> Vector<f64, 3> {
        self * v.to_homogeneous()
    }

    pub fn rotation(&self) -> Matrix<f64, 3> {
        Matrix::from([self[0], self[1], self[2]])
    }

    pub fn to_matrix4(self) -> Matrix<f64, 4> {
        let mut out = Matrix::from_translation(self[3]);
        for i in 0..3 {
            out[i] = self[i].resize();
        }
        out
    }
}

impl<T: ops::AddAssign, const M: usize, const N: usize> ops::Add for Matrix<T, M, N> {
    type Output = Matrix<T, M, N>;

    fn add(mut self, rhs: Self) -> Self::Output {
        for (a, b) in self.cols.iter_mut().zip(rhs.cols) {
            *a += b;
        }
        self
    }
}

impl<T: ops::SubAssign, const M: usize, const N: usize> ops::Sub for Matrix<T, M, N> {
    type Output = Matrix<T, M, N>;

    fn sub(mut self, rhs: Self) -> Self::Output {
        for (a, b) in self.cols.iter_mut().zip(rhs.cols) {
            *a -= b;
        }
        self
    }
}

impl<T, const M: usize, const N: usize, const P: usize> ops::Mul<Matrix<T, M, N>> for Matrix<T, N, P>
where
    T: Default + Copy + ops::AddAssign + ops::Mul<Output = T>,
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, M, N>) -> Self::Output {
        let mut out = Self::Output::default();
        for i in 0..M {
            for j in 0..P {
                for k in 0..N {
                    out.cols[i][j] += self.cols[k][j] * rhs.cols[i][k];
                }
            }
        }
        out
    }
}

/// Transforms a column vector.
impl<T, const M: usize, const N: usize> ops::Mul<Vector<T, M>> for Matrix<T, M, N>
where
    T: Default + Copy + ops::AddAssign + ops::Mul<Output = T>,
{
    type Output = Vector<T, N>;

    fn mul(self, rhs: Vector<T, M>) -> Self::Output {
        let mut out = Self::Output::default();
        for i in 0..M {
            for j in 0..N {
                out[j] += self.cols[i][j] * rhs[i];
            }
        }
        out
    }
}

impl<T, const M: usize, const N: usize> From<Matrix<T, M, N>> for [Vector<T, N>; M] {
    fn from(val: Matrix<T, M, N>) -> Self {
        val.cols
    }
}

impl<T, const M: usize, const N: usize> From<Matrix<T, M, N>> for [[T; N]; M] {
    fn from(val: Matrix<T, M, N>) -> Self {
        val.cols.map(|col| col.into())
    }
}

impl<T, const M: usize, const N: usize> From<[Vector<T, N>; M]> for Matrix<T, M, N> {
    fn from(cols: [Vector<T, N>; M]) -> Self {
        Self { cols }
    }
}

impl<T, const M: usize, const N: usize> From<[[T; N]; M]> for Matrix<T, M, N> {
    fn from(cols: [[T; N]; M]) -> Self {
        Self { cols: cols.map(|col| col.into()) }
    }
}

impl<T, const M: usize, const N: usize> ops::Index<usize> for Matrix<T, M, N> {
    type Output = Vector<T, N>;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.cols[idx]
    }
}

impl<T, const M: usize, const N: usize> ops::IndexMut<usize> for Matrix<T, M, N> {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.cols[idx]
    }
}

impl<T: Default + Copy, const M: usize, const N: usize> Default for Matrix<T, M, N> {
    fn default() -> Self {
        Self { cols: [Vector::<T, N>::default(); M] }
    }
}

/// Prints the matrix row by row, as it would be written on paper.
impl<const M: usize, const N: usize> fmt::Display for Matrix<f64, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..N {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..M {
                write!(f, "\t{:.2}", self.cols[col][row])?;
            }
        }
        write!(f, "\t]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Deg, Matrix3, Matrix34, Matrix4};
    use std::f64::consts::PI;

    fn v3eq(a: Vector<f64, 3>, b: Vector<f64, 3>) -> bool {
        (a - b).length() < 1e-5
    }

    fn meq<const M: usize, const N: usize>(a: Matrix<f64, M, N>, b: Matrix<f64, M, N>) -> bool {
        (0..M).all(|i| (0..N).all(|j| (a[i][j] - b[i][j]).abs() < 1e-5))
    }

    /// A matrix with a non trivial value in every cell.
    fn trs() -> Matrix4 {
        Matrix4::from_translation(Vector::from([3., -2., 5.]))
            * Matrix3::rotate_axis(Vector::from([1., 2., 3.]), Rad(0.7)).to_matrix4()
            * Matrix4::from_nonuniform_scale(Vector::from([2., 0.5, 1.5]))
    }

    #[test]
    fn it_works() {
        let a: Matrix<i32, 2> = Matrix::from([
            Vector::from([1, 2]),
            Vector::from([3, 4]),
        ]);
        let b: Matrix<i32, 2> = Matrix::from([[1, 2], [3, 4]]);
        assert_eq!(Vector::from([1, 2]), a[0]);
        assert_eq!(Vector::from([3, 4]), a[1]);
        assert_eq!(a, b);
    }

    #[test]
    fn add() {
        let a = Matrix::from([[1, 2], [3, 4]]);
        let b = Matrix::from([[5, 6], [7, 8]]);
        let c = Matrix::from([[6, 8], [10, 12]]);
        assert_eq!(a + b, c);
        assert_eq!(c - b, a);
    }

    #[test]
    fn multiply() {
        let a = Matrix::from([[1, 4], [2, 5], [3, 6]]);
        let b = Matrix::from([[-1, 2, 3], [4, 5, 6]]);
        let c = Matrix::from([[12, 24], [32, 77]]);
        assert_eq!(a * b, c);
        let c = Matrix::from([[15, 22, 27], [18, 29, 36], [21, 36, 45]]);
        assert_eq!(b * a, c);
    }

    #[test]
    fn mult_conventions() {
        let a = Matrix::from([[1, 2, 3], [4, 5, 6], [7, 8, 10]]);
        let b = Matrix::from([[2, 0, 1], [1, 3, 0], [0, 1, 4]]);
        assert_eq!(a.mult(b), a * b);
        assert_eq!(a.mult_x(b), b.mult(a));
        assert_ne!(a.mult_x(b), a.mult(b));
        assert_eq!(a.mult(b).transpose(), b.transpose().mult(a.transpose()));
        assert_eq!(a.mult_x(b).transpose(), a.transpose().mult(b.transpose()));
    }

    #[test]
    fn mult_x_reads_storage_row_major() {
        // treating the flat storage as row-major, mult_x is the textbook product
        let a = Matrix::from([[1, 2], [3, 4]]);
        let b = Matrix::from([[5, 6], [7, 8]]);
        let c = Matrix::from([[1 * 5 + 2 * 7, 1 * 6 + 2 * 8], [3 * 5 + 4 * 7, 3 * 6 + 4 * 8]]);
        assert_eq!(a.mult_x(b), c);
    }

    #[test]
    fn from_translation() {
        let a = Matrix::<_, 4, 4>::from_translation([1, 2, 3].into());
        let b = Matrix::from([[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [1, 2, 3, 1]]);
        assert_eq!(a, b);
        let p = a.mult_x(Matrix::unit());
        assert_eq!(p, b);
    }

    #[test]
    fn from_scale() {
        let a = Matrix::<_, 4, 4>::from_scale(3);
        let b = Matrix::from([[3, 0, 0, 0], [0, 3, 0, 0], [0, 0, 3, 0], [0, 0, 0, 1]]);
        assert_eq!(a, b);
        let s = Matrix4::from_nonuniform_scale(Vector::from([2., 3., 4.]));
        assert_eq!(s.scale_part(), Vector::from([2., 3., 4.]));
        assert_eq!(s.mult_v3(Vector::from([1., 1., 1.])), Vector::from([2., 3., 4.]));
    }

    #[test]
    fn transpose() {
        let a = Matrix::from([[1, 4, 7], [2, 5, 8], [3, 6, 9]]);
        let b = Matrix::from([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(a.transpose(), b);
        let a = Matrix::from([[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 15, 16]]);
        let b = Matrix::from([[1, 5, 9, 13], [2, 6, 10, 14], [3, 7, 11, 15], [4, 8, 12, 16]]);
        assert_eq!(a.transpose(), b);
    }

    #[test]
    fn rotate_axis() {
        let v = Vector::from([1., 1., 0.]);
        let m = Matrix3::rotate_axis(Vector::from([0., 0., 1.]), Rad(-PI / 2.));
        assert!(v3eq(m.mult_v3(v), Vector::from([1., -1., 0.])));
        assert!(v3eq(m.transpose().mult_v3(v), Vector::from([-1., 1., 0.])));
        assert!((m.determinant() - 1.).abs() < 1e-9);
    }

    #[test]
    fn rotate_axis_unnormalized() {
        let a = Matrix3::rotate_axis(Vector::from([0., 0., 5.]), Rad(0.3));
        let b = Matrix3::rotate_axis(Vector::from([0., 0., 1.]), Rad(0.3));
        assert!(meq(a, b));
        let a = Matrix3::rotate_axis(Vector::from([2., -1., 4.]), Rad(1.1));
        assert!((a.determinant() - 1.).abs() < 1e-9);
        assert!(meq(a * a.transpose(), Matrix::unit()));
    }

    #[test]
    fn rotate_axis_counterclockwise() {
        let m = Matrix3::rotate_axis(Vector::from([1., 0., 0.]), Rad(PI / 2.));
        assert!(v3eq(m.mult_v3(Vector::from([0., 1., 0.])), Vector::from([0., 0., 1.])));
        let m = Matrix4::from_angle_y(Deg(90.));
        assert!(v3eq(m.mult_v3(Vector::from([0., 0., 1.])), Vector::from([1., 0., 0.])));
        let m = Matrix4::from_angle_z(Rad(PI / 2.));
        assert!(v3eq(m.mult_v3(Vector::from([1., 0., 0.])), Vector::from([0., 1., 0.])));
    }

    #[test]
    fn embed_and_truncate() {
        let v = Vector::from([1., 1., 0.]);
        let m3 = Matrix3::rotate_axis(Vector::from([0., 0., 1.]), Rad(-PI / 2.));
        let m4 = m3.to_matrix4();
        assert_eq!(m4[3], Vector::from([0., 0., 0., 1.]));
        assert_eq!([m4[0][3], m4[1][3], m4[2][3]], [0., 0., 0.]);
        assert!(v3eq(m4.mult_v3(v), Vector::from([1., -1., 0.])));
        assert!(v3eq(m4.inverse().mult_v3(v), Vector::from([-1., 1., 0.])));
        assert_eq!(m4.to_matrix3(), m3);
    }

    #[test]
    fn mult_v3_ignores_perspective() {
        let mut m = Matrix4::from_translation(Vector::from([1., 2., 3.]));
        m[0][3] = 5.;
        let v = Vector::from([1., 0., 0.]);
        assert_eq!(m.mult_v3(v), Vector::from([2., 2., 3.]));
        assert_eq!(m.mult_v4(v.to_homogeneous()), Vector::from([2., 2., 3., 6.]));
        assert_eq!(m.mult_v4(Vector::from([1., 0., 0., 0.])), Vector::from([1., 0., 0., 5.]));
    }

    #[test]
    fn inverse() {
        let m = trs();
        assert!(meq(m.mult(m.inverse()), Matrix::unit()));
        assert!(meq(m.inverse().mult(m), Matrix::unit()));
        assert!(meq(m.inverse().inverse(), m));
        assert!((m.determinant() * m.inverse().determinant() - 1.).abs() < 1e-9);
    }

    #[test]
    fn inverse_projective() {
        let mut m = trs();
        m[0][3] = 0.25;
        m[2][3] = -1.;
        assert!(meq(m.mult(m.inverse()), Matrix::unit()));
    }

    #[test]
    fn inverse_singular() {
        let m = Matrix4::from_nonuniform_scale(Vector::from([1., 0., 1.]));
        assert_eq!(m.determinant(), 0.);
        assert_eq!(m.inverse(), Matrix::unit());
        assert_eq!(Matrix4::default().inverse(), Matrix::unit());
    }

    #[test]
    fn determinant() {
        let m = Matrix4::from_nonuniform_scale(Vector::from([2., 3., 4.]));
        assert_eq!(m.determinant(), 24.);
        let m3 = Matrix::from([[2., 0., 0.], [1., 3., 0.], [4., 5., 6.]]);
        assert_eq!(m3.determinant(), 36.);
    }

    #[test]
    fn parts() {
        let m = trs();
        assert_eq!(m.translate_part(), Vector::from([3., -2., 5.]));
        let s = Matrix4::from_scale(2.);
        assert_eq!(s.scale_part(), Vector::from([2., 2., 2.]));
    }

    #[test]
    fn ortho() {
        let m = Matrix4::ortho(-2., 2., -1., 1., 1., 11.);
        assert!(v3eq(m.mult_v3(Vector::from([2., 1., -1.])), Vector::from([1., 1., -1.])));
        assert!(v3eq(m.mult_v3(Vector::from([-2., -1., -11.])), Vector::from([-1., -1., 1.])));
    }

    fn assert_quaternion_matches(m: Matrix3) {
        let q = m.to_quaternion();
        assert!((q.length() - 1.).abs() < 1e-9, "{q}");
        assert!(meq(q.to_matrix3(), m), "{m}\n{}", q.to_matrix3());
    }

    #[test]
    fn to_quaternion_positive_trace() {
        let m = Matrix3::rotate_axis(Vector::from([1., -2., 0.5]), Rad(0.4));
        let t = m[0][0] + m[1][1] + m[2][2];
        assert!(t > 0.);
        assert_quaternion_matches(m);
        let q = Matrix3::unit().to_quaternion();
        assert_eq!(q, Quaternion::identity());
    }

    #[test]
    fn to_quaternion_half_turn_x() {
        let m = Matrix3::from_diag(Vector::from([1., -1., -1.]));
        let q = m.to_quaternion();
        assert!(q.r.abs() < 1e-12);
        assert!((q.i - 1.).abs() < 1e-12);
        assert_quaternion_matches(m);
        assert_quaternion_matches(Matrix3::rotate_axis(Vector::from([1., 0.2, 0.1]), Rad(3.)));
    }

    #[test]
    fn to_quaternion_half_turn_y() {
        let m = Matrix3::from_diag(Vector::from([-1., 1., -1.]));
        let q = m.to_quaternion();
        assert!((q.j - 1.).abs() < 1e-12);
        assert_quaternion_matches(m);
        assert_quaternion_matches(Matrix3::rotate_axis(Vector::from([0.1, 1., -0.2]), Rad(3.)));
    }

    #[test]
    fn to_quaternion_half_turn_z() {
        let m = Matrix3::from_diag(Vector::from([-1., -1., 1.]));
        let q = m.to_quaternion();
        assert!((q.k - 1.).abs() < 1e-12);
        assert_quaternion_matches(m);
        assert_quaternion_matches(Matrix3::rotate_axis(Vector::from([-0.2, 0.1, 1.]), Rad(3.)));
    }

    #[test]
    fn affine_3x4() {
        let rot = Matrix3::rotate_axis(Vector::from([0., 0., 1.]), Rad(PI / 2.));
        let m = Matrix34::from_rotation_translation(rot, Vector::from([1., 2., 3.]));
        let v = Vector::from([1., 0., 0.]);
        assert!(v3eq(m.mult_v3(v), Vector::from([1., 3., 3.])));
        assert!(v3eq(m.to_matrix4().mult_v3(v), m.mult_v3(v)));
        assert_eq!(m.to_matrix4()[3], Vector::from([1., 2., 3., 1.]));
        assert_eq!(m.rotation(), rot);
        assert_eq!(Matrix34::identity().mult_v3(v), v);
    }

    #[test]
    fn display() {
        let m = Matrix::from([[1., 2.], [3., 4.]]);
        assert_eq!(m.to_string(), "[\t1.00\t3.00\n\t2.00\t4.00\t]");
    }
}
