use super::angle::Rad;
use super::matrix::Matrix;
use super::quaternion::Quaternion;
use super::vector::Vector;

/// Rotations about the x, y and z axis.
///
/// They are applied in the order x, then y, then z, so the combined
/// rotation is `Rz · Ry · Rx`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Euler {
    pub x: Rad<f64>,
    pub y: Rad<f64>,
    pub z: Rad<f64>,
}

impl Euler {
    pub fn new<A: Into<Rad<f64>>>(x: A, y: A, z: A) -> Self {
        Self { x: x.into(), y: y.into(), z: z.into() }
    }

    pub fn to_quaternion(self) -> Quaternion {
        let (sx, cx) = (self.x.0 / 2.).sin_cos();
        let (sy, cy) = (self.y.0 / 2.).sin_cos();
        let (sz, cz) = (self.z.0 / 2.).sin_cos();

        Quaternion::new(
            cx * cy * cz + sx * sy * sz,
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
        )
    }

    pub fn to_matrix3(self) -> Matrix<f64, 3> {
        Matrix::<f64, 3>::unit()
            .mult(Matrix::rotate_axis(Vector::from([0., 0., 1.]), self.z))
            .mult(Matrix::rotate_axis(Vector::from([0., 1., 0.]), self.y))
            .mult(Matrix::rotate_axis(Vector::from([1., 0., 0.]), self.x))
    }
}
