use crate::math::{Deg, Matrix4, Rad};

/// A truncated pyramid view volume, symmetric about both the x and y axis.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Frustum {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    pub near: f64,
    pub far: f64,
}

impl Frustum {
    /// Builds the frustum for a vertical field of view and an aspect ratio (width / height).
    ///
    /// The field of view always spans the shorter screen side: for portrait
    /// aspects it is applied horizontally instead and the height is stretched.
    pub fn perspective(y_fov: Deg<f64>, aspect: f64, near: f64, far: f64) -> Self {
        let side = (Rad::from(y_fov) / 2.).tan();

        let (top, right) = if aspect < 1. {
            let right = near * side;
            (right * (1. / aspect), right)
        } else {
            let top = near * side;
            (top, top * aspect)
        };

        Self {
            top,
            right,
            bottom: -top,
            left: -right,
            near,
            far,
        }
    }

    /// Perspective projection onto the -1..1 cube, looking down the negative z axis.
    pub fn to_matrix4(&self) -> Matrix4 {
        let t1 = self.near * 2.;
        let t2 = self.right - self.left;
        let t3 = self.top - self.bottom;
        let t4 = self.far - self.near;

        Matrix4::from([
            [t1 / t2, 0., 0., 0.],
            [0., t1 / t3, 0., 0.],
            [
                (self.right + self.left) / t2,
                (self.top + self.bottom) / t3,
                (self.far + self.near) / -t4,
                -1.,
            ],
            [0., 0., (-t1 * self.far) / t4, 0.],
        ])
    }
}
