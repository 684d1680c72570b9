mod frustum;

pub use frustum::Frustum;

use crate::math::{Deg, Euler, Line, Matrix4, Vector3, Vector4};

/// A perspective camera with cached transformation matrices.
///
/// The matrices are only rebuilt by [`setup_view_projection`] and
/// [`setup_model_view`]. After changing the screen size, field of view,
/// clipping planes, position or rotation, call the matching setup function,
/// otherwise the cached matrices keep describing the previous state.
///
/// [`setup_view_projection`]: Camera::setup_view_projection
/// [`setup_model_view`]: Camera::setup_model_view
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    /// Screen resolution in pixels, needed for unprojecting.
    pub width: f64,
    pub height: f64,

    pub y_fov: Deg<f64>,
    pub near: f64,
    pub far: f64,

    pub position: Vector3,
    pub rot_axis: Euler,

    pub view: Frustum,
    pub projection: Matrix4,
    pub model_view: Matrix4,
    pub model_view_inverse: Matrix4,
    pub model_view_projection: Matrix4,
}

impl Camera {
    /// Creates a camera at the origin looking down the negative z axis.
    pub fn new(width: f64, height: f64, y_fov: Deg<f64>, near: f64, far: f64) -> Self {
        let mut cam = Self {
            width,
            height,
            y_fov,
            near,
            far,
            position: Vector3::default(),
            rot_axis: Euler::default(),
            view: Frustum::default(),
            projection: Matrix4::unit(),
            model_view: Matrix4::unit(),
            model_view_inverse: Matrix4::unit(),
            model_view_projection: Matrix4::unit(),
        };
        cam.setup_view_projection();
        cam.setup_model_view();
        cam
    }

    /// Rebuilds the frustum and the projection matrix from the screen size,
    /// field of view and clipping planes.
    pub fn setup_view_projection(&mut self) {
        let aspect = self.width / self.height;
        log::debug!(
            "Setting up projection: {}x{}, fov {}, near {}, far {}",
            self.width, self.height, self.y_fov, self.near, self.far,
        );
        self.view = Frustum::perspective(self.y_fov, aspect, self.near, self.far);
        self.projection = self.view.to_matrix4();
        self.model_view_projection = self.projection.mult(self.model_view);
    }

    /// Rebuilds the model-view matrix and its inverse from position and rotation.
    pub fn setup_model_view(&mut self) {
        log::debug!("Setting up model view: position {}, rotation {:?}", self.position, self.rot_axis);
        self.model_view_inverse = Matrix4::unit()
            .mult(Matrix4::from_translation(self.position))
            .mult(Matrix4::from_angle_z(self.rot_axis.z))
            .mult(Matrix4::from_angle_y(self.rot_axis.y))
            .mult(Matrix4::from_angle_x(self.rot_axis.x));
        self.model_view = self.model_view_inverse.inverse();
        self.model_view_projection = self.projection.mult(self.model_view);
    }

    /// Maps a pixel to the points on the near and the far plane that it covers,
    /// in world space.
    ///
    /// Screen y grows downwards while device y grows upwards.
    pub fn unproject(&self, x: f64, y: f64) -> [Vector3; 2] {
        let near = Vector4::from([
            2. * x / self.width - 1.,
            2. * (self.height - y) / self.height - 1.,
            -1.,
            1.,
        ]);
        let far = Vector4::from([near.x(), near.y(), 1., 1.]);

        let m = self.model_view.mult_x(self.projection).inverse();

        let points = [m.mult_v4(near).to_cartesian(), m.mult_v4(far).to_cartesian()];
        log::trace!("Unprojected ({x}, {y}) to {} .. {}", points[0], points[1]);
        points
    }

    /// Like [`unproject`](Self::unproject), as a segment from the near to the far point.
    pub fn unproject_line(&self, x: f64, y: f64) -> Line {
        let [start, end] = self.unproject(x, y);
        Line::new(start, end)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800., 600., Deg(60.), 0.1, 100.)
    }
}
