pub mod angle;
pub mod euler;
pub mod line;
pub mod matrix;
pub mod quaternion;
pub mod vector;

pub use angle::{Rad, Deg};
pub use euler::Euler;
pub use line::Line;
pub use quaternion::{Quaternion, GIMBAL_LOCK_THRESHOLD};

pub type Vector2 = vector::Vector<f64, 2>;
pub type Vector3 = vector::Vector<f64, 3>;
pub type Vector4 = vector::Vector<f64, 4>;

pub type Matrix3 = matrix::Matrix<f64, 3>;
pub type Matrix4 = matrix::Matrix<f64, 4>;
/// Rotation plus translation, a 4x4 matrix with an implied `0, 0, 0, 1` bottom row.
pub type Matrix34 = matrix::Matrix<f64, 4, 3>;
