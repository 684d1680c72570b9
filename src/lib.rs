//! Vectors, matrices, quaternions and a perspective camera for CPU side
//! transform math.

pub mod camera;
pub mod math;
