use super::vector::Vector;

/// A line segment between two points.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Line {
    pub start: Vector<f64, 3>,
    pub end: Vector<f64, 3>,
}

impl Line {
    pub fn new(start: Vector<f64, 3>, end: Vector<f64, 3>) -> Self {
        Self { start, end }
    }

    /// Point at `t` along the segment, `start` at 0 and `end` at 1.
    pub fn lerp(&self, t: f64) -> Vector<f64, 3> {
        (self.end - self.start) * t + self.start
    }

    /// Unit vector pointing from `start` to `end`.
    pub fn direction(&self) -> Vector<f64, 3> {
        (self.end - self.start).normalize()
    }
}
