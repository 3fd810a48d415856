use crate::geom::{vector_between, Point, Vector};

/// Segment from `origin` towards `target`, used for primary and shadow rays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub origin: Point,
    pub target: Point,
}

impl Line {
    pub fn new(origin: Point, target: Point) -> Self {
        Self { origin, target }
    }

    pub fn direction(&self) -> Vector {
        vector_between(self.target, self.origin)
    }

    /// `at(0.0)` is the origin and `at(1.0)` the target.
    pub fn at(&self, t: f64) -> Point {
        self.origin + t * self.direction()
    }
}
