use crate::geom::Point;
use crate::ray::Line;

pub trait Hit {
    fn hit(&self, line: &Line) -> Option<Record>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    pub point: Point,
    /// Position along the line, proportional to the distance from its origin.
    /// Negative when the intersection lies behind the origin.
    pub t: f64,
}
