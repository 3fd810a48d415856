use serde::{Deserialize, Serialize};

use crate::{
    error::ValidationError,
    geom::{unit_vector, vector_between, Point, Vector},
    hit::Record,
    Hit, Line,
};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Point,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.radius < 0.0 {
            return Err(ValidationError::NegativeRadius(self.radius));
        }
        Ok(())
    }

    /// Unit normal at a surface point, oriented from the center through `p`.
    pub fn normal_at(&self, p: Point) -> Vector {
        unit_vector(vector_between(p, self.center))
    }
}

impl Hit for Sphere {
    /// Entry point of `line` into the sphere, i.e. the smaller root of the
    /// quadratic. The root is returned even when it is negative.
    fn hit(&self, line: &Line) -> Option<Record> {
        let direction = line.direction();
        let oc = vector_between(line.origin, self.center);
        let a = direction.dot(&direction);
        let b = 2.0 * direction.dot(&oc);
        let c = oc.dot(&oc) - self.radius * self.radius;
        let d = (b * b) - (4.0 * a * c);

        if d < 0.0 {
            return None;
        }

        let t = (-b - d.sqrt()) / (2.0 * a);
        Some(Record {
            point: line.at(t),
            t,
        })
    }
}
