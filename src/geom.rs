use nalgebra::{Point2, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub type Point = Point3<f64>;
pub type Vector = Vector3<f64>;
pub type Point2d = Point2<f64>;

/// `head - tail`.
pub fn vector_between(head: Point, tail: Point) -> Vector {
    head - tail
}

/// Normalizes `v`. A zero-length input yields NaN components.
pub fn unit_vector(v: Vector) -> Vector {
    v / v.norm()
}

pub fn dot_product(a: &Vector, b: &Vector) -> f64 {
    a.dot(b)
}

pub fn floats_equal(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

pub fn points_equal(a: &Point, b: &Point, epsilon: f64) -> bool {
    floats_equal(a.x, b.x, epsilon)
        && floats_equal(a.y, b.y, epsilon)
        && floats_equal(a.z, b.z, epsilon)
}

pub fn vectors_equal(a: &Vector, b: &Vector, epsilon: f64) -> bool {
    floats_equal(a.x, b.x, epsilon)
        && floats_equal(a.y, b.y, epsilon)
        && floats_equal(a.z, b.z, epsilon)
}

/// Bounded plane orthogonal to the z axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plane2d {
    /// top-left corner
    pub tl: Point2d,
    /// bottom-right corner
    pub br: Point2d,
    pub z: f64,
}

impl Plane2d {
    pub fn new(tl: Point2d, br: Point2d, z: f64) -> Self {
        Self { tl, br, z }
    }

    pub fn dx(&self) -> f64 {
        self.br.x - self.tl.x
    }

    pub fn dy(&self) -> f64 {
        self.tl.y - self.br.y
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.tl.x >= self.br.x || self.tl.y <= self.br.y {
            return Err(ValidationError::DegeneratePlane(*self));
        }
        Ok(())
    }
}
