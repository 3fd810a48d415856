use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    camera::Frustum,
    color::Color,
    error::{SceneError, ValidationError},
    geom::{dot_product, unit_vector, vector_between, Point},
    Hit, Line, Sphere,
};

/// Colored sphere placed in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Object {
    pub sphere: Sphere,
    pub color: Color,
}

impl Object {
    pub fn new(sphere: Sphere, color: Color) -> Self {
        Self { sphere, color }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub view_frustum: Frustum,
    /// point light source
    pub light: Point,
    pub objects: Vec<Object>,
    /// background color
    pub bg: Color,
    /// diffuse coefficient, the ambient one being `1 - kd`
    pub kd: f64,
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Stops at the first violation found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (index, object) in self.objects.iter().enumerate() {
            object
                .sphere
                .validate()
                .map_err(|source| ValidationError::Object {
                    index,
                    source: Box::new(source),
                })?;
            object
                .color
                .validate()
                .map_err(|source| ValidationError::ObjectColor {
                    index,
                    source: Box::new(source),
                })?;
        }
        self.bg
            .validate()
            .map_err(|source| ValidationError::Background(Box::new(source)))?;
        if !(0.0..=1.0).contains(&self.kd) {
            return Err(ValidationError::DiffuseCoefficient(self.kd));
        }
        self.view_frustum.validate()
    }

    /// Whether `ray` meets any object at all.
    pub fn ray_hits_any_object(&self, ray: &Line) -> bool {
        self.objects.iter().any(|o| o.sphere.hit(ray).is_some())
    }

    /// Nearest object along `ray` with the point where the ray meets it.
    /// On equal distances the object listed first wins.
    pub fn cast_ray(&self, ray: &Line) -> Option<(usize, Point)> {
        let mut nearest = None;
        let mut t_min = f64::MAX;
        for (index, object) in self.objects.iter().enumerate() {
            if let Some(record) = object.sphere.hit(ray) {
                if record.t < t_min {
                    t_min = record.t;
                    nearest = Some((index, record.point));
                }
            }
        }
        nearest
    }

    /// Diffuse plus ambient color of `object` at surface point `p`, both
    /// scaled by the cosine between the light direction and the normal.
    pub fn shade_hit(&self, object: &Object, p: Point) -> Color {
        let normal = object.sphere.normal_at(p);
        let light = unit_vector(vector_between(self.light, p));
        let factor = dot_product(&light, &normal).max(0.0);
        let ka = 1.0 - self.kd;
        object
            .color
            .map(|channel| factor * self.kd * channel + factor * ka)
    }

    /// Color of pixel `(x, y)` given in near-plane coordinates.
    pub fn render_pixel(&self, x: f64, y: f64) -> Color {
        let ray = self.view_frustum.cast(x, y);

        match self.cast_ray(&ray) {
            Some((index, hit)) => {
                let object = &self.objects[index];
                let shadow = Line::new(self.light, hit);
                match self.cast_ray(&shadow) {
                    Some((other, _)) if other != index => object.color * (1.0 - self.kd),
                    _ => self.shade_hit(object, hit),
                }
            }
            None => {
                let shadow = Line::new(ray.target, self.light);
                if self.ray_hits_any_object(&shadow) {
                    self.bg * 0.5
                } else {
                    self.bg
                }
            }
        }
    }
}
