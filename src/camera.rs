use serde::{Deserialize, Serialize};

use crate::{
    error::{PlaneKind, ValidationError},
    geom::{Plane2d, Point},
    Line,
};

/// Pyramidal viewing frustum orthogonal to the z axis. The scene is projected
/// onto the near plane; the size ratio between the near and far planes
/// determines the field of view.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frustum {
    pub near: Plane2d,
    pub far: Plane2d,
}

impl Frustum {
    pub fn new(near: Plane2d, far: Plane2d) -> Self {
        Self { near, far }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for (plane, kind) in [(&self.near, PlaneKind::Near), (&self.far, PlaneKind::Far)] {
            plane
                .validate()
                .map_err(|source| ValidationError::FrustumPlane {
                    plane: kind,
                    source: Box::new(source),
                })?;
        }
        let (width, height) = self.image_size();
        let fits = u32::try_from(width).is_ok()
            && u32::try_from(height).is_ok()
            && width
                .checked_mul(height)
                .and_then(|pixels| pixels.checked_mul(3))
                .is_some();
        if !fits {
            return Err(ValidationError::ImageTooLarge {
                width: self.near.dx(),
                height: self.near.dy(),
            });
        }
        Ok(())
    }

    /// Image size in pixels, one pixel per near-plane unit. Saturates on
    /// planes too large to address, which `validate` rejects.
    pub fn image_size(&self) -> (usize, usize) {
        (self.near.dx() as usize, self.near.dy() as usize)
    }

    /// Near-plane coordinates of pixel `(col, row)`, row 0 being the top edge.
    pub fn pixel_position(&self, col: usize, row: usize) -> (f64, f64) {
        (self.near.tl.x + col as f64, self.near.tl.y - row as f64)
    }

    /// Point on the far plane reached by extending near-plane `(x, y)`.
    pub fn project_far(&self, x: f64, y: f64) -> Point {
        let x_far = x * self.far.dx() / self.near.dx();
        let y_far = y * self.far.dy() / self.near.dy();
        Point::new(x_far, y_far, self.far.z)
    }

    pub fn cast(&self, x: f64, y: f64) -> Line {
        Line::new(Point::new(x, y, self.near.z), self.project_far(x, y))
    }
}
