use std::fmt;

use crate::{color::Color, geom::Plane2d};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaneKind {
    Near,
    Far,
}

impl fmt::Display for PlaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaneKind::Near => f.write_str("near"),
            PlaneKind::Far => f.write_str("far"),
        }
    }
}

/// Scene configuration rejected before rendering.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("negative sphere radius: {0}")]
    NegativeRadius(f64),
    #[error("color out of range: {0:?}")]
    ColorOutOfRange(Color),
    #[error("diffuse coefficient out of range: {0}")]
    DiffuseCoefficient(f64),
    #[error("negative or null plane width or height: {0:?}")]
    DegeneratePlane(Plane2d),
    #[error("near plane of {width}x{height} units is too large for an image")]
    ImageTooLarge { width: f64, height: f64 },
    #[error("invalid sphere of scene object #{index}: {source}")]
    Object {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
    #[error("invalid color of scene object #{index}: {source}")]
    ObjectColor {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
    #[error("invalid scene background: {0}")]
    Background(#[source] Box<ValidationError>),
    #[error("invalid {plane} frustum plane: {source}")]
    FrustumPlane {
        plane: PlaneKind,
        #[source]
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Innermost violation, stripped of the context identifying where it occurred.
    pub fn root(&self) -> &ValidationError {
        match self {
            ValidationError::Object { source, .. }
            | ValidationError::ObjectColor { source, .. }
            | ValidationError::Background(source)
            | ValidationError::FrustumPlane { source, .. } => source.root(),
            other => other,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("can not read scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("can not parse scene: {0}")]
    Parse(#[from] serde_json::Error),
}
