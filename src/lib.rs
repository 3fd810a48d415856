//! Ray caster for scenes of colored spheres lit by a single point light.
//!
//! Primary rays are cast from the near plane of a viewing frustum, shaded with
//! a diffuse plus ambient model and tested for shadows against every object.
//! The image is rendered as horizontal bands in parallel.

pub mod camera;
pub mod color;
pub mod error;
pub mod frame;
pub mod geom;
pub mod hit;
pub mod ray;
pub mod render;
pub mod scene;
pub mod sphere;

pub use camera::Frustum;
pub use color::Color;
pub use error::{SceneError, ValidationError};
pub use frame::FrameBuffer;
pub use hit::Hit;
pub use ray::Line;
pub use render::render;
pub use scene::{Object, Scene};
pub use sphere::Sphere;
