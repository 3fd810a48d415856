use std::ops::Mul;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Red/green/blue triplet with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let in_range = |c: f64| (0.0..=1.0).contains(&c);
        if in_range(self.r) && in_range(self.g) && in_range(self.b) {
            Ok(())
        } else {
            Err(ValidationError::ColorOutOfRange(*self))
        }
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Color {
        self.map(|c| c * rhs)
    }
}

pub trait Rgb8 {
    fn to_rgb8(&self) -> [u8; 3];
}

impl Rgb8 for Color {
    /// Truncates, does not round.
    fn to_rgb8(&self) -> [u8; 3] {
        [
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
        ]
    }
}
