use serde::Deserialize;
use std::ops::{Add, Mul};

/// An RGB colour with float channels on the 0-255 scale.
///
/// Channels may leave that range while shading; they are only clamped
/// when converted to bytes for output.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(from = "[f32; 3]")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(255.0, 255.0, 255.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b }
    }

    /// Per-channel `self * (1 - amount) + other * amount`.
    pub fn blend(self, other: Color, amount: f32) -> Color {
        self * (1.0 - amount) + other * amount
    }

    /// Saturating conversion to display bytes; negative channels become 0,
    /// channels above 255 become 255 and fractions are truncated.
    pub fn to_rgb8(self) -> [u8; 3] {
        [clamp_channel(self.r), clamp_channel(self.g), clamp_channel(self.b)]
    }

    pub fn approx_eq(&self, other: &Color, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

fn clamp_channel(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.max(0.0).min(255.0) as u8
}

impl From<[f32; 3]> for Color {
    fn from(channels: [f32; 3]) -> Color {
        Color::new(channels[0], channels[1], channels[2])
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, intensity: f32) -> Color {
        Color::new(self.r * intensity, self.g * intensity, self.b * intensity)
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, other: Color) -> Color {
        Color::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}
