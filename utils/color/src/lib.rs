#![no_std]
//! Colors and gradients for `ShimmerUI` skeletons.
//!
//! Skeleton placeholders are painted in one of two ways: a flat tint, or a
//! gradient sweeping across the placeholder to suggest motion. This crate
//! provides the plain-data [`Color`] and [`Gradient`] types those two
//! styles are described with. Nothing here talks to a renderer - a backend
//! reads the values and paints with whatever machinery it already has.

extern crate alloc;

mod gradient;
pub use gradient::{Gradient, GradientDirection};

/// A color in the sRGB color space with an opacity component.
///
/// Component values are in the range 0.0 to 1.0. Skeletons are usually
/// drawn in muted grays, so the named constants lean that way.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red component (0.0 to 1.0)
    pub red: f32,
    /// Green component (0.0 to 1.0)
    pub green: f32,
    /// Blue component (0.0 to 1.0)
    pub blue: f32,
    /// Opacity (0.0 = transparent, 1.0 = opaque)
    pub opacity: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::CLOUDS
    }
}

impl Color {
    /// Black color.
    pub const BLACK: Self = Self::new_u8(0x00, 0x00, 0x00);
    /// White color.
    pub const WHITE: Self = Self::new_u8(0xFF, 0xFF, 0xFF);
    /// The light gray used as the default skeleton tint.
    pub const CLOUDS: Self = Self::new_u8(0xEC, 0xF0, 0xF1);
    /// A slightly darker neutral gray.
    pub const SILVER: Self = Self::new_u8(0xBD, 0xC3, 0xC7);
    /// A mid gray suited to dark backgrounds.
    pub const CONCRETE: Self = Self::new_u8(0x95, 0xA5, 0xA6);
    /// A dark neutral gray.
    pub const ASBESTOS: Self = Self::new_u8(0x7F, 0x8C, 0x8D);

    /// Creates a fully opaque color from red, green, and blue components.
    ///
    /// # Arguments
    /// * `red` - Red component (0.0 to 1.0)
    /// * `green` - Green component (0.0 to 1.0)
    /// * `blue` - Blue component (0.0 to 1.0)
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self {
            red,
            green,
            blue,
            opacity: 1.0,
        }
    }

    /// Creates a fully opaque color from 8-bit red, green, and blue
    /// components.
    ///
    /// # Arguments
    /// * `red` - Red component (0-255)
    /// * `green` - Green component (0-255)
    /// * `blue` - Blue component (0-255)
    #[must_use]
    pub const fn new_u8(red: u8, green: u8, blue: u8) -> Self {
        Self::new(
            red as f32 / 255.0,
            green as f32 / 255.0,
            blue as f32 / 255.0,
        )
    }

    /// Returns the same color with the given opacity applied.
    ///
    /// # Arguments
    /// * `opacity` - Opacity value (0.0 = transparent, 1.0 = opaque)
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Returns a lighter variant of this color.
    ///
    /// Used to derive the moving highlight stop of a skeleton gradient from
    /// its base tint.
    #[must_use]
    pub fn lighter(&self) -> Self {
        self.blended_towards(Self::WHITE)
    }

    /// Returns a darker variant of this color.
    #[must_use]
    pub fn darker(&self) -> Self {
        self.blended_towards(Self::BLACK)
    }

    fn blended_towards(&self, target: Self) -> Self {
        const AMOUNT: f32 = 0.25;
        Self {
            red: self.red + (target.red - self.red) * AMOUNT,
            green: self.green + (target.green - self.green) * AMOUNT,
            blue: self.blue + (target.blue - self.blue) * AMOUNT,
            opacity: self.opacity,
        }
    }
}
