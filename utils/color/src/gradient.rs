//! Gradient descriptions for skeleton placeholders.

use alloc::vec::Vec;

use shimmerui_core::Point;

use crate::Color;

/// An ordered sequence of color stops swept across a placeholder.
///
/// The common skeleton gradient is a three-stop sheen: the base tint, a
/// highlight, and the base tint again, so a sliding animation reads as a
/// band of light moving over the placeholder. [`Gradient::from_base`]
/// derives that shape from a single color.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gradient {
    colors: Vec<Color>,
    direction: GradientDirection,
}

impl Default for Gradient {
    fn default() -> Self {
        Self::from_base(Color::default())
    }
}

impl Gradient {
    /// Creates a gradient from explicit color stops.
    ///
    /// Stops are distributed evenly along the direction axis by backends.
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        Self {
            colors,
            direction: GradientDirection::LeftRight,
        }
    }

    /// Derives the standard three-stop sheen from a base tint.
    #[must_use]
    pub fn from_base(base: Color) -> Self {
        Self::with_secondary(base, base.lighter())
    }

    /// Builds the three-stop sheen with an explicit highlight color.
    #[must_use]
    pub fn with_secondary(base: Color, secondary: Color) -> Self {
        Self::new(alloc::vec![base, secondary, base])
    }

    /// Sets the sweep direction.
    #[must_use]
    pub fn direction(mut self, direction: GradientDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Returns the color stops in order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the sweep direction.
    #[must_use]
    pub const fn direction_ref(&self) -> GradientDirection {
        self.direction
    }
}

/// The axis a gradient sweeps along, in the placeholder's unit space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GradientDirection {
    /// Sweep from the left edge to the right edge.
    #[default]
    LeftRight,
    /// Sweep from the right edge to the left edge.
    RightLeft,
    /// Sweep from the top edge to the bottom edge.
    TopBottom,
    /// Sweep from the bottom edge to the top edge.
    BottomTop,
    /// Sweep diagonally from the top-left to the bottom-right corner.
    TopLeftBottomRight,
    /// Sweep diagonally from the bottom-right to the top-left corner.
    BottomRightTopLeft,
}

impl GradientDirection {
    /// The unit-space point the sweep starts from.
    #[must_use]
    pub const fn start_point(&self) -> Point {
        match self {
            Self::LeftRight => Point::new(0.0, 0.5),
            Self::RightLeft => Point::new(1.0, 0.5),
            Self::TopBottom => Point::new(0.5, 0.0),
            Self::BottomTop => Point::new(0.5, 1.0),
            Self::TopLeftBottomRight => Point::new(0.0, 0.0),
            Self::BottomRightTopLeft => Point::new(1.0, 1.0),
        }
    }

    /// The unit-space point the sweep ends at.
    #[must_use]
    pub const fn end_point(&self) -> Point {
        match self {
            Self::LeftRight => Point::new(1.0, 0.5),
            Self::RightLeft => Point::new(0.0, 0.5),
            Self::TopBottom => Point::new(0.5, 1.0),
            Self::BottomTop => Point::new(0.5, 0.0),
            Self::TopLeftBottomRight => Point::new(1.0, 1.0),
            Self::BottomRightTopLeft => Point::new(0.0, 0.0),
        }
    }
}
