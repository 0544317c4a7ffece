//! Default appearance values for skeleton decoration.

use shimmerui_color::{Color, Gradient};
use shimmerui_core::{EdgeInsets, Size};
use shimmerui_layout::{MultilineLayout, TextAlignment, VerticalPin};

/// The knobs a skeleton pass reads when decorating views.
///
/// An `Appearance` is an explicit value handed to whatever drives
/// decoration - construct one with [`Appearance::default`], adjust fields,
/// and thread it through your layout pass. There is deliberately no
/// process-wide mutable default: two passes with different appearances can
/// run side by side without stepping on each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    /// The flat tint solid skeletons are painted with.
    pub tint: Color,
    /// The sheen gradient skeletons are painted with.
    pub gradient: Gradient,
    /// Height of one placeholder line in points.
    pub multiline_height: f32,
    /// Vertical gap between placeholder lines in points.
    pub multiline_spacing: f32,
    /// Corner rounding of placeholder lines in points.
    pub multiline_corner_radius: u32,
    /// Which container edge blocks of lines stack away from.
    pub vertical_pin: VerticalPin,
    /// Text alignment placeholder lines follow.
    pub alignment: TextAlignment,
    last_line_fill_percent: u8,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            tint: Color::CLOUDS,
            gradient: Gradient::from_base(Color::CLOUDS),
            multiline_height: 15.0,
            multiline_spacing: 10.0,
            multiline_corner_radius: 0,
            vertical_pin: VerticalPin::Top,
            alignment: TextAlignment::Natural,
            last_line_fill_percent: 70,
        }
    }
}

impl Appearance {
    /// Percentage of the line width the last line of a block keeps.
    #[must_use]
    pub const fn last_line_fill_percent(&self) -> u8 {
        self.last_line_fill_percent
    }

    /// Sets the last-line fill percentage, clamped to 100.
    pub fn set_last_line_fill_percent(&mut self, percent: u8) {
        self.last_line_fill_percent = percent.min(100);
    }

    /// Builds a [`MultilineLayout`] for a block of `total_lines` lines in
    /// `container`, carrying this appearance's defaults.
    ///
    /// Lines span the container width between the horizontal padding
    /// insets; the caller resolves writing direction and can refine the
    /// returned value further with its own setters.
    #[must_use]
    pub fn multiline_layout(
        &self,
        total_lines: usize,
        container: Size,
        padding: EdgeInsets,
    ) -> MultilineLayout {
        let line_width = (container.width - padding.horizontal()).max(0.0);
        MultilineLayout::new(
            total_lines,
            Size::new(line_width, self.multiline_height),
            container,
        )
        .spacing(self.multiline_spacing)
        .padding(padding)
        .alignment(self.alignment)
        .vertical_pin(self.vertical_pin)
        .last_line_fill_percent(self.last_line_fill_percent)
    }
}
