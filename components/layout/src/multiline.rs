//! The multiline line-frame calculator.

use alloc::vec::Vec;

use shimmerui_core::{EdgeInsets, Point, Rect, Size};

use crate::error::InvalidLayoutSpec;

/// Text alignment of placeholder lines within their container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlignment {
    /// Align with the leading edge of the writing direction.
    Leading,
    /// Center within the padded container width.
    Center,
    /// Align with the trailing edge of the writing direction.
    Trailing,
    /// Follow the writing direction: leading under left-to-right text,
    /// trailing under right-to-left text.
    #[default]
    Natural,
}

impl TextAlignment {
    /// Resolves [`Natural`](Self::Natural) against a writing direction.
    ///
    /// Resolution depends only on the layout value's fixed fields, so every
    /// line of one block resolves the same way.
    #[must_use]
    pub const fn resolve(self, is_rtl: bool) -> HorizontalAlignment {
        match self {
            Self::Leading => HorizontalAlignment::Leading,
            Self::Center => HorizontalAlignment::Center,
            Self::Trailing => HorizontalAlignment::Trailing,
            Self::Natural => {
                if is_rtl {
                    HorizontalAlignment::Trailing
                } else {
                    HorizontalAlignment::Leading
                }
            }
        }
    }
}

/// A concrete horizontal alignment, after `Natural` has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    /// The leading edge of the writing direction.
    #[default]
    Leading,
    /// Centered.
    Center,
    /// The trailing edge of the writing direction.
    Trailing,
}

/// Which container edge a block of lines stacks away from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalPin {
    /// Lines stack downward from the top padding inset.
    #[default]
    Top,
    /// Lines stack upward so the last line's bottom edge sits on the
    /// bottom padding inset. Keeps the final line of bottom-growing
    /// content (chat bubbles, logs) anchored near the real content.
    Bottom,
}

/// Frame calculator for a block of placeholder lines.
///
/// One value describes one block: construct it with the required
/// dimensions, refine it with the consuming setters, then ask for frames.
/// The value is immutable once built, so a block's lines can never be
/// computed against half-updated parameters.
///
/// The calculator does not check that the container is tall enough for the
/// whole stack; callers are expected to have measured the container first,
/// and an undersized one silently yields out-of-bounds frames.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultilineLayout {
    total_lines: usize,
    line_size: Size,
    container: Size,
    spacing: f32,
    padding: EdgeInsets,
    alignment: TextAlignment,
    is_rtl: bool,
    vertical_pin: VerticalPin,
    last_line_fill_percent: u8,
}

impl MultilineLayout {
    /// Creates a layout for `total_lines` lines of `line_size` within a
    /// container of `container` points.
    ///
    /// Spacing and padding start at zero, alignment at
    /// [`TextAlignment::Natural`] under left-to-right text, the pin at
    /// [`VerticalPin::Top`], and the last line at full width.
    #[must_use]
    pub const fn new(total_lines: usize, line_size: Size, container: Size) -> Self {
        Self {
            total_lines,
            line_size,
            container,
            spacing: 0.0,
            padding: EdgeInsets::ZERO,
            alignment: TextAlignment::Natural,
            is_rtl: false,
            vertical_pin: VerticalPin::Top,
            last_line_fill_percent: 100,
        }
    }

    /// Sets the vertical gap between consecutive lines.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the padding insets between container edges and the block.
    ///
    /// Insets are absolute; see [`EdgeInsets`] for the right-to-left
    /// contract.
    #[must_use]
    pub const fn padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the text alignment lines follow.
    #[must_use]
    pub const fn alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the writing direction the alignment resolves against.
    #[must_use]
    pub const fn right_to_left(mut self, is_rtl: bool) -> Self {
        self.is_rtl = is_rtl;
        self
    }

    /// Sets which container edge the block stacks away from.
    #[must_use]
    pub const fn vertical_pin(mut self, pin: VerticalPin) -> Self {
        self.vertical_pin = pin;
        self
    }

    /// Sets the percentage of the line width the last line keeps.
    ///
    /// Values above 100 are rejected when a frame is computed.
    #[must_use]
    pub const fn last_line_fill_percent(mut self, percent: u8) -> Self {
        self.last_line_fill_percent = percent;
        self
    }

    /// Returns the number of lines in the block.
    #[must_use]
    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Computes the frame of line `index`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidLayoutSpec`] if any dimension is negative or
    /// non-finite, the layout has no lines, the fill percent exceeds 100,
    /// or `index` is past the last line.
    pub fn frame(&self, index: usize) -> Result<Rect, InvalidLayoutSpec> {
        self.validate()?;
        if index >= self.total_lines {
            return Err(InvalidLayoutSpec::IndexOutOfRange {
                index,
                total_lines: self.total_lines,
            });
        }
        Ok(self.frame_unchecked(index))
    }

    /// Computes the frames of every line, first to last.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidLayoutSpec`] under the same conditions as
    /// [`frame`](Self::frame); no frames are produced on error.
    pub fn frames(&self) -> Result<Vec<Rect>, InvalidLayoutSpec> {
        self.validate()?;
        Ok((0..self.total_lines)
            .map(|index| self.frame_unchecked(index))
            .collect())
    }

    fn validate(&self) -> Result<(), InvalidLayoutSpec> {
        if self.total_lines == 0 {
            return Err(InvalidLayoutSpec::NoLines);
        }
        if self.last_line_fill_percent > 100 {
            return Err(InvalidLayoutSpec::FillPercentOutOfRange {
                percent: self.last_line_fill_percent,
            });
        }
        let dimensions = [
            ("line_size.width", self.line_size.width),
            ("line_size.height", self.line_size.height),
            ("container.width", self.container.width),
            ("container.height", self.container.height),
            ("spacing", self.spacing),
            ("padding.top", self.padding.top),
            ("padding.left", self.padding.left),
            ("padding.bottom", self.padding.bottom),
            ("padding.right", self.padding.right),
        ];
        for (field, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                return Err(InvalidLayoutSpec::InvalidDimension { field, value });
            }
        }
        Ok(())
    }

    #[allow(clippy::cast_precision_loss)]
    fn frame_unchecked(&self, index: usize) -> Rect {
        let width = self.line_width(index);
        let height = self.line_size.height;

        let x = match (self.alignment.resolve(self.is_rtl), self.is_rtl) {
            (HorizontalAlignment::Leading, false) | (HorizontalAlignment::Trailing, true) => {
                self.padding.left
            }
            (HorizontalAlignment::Trailing, false) | (HorizontalAlignment::Leading, true) => {
                self.container.width - self.padding.right - width
            }
            (HorizontalAlignment::Center, _) => {
                let available = self.container.width - self.padding.horizontal();
                self.padding.left + (available - width) / 2.0
            }
        };

        let y = match self.vertical_pin {
            VerticalPin::Top => {
                self.padding.top + index as f32 * (height + self.spacing)
            }
            VerticalPin::Bottom => {
                // Count the lines from this one down to the last; the last
                // line's bottom edge lands exactly on the bottom inset.
                let below = (self.total_lines - index) as f32;
                self.container.height
                    - self.padding.bottom
                    - below * height
                    - (below - 1.0) * self.spacing
            }
        };

        Rect::new(Point::new(x, y), Size::new(width, height))
    }

    fn line_width(&self, index: usize) -> f32 {
        if index + 1 == self.total_lines && self.last_line_fill_percent < 100 {
            self.line_size.width * f32::from(self.last_line_fill_percent) / 100.0
        } else {
            self.line_size.width
        }
    }
}
