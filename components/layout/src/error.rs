//! Validation errors for skeleton layout specs.

use thiserror::Error;

/// A layout spec failed validation.
///
/// Every variant is a caller-side programming error: the computation is
/// deterministic, so retrying the same call cannot succeed. Callers should
/// skip the offending line or abandon the layout pass for the container.
/// No partial output accompanies an error.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidLayoutSpec {
    /// A geometric field was negative, NaN, or infinite.
    #[error("`{field}` must be finite and non-negative, got {value}")]
    InvalidDimension {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// The layout was built with zero lines.
    #[error("a multiline layout needs at least one line")]
    NoLines,

    /// A frame was requested for a line past the end of the block.
    #[error("line index {index} is out of range for {total_lines} lines")]
    IndexOutOfRange {
        /// The requested line index.
        index: usize,
        /// The number of lines in the layout.
        total_lines: usize,
    },

    /// The last-line fill percent exceeded 100.
    #[error("last line fill percent must be at most 100, got {percent}")]
    FillPercentOutOfRange {
        /// The rejected percentage.
        percent: u8,
    },
}
