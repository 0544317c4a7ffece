#![no_std]
//! Line-frame layout for `ShimmerUI` skeletons.
//!
//! A text-like view under a skeleton shows one placeholder rectangle per
//! line of content. This crate computes where those rectangles go: given a
//! container, a line size, spacing, padding, text alignment, writing
//! direction, and a vertical anchoring policy, [`MultilineLayout`]
//! produces the frame of every line, shortening the last one to a fill
//! percentage so the block reads like naturally wrapped text.
//!
//! The calculator is pure arithmetic. It owns no display objects, keeps no
//! state between calls, and returns identical frames for identical inputs.
//! Applying the frames to a toolkit's display primitives is the facade
//! crate's job.
//!
//! # Example
//!
//! ```
//! use shimmerui_layout::{MultilineLayout, Size};
//!
//! let layout = MultilineLayout::new(3, Size::new(200.0, 15.0), Size::new(200.0, 100.0))
//!     .spacing(10.0)
//!     .last_line_fill_percent(70);
//!
//! let frames = layout.frames()?;
//! assert_eq!(frames.len(), 3);
//! assert_eq!(frames[2].width(), 140.0);
//! # Ok::<(), shimmerui_layout::InvalidLayoutSpec>(())
//! ```

extern crate alloc;

pub use shimmerui_core::{EdgeInsets, Point, Rect, Size};

mod error;
pub use error::InvalidLayoutSpec;

pub mod multiline;
pub use multiline::{HorizontalAlignment, MultilineLayout, TextAlignment, VerticalPin};

#[cfg(test)]
mod tests;
