#![doc = include_str!("../README.md")]

pub mod appearance;
pub mod skeleton;

#[doc(inline)]
pub use appearance::Appearance;
#[doc(inline)]
pub use skeleton::{SkeletonKind, decorate_bounds, decorate_line, decorate_lines};

pub use shimmerui_color::{Color, Gradient, GradientDirection};
pub use shimmerui_core::{EdgeInsets, Point, Rect, Size, VisualElement};
pub use shimmerui_layout::{
    InvalidLayoutSpec, MultilineLayout, TextAlignment, VerticalPin,
};

pub mod prelude {
    //! A collection of commonly used traits and types for easy importing.
    //!
    //! Pulls in the appearance, the layout calculator, the decoration
    //! helpers, and the geometry they speak in with a single `use`.
    //!
    //! # Example
    //!
    //! ```rust
    //! use shimmerui::prelude::*;
    //!
    //! let layout = Appearance::default().multiline_layout(
    //!     2,
    //!     Size::new(200.0, 60.0),
    //!     EdgeInsets::ZERO,
    //! );
    //! assert_eq!(layout.total_lines(), 2);
    //! ```

    pub use crate::appearance::Appearance;
    pub use crate::skeleton::{SkeletonKind, decorate_bounds, decorate_line, decorate_lines};

    pub use shimmerui_color::{Color, Gradient, GradientDirection};
    pub use shimmerui_core::{EdgeInsets, Point, Rect, Size, VisualElement};
    pub use shimmerui_layout::{
        InvalidLayoutSpec, MultilineLayout, TextAlignment, VerticalPin,
    };
}
