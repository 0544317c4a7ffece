//! Skeleton kinds and decoration application.
//!
//! Decoration is the step between computing a frame and the host toolkit
//! painting it: each call configures exactly one caller-owned
//! [`VisualElement`] with a frame, an origin anchor point, a corner
//! radius, and clipping. Elements are never created or destroyed here, and
//! showing, hiding, or animating them stays with the host toolkit.

use shimmerui_color::{Color, Gradient};
use shimmerui_core::{EdgeInsets, Point, Rect, Size, VisualElement};
use shimmerui_layout::{InvalidLayoutSpec, MultilineLayout};

/// How a skeleton placeholder is painted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkeletonKind {
    /// A flat tint.
    Solid(Color),
    /// A gradient sheen, usually animated by the backend.
    Gradient(Gradient),
}

impl Default for SkeletonKind {
    fn default() -> Self {
        Self::Solid(Color::default())
    }
}

/// Configures one element as line `index` of a multiline block.
///
/// The anchor point is pinned to the element's origin corner so that any
/// scale animation the host applies grows the line from its top-left, the
/// way text fills a line.
///
/// # Errors
///
/// Returns [`InvalidLayoutSpec`] if the layout rejects its parameters or
/// the index; the element is left untouched in that case.
pub fn decorate_line<E: VisualElement>(
    element: &mut E,
    layout: &MultilineLayout,
    index: usize,
    corner_radius: u32,
) -> Result<(), InvalidLayoutSpec> {
    let frame = layout.frame(index)?;
    tracing::debug!(
        index,
        x = frame.x(),
        y = frame.y(),
        width = frame.width(),
        height = frame.height(),
        "placing skeleton line"
    );
    apply(element, frame, corner_radius);
    Ok(())
}

/// Configures a slice of elements as consecutive lines of one block.
///
/// Elements are decorated in order starting at line 0. The caller owns the
/// slice and decides how many elements a view gets; extra elements past
/// the layout's line count are an error, fewer simply leave later lines
/// undecorated.
///
/// # Errors
///
/// Returns [`InvalidLayoutSpec`] on the first element whose line cannot be
/// computed; earlier elements keep their decoration, later ones are left
/// untouched.
pub fn decorate_lines<E: VisualElement>(
    elements: &mut [E],
    layout: &MultilineLayout,
    corner_radius: u32,
) -> Result<(), InvalidLayoutSpec> {
    tracing::debug!(
        lines = layout.total_lines(),
        elements = elements.len(),
        "decorating multiline block"
    );
    for (index, element) in elements.iter_mut().enumerate() {
        decorate_line(element, layout, index, corner_radius)?;
    }
    Ok(())
}

/// Configures one element as a whole-view placeholder.
///
/// Non-text views (avatars, images, buttons) get a single skeleton
/// covering their bounds inset by `padding`; the frame clamps at zero size
/// if the padding exceeds the container.
pub fn decorate_bounds<E: VisualElement>(
    element: &mut E,
    container: Size,
    padding: EdgeInsets,
    corner_radius: u32,
) {
    let frame = Rect::from_size(container).inset(&padding);
    tracing::debug!(
        width = frame.width(),
        height = frame.height(),
        "placing whole-view skeleton"
    );
    apply(element, frame, corner_radius);
}

#[allow(clippy::cast_precision_loss)]
fn apply<E: VisualElement>(element: &mut E, frame: Rect, corner_radius: u32) {
    element.set_anchor_point(Point::zero());
    element.set_frame(frame);
    element.set_corner_radius(corner_radius as f32);
    element.set_clips_to_bounds(true);
}
