//! The capability trait connecting skeleton layout to a host toolkit.

use crate::geometry::{Point, Rect};

/// A display primitive that can carry a skeleton placeholder.
///
/// Any concrete type in the host toolkit - a layer, a widget, a retained
/// scene node - satisfies this trait by exposing four setters. Nothing here
/// requires inheriting from a toolkit base class, and the library never
/// creates, retains, or destroys an element: ownership stays with the
/// caller for the element's whole lifetime.
///
/// Setters may be called in any order; decoration calls each of them
/// exactly once per pass.
pub trait VisualElement {
    /// Positions and sizes the element within its container.
    fn set_frame(&mut self, frame: Rect);

    /// Sets the unit-space anchor point scaling and rotation pivot around.
    ///
    /// Decoration pins this to the origin corner so that animations applied
    /// by the host toolkit grow the placeholder from its top-left, matching
    /// how text fills a line.
    fn set_anchor_point(&mut self, anchor: Point);

    /// Sets the corner rounding radius in points.
    fn set_corner_radius(&mut self, radius: f32);

    /// Controls whether content outside the element's bounds is clipped.
    fn set_clips_to_bounds(&mut self, clips: bool);
}

impl<E: VisualElement + ?Sized> VisualElement for &mut E {
    fn set_frame(&mut self, frame: Rect) {
        (**self).set_frame(frame);
    }

    fn set_anchor_point(&mut self, anchor: Point) {
        (**self).set_anchor_point(anchor);
    }

    fn set_corner_radius(&mut self, radius: f32) {
        (**self).set_corner_radius(radius);
    }

    fn set_clips_to_bounds(&mut self, clips: bool) {
        (**self).set_clips_to_bounds(clips);
    }
}
