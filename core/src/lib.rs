#![no_std]
//! Core types for `ShimmerUI`.
//!
//! This crate holds what every other `ShimmerUI` crate builds on:
//!
//! - the geometry primitives ([`Point`], [`Size`], [`Rect`],
//!   [`EdgeInsets`]) skeleton frames are expressed in, and
//! - the [`VisualElement`] capability trait a host toolkit implements so
//!   its display primitives can be decorated.
//!
//! Everything is plain data and pure arithmetic; there is no allocation,
//! no toolkit dependency, and no global state.

pub mod element;
pub mod geometry;

#[doc(inline)]
pub use element::VisualElement;
#[doc(inline)]
pub use geometry::{EdgeInsets, Point, Rect, Size};
