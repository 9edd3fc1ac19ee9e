// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lightbox_geometry --heading-base-level=0

//! Lightbox Geometry: viewport fitting and pan-bound math for an image viewer.
//!
//! This crate provides the pure geometry layer of the Lightbox engine. Given
//! an image's natural size, the viewport container size, a zoom factor, and a
//! quarter-turn rotation, it answers one question: how far may the image be
//! panned before its edge crosses the container edge?
//!
//! The model mirrors a conventional photo-viewer layout:
//!
//! - The image is fitted into 90% of the container, preserving aspect ratio
//!   and never upscaling past its natural size.
//! - Rotation swaps the effective axis contributions using the rotated
//!   bounding box of a rectangle (`|cos θ|` / `|sin θ|` weighting, which for
//!   quarter turns is an exact swap).
//! - The fitted, rotated size is multiplied by the zoom factor; half of the
//!   overflow beyond the container on each axis becomes the symmetric pan
//!   range. Content smaller than the container collapses to a zero range, so
//!   it cannot be panned at all.
//!
//! Positions are expressed as a [`Vec2`] offset of the image center from the
//! viewport center, so the bounds are always symmetric about the origin.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use lightbox_geometry::{pan_bounds, Rotation};
//!
//! // A 4000x3000 photo in an 800x600 container at 2x zoom.
//! let bounds = pan_bounds(
//!     Size::new(4000.0, 3000.0),
//!     Size::new(800.0, 600.0),
//!     2.0,
//!     Rotation::Deg0,
//! );
//!
//! // Panning is possible, but a wild offset is pulled back inside.
//! assert!(!bounds.is_empty());
//! let clamped = bounds.clamp(Vec2::new(10_000.0, -10_000.0));
//! assert_eq!(clamped.x, bounds.max_x());
//! assert_eq!(clamped.y, bounds.min_y());
//! ```
//!
//! Every function here is pure and O(1); callers are expected to re-run the
//! computation on every zoom, rotation, or resize event rather than cache
//! across them. Degenerate input (zero or negative container or image sizes)
//! yields [`PanBounds::ZERO`] so downstream layers stay inert instead of
//! dividing by zero.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod rotation;

pub use bounds::{PanBounds, display_size, pan_bounds, rotated_size};
pub use rotation::Rotation;
