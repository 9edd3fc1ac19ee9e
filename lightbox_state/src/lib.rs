// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lightbox_state --heading-base-level=0

//! Lightbox State: per-image transform records for an image viewer.
//!
//! Each image in a viewer session carries its own [`ImageState`]: zoom level,
//! pan position, quarter-turn rotation, and a cached copy of the pan bounds
//! that were valid when the state was last written. [`ImageStates`] maps image
//! indices to these records, creating entries lazily on first access and
//! keeping them for the life of the session so that navigating away from an
//! image and back restores its exact prior transform.
//!
//! ## Invariant
//!
//! After every mutation through this crate, `position` lies inside `bounds`.
//! [`ImageStates::update`] re-clamps the position against the (possibly
//! updated) bounds before returning, so callers never observe a transiently
//! out-of-bounds state. Keeping `bounds` fresh is the caller's job: whenever
//! zoom, rotation, or the container changes, recompute with
//! [`lightbox_geometry::pan_bounds`] and write the new bounds in the same
//! `update` call.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use lightbox_state::ImageStates;
//! use lightbox_geometry::PanBounds;
//!
//! let mut states = ImageStates::new();
//!
//! // First access creates the default state: zoom 1.0, centered, upright.
//! assert_eq!(states.get(0).zoom_level, 1.0);
//!
//! // Writes go through `update`, which enforces the bounds invariant.
//! let state = states.update(0, |s| {
//!     s.zoom_level = 3.0;
//!     s.bounds = PanBounds::symmetric(100.0, 50.0);
//!     s.position = Vec2::new(400.0, -400.0);
//! });
//! assert_eq!(state.position, Vec2::new(100.0, -50.0));
//!
//! // The record persists; revisiting the index restores it exactly.
//! assert_eq!(states.get(0).zoom_level, 3.0);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod store;

pub use store::{ImageState, ImageStates};
