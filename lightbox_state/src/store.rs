// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;
use kurbo::Vec2;
use lightbox_geometry::{PanBounds, Rotation};

/// Transform state of a single image in the viewer.
///
/// `position` is the offset of the image center from the viewport center,
/// after scaling and rotation. `bounds` caches the pan limits the position
/// was last clamped against; it is derived data that the owning layer
/// refreshes whenever zoom, rotation, or the container size changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageState {
    /// Uniform zoom factor, in `[MIN_ZOOM, MAX_ZOOM]`.
    pub zoom_level: f64,
    /// Image-center offset from the viewport center, in device pixels.
    pub position: Vec2,
    /// Quarter-turn rotation.
    pub rotation: Rotation,
    /// Cached pan limits for the current zoom/rotation/container combination.
    pub bounds: PanBounds,
}

impl Default for ImageState {
    fn default() -> Self {
        Self {
            zoom_level: 1.0,
            position: Vec2::ZERO,
            rotation: Rotation::Deg0,
            bounds: PanBounds::ZERO,
        }
    }
}

impl ImageState {
    /// Smallest allowed zoom factor.
    pub const MIN_ZOOM: f64 = 0.1;
    /// Largest allowed zoom factor.
    pub const MAX_ZOOM: f64 = 5.0;

    /// Returns `true` while the image is enlarged past its fitted size.
    ///
    /// Drag-panning is only meaningful in this regime; at or below native
    /// scale there is nothing to pan.
    #[must_use]
    pub fn is_zoomed_in(&self) -> bool {
        self.zoom_level > 1.0
    }

    /// Returns `true` when zoom, position, and rotation are all at their
    /// defaults, i.e. a reset would change nothing.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.zoom_level == 1.0 && self.position == Vec2::ZERO && self.rotation == Rotation::Deg0
    }
}

/// Lazily-populated map from image index to [`ImageState`].
///
/// Entries are created with defaults on first access and never removed while
/// the store lives, so per-image transforms survive navigation. The whole map
/// is discarded only by [`ImageStates::replace_all`], when the image
/// collection itself is swapped out.
#[derive(Clone, Debug, Default)]
pub struct ImageStates {
    states: HashMap<usize, ImageState>,
}

impl ImageStates {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state for `index`, creating the default entry on first
    /// access.
    pub fn get(&mut self, index: usize) -> ImageState {
        *self.states.entry(index).or_default()
    }

    /// Returns the state for `index` without creating an entry.
    ///
    /// Absent entries read as the default state, matching what [`Self::get`]
    /// would create.
    #[must_use]
    pub fn peek(&self, index: usize) -> ImageState {
        self.states.get(&index).copied().unwrap_or_default()
    }

    /// Mutates the state for `index` and returns the result.
    ///
    /// The entry is created if absent. After `mutate` runs, the position is
    /// re-clamped against the entry's bounds, so the stored state always
    /// satisfies the position-in-bounds invariant even when the closure wrote
    /// both a new position and new bounds.
    pub fn update(&mut self, index: usize, mutate: impl FnOnce(&mut ImageState)) -> ImageState {
        let state = self.states.entry(index).or_default();
        mutate(state);
        state.position = state.bounds.clamp(state.position);
        *state
    }

    /// Restores the default state for `index`.
    pub fn reset(&mut self, index: usize) -> ImageState {
        let state = ImageState::default();
        self.states.insert(index, state);
        state
    }

    /// Discards every record, for wholesale image-collection replacement.
    pub fn replace_all(&mut self) {
        self.states.clear();
    }

    /// Number of indices that have been visited so far.
    #[must_use]
    pub fn visited(&self) -> usize {
        self.states.len()
    }
}
