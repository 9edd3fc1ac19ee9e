// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lightbox_gesture::Sensitivity;
use lightbox_state::ImageState;

/// Tunable parameters of a viewer session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig {
    /// Smallest allowed zoom level.
    pub min_zoom: f64,
    /// Largest allowed zoom level.
    pub max_zoom: f64,
    /// Zoom-level increment for the button-style zoom in/out operations.
    pub zoom_step: f64,
    /// Duration of the navigation transition, in milliseconds. The active
    /// index swaps only once this much time has passed since the request.
    pub transition_ms: u64,
    /// Zoom sensitivity per gesture source.
    pub sensitivity: Sensitivity,
    /// Host-decided capability flag: `true` when wheel events come from a
    /// trackpad-class device with precise scrolling.
    pub precise_scroll_device: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_zoom: ImageState::MIN_ZOOM,
            max_zoom: ImageState::MAX_ZOOM,
            zoom_step: 0.25,
            transition_ms: 150,
            sensitivity: Sensitivity::default(),
            precise_scroll_device: false,
        }
    }
}
