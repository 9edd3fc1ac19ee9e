// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Zoom sensitivity per gesture source.
///
/// Each value scales raw event deltas into zoom-level deltas. The defaults
/// are the empirically tuned constants of the reference viewer behavior;
/// they are configuration, not derived quantities, and are kept here so a
/// host can retune one source without touching the classifier.
///
/// Signs are handled by the classifier: wheel deltas are negated (scrolling
/// up zooms in), touch-pinch distance deltas are not (spreading fingers
/// zooms in).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sensitivity {
    /// Trackpad pinch reported as a ctrl-modified wheel event.
    pub precise_pinch: f64,
    /// Two-finger trackpad scroll consumed as zoom while zoomed in.
    pub precise_scroll: f64,
    /// Discrete mouse wheel.
    pub wheel: f64,
    /// Two-finger touch pinch, per pixel of distance change.
    pub touch_pinch: f64,
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self {
            precise_pinch: 0.02,
            precise_scroll: 0.002,
            wheel: 0.005,
            touch_pinch: 0.005,
        }
    }
}
