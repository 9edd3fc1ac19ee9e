// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel disambiguation: one event shape, three zoom sources.
//!
//! Browsers and toolkits deliver trackpad pinches, two-finger trackpad
//! scrolls, and discrete mouse wheel clicks through the same wheel event.
//! [`classify_wheel`] separates them using only the event payload plus one
//! injected capability flag (`precise_scroll_device`), so the decision is
//! reproducible in a unit test:
//!
//! - ctrl held on a precise-scroll device is a pinch (hosts report trackpad
//!   pinches as ctrl-wheel);
//! - a non-zero horizontal component without ctrl is a two-finger scroll,
//!   which zooms gently while zoomed in and is otherwise
//!   [`WheelResponse::PassThrough`] so the surrounding page keeps scrolling;
//! - everything else is a discrete wheel click.
//!
//! Any [`WheelResponse::Zoom`] obliges the host to consume the event
//! (prevent its default scroll); `PassThrough` is the single case where the
//! engine yields control.

use kurbo::{Point, Vec2};

use crate::Sensitivity;

/// A host wheel event, localized to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Scroll delta as reported by the host (`x` horizontal, `y` vertical).
    pub delta: Vec2,
    /// Whether the ctrl modifier was held (or synthesized by a pinch).
    pub ctrl: bool,
    /// Cursor position relative to the viewport center.
    pub cursor: Point,
}

/// Which physical gesture a wheel event was attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelSource {
    /// Trackpad pinch delivered as a ctrl-modified wheel.
    PrecisePinch,
    /// Two-finger trackpad scroll consumed as zoom.
    PreciseScroll,
    /// Discrete mouse wheel click.
    Wheel,
}

/// Outcome of classifying a wheel event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelResponse {
    /// Apply a zoom delta about `focus`; the host must consume the event.
    Zoom {
        /// Additive change to the zoom level.
        delta: f64,
        /// Zoom focus, relative to the viewport center.
        focus: Point,
        /// The gesture the event was attributed to.
        source: WheelSource,
    },
    /// Not ours: let the host scroll normally.
    PassThrough,
}

/// Classifies a wheel event into a zoom action or a pass-through.
///
/// `precise_scroll_device` is the host-decided capability flag for
/// trackpad-class input; `zoomed_in` is whether the active image is enlarged
/// past native scale (`zoom_level > 1`), which gates the two-finger scroll
/// branch.
#[must_use]
pub fn classify_wheel(
    event: WheelEvent,
    precise_scroll_device: bool,
    zoomed_in: bool,
    sensitivity: Sensitivity,
) -> WheelResponse {
    if event.ctrl && precise_scroll_device {
        return WheelResponse::Zoom {
            delta: event.delta.y * -sensitivity.precise_pinch,
            focus: event.cursor,
            source: WheelSource::PrecisePinch,
        };
    }

    if !event.ctrl && event.delta.x.abs() > 0.0 {
        if zoomed_in {
            return WheelResponse::Zoom {
                delta: event.delta.y * -sensitivity.precise_scroll,
                focus: event.cursor,
                source: WheelSource::PreciseScroll,
            };
        }
        // Not zoomed: a two-finger scroll belongs to the page, not to us.
        return WheelResponse::PassThrough;
    }

    WheelResponse::Zoom {
        delta: event.delta.y * -sensitivity.wheel,
        focus: event.cursor,
        source: WheelSource::Wheel,
    }
}
