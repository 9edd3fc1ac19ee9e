// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewer session: per-image transform control over a navigable
//! collection.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Size, Vec2};
use lightbox_geometry::{Rotation, pan_bounds};
use lightbox_gesture::{
    GestureIntent, GestureRecognizer, WheelEvent, WheelResponse, double_tap,
};
use lightbox_state::ImageStates;

use crate::{Navigator, SessionConfig};

/// The transform the rendering layer applies to paint an image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Image-center offset from the viewport center, in device pixels.
    pub translation: Vec2,
    /// Quarter-turn rotation.
    pub rotation: Rotation,
}

/// Enabled/disabled state for the viewer's control affordances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlState {
    /// The zoom-in control should be enabled.
    pub can_zoom_in: bool,
    /// The zoom-out control should be enabled.
    pub can_zoom_out: bool,
    /// The reset control should be enabled (something differs from default).
    pub can_reset: bool,
    /// The active image is the first in the collection.
    pub is_first_image: bool,
    /// The active image is the last in the collection.
    pub is_last_image: bool,
}

/// Event returned by [`ViewportSession::poll`] when something completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A navigation transition finished; this index is now active.
    ImageChanged(usize),
}

/// The interactive engine of an image viewer.
///
/// Owns one transform record per image, the gesture state machine, and the
/// navigation coordinator. See the crate docs for the time and geometry
/// model.
#[derive(Clone, Debug)]
pub struct ViewportSession {
    config: SessionConfig,
    states: ImageStates,
    gestures: GestureRecognizer,
    navigator: Navigator,
    container: Size,
    natural: Vec<Option<Size>>,
}

impl ViewportSession {
    /// Creates a session over `image_count` images, starting at
    /// `start_index` clamped into range.
    #[must_use]
    pub fn new(image_count: usize, start_index: usize, config: SessionConfig) -> Self {
        // Normalize the zoom range so a swapped pair cannot invert clamping.
        let mut config = config;
        if config.min_zoom > config.max_zoom {
            core::mem::swap(&mut config.min_zoom, &mut config.max_zoom);
        }
        Self {
            gestures: GestureRecognizer::new(config.sensitivity, config.precise_scroll_device),
            navigator: Navigator::new(image_count, start_index),
            states: ImageStates::new(),
            container: Size::ZERO,
            natural: vec![None; image_count],
            config,
        }
    }

    /// The currently active image index.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.navigator.active()
    }

    /// Number of images in the collection.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.navigator.count()
    }

    /// Returns `true` while a navigation transition is in flight.
    ///
    /// Pan and zoom input is ignored for its duration.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.navigator.is_transitioning()
    }

    // --- collaborator geometry ---

    /// Reports the viewport container size.
    ///
    /// Recomputes bounds for the active image only; other images' cached
    /// bounds refresh lazily when they next become active.
    pub fn set_container_size(&mut self, size: Size) {
        self.container = size;
        self.refresh_bounds(self.navigator.active());
    }

    /// Reports an image's natural pixel size, once known.
    ///
    /// Out-of-range indices are ignored. Bounds for the active image are
    /// recomputed immediately; until its natural size is known, zoom and
    /// rotation on an image are no-ops.
    pub fn set_natural_size(&mut self, index: usize, size: Size) {
        if let Some(slot) = self.natural.get_mut(index) {
            *slot = Some(size);
            if index == self.navigator.active() {
                self.refresh_bounds(index);
            }
        }
    }

    /// Replaces the image collection wholesale.
    ///
    /// Every per-image transform is discarded, the active index returns to
    /// 0, and any in-flight transition or gesture is abandoned.
    pub fn set_images(&mut self, image_count: usize) {
        self.natural = vec![None; image_count];
        self.states.replace_all();
        self.navigator.replace(image_count);
        self.gestures.cancel();
    }

    // --- transform control ---

    /// Sets the active image's zoom level, keeping `focus` (relative to the
    /// viewport center) visually fixed.
    ///
    /// The target is clamped into the configured zoom range. Returns `false`
    /// without recomputing anything when the clamped target equals the
    /// current level, when a transition is in flight, or when geometry is
    /// not yet known.
    pub fn zoom_to(&mut self, target: f64, focus: Point) -> bool {
        self.apply_zoom(target, focus, None)
    }

    /// Steps the zoom in by the configured increment, about the center.
    pub fn zoom_in(&mut self) -> bool {
        let level = self.states.get(self.navigator.active()).zoom_level;
        self.zoom_to(level + self.config.zoom_step, Point::ZERO)
    }

    /// Steps the zoom out by the configured increment, about the center.
    pub fn zoom_out(&mut self) -> bool {
        let level = self.states.get(self.navigator.active()).zoom_level;
        self.zoom_to(level - self.config.zoom_step, Point::ZERO)
    }

    /// Rotates the active image a quarter turn clockwise.
    ///
    /// Bounds are recomputed for the new orientation and the existing
    /// position is re-clamped rather than reset, so a position at a bound
    /// edge stays valid when the bounds shrink.
    pub fn rotate(&mut self) -> bool {
        if self.navigator.is_transitioning() {
            return false;
        }
        let index = self.navigator.active();
        let Some((natural, container)) = self.geometry(index) else {
            return false;
        };
        self.states.update(index, |s| {
            s.rotation = s.rotation.advance();
            s.bounds = pan_bounds(natural, container, s.zoom_level, s.rotation);
        });
        true
    }

    /// Restores an image's transform to defaults and abandons any
    /// in-progress gesture.
    pub fn reset_image_state(&mut self, index: usize) {
        self.states.reset(index);
        self.gestures.cancel();
        self.refresh_bounds(index);
    }

    /// Resets the active image; see [`Self::reset_image_state`].
    pub fn reset_active(&mut self) {
        self.reset_image_state(self.navigator.active());
    }

    // --- input surface ---

    /// Primary pointer pressed, localized to the viewport center.
    pub fn pointer_down(&mut self, at: Point) {
        if self.navigator.is_transitioning() {
            return;
        }
        let state = self.states.get(self.navigator.active());
        self.gestures.pointer_down(at, state.zoom_level, state.position);
    }

    /// Pointer moved; pans while a drag is active. Returns `true` when the
    /// transform changed.
    pub fn pointer_move(&mut self, at: Point) -> bool {
        if self.navigator.is_transitioning() {
            return false;
        }
        match self.gestures.pointer_move(at) {
            Some(intent) => self.apply_intent(intent),
            None => false,
        }
    }

    /// Primary pointer released. Idempotent.
    pub fn pointer_up(&mut self) {
        self.gestures.pointer_up();
    }

    /// Touch sequence started. Returns `true` when the host must suppress
    /// its default handling (always, for multi-touch).
    pub fn touch_start(&mut self, touches: &[Point]) -> bool {
        if self.navigator.is_transitioning() {
            // Interaction is suppressed, but the page still must not
            // pinch-zoom underneath the viewer.
            return touches.len() >= 2;
        }
        let state = self.states.get(self.navigator.active());
        self.gestures
            .touch_start(touches, state.zoom_level, state.position)
            .consume
    }

    /// Touch points moved. Applies the resulting pan or pinch zoom and
    /// returns whether the host must suppress its default handling.
    pub fn touch_move(&mut self, touches: &[Point]) -> bool {
        if self.navigator.is_transitioning() {
            return touches.len() >= 2;
        }
        let state = self.states.get(self.navigator.active());
        let response = self
            .gestures
            .touch_move(touches, state.zoom_level, state.position);
        if let Some(intent) = response.intent {
            self.apply_intent(intent);
        }
        response.consume
    }

    /// Touches lifted; `remaining` holds the points still down. Idempotent.
    pub fn touch_end(&mut self, remaining: &[Point]) {
        if self.navigator.is_transitioning() {
            // A surviving finger must not become a drag on the incoming
            // image.
            self.gestures.cancel();
            return;
        }
        let state = self.states.get(self.navigator.active());
        self.gestures
            .touch_end(remaining, state.zoom_level, state.position);
    }

    /// Classifies and applies a wheel event.
    ///
    /// Returns `true` when the host must consume the event (every branch
    /// attributed to zooming, even when the zoom is already pinned at a
    /// limit) and `false` when the event belongs to the page.
    pub fn wheel(&mut self, event: WheelEvent) -> bool {
        if self.navigator.is_transitioning() {
            return false;
        }
        let state = self.states.get(self.navigator.active());
        match self.gestures.wheel(event, state.zoom_level) {
            WheelResponse::Zoom { delta, focus, .. } => {
                self.apply_zoom(state.zoom_level + delta, focus, None);
                true
            }
            WheelResponse::PassThrough => false,
        }
    }

    /// Advances the double-click / double-tap zoom cycle at `at`.
    pub fn double_click(&mut self, at: Point) -> bool {
        if self.navigator.is_transitioning() {
            return false;
        }
        let level = self.states.get(self.navigator.active()).zoom_level;
        self.apply_intent(double_tap(level, at))
    }

    // --- navigation ---

    /// Requests navigation to `index`; see [`Navigator::request`].
    pub fn go_to_index(&mut self, index: usize, now: u64) -> bool {
        self.start_navigation(|nav, delay| nav.request(index, now, delay))
    }

    /// Requests the next image; a no-op on the last one.
    pub fn next(&mut self, now: u64) -> bool {
        self.start_navigation(|nav, delay| nav.next(now, delay))
    }

    /// Requests the previous image; a no-op on the first one.
    pub fn previous(&mut self, now: u64) -> bool {
        self.start_navigation(|nav, delay| nav.previous(now, delay))
    }

    /// Completes an in-flight transition once its deadline has passed.
    ///
    /// Call from the host frame loop with the current time. On completion,
    /// bounds for the newly active image are recomputed (its natural size
    /// and any resizes that happened while it was inactive may differ) and
    /// the change is reported.
    pub fn poll(&mut self, now: u64) -> Option<SessionEvent> {
        let index = self.navigator.poll(now)?;
        self.refresh_bounds(index);
        Some(SessionEvent::ImageChanged(index))
    }

    // --- outputs ---

    /// The transform for `index`, for the rendering layer.
    #[must_use]
    pub fn transform(&self, index: usize) -> Transform {
        let state = self.states.peek(index);
        Transform {
            scale: state.zoom_level,
            translation: state.position,
            rotation: state.rotation,
        }
    }

    /// The transform for the active image.
    #[must_use]
    pub fn active_transform(&self) -> Transform {
        self.transform(self.navigator.active())
    }

    /// Enabled/disabled state for the viewer's control affordances.
    #[must_use]
    pub fn control_state(&self) -> ControlState {
        let state = self.states.peek(self.navigator.active());
        ControlState {
            can_zoom_in: state.zoom_level < self.config.max_zoom,
            can_zoom_out: state.zoom_level > self.config.min_zoom,
            can_reset: !state.is_pristine(),
            is_first_image: self.navigator.is_first(),
            is_last_image: self.navigator.is_last(),
        }
    }

    // --- internals ---

    fn start_navigation(&mut self, go: impl FnOnce(&mut Navigator, u64) -> bool) -> bool {
        let started = go(&mut self.navigator, self.config.transition_ms);
        if started {
            self.gestures.cancel();
        }
        started
    }

    /// Natural and container sizes for `index`, when both are known and
    /// non-degenerate.
    fn geometry(&self, index: usize) -> Option<(Size, Size)> {
        let natural = self.natural.get(index).copied().flatten()?;
        if natural.width <= 0.0
            || natural.height <= 0.0
            || self.container.width <= 0.0
            || self.container.height <= 0.0
        {
            return None;
        }
        Some((natural, self.container))
    }

    fn refresh_bounds(&mut self, index: usize) {
        let Some((natural, container)) = self.geometry(index) else {
            return;
        };
        self.states.update(index, |s| {
            s.bounds = pan_bounds(natural, container, s.zoom_level, s.rotation);
        });
    }

    fn apply_intent(&mut self, intent: GestureIntent) -> bool {
        match intent {
            GestureIntent::Pan { position } => self.pan_to(position),
            GestureIntent::ZoomBy { delta, focus } => {
                let level = self.states.get(self.navigator.active()).zoom_level;
                self.apply_zoom(level + delta, focus, None)
            }
            GestureIntent::ZoomTo { level, position } => {
                self.apply_zoom(level, Point::ZERO, Some(position))
            }
        }
    }

    fn pan_to(&mut self, position: Vec2) -> bool {
        let index = self.navigator.active();
        let before = self.states.get(index).position;
        let after = self.states.update(index, |s| s.position = position).position;
        before != after
    }

    fn apply_zoom(&mut self, target: f64, focus: Point, forced: Option<Vec2>) -> bool {
        if self.navigator.is_transitioning() {
            return false;
        }
        let index = self.navigator.active();
        let Some((natural, container)) = self.geometry(index) else {
            return false;
        };

        let state = self.states.get(index);
        let clamped = target.clamp(self.config.min_zoom, self.config.max_zoom);
        if (clamped - state.zoom_level).abs() < f64::EPSILON {
            // Already pinned there; skip the recompute and notification.
            return false;
        }

        let position = forced.unwrap_or_else(|| {
            // Shift so the focus point stays visually fixed under the new
            // scale.
            let factor = clamped / state.zoom_level;
            state.position + focus.to_vec2() * ((1.0 - factor) * 0.5)
        });
        let bounds = pan_bounds(natural, container, clamped, state.rotation);

        self.states.update(index, |s| {
            s.zoom_level = clamped;
            s.bounds = bounds;
            s.position = position;
        });
        true
    }
}
