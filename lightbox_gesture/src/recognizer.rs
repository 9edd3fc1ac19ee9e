// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture state machine: pointer, touch, and wheel events in; viewer
//! intents out.

use kurbo::{Point, Vec2};

use crate::{
    DragAnchor, PinchTrack, Sensitivity, WheelEvent, WheelResponse, classify_wheel,
};

/// The currently active gesture, as a tagged union.
///
/// The drag anchor and pinch track exist only inside their variant, so an
/// anchor from a finished drag can never leak into the next gesture.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum GesturePhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A single pointer or touch is panning the image.
    Dragging(DragAnchor),
    /// Two touches are pinch-zooming the image.
    Pinching(PinchTrack),
}

/// A discrete intent produced by classifying input.
///
/// Positions and deltas are unclamped; the layer that owns the image state
/// applies zoom limits and pan bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureIntent {
    /// Pan the active image to this position (offset from viewport center).
    Pan {
        /// Desired, not-yet-clamped pan position.
        position: Vec2,
    },
    /// Change the zoom level additively, keeping `focus` visually fixed.
    ZoomBy {
        /// Additive change to the zoom level.
        delta: f64,
        /// Zoom focus relative to the viewport center.
        focus: Point,
    },
    /// Jump to an absolute zoom level with a forced position (double-tap).
    ZoomTo {
        /// Target zoom level.
        level: f64,
        /// Position to force, before bound clamping.
        position: Vec2,
    },
}

/// Outcome of a touch event: an optional intent, plus whether the host must
/// suppress its default handling for the event.
///
/// Any multi-touch sequence demands suppression even when no zoom results,
/// so the surrounding page never pinch-zooms instead of the image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchResponse {
    /// What the gesture asks of the viewer, if anything.
    pub intent: Option<GestureIntent>,
    /// Whether the host must prevent its default gesture handling.
    pub consume: bool,
}

impl TouchResponse {
    fn inert(consume: bool) -> Self {
        Self {
            intent: None,
            consume,
        }
    }
}

/// Classifies a stream of localized input events into [`GestureIntent`]s.
///
/// All coordinates are relative to the viewport center; see the crate docs.
/// Methods that depend on the viewer's current zoom level or pan position
/// take them as arguments, keeping this type free of image state.
#[derive(Clone, Copy, Debug)]
pub struct GestureRecognizer {
    phase: GesturePhase,
    sensitivity: Sensitivity,
    precise_scroll_device: bool,
}

impl GestureRecognizer {
    /// Creates a recognizer.
    ///
    /// `precise_scroll_device` is the host-decided capability flag for
    /// trackpad-class wheel input.
    #[must_use]
    pub fn new(sensitivity: Sensitivity, precise_scroll_device: bool) -> Self {
        Self {
            phase: GesturePhase::Idle,
            sensitivity,
            precise_scroll_device,
        }
    }

    /// The currently active gesture.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Returns `true` while a drag-pan is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging(_))
    }

    /// Returns `true` while a pinch-zoom is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        matches!(self.phase, GesturePhase::Pinching(_))
    }

    /// Abandons any in-progress gesture.
    ///
    /// Used when the viewer state is torn down under the gesture, e.g. on a
    /// reset or an image change.
    pub fn cancel(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    /// Primary pointer pressed at `pointer`, with the active image at
    /// `zoom_level` panned to `position`.
    ///
    /// Starts a drag only from `Idle` and only while zoomed in; at or below
    /// native scale there is nothing to pan.
    pub fn pointer_down(&mut self, pointer: Point, zoom_level: f64, position: Vec2) {
        if zoom_level > 1.0 && self.phase == GesturePhase::Idle {
            self.phase = GesturePhase::Dragging(DragAnchor::at(pointer, position));
        }
    }

    /// Pointer moved; yields the desired pan position while dragging.
    ///
    /// A move with no preceding press is ignored.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<GestureIntent> {
        match self.phase {
            GesturePhase::Dragging(anchor) => Some(GestureIntent::Pan {
                position: anchor.position_for(pointer),
            }),
            _ => None,
        }
    }

    /// Primary pointer released.
    ///
    /// Idempotent: releasing with no drag in progress is a no-op. An active
    /// pinch is left alone, so the synthetic mouse-up some platforms fire
    /// after a touch sequence cannot kill a live two-finger gesture.
    pub fn pointer_up(&mut self) {
        if self.is_dragging() {
            self.phase = GesturePhase::Idle;
        }
    }

    /// Touch sequence (re)started with the given active touch points.
    pub fn touch_start(
        &mut self,
        touches: &[Point],
        zoom_level: f64,
        position: Vec2,
    ) -> TouchResponse {
        if touches.len() >= 2 {
            if let Some(track) = PinchTrack::begin(touches) {
                self.phase = GesturePhase::Pinching(track);
            }
            // Multi-touch always belongs to the image, never the page.
            return TouchResponse::inert(true);
        }
        if let [touch] = touches
            && zoom_level > 1.0
        {
            self.phase = GesturePhase::Dragging(DragAnchor::at(*touch, position));
        }
        TouchResponse::inert(false)
    }

    /// Touch points moved.
    ///
    /// Two-finger motion advances the pinch; single-finger motion advances a
    /// drag, or adopts the remaining finger as a drag when the second finger
    /// of a pinch has just lifted mid-stream.
    pub fn touch_move(
        &mut self,
        touches: &[Point],
        zoom_level: f64,
        position: Vec2,
    ) -> TouchResponse {
        if touches.len() >= 2 {
            let GesturePhase::Pinching(mut track) = self.phase else {
                // Two-finger motion without a recorded start: ignore it, but
                // still keep the page from pinch-zooming.
                return TouchResponse::inert(true);
            };
            let Some((distance_delta, midpoint)) = track.advance(touches) else {
                return TouchResponse::inert(true);
            };
            self.phase = GesturePhase::Pinching(track);
            return TouchResponse {
                intent: Some(GestureIntent::ZoomBy {
                    delta: distance_delta * self.sensitivity.touch_pinch,
                    focus: midpoint,
                }),
                consume: true,
            };
        }

        let [touch] = touches else {
            return TouchResponse::inert(false);
        };
        let consume = zoom_level > 1.0;

        match self.phase {
            GesturePhase::Pinching(_) => {
                // Second finger lifted without a touch-end we saw: the pinch
                // is over, and the surviving finger becomes a drag if there
                // is anything to pan.
                self.phase = if zoom_level > 1.0 {
                    GesturePhase::Dragging(DragAnchor::at(*touch, position))
                } else {
                    GesturePhase::Idle
                };
                TouchResponse::inert(consume)
            }
            GesturePhase::Dragging(anchor) => TouchResponse {
                intent: Some(GestureIntent::Pan {
                    position: anchor.position_for(*touch),
                }),
                consume,
            },
            GesturePhase::Idle => TouchResponse::inert(consume),
        }
    }

    /// Touches lifted; `remaining` holds the points still down.
    ///
    /// Idempotent: a second end event for an already-ended gesture changes
    /// nothing. Dropping from two fingers to one hands the surviving finger
    /// over to a drag when zoomed in.
    pub fn touch_end(&mut self, remaining: &[Point], zoom_level: f64, position: Vec2) {
        match remaining {
            [] => self.phase = GesturePhase::Idle,
            [touch] => {
                self.phase = if zoom_level > 1.0 {
                    GesturePhase::Dragging(DragAnchor::at(*touch, position))
                } else {
                    GesturePhase::Idle
                };
            }
            _ => {
                // Three fingers dropped to two: restart the pinch from the
                // survivors so the next sample has no distance jump.
                if let Some(track) = PinchTrack::begin(remaining) {
                    self.phase = GesturePhase::Pinching(track);
                }
            }
        }
    }

    /// Classifies a wheel event; see [`classify_wheel`].
    ///
    /// Wheel zoom is instantaneous and leaves the gesture phase untouched.
    #[must_use]
    pub fn wheel(&self, event: WheelEvent, zoom_level: f64) -> WheelResponse {
        classify_wheel(
            event,
            self.precise_scroll_device,
            zoom_level > 1.0,
            self.sensitivity,
        )
    }

    /// The configured sensitivities.
    #[must_use]
    pub fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{GestureIntent, GesturePhase, GestureRecognizer};
    use crate::{Sensitivity, WheelEvent, WheelResponse, WheelSource};

    fn recognizer() -> GestureRecognizer {
        GestureRecognizer::new(Sensitivity::default(), false)
    }

    #[test]
    fn drag_requires_zoomed_in() {
        let mut g = recognizer();
        g.pointer_down(Point::new(10.0, 10.0), 1.0, Vec2::ZERO);
        assert_eq!(g.phase(), GesturePhase::Idle);
        assert_eq!(g.pointer_move(Point::new(20.0, 20.0)), None);

        g.pointer_down(Point::new(10.0, 10.0), 1.5, Vec2::ZERO);
        assert!(g.is_dragging());
    }

    #[test]
    fn drag_move_is_additive_on_the_pre_drag_position() {
        let mut g = recognizer();
        g.pointer_down(Point::new(100.0, 100.0), 2.0, Vec2::new(7.0, -3.0));
        let intent = g.pointer_move(Point::new(110.0, 90.0));
        assert_eq!(
            intent,
            Some(GestureIntent::Pan {
                position: Vec2::new(17.0, -13.0)
            })
        );
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut g = recognizer();
        assert_eq!(g.pointer_move(Point::new(50.0, 50.0)), None);
        let response = g.touch_move(&[Point::new(1.0, 1.0)], 2.0, Vec2::ZERO);
        assert_eq!(response.intent, None);
    }

    #[test]
    fn release_is_idempotent() {
        let mut g = recognizer();
        g.pointer_down(Point::ZERO, 2.0, Vec2::ZERO);
        g.pointer_up();
        assert_eq!(g.phase(), GesturePhase::Idle);
        g.pointer_up();
        g.touch_end(&[], 2.0, Vec2::ZERO);
        assert_eq!(g.phase(), GesturePhase::Idle);
    }

    #[test]
    fn synthetic_mouse_up_does_not_kill_a_live_pinch() {
        let mut g = recognizer();
        g.touch_start(
            &[Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
            1.0,
            Vec2::ZERO,
        );
        assert!(g.is_pinching());
        g.pointer_up();
        assert!(g.is_pinching());
    }

    #[test]
    fn multi_touch_always_consumes_even_at_zoom_limits() {
        let mut g = recognizer();
        let touches = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        assert!(g.touch_start(&touches, 5.0, Vec2::ZERO).consume);
        assert!(g.touch_move(&touches, 5.0, Vec2::ZERO).consume);

        // Even a two-finger move nobody started must still be consumed.
        let mut fresh = recognizer();
        assert!(fresh.touch_move(&touches, 1.0, Vec2::ZERO).consume);
        assert_eq!(fresh.touch_move(&touches, 1.0, Vec2::ZERO).intent, None);
    }

    #[test]
    fn pinch_spread_zooms_in_about_the_midpoint() {
        let mut g = recognizer();
        g.touch_start(
            &[Point::new(-10.0, 0.0), Point::new(10.0, 0.0)],
            1.0,
            Vec2::ZERO,
        );

        // Spread from 20px apart to 60px apart, midpoint drifting right.
        let response = g.touch_move(
            &[Point::new(-20.0, 0.0), Point::new(40.0, 0.0)],
            1.0,
            Vec2::ZERO,
        );
        assert_eq!(
            response.intent,
            Some(GestureIntent::ZoomBy {
                delta: 40.0 * 0.005,
                focus: Point::new(10.0, 0.0),
            })
        );
    }

    #[test]
    fn pinch_squeeze_zooms_out() {
        let mut g = recognizer();
        g.touch_start(
            &[Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
            2.0,
            Vec2::ZERO,
        );
        let response = g.touch_move(
            &[Point::new(20.0, 0.0), Point::new(80.0, 0.0)],
            2.0,
            Vec2::ZERO,
        );
        let Some(GestureIntent::ZoomBy { delta, .. }) = response.intent else {
            panic!("squeeze should produce a zoom intent");
        };
        assert!(delta < 0.0);
    }

    #[test]
    fn finger_drop_hands_over_to_a_drag_when_zoomed_in() {
        let mut g = recognizer();
        g.touch_start(
            &[Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
            2.0,
            Vec2::new(4.0, 4.0),
        );
        assert!(g.is_pinching());

        // One finger lifts; the survivor keeps panning from here.
        g.touch_end(&[Point::new(0.0, 0.0)], 2.0, Vec2::new(4.0, 4.0));
        assert!(g.is_dragging());
        let intent = g.touch_move(&[Point::new(6.0, 0.0)], 2.0, Vec2::new(4.0, 4.0));
        assert_eq!(
            intent.intent,
            Some(GestureIntent::Pan {
                position: Vec2::new(10.0, 4.0)
            })
        );
    }

    #[test]
    fn finger_drop_goes_idle_when_not_zoomed() {
        let mut g = recognizer();
        g.touch_start(
            &[Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
            1.0,
            Vec2::ZERO,
        );
        g.touch_end(&[Point::new(0.0, 0.0)], 1.0, Vec2::ZERO);
        assert_eq!(g.phase(), GesturePhase::Idle);
    }

    #[test]
    fn finger_drop_detected_on_move_without_an_end_event() {
        let mut g = recognizer();
        g.touch_start(
            &[Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
            2.0,
            Vec2::ZERO,
        );
        // The host skipped the touch-end; a one-finger move arrives directly.
        let response = g.touch_move(&[Point::new(50.0, 0.0)], 2.0, Vec2::ZERO);
        assert_eq!(response.intent, None);
        assert!(g.is_dragging());
    }

    #[test]
    fn three_to_two_finger_drop_restarts_the_pinch_without_a_jump() {
        let mut g = recognizer();
        g.touch_start(
            &[
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(50.0, 80.0),
            ],
            1.0,
            Vec2::ZERO,
        );
        g.touch_end(&[Point::new(0.0, 0.0), Point::new(60.0, 0.0)], 1.0, Vec2::ZERO);
        assert!(g.is_pinching());

        // The next sample measures from the survivors' own distance (60px),
        // not from the original pair's.
        let response = g.touch_move(
            &[Point::new(0.0, 0.0), Point::new(70.0, 0.0)],
            1.0,
            Vec2::ZERO,
        );
        assert_eq!(
            response.intent,
            Some(GestureIntent::ZoomBy {
                delta: 10.0 * 0.005,
                focus: Point::new(35.0, 0.0),
            })
        );
    }

    #[test]
    fn single_touch_consumes_only_while_zoomed_in() {
        let mut g = recognizer();
        assert!(!g.touch_move(&[Point::new(1.0, 1.0)], 1.0, Vec2::ZERO).consume);
        assert!(g.touch_move(&[Point::new(1.0, 1.0)], 1.5, Vec2::ZERO).consume);
    }

    #[test]
    fn cancel_abandons_any_gesture() {
        let mut g = recognizer();
        g.pointer_down(Point::ZERO, 2.0, Vec2::ZERO);
        g.cancel();
        assert_eq!(g.phase(), GesturePhase::Idle);
    }

    #[test]
    fn wheel_delegates_with_the_configured_capability_flag() {
        let precise = GestureRecognizer::new(Sensitivity::default(), true);
        let event = WheelEvent {
            delta: Vec2::new(0.0, -50.0),
            ctrl: true,
            cursor: Point::ZERO,
        };
        assert!(matches!(
            precise.wheel(event, 1.0),
            WheelResponse::Zoom {
                source: WheelSource::PrecisePinch,
                ..
            }
        ));
        assert!(matches!(
            recognizer().wheel(event, 1.0),
            WheelResponse::Zoom {
                source: WheelSource::Wheel,
                ..
            }
        ));
    }
}
