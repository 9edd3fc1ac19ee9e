// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lightbox_gesture --heading-base-level=0

//! Lightbox Gesture: classify raw pointer, touch, and wheel input for an
//! image viewer.
//!
//! This crate turns a continuous stream of host input events into discrete
//! viewer intents: pan to a position, change zoom by a delta about a focus
//! point, or jump through the double-tap zoom cycle. It owns no geometry and
//! no per-image state; callers feed it the current zoom level and pan
//! position where a decision depends on them, and apply the returned
//! [`GestureIntent`] (including bound clamping) at a higher layer.
//!
//! ## Design Philosophy
//!
//! - **Localized input**: every coordinate this crate consumes is already
//!   relative to the viewport center. The host layer does the one
//!   platform-specific subtraction; the classifier stays unit-testable
//!   without a windowing system.
//! - **Illegal states unrepresentable**: the active gesture is a tagged
//!   union, [`GesturePhase`] — `Idle`, `Dragging` with its anchor, or
//!   `Pinching` with its last distance and midpoint. The anchor and pinch
//!   fields cannot exist outside their gesture.
//! - **Defensive ordering**: a move with no preceding start is ignored, and
//!   ending an already-ended gesture is a no-op. On some platforms a
//!   touch-end and a synthetic mouse-up both fire for one physical gesture;
//!   release must be idempotent.
//! - **Injected platform capability**: trackpad-versus-mouse wheel
//!   disambiguation depends only on a `precise_scroll_device` flag decided by
//!   the host, never on platform sniffing in here.
//!
//! ## Wheel disambiguation
//!
//! A wheel event is interpreted as one of three zoom sources, each with its
//! own sensitivity (see [`Sensitivity`]):
//!
//! - ctrl + precise-scroll device → **trackpad pinch**, high sensitivity;
//! - a horizontal component without ctrl → **two-finger trackpad scroll**,
//!   low sensitivity, and only while zoomed in — otherwise the event is
//!   passed through so the page can scroll;
//! - anything else → **discrete mouse wheel**, medium sensitivity.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use lightbox_gesture::{GestureIntent, GestureRecognizer};
//!
//! let mut gestures = GestureRecognizer::new(Default::default(), false);
//!
//! // Press at (40, 10) while zoomed in and panned to (5, 5)...
//! gestures.pointer_down(Point::new(40.0, 10.0), 2.0, Vec2::new(5.0, 5.0));
//! assert!(gestures.is_dragging());
//!
//! // ...then a move reports the desired (unclamped) new position.
//! let intent = gestures.pointer_move(Point::new(50.0, 10.0));
//! assert_eq!(intent, Some(GestureIntent::Pan { position: Vec2::new(15.0, 5.0) }));
//!
//! // Release twice; the second is a harmless no-op.
//! gestures.pointer_up();
//! gestures.pointer_up();
//! assert!(!gestures.is_dragging());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod drag;
mod pinch;
mod recognizer;
mod tap;
mod wheel;

pub use config::Sensitivity;
pub use drag::DragAnchor;
pub use pinch::{PinchTrack, touch_distance, touch_midpoint};
pub use recognizer::{GestureIntent, GesturePhase, GestureRecognizer, TouchResponse};
pub use tap::double_tap;
pub use wheel::{WheelEvent, WheelResponse, WheelSource, classify_wheel};
