// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lightbox_session --heading-base-level=0

//! Lightbox Session: the headless engine of an image viewer.
//!
//! A [`ViewportSession`] owns everything the interactive part of a photo
//! viewer needs to remember: one transform record per image (zoom, pan,
//! quarter-turn rotation), the active image index, the in-flight navigation
//! transition, and the gesture state machine. It consumes localized input
//! events and collaborator geometry, and produces per-image transforms and
//! control affordances for the rendering layer to paint. It performs no
//! rendering, no DOM work, and no I/O of its own.
//!
//! ## Time and events
//!
//! The session never spawns timers. Navigation uses caller-supplied
//! milliseconds: a request starts a transition with a deadline, and the host
//! calls [`ViewportSession::poll`] from its frame loop to complete it. The
//! completed change comes back as a [`SessionEvent`] return value instead of
//! a callback.
//!
//! ## Geometry
//!
//! The host reports the viewport container size and each image's natural
//! size as they become known. Until both are known for the active image, the
//! zoom and rotation operations degrade to no-ops: the engine stays inert
//! rather than dividing by a zero container.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use lightbox_session::{SessionConfig, ViewportSession};
//!
//! let mut session = ViewportSession::new(3, 0, SessionConfig::default());
//! session.set_container_size(Size::new(800.0, 600.0));
//! session.set_natural_size(0, Size::new(4000.0, 3000.0));
//!
//! // Zoom toward a point right of center; the transform reflects it.
//! session.zoom_to(2.0, Point::new(120.0, 0.0));
//! let t = session.active_transform();
//! assert_eq!(t.scale, 2.0);
//!
//! // Navigate with caller-supplied time; the index swaps when polled
//! // after the transition delay.
//! assert!(session.next(1_000));
//! assert!(session.poll(1_000).is_none());
//! let event = session.poll(1_200);
//! assert!(event.is_some());
//! assert_eq!(session.active_index(), 1);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod navigation;
mod session;

pub use config::SessionConfig;
pub use navigation::Navigator;
pub use session::{ControlState, SessionEvent, Transform, ViewportSession};
