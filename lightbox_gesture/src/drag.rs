// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag anchor helper: derive a desired pan position from pointer motion.
//!
//! The anchor captures `pointer − position` at press time, so every later
//! pointer sample maps directly to a desired position without integrating
//! velocities: a drag is purely additive on top of the pre-drag position,
//! and a missed intermediate move event loses nothing.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use lightbox_gesture::DragAnchor;
//!
//! // Press at (40, 10) while the image is panned to (5, 5).
//! let anchor = DragAnchor::at(Point::new(40.0, 10.0), Vec2::new(5.0, 5.0));
//!
//! // Moving the pointer 10px right asks for a position 10px right.
//! let pos = anchor.position_for(Point::new(50.0, 10.0));
//! assert_eq!(pos, Vec2::new(15.0, 5.0));
//! ```

use kurbo::{Point, Vec2};

/// Press-time anchor for a drag-pan gesture.
///
/// Stored inside [`GesturePhase::Dragging`](crate::GesturePhase); it cannot
/// outlive the drag it belongs to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAnchor {
    /// `pointer − position` captured when the drag began.
    offset: Vec2,
}

impl DragAnchor {
    /// Anchors a drag beginning at `pointer` with the image panned to
    /// `position`.
    #[must_use]
    pub fn at(pointer: Point, position: Vec2) -> Self {
        Self {
            offset: pointer.to_vec2() - position,
        }
    }

    /// Desired (unclamped) pan position for the current pointer sample.
    #[must_use]
    pub fn position_for(&self, pointer: Point) -> Vec2 {
        pointer.to_vec2() - self.offset
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::DragAnchor;

    #[test]
    fn no_motion_keeps_the_pre_drag_position() {
        let press = Point::new(100.0, 80.0);
        let position = Vec2::new(-12.0, 30.0);
        let anchor = DragAnchor::at(press, position);
        assert_eq!(anchor.position_for(press), position);
    }

    #[test]
    fn motion_is_additive_on_the_pre_drag_position() {
        let anchor = DragAnchor::at(Point::new(0.0, 0.0), Vec2::new(10.0, 20.0));
        assert_eq!(
            anchor.position_for(Point::new(5.0, -7.0)),
            Vec2::new(15.0, 13.0)
        );
    }

    #[test]
    fn skipped_move_events_lose_nothing() {
        // The desired position depends only on the latest sample, not the
        // path taken to it.
        let anchor = DragAnchor::at(Point::new(50.0, 50.0), Vec2::ZERO);
        let direct = anchor.position_for(Point::new(90.0, 10.0));

        let mut stepped = Vec2::ZERO;
        for p in [Point::new(60.0, 40.0), Point::new(75.0, 25.0), Point::new(90.0, 10.0)] {
            stepped = anchor.position_for(p);
        }
        assert_eq!(direct, stepped);
    }
}
