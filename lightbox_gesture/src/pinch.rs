// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch tracking: distance deltas and midpoints for two-finger zoom.

use kurbo::Point;

/// Euclidean distance between the first two touch points.
///
/// Returns `None` for fewer than two touches.
#[must_use]
pub fn touch_distance(touches: &[Point]) -> Option<f64> {
    match touches {
        [a, b, ..] => Some(a.distance(*b)),
        _ => None,
    }
}

/// Midpoint of the first two touch points.
///
/// Returns `None` for fewer than two touches.
#[must_use]
pub fn touch_midpoint(touches: &[Point]) -> Option<Point> {
    match touches {
        [a, b, ..] => Some(a.midpoint(*b)),
        _ => None,
    }
}

/// Running state of an active two-finger pinch.
///
/// Stored inside [`GesturePhase::Pinching`](crate::GesturePhase). Each move
/// yields the change in finger distance since the previous sample and the
/// current midpoint; the caller scales the distance delta into a zoom delta
/// and uses the midpoint as the zoom focus.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchTrack {
    last_distance: f64,
    last_midpoint: Point,
}

impl PinchTrack {
    /// Begins tracking from the first two touches.
    ///
    /// Returns `None` for fewer than two touches.
    #[must_use]
    pub fn begin(touches: &[Point]) -> Option<Self> {
        Some(Self {
            last_distance: touch_distance(touches)?,
            last_midpoint: touch_midpoint(touches)?,
        })
    }

    /// Advances to the next touch sample.
    ///
    /// Returns the distance change since the previous sample and the current
    /// midpoint, or `None` for fewer than two touches (the pinch is then
    /// over; see the recognizer's finger-drop handling).
    pub fn advance(&mut self, touches: &[Point]) -> Option<(f64, Point)> {
        let distance = touch_distance(touches)?;
        let midpoint = touch_midpoint(touches)?;
        let delta = distance - self.last_distance;
        self.last_distance = distance;
        self.last_midpoint = midpoint;
        Some((delta, midpoint))
    }

    /// The midpoint of the most recent sample.
    #[must_use]
    pub fn last_midpoint(&self) -> Point {
        self.last_midpoint
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{PinchTrack, touch_distance, touch_midpoint};

    #[test]
    fn distance_and_midpoint_need_two_touches() {
        assert_eq!(touch_distance(&[]), None);
        assert_eq!(touch_distance(&[Point::new(1.0, 1.0)]), None);
        assert_eq!(touch_midpoint(&[Point::new(1.0, 1.0)]), None);
    }

    #[test]
    fn distance_is_euclidean() {
        let touches = [Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
        assert_eq!(touch_distance(&touches), Some(5.0));
        assert_eq!(touch_midpoint(&touches), Some(Point::new(1.5, 2.0)));
    }

    #[test]
    fn extra_touches_are_ignored() {
        let touches = [
            Point::new(0.0, 0.0),
            Point::new(6.0, 8.0),
            Point::new(100.0, 100.0),
        ];
        assert_eq!(touch_distance(&touches), Some(10.0));
    }

    #[test]
    fn advance_reports_spread_and_squeeze() {
        let mut track =
            PinchTrack::begin(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)]).unwrap();

        // Fingers spread apart by 10px.
        let (delta, midpoint) = track
            .advance(&[Point::new(-5.0, 0.0), Point::new(15.0, 0.0)])
            .unwrap();
        assert_eq!(delta, 10.0);
        assert_eq!(midpoint, Point::new(5.0, 0.0));

        // Fingers squeeze back together by 15px.
        let (delta, _) = track
            .advance(&[Point::new(0.0, 0.0), Point::new(5.0, 0.0)])
            .unwrap();
        assert_eq!(delta, -15.0);
        assert_eq!(track.last_midpoint(), Point::new(2.5, 0.0));
    }

    #[test]
    fn advance_ends_when_a_finger_lifts() {
        let mut track =
            PinchTrack::begin(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)]).unwrap();
        assert_eq!(track.advance(&[Point::new(3.0, 3.0)]), None);
    }
}
