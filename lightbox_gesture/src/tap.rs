// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap / double-click zoom cycling.

use kurbo::{Point, Vec2};

use crate::GestureIntent;

/// Advances the three-step double-tap zoom cycle.
///
/// Keyed off the current zoom level:
///
/// - below `1.5`: jump to `2.0`, shifting the image half-way toward the tap
///   point;
/// - in `[1.5, 3.0)`: jump to `4.0`, shifting three-quarters of the way;
/// - at `3.0` or above: reset to `1.0`, centered.
///
/// `cursor` is the tap position relative to the viewport center. The
/// returned intent carries a forced position (the offsets above) rather than
/// a zoom focus, reproducing the stepped zoom-toward-the-tap feel.
#[must_use]
pub fn double_tap(zoom_level: f64, cursor: Point) -> GestureIntent {
    let (level, position) = if zoom_level < 1.5 {
        (2.0, cursor.to_vec2() * -0.5)
    } else if zoom_level < 3.0 {
        (4.0, cursor.to_vec2() * -0.75)
    } else {
        (1.0, Vec2::ZERO)
    };
    GestureIntent::ZoomTo { level, position }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::double_tap;
    use crate::GestureIntent;

    fn level_of(intent: GestureIntent) -> f64 {
        match intent {
            GestureIntent::ZoomTo { level, .. } => level,
            other => panic!("expected ZoomTo, got {other:?}"),
        }
    }

    #[test]
    fn cycle_is_deterministic_from_native_scale() {
        let tap = Point::new(30.0, -20.0);
        let mut zoom = 1.0;
        let mut levels = [0.0; 3];
        for slot in &mut levels {
            zoom = level_of(double_tap(zoom, tap));
            *slot = zoom;
        }
        assert_eq!(levels, [2.0, 4.0, 1.0]);
    }

    #[test]
    fn first_step_offsets_half_way_toward_the_tap() {
        let intent = double_tap(1.0, Point::new(100.0, 60.0));
        assert_eq!(
            intent,
            GestureIntent::ZoomTo {
                level: 2.0,
                position: Vec2::new(-50.0, -30.0),
            }
        );
    }

    #[test]
    fn second_step_offsets_three_quarters_toward_the_tap() {
        let intent = double_tap(2.0, Point::new(100.0, 60.0));
        assert_eq!(
            intent,
            GestureIntent::ZoomTo {
                level: 4.0,
                position: Vec2::new(-75.0, -45.0),
            }
        );
    }

    #[test]
    fn reset_step_recenters_regardless_of_tap_point() {
        let intent = double_tap(4.5, Point::new(100.0, 60.0));
        assert_eq!(
            intent,
            GestureIntent::ZoomTo {
                level: 1.0,
                position: Vec2::ZERO,
            }
        );
    }

    #[test]
    fn boundaries_fall_on_the_documented_sides() {
        // 1.5 is already in the second band; 3.0 is already the reset band.
        assert_eq!(level_of(double_tap(1.5, Point::ZERO)), 4.0);
        assert_eq!(level_of(double_tap(3.0, Point::ZERO)), 1.0);
        assert_eq!(level_of(double_tap(1.499, Point::ZERO)), 2.0);
        assert_eq!(level_of(double_tap(2.999, Point::ZERO)), 4.0);
    }
}
