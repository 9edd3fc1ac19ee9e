// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::Rotation;

/// Fraction of the container the fitted image may occupy.
const FIT_FRACTION: f64 = 0.9;

/// Symmetric pan limits for an image position, centered on the viewport.
///
/// Positions are offsets of the image center from the viewport center, so the
/// representable range is always `[-max, max]` on each axis. A zero range on
/// an axis means the content fits inside the container on that axis and the
/// position is forced back to the origin there.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PanBounds {
    max_x: f64,
    max_y: f64,
}

impl PanBounds {
    /// Bounds permitting no panning at all.
    pub const ZERO: Self = Self {
        max_x: 0.0,
        max_y: 0.0,
    };

    /// Creates symmetric bounds from per-axis maxima.
    ///
    /// Negative or non-finite maxima are treated as zero, so degenerate
    /// geometry can never produce an inverted range.
    #[must_use]
    pub fn symmetric(max_x: f64, max_y: f64) -> Self {
        let sanitize = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            max_x: sanitize(max_x),
            max_y: sanitize(max_y),
        }
    }

    /// Smallest allowed X offset (`-max_x`).
    #[must_use]
    pub fn min_x(&self) -> f64 {
        -self.max_x
    }

    /// Largest allowed X offset.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Smallest allowed Y offset (`-max_y`).
    #[must_use]
    pub fn min_y(&self) -> f64 {
        -self.max_y
    }

    /// Largest allowed Y offset.
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Returns `true` when no panning is possible on either axis.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.max_x == 0.0 && self.max_y == 0.0
    }

    /// Component-wise clamp of a position offset into the bounds.
    #[must_use]
    pub fn clamp(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            position.x.clamp(-self.max_x, self.max_x),
            position.y.clamp(-self.max_y, self.max_y),
        )
    }

    /// Returns `true` when the position offset lies inside the bounds.
    #[must_use]
    pub fn contains(&self, position: Vec2) -> bool {
        position.x >= -self.max_x
            && position.x <= self.max_x
            && position.y >= -self.max_y
            && position.y <= self.max_y
    }
}

/// Fits `natural` into 90% of `container`, preserving aspect ratio.
///
/// The image is never upscaled past its natural size: a small image in a
/// large container keeps its own dimensions. Degenerate input (any zero or
/// negative dimension) yields [`Size::ZERO`].
#[must_use]
pub fn display_size(natural: Size, container: Size) -> Size {
    if natural.width <= 0.0
        || natural.height <= 0.0
        || container.width <= 0.0
        || container.height <= 0.0
    {
        return Size::ZERO;
    }

    let aspect = natural.width / natural.height;
    if container.width / container.height > aspect {
        // Container is wider than the image: height is the limiting axis.
        let height = (container.height * FIT_FRACTION).min(natural.height);
        Size::new(height * aspect, height)
    } else {
        let width = (container.width * FIT_FRACTION).min(natural.width);
        Size::new(width, width / aspect)
    }
}

/// Axis-aligned bounding box of `display` after rotating by `rotation`.
///
/// Uses the standard rotated-rectangle extents `w·|cos θ| + h·|sin θ|`, which
/// for quarter turns reduces to an exact width/height swap at 90° and 270°.
#[must_use]
pub fn rotated_size(display: Size, rotation: Rotation) -> Size {
    let cos = rotation.cos_abs();
    let sin = rotation.sin_abs();
    Size::new(
        display.width * cos + display.height * sin,
        display.width * sin + display.height * cos,
    )
}

/// Computes the symmetric pan bounds for an image in a container.
///
/// The pipeline is: fit `natural` into the container ([`display_size`]),
/// rotate the fitted extent ([`rotated_size`]), scale it by `zoom`, and take
/// half of the overflow beyond the container on each axis. Content smaller
/// than the container on an axis produces a zero range there.
///
/// Degenerate input — zero-size container (a layout that has not happened
/// yet), unknown image size, or a non-positive zoom — yields
/// [`PanBounds::ZERO`] so callers degrade to a no-op instead of panicking.
#[must_use]
pub fn pan_bounds(natural: Size, container: Size, zoom: f64, rotation: Rotation) -> PanBounds {
    if zoom <= 0.0 {
        return PanBounds::ZERO;
    }
    let display = display_size(natural, container);
    if display == Size::ZERO {
        return PanBounds::ZERO;
    }

    let rotated = rotated_size(display, rotation);
    let scaled = Size::new(rotated.width * zoom, rotated.height * zoom);

    PanBounds::symmetric(
        ((scaled.width - container.width) / 2.0).max(0.0),
        ((scaled.height - container.height) / 2.0).max(0.0),
    )
}
