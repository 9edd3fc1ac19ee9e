// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Quarter-turn image rotation.
///
/// Lightbox only rotates in 90° steps, so rotation is a four-variant enum
/// rather than a free angle. This keeps every reachable rotation exactly
/// representable and makes the `|cos θ|` / `|sin θ|` axis weights exact
/// (`0.0` or `1.0`) instead of accumulating floating-point error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Rotation {
    /// Upright (0°).
    #[default]
    Deg0,
    /// Rotated a quarter turn clockwise (90°).
    Deg90,
    /// Upside down (180°).
    Deg180,
    /// Rotated three quarter turns clockwise (270°).
    Deg270,
}

impl Rotation {
    /// Returns the rotation in degrees: `0`, `90`, `180`, or `270`.
    #[must_use]
    pub fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Advances by a quarter turn, wrapping 270° back to 0°.
    #[must_use]
    pub fn advance(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }

    /// `|cos θ|` for this rotation.
    #[must_use]
    pub fn cos_abs(self) -> f64 {
        match self {
            Self::Deg0 | Self::Deg180 => 1.0,
            Self::Deg90 | Self::Deg270 => 0.0,
        }
    }

    /// `|sin θ|` for this rotation.
    #[must_use]
    pub fn sin_abs(self) -> f64 {
        match self {
            Self::Deg0 | Self::Deg180 => 0.0,
            Self::Deg90 | Self::Deg270 => 1.0,
        }
    }

    /// Returns `true` when the rotation swaps the image's axes (90° or 270°).
    #[must_use]
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }
}

#[cfg(test)]
mod tests {
    use super::Rotation;

    #[test]
    fn advance_cycles_through_all_quarter_turns() {
        let mut r = Rotation::default();
        let mut seen = [r.degrees(); 4];
        for slot in seen.iter_mut().skip(1) {
            r = r.advance();
            *slot = r.degrees();
        }
        assert_eq!(seen, [0, 90, 180, 270]);
        assert_eq!(r.advance(), Rotation::Deg0);
    }

    #[test]
    fn axis_weights_are_exact() {
        assert_eq!(Rotation::Deg0.cos_abs(), 1.0);
        assert_eq!(Rotation::Deg0.sin_abs(), 0.0);
        assert_eq!(Rotation::Deg90.cos_abs(), 0.0);
        assert_eq!(Rotation::Deg90.sin_abs(), 1.0);
        assert_eq!(Rotation::Deg180.cos_abs(), 1.0);
        assert_eq!(Rotation::Deg270.sin_abs(), 1.0);
    }

    #[test]
    fn only_odd_quarter_turns_swap_axes() {
        assert!(!Rotation::Deg0.swaps_axes());
        assert!(Rotation::Deg90.swaps_axes());
        assert!(!Rotation::Deg180.swaps_axes());
        assert!(Rotation::Deg270.swaps_axes());
    }
}
