//! Normalized crop geometry and the pixel-space frame it is edited on.

use serde::{Deserialize, Serialize};

/// Pointer location in the on-screen frame's pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FramePoint {
    pub x: f64,
    pub y: f64,
}

impl FramePoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The interactive frame (video preview) in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FrameRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Zero, negative or non-finite extents cannot be divided by.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    pub fn limits(&self, handle_size: f64) -> CropLimits {
        CropLimits::for_frame(*self, handle_size)
    }
}

/// Minimum crop size in normalized units for one frame size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CropLimits {
    pub min_width: f64,
    pub min_height: f64,
}

impl CropLimits {
    pub const NONE: Self = Self::new(0.0, 0.0);

    pub const fn new(min_width: f64, min_height: f64) -> Self {
        Self {
            min_width,
            min_height,
        }
    }

    /// Two handle widths, expressed as a fraction of the frame extent.
    pub fn for_frame(frame: FrameRect, handle_size: f64) -> Self {
        if frame.is_degenerate() || !handle_size.is_finite() || handle_size <= 0.0 {
            return Self::NONE;
        }
        let min_pixels = handle_size * 2.0;
        Self::new(
            (min_pixels / frame.width).min(1.0),
            (min_pixels / frame.height).min(1.0),
        )
    }
}

/// Crop rectangle inside the unit square mapped onto the video frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for CropRect {
    fn default() -> Self {
        Self::FULL
    }
}

impl CropRect {
    pub const FULL: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn is_full(&self) -> bool {
        *self == Self::FULL
    }

    /// Nearest rectangle that satisfies the bounds and minimum-size invariants.
    pub fn clamp(self, limits: CropLimits) -> Self {
        let (x, width) = clamp_axis(self.x, self.width, limits.min_width);
        let (y, height) = clamp_axis(self.y, self.height, limits.min_height);
        Self::new(x, y, width, height)
    }

    pub fn clamp_to_frame(self, frame: FrameRect, handle_size: f64) -> Self {
        self.clamp(frame.limits(handle_size))
    }

    /// Bounds and minimum size hold, with `tolerance` of slack for rounding.
    pub fn satisfies(&self, limits: CropLimits, tolerance: f64) -> bool {
        self.x >= -tolerance
            && self.y >= -tolerance
            && self.right() <= 1.0 + tolerance
            && self.bottom() <= 1.0 + tolerance
            && self.width >= limits.min_width - tolerance
            && self.height >= limits.min_height - tolerance
    }
}

fn clamp_axis(origin: f64, size: f64, min_size: f64) -> (f64, f64) {
    let origin = if origin.is_finite() { origin } else { 0.0 };
    let size = if size.is_finite() { size } else { 1.0 };
    let min_size = min_size.clamp(0.0, 1.0);

    let mut size = size.clamp(0.0, 1.0);
    let mut origin = origin.clamp(0.0, 1.0 - size);

    if size < min_size {
        let leading_gap = origin;
        let trailing_gap = 1.0 - (origin + size);
        if leading_gap > trailing_gap {
            origin = origin + size - min_size;
        }
        size = min_size;
        origin = origin.clamp(0.0, 1.0 - size);
    }

    (origin, size)
}

/// `value` limited to `[lower, upper]`; `upper` wins when the range is empty.
pub(crate) fn bounded(value: f64, lower: f64, upper: f64) -> f64 {
    value.max(lower).min(upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: CropLimits = CropLimits::new(0.1, 0.1);

    #[test]
    fn limits_scale_with_frame_size() {
        let limits = CropLimits::for_frame(FrameRect::sized(400.0, 200.0), 10.0);
        assert_eq!(limits, CropLimits::new(0.05, 0.1));

        let tiny = CropLimits::for_frame(FrameRect::sized(10.0, 10.0), 10.0);
        assert_eq!(tiny, CropLimits::new(1.0, 1.0));
    }

    #[test]
    fn limits_are_zero_for_degenerate_frames() {
        assert_eq!(
            CropLimits::for_frame(FrameRect::sized(0.0, 100.0), 10.0),
            CropLimits::NONE
        );
        assert_eq!(
            CropLimits::for_frame(FrameRect::sized(100.0, f64::NAN), 10.0),
            CropLimits::NONE
        );
    }

    #[test]
    fn clamp_keeps_valid_rect_unchanged() {
        let rect = CropRect::new(0.2, 0.3, 0.4, 0.5);
        assert_eq!(rect.clamp(LIMITS), rect);
    }

    #[test]
    fn clamp_shrinks_oversized_rect_then_pulls_it_inside() {
        let rect = CropRect::new(0.5, -0.2, 1.5, 0.4);
        assert_eq!(rect.clamp(LIMITS), CropRect::new(0.0, 0.0, 1.0, 0.4));
    }

    #[test]
    fn clamp_grows_undersized_rect_away_from_nearer_boundary() {
        let near_left = CropRect::new(0.1, 0.5, 0.02, 0.3).clamp(LIMITS);
        assert_eq!(near_left.x, 0.1);
        assert_eq!(near_left.width, 0.1);

        let near_right = CropRect::new(0.88, 0.5, 0.02, 0.3).clamp(LIMITS);
        assert!((near_right.right() - 0.9).abs() < 1e-12);
        assert_eq!(near_right.width, 0.1);
    }

    #[test]
    fn clamp_handles_negative_and_non_finite_components() {
        let rect = CropRect::new(f64::NAN, 0.95, -0.3, f64::INFINITY).clamp(LIMITS);
        assert!(rect.satisfies(LIMITS, 0.0));
        assert_eq!(rect.width, 0.1);
        assert_eq!(rect.height, 1.0);
        assert_eq!(rect.y, 0.0);
    }

    #[test]
    fn clamp_is_idempotent_on_edge_cases() {
        let cases = [
            CropRect::new(0.95, 0.95, 0.01, 0.01),
            CropRect::new(-1.0, 2.0, 3.0, -3.0),
            CropRect::new(0.0, 0.0, 0.0, 0.0),
            CropRect::new(0.45, 0.45, 0.05, 0.05),
        ];
        for rect in cases {
            let once = rect.clamp(LIMITS);
            assert_eq!(once.clamp(LIMITS), once, "not idempotent for {rect:?}");
        }
    }

    #[test]
    fn bounded_prefers_upper_for_empty_range() {
        assert_eq!(bounded(0.5, 0.0, 1.0), 0.5);
        assert_eq!(bounded(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(bounded(0.5, 0.8, 0.2), 0.2);
    }
}
