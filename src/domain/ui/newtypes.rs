// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Zoom Bounds
// =============================================================================

/// Image zoom factor bounds (0.5× to 5×).
pub mod zoom_bounds {
    pub use crate::config::defaults::{
        DEFAULT_IMAGE_ZOOM as DEFAULT, IMAGE_ZOOM_STEP as STEP, MAX_IMAGE_ZOOM as MAX,
        MIN_IMAGE_ZOOM as MIN,
    };
}

// =============================================================================
// ZoomFactor
// =============================================================================

/// Image zoom factor, guaranteed to be within valid range (0.5–5.0).
///
/// This type ensures that zoom values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Actual size (1.0).
    pub const ACTUAL: Self = Self(zoom_bounds::DEFAULT);

    /// Creates a new zoom factor, clamping the value to the valid range.
    ///
    /// `NaN` maps to actual size.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_nan() {
            return Self::ACTUAL;
        }
        Self(factor.clamp(zoom_bounds::MIN, zoom_bounds::MAX))
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the zoom as a percentage (e.g., 1.0 → 100).
    #[must_use]
    pub fn as_percent(self) -> f32 {
        self.0 * 100.0
    }

    /// Returns whether the image is shown larger than actual size.
    ///
    /// Panning is only meaningful in that case.
    #[must_use]
    pub fn is_magnified(self) -> bool {
        self.0 > zoom_bounds::DEFAULT
    }

    /// Returns whether the factor is actual size (within float tolerance).
    #[must_use]
    pub fn is_actual(self) -> bool {
        (self.0 - zoom_bounds::DEFAULT).abs() < 1e-4
    }

    /// Returns whether the zoom is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= zoom_bounds::MIN
    }

    /// Returns whether the zoom is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= zoom_bounds::MAX
    }

    /// Adds `delta` and clamps.
    #[must_use]
    pub fn offset_by(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self::ACTUAL
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_factor_clamps() {
        assert!((ZoomFactor::new(0.1).value() - zoom_bounds::MIN).abs() < f32::EPSILON);
        assert!((ZoomFactor::new(12.0).value() - zoom_bounds::MAX).abs() < f32::EPSILON);
        assert!((ZoomFactor::new(1.5).value() - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn zoom_factor_nan_is_actual_size() {
        assert!(ZoomFactor::new(f32::NAN).is_actual());
    }

    #[test]
    fn zoom_factor_default() {
        assert!(ZoomFactor::default().is_actual());
        assert!(!ZoomFactor::default().is_magnified());
    }

    #[test]
    fn zoom_factor_percent() {
        assert!((ZoomFactor::new(2.0).as_percent() - 200.0).abs() < f32::EPSILON);
    }

    #[test]
    fn zoom_factor_min_max() {
        assert!(ZoomFactor::new(zoom_bounds::MIN).is_min());
        assert!(ZoomFactor::new(zoom_bounds::MAX).is_max());
        assert!(!ZoomFactor::ACTUAL.is_min());
        assert!(!ZoomFactor::ACTUAL.is_max());
    }

    #[test]
    fn zoom_factor_offset() {
        let zoom = ZoomFactor::ACTUAL;
        assert!((zoom.offset_by(zoom_bounds::STEP).value() - 1.25).abs() < f32::EPSILON);
        assert!((zoom.offset_by(-10.0).value() - zoom_bounds::MIN).abs() < f32::EPSILON);
    }
}
