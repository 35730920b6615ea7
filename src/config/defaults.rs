// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Panel**: Panel size bounds, drag margins and placement
//! - **Image Zoom**: Zoom factor bounds and step sizes
//! - **Drop Zone**: Upload admission limits

// ==========================================================================
// Panel Defaults
// ==========================================================================

/// Default panel width in logical pixels.
pub const DEFAULT_PANEL_WIDTH: f32 = 420.0;

/// Default panel height in logical pixels.
pub const DEFAULT_PANEL_HEIGHT: f32 = 620.0;

/// Minimum panel width.
pub const MIN_PANEL_WIDTH: f32 = 320.0;

/// Minimum panel height.
pub const MIN_PANEL_HEIGHT: f32 = 240.0;

/// Largest share of the viewport a panel may cover on either axis.
pub const MAX_PANEL_VIEWPORT_FRACTION: f32 = 0.9;

/// Pixels of a panel that must stay on screen while dragging.
pub const DRAG_KEEP_VISIBLE: f32 = 50.0;

/// Gap between a side-anchored panel and the viewport edge.
pub const PANEL_SIDE_MARGIN: f32 = 24.0;

// ==========================================================================
// Image Zoom Defaults
// ==========================================================================

/// Zoom factor used when an image is first shown (1.0 = actual size).
pub const DEFAULT_IMAGE_ZOOM: f32 = 1.0;

/// Minimum image zoom factor.
pub const MIN_IMAGE_ZOOM: f32 = 0.5;

/// Maximum image zoom factor.
pub const MAX_IMAGE_ZOOM: f32 = 5.0;

/// Increment applied by zoom in/out buttons.
pub const IMAGE_ZOOM_STEP: f32 = 0.25;

/// Zoom change per wheel line.
pub const WHEEL_ZOOM_PER_LINE: f32 = 0.1;

/// Zoom factor the double-click toggle jumps to from actual size.
pub const DOUBLE_CLICK_ZOOM: f32 = 2.0;

// ==========================================================================
// Drop Zone Defaults
// ==========================================================================

/// Largest file accepted by the drop zone (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// File extensions accepted by the drop zone (lowercase, without dot).
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg", "gif", "webp"];

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Panel validation
    assert!(MIN_PANEL_WIDTH > 0.0);
    assert!(MIN_PANEL_HEIGHT > 0.0);
    assert!(DEFAULT_PANEL_WIDTH >= MIN_PANEL_WIDTH);
    assert!(DEFAULT_PANEL_HEIGHT >= MIN_PANEL_HEIGHT);
    assert!(MAX_PANEL_VIEWPORT_FRACTION > 0.0);
    assert!(MAX_PANEL_VIEWPORT_FRACTION <= 1.0);
    assert!(DRAG_KEEP_VISIBLE > 0.0);
    assert!(DRAG_KEEP_VISIBLE < MIN_PANEL_WIDTH);

    // Zoom validation
    assert!(MIN_IMAGE_ZOOM > 0.0);
    assert!(MIN_IMAGE_ZOOM < DEFAULT_IMAGE_ZOOM);
    assert!(MAX_IMAGE_ZOOM > DEFAULT_IMAGE_ZOOM);
    assert!(IMAGE_ZOOM_STEP > 0.0);
    assert!(DOUBLE_CLICK_ZOOM > DEFAULT_IMAGE_ZOOM);
    assert!(DOUBLE_CLICK_ZOOM <= MAX_IMAGE_ZOOM);

    // Drop zone validation
    assert!(DEFAULT_MAX_UPLOAD_BYTES > 0);
    assert!(!DEFAULT_ALLOWED_EXTENSIONS.is_empty());
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_defaults_are_valid() {
        assert_eq!(DEFAULT_PANEL_WIDTH, 420.0);
        assert_eq!(DEFAULT_PANEL_HEIGHT, 620.0);
        assert!(DEFAULT_PANEL_WIDTH >= MIN_PANEL_WIDTH);
        assert!(DEFAULT_PANEL_HEIGHT >= MIN_PANEL_HEIGHT);
    }

    #[test]
    fn zoom_defaults_are_valid() {
        assert_eq!(MIN_IMAGE_ZOOM, 0.5);
        assert_eq!(MAX_IMAGE_ZOOM, 5.0);
        assert!(DEFAULT_IMAGE_ZOOM >= MIN_IMAGE_ZOOM);
        assert!(DEFAULT_IMAGE_ZOOM <= MAX_IMAGE_ZOOM);
    }

    #[test]
    fn allowed_extensions_are_lowercase() {
        for ext in DEFAULT_ALLOWED_EXTENSIONS {
            assert_eq!(*ext, ext.to_lowercase());
            assert!(!ext.starts_with('.'));
        }
    }
}
