// SPDX-License-Identifier: MPL-2.0
//! Image zoom/pan state management
//!
//! This module handles the zoom and pan of a single image shown in a
//! preview panel:
//! - Button zoom in fixed steps, wheel zoom proportional to line delta
//! - Double-click toggles between actual size and 2×
//! - Grab-and-drag panning, only while magnified
//!
//! Whenever the zoom ends at or below actual size the pan offset is
//! forced back to zero. Switching to another image resets everything.

use super::drag::DragState;
use crate::config::{DOUBLE_CLICK_ZOOM, IMAGE_ZOOM_STEP, WHEEL_ZOOM_PER_LINE};
use crate::domain::ui::ZoomFactor;
use iced_core::{Point, Vector};

/// Manages zoom and pan for the displayed image
#[derive(Debug, Clone, PartialEq)]
pub struct ImageViewState {
    zoom: ZoomFactor,
    pan: Vector,
    drag: DragState<Vector>,
    /// Identity of the image the state belongs to.
    source: Option<String>,
}

impl Default for ImageViewState {
    fn default() -> Self {
        Self {
            zoom: ZoomFactor::ACTUAL,
            pan: Vector::ZERO,
            drag: DragState::default(),
            source: None,
        }
    }
}

impl ImageViewState {
    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> ZoomFactor {
        self.zoom
    }

    /// Current pan offset.
    #[must_use]
    pub fn pan(&self) -> Vector {
        self.pan
    }

    /// Whether a pan drag is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Whether the image can be grabbed (cursor hint for the host).
    #[must_use]
    pub fn can_pan(&self) -> bool {
        self.zoom.is_magnified()
    }

    /// Identity of the image this state belongs to.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn apply_zoom(&mut self, zoom: ZoomFactor) {
        self.zoom = zoom;
        if !zoom.is_magnified() {
            self.pan = Vector::ZERO;
            self.drag.stop();
        }
    }

    /// Applies zoom in by one step
    pub fn zoom_in(&mut self) {
        self.apply_zoom(self.zoom.offset_by(IMAGE_ZOOM_STEP));
    }

    /// Applies zoom out by one step
    pub fn zoom_out(&mut self) {
        self.apply_zoom(self.zoom.offset_by(-IMAGE_ZOOM_STEP));
    }

    /// Wheel zoom; positive `lines` zoom in.
    pub fn zoom_by(&mut self, lines: f32) {
        if !lines.is_finite() {
            return;
        }
        self.apply_zoom(self.zoom.offset_by(lines * WHEEL_ZOOM_PER_LINE));
    }

    /// Double-click: actual size goes to 2×, anything else back to actual
    /// size with the pan cleared.
    pub fn toggle_fit_or_actual(&mut self) {
        if self.zoom.is_actual() {
            self.apply_zoom(ZoomFactor::new(DOUBLE_CLICK_ZOOM));
        } else {
            self.apply_zoom(ZoomFactor::ACTUAL);
            self.pan = Vector::ZERO;
        }
    }

    /// Starts panning. Rejected unless the image is magnified.
    pub fn start_pan(&mut self, pointer: Point) -> bool {
        if !self.zoom.is_magnified() {
            return false;
        }
        self.drag.start(pointer, self.pan);
        true
    }

    /// Moves the pan offset with the pointer.
    pub fn update_pan(&mut self, pointer: Point) -> bool {
        let Some((anchor, delta)) = self.drag.delta(pointer) else {
            return false;
        };
        self.pan = anchor.value + delta;
        true
    }

    /// Ends panning. Extra release events are no-ops.
    pub fn end_pan(&mut self) -> bool {
        self.drag.stop()
    }

    /// Binds the state to an image. A different source resets zoom and pan.
    pub fn set_source(&mut self, source: Option<&str>) {
        if self.source.as_deref() != source {
            self.reset();
            self.source = source.map(str::to_string);
        }
    }

    /// Back to actual size, no pan.
    pub fn reset(&mut self) {
        self.zoom = ZoomFactor::ACTUAL;
        self.pan = Vector::ZERO;
        self.drag.stop();
    }
}
