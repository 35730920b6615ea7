// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Pure, synchronous state machines driven by pointer and keyboard input.
//! None of them performs I/O; the preview controller composes them.

pub mod drag;
pub mod geometry;
pub mod image_view;
pub mod pdf;
pub mod selection;
pub mod viewport;

// Re-export commonly used types for convenience
pub use drag::DragState;
pub use geometry::{
    GeometryEngine, Gesture, PanelGeometry, PanelPosition, ResizeDirection, SizeLimits,
};
pub use image_view::ImageViewState;
pub use pdf::PdfPager;
pub use selection::{AttachmentSelection, ListChange};
pub use viewport::Viewport;
