// SPDX-License-Identifier: MPL-2.0
//! Viewport access
//!
//! Geometry computations read the viewport size at the moment they run.
//! Nothing caches it across calls, so a window resize between two pointer
//! events is always honored on the next event.

use iced_core::Size;

/// Source of the current viewport size, queried synchronously.
pub trait Viewport {
    /// Current viewport size in logical pixels.
    fn size(&self) -> Size;
}

impl Viewport for Size {
    fn size(&self) -> Size {
        *self
    }
}

impl<F> Viewport for F
where
    F: Fn() -> Size,
{
    fn size(&self) -> Size {
        self()
    }
}
