// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks one pointer gesture from press to release: where the pointer was
//! when the gesture started and the value being dragged at that moment.
//! Panel moves, panel resizes and image panning all derive their new value
//! from the anchor plus the cumulative pointer delta, so repeated move
//! events with the same pointer position always yield the same result.

use iced_core::{Point, Vector};

/// Snapshot taken when a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor<T> {
    /// Pointer position at gesture start.
    pub pointer: Point,
    /// Dragged value at gesture start.
    pub value: T,
}

/// Manages grab-and-drag state
#[derive(Debug, Clone, PartialEq)]
pub struct DragState<T> {
    anchor: Option<Anchor<T>>,
}

impl<T> Default for DragState<T> {
    fn default() -> Self {
        Self { anchor: None }
    }
}

impl<T: Copy> DragState<T> {
    /// Starts a drag operation, replacing any previous anchor.
    pub fn start(&mut self, pointer: Point, value: T) {
        self.anchor = Some(Anchor { pointer, value });
    }

    /// Stops the drag operation.
    ///
    /// Returns `false` if no drag was active, so duplicate release events
    /// are harmless.
    pub fn stop(&mut self) -> bool {
        self.anchor.take().is_some()
    }

    /// Whether a drag operation is currently active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Anchor of the active drag.
    #[must_use]
    pub fn anchor(&self) -> Option<Anchor<T>> {
        self.anchor
    }

    /// Cumulative pointer movement since the drag started.
    #[must_use]
    pub fn delta(&self, current: Point) -> Option<(Anchor<T>, Vector)> {
        let anchor = self.anchor?;
        Some((anchor, current - anchor.pointer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::<Point>::default();
        assert!(!state.is_dragging());
        assert!(state.anchor().is_none());
    }

    #[test]
    fn start_drag_sets_state() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 50.0), Vector::new(20.0, 10.0));

        assert!(state.is_dragging());
        assert_eq!(
            state.anchor(),
            Some(Anchor {
                pointer: Point::new(100.0, 50.0),
                value: Vector::new(20.0, 10.0),
            })
        );
    }

    #[test]
    fn stop_drag_clears_state_once() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 50.0), Vector::new(20.0, 10.0));

        assert!(state.stop());
        assert!(!state.is_dragging());
        assert!(!state.stop());
    }

    #[test]
    fn delta_returns_none_when_not_dragging() {
        let state = DragState::<Vector>::default();
        assert!(state.delta(Point::new(100.0, 50.0)).is_none());
    }

    #[test]
    fn delta_is_cumulative_from_anchor() {
        let mut state = DragState::default();
        state.start(Point::new(200.0, 150.0), 0_u8);

        let (_, delta) = state.delta(Point::new(180.0, 130.0)).expect("dragging");
        assert_eq!(delta, Vector::new(-20.0, -20.0));

        // Same pointer position, same answer.
        let (_, again) = state.delta(Point::new(180.0, 130.0)).expect("dragging");
        assert_eq!(again, delta);
    }
}
