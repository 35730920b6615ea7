// SPDX-License-Identifier: MPL-2.0
//! Panel geometry engine
//!
//! Computes a floating panel's position and size from pointer gestures,
//! the current viewport size and the size limits:
//! - Dragging keeps at least [`DRAG_KEEP_VISIBLE`] pixels of the panel on
//!   screen horizontally and never lets the top edge leave the viewport
//! - Resizing moves one or two edges; when a leading edge (north/west)
//!   moves, the opposite edge stays where it was
//! - A panel without a custom position is `Centered`, resolved against
//!   the viewport each time it is queried
//!
//! The engine performs no I/O. The host subscribes to pointer move/up
//! events only while [`GeometryEngine::captures_pointer`] is true.

use super::drag::DragState;
use super::viewport::Viewport;
use crate::config::{
    LayoutSettingsPatch, LayoutStore, DEFAULT_PANEL_HEIGHT, DEFAULT_PANEL_WIDTH,
    DRAG_KEEP_VISIBLE, MAX_PANEL_VIEWPORT_FRACTION, MIN_PANEL_HEIGHT, MIN_PANEL_WIDTH,
    PANEL_SIDE_MARGIN,
};
use crate::domain::panel::{ModalType, PositionSide};
use iced_core::{mouse, Point, Rectangle, Size, Vector};
use std::fmt;
use std::str::FromStr;

/// Where a panel sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelPosition {
    /// Computed from the viewport and panel size when queried.
    Centered,
    /// Top-left corner set by the user.
    At(Point),
}

/// Position and size of a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    pub position: PanelPosition,
    pub size: Size,
}

/// Edges moved by a resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeDirection {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeDirection {
    /// All directions, clockwise from north.
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::North,
        ResizeDirection::NorthEast,
        ResizeDirection::East,
        ResizeDirection::SouthEast,
        ResizeDirection::South,
        ResizeDirection::SouthWest,
        ResizeDirection::West,
        ResizeDirection::NorthWest,
    ];

    #[must_use]
    pub fn moves_north(self) -> bool {
        matches!(
            self,
            Self::North | Self::NorthEast | Self::NorthWest
        )
    }

    #[must_use]
    pub fn moves_south(self) -> bool {
        matches!(
            self,
            Self::South | Self::SouthEast | Self::SouthWest
        )
    }

    #[must_use]
    pub fn moves_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    #[must_use]
    pub fn moves_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    /// Handle token, as used in cursor names (`n`, `se`, ...).
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }
}

impl fmt::Display for ResizeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Error returned when parsing an unknown resize handle token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown resize direction: {}", self.0)
    }
}

impl std::error::Error for UnknownDirection {}

impl FromStr for ResizeDirection {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.token().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDirection(s.to_string()))
    }
}

/// Which gesture a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Move,
    Resize(ResizeDirection),
}

/// Panel state captured when a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GestureAnchor {
    gesture: Gesture,
    rect: Rectangle,
}

/// Size limits of a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeLimits {
    pub min: Size,
    /// Largest share of the viewport on each axis.
    pub max_fraction: f32,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            min: Size::new(MIN_PANEL_WIDTH, MIN_PANEL_HEIGHT),
            max_fraction: MAX_PANEL_VIEWPORT_FRACTION,
        }
    }
}

impl SizeLimits {
    /// Largest allowed size for the given viewport, never below `min`.
    #[must_use]
    pub fn max_for(&self, viewport: Size) -> Size {
        Size::new(
            (viewport.width * self.max_fraction).max(self.min.width),
            (viewport.height * self.max_fraction).max(self.min.height),
        )
    }

    /// Clamps a size into `[min, max_for(viewport)]`.
    #[must_use]
    pub fn clamp(&self, size: Size, viewport: Size) -> Size {
        let max = self.max_for(viewport);
        Size::new(
            size.width.min(max.width).max(self.min.width),
            size.height.min(max.height).max(self.min.height),
        )
    }
}

/// Clamps without panicking when `lo > hi` (the lower bound wins).
fn clamp_soft(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}

/// Clamps a dragged top-left corner into the allowed band.
///
/// Horizontally the panel may leave the viewport until only
/// [`DRAG_KEEP_VISIBLE`] pixels remain; vertically the top edge stays in
/// `[0, viewport_height - DRAG_KEEP_VISIBLE]`.
#[must_use]
pub fn clamp_drag_position(position: Point, size: Size, viewport: Size) -> Point {
    Point::new(
        clamp_soft(
            position.x,
            DRAG_KEEP_VISIBLE - size.width,
            viewport.width - DRAG_KEEP_VISIBLE,
        ),
        clamp_soft(position.y, 0.0, viewport.height - DRAG_KEEP_VISIBLE),
    )
}

/// Drag/resize state machine for one panel.
#[derive(Debug, Clone)]
pub struct GeometryEngine {
    modal: ModalType,
    geometry: PanelGeometry,
    default_size: Size,
    side: PositionSide,
    limits: SizeLimits,
    maximized: bool,
    session: DragState<GestureAnchor>,
    store: Option<LayoutStore>,
}

impl GeometryEngine {
    /// Creates an engine with built-in defaults and no settings store.
    #[must_use]
    pub fn new(modal: ModalType) -> Self {
        let default_size = Size::new(DEFAULT_PANEL_WIDTH, DEFAULT_PANEL_HEIGHT);
        Self {
            modal,
            geometry: PanelGeometry {
                position: PanelPosition::Centered,
                size: default_size,
            },
            default_size,
            side: PositionSide::default(),
            limits: SizeLimits::default(),
            maximized: false,
            session: DragState::default(),
            store: None,
        }
    }

    /// Creates an engine whose defaults and maximized flag come from the
    /// layout store. Maximize toggles and size commits are written back.
    #[must_use]
    pub fn with_store(modal: ModalType, store: LayoutStore) -> Self {
        let settings = store.settings();
        let default_size = Size::new(settings.default_width, settings.default_height);
        Self {
            geometry: PanelGeometry {
                position: PanelPosition::Centered,
                size: default_size,
            },
            default_size,
            side: settings.position_side,
            maximized: settings.is_maximized(modal),
            store: Some(store),
            ..Self::new(modal)
        }
    }

    /// Overrides the size limits.
    #[must_use]
    pub fn with_limits(mut self, limits: SizeLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Panel kind this engine belongs to.
    #[must_use]
    pub fn modal(&self) -> ModalType {
        self.modal
    }

    /// Stored geometry (`Centered` unresolved).
    #[must_use]
    pub fn geometry(&self) -> PanelGeometry {
        self.geometry
    }

    #[must_use]
    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    /// Whether the user moved or resized the panel away from its defaults.
    #[must_use]
    pub fn is_customized(&self) -> bool {
        self.geometry.position != PanelPosition::Centered || self.geometry.size != self.default_size
    }

    /// Whether a drag or resize session is active. The host listens for
    /// pointer move/up events only while this is true.
    #[must_use]
    pub fn captures_pointer(&self) -> bool {
        self.session.is_dragging()
    }

    /// The active gesture, if any.
    #[must_use]
    pub fn active_gesture(&self) -> Option<Gesture> {
        self.session.anchor().map(|anchor| anchor.value.gesture)
    }

    /// Size after applying the limits for the current viewport.
    #[must_use]
    pub fn effective_size(&self, viewport: &impl Viewport) -> Size {
        let viewport = viewport.size();
        if self.maximized {
            return viewport;
        }
        self.limits.clamp(self.geometry.size, viewport)
    }

    /// Top-left corner with `Centered` resolved against the viewport.
    #[must_use]
    pub fn effective_position(&self, viewport: &impl Viewport) -> Point {
        if self.maximized {
            return Point::ORIGIN;
        }
        match self.geometry.position {
            PanelPosition::At(point) => point,
            PanelPosition::Centered => {
                let viewport = viewport.size();
                let size = self.limits.clamp(self.geometry.size, viewport);
                let x = match self.side {
                    PositionSide::Center => (viewport.width - size.width) / 2.0,
                    PositionSide::Left => PANEL_SIDE_MARGIN,
                    PositionSide::Right => viewport.width - size.width - PANEL_SIDE_MARGIN,
                };
                let y = ((viewport.height - size.height) / 2.0).max(0.0);
                Point::new(x, y)
            }
        }
    }

    /// Rectangle the panel occupies right now.
    #[must_use]
    pub fn effective_rect(&self, viewport: &impl Viewport) -> Rectangle {
        Rectangle::new(
            self.effective_position(viewport),
            self.effective_size(viewport),
        )
    }

    /// Starts moving the panel.
    ///
    /// Rejected unless `button` is the primary button, the panel is not
    /// maximized and no other session is active.
    pub fn start_drag(
        &mut self,
        pointer: Point,
        button: mouse::Button,
        viewport: &impl Viewport,
    ) -> bool {
        if button != mouse::Button::Left {
            return false;
        }
        self.start(pointer, Gesture::Move, viewport)
    }

    /// Starts resizing from the handle at `direction`.
    pub fn start_resize(
        &mut self,
        pointer: Point,
        direction: ResizeDirection,
        viewport: &impl Viewport,
    ) -> bool {
        self.start(pointer, Gesture::Resize(direction), viewport)
    }

    fn start(&mut self, pointer: Point, gesture: Gesture, viewport: &impl Viewport) -> bool {
        if self.maximized || self.session.is_dragging() {
            return false;
        }
        let rect = self.effective_rect(viewport);
        self.session.start(pointer, GestureAnchor { gesture, rect });
        tracing::debug!(modal = %self.modal, ?gesture, ?rect, "panel gesture started");
        true
    }

    /// Applies a pointer move to the active session.
    ///
    /// Returns `false` if no session is active.
    pub fn on_pointer_move(&mut self, pointer: Point, viewport: &impl Viewport) -> bool {
        let Some((anchor, delta)) = self.session.delta(pointer) else {
            return false;
        };
        let viewport = viewport.size();
        let GestureAnchor { gesture, rect } = anchor.value;

        match gesture {
            Gesture::Move => {
                let size = rect.size();
                let position = clamp_drag_position(rect.position() + delta, size, viewport);
                self.geometry = PanelGeometry {
                    position: PanelPosition::At(position),
                    size,
                };
            }
            Gesture::Resize(direction) => {
                self.geometry = self.resized(rect, direction, delta, viewport);
            }
        }
        tracing::trace!(modal = %self.modal, geometry = ?self.geometry, "panel geometry updated");
        true
    }

    fn resized(
        &self,
        rect: Rectangle,
        direction: ResizeDirection,
        delta: Vector,
        viewport: Size,
    ) -> PanelGeometry {
        let min = self.limits.min;
        let max = self.limits.max_for(viewport);
        let (mut x, mut y, mut width, mut height) = (rect.x, rect.y, rect.width, rect.height);

        if direction.moves_east() {
            width = clamp_soft(rect.width + delta.x, min.width, max.width);
        }
        if direction.moves_west() {
            width = clamp_soft(rect.width - delta.x, min.width, max.width);
            x = rect.x + (rect.width - width);
        }
        if direction.moves_south() {
            height = clamp_soft(rect.height + delta.y, min.height, max.height);
        }
        if direction.moves_north() {
            // The top edge may not pass above the viewport.
            let max_height = max.height.min(rect.y + rect.height);
            height = clamp_soft(rect.height - delta.y, min.height, max_height);
            y = rect.y + (rect.height - height);
        }

        PanelGeometry {
            position: PanelPosition::At(Point::new(x, y)),
            size: Size::new(width, height),
        }
    }

    /// Ends the active session. Extra release events are no-ops.
    pub fn on_pointer_up(&mut self) -> bool {
        let ended = self.session.stop();
        if ended {
            tracing::debug!(modal = %self.modal, geometry = ?self.geometry, "panel gesture ended");
        }
        ended
    }

    /// Discards user customization: back to `Centered` with the default size,
    /// un-maximized. A cleared maximize flag is persisted like a toggle.
    pub fn reset(&mut self) {
        self.session.stop();
        self.geometry = PanelGeometry {
            position: PanelPosition::Centered,
            size: self.default_size,
        };
        if std::mem::take(&mut self.maximized) {
            if let Some(store) = &self.store {
                store.update(LayoutSettingsPatch::maximized(self.modal, false));
            }
        }
        tracing::debug!(modal = %self.modal, "panel geometry reset");
    }

    /// Flips the maximized flag and persists it for this panel kind.
    pub fn toggle_maximized(&mut self) -> bool {
        self.session.stop();
        self.maximized = !self.maximized;
        if let Some(store) = &self.store {
            store.update(LayoutSettingsPatch::maximized(self.modal, self.maximized));
        }
        self.maximized
    }

    /// Makes the current size the default for new panels.
    pub fn commit_size_as_default(&mut self) {
        let size = self.geometry.size;
        self.default_size = size;
        if let Some(store) = &self.store {
            store.update(LayoutSettingsPatch::size(size.width, size.height));
        }
    }
}
