// SPDX-License-Identifier: MPL-2.0
//! Attachment preview controller.
//!
//! Orchestrates one panel kind's preview pane over an externally supplied
//! attachment list:
//! - Selection within the list, kept valid as the list changes
//! - Open/close/minimize visibility and the global exclusive pin
//! - Preview loads through the [`PreviewCache`], one live resource at a time
//! - Image zoom/pan and PDF paging for the displayed resource
//! - Floating-panel geometry while not docked
//!
//! ## Phases
//!
//! `Pinned` is not stored: it is `Open` plus holding the pin slot in the
//! shared [`PinRegister`](crate::config::PinRegister). When another panel
//! kind takes the pin, this controller simply reads as `Open` again.
//!
//! ## Async work
//!
//! The controller never awaits. Loads and downloads come back as
//! [`Effect::Fetch`] and [`Effect::Download`]; the host runs them with
//! [`fetch_preview`](super::fetch_preview) and
//! [`download_attachment`](super::download_attachment) and feeds fetch
//! completions back through [`Message::FetchCompleted`].

use super::cache::{FetchCompleted, LoadOutcome, LoadTicket, PreviewCache, PreviewResource};
use crate::application::port::{FetchError, FetchedAttachment, ObjectUri, ObjectUriFactory};
use crate::config::LayoutStore;
use crate::domain::attachment::{Attachment, PreviewKind};
use crate::domain::panel::ModalType;
use crate::domain::ui::ZoomFactor;
use crate::ui::state::{
    AttachmentSelection, GeometryEngine, ImageViewState, ListChange, PdfPager, ResizeDirection,
    Viewport,
};
use iced_core::{mouse, Point, Rectangle, Vector};
use std::sync::Arc;

/// Visibility of the preview pane, independent of the pin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Visibility {
    #[default]
    Closed,
    Open,
    Minimized,
}

/// Observable phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewPhase {
    Closed,
    Open,
    Minimized,
    /// Open and docked; this panel kind holds the global pin.
    Pinned,
}

/// How the host should lay out the preview pane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelLayout {
    Hidden,
    /// Collapsed to its title bar.
    Minimized,
    /// Free-floating at this rectangle.
    Floating(Rectangle),
    /// Docked alongside the owning panel.
    Docked,
}

/// What the preview pane should render.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewSurface {
    /// Nothing selected.
    Empty,
    /// First load for the selection is in flight.
    Loading { file_name: String },
    /// The last load failed.
    Failed { file_name: String, error: FetchError },
    Image {
        uri: ObjectUri,
        zoom: ZoomFactor,
        pan: Vector,
    },
    Pdf {
        uri: ObjectUri,
        page: u32,
        page_count: Option<u32>,
    },
    /// No inline renderer; offer the download action instead.
    Unsupported {
        file_name: String,
        mime_type: String,
    },
}

// ═══════════════════════════════════════════════════════════════════════════
// MESSAGES
// ═══════════════════════════════════════════════════════════════════════════

/// Floating-panel gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelMessage {
    DragStarted {
        position: Point,
        button: mouse::Button,
    },
    ResizeStarted {
        position: Point,
        direction: ResizeDirection,
    },
    PointerMoved(Point),
    PointerReleased,
    ResetGeometry,
    ToggleMaximized,
    RememberSize,
}

/// Image viewport input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageMessage {
    ZoomIn,
    ZoomOut,
    /// Wheel scroll in lines; positive zooms in.
    Wheel(f32),
    DoubleClicked,
    PanStarted(Point),
    PanMoved(Point),
    PanEnded,
}

/// PDF paging input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfMessage {
    NextPage,
    PreviousPage,
    GoToPage(u32),
    /// Reported by the renderer once the document is parsed.
    PageCountLoaded(u32),
}

/// Messages handled by [`AttachmentPreviewController::handle`].
#[derive(Debug, Clone)]
pub enum Message {
    // ═══════════════════════════════════════════════════════════════════════
    // VISIBILITY
    // ═══════════════════════════════════════════════════════════════════════
    Open(usize),
    Close,
    ToggleMinimized,
    TogglePinned,

    // ═══════════════════════════════════════════════════════════════════════
    // SELECTION
    // ═══════════════════════════════════════════════════════════════════════
    Navigate(usize),
    Next,
    Previous,
    /// The host's attachment list changed.
    AttachmentsChanged(Vec<Attachment>),

    // ═══════════════════════════════════════════════════════════════════════
    // RESOURCES
    // ═══════════════════════════════════════════════════════════════════════
    FetchCompleted(FetchCompleted),
    Download,
    /// Entity switch or unmount.
    Reset,

    // ═══════════════════════════════════════════════════════════════════════
    // SUBCOMPONENTS
    // ═══════════════════════════════════════════════════════════════════════
    Panel(PanelMessage),
    Image(ImageMessage),
    Pdf(PdfMessage),
}

/// Effects the host must carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Run [`fetch_preview`](super::fetch_preview) for this ticket and send
    /// the result back as [`Message::FetchCompleted`].
    Fetch(LoadTicket),
    /// Run [`download_attachment`](super::download_attachment).
    Download(Attachment),
    /// A new preview resource is displayed.
    PreviewReady,
    /// The selected attachment could not be loaded.
    PreviewFailed(FetchError),
    /// The pane closed on its own (list emptied).
    Closed,
    /// Pointer capture started or ended; subscribe to pointer move/up
    /// only while `captures` is true.
    PointerCapture { captures: bool },
}

// ═══════════════════════════════════════════════════════════════════════════
// CONTROLLER
// ═══════════════════════════════════════════════════════════════════════════

/// Preview pane state machine for one panel kind.
#[derive(Debug)]
pub struct AttachmentPreviewController {
    modal: ModalType,
    attachments: Vec<Attachment>,
    selection: AttachmentSelection,
    visibility: Visibility,
    layout: LayoutStore,
    cache: PreviewCache,
    image: ImageViewState,
    pdf: PdfPager,
    geometry: GeometryEngine,
}

impl AttachmentPreviewController {
    /// Creates a closed controller with an empty attachment list.
    #[must_use]
    pub fn new(modal: ModalType, layout: LayoutStore, uris: Arc<dyn ObjectUriFactory>) -> Self {
        Self {
            modal,
            attachments: Vec::new(),
            selection: AttachmentSelection::default(),
            visibility: Visibility::Closed,
            geometry: GeometryEngine::with_store(modal, layout.clone()),
            layout,
            cache: PreviewCache::new(uris),
            image: ImageViewState::default(),
            pdf: PdfPager::default(),
        }
    }

    /// Handle a controller message.
    ///
    /// `viewport` is read only by panel gestures.
    pub fn handle(&mut self, msg: Message, viewport: &impl Viewport) -> Effect {
        match msg {
            Message::Open(index) => self.open_preview(index),
            Message::Close => {
                self.close_preview();
                Effect::None
            }
            Message::ToggleMinimized => {
                self.toggle_minimized();
                Effect::None
            }
            Message::TogglePinned => self.toggle_pinned(),
            Message::Navigate(index) => self.navigate(index),
            Message::Next => self.next(),
            Message::Previous => self.previous(),
            Message::AttachmentsChanged(attachments) => self.set_attachments(attachments),
            Message::FetchCompleted(completed) => {
                self.on_fetch_completed(completed.ticket, completed.result)
            }
            Message::Download => self
                .selected()
                .cloned()
                .map_or(Effect::None, Effect::Download),
            Message::Reset => {
                self.reset();
                Effect::None
            }
            Message::Panel(msg) => self.handle_panel(msg, viewport),
            Message::Image(msg) => self.handle_image(msg),
            Message::Pdf(msg) => {
                self.handle_pdf(msg);
                Effect::None
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // QUERIES
    // ═══════════════════════════════════════════════════════════════════════

    /// Panel kind this controller serves.
    #[must_use]
    pub fn modal(&self) -> ModalType {
        self.modal
    }

    #[must_use]
    pub fn phase(&self) -> PreviewPhase {
        match self.visibility {
            Visibility::Closed => PreviewPhase::Closed,
            _ if self.is_pinned() => PreviewPhase::Pinned,
            Visibility::Open => PreviewPhase::Open,
            Visibility::Minimized => PreviewPhase::Minimized,
        }
    }

    /// Whether this panel kind currently holds the global pin.
    #[must_use]
    pub fn is_pinned(&self) -> bool {
        self.layout.pins().is_pinned(self.modal)
    }

    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.index()
    }

    /// The selected attachment, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Attachment> {
        self.selection
            .index()
            .and_then(|index| self.attachments.get(index))
    }

    /// One-based "i/n" label of the selection.
    #[must_use]
    pub fn position_label(&self) -> Option<String> {
        self.selection.position_label(self.attachments.len())
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.selection
            .index()
            .is_some_and(|index| index + 1 < self.attachments.len())
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.selection.index().is_some_and(|index| index > 0)
    }

    /// Whether a preview load is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.cache.is_loading()
    }

    /// The live preview resource.
    #[must_use]
    pub fn resource(&self) -> Option<&PreviewResource> {
        self.cache.current()
    }

    #[must_use]
    pub fn image(&self) -> &ImageViewState {
        &self.image
    }

    #[must_use]
    pub fn pdf(&self) -> &PdfPager {
        &self.pdf
    }

    #[must_use]
    pub fn geometry(&self) -> &GeometryEngine {
        &self.geometry
    }

    /// Whether the host must forward pointer move/up events.
    #[must_use]
    pub fn captures_pointer(&self) -> bool {
        self.geometry.captures_pointer() || self.image.is_panning()
    }

    /// Where and how the pane is laid out.
    #[must_use]
    pub fn layout(&self, viewport: &impl Viewport) -> PanelLayout {
        match self.phase() {
            PreviewPhase::Closed => PanelLayout::Hidden,
            PreviewPhase::Minimized => PanelLayout::Minimized,
            PreviewPhase::Pinned => PanelLayout::Docked,
            PreviewPhase::Open => PanelLayout::Floating(self.geometry.effective_rect(viewport)),
        }
    }

    /// What the pane shows.
    ///
    /// While a new selection loads, the previous resource stays on screen.
    #[must_use]
    pub fn surface(&self) -> PreviewSurface {
        let Some(attachment) = self.selected() else {
            return PreviewSurface::Empty;
        };
        if let Some(error) = self.cache.last_error() {
            return PreviewSurface::Failed {
                file_name: attachment.file_name.clone(),
                error: error.clone(),
            };
        }
        let Some(resource) = self.cache.current() else {
            return PreviewSurface::Loading {
                file_name: attachment.file_name.clone(),
            };
        };

        let kind = if resource.source_id == attachment.id {
            PreviewKind::detect(
                Some(resource.mime_type.as_str()),
                Some(attachment.file_name.as_str()),
            )
        } else {
            resource.kind
        };
        match kind {
            PreviewKind::Image => PreviewSurface::Image {
                uri: resource.uri.clone(),
                zoom: self.image.zoom(),
                pan: self.image.pan(),
            },
            PreviewKind::Pdf => PreviewSurface::Pdf {
                uri: resource.uri.clone(),
                page: self.pdf.page(),
                page_count: self.pdf.page_count(),
            },
            PreviewKind::Unsupported => PreviewSurface::Unsupported {
                file_name: attachment.file_name.clone(),
                mime_type: resource.mime_type.clone(),
            },
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // VISIBILITY
    // ═══════════════════════════════════════════════════════════════════════

    /// Opens the pane at `index` (clamped). Ignored for an empty list.
    pub fn open_preview(&mut self, index: usize) -> Effect {
        if self.selection.select(index, self.attachments.len()).is_none() {
            tracing::debug!(modal = %self.modal, "open ignored: no attachments");
            return Effect::None;
        }
        self.visibility = Visibility::Open;
        self.load_selected()
    }

    /// Closes the pane, giving up the pin and the preview resource.
    pub fn close_preview(&mut self) {
        if self.visibility == Visibility::Closed {
            return;
        }
        self.visibility = Visibility::Closed;
        self.layout.pins().release(self.modal);
        self.end_gestures();
        self.cache.release();
        tracing::debug!(modal = %self.modal, "preview closed");
    }

    /// Flips between open and minimized. Ignored while closed or docked.
    pub fn toggle_minimized(&mut self) {
        if self.is_pinned() {
            return;
        }
        self.visibility = match self.visibility {
            Visibility::Open => {
                self.end_gestures();
                Visibility::Minimized
            }
            Visibility::Minimized => Visibility::Open,
            Visibility::Closed => Visibility::Closed,
        };
    }

    /// Docks the pane, superseding whichever panel kind held the pin, or
    /// undocks it back to a floating pane.
    ///
    /// With no attachments there is nothing to dock: the request is dropped
    /// and the pin stays with its current holder. Hosts should disable the
    /// pin control while the list is empty.
    pub fn toggle_pinned(&mut self) -> Effect {
        let pins = self.layout.pins();
        if self.visibility != Visibility::Closed && pins.is_pinned(self.modal) {
            pins.release(self.modal);
            tracing::debug!(modal = %self.modal, "preview unpinned");
            return Effect::None;
        }
        if self.attachments.is_empty() {
            return Effect::None;
        }

        pins.acquire(self.modal);
        self.end_gestures();
        self.visibility = Visibility::Open;
        if self.selection.is_empty() {
            self.selection.select(0, self.attachments.len());
        }
        self.load_selected()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // SELECTION
    // ═══════════════════════════════════════════════════════════════════════

    /// Selects `index` (clamped) and loads it. Ignored while closed.
    pub fn navigate(&mut self, index: usize) -> Effect {
        if self.visibility == Visibility::Closed {
            return Effect::None;
        }
        self.selection.select(index, self.attachments.len());
        self.load_selected()
    }

    pub fn next(&mut self) -> Effect {
        if self.visibility == Visibility::Closed {
            return Effect::None;
        }
        self.selection.next(self.attachments.len());
        self.load_selected()
    }

    pub fn previous(&mut self) -> Effect {
        if self.visibility == Visibility::Closed {
            return Effect::None;
        }
        self.selection.previous(self.attachments.len());
        self.load_selected()
    }

    /// Replaces the attachment list and keeps the selection valid.
    pub fn set_attachments(&mut self, attachments: Vec<Attachment>) -> Effect {
        self.attachments = attachments;
        match self.selection.on_list_len(self.attachments.len()) {
            ListChange::Cleared => {
                let was_open = self.visibility != Visibility::Closed;
                self.close_preview();
                self.cache.release();
                if was_open {
                    tracing::debug!(modal = %self.modal, "attachment list emptied; preview closed");
                    Effect::Closed
                } else {
                    Effect::None
                }
            }
            ListChange::Clamped(_) | ListChange::Unchanged => {
                if self.visibility == Visibility::Closed {
                    Effect::None
                } else {
                    // The entry at the index may be a different attachment now.
                    self.load_selected()
                }
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // RESOURCES
    // ═══════════════════════════════════════════════════════════════════════

    fn load_selected(&mut self) -> Effect {
        let Some(id) = self.selected().map(|attachment| attachment.id.clone()) else {
            return Effect::None;
        };
        if self.cache.covers(&id) {
            return Effect::None;
        }
        Effect::Fetch(self.cache.begin(id))
    }

    /// Applies a finished preview download.
    pub fn on_fetch_completed(
        &mut self,
        ticket: LoadTicket,
        result: Result<FetchedAttachment, FetchError>,
    ) -> Effect {
        match self.cache.finish(ticket, result) {
            LoadOutcome::Installed(resource) => {
                self.image.set_source(Some(resource.uri.as_str()));
                self.pdf.reset();
                Effect::PreviewReady
            }
            LoadOutcome::Stale => Effect::None,
            LoadOutcome::Failed(err) => {
                self.image.set_source(None);
                self.pdf.reset();
                Effect::PreviewFailed(err)
            }
        }
    }

    /// Closes, clears the selection and releases the resource and the pin.
    pub fn reset(&mut self) {
        self.visibility = Visibility::Closed;
        self.selection.clear();
        self.end_gestures();
        self.cache.release();
        self.layout.pins().release(self.modal);
        self.image.set_source(None);
        self.pdf.reset();
        tracing::debug!(modal = %self.modal, "preview controller reset");
    }

    // ═══════════════════════════════════════════════════════════════════════
    // SUBCOMPONENTS
    // ═══════════════════════════════════════════════════════════════════════

    fn handle_panel(&mut self, msg: PanelMessage, viewport: &impl Viewport) -> Effect {
        let floating = self.phase() == PreviewPhase::Open;
        match msg {
            PanelMessage::DragStarted { position, button } => {
                let started = floating && self.geometry.start_drag(position, button, viewport);
                capture_effect(started, true)
            }
            PanelMessage::ResizeStarted {
                position,
                direction,
            } => {
                let started =
                    floating && self.geometry.start_resize(position, direction, viewport);
                capture_effect(started, true)
            }
            PanelMessage::PointerMoved(position) => {
                if !self.geometry.on_pointer_move(position, viewport) {
                    self.image.update_pan(position);
                }
                Effect::None
            }
            PanelMessage::PointerReleased => {
                let ended = self.geometry.on_pointer_up() | self.image.end_pan();
                capture_effect(ended, false)
            }
            PanelMessage::ResetGeometry => {
                self.geometry.reset();
                Effect::None
            }
            PanelMessage::ToggleMaximized => {
                self.geometry.toggle_maximized();
                Effect::None
            }
            PanelMessage::RememberSize => {
                self.geometry.commit_size_as_default();
                Effect::None
            }
        }
    }

    fn handle_image(&mut self, msg: ImageMessage) -> Effect {
        match msg {
            ImageMessage::PanStarted(position) => {
                return capture_effect(self.image.start_pan(position), true);
            }
            ImageMessage::PanEnded => return capture_effect(self.image.end_pan(), false),
            ImageMessage::PanMoved(position) => {
                self.image.update_pan(position);
            }
            ImageMessage::ZoomIn => self.image.zoom_in(),
            ImageMessage::ZoomOut => self.image.zoom_out(),
            ImageMessage::Wheel(lines) => self.image.zoom_by(lines),
            ImageMessage::DoubleClicked => self.image.toggle_fit_or_actual(),
        }
        Effect::None
    }

    fn handle_pdf(&mut self, msg: PdfMessage) {
        match msg {
            PdfMessage::NextPage => {
                self.pdf.next_page();
            }
            PdfMessage::PreviousPage => {
                self.pdf.previous_page();
            }
            PdfMessage::GoToPage(page) => {
                self.pdf.go_to(page);
            }
            PdfMessage::PageCountLoaded(count) => self.pdf.set_page_count(count),
        }
    }

    fn end_gestures(&mut self) {
        self.geometry.on_pointer_up();
        self.image.end_pan();
    }
}

fn capture_effect(changed: bool, captures: bool) -> Effect {
    if changed {
        Effect::PointerCapture { captures }
    } else {
        Effect::None
    }
}

impl Drop for AttachmentPreviewController {
    fn drop(&mut self) {
        // The cache revokes its own URI on drop.
        self.layout.pins().release(self.modal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryObjectUris;
    use iced_core::Size;

    const VIEWPORT: Size = Size {
        width: 1200.0,
        height: 800.0,
    };

    struct Fixture {
        uris: Arc<MemoryObjectUris>,
        layout: LayoutStore,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                uris: Arc::new(MemoryObjectUris::new()),
                layout: LayoutStore::in_memory(),
            }
        }

        fn controller(&self, modal: ModalType) -> AttachmentPreviewController {
            AttachmentPreviewController::new(modal, self.layout.clone(), self.uris.clone())
        }
    }

    fn abc() -> Vec<Attachment> {
        vec![
            Attachment::new("a", "a.png").with_mime_type("image/png"),
            Attachment::new("b", "b.pdf").with_mime_type("application/pdf"),
            Attachment::new("c", "c.png").with_mime_type("image/png"),
        ]
    }

    fn ticket(effect: Effect) -> LoadTicket {
        match effect {
            Effect::Fetch(ticket) => ticket,
            other => panic!("expected Fetch, got {other:?}"),
        }
    }

    fn bytes_for(ticket: &LoadTicket) -> Result<FetchedAttachment, FetchError> {
        let mime = if ticket.source_id().as_str() == "b" {
            "application/pdf"
        } else {
            "image/png"
        };
        Ok(FetchedAttachment::new(
            ticket.source_id().as_str().as_bytes().to_vec(),
            mime,
        ))
    }

    fn complete(controller: &mut AttachmentPreviewController, effect: Effect) -> Effect {
        let ticket = ticket(effect);
        let result = bytes_for(&ticket);
        controller.handle(
            Message::FetchCompleted(FetchCompleted { ticket, result }),
            &VIEWPORT,
        )
    }

    fn opened(fixture: &Fixture, index: usize) -> AttachmentPreviewController {
        let mut controller = fixture.controller(ModalType::Verification);
        controller.set_attachments(abc());
        let effect = controller.open_preview(index);
        assert_eq!(complete(&mut controller, effect), Effect::PreviewReady);
        controller
    }

    #[test]
    fn open_selects_and_loads() {
        let fixture = Fixture::new();
        let controller = opened(&fixture, 0);
        assert_eq!(controller.phase(), PreviewPhase::Open);
        assert_eq!(controller.position_label().as_deref(), Some("1/3"));
        assert!(matches!(controller.surface(), PreviewSurface::Image { .. }));
        assert_eq!(fixture.uris.live_count(), 1);
    }

    #[test]
    fn open_clamps_index() {
        let fixture = Fixture::new();
        let controller = opened(&fixture, 99);
        assert_eq!(controller.selected_index(), Some(2));
    }

    #[test]
    fn open_with_empty_list_is_ignored() {
        let fixture = Fixture::new();
        let mut controller = fixture.controller(ModalType::Verification);
        assert_eq!(controller.open_preview(0), Effect::None);
        assert_eq!(controller.phase(), PreviewPhase::Closed);
    }

    #[test]
    fn navigate_to_last_shows_label() {
        let fixture = Fixture::new();
        let mut controller = opened(&fixture, 0);
        let effect = controller.handle(Message::Navigate(2), &VIEWPORT);
        complete(&mut controller, effect);
        assert_eq!(controller.position_label().as_deref(), Some("3/3"));
        assert!(!controller.has_next());
        assert_eq!(controller.next(), Effect::None);
        assert_eq!(fixture.uris.live_count(), 1);
    }

    #[test]
    fn navigate_to_same_attachment_does_not_refetch() {
        let fixture = Fixture::new();
        let mut controller = opened(&fixture, 1);
        assert_eq!(controller.navigate(1), Effect::None);
    }

    #[test]
    fn navigate_while_closed_is_ignored() {
        let fixture = Fixture::new();
        let mut controller = fixture.controller(ModalType::Verification);
        controller.set_attachments(abc());
        assert_eq!(controller.navigate(1), Effect::None);
        assert_eq!(controller.selected_index(), None);
    }

    #[test]
    fn late_response_never_replaces_newer_preview() {
        let fixture = Fixture::new();
        let mut controller = opened(&fixture, 0);

        let to_b = ticket(controller.navigate(1));
        let to_c = ticket(controller.navigate(2));

        let c = bytes_for(&to_c);
        controller.on_fetch_completed(to_c, c);
        let b = bytes_for(&to_b);
        assert_eq!(controller.on_fetch_completed(to_b, b), Effect::None);

        let resource = controller.resource().expect("resource installed");
        assert_eq!(resource.source_id.as_str(), "c");
        assert_eq!(fixture.uris.live_count(), 1);
        assert!(!fixture.uris.has_double_revoke());
    }

    #[test]
    fn previous_preview_stays_visible_while_loading() {
        let fixture = Fixture::new();
        let mut controller = opened(&fixture, 0);
        let _pending = controller.navigate(2);
        assert!(controller.is_loading());
        assert!(matches!(controller.surface(), PreviewSurface::Image { .. }));
    }

    #[test]
    fn failure_surfaces_error_and_retry_refetches() {
        let fixture = Fixture::new();
        let mut controller = fixture.controller(ModalType::Verification);
        controller.set_attachments(abc());
        let t = ticket(controller.open_preview(0));
        let effect = controller.on_fetch_completed(t, Err(FetchError::NotFound));
        assert_eq!(effect, Effect::PreviewFailed(FetchError::NotFound));
        assert!(matches!(controller.surface(), PreviewSurface::Failed { .. }));
        assert_eq!(fixture.uris.live_count(), 0);

        assert!(matches!(controller.navigate(0), Effect::Fetch(_)));
    }

    #[test]
    fn pdf_surface_reports_pages() {
        let fixture = Fixture::new();
        let mut controller = opened(&fixture, 1);
        controller.handle(Message::Pdf(PdfMessage::PageCountLoaded(3)), &VIEWPORT);
        controller.handle(Message::Pdf(PdfMessage::NextPage), &VIEWPORT);
        match controller.surface() {
            PreviewSurface::Pdf {
                page, page_count, ..
            } => {
                assert_eq!(page, 2);
                assert_eq!(page_count, Some(3));
            }
            other => panic!("expected Pdf, got {other:?}"),
        }
    }

    #[test]
    fn new_image_resets_zoom() {
        let fixture = Fixture::new();
        let mut controller = opened(&fixture, 0);
        controller.handle(Message::Image(ImageMessage::DoubleClicked), &VIEWPORT);
        assert!(controller.image().zoom().is_magnified());

        let effect = controller.navigate(2);
        complete(&mut controller, effect);
        assert!(controller.image().zoom().is_actual());
    }

    #[test]
    fn minimize_keeps_resource() {
        let fixture = Fixture::new();
        let mut controller = opened(&fixture, 0);
        controller.handle(Message::ToggleMinimized, &VIEWPORT);
        assert_eq!(controller.phase(), PreviewPhase::Minimized);
        assert_eq!(controller.layout(&VIEWPORT), PanelLayout::Minimized);
        assert_eq!(fixture.uris.live_count(), 1);

        controller.handle(Message::ToggleMinimized, &VIEWPORT);
        assert_eq!(controller.phase(), PreviewPhase::Open);
    }

    #[test]
    fn close_releases_resource() {
        let fixture = Fixture::new();
        let mut controller = opened(&fixture, 0);
        controller.handle(Message::Close, &VIEWPORT);
        assert_eq!(controller.phase(), PreviewPhase::Closed);
        assert_eq!(controller.layout(&VIEWPORT), PanelLayout::Hidden);
        assert_eq!(fixture.uris.live_count(), 0);
    }

    #[test]
    fn pin_from_closed_selects_first_and_docks() {
        let fixture = Fixture::new();
        let mut controller = fixture.controller(ModalType::SupplierInvoice);
        controller.set_attachments(abc());

        let effect = controller.handle(Message::TogglePinned, &VIEWPORT);
        assert!(matches!(effect, Effect::Fetch(_)));
        assert_eq!(controller.phase(), PreviewPhase::Pinned);
        assert_eq!(controller.selected_index(), Some(0));
        assert_eq!(controller.layout(&VIEWPORT), PanelLayout::Docked);
    }

    #[test]
    fn pinning_with_empty_list_is_ignored() {
        let fixture = Fixture::new();
        let mut controller = fixture.controller(ModalType::SupplierInvoice);
        assert_eq!(controller.toggle_pinned(), Effect::None);
        assert_eq!(fixture.layout.pins().holder(), None);
    }

    #[test]
    fn pinning_with_empty_list_leaves_other_holder() {
        let fixture = Fixture::new();
        let mut holder = opened(&fixture, 0);
        holder.toggle_pinned();

        let mut empty = fixture.controller(ModalType::SupplierInvoice);
        assert_eq!(empty.toggle_pinned(), Effect::None);
        assert_eq!(empty.phase(), PreviewPhase::Closed);
        assert_eq!(holder.phase(), PreviewPhase::Pinned);
        assert_eq!(fixture.layout.pins().holder(), Some(ModalType::Verification));
    }

    #[test]
    fn pin_is_exclusive_across_panel_kinds() {
        let fixture = Fixture::new();
        let mut first = opened(&fixture, 0);
        let mut second = fixture.controller(ModalType::CustomerInvoice);
        second.set_attachments(abc());

        first.toggle_pinned();
        assert_eq!(first.phase(), PreviewPhase::Pinned);

        second.toggle_pinned();
        assert_eq!(second.phase(), PreviewPhase::Pinned);
        assert_eq!(first.phase(), PreviewPhase::Open);
        assert_eq!(
            fixture.layout.pins().holder(),
            Some(ModalType::CustomerInvoice)
        );
    }

    #[test]
    fn unpin_returns_to_floating() {
        let fixture = Fixture::new();
        let mut controller = opened(&fixture, 0);
        controller.toggle_pinned();
        controller.toggle_pinned();
        assert_eq!(controller.phase(), PreviewPhase::Open);
        assert!(matches!(
            controller.layout(&VIEWPORT),
            PanelLayout::Floating(_)
        ));
    }

    #[test]
    fn minimize_is_ignored_while_pinned() {
        let fixture = Fixture::new();
        let mut controller = opened(&fixture, 0);
        controller.toggle_pinned();
        controller.toggle_minimized();
        assert_eq!(controller.phase(), PreviewPhase::Pinned);
    }

    #[test]
    fn closing_releases_own_pin_only() {
        let fixture = Fixture::new();
        let mut first = opened(&fixture, 0);
        first.toggle_pinned();
        first.close_preview();
        assert_eq!(fixture.layout.pins().holder(), None);

        let mut third = fixture.controller(ModalType::AttachmentInbox);
        third.set_attachments(abc());
        third.toggle_pinned();
        first.reset();
        assert_eq!(
            fixture.layout.pins().holder(),
            Some(ModalType::AttachmentInbox)
        );
    }

    #[test]
    fn list_emptied_while_open_closes() {
        let fixture = Fixture::new();
        let mut controller = opened(&fixture, 1);
        controller.toggle_pinned();

        let effect = controller.handle(Message::AttachmentsChanged(Vec::new()), &VIEWPORT);
        assert_eq!(effect, Effect::Closed);
        assert_eq!(controller.phase(), PreviewPhase::Closed);
        assert_eq!(controller.selected_index(), None);
        assert_eq!(fixture.layout.pins().holder(), None);
        assert_eq!(fixture.uris.live_count(), 0);
    }

    #[test]
    fn list_shrink_clamps_and_reloads() {
        let fixture = Fixture::new();
        let mut controller = opened(&fixture, 2);
        let effect = controller.set_attachments(abc().into_iter().take(2).collect());
        assert_eq!(controller.selected_index(), Some(1));
        assert_eq!(controller.phase(), PreviewPhase::Open);
        assert_eq!(ticket(effect).source_id().as_str(), "b");
    }

    #[test]
    fn list_change_keeping_selection_does_not_reload() {
        let fixture = Fixture::new();
        let mut controller = opened(&fixture, 0);
        let mut grown = abc();
        grown.push(Attachment::new("d", "d.png"));
        assert_eq!(controller.set_attachments(grown), Effect::None);
    }

    #[test]
    fn reset_releases_everything() {
        let fixture = Fixture::new();
        let mut controller = opened(&fixture, 0);
        controller.toggle_pinned();
        controller.handle(Message::Reset, &VIEWPORT);

        assert_eq!(controller.phase(), PreviewPhase::Closed);
        assert_eq!(controller.selected_index(), None);
        assert_eq!(fixture.uris.live_count(), 0);
        assert_eq!(fixture.layout.pins().holder(), None);
        assert_eq!(controller.surface(), PreviewSurface::Empty);
    }

    #[test]
    fn drop_releases_pin_and_uri() {
        let fixture = Fixture::new();
        let mut controller = opened(&fixture, 0);
        controller.toggle_pinned();
        drop(controller);
        assert_eq!(fixture.layout.pins().holder(), None);
        assert_eq!(fixture.uris.live_count(), 0);
    }

    #[test]
    fn download_uses_selected_attachment() {
        let fixture = Fixture::new();
        let mut controller = opened(&fixture, 1);
        match controller.handle(Message::Download, &VIEWPORT) {
            Effect::Download(attachment) => assert_eq!(attachment.id.as_str(), "b"),
            other => panic!("expected Download, got {other:?}"),
        }
    }

    #[test]
    fn panel_drag_captures_pointer_while_floating() {
        let fixture = Fixture::new();
        let mut controller = opened(&fixture, 0);
        let effect = controller.handle(
            Message::Panel(PanelMessage::DragStarted {
                position: Point::new(600.0, 100.0),
                button: mouse::Button::Left,
            }),
            &VIEWPORT,
        );
        assert_eq!(effect, Effect::PointerCapture { captures: true });
        assert!(controller.captures_pointer());

        controller.handle(
            Message::Panel(PanelMessage::PointerMoved(Point::new(-2000.0, 100.0))),
            &VIEWPORT,
        );
        let effect = controller.handle(Message::Panel(PanelMessage::PointerReleased), &VIEWPORT);
        assert_eq!(effect, Effect::PointerCapture { captures: false });
        assert!(!controller.captures_pointer());

        let PanelLayout::Floating(rect) = controller.layout(&VIEWPORT) else {
            panic!("expected floating layout");
        };
        assert_eq!(rect.x, 50.0 - rect.width);
    }

    #[test]
    fn image_pan_requests_and_releases_capture() {
        let fixture = Fixture::new();
        let mut controller = opened(&fixture, 0);
        let pan_start = Message::Image(ImageMessage::PanStarted(Point::new(10.0, 10.0)));

        // Fit-to-panel images have nothing to pan.
        assert_eq!(controller.handle(pan_start.clone(), &VIEWPORT), Effect::None);
        assert!(!controller.captures_pointer());

        controller.handle(Message::Image(ImageMessage::DoubleClicked), &VIEWPORT);
        assert_eq!(
            controller.handle(pan_start, &VIEWPORT),
            Effect::PointerCapture { captures: true }
        );
        assert!(controller.captures_pointer());

        let pan_end = Message::Image(ImageMessage::PanEnded);
        assert_eq!(
            controller.handle(pan_end.clone(), &VIEWPORT),
            Effect::PointerCapture { captures: false }
        );
        assert!(!controller.captures_pointer());
        assert_eq!(controller.handle(pan_end, &VIEWPORT), Effect::None);
    }

    #[test]
    fn panel_gestures_ignored_while_docked() {
        let fixture = Fixture::new();
        let mut controller = opened(&fixture, 0);
        controller.toggle_pinned();
        let effect = controller.handle(
            Message::Panel(PanelMessage::DragStarted {
                position: Point::ORIGIN,
                button: mouse::Button::Left,
            }),
            &VIEWPORT,
        );
        assert_eq!(effect, Effect::None);
        assert!(!controller.captures_pointer());
    }
}
