// SPDX-License-Identifier: MPL-2.0
//! Attachment preview: controller, resource cache and download action.

mod cache;
mod controller;
mod download;

pub use cache::{
    fetch_preview, FetchCompleted, LoadOutcome, LoadTicket, PreviewCache, PreviewResource,
};
pub use controller::{
    AttachmentPreviewController, Effect, ImageMessage, Message, PanelLayout, PanelMessage,
    PdfMessage, PreviewPhase, PreviewSurface,
};
pub use download::download_attachment;
