// SPDX-License-Identifier: MPL-2.0
//! Panel state and the attachment preview subsystem.
//!
//! Everything here follows the Elm-style "state down, messages up" pattern,
//! without rendering: the host draws from the query methods and forwards
//! input as messages.
//!
//! - [`state`] - Reusable state machines (panel geometry, drag, image zoom/pan, selection, PDF paging)
//! - [`preview`] - Attachment preview controller, resource cache and download action
//! - [`drop_zone`] - Drag-and-drop admission filter for uploads

pub mod drop_zone;
pub mod preview;
pub mod state;

pub use drop_zone::{Admission, DropOutcome, DropZone, DropZoneConfig};
