// SPDX-License-Identifier: MPL-2.0
//! Domain layer - plain value types shared by every other layer.
//!
//! This module contains value objects and business rules that do not
//! depend on any presentation framework or I/O collaborator. Only `serde`
//! derives leak in, so that panel kinds can key persisted settings.
//!
//! # Modules
//!
//! - [`attachment`]: Attachment types ([`Attachment`](attachment::Attachment),
//!   [`AttachmentId`](attachment::AttachmentId), [`PreviewKind`](attachment::PreviewKind))
//! - [`panel`]: Panel kinds ([`ModalType`](panel::ModalType),
//!   [`PositionSide`](panel::PositionSide))
//! - [`ui`]: UI value objects ([`ZoomFactor`](ui::newtypes::ZoomFactor))

pub mod attachment;
pub mod panel;
pub mod ui;
