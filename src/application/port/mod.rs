// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces the host application implements.
//! These traits use only domain types, ensuring the panel layer remains
//! independent of any REST client, browser API or file dialog.
//!
//! # Available Ports
//!
//! - [`attachment`]: Downloading attachment bytes
//! - [`object_uri`]: Materializing bytes as revocable transient URIs
//! - [`sink`]: Save and upload actions triggered by the panels
//!
//! # Design Notes
//!
//! - Downloads return a boxed `'static` future so callers can spawn them
//!   on whatever executor the host runs
//! - URI creation and revocation are synchronous, like the browser's
//!   `URL.createObjectURL` / `URL.revokeObjectURL` they model

pub mod attachment;
pub mod object_uri;
pub mod sink;

// Re-export main types for convenience
pub use attachment::{AttachmentSource, FetchError, FetchedAttachment};
pub use object_uri::{ObjectUri, ObjectUriFactory};
pub use sink::{SaveSink, UploadSink};
