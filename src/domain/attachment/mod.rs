// SPDX-License-Identifier: MPL-2.0
//! Attachment domain types.
//!
//! Attachments are the binary documents (scanned receipts, invoice PDFs)
//! linked to verifications and invoices. The listing itself is owned by
//! an external collaborator; these types only describe what the preview
//! layer needs to know about each entry.

pub mod types;

// Re-export commonly used types
pub use types::{Attachment, AttachmentId, DroppedFile, PreviewKind};
