// SPDX-License-Identifier: MPL-2.0
//! Attachment download port definition.
//!
//! This module defines the [`AttachmentSource`] trait the preview cache and
//! the download action fetch bytes through. The host implements it over
//! its entity API.

use crate::domain::attachment::AttachmentId;
use futures_util::future::BoxFuture;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// FetchError
// =============================================================================

/// Errors that can occur while downloading an attachment.
///
/// The panel layer never retries; a failure is surfaced as
/// "preview unavailable".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The attachment does not exist (anymore).
    NotFound,

    /// The transport failed (connection, timeout, TLS...).
    Network(String),

    /// The server answered but refused or could not serve the bytes.
    Unavailable(String),
}

impl FetchError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::NotFound => "error-fetch-not-found",
            FetchError::Network(_) => "error-fetch-network",
            FetchError::Unavailable(_) => "error-fetch-unavailable",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound => write!(f, "Attachment not found"),
            FetchError::Network(msg) => write!(f, "Network error: {msg}"),
            FetchError::Unavailable(msg) => write!(f, "Attachment unavailable: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

// =============================================================================
// FetchedAttachment
// =============================================================================

/// Bytes of a downloaded attachment together with the declared MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedAttachment {
    /// Raw file contents.
    pub bytes: Arc<[u8]>,
    /// MIME type declared by the server.
    pub mime_type: String,
}

impl FetchedAttachment {
    /// Creates a fetched attachment.
    #[must_use]
    pub fn new(bytes: impl Into<Arc<[u8]>>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if no bytes were received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// =============================================================================
// AttachmentSource Trait
// =============================================================================

/// Port for downloading attachment bytes.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the returned future is `'static`
/// so it can be spawned independently of the source's lifetime.
///
/// # Example
///
/// ```ignore
/// use panel_lens::application::port::{AttachmentSource, FetchedAttachment};
/// use panel_lens::domain::attachment::AttachmentId;
///
/// async fn size_of(source: &dyn AttachmentSource, id: &AttachmentId) -> Option<usize> {
///     source.download(id).await.ok().map(|fetched| fetched.len())
/// }
/// ```
pub trait AttachmentSource: Send + Sync {
    /// Downloads the bytes of one attachment.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the attachment is missing or the
    /// transport fails.
    fn download(&self, id: &AttachmentId)
        -> BoxFuture<'static, Result<FetchedAttachment, FetchError>>;
}
