// SPDX-License-Identifier: MPL-2.0
//! Preview resource cache.
//!
//! Holds the one live preview resource of a controller: fetched bytes
//! materialized as a transient object URI.
//!
//! # Design
//!
//! - **Single slot**: at most one URI is live per cache; the previous one is
//!   revoked before the next one is created and installed, in one
//!   synchronous step
//! - **Request tokens**: every [`PreviewCache::begin`] issues a strictly
//!   increasing token; a completion whose token is not the latest is
//!   discarded before any URI is created, so a slow response can never
//!   overwrite a newer preview
//! - **No cancellation**: superseded downloads run to completion and are
//!   dropped by token comparison
//!
//! # Usage
//!
//! ```ignore
//! let ticket = cache.begin(attachment.id.clone());
//! let completed = fetch_preview(&*source, ticket).await;
//! match cache.finish(completed.ticket, completed.result) {
//!     LoadOutcome::Installed(resource) => show(resource.uri),
//!     LoadOutcome::Stale => {}
//!     LoadOutcome::Failed(err) => show_error(err),
//! }
//! ```

use crate::application::port::{
    AttachmentSource, FetchError, FetchedAttachment, ObjectUri, ObjectUriFactory,
};
use crate::domain::attachment::{AttachmentId, PreviewKind};
use std::future::Future;
use std::sync::Arc;

/// The live preview of one attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewResource {
    /// Attachment the bytes belong to.
    pub source_id: AttachmentId,
    /// Transient URI over the bytes.
    pub uri: ObjectUri,
    /// MIME type declared by the server.
    pub mime_type: String,
    /// Renderer category.
    pub kind: PreviewKind,
}

/// Handle for one issued load request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    token: u64,
    source_id: AttachmentId,
}

impl LoadTicket {
    /// Attachment requested by this ticket.
    #[must_use]
    pub fn source_id(&self) -> &AttachmentId {
        &self.source_id
    }

    /// Request token; larger means newer.
    #[must_use]
    pub fn token(&self) -> u64 {
        self.token
    }
}

/// A finished download, ready to be handed back to [`PreviewCache::finish`].
#[derive(Debug, Clone)]
pub struct FetchCompleted {
    pub ticket: LoadTicket,
    pub result: Result<FetchedAttachment, FetchError>,
}

/// What [`PreviewCache::finish`] did with a completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The resource is now the live preview.
    Installed(PreviewResource),
    /// A newer request was issued (or the cache released); result dropped.
    Stale,
    /// The download failed; the cache is empty.
    Failed(FetchError),
}

/// Downloads the attachment named by `ticket`.
///
/// The returned future does not borrow the source, so hosts can spawn it.
pub fn fetch_preview(
    source: &dyn AttachmentSource,
    ticket: LoadTicket,
) -> impl Future<Output = FetchCompleted> + Send + 'static {
    let download = source.download(&ticket.source_id);
    async move {
        FetchCompleted {
            ticket,
            result: download.await,
        }
    }
}

/// Single-slot owner of the live preview URI.
pub struct PreviewCache {
    uris: Arc<dyn ObjectUriFactory>,
    current: Option<PreviewResource>,
    pending: Option<AttachmentId>,
    latest_token: u64,
    last_error: Option<FetchError>,
}

impl PreviewCache {
    /// Creates an empty cache issuing URIs through `uris`.
    #[must_use]
    pub fn new(uris: Arc<dyn ObjectUriFactory>) -> Self {
        Self {
            uris,
            current: None,
            pending: None,
            latest_token: 0,
            last_error: None,
        }
    }

    /// The live resource, if any.
    #[must_use]
    pub fn current(&self) -> Option<&PreviewResource> {
        self.current.as_ref()
    }

    /// Whether a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Attachment of the in-flight request.
    #[must_use]
    pub fn pending(&self) -> Option<&AttachmentId> {
        self.pending.as_ref()
    }

    /// Error of the most recent failed load, cleared by the next request.
    #[must_use]
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Whether the live resource, or the in-flight request, is for `source_id`.
    #[must_use]
    pub fn covers(&self, source_id: &AttachmentId) -> bool {
        match &self.pending {
            Some(pending) => pending == source_id,
            None => self
                .current
                .as_ref()
                .is_some_and(|resource| &resource.source_id == source_id),
        }
    }

    /// Issues a new request; any older request becomes stale.
    ///
    /// The live resource stays visible until the new one is installed.
    pub fn begin(&mut self, source_id: AttachmentId) -> LoadTicket {
        self.latest_token += 1;
        self.pending = Some(source_id.clone());
        self.last_error = None;
        tracing::debug!(token = self.latest_token, %source_id, "preview load started");
        LoadTicket {
            token: self.latest_token,
            source_id,
        }
    }

    /// Applies a finished download.
    pub fn finish(
        &mut self,
        ticket: LoadTicket,
        result: Result<FetchedAttachment, FetchError>,
    ) -> LoadOutcome {
        if ticket.token != self.latest_token {
            tracing::debug!(
                token = ticket.token,
                latest = self.latest_token,
                source_id = %ticket.source_id,
                "stale preview response discarded"
            );
            return LoadOutcome::Stale;
        }
        self.pending = None;

        match result {
            Ok(fetched) => {
                self.revoke_current();
                let kind = PreviewKind::from_mime(&fetched.mime_type);
                let uri = self.uris.create(fetched.bytes, &fetched.mime_type);
                let resource = PreviewResource {
                    source_id: ticket.source_id,
                    uri,
                    mime_type: fetched.mime_type,
                    kind,
                };
                tracing::debug!(
                    token = ticket.token,
                    source_id = %resource.source_id,
                    uri = %resource.uri,
                    "preview installed"
                );
                self.current = Some(resource.clone());
                LoadOutcome::Installed(resource)
            }
            Err(err) => {
                tracing::warn!(source_id = %ticket.source_id, %err, "preview load failed");
                self.revoke_current();
                self.last_error = Some(err.clone());
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Fetches and installs `source_id` in one call.
    ///
    /// Holding `&mut self` across the download means calls cannot overlap;
    /// controllers that need overlapping requests use `begin`/`finish`.
    pub async fn load(
        &mut self,
        source: &dyn AttachmentSource,
        source_id: AttachmentId,
    ) -> LoadOutcome {
        let ticket = self.begin(source_id);
        let completed = fetch_preview(source, ticket).await;
        self.finish(completed.ticket, completed.result)
    }

    /// Revokes the live URI, forgets any in-flight request and clears the
    /// error. Safe to call any number of times.
    pub fn release(&mut self) {
        if self.pending.take().is_some() {
            // Invalidate the in-flight response.
            self.latest_token += 1;
        }
        self.last_error = None;
        self.revoke_current();
    }

    fn revoke_current(&mut self) {
        if let Some(resource) = self.current.take() {
            tracing::debug!(uri = %resource.uri, source_id = %resource.source_id, "preview revoked");
            self.uris.revoke(&resource.uri);
        }
    }
}

impl Drop for PreviewCache {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for PreviewCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewCache")
            .field("current", &self.current)
            .field("pending", &self.pending)
            .field("latest_token", &self.latest_token)
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}
