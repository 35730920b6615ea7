// SPDX-License-Identifier: MPL-2.0
//! In-process object URI registry.
//!
//! Issues `blob:panel-lens/<n>` URIs backed by shared byte buffers. Hosts
//! that render from memory (native GUI, tests) dereference them with
//! [`MemoryObjectUris::resolve`]. The registry also keeps create/revoke
//! accounting so leaks and double revocations are observable. Ids are
//! sequential, so a well-behaved revoke only costs a counter; per-URI
//! records exist only for revokes of URIs that were not live.

use crate::application::port::{ObjectUri, ObjectUriFactory};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

const URI_PREFIX: &str = "blob:panel-lens/";

#[derive(Debug)]
struct Entry {
    bytes: Arc<[u8]>,
    mime_type: String,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    live: HashMap<ObjectUri, Entry>,
    /// Revoke calls for URIs that were not live at the time.
    stray_revokes: HashMap<ObjectUri, usize>,
    created: u64,
    revoked: u64,
}

impl Registry {
    /// Whether this registry issued `uri`, live or not.
    fn issued(&self, uri: &ObjectUri) -> bool {
        uri.as_str()
            .strip_prefix(URI_PREFIX)
            .and_then(|id| id.parse::<u64>().ok())
            .is_some_and(|id| (1..=self.next_id).contains(&id))
    }
}

/// Thread-safe in-memory [`ObjectUriFactory`].
#[derive(Debug, Default)]
pub struct MemoryObjectUris {
    inner: Mutex<Registry>,
}

impl MemoryObjectUris {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the bytes and MIME type behind a live URI.
    #[must_use]
    pub fn resolve(&self, uri: &ObjectUri) -> Option<(Arc<[u8]>, String)> {
        self.registry()
            .live
            .get(uri)
            .map(|entry| (Arc::clone(&entry.bytes), entry.mime_type.clone()))
    }

    /// Returns `true` if the URI was created and not yet revoked.
    #[must_use]
    pub fn is_live(&self, uri: &ObjectUri) -> bool {
        self.registry().live.contains_key(uri)
    }

    /// Number of URIs currently alive.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.registry().live.len()
    }

    /// Total number of URIs ever created.
    #[must_use]
    pub fn created_count(&self) -> u64 {
        self.registry().created
    }

    /// Total number of URIs revoked while live.
    #[must_use]
    pub fn revoked_count(&self) -> u64 {
        self.registry().revoked
    }

    /// How many times `revoke` was called for this URI: one for the revoke
    /// that retired it, plus every call made after that.
    #[must_use]
    pub fn revoke_count(&self, uri: &ObjectUri) -> usize {
        let registry = self.registry();
        let stray = registry.stray_revokes.get(uri).copied().unwrap_or_default();
        let retired = registry.issued(uri) && !registry.live.contains_key(uri);
        usize::from(retired) + stray
    }

    /// Returns `true` if `revoke` was ever called for a URI that was not
    /// live: revoked twice, or never issued here.
    #[must_use]
    pub fn has_double_revoke(&self) -> bool {
        !self.registry().stray_revokes.is_empty()
    }
}

impl ObjectUriFactory for MemoryObjectUris {
    fn create(&self, bytes: Arc<[u8]>, mime_type: &str) -> ObjectUri {
        let mut registry = self.registry();
        registry.next_id += 1;
        registry.created += 1;
        let uri = ObjectUri::new(format!("{URI_PREFIX}{}", registry.next_id));
        registry.live.insert(
            uri.clone(),
            Entry {
                bytes,
                mime_type: mime_type.to_string(),
            },
        );
        tracing::trace!(%uri, mime_type, "object uri created");
        uri
    }

    fn revoke(&self, uri: &ObjectUri) {
        let mut registry = self.registry();
        if registry.live.remove(uri).is_some() {
            registry.revoked += 1;
            tracing::trace!(%uri, "object uri revoked");
        } else {
            *registry.stray_revokes.entry(uri.clone()).or_default() += 1;
            tracing::warn!(%uri, "revoke of unknown object uri");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(len: usize) -> Arc<[u8]> {
        vec![7_u8; len].into()
    }

    #[test]
    fn create_issues_unique_live_uris() {
        let uris = MemoryObjectUris::new();
        let a = uris.create(bytes(4), "image/png");
        let b = uris.create(bytes(8), "application/pdf");

        assert_ne!(a, b);
        assert!(a.as_str().starts_with(URI_PREFIX));
        assert_eq!(uris.live_count(), 2);
        assert_eq!(uris.created_count(), 2);
    }

    #[test]
    fn resolve_returns_bytes_and_mime() {
        let uris = MemoryObjectUris::new();
        let uri = uris.create(bytes(3), "image/png");

        let (data, mime) = uris.resolve(&uri).expect("uri should be live");
        assert_eq!(&*data, &[7, 7, 7]);
        assert_eq!(mime, "image/png");
    }

    #[test]
    fn revoke_removes_and_counts() {
        let uris = MemoryObjectUris::new();
        let uri = uris.create(bytes(1), "image/png");

        uris.revoke(&uri);
        assert!(!uris.is_live(&uri));
        assert!(uris.resolve(&uri).is_none());
        assert_eq!(uris.revoke_count(&uri), 1);
        assert!(!uris.has_double_revoke());

        uris.revoke(&uri);
        assert_eq!(uris.revoke_count(&uri), 2);
        assert!(uris.has_double_revoke());
    }

    #[test]
    fn revoke_of_foreign_uri_is_recorded() {
        let uris = MemoryObjectUris::new();
        let foreign = ObjectUri::new("blob:elsewhere/1");
        let unissued = ObjectUri::new(format!("{URI_PREFIX}42"));

        assert_eq!(uris.revoke_count(&unissued), 0);
        uris.revoke(&foreign);
        assert_eq!(uris.revoke_count(&foreign), 1);
        assert_eq!(uris.revoked_count(), 0);
        assert!(uris.has_double_revoke());
    }

    #[test]
    fn accounting_stays_flat_across_navigation_churn() {
        let uris = MemoryObjectUris::new();
        let mut current = uris.create(bytes(2), "image/png");
        for _ in 0..1000 {
            let next = uris.create(bytes(2), "image/png");
            uris.revoke(&current);
            current = next;
        }

        assert_eq!(uris.live_count(), 1);
        assert_eq!(uris.created_count(), 1001);
        assert_eq!(uris.revoked_count(), 1000);
        assert!(uris.registry().stray_revokes.is_empty());
        assert!(!uris.has_double_revoke());
    }
}
