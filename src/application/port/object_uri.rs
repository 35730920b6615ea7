// SPDX-License-Identifier: MPL-2.0
//! Transient object URI port definition.
//!
//! An object URI is a locally dereferenceable handle over in-memory bytes
//! (a browser `blob:` URL, a temp file, a texture id...). Every URI created
//! must be revoked exactly once; the preview cache is responsible for that.

use std::fmt;
use std::sync::Arc;

/// Handle returned by [`ObjectUriFactory::create`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectUri(Arc<str>);

impl ObjectUri {
    /// Wraps a URI string produced by a factory.
    #[must_use]
    pub fn new(uri: impl Into<Arc<str>>) -> Self {
        Self(uri.into())
    }

    /// Returns the URI as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Port for materializing fetched bytes as revocable URIs.
///
/// Both operations are synchronous and infallible from the caller's point
/// of view. Revoking an unknown or already revoked URI must be harmless.
pub trait ObjectUriFactory: Send + Sync {
    /// Creates a new URI over `bytes`.
    fn create(&self, bytes: Arc<[u8]>, mime_type: &str) -> ObjectUri;

    /// Releases the URI and the memory behind it.
    fn revoke(&self, uri: &ObjectUri);
}

impl<T: ObjectUriFactory + ?Sized> ObjectUriFactory for Arc<T> {
    fn create(&self, bytes: Arc<[u8]>, mime_type: &str) -> ObjectUri {
        (**self).create(bytes, mime_type)
    }

    fn revoke(&self, uri: &ObjectUri) {
        (**self).revoke(uri);
    }
}
