// SPDX-License-Identifier: MPL-2.0
//! Core attachment types for the domain layer.

use std::fmt;
use std::sync::Arc;

/// Identifier of an attachment as issued by the entity API.
///
/// Cloning is cheap; the string is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttachmentId(Arc<str>);

impl AttachmentId {
    /// Creates an identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AttachmentId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One entry of an externally supplied attachment list.
///
/// The list order defines navigation order; identifiers are unique
/// within a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Unique identifier.
    pub id: AttachmentId,
    /// Original file name, shown in the panel header and used for downloads.
    pub file_name: String,
    /// MIME type declared by the listing, if any.
    pub mime_type: Option<String>,
}

impl Attachment {
    /// Creates an attachment entry.
    #[must_use]
    pub fn new(id: impl Into<AttachmentId>, file_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            file_name: file_name.into(),
            mime_type: None,
        }
    }

    /// Sets the declared MIME type.
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Preview category guessed from the listing alone (before download).
    #[must_use]
    pub fn preview_kind(&self) -> PreviewKind {
        PreviewKind::detect(self.mime_type.as_deref(), Some(&self.file_name))
    }
}

/// How a preview is rendered, derived from the MIME category.
///
/// A closed set: every renderer must handle all three cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreviewKind {
    /// Raster or vector image shown in a zoomable viewport.
    Image,
    /// PDF document shown page by page.
    Pdf,
    /// Anything else; only download is offered.
    Unsupported,
}

impl PreviewKind {
    /// Classifies a MIME type.
    ///
    /// Parameters after `;` are ignored and matching is case-insensitive.
    #[must_use]
    pub fn from_mime(mime: &str) -> Self {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "application/pdf" | "application/x-pdf" => PreviewKind::Pdf,
            // TIFF and HEIC are image types but no renderer can show them inline.
            "image/tiff" | "image/heic" | "image/heif" => PreviewKind::Unsupported,
            other if other.starts_with("image/") => PreviewKind::Image,
            _ => PreviewKind::Unsupported,
        }
    }

    /// Classifies a file by its extension.
    #[must_use]
    pub fn from_file_name(name: &str) -> Self {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return PreviewKind::Unsupported;
        };
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => PreviewKind::Pdf,
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "svg" => PreviewKind::Image,
            _ => PreviewKind::Unsupported,
        }
    }

    /// Classifies using the MIME type, falling back to the file name when
    /// the MIME type is missing or generic (`application/octet-stream`).
    #[must_use]
    pub fn detect(mime: Option<&str>, file_name: Option<&str>) -> Self {
        let from_mime = mime.map(Self::from_mime);
        let generic = mime.is_none_or(|m| {
            m.trim()
                .to_ascii_lowercase()
                .starts_with("application/octet-stream")
        });

        match (from_mime, file_name) {
            (Some(kind), _) if !generic => kind,
            (_, Some(name)) => Self::from_file_name(name),
            (Some(kind), None) => kind,
            (None, None) => PreviewKind::Unsupported,
        }
    }

    /// Returns `true` if this kind has an inline renderer.
    #[must_use]
    pub fn is_previewable(self) -> bool {
        !matches!(self, PreviewKind::Unsupported)
    }
}

/// A file handed to the drop zone by the host's drag-and-drop layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedFile {
    /// File name including extension.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// File contents, when the host has already read them.
    pub bytes: Option<Arc<[u8]>>,
}

impl DroppedFile {
    /// Creates a dropped file descriptor without contents.
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            bytes: None,
        }
    }

    /// Creates a dropped file from its contents.
    #[must_use]
    pub fn with_bytes(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let bytes = bytes.into();
        Self {
            name: name.into(),
            size: bytes.len() as u64,
            bytes: Some(bytes),
        }
    }

    /// Lowercase extension without the dot, if any.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.name.rsplit_once('.')?;
        if ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_classification() {
        assert_eq!(PreviewKind::from_mime("image/png"), PreviewKind::Image);
        assert_eq!(PreviewKind::from_mime("IMAGE/JPEG"), PreviewKind::Image);
        assert_eq!(PreviewKind::from_mime("application/pdf"), PreviewKind::Pdf);
        assert_eq!(
            PreviewKind::from_mime("application/pdf; charset=binary"),
            PreviewKind::Pdf
        );
        assert_eq!(PreviewKind::from_mime("image/tiff"), PreviewKind::Unsupported);
        assert_eq!(PreviewKind::from_mime("text/csv"), PreviewKind::Unsupported);
    }

    #[test]
    fn generic_mime_falls_back_to_extension() {
        assert_eq!(
            PreviewKind::detect(Some("application/octet-stream"), Some("scan.PDF")),
            PreviewKind::Pdf
        );
        assert_eq!(
            PreviewKind::detect(None, Some("receipt.jpeg")),
            PreviewKind::Image
        );
        assert_eq!(PreviewKind::detect(None, None), PreviewKind::Unsupported);
    }

    #[test]
    fn specific_mime_wins_over_extension() {
        assert_eq!(
            PreviewKind::detect(Some("image/png"), Some("misnamed.pdf")),
            PreviewKind::Image
        );
    }

    #[test]
    fn file_without_extension_is_unsupported() {
        assert_eq!(PreviewKind::from_file_name("README"), PreviewKind::Unsupported);
    }

    #[test]
    fn dropped_file_extension() {
        assert_eq!(DroppedFile::new("Scan.PDF", 10).extension().as_deref(), Some("pdf"));
        assert_eq!(DroppedFile::new("archive.tar.gz", 10).extension().as_deref(), Some("gz"));
        assert_eq!(DroppedFile::new("noext", 10).extension(), None);
        assert_eq!(DroppedFile::new("trailing.", 10).extension(), None);
    }

    #[test]
    fn dropped_file_with_bytes_sets_size() {
        let file = DroppedFile::with_bytes("a.png", vec![1_u8, 2, 3]);
        assert_eq!(file.size, 3);
        assert!(file.bytes.is_some());
    }

    #[test]
    fn attachment_preview_kind_uses_listing() {
        let attachment = Attachment::new("a1", "invoice.pdf");
        assert_eq!(attachment.preview_kind(), PreviewKind::Pdf);
        assert!(attachment.preview_kind().is_previewable());

        let attachment = Attachment::new("a2", "data.bin").with_mime_type("image/webp");
        assert_eq!(attachment.preview_kind(), PreviewKind::Image);
    }
}
