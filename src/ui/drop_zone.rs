// SPDX-License-Identifier: MPL-2.0
//! Drop zone admission filter.
//!
//! Dropped files are split into accepted and rejected by an extension
//! allow-list and a byte ceiling. Only accepted files reach the
//! [`UploadSink`]; rejections are summarized in one message.
//!
//! Drag-over tracking counts enter/leave pairs instead of keeping a flag:
//! hosts deliver nested enter/leave events for child elements, and the
//! indicator must only clear once the pointer has left every one of them.

use crate::application::port::UploadSink;
use crate::config::{DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_MAX_UPLOAD_BYTES};
use crate::domain::attachment::DroppedFile;
use crate::error::ValidationError;

/// Admission rules of a drop zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropZoneConfig {
    allowed_extensions: Vec<String>,
    max_bytes: u64,
}

impl Default for DropZoneConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl DropZoneConfig {
    /// Replaces the allow-list. Entries are matched case-insensitively and
    /// may be written with or without the leading dot.
    #[must_use]
    pub fn with_allowed_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        self
    }

    #[must_use]
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    #[must_use]
    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }

    #[must_use]
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Checks one file against the rules.
    ///
    /// # Errors
    ///
    /// Returns the first rule the file breaks: extension, then emptiness,
    /// then size.
    pub fn check(&self, file: &DroppedFile) -> Result<(), ValidationError> {
        let allowed = file
            .extension()
            .is_some_and(|ext| self.allowed_extensions.iter().any(|a| *a == ext));
        if !allowed {
            return Err(ValidationError::ExtensionNotAllowed {
                file_name: file.name.clone(),
            });
        }
        if file.size == 0 {
            return Err(ValidationError::Empty {
                file_name: file.name.clone(),
            });
        }
        if file.size > self.max_bytes {
            return Err(ValidationError::TooLarge {
                file_name: file.name.clone(),
                size: file.size,
                max: self.max_bytes,
            });
        }
        Ok(())
    }
}

/// Files split by [`DropZone::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Admission {
    pub accepted: Vec<DroppedFile>,
    pub rejected: Vec<ValidationError>,
}

impl Admission {
    /// All rejections in drop order, `"name: reason; name: reason"`.
    #[must_use]
    pub fn rejection_message(&self) -> Option<String> {
        if self.rejected.is_empty() {
            return None;
        }
        let reasons: Vec<String> = self.rejected.iter().map(ToString::to_string).collect();
        Some(reasons.join("; "))
    }
}

/// Result of a drop, for the host's notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropOutcome {
    /// Number of files handed to the upload sink.
    pub accepted: usize,
    pub rejected: Vec<ValidationError>,
    /// Aggregated rejection message, if anything was refused.
    pub message: Option<String>,
}

/// Drag-and-drop target with admission rules.
#[derive(Debug, Clone, Default)]
pub struct DropZone {
    config: DropZoneConfig,
    depth: u32,
}

impl DropZone {
    #[must_use]
    pub fn new(config: DropZoneConfig) -> Self {
        Self { config, depth: 0 }
    }

    #[must_use]
    pub fn config(&self) -> &DropZoneConfig {
        &self.config
    }

    /// Whether the drag-over indicator should show.
    #[must_use]
    pub fn is_drag_over(&self) -> bool {
        self.depth > 0
    }

    pub fn drag_enter(&mut self) {
        self.depth = self.depth.saturating_add(1);
    }

    /// Unmatched leave events are ignored.
    pub fn drag_leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Splits `files` without side effects.
    #[must_use]
    pub fn validate(&self, files: Vec<DroppedFile>) -> Admission {
        let mut admission = Admission::default();
        for file in files {
            match self.config.check(&file) {
                Ok(()) => admission.accepted.push(file),
                Err(err) => admission.rejected.push(err),
            }
        }
        admission
    }

    /// Handles a drop: clears the drag-over state, validates, and forwards
    /// the accepted files to `sink`.
    pub fn drop_files(&mut self, files: Vec<DroppedFile>, sink: &mut impl UploadSink) -> DropOutcome {
        self.depth = 0;
        let admission = self.validate(files);
        let message = admission.rejection_message();
        if let Some(message) = &message {
            tracing::warn!(rejected = admission.rejected.len(), reasons = %message, "dropped files rejected");
        }

        let accepted = admission.accepted.len();
        if accepted > 0 {
            tracing::debug!(accepted, "forwarding dropped files");
            sink.ingest(admission.accepted);
        }
        DropOutcome {
            accepted,
            rejected: admission.rejected,
            message,
        }
    }
}
