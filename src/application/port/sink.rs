// SPDX-License-Identifier: MPL-2.0
//! Output ports: saving a downloaded attachment and ingesting dropped files.

use super::object_uri::ObjectUri;
use crate::domain::attachment::DroppedFile;

/// Port for the synthetic "save as" action of the download button.
///
/// The URI is only valid for the duration of the call; it is revoked as
/// soon as `save` returns.
pub trait SaveSink: Send + Sync {
    /// Hands the file behind `uri` to the platform save mechanism.
    fn save(&self, uri: &ObjectUri, file_name: &str);
}

/// Port for the upload collaborator fed by the drop zone.
///
/// Only files that passed validation are ever forwarded.
pub trait UploadSink {
    /// Starts ingestion of the accepted files.
    fn ingest(&mut self, files: Vec<DroppedFile>);
}
