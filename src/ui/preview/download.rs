// SPDX-License-Identifier: MPL-2.0
//! Download action: fetch the bytes again, hand a one-shot URI to the save
//! sink, revoke it. The preview cache is never involved.

use crate::application::port::{
    AttachmentSource, FetchError, ObjectUri, ObjectUriFactory, SaveSink,
};
use crate::domain::attachment::Attachment;

/// Revokes its URI when dropped, so a panicking sink cannot leak it.
struct OneShotUri<'a> {
    uris: &'a dyn ObjectUriFactory,
    uri: ObjectUri,
}

impl Drop for OneShotUri<'_> {
    fn drop(&mut self) {
        self.uris.revoke(&self.uri);
    }
}

/// Downloads `attachment` and saves it under its file name.
///
/// # Errors
///
/// Returns the [`FetchError`] of the download; nothing is saved then.
pub async fn download_attachment(
    source: &dyn AttachmentSource,
    uris: &dyn ObjectUriFactory,
    sink: &dyn SaveSink,
    attachment: &Attachment,
) -> Result<(), FetchError> {
    let fetched = source.download(&attachment.id).await.map_err(|err| {
        tracing::warn!(id = %attachment.id, %err, "attachment download failed");
        err
    })?;

    let one_shot = OneShotUri {
        uri: uris.create(fetched.bytes, &fetched.mime_type),
        uris,
    };
    sink.save(&one_shot.uri, &attachment.file_name);
    tracing::info!(id = %attachment.id, file_name = %attachment.file_name, "attachment saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::FetchedAttachment;
    use crate::domain::attachment::AttachmentId;
    use crate::infrastructure::MemoryObjectUris;
    use crate::ui::preview::PreviewCache;
    use futures_util::future::{self, BoxFuture, FutureExt};
    use std::sync::{Arc, Mutex};

    struct StaticSource(Result<FetchedAttachment, FetchError>);

    impl AttachmentSource for StaticSource {
        fn download(
            &self,
            _id: &AttachmentId,
        ) -> BoxFuture<'static, Result<FetchedAttachment, FetchError>> {
            future::ready(self.0.clone()).boxed()
        }
    }

    /// Records what was saved and whether the URI was live at that moment.
    struct RecordingSink {
        uris: Arc<MemoryObjectUris>,
        saved: Mutex<Vec<(ObjectUri, String, bool)>>,
    }

    impl SaveSink for RecordingSink {
        fn save(&self, uri: &ObjectUri, file_name: &str) {
            let live = self.uris.is_live(uri);
            self.saved
                .lock()
                .unwrap()
                .push((uri.clone(), file_name.to_string(), live));
        }
    }

    fn sink(uris: &Arc<MemoryObjectUris>) -> RecordingSink {
        RecordingSink {
            uris: uris.clone(),
            saved: Mutex::new(Vec::new()),
        }
    }

    #[tokio::test]
    async fn saves_through_one_shot_uri() {
        let uris = Arc::new(MemoryObjectUris::new());
        let sink = sink(&uris);
        let source = StaticSource(Ok(FetchedAttachment::new(vec![7_u8; 3], "image/png")));
        let attachment = Attachment::new("a", "receipt.png");

        download_attachment(&source, &*uris, &sink, &attachment)
            .await
            .unwrap();

        let saved = sink.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        let (uri, name, live) = &saved[0];
        assert_eq!(name, "receipt.png");
        assert!(live);
        assert_eq!(uris.revoke_count(uri), 1);
        assert_eq!(uris.live_count(), 0);
    }

    #[tokio::test]
    async fn failed_download_saves_nothing() {
        let uris = Arc::new(MemoryObjectUris::new());
        let sink = sink(&uris);
        let source = StaticSource(Err(FetchError::NotFound));

        let result =
            download_attachment(&source, &*uris, &sink, &Attachment::new("a", "a.pdf")).await;

        assert_eq!(result, Err(FetchError::NotFound));
        assert!(sink.saved.lock().unwrap().is_empty());
        assert_eq!(uris.created_count(), 0);
    }

    #[tokio::test]
    async fn download_leaves_preview_untouched() {
        let uris = Arc::new(MemoryObjectUris::new());
        let mut cache = PreviewCache::new(uris.clone());
        let source = StaticSource(Ok(FetchedAttachment::new(vec![1_u8], "image/png")));
        cache.load(&source, "a".into()).await;
        let preview = cache.current().cloned().unwrap();

        let sink = sink(&uris);
        download_attachment(&source, &*uris, &sink, &Attachment::new("a", "a.png"))
            .await
            .unwrap();

        assert_eq!(cache.current(), Some(&preview));
        assert!(uris.is_live(&preview.uri));
        assert_eq!(uris.live_count(), 1);
    }
}
