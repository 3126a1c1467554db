//! Image Filter Application Service (Use Case)
//!
//! Decodes an upload, stores it, then overwrites it with the filtered
//! thumbnail.

use std::sync::Arc;

use medley::{
    decode_upload, render_filtered, DecodedImage, DomainError, FilterKind, ImageStore,
    ProcessedImage, StorageKey,
};

/// A file received from the upload form
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Outcome of a successful filter run
#[derive(Debug, Clone)]
pub struct FilteredImage {
    pub key: StorageKey,
    pub url: String,
    pub filter: FilterKind,
    pub width: u32,
    pub height: u32,
}

/// Application service for the image filter page
pub struct ImageFilterService<S: ImageStore> {
    store: Arc<S>,
}

impl<S: ImageStore> ImageFilterService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Filter an uploaded image and return where it can be viewed
    pub async fn apply(
        &self,
        upload: ImageUpload,
        filter: FilterKind,
    ) -> Result<FilteredImage, DomainError> {
        let ImageUpload { file_name, bytes } = upload;

        // Decoding and filtering are CPU bound
        let (decoded, bytes) = tokio::task::spawn_blocking(move || {
            decode_upload(&bytes).map(|decoded| (decoded, bytes))
        })
        .await
        .map_err(|e| DomainError::Storage(format!("Image worker failed: {e}")))??;

        let key = StorageKey::new(filter, &file_name, decoded.extension());
        self.store.put(&key, &bytes).await?;

        // The raw upload must not outlive a failed render under the final name
        let processed = match self.overwrite_filtered(&key, decoded, filter).await {
            Ok(processed) => processed,
            Err(err) => {
                if let Err(cleanup) = self.store.remove(&key).await {
                    tracing::warn!("Failed to remove unfiltered upload {}: {}", key, cleanup);
                }
                return Err(err);
            }
        };

        tracing::info!(
            "🎨 Applied {} to '{}' -> {} ({}x{})",
            filter,
            file_name,
            key,
            processed.width,
            processed.height
        );

        Ok(FilteredImage {
            url: self.store.public_url(&key),
            key,
            filter,
            width: processed.width,
            height: processed.height,
        })
    }

    async fn overwrite_filtered(
        &self,
        key: &StorageKey,
        decoded: DecodedImage,
        filter: FilterKind,
    ) -> Result<ProcessedImage, DomainError> {
        let processed = tokio::task::spawn_blocking(move || render_filtered(&decoded, filter))
            .await
            .map_err(|e| DomainError::Storage(format!("Image worker failed: {e}")))??;

        self.store.put(key, &processed.bytes).await?;
        Ok(processed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Records every write so tests can check the stored bytes
    #[derive(Default)]
    struct MemoryStore {
        writes: Mutex<Vec<(String, Vec<u8>)>>,
        removed: Mutex<Vec<String>>,
        /// Reject the second write to a key
        fail_overwrite: bool,
    }

    impl MemoryStore {
        fn latest(&self) -> HashMap<String, Vec<u8>> {
            self.writes.lock().unwrap().iter().cloned().collect()
        }
    }

    #[async_trait]
    impl ImageStore for MemoryStore {
        async fn put(&self, key: &StorageKey, bytes: &[u8]) -> Result<(), DomainError> {
            let mut writes = self.writes.lock().unwrap();
            if self.fail_overwrite && writes.iter().any(|(k, _)| k == key.as_str()) {
                return Err(DomainError::Storage("disk full".to_string()));
            }
            writes.push((key.to_string(), bytes.to_vec()));
            Ok(())
        }

        async fn remove(&self, key: &StorageKey) -> Result<(), DomainError> {
            self.removed.lock().unwrap().push(key.to_string());
            Ok(())
        }

        fn public_url(&self, key: &StorageKey) -> String {
            format!("/mem/{key}")
        }
    }

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut buffer = std::io::Cursor::new(Vec::new());
        image::DynamicImage::new_rgb8(width, height)
            .write_to(&mut buffer, image::ImageFormat::Png)
            .unwrap();
        buffer.into_inner()
    }

    #[tokio::test]
    async fn test_upload_is_stored_then_overwritten() {
        let store = Arc::new(MemoryStore::default());
        let service = ImageFilterService::new(store.clone());
        let original = png(1000, 800);

        let result = service
            .apply(
                ImageUpload {
                    file_name: "photo.png".to_string(),
                    bytes: original.clone(),
                },
                FilterKind::Blur,
            )
            .await
            .unwrap();

        assert_eq!((result.width, result.height), (500, 400));
        assert!(result.key.as_str().starts_with("blur-"));
        assert!(result.key.as_str().ends_with("-photo.png"));
        assert_eq!(result.url, format!("/mem/{}", result.key));

        let writes = store.writes.lock().unwrap().clone();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0].1, original);
        assert_eq!(writes[0].0, writes[1].0);

        let stored = image::load_from_memory(&store.latest()[result.key.as_str()]).unwrap();
        assert_eq!((stored.width(), stored.height()), (500, 400));
    }

    #[tokio::test]
    async fn test_bad_upload_stores_nothing() {
        let store = Arc::new(MemoryStore::default());
        let service = ImageFilterService::new(store.clone());

        let err = service
            .apply(
                ImageUpload {
                    file_name: "notes.txt".to_string(),
                    bytes: b"hello".to_vec(),
                },
                FilterKind::Sharpen,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::UnsupportedImage(_)));
        assert!(store.writes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_overwrite_removes_raw_upload() {
        let store = Arc::new(MemoryStore {
            fail_overwrite: true,
            ..Default::default()
        });
        let service = ImageFilterService::new(store.clone());

        let err = service
            .apply(
                ImageUpload {
                    file_name: "pic.png".to_string(),
                    bytes: png(30, 20),
                },
                FilterKind::Contour,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));

        let writes = store.writes.lock().unwrap().clone();
        assert_eq!(writes.len(), 1);
        assert_eq!(*store.removed.lock().unwrap(), vec![writes[0].0.clone()]);
    }

    #[tokio::test]
    async fn test_success_keeps_the_file() {
        let store = Arc::new(MemoryStore::default());
        let service = ImageFilterService::new(store.clone());

        service
            .apply(
                ImageUpload {
                    file_name: "pic.png".to_string(),
                    bytes: png(30, 20),
                },
                FilterKind::Detail,
            )
            .await
            .unwrap();

        assert!(store.removed.lock().unwrap().is_empty());
    }
}
