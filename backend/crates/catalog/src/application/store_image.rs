//! Store Image Use Case
//!
//! Validates, persists, serves, and deletes listing images. Filenames are
//! always server-generated; the client only ever supplies bytes.

use std::sync::Arc;

use crate::application::config::CatalogConfig;
use crate::domain::repository::ImageStore;
use crate::error::{CatalogError, CatalogResult};

/// Extensions accepted for listing images
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Store image use case
pub struct StoreImageUseCase<I>
where
    I: ImageStore,
{
    images: Arc<I>,
    config: Arc<CatalogConfig>,
}

impl<I> StoreImageUseCase<I>
where
    I: ImageStore,
{
    pub fn new(images: Arc<I>, config: Arc<CatalogConfig>) -> Self {
        Self { images, config }
    }

    /// Validate and persist an upload; returns the serving URL
    pub async fn save(
        &self,
        content_type: Option<&str>,
        file_name: Option<&str>,
        bytes: &[u8],
    ) -> CatalogResult<String> {
        if bytes.is_empty() {
            return Err(CatalogError::InvalidImage(
                "No image file provided".to_string(),
            ));
        }

        if bytes.len() > self.config.max_image_bytes {
            return Err(CatalogError::InvalidImage(format!(
                "Image exceeds the maximum size of {} bytes",
                self.config.max_image_bytes
            )));
        }

        let extension = image_extension(content_type, file_name).ok_or_else(|| {
            CatalogError::InvalidImage("Unsupported image type".to_string())
        })?;

        let filename = self.images.save(extension, bytes).await?;

        tracing::info!(filename = %filename, size = bytes.len(), "Image stored");

        Ok(self.config.image_url(&filename))
    }

    /// Load stored image bytes with a guessed content type
    pub async fn fetch(&self, filename: &str) -> CatalogResult<(Vec<u8>, String)> {
        let bytes = self
            .images
            .load(filename)
            .await?
            .ok_or(CatalogError::ImageNotFound)?;

        let content_type = mime_guess::from_path(filename)
            .first_or_octet_stream()
            .to_string();

        Ok((bytes, content_type))
    }

    /// Delete a stored image
    pub async fn delete(&self, filename: &str) -> CatalogResult<()> {
        if !self.images.remove(filename).await? {
            return Err(CatalogError::ImageNotFound);
        }

        tracing::info!(filename = %filename, "Image deleted");

        Ok(())
    }
}

/// Resolve the storage extension from the declared content type, falling
/// back to the uploaded filename's extension
fn image_extension(content_type: Option<&str>, file_name: Option<&str>) -> Option<&'static str> {
    if let Some(content_type) = content_type {
        let ext = match content_type {
            "image/jpeg" => Some("jpg"),
            "image/png" => Some("png"),
            "image/webp" => Some("webp"),
            "image/gif" => Some("gif"),
            _ => None,
        };
        if ext.is_some() {
            return ext;
        }
    }

    let ext = file_name?.rsplit_once('.')?.1.to_ascii_lowercase();
    ALLOWED_EXTENSIONS
        .iter()
        .find(|&&allowed| allowed == ext)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_from_content_type() {
        assert_eq!(image_extension(Some("image/jpeg"), None), Some("jpg"));
        assert_eq!(image_extension(Some("image/png"), None), Some("png"));
        assert_eq!(image_extension(Some("image/webp"), None), Some("webp"));
    }

    #[test]
    fn test_extension_falls_back_to_filename() {
        assert_eq!(
            image_extension(Some("application/octet-stream"), Some("photo.PNG")),
            Some("png")
        );
        assert_eq!(image_extension(None, Some("photo.jpeg")), Some("jpeg"));
    }

    #[test]
    fn test_unsupported_types_rejected() {
        assert_eq!(image_extension(Some("application/pdf"), None), None);
        assert_eq!(image_extension(None, Some("document.pdf")), None);
        assert_eq!(image_extension(None, Some("no-extension")), None);
        assert_eq!(image_extension(None, None), None);
    }
}
