//! Application Configuration
//!
//! Configuration for the Catalog application layer.

use std::path::PathBuf;

/// Catalog application configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Directory where uploaded images are stored
    pub uploads_dir: PathBuf,
    /// Maximum accepted image size in bytes
    pub max_image_bytes: usize,
    /// Public URL prefix under which stored images are served
    pub image_url_prefix: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            uploads_dir: PathBuf::from("uploads"),
            max_image_bytes: 5 * 1024 * 1024, // 5 MiB
            image_url_prefix: "/api/products/image".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Serving URL for a stored image filename
    pub fn image_url(&self, filename: &str) -> String {
        format!("{}/{}", self.image_url_prefix, filename)
    }

    /// Extract the stored filename from a serving URL produced by
    /// [`CatalogConfig::image_url`]; `None` for foreign URLs
    pub fn filename_from_url<'a>(&self, url: &'a str) -> Option<&'a str> {
        let rest = url.strip_prefix(self.image_url_prefix.as_str())?;
        let filename = rest.strip_prefix('/')?;
        if filename.is_empty() || filename.contains('/') {
            return None;
        }
        Some(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_roundtrip() {
        let config = CatalogConfig::default();
        let url = config.image_url("abc123.png");
        assert_eq!(url, "/api/products/image/abc123.png");
        assert_eq!(config.filename_from_url(&url), Some("abc123.png"));
    }

    #[test]
    fn test_filename_from_foreign_url() {
        let config = CatalogConfig::default();
        assert_eq!(config.filename_from_url("https://cdn.example.com/x.png"), None);
        assert_eq!(config.filename_from_url("/api/products/image/"), None);
        assert_eq!(config.filename_from_url("/api/products/image/a/b.png"), None);
    }
}
