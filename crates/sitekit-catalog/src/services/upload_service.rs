//! Upload service — stores service images on the local filesystem

use crate::error::{CatalogError, CatalogResult};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Allowed image extensions (lowercase, with dot)
const ALLOWED_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".webp"];

/// Stores uploaded service images under a configured root directory and
/// hands back relative URLs under the configured public prefix.
#[derive(Clone)]
pub struct UploadService {
    root: PathBuf,
    public_prefix: String,
}

impl UploadService {
    pub fn new(root: PathBuf, public_prefix: String) -> Self {
        Self {
            root,
            public_prefix,
        }
    }

    /// Validate the original filename against the image allow-list and
    /// return its normalized (lowercase) extension.
    fn normalized_extension(filename: &str) -> CatalogResult<String> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_lowercase()))
            .unwrap_or_default();

        if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            Ok(ext)
        } else {
            Err(CatalogError::InvalidFileType(if ext.is_empty() {
                filename.to_string()
            } else {
                ext
            }))
        }
    }

    /// Store image bytes under a fresh unique filename preserving the
    /// original extension; returns the public relative URL path.
    pub async fn save_image(&self, filename: &str, data: &[u8]) -> CatalogResult<String> {
        let ext = Self::normalized_extension(filename)?;
        let unique_name = format!("{}{}", Uuid::new_v4(), ext);

        tokio::fs::create_dir_all(&self.root).await?;
        let path = self.root.join(&unique_name);
        tokio::fs::write(&path, data).await?;
        tracing::info!("Stored uploaded image {} at {}", filename, path.display());

        Ok(format!(
            "{}/{}",
            self.public_prefix.trim_end_matches('/'),
            unique_name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_allow_list() {
        assert!(UploadService::normalized_extension("photo.gif").is_err());
        assert!(UploadService::normalized_extension("photo.svg").is_err());
        assert!(UploadService::normalized_extension("photo").is_err());
        assert!(UploadService::normalized_extension("photo.png.exe").is_err());

        assert_eq!(
            UploadService::normalized_extension("photo.PNG").unwrap(),
            ".png"
        );
        assert_eq!(
            UploadService::normalized_extension("photo.JpEg").unwrap(),
            ".jpeg"
        );
        assert_eq!(
            UploadService::normalized_extension("a.b.webp").unwrap(),
            ".webp"
        );
    }

    #[test]
    fn test_invalid_file_type_error_kind() {
        let err = UploadService::normalized_extension("photo.gif").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidFileType(_)));
    }

    #[tokio::test]
    async fn test_save_image_writes_file_and_returns_url() {
        let dir = tempfile::tempdir().unwrap();
        let svc = UploadService::new(
            dir.path().to_path_buf(),
            "/uploads/services".to_string(),
        );

        let url = svc.save_image("banner.WEBP", b"not really webp").await.unwrap();
        assert!(url.starts_with("/uploads/services/"));
        assert!(url.ends_with(".webp"));

        let stored = dir.path().join(url.rsplit('/').next().unwrap());
        let bytes = tokio::fs::read(stored).await.unwrap();
        assert_eq!(bytes, b"not really webp");
    }

    #[tokio::test]
    async fn test_save_image_generates_unique_names() {
        let dir = tempfile::tempdir().unwrap();
        let svc = UploadService::new(dir.path().to_path_buf(), "/uploads/services".into());

        let a = svc.save_image("x.png", b"a").await.unwrap();
        let b = svc.save_image("x.png", b"b").await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_save_image_rejects_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let svc = UploadService::new(dir.path().to_path_buf(), "/uploads/services".into());

        assert!(svc.save_image("photo.gif", b"gif89a").await.is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
