//! Local media storage.
//!
//! Items only keep a storage-relative path (`menu_images/<file>`); the file
//! itself lives under the media root and is served at the media URL.

use std::path::{Path, PathBuf};

use lemon_shared::config::MediaSettings;
use lemon_shared::constants::{IMAGE_PATH_MAX_LENGTH, MENU_IMAGE_UPLOAD_DIR};
use lemon_shared::utils::join_url;
use thiserror::Error;
use tokio::fs;
use tracing::info;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct MediaStorage {
    root: PathBuf,
    base_url: String,
}

impl MediaStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
        }
    }

    pub fn from_settings(settings: &MediaSettings) -> Self {
        Self::new(&settings.root, &settings.url)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Public URL for a stored reference.
    pub fn url(&self, stored_path: &str) -> String {
        join_url(&self.base_url, stored_path)
    }

    /// Writes `bytes` under the upload directory and returns the stored path.
    /// An existing file is never overwritten; a random suffix is added instead.
    pub async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<String, StorageError> {
        let (stem, ext) = sanitize_file_name(file_name)?;
        let dir = self.root.join(MENU_IMAGE_UPLOAD_DIR);
        fs::create_dir_all(&dir).await?;

        let mut candidate = fit_name(&stem, &ext, None);
        while fs::try_exists(dir.join(&candidate)).await? {
            let suffix = Uuid::new_v4().simple().to_string();
            candidate = fit_name(&stem, &ext, Some(&suffix[..7]));
        }

        fs::write(dir.join(&candidate), bytes).await?;
        let stored = format!("{}/{}", MENU_IMAGE_UPLOAD_DIR, candidate);
        info!("Stored media file {}", stored);
        Ok(stored)
    }

    /// Copies a local file into storage.
    pub async fn save_from_path(&self, source: &Path) -> Result<String, StorageError> {
        let file_name = source
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| StorageError::InvalidFileName(source.display().to_string()))?;
        let bytes = fs::read(source).await?;
        self.save(file_name, &bytes).await
    }
}

/// Keeps only the final path component and a conservative character set.
fn sanitize_file_name(file_name: &str) -> Result<(String, String), StorageError> {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    let cleaned: String = base
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    let (stem, ext) = match cleaned.rsplit_once('.') {
        Some((stem, ext)) => (stem.to_string(), ext.to_ascii_lowercase()),
        None => (cleaned.clone(), String::new()),
    };

    let stem = stem.trim_matches('.').to_string();
    if stem.is_empty() {
        return Err(StorageError::InvalidFileName(file_name.to_string()));
    }
    Ok((stem, ext))
}

/// Builds `stem[_suffix][.ext]`, truncating the stem so the stored path fits the column.
fn fit_name(stem: &str, ext: &str, suffix: Option<&str>) -> String {
    let tail = match (suffix, ext.is_empty()) {
        (Some(s), false) => format!("_{s}.{ext}"),
        (Some(s), true) => format!("_{s}"),
        (None, false) => format!(".{ext}"),
        (None, true) => String::new(),
    };
    let budget = IMAGE_PATH_MAX_LENGTH
        .saturating_sub(MENU_IMAGE_UPLOAD_DIR.len() + 1)
        .saturating_sub(tail.len());
    let stem: String = stem.chars().take(budget).collect();
    format!("{stem}{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_storage() -> MediaStorage {
        let root = std::env::temp_dir().join(format!("lemon-media-{}", Uuid::new_v4()));
        MediaStorage::new(root, "/media/")
    }

    #[test]
    fn test_url() {
        let storage = MediaStorage::new("media", "/media/");
        assert_eq!(storage.url("menu_images/salad.jpg"), "/media/menu_images/salad.jpg");
        assert_eq!(storage.url("/menu_images/salad.jpg"), "/media/menu_images/salad.jpg");
    }

    #[test]
    fn test_sanitize_strips_directories() {
        let (stem, ext) = sanitize_file_name("../../etc/Greek Salad.JPG").unwrap();
        assert_eq!(stem, "Greek_Salad");
        assert_eq!(ext, "jpg");
        assert!(sanitize_file_name("../").is_err());
        assert!(sanitize_file_name(".jpg").is_err());
    }

    #[test]
    fn test_long_names_fit_column() {
        let name = fit_name(&"a".repeat(200), "jpeg", Some("abcdefg"));
        assert!(MENU_IMAGE_UPLOAD_DIR.len() + 1 + name.len() <= IMAGE_PATH_MAX_LENGTH);
        assert!(name.ends_with("_abcdefg.jpeg"));
    }

    #[tokio::test]
    async fn test_save_never_overwrites() {
        let storage = temp_storage();

        let first = storage.save("salad.jpg", b"one").await.unwrap();
        let second = storage.save("salad.jpg", b"two").await.unwrap();

        assert_eq!(first, "menu_images/salad.jpg");
        assert_ne!(first, second);
        assert!(second.starts_with("menu_images/salad_"));
        assert_eq!(fs::read(storage.root().join(&first)).await.unwrap(), b"one");
        assert_eq!(fs::read(storage.root().join(&second)).await.unwrap(), b"two");

        fs::remove_dir_all(storage.root()).await.unwrap();
    }
}
