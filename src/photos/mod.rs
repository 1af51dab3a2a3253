//! Disk-backed photo store.
//!
//! The roster core treats this as an opaque collaborator: hand it the
//! upload bytes and declared media type, get back a URL the static file
//! layer serves under `/uploads`.

use std::path::{Path, PathBuf};

/// Maximum accepted photo size: 5 MiB.
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// Failure modes of the photo store.
#[derive(Debug)]
pub enum PhotoStoreError {
    /// Declared media type other than JPEG or PNG
    UnsupportedFormat(String),
    /// Upload exceeds [`MAX_PHOTO_BYTES`]; carries the offending size
    TooLarge(usize),
    /// Underlying filesystem failure
    Io(std::io::Error),
}

impl std::fmt::Display for PhotoStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhotoStoreError::UnsupportedFormat(media_type) => {
                write!(f, "unsupported media type: {}", media_type)
            }
            PhotoStoreError::TooLarge(size) => {
                write!(f, "upload of {} bytes exceeds {} bytes", size, MAX_PHOTO_BYTES)
            }
            PhotoStoreError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for PhotoStoreError {}

impl From<std::io::Error> for PhotoStoreError {
    fn from(err: std::io::Error) -> Self {
        PhotoStoreError::Io(err)
    }
}

/// Stores uploaded photos as uniquely-named files in one directory.
pub struct PhotoStore {
    uploads_dir: PathBuf,
}

impl PhotoStore {
    /// Open a store rooted at the given directory, creating it if needed.
    pub async fn open(uploads_dir: &Path) -> std::io::Result<Self> {
        tokio::fs::create_dir_all(uploads_dir).await?;
        Ok(Self {
            uploads_dir: uploads_dir.to_path_buf(),
        })
    }

    /// Directory the static file layer serves as `/uploads`.
    pub fn dir(&self) -> &Path {
        &self.uploads_dir
    }

    /// Validate and persist an uploaded photo, returning its public URL.
    ///
    /// Only JPEG and PNG are accepted, up to [`MAX_PHOTO_BYTES`].
    pub async fn store(
        &self,
        bytes: &[u8],
        media_type: &str,
    ) -> Result<String, PhotoStoreError> {
        let extension = match media_type {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/png" => "png",
            other => return Err(PhotoStoreError::UnsupportedFormat(other.to_string())),
        };
        if bytes.len() > MAX_PHOTO_BYTES {
            return Err(PhotoStoreError::TooLarge(bytes.len()));
        }

        let filename = format!("{}.{}", uuid::Uuid::new_v4(), extension);
        tokio::fs::write(self.uploads_dir.join(&filename), bytes).await?;
        tracing::debug!("Stored photo {} ({} bytes)", filename, bytes.len());

        Ok(format!("/uploads/{}", filename))
    }
}
