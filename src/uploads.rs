// ABOUTME: Image upload validation, resizing, and on-disk storage
// ABOUTME: Enforces extension/size limits and downscales oversized images
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Image Upload Store
//!
//! Validate-and-resize utility backing the upload endpoints. Uploaded files
//! are checked against an extension allow-list and a size cap, decoded,
//! downscaled to fit the configured bounding box when larger (aspect
//! preserving, Lanczos3), and written under a UUID-derived filename in the
//! upload directory. Stored files are served statically under `/uploads`.

use crate::config::environment::UploadConfig;
use crate::errors::{AppError, AppResult};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// File extensions accepted for upload
const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Metadata about a stored image
#[derive(Debug, Clone, Serialize)]
pub struct ImageInfo {
    /// Stored filename
    pub filename: String,
    /// Public URL under the static prefix
    pub url: String,
    /// File size in bytes
    pub size: u64,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

/// Validated, size-bounded image storage rooted at the upload directory
#[derive(Clone)]
pub struct ImageStore {
    dir: PathBuf,
    max_file_size: usize,
    max_width: u32,
    max_height: u32,
}

impl ImageStore {
    /// Create the store, ensuring the upload directory exists
    ///
    /// # Errors
    ///
    /// Returns an error if the upload directory cannot be created.
    pub fn from_config(upload: &UploadConfig) -> anyhow::Result<Self> {
        fs::create_dir_all(&upload.dir)?;
        Ok(Self {
            dir: upload.dir.clone(),
            max_file_size: upload.max_file_size,
            max_width: upload.max_width,
            max_height: upload.max_height,
        })
    }

    /// Directory uploads are stored in
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Validate an uploaded file by extension and size
    ///
    /// # Errors
    ///
    /// Returns a 400-class error for a disallowed extension or an oversized
    /// payload.
    pub fn validate(&self, filename: &str, content: &[u8]) -> AppResult<String> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(AppError::invalid_input(format!(
                "File type not allowed. Allowed types: {}",
                ALLOWED_EXTENSIONS.join(", ")
            )));
        }

        if content.len() > self.max_file_size {
            return Err(AppError::invalid_input(format!(
                "File too large. Maximum size: {}MB",
                self.max_file_size / (1024 * 1024)
            )));
        }

        Ok(extension)
    }

    /// Validate, decode, downscale when oversized, and store an image.
    /// Returns the public URL of the stored file.
    ///
    /// # Errors
    ///
    /// Returns a 400-class error for validation or decode failures and a
    /// 500-class error when the processed image cannot be written.
    pub fn store(&self, filename: &str, content: &[u8]) -> AppResult<String> {
        let extension = self.validate(filename, content)?;

        let mut image = image::load_from_memory(content)
            .map_err(|e| AppError::invalid_input(format!("Error processing image: {e}")))?;

        if image.width() > self.max_width || image.height() > self.max_height {
            image = image.resize(self.max_width, self.max_height, FilterType::Lanczos3);
        }

        let format = match extension.as_str() {
            "jpg" | "jpeg" => ImageFormat::Jpeg,
            "gif" => ImageFormat::Gif,
            "webp" => ImageFormat::WebP,
            _ => ImageFormat::Png,
        };

        // JPEG has no alpha channel
        if format == ImageFormat::Jpeg {
            image = DynamicImage::ImageRgb8(image.to_rgb8());
        }

        let unique_filename = format!("{}.{extension}", Uuid::new_v4());
        let file_path = self.dir.join(&unique_filename);

        image
            .save_with_format(&file_path, format)
            .map_err(|e| AppError::storage(format!("Failed to save image: {e}")))?;

        debug!(file = %file_path.display(), "Stored uploaded image");
        Ok(format!("/uploads/{unique_filename}"))
    }

    /// Resolve a public image URL to its on-disk path. Only the final path
    /// component is honored, so traversal segments cannot escape the
    /// upload directory.
    fn resolve(&self, image_url: &str) -> Option<PathBuf> {
        let filename = Path::new(image_url).file_name()?;
        Some(self.dir.join(filename))
    }

    /// Delete a stored image; returns false when it does not exist
    #[must_use]
    pub fn delete(&self, image_url: &str) -> bool {
        let Some(path) = self.resolve(image_url) else {
            return false;
        };
        if path.exists() {
            fs::remove_file(&path).is_ok()
        } else {
            false
        }
    }

    /// Get metadata for a stored image, or `None` when absent or unreadable
    #[must_use]
    pub fn info(&self, image_url: &str) -> Option<ImageInfo> {
        let path = self.resolve(image_url)?;
        let metadata = fs::metadata(&path).ok()?;
        let (width, height) = image::image_dimensions(&path).ok()?;

        Some(ImageInfo {
            filename: path.file_name()?.to_string_lossy().into_owned(),
            url: image_url.to_owned(),
            size: metadata.len(),
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store(dir: &Path) -> ImageStore {
        ImageStore::from_config(&UploadConfig {
            dir: dir.to_path_buf(),
            max_file_size: 1024 * 1024,
            max_width: 64,
            max_height: 64,
        })
        .unwrap()
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::new_rgb8(width, height);
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_validate_rejects_bad_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let store = test_store(tmp.path());
        let err = store.validate("malware.exe", b"xx").unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::InvalidInput);
    }

    #[test]
    fn test_validate_rejects_oversized_payload() {
        let tmp = tempfile::tempdir().unwrap();
        let store = test_store(tmp.path());
        let big = vec![0_u8; 2 * 1024 * 1024];
        let err = store.validate("big.png", &big).unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::InvalidInput);
    }

    #[test]
    fn test_store_resizes_oversized_image() {
        let tmp = tempfile::tempdir().unwrap();
        let store = test_store(tmp.path());

        let url = store.store("large.png", &png_bytes(256, 128)).unwrap();
        assert!(url.starts_with("/uploads/"));

        let info = store.info(&url).unwrap();
        assert!(info.width <= 64 && info.height <= 64);
    }

    #[test]
    fn test_store_rejects_undecodable_payload() {
        let tmp = tempfile::tempdir().unwrap();
        let store = test_store(tmp.path());
        let err = store.store("fake.png", b"not an image").unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::InvalidInput);
    }

    #[test]
    fn test_delete_and_info_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = test_store(tmp.path());

        let url = store.store("img.png", &png_bytes(16, 16)).unwrap();
        assert!(store.info(&url).is_some());
        assert!(store.delete(&url));
        assert!(store.info(&url).is_none());
        assert!(!store.delete(&url));
    }

    #[test]
    fn test_resolve_ignores_traversal_segments() {
        let tmp = tempfile::tempdir().unwrap();
        let store = test_store(tmp.path());
        assert!(!store.delete("/uploads/../../etc/passwd"));
    }
}
