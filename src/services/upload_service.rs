use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::fs;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Per-file upload ceiling, enforced before anything touches the disk.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

const ALLOWED_EXTS: [&str; 7] = ["pdf", "doc", "docx", "jpg", "jpeg", "png", "webp"];

/// Which per-entity subfolder an upload lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Candidates,
    Employers,
    Agencies,
}

impl UploadKind {
    pub fn dir(&self) -> &'static str {
        match self {
            UploadKind::Candidates => "candidates",
            UploadKind::Employers => "employers",
            UploadKind::Agencies => "agencies",
        }
    }
}

/// Validates the upload and returns the lowercased extension to store under.
/// Does not touch the filesystem, so a rejected file is never written.
pub fn checked_extension(filename: &str, data: &Bytes) -> Result<String> {
    if data.len() > MAX_UPLOAD_BYTES {
        return Err(Error::BadRequest(format!(
            "File exceeds the {} MB limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )));
    }

    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|| "bin".to_string());

    if !ALLOWED_EXTS.contains(&ext.as_str()) {
        return Err(Error::BadRequest(format!(
            "File type .{} is not allowed",
            ext
        )));
    }

    if ext == "pdf" && !data.starts_with(b"%PDF") {
        return Err(Error::BadRequest("Invalid PDF file content".into()));
    }
    if (ext == "jpg" || ext == "jpeg") && !data.starts_with(&[0xFF, 0xD8]) {
        return Err(Error::BadRequest("Invalid JPEG file content".into()));
    }
    if ext == "png" && !data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        return Err(Error::BadRequest("Invalid PNG file content".into()));
    }

    Ok(ext)
}

/// Disk-backed file intake. Files are stored under
/// `<root>/<kind>/<uuid>.<ext>` and referenced from records by the relative
/// path `uploads/<kind>/<uuid>.<ext>`; names are random, so concurrent
/// registrations never collide.
#[derive(Debug, Clone)]
pub struct UploadService {
    root: PathBuf,
}

impl UploadService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub async fn save(&self, kind: UploadKind, filename: &str, data: &Bytes) -> Result<String> {
        let ext = checked_extension(filename, data)?;

        let dir = self.root.join(kind.dir());
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| Error::Internal(e.to_string()))?;

        let safe_filename = format!("{}.{}", Uuid::new_v4(), ext);
        let file_path = dir.join(&safe_filename);

        fs::write(&file_path, data).await.map_err(|e| {
            tracing::error!("Failed to write upload {}: {}", file_path.display(), e);
            Error::Internal(format!("Failed to save file: {}", e))
        })?;

        Ok(format!("uploads/{}/{}", kind.dir(), safe_filename))
    }

    /// Compensating delete for files written earlier in a request whose
    /// record insert failed. Best effort: a miss is logged, not surfaced.
    pub async fn remove(&self, relative_path: &str) {
        let Some(suffix) = relative_path.strip_prefix("uploads/") else {
            tracing::warn!("Refusing to remove non-upload path: {}", relative_path);
            return;
        };
        let path = self.root.join(suffix);
        if let Err(e) = fs::remove_file(&path).await {
            tracing::warn!("Failed to remove upload {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root() -> PathBuf {
        std::env::temp_dir().join(format!("registry-uploads-{}", Uuid::new_v4()))
    }

    #[test]
    fn rejects_oversized_files() {
        let data = Bytes::from(vec![0u8; MAX_UPLOAD_BYTES + 1]);
        assert!(checked_extension("photo.png", &data).is_err());
    }

    #[test]
    fn accepts_exactly_at_the_limit() {
        let mut payload = vec![0u8; MAX_UPLOAD_BYTES];
        payload[..4].copy_from_slice(&[0x89, 0x50, 0x4E, 0x47]);
        let data = Bytes::from(payload);
        assert_eq!(checked_extension("photo.png", &data).unwrap(), "png");
    }

    #[test]
    fn rejects_disallowed_extensions() {
        let data = Bytes::from_static(b"#!/bin/sh");
        assert!(checked_extension("script.sh", &data).is_err());
        assert!(checked_extension("noextension", &data).is_err());
    }

    #[test]
    fn rejects_magic_byte_mismatches() {
        let data = Bytes::from_static(b"plain text pretending");
        assert!(checked_extension("scan.pdf", &data).is_err());
        assert!(checked_extension("photo.jpg", &data).is_err());
        assert!(checked_extension("photo.png", &data).is_err());
    }

    #[test]
    fn lowercases_the_extension() {
        let data = Bytes::from_static(b"%PDF-1.7 rest");
        assert_eq!(checked_extension("Passport.PDF", &data).unwrap(), "pdf");
    }

    #[tokio::test]
    async fn save_writes_under_kind_folder_and_returns_relative_path() {
        let root = temp_root();
        let service = UploadService::new(&root);
        let data = Bytes::from_static(b"%PDF-1.4 content");

        let stored = service
            .save(UploadKind::Candidates, "passport.pdf", &data)
            .await
            .unwrap();

        assert!(stored.starts_with("uploads/candidates/"));
        assert!(stored.ends_with(".pdf"));

        let on_disk = root.join(stored.strip_prefix("uploads/").unwrap());
        let written = tokio::fs::read(&on_disk).await.unwrap();
        assert_eq!(written, b"%PDF-1.4 content");

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }

    #[tokio::test]
    async fn rejected_files_are_never_written() {
        let root = temp_root();
        let service = UploadService::new(&root);
        let data = Bytes::from(vec![0u8; MAX_UPLOAD_BYTES + 1]);

        assert!(service
            .save(UploadKind::Employers, "license.pdf", &data)
            .await
            .is_err());
        assert!(!root.exists());
    }

    #[tokio::test]
    async fn remove_deletes_previously_saved_files() {
        let root = temp_root();
        let service = UploadService::new(&root);
        let data = Bytes::from_static(b"%PDF-1.4");

        let stored = service
            .save(UploadKind::Agencies, "license.pdf", &data)
            .await
            .unwrap();
        let on_disk = root.join(stored.strip_prefix("uploads/").unwrap());
        assert!(on_disk.exists());

        service.remove(&stored).await;
        assert!(!on_disk.exists());

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }
}
