//! Artwork storage collaborator and the sequential upload driver
//!
//! [`ArtworkStore`] is the seam to the external object store: upload bytes
//! under a name, resolve a public URL for a stored name. The driver
//! validates each file, generates a unique stored name, and uploads files
//! strictly one at a time; a failed file is reported and skipped, never
//! fatal to the rest of the batch.

use crate::error::{ArtworkError, StoreError};
use crate::session::ArtworkSession;
use async_trait::async_trait;
use rand::distr::{Alphanumeric, SampleString};
use std::sync::Arc;

/// File extensions the order flow accepts
pub const ACCEPTED_EXTENSIONS: &[&str] = &["ai", "eps", "pdf", "png", "jpg", "jpeg"];

/// Per-file size cap: 250 MB
pub const MAX_FILE_BYTES: u64 = 250 * 1024 * 1024;

/// External object storage for uploaded artwork
#[async_trait]
pub trait ArtworkStore: Send + Sync {
    /// Upload bytes under `file_name`; returns the stored name
    async fn upload(&self, file_name: &str, bytes: &[u8]) -> Result<String, StoreError>;

    /// Public URL for a stored name
    fn public_url(&self, stored_name: &str) -> String;
}

/// A file handed to the upload driver
#[derive(Debug, Clone)]
pub struct ArtworkFile {
    /// Original file name, extension included
    pub name: String,
    /// File contents
    pub bytes: Vec<u8>,
}

impl ArtworkFile {
    /// Create a file from a name and contents
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// One file that failed to upload
#[derive(Debug)]
pub struct UploadFailure {
    /// Original file name, for the user-visible notice
    pub file_name: String,
    /// What went wrong
    pub error: ArtworkError,
}

/// Outcome of one upload invocation
#[derive(Debug, Default)]
pub struct UploadReport {
    /// Public URLs of the files that made it, in input order
    pub uploaded: Vec<String>,
    /// Per-file failures, in input order
    pub failures: Vec<UploadFailure>,
}

impl UploadReport {
    /// Whether every file uploaded
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Lowercase extension of a file name, if it has one
#[must_use]
pub fn file_extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Unique stored name: unix-millis timestamp, random token, original extension
#[must_use]
pub fn stored_file_name(original: &str) -> String {
    let ext = file_extension(original).unwrap_or_else(|| "bin".to_string());
    let token = Alphanumeric
        .sample_string(&mut rand::rng(), 12)
        .to_ascii_lowercase();
    format!("{}-{}.{}", chrono::Utc::now().timestamp_millis(), token, ext)
}

/// Validate a name/size pair against the accepted extensions and size cap
pub fn validate_upload(file_name: &str, size_bytes: u64) -> Result<(), ArtworkError> {
    match file_extension(file_name) {
        Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => {
            return Err(ArtworkError::UnsupportedExtension {
                file_name: file_name.to_string(),
            })
        }
    }
    if size_bytes > MAX_FILE_BYTES {
        return Err(ArtworkError::FileTooLarge {
            file_name: file_name.to_string(),
            size_bytes,
            max_bytes: MAX_FILE_BYTES,
        });
    }
    Ok(())
}

/// Validate a file against the accepted extensions and size cap
#[inline]
pub fn validate_file(file: &ArtworkFile) -> Result<(), ArtworkError> {
    validate_upload(&file.name, file.bytes.len() as u64)
}

/// Sequential upload driver
///
/// Owns the storage seam and the persisted session list of uploaded URLs.
pub struct ArtworkUploader {
    store: Arc<dyn ArtworkStore>,
    session: ArtworkSession,
}

impl ArtworkUploader {
    /// Create a driver over a store and a loaded session
    #[must_use]
    pub fn new(store: Arc<dyn ArtworkStore>, session: ArtworkSession) -> Self {
        Self { store, session }
    }

    /// URLs uploaded so far, this session and prior ones
    #[inline]
    #[must_use]
    pub fn uploaded_urls(&self) -> &[String] {
        self.session.urls()
    }

    /// Upload a batch of files, one at a time
    ///
    /// Each file is validated, renamed, and uploaded before the next
    /// begins. A failing file is logged, recorded in the report, and
    /// skipped. Successful URLs are appended to the session list, which is
    /// persisted once at the end of the invocation.
    ///
    /// # Errors
    /// [`ArtworkError::Session`] when persisting the updated URL list
    /// fails; upload failures themselves are never an `Err`.
    pub async fn upload_all(&mut self, files: Vec<ArtworkFile>) -> Result<UploadReport, ArtworkError> {
        let mut report = UploadReport::default();

        for file in files {
            match self.upload_one(&file).await {
                Ok(url) => {
                    tracing::info!(file = %file.name, %url, "artwork uploaded");
                    report.uploaded.push(url);
                }
                Err(error) => {
                    tracing::warn!(file = %file.name, %error, "artwork upload failed");
                    report.failures.push(UploadFailure {
                        file_name: file.name,
                        error,
                    });
                }
            }
        }

        if !report.uploaded.is_empty() {
            self.session.extend(report.uploaded.iter().cloned())?;
        }
        Ok(report)
    }

    /// Forget a previously uploaded URL
    ///
    /// # Errors
    /// [`ArtworkError::Session`] when persisting the updated list fails.
    pub fn remove(&mut self, url: &str) -> Result<(), ArtworkError> {
        self.session.remove(url)?;
        Ok(())
    }

    async fn upload_one(&self, file: &ArtworkFile) -> Result<String, ArtworkError> {
        validate_file(file)?;
        let stored = self.store.upload(&stored_file_name(&file.name), &file.bytes).await?;
        Ok(self.store.public_url(&stored))
    }
}
