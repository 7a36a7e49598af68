//! Error types for the artwork flow
//!
//! Upload failures are per-file and non-fatal: the upload driver records
//! them and moves on to the next file. Session persistence failures are the
//! only errors that surface from a whole upload invocation.

/// Failure reported by the storage collaborator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("storage rejected {file_name}: {reason}")]
pub struct StoreError {
    /// Name the upload was attempted under
    pub file_name: String,
    /// Collaborator-supplied reason
    pub reason: String,
}

impl StoreError {
    /// Create a store error
    #[inline]
    #[must_use]
    pub fn new(file_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            reason: reason.into(),
        }
    }
}

/// Session persistence error
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Underlying key/value store I/O failure
    #[error("session store io: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted list could not be (de)serialized
    #[error("session store serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Artwork flow error type
#[derive(Debug, thiserror::Error)]
pub enum ArtworkError {
    /// File extension not in the accepted set
    #[error("unsupported file type: {file_name}")]
    UnsupportedExtension {
        /// Offending file name
        file_name: String,
    },

    /// File exceeds the per-file size cap
    #[error("{file_name} is {size_bytes} bytes, over the {max_bytes}-byte limit")]
    FileTooLarge {
        /// Offending file name
        file_name: String,
        /// Actual size
        size_bytes: u64,
        /// Allowed maximum
        max_bytes: u64,
    },

    /// Storage collaborator failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Session persistence failure
    #[error(transparent)]
    Session(#[from] SessionError),
}
