//! Sticker Artwork Flow
//!
//! Upload handling for customer-supplied artwork:
//!
//! - [`ArtworkStore`]: seam to the external object store (upload, public URL)
//! - [`ArtworkUploader`]: sequential per-file upload driver with non-fatal
//!   per-file failures
//! - [`ArtworkSession`]: persisted ordered list of uploaded URLs behind a
//!   [`SessionStore`] key/value seam
//! - [`validate_upload`] / [`stored_file_name`]: accepted-extension and
//!   size checks, unique stored-name generation

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod session;
mod store;

pub use error::{ArtworkError, SessionError, StoreError};
pub use session::{ArtworkSession, JsonFileStore, MemoryStore, SessionStore, SESSION_KEY};
pub use store::{
    file_extension, stored_file_name, validate_file, validate_upload, ArtworkFile,
    ArtworkStore, ArtworkUploader, UploadFailure, UploadReport, ACCEPTED_EXTENSIONS,
    MAX_FILE_BYTES,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
