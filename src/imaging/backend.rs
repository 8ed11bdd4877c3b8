//! Image processing backend trait and shared types.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend). Tests use the recording
//! `MockBackend` below so scanning and processing logic can be checked without
//! decoding pixels.

use super::params::ResizeParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Operations the gallery needs from an image library.
///
/// `Sync` so one backend can be shared by rayon workers.
pub trait ImageBackend: Sync {
    /// Get image dimensions without decoding the pixels.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Decode, resize and re-encode an image.
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;
}
