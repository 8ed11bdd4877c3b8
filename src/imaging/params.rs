//! Parameter types for image operations.
//!
//! These structs describe *what* to do. The [`backend`](super::backend) does
//! the pixel work, so a mock backend can stand in for it in tests.

use std::path::PathBuf;

/// Quality setting for lossy encoding (1-100). Clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Re-encode `source` into `output` at exactly `width`x`height`.
///
/// The output format follows the extension of `output`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub quality: Quality,
}
