//! Pure Rust image backend built on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image::ImageReader` |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` at the configured quality |
//! | Encode → PNG, WebP | `DynamicImage::save_with_format` (lossless) |
//!
//! Browsers cannot show TIFF, so TIFF sources get PNG display copies
//! (see [`display_extension`]).

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::ResizeParams;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;

/// Source extensions that are decodable with the compiled-in features.
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tif", "tiff", "webp"];

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

/// Whether `path` names an image the gallery can read (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    lowercase_extension(path).is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Extension of the display copy made for a source image.
pub fn display_extension(source: &Path) -> &'static str {
    match lowercase_extension(source).as_deref() {
        Some("jpg" | "jpeg") => "jpg",
        Some("webp") => "webp",
        _ => "png",
    }
}

pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Save `img` at `path`, picking the encoder from the extension.
fn save_image(img: &DynamicImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    let failed = |e: image::ImageError| {
        BackendError::ProcessingFailed(format!("Failed to encode {}: {}", path.display(), e))
    };

    match lowercase_extension(path).as_deref() {
        Some("jpg" | "jpeg") => {
            let file = std::fs::File::create(path)?;
            let writer = std::io::BufWriter::new(file);
            let encoder = JpegEncoder::new_with_quality(writer, quality as u8);
            // JPEG has no alpha channel.
            DynamicImage::ImageRgb8(img.to_rgb8())
                .write_with_encoder(encoder)
                .map_err(failed)
        }
        Some("png") => img.save_with_format(path, ImageFormat::Png).map_err(failed),
        Some("webp") => DynamicImage::ImageRgba8(img.to_rgba8())
            .save_with_format(path, ImageFormat::WebP)
            .map_err(failed),
        other => Err(BackendError::ProcessingFailed(format!(
            "Unsupported output format: {}",
            other.unwrap_or("(none)")
        ))),
    }
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::ProcessingFailed(format!(
                "Failed to read dimensions of {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let resized = if (img.width(), img.height()) == (params.width, params.height) {
            img
        } else {
            img.resize_exact(params.width, params.height, FilterType::Lanczos3)
        };
        save_image(&resized, &params.output, params.quality.value())
    }
}
