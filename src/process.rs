//! Display copies of the artworks.
//!
//! Originals straight from a scanner or camera are far larger than a screen.
//! Each artwork is re-encoded once so that its longer edge fits
//! `images.max_edge`, in a format every browser can show:
//!
//! | Source | Display copy |
//! |---|---|
//! | `.jpg` / `.jpeg` | `.jpg` at `images.quality` |
//! | `.png`, `.tif` / `.tiff` | `.png` |
//! | `.webp` | `.webp` |
//!
//! ## Output Structure
//!
//! ```text
//! dist/images/
//! ├── 001-Still-Life.jpg
//! ├── 002-Harbour.png
//! └── ...
//! ```
//!
//! ## Parallel Processing
//!
//! The five artworks are processed in parallel using
//! [rayon](https://docs.rs/rayon); the pool size comes from
//! `processing.max_processes`.

use crate::catalog::{Artwork, ContentCatalog, ImageHandle};
use crate::config::SiteConfig;
use crate::gallery::ArtworkId;
use crate::imaging::{
    BackendError, ImageBackend, Quality, ResizeParams, RustBackend, display_extension, fit_within,
};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory (inside the output root) that holds the displayed images.
pub const IMAGES_DIR: &str = "images";

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("Source image not found: {0}")]
    SourceNotFound(PathBuf),
}

/// Configuration for image processing
#[derive(Debug, Clone)]
pub struct ProcessConfig {
    pub max_edge: u32,
    pub quality: u32,
}

impl ProcessConfig {
    pub fn from_site_config(config: &SiteConfig) -> Self {
        Self {
            max_edge: config.images.max_edge,
            quality: config.images.quality,
        }
    }
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self::from_site_config(&SiteConfig::default())
    }
}

/// What happened to one artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedArtwork {
    pub id: ArtworkId,
    /// Source file name.
    pub source: String,
    /// Display copy file name, inside the images directory.
    pub output: String,
    pub original: (u32, u32),
    pub width: u32,
    pub height: u32,
}

impl ProcessedArtwork {
    pub fn was_downscaled(&self) -> bool {
        self.original != (self.width, self.height)
    }
}

#[derive(Debug)]
pub struct ProcessResult {
    /// The input catalog, re-pointed at the display copies.
    pub catalog: ContentCatalog,
    /// One record per artwork, in id order.
    pub artworks: Vec<ProcessedArtwork>,
}

pub fn process(
    catalog: &ContentCatalog,
    images_dir: &Path,
    config: &ProcessConfig,
) -> Result<ProcessResult, ProcessError> {
    process_with_backend(&RustBackend::new(), catalog, images_dir, config)
}

/// Process images using a specific backend (allows testing with mock).
pub fn process_with_backend(
    backend: &impl ImageBackend,
    catalog: &ContentCatalog,
    images_dir: &Path,
    config: &ProcessConfig,
) -> Result<ProcessResult, ProcessError> {
    std::fs::create_dir_all(images_dir)?;

    let artworks = catalog
        .artworks()
        .par_iter()
        .map(|artwork| process_artwork(backend, artwork, images_dir, config))
        .collect::<Result<Vec<_>, _>>()?;

    let catalog = catalog.map_assets(|artwork| {
        let processed = &artworks[artwork.id.index()];
        ImageHandle {
            path: images_dir.join(&processed.output),
            file_name: processed.output.clone(),
            width: processed.width,
            height: processed.height,
        }
    });

    Ok(ProcessResult { catalog, artworks })
}

fn process_artwork(
    backend: &impl ImageBackend,
    artwork: &Artwork,
    images_dir: &Path,
    config: &ProcessConfig,
) -> Result<ProcessedArtwork, ProcessError> {
    let source = &artwork.image.path;
    if !source.exists() {
        return Err(ProcessError::SourceNotFound(source.clone()));
    }

    let original = (artwork.image.width, artwork.image.height);
    let (width, height) = fit_within(original, config.max_edge);

    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| format!("{:03}", artwork.id.get()));
    let output = format!("{}.{}", stem, display_extension(source));

    tracing::debug!(
        "Artwork {}: {}x{} -> {} ({}x{})",
        artwork.id,
        original.0,
        original.1,
        output,
        width,
        height
    );

    backend.resize(&ResizeParams {
        source: source.clone(),
        output: images_dir.join(&output),
        width,
        height,
        quality: Quality::new(config.quality),
    })?;

    Ok(ProcessedArtwork {
        id: artwork.id,
        source: artwork.image.file_name.clone(),
        output,
        original,
        width,
        height,
    })
}

/// Copy the originals unchanged into `images_dir` (for `build --no-process`).
pub fn copy_originals(
    catalog: &ContentCatalog,
    images_dir: &Path,
) -> Result<ContentCatalog, ProcessError> {
    std::fs::create_dir_all(images_dir)?;

    for artwork in catalog.artworks() {
        let source = &artwork.image.path;
        if !source.exists() {
            return Err(ProcessError::SourceNotFound(source.clone()));
        }
        if display_extension(source) != source_extension(source) {
            tracing::warn!(
                "{} is copied as is; browsers may not display it",
                artwork.image.file_name
            );
        }
        std::fs::copy(source, images_dir.join(&artwork.image.file_name))?;
    }

    Ok(catalog.map_assets(|artwork| ImageHandle {
        path: images_dir.join(&artwork.image.file_name),
        ..artwork.image.clone()
    }))
}

fn source_extension(path: &Path) -> String {
    match path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .as_deref()
    {
        Some("jpeg") => "jpg".to_string(),
        Some(ext) => ext.to_string(),
        None => String::new(),
    }
}
