//! Content directory scanning.
//!
//! Turns a content directory into a [`ContentCatalog`] plus the gallery
//! configuration. The directory is flat:
//!
//! ```text
//! content/
//! ├── config.toml              # Optional configuration
//! ├── 001-Still-Life.jpg       # Artwork 1
//! ├── 001-Still-Life.txt       # Its title / artist / year
//! ├── 002-Harbour.png
//! ├── 003-Dunes.webp
//! ├── 004-Portrait.jpg
//! ├── 005-Night-Garden.tif
//! └── notes.png                # Unnumbered: not part of the gallery
//! ```
//!
//! ## Validation
//!
//! - Every id from 1 to 5 must have exactly one image.
//! - Numbered images outside that range are an error rather than being
//!   silently dropped.
//! - Unnumbered images are skipped.

use crate::catalog::{Artwork, CatalogError, ContentCatalog, ImageHandle};
use crate::config::{self, SiteConfig};
use crate::gallery::{ArtworkId, CATALOG_SIZE};
use crate::imaging::{BackendError, ImageBackend, RustBackend, is_supported_image};
use crate::metadata;
use crate::naming::parse_entry_name;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Image error: {0}")]
    Imaging(#[from] BackendError),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Artwork number {0} is outside 1..={max}: {1}", max = CATALOG_SIZE)]
    OutOfRange(u32, PathBuf),
    #[error("Duplicate artwork number {0}: {1} and {2}")]
    DuplicateNumber(ArtworkId, PathBuf, PathBuf),
}

/// Result of scanning a content directory.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub catalog: ContentCatalog,
    /// Image files without a number prefix, relative to the content root.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
    pub config: SiteConfig,
}

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    scan_with_backend(&RustBackend::new(), root)
}

/// Scan using a specific backend (allows testing with mock).
pub fn scan_with_backend(backend: &impl ImageBackend, root: &Path) -> Result<Manifest, ScanError> {
    let config = config::load_config(root)?;

    let mut found: BTreeMap<ArtworkId, PathBuf> = BTreeMap::new();
    let mut skipped = Vec::new();

    for path in collect_images(root)? {
        let stem = file_stem(&path);
        let Some(number) = parse_entry_name(&stem).number else {
            tracing::debug!("Skipping unnumbered image {}", path.display());
            skipped.push(file_name(&path));
            continue;
        };
        let Some(id) = ArtworkId::new(i64::from(number)) else {
            return Err(ScanError::OutOfRange(number, path));
        };
        if let Some(existing) = found.get(&id) {
            return Err(ScanError::DuplicateNumber(id, existing.clone(), path));
        }
        found.insert(id, path);
    }

    let artworks = found
        .into_iter()
        .map(|(id, path)| build_artwork(backend, id, path))
        .collect::<Result<Vec<_>, _>>()?;

    let catalog = ContentCatalog::new(artworks)?;

    Ok(Manifest {
        catalog,
        skipped,
        config,
    })
}

fn build_artwork(
    backend: &impl ImageBackend,
    id: ArtworkId,
    path: PathBuf,
) -> Result<Artwork, ScanError> {
    let dims = backend.identify(&path)?;
    let filename_title = parse_entry_name(&file_stem(&path)).display_title;
    let sidecar = metadata::read_sidecar(&path);
    let metadata = metadata::resolve_metadata(sidecar.as_ref(), &filename_title);

    tracing::debug!(
        "Artwork {}: {} ({}x{})",
        id,
        path.display(),
        dims.width,
        dims.height
    );

    Ok(Artwork {
        id,
        image: ImageHandle {
            file_name: file_name(&path),
            path,
            width: dims.width,
            height: dims.height,
        },
        metadata,
    })
}

/// Supported image files directly inside `root`, sorted by name.
fn collect_images(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut images = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}
