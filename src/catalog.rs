//! The artwork catalog: one image and one metadata record per id.
//!
//! The navigation core only needs the read-only [`Catalog`] trait. The
//! concrete [`ContentCatalog`] is produced by [`scan`](crate::scan) from the
//! content directory and then re-pointed at display copies by
//! [`process`](crate::process).

use crate::gallery::{ArtworkId, CATALOG_SIZE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("No artwork for id {0}")]
    Missing(ArtworkId),
    #[error("Artwork id {0} appears more than once")]
    Duplicate(ArtworkId),
}

/// Title, artist and year of an artwork, shown under the image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkMetadata {
    pub title: String,
    pub artist_name: String,
    pub year: String,
}

/// Location and pixel size of the image displayed for an artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHandle {
    /// Where the image currently lives on disk.
    pub path: PathBuf,
    /// File name used when referencing the image from a page.
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

impl ImageHandle {
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f64 / self.height as f64
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    pub image: ImageHandle,
    pub metadata: ArtworkMetadata,
}

/// Read-only id → image/metadata mapping consumed by the gallery.
pub trait Catalog {
    fn asset(&self, id: ArtworkId) -> &ImageHandle;

    fn metadata(&self, id: ArtworkId) -> &ArtworkMetadata;
}

/// A complete catalog: exactly one artwork for every id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentCatalog {
    artworks: Vec<Artwork>,
}

impl ContentCatalog {
    /// Build a catalog, ordering artworks by id.
    ///
    /// Fails unless every id in `1..=CATALOG_SIZE` appears exactly once.
    pub fn new(mut artworks: Vec<Artwork>) -> Result<Self, CatalogError> {
        artworks.sort_by_key(|a| a.id);
        for pair in artworks.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(CatalogError::Duplicate(pair[0].id));
            }
        }
        for id in ArtworkId::all() {
            if artworks.get(id.index()).map(|a| a.id) != Some(id) {
                return Err(CatalogError::Missing(id));
            }
        }
        debug_assert_eq!(artworks.len(), CATALOG_SIZE as usize);
        Ok(Self { artworks })
    }

    /// Artworks in id order.
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn get(&self, id: ArtworkId) -> &Artwork {
        &self.artworks[id.index()]
    }

    /// Same metadata, new image handles.
    pub fn map_assets<F>(&self, mut f: F) -> ContentCatalog
    where
        F: FnMut(&Artwork) -> ImageHandle,
    {
        let artworks = self
            .artworks
            .iter()
            .map(|a| Artwork {
                id: a.id,
                image: f(a),
                metadata: a.metadata.clone(),
            })
            .collect();
        ContentCatalog { artworks }
    }
}

impl Catalog for ContentCatalog {
    fn asset(&self, id: ArtworkId) -> &ImageHandle {
        &self.get(id).image
    }

    fn metadata(&self, id: ArtworkId) -> &ArtworkMetadata {
        &self.get(id).metadata
    }
}
