//! Shared test utilities.
//!
//! - [`setup_content`] writes a complete five-artwork content directory with
//!   real (tiny) PNG files and sidecars into a temp dir.
//! - [`sample_catalog`] builds an in-memory catalog without touching disk.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::catalog::{Artwork, ArtworkMetadata, ContentCatalog, ImageHandle};
use crate::gallery::ArtworkId;

/// Write a gradient PNG of the given size (format follows the extension).
pub fn write_test_image(path: &Path, width: u32, height: u32) {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    img.save(path).unwrap();
}

/// Files in the content fixture: `(stem, width, height, sidecar)`.
pub const FIXTURE_ARTWORKS: [(&str, u32, u32, Option<&str>); 5] = [
    (
        "001-Still-Life",
        120,
        90,
        Some("Still Life with Lemons\nClara Peeters\n1612\n"),
    ),
    ("002-Harbour-at-Dawn", 90, 120, Some("Harbour at Dawn\nMina Ito\n1921")),
    ("003-Blue-Harbour", 100, 100, Some("\nAnonymous\n")),
    ("004-Dunes", 160, 90, Some("Dunes\nAna Sol\n1974")),
    ("005-Night-Garden", 80, 140, None),
];

/// A temp content directory holding all five artworks.
pub fn setup_content() -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (stem, width, height, sidecar) in FIXTURE_ARTWORKS {
        write_test_image(&tmp.path().join(format!("{stem}.png")), width, height);
        if let Some(text) = sidecar {
            fs::write(tmp.path().join(format!("{stem}.txt")), text).unwrap();
        }
    }
    tmp
}

/// An artwork with predictable values derived from its id.
pub fn sample_artwork(n: u32) -> Artwork {
    let file_name = format!("{n:03}-artwork.png");
    Artwork {
        id: ArtworkId::try_from(n).unwrap(),
        image: ImageHandle {
            path: PathBuf::from("content").join(&file_name),
            file_name,
            width: 800,
            height: if n % 2 == 0 { 1000 } else { 600 },
        },
        metadata: ArtworkMetadata {
            title: format!("Artwork {n}"),
            artist_name: format!("Artist {n}"),
            year: (1900 + n).to_string(),
        },
    }
}

pub fn sample_catalog() -> ContentCatalog {
    ContentCatalog::new((1..=5).map(sample_artwork).collect()).unwrap()
}
