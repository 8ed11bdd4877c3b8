//! Artwork metadata resolution.
//!
//! Every artwork shows three strings: title, artist and year. They come from
//! a sidecar text file next to the image, one field per line:
//!
//! ```text
//! content/001-Still-Life.jpg
//! content/001-Still-Life.txt   ← "Still Life with Lemons\nJ. Vermeer\n1665"
//! ```
//!
//! Lines are positional. An empty or missing line leaves that field to its
//! fallback, so a sidecar holding only `\nAnonymous` sets the artist and keeps
//! the filename title.
//!
//! ## Resolution priority
//!
//! - **Title**: sidecar line 1 → filename title → `"Untitled"`
//! - **Artist**: sidecar line 2 → `"Unknown artist"`
//! - **Year**: sidecar line 3 → `"n.d."`

use crate::catalog::ArtworkMetadata;
use std::path::Path;

pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN_ARTIST: &str = "Unknown artist";
pub const UNKNOWN_YEAR: &str = "n.d.";

/// Return the first source that is present and not blank, trimmed.
pub fn resolve(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| {
            opt.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .next()
}

/// Fields read from a sidecar file; `None` where the line is absent or blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidecarFields {
    pub title: Option<String>,
    pub artist_name: Option<String>,
    pub year: Option<String>,
}

pub fn parse_sidecar(text: &str) -> SidecarFields {
    let mut lines = text.lines().map(|line| resolve(&[Some(line)]));
    SidecarFields {
        title: lines.next().flatten(),
        artist_name: lines.next().flatten(),
        year: lines.next().flatten(),
    }
}

/// Path of the sidecar belonging to an image (`.txt` with the same stem).
pub fn sidecar_path(image_path: &Path) -> std::path::PathBuf {
    image_path.with_extension("txt")
}

/// Read and parse the sidecar for an image, if there is one.
pub fn read_sidecar(image_path: &Path) -> Option<SidecarFields> {
    std::fs::read_to_string(sidecar_path(image_path))
        .ok()
        .map(|text| parse_sidecar(&text))
        .filter(|fields| *fields != SidecarFields::default())
}

/// Merge sidecar fields with the title taken from the file name.
pub fn resolve_metadata(sidecar: Option<&SidecarFields>, filename_title: &str) -> ArtworkMetadata {
    let title = sidecar.and_then(|s| s.title.as_deref());
    let artist_name = sidecar.and_then(|s| s.artist_name.as_deref());
    let year = sidecar.and_then(|s| s.year.as_deref());

    ArtworkMetadata {
        title: resolve(&[title, Some(filename_title)]).unwrap_or_else(|| UNTITLED.to_string()),
        artist_name: resolve(&[artist_name]).unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
        year: resolve(&[year]).unwrap_or_else(|| UNKNOWN_YEAR.to_string()),
    }
}
