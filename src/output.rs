//! CLI output formatting for all pipeline stages.
//!
//! Output is information-first: every artwork is shown by its zero-padded id
//! and title, with file names as indented context lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Artworks
//! 001 Still Life with Lemons
//!     Artist: Clara Peeters (1612)
//!     Source: 001-Still-Life.jpg
//!     Metadata: 001-Still-Life.txt
//! 002 Harbour
//!     Artist: Unknown artist (n.d.)
//!     Source: 002-Harbour.png
//!
//! Skipped
//!     sketch.png
//!
//! Config
//!     config.toml
//! ```
//!
//! ## Build
//!
//! ```text
//! Images
//! 001 Still Life with Lemons
//!     Source: 001-Still-Life.jpg
//!     4000x3000 → 001-Still-Life.jpg (1600x1200)
//!
//! Home → index.html
//! Portrait
//!     001 Still Life with Lemons → portrait/1.html
//! Landscape
//!     001 Still Life with Lemons → landscape/1.html
//! Catalog → catalog.json
//! Generated 10 pages
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure
//! apart from checking which sidecar files exist.

use crate::catalog::{Catalog, ContentCatalog};
use crate::gallery::ArtworkId;
use crate::generate::{CATALOG_JSON, GeneratedSite, INDEX_PAGE};
use crate::layout::{LayoutVariant, Viewport, choose_layout};
use crate::metadata;
use crate::process::ProcessResult;
use crate::scan::Manifest;
use std::path::Path;

/// Format an artwork id as 3-digit zero-padded.
fn format_index(id: ArtworkId) -> String {
    format!("{:0>3}", id.get())
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `001 Title`
fn artwork_header<C: Catalog + ?Sized>(catalog: &C, id: ArtworkId) -> String {
    format!("{} {}", format_index(id), catalog.metadata(id).title)
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the scanned catalog as an inventory.
pub fn format_catalog_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = vec!["Artworks".to_string()];

    for artwork in manifest.catalog.artworks() {
        let meta = &artwork.metadata;
        lines.push(artwork_header(&manifest.catalog, artwork.id));
        lines.push(format!(
            "{}Artist: {} ({})",
            indent(1),
            meta.artist_name,
            meta.year
        ));
        lines.push(format!("{}Source: {}", indent(1), artwork.image.file_name));

        let sidecar = metadata::sidecar_path(&artwork.image.path);
        if sidecar.exists() {
            let name = sidecar.file_name().unwrap_or_default().to_string_lossy();
            lines.push(format!("{}Metadata: {}", indent(1), name));
        }
    }

    if !manifest.skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for name in &manifest.skipped {
            lines.push(format!("{}{}", indent(1), name));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    } else {
        lines.push(format!("{}(defaults)", indent(1)));
    }

    lines
}

pub fn print_catalog_output(manifest: &Manifest, source_root: &Path) {
    print_lines(format_catalog_output(manifest, source_root));
}

// ============================================================================
// Build: images
// ============================================================================

/// Format the display copies made for each artwork.
pub fn format_process_output(result: &ProcessResult) -> Vec<String> {
    let mut lines = vec!["Images".to_string()];

    for processed in &result.artworks {
        lines.push(artwork_header(&result.catalog, processed.id));
        lines.push(format!("{}Source: {}", indent(1), processed.source));
        let (ow, oh) = processed.original;
        if processed.was_downscaled() {
            lines.push(format!(
                "{}{}x{} \u{2192} {} ({}x{})",
                indent(1),
                ow,
                oh,
                processed.output,
                processed.width,
                processed.height
            ));
        } else {
            lines.push(format!(
                "{}{}x{} \u{2192} {}",
                indent(1),
                ow,
                oh,
                processed.output
            ));
        }
    }

    lines
}

pub fn print_process_output(result: &ProcessResult) {
    print_lines(format_process_output(result));
}

/// Format the originals copied by `build --no-process`.
pub fn format_copy_output(catalog: &ContentCatalog) -> Vec<String> {
    let mut lines = vec!["Images (copied as is)".to_string()];
    for artwork in catalog.artworks() {
        lines.push(artwork_header(catalog, artwork.id));
        lines.push(format!("{}Source: {}", indent(1), artwork.image.file_name));
    }
    lines
}

pub fn print_copy_output(catalog: &ContentCatalog) {
    print_lines(format_copy_output(catalog));
}

// ============================================================================
// Build: pages
// ============================================================================

/// Format the pages written by `generate`, grouped by layout.
pub fn format_generate_output(site: &GeneratedSite, catalog: &ContentCatalog) -> Vec<String> {
    let mut lines = vec![format!("Home \u{2192} {}", INDEX_PAGE)];

    for variant in LayoutVariant::ALL {
        lines.push(variant_heading(variant).to_string());
        for page in site.pages_for(variant) {
            lines.push(format!(
                "{}{} \u{2192} {}",
                indent(1),
                artwork_header(catalog, page.id),
                page.path.display()
            ));
        }
    }

    lines.push(format!("Catalog \u{2192} {}", CATALOG_JSON));
    lines.push(format!("Generated {} pages", site.pages.len()));
    lines
}

pub fn print_generate_output(site: &GeneratedSite, catalog: &ContentCatalog) {
    print_lines(format_generate_output(site, catalog));
}

fn variant_heading(variant: LayoutVariant) -> &'static str {
    match variant {
        LayoutVariant::Vertical => "Portrait",
        LayoutVariant::Horizontal => "Landscape",
    }
}

// ============================================================================
// Preview
// ============================================================================

/// `Preview 003 Blue Harbour (portrait 800x1080) → preview.html`
pub fn format_preview_line<C: Catalog + ?Sized>(
    catalog: &C,
    id: ArtworkId,
    viewport: Viewport,
    out: &Path,
) -> String {
    format!(
        "Preview {} ({} {}) \u{2192} {}",
        artwork_header(catalog, id),
        choose_layout(viewport),
        viewport,
        out.display()
    )
}
