//! HTML site generation.
//!
//! Final stage of the build: renders every gallery state in both layout
//! arrangements as a static page. A page is the screen for one
//! [`GalleryState`]; its Previous / Next controls link to the pages of the
//! states [`GalleryState::press`] leads to, so following links is the same
//! walk through the state machine as pressing the buttons.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html          # Picks portrait/ or landscape/ for the viewport
//! ├── catalog.json        # The catalog the pages were rendered from
//! ├── images/             # Display copies (written by process)
//! ├── portrait/
//! │   ├── 1.html
//! │   └── ... 5.html
//! └── landscape/
//!     ├── 1.html
//!     └── ... 5.html
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors and theme injected from config)
//! - `static/nav.js`: Arrow keys, and switching layout when the window
//!   changes orientation
//!
//! [`render_preview`] renders a single standalone page for a given viewport,
//! without scripts or links.

use crate::catalog::{Catalog, ContentCatalog};
use crate::config::{self, SiteConfig};
use crate::gallery::{ArtworkId, GalleryState};
use crate::layout::{LayoutVariant, Viewport, choose_layout};
use crate::process::IMAGES_DIR;
use crate::view::{PageLinks, base_document, render_screen};
use maud::{Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const INDEX_PAGE: &str = "index.html";
pub const CATALOG_JSON: &str = "catalog.json";

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/nav.js");

/// Inline script for `index.html`; same portrait rule as [`choose_layout`].
const INDEX_JS: &str = "var slug = window.innerWidth < window.innerHeight ? 'portrait' : 'landscape';\nwindow.location.replace(slug + '/1.html');";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A page written by [`generate`], relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub variant: LayoutVariant,
    pub id: ArtworkId,
    pub path: PathBuf,
}

#[derive(Debug, Default)]
pub struct GeneratedSite {
    pub pages: Vec<GeneratedPage>,
}

impl GeneratedSite {
    pub fn pages_for(&self, variant: LayoutVariant) -> impl Iterator<Item = &GeneratedPage> {
        self.pages.iter().filter(move |p| p.variant == variant)
    }
}

/// Full stylesheet: config-driven custom properties followed by the base
/// styles.
pub fn site_css(config: &SiteConfig) -> String {
    let color_css = config::generate_color_css(&config.colors);
    let theme_css = config::generate_theme_css(&config.theme);
    format!("{}\n\n{}\n\n{}", color_css, theme_css, CSS_STATIC)
}

pub fn generate(
    catalog: &ContentCatalog,
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<GeneratedSite, GenerateError> {
    let css = site_css(config);
    let mut site = GeneratedSite::default();

    for variant in LayoutVariant::ALL {
        let variant_dir = output_dir.join(variant.slug());
        fs::create_dir_all(&variant_dir)?;

        for id in ArtworkId::all() {
            let page = render_page(catalog, GalleryState::at(id), variant, &css);
            let file_name = format!("{}.html", id);
            fs::write(variant_dir.join(&file_name), page.into_string())?;
            tracing::debug!("Generated {}/{}", variant.slug(), file_name);

            site.pages.push(GeneratedPage {
                variant,
                id,
                path: Path::new(variant.slug()).join(file_name),
            });
        }
    }

    fs::write(output_dir.join(INDEX_PAGE), render_index(&css).into_string())?;
    fs::write(
        output_dir.join(CATALOG_JSON),
        serde_json::to_string_pretty(catalog)?,
    )?;

    Ok(site)
}

fn page_title<C: Catalog + ?Sized>(catalog: &C, state: GalleryState) -> String {
    let metadata = catalog.metadata(state.current_id);
    format!("{} - {}", metadata.title, metadata.artist_name)
}

/// One page of the generated site.
pub fn render_page<C: Catalog + ?Sized>(
    catalog: &C,
    state: GalleryState,
    variant: LayoutVariant,
    css: &str,
) -> Markup {
    let image_base = format!("../{}/", IMAGES_DIR);
    let links = PageLinks::Site {
        image_base: &image_base,
    };

    let content = html! {
        (render_screen(catalog, state, variant, &links))
        script { (PreEscaped(JS)) }
    };

    base_document(
        &page_title(catalog, state),
        css,
        Some(variant.slug()),
        content,
    )
}

/// Entry page forwarding to the first artwork in the arrangement that fits
/// the visitor's window.
fn render_index(css: &str) -> Markup {
    let content = html! {
        main.index-page {
            noscript {
                p {
                    a href={ (LayoutVariant::Vertical.slug()) "/1.html" } { "Portrait" }
                    " · "
                    a href={ (LayoutVariant::Horizontal.slug()) "/1.html" } { "Landscape" }
                }
            }
        }
        script { (PreEscaped(INDEX_JS)) }
    };

    base_document("Gallery", css, None, content)
}

/// A standalone page showing `state` as it looks in `viewport`.
pub fn render_preview<C: Catalog + ?Sized>(
    catalog: &C,
    state: GalleryState,
    viewport: Viewport,
    css: &str,
) -> Markup {
    let variant = choose_layout(viewport);
    let frame_style = format!(
        "width: {}px; height: {}px;",
        viewport.width, viewport.height
    );
    let title = format!("{} ({} {})", page_title(catalog, state), variant, viewport);

    let content = html! {
        div.preview-frame style=(frame_style) {
            (render_screen(catalog, state, variant, &PageLinks::Standalone))
        }
    };

    base_document(&title, css, Some("preview"), content)
}
