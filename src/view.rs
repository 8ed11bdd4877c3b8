//! The gallery screen as maud markup.
//!
//! Every function here is a pure render of a [`GalleryState`] plus the
//! catalog. The screen is made of three pieces:
//!
//! - **Image view**: the artwork on a white, elevated card.
//! - **Information**: title, then artist and `(year)`, on the surface-variant
//!   color.
//! - **Operations**: the Previous / Next controls.
//!
//! [`LayoutVariant::Vertical`] stacks them top to bottom with the image taking
//! the free space. [`LayoutVariant::Horizontal`] puts the image on the left
//! and a bottom-aligned column with information and controls on the right.

use crate::catalog::{ArtworkMetadata, Catalog, ImageHandle};
use crate::gallery::{ArtworkId, GalleryState, Navigation, lookup_asset, lookup_metadata};
use crate::layout::LayoutVariant;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// How a rendered screen refers to images and to the other states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLinks<'a> {
    /// Part of a generated site: sibling pages are `{id}.html` and images
    /// live under `image_base`.
    Site { image_base: &'a str },
    /// A single document with nothing to link to. Images are referenced by
    /// their path on disk and enabled controls are plain buttons.
    Standalone,
}

impl PageLinks<'_> {
    pub fn image_src(&self, handle: &ImageHandle) -> String {
        match self {
            PageLinks::Site { image_base } => format!("{}{}", image_base, handle.file_name),
            PageLinks::Standalone => handle.path.display().to_string(),
        }
    }

    pub fn page_href(&self, id: ArtworkId) -> Option<String> {
        match self {
            PageLinks::Site { .. } => Some(format!("{}.html", id)),
            PageLinks::Standalone => None,
        }
    }
}

/// Renders the base HTML document structure
pub fn base_document(title: &str, css: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// The artwork on its card. `--aspect-ratio` lets the card keep the image
/// proportions while it shrinks to the available space.
pub fn art_image_view(handle: &ImageHandle, alt: &str, src: &str) -> Markup {
    let aspect_style = format!("--aspect-ratio: {};", handle.aspect_ratio());
    html! {
        section.art-image-view {
            figure.art-card style=(aspect_style) {
                img src=(src) alt=(alt) width=(handle.width) height=(handle.height);
            }
        }
    }
}

pub fn art_information(metadata: &ArtworkMetadata) -> Markup {
    html! {
        section.art-information {
            h1.art-title { (metadata.title) }
            p.art-byline {
                span.art-artist { (metadata.artist_name) }
                " "
                span.art-year { "(" (metadata.year) ")" }
            }
        }
    }
}

fn rel(navigation: Navigation) -> &'static str {
    match navigation {
        Navigation::Previous => "prev",
        Navigation::Next => "next",
    }
}

/// The Previous / Next row. An enabled control links to the page of the
/// state it navigates to; a control at the boundary is a disabled button.
pub fn operations(state: GalleryState, links: &PageLinks) -> Markup {
    html! {
        nav.operations {
            @for navigation in Navigation::ALL {
                @let target = state.press(navigation).current_id;
                @match (navigation.is_enabled(state), links.page_href(target)) {
                    (true, Some(href)) => {
                        a.control href=(href) rel=(rel(navigation)) { (navigation.label()) }
                    }
                    (true, None) => {
                        button.control type="button" { (navigation.label()) }
                    }
                    (false, _) => {
                        button.control type="button" disabled { (navigation.label()) }
                    }
                }
            }
        }
    }
}

/// The whole screen for `state` in the given arrangement.
pub fn render_screen<C: Catalog + ?Sized>(
    catalog: &C,
    state: GalleryState,
    variant: LayoutVariant,
    links: &PageLinks,
) -> Markup {
    let id = i64::from(state.current_id.get());
    let handle = lookup_asset(catalog, id);
    let metadata = lookup_metadata(catalog, id);
    let image = art_image_view(handle, &metadata.title, &links.image_src(handle));

    html! {
        main class={ "screen " (variant.slug()) } data-layout=(variant.slug()) data-id=(state.current_id.get()) {
            @match variant {
                LayoutVariant::Vertical => {
                    (image)
                    (art_information(metadata))
                    (operations(state, links))
                }
                LayoutVariant::Horizontal => {
                    (image)
                    div.side-panel {
                        (art_information(metadata))
                        (operations(state, links))
                    }
                }
            }
        }
    }
}
