//! # ArtSpace
//!
//! A single-screen gallery viewer for a fixed catalog of five artworks. Each
//! artwork is an image plus a title, artist and year. The screen shows one
//! artwork at a time with "Previous" and "Next" controls, in one of two
//! arrangements chosen by the shape of the viewport.
//!
//! # The Navigation Core
//!
//! Everything the viewer does follows from one small state machine in
//! [`gallery`]: a [`GalleryState`](gallery::GalleryState) holding the current
//! [`ArtworkId`](gallery::ArtworkId), changed only by
//! [`navigate`](gallery::GalleryState::navigate), which clamps to `1..=5`.
//! The controls are enabled by
//! [`can_go_previous`](gallery::GalleryState::can_go_previous) and
//! [`can_go_next`](gallery::GalleryState::can_go_next).
//!
//! Rendering is a pure function of that state:
//!
//! ```text
//! (GalleryState, Catalog, LayoutVariant)  →  view::render_screen  →  Markup
//! ```
//!
//! The static site renders it once for every reachable state and both
//! arrangements, and wires each control to the page of the state it leads to.
//!
//! # Build Pipeline
//!
//! ```text
//! 1. Scan      content/  →  ContentCatalog + SiteConfig
//! 2. Process   catalog   →  dist/images/   (display copies, in parallel)
//! 3. Generate  catalog   →  dist/          (one page per state and layout)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`gallery`] | The navigation state machine and catalog lookups |
//! | [`layout`] | Viewport parsing and the portrait / landscape choice |
//! | [`view`] | Maud components for the screen |
//! | [`catalog`] | The id → image and metadata mapping |
//! | [`scan`] | Reads the content directory into a catalog |
//! | [`naming`] | `NNN-name` filename convention parser |
//! | [`metadata`] | Sidecar parsing and title / artist / year fallbacks |
//! | [`imaging`] | Image backend trait and the pure-Rust implementation |
//! | [`process`] | Display copies of the artworks |
//! | [`generate`] | Static pages, index and preview rendering |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI output formatting |

pub mod catalog;
pub mod config;
pub mod gallery;
pub mod generate;
pub mod imaging;
pub mod layout;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod process;
pub mod scan;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;
