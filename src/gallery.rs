//! Gallery navigation: the selection state machine and catalog lookups.
//!
//! The whole screen is driven by one value, [`GalleryState`], holding the id
//! of the artwork on display. Ids live in `1..=CATALOG_SIZE` and every
//! transition goes through [`GalleryState::navigate`], which clamps the
//! requested id into that range. Nothing here fails and nothing here has side
//! effects: a button press produces a new state, and the renderer is re-run
//! with it.
//!
//! ```text
//!          next        next        next        next
//!   ┌───┐ ─────> ┌───┐ ─────> ┌───┐ ─────> ┌───┐ ─────> ┌───┐
//!   │ 1 │        │ 2 │        │ 3 │        │ 4 │        │ 5 │
//!   └───┘ <───── └───┘ <───── └───┘ <───── └───┘ <───── └───┘
//!        previous    previous    previous    previous
//! ```
//!
//! Previous is disabled on 1, Next is disabled on 5. The UI disables the
//! buttons at the boundaries, but `navigate` clamps regardless of what the
//! caller sends.

use crate::catalog::{ArtworkMetadata, Catalog, ImageHandle};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of artworks in the gallery.
pub const CATALOG_SIZE: u32 = 5;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("artwork id {0} is outside 1..={max}", max = CATALOG_SIZE)]
pub struct InvalidArtworkId(pub i64);

/// Identifier of one artwork, always within `1..=CATALOG_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ArtworkId(u32);

impl ArtworkId {
    pub const FIRST: ArtworkId = ArtworkId(1);
    pub const LAST: ArtworkId = ArtworkId(CATALOG_SIZE);

    /// Returns `None` for values outside the catalog range.
    pub fn new(value: i64) -> Option<Self> {
        (1..=i64::from(CATALOG_SIZE))
            .contains(&value)
            .then(|| Self(value as u32))
    }

    /// Nearest valid id: values below 1 become 1, values above the catalog
    /// size become the last id.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(1, i64::from(CATALOG_SIZE)) as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Zero-based position, for indexing catalog storage.
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// All ids in display order.
    pub fn all() -> impl Iterator<Item = ArtworkId> {
        (1..=CATALOG_SIZE).map(ArtworkId)
    }
}

impl TryFrom<u32> for ArtworkId {
    type Error = InvalidArtworkId;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(i64::from(value)).ok_or(InvalidArtworkId(i64::from(value)))
    }
}

impl From<ArtworkId> for u32 {
    fn from(id: ArtworkId) -> u32 {
        id.0
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The only mutable state of a gallery session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GalleryState {
    pub current_id: ArtworkId,
}

impl GalleryState {
    /// A fresh session, showing the first artwork.
    pub fn initial() -> Self {
        Self::at(ArtworkId::FIRST)
    }

    pub fn at(id: ArtworkId) -> Self {
        Self { current_id: id }
    }

    /// Move to `requested_id`, clamped into the catalog range.
    pub fn navigate(self, requested_id: i64) -> Self {
        Self::at(ArtworkId::clamped(requested_id))
    }

    pub fn can_go_previous(self) -> bool {
        self.current_id > ArtworkId::FIRST
    }

    pub fn can_go_next(self) -> bool {
        self.current_id < ArtworkId::LAST
    }

    /// Apply a button press.
    pub fn press(self, navigation: Navigation) -> Self {
        self.navigate(navigation.requested_id(self))
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::initial()
    }
}

/// The two controls on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Previous,
    Next,
}

impl Navigation {
    pub const ALL: [Navigation; 2] = [Navigation::Previous, Navigation::Next];

    /// Id the control asks for; may be out of range at the boundaries.
    pub fn requested_id(self, state: GalleryState) -> i64 {
        let current = i64::from(state.current_id.get());
        match self {
            Navigation::Previous => current - 1,
            Navigation::Next => current + 1,
        }
    }

    pub fn is_enabled(self, state: GalleryState) -> bool {
        match self {
            Navigation::Previous => state.can_go_previous(),
            Navigation::Next => state.can_go_next(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Navigation::Previous => "Previous",
            Navigation::Next => "Next",
        }
    }
}

/// Resolve the image for a raw id. Unknown ids show the first artwork.
pub fn lookup_asset<C: Catalog + ?Sized>(catalog: &C, id: i64) -> &ImageHandle {
    catalog.asset(ArtworkId::new(id).unwrap_or(ArtworkId::FIRST))
}

/// Resolve the metadata for a raw id. Unknown ids show the first artwork.
pub fn lookup_metadata<C: Catalog + ?Sized>(catalog: &C, id: i64) -> &ArtworkMetadata {
    catalog.metadata(ArtworkId::new(id).unwrap_or(ArtworkId::FIRST))
}
