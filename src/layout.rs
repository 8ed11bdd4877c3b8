//! Viewport measurement and layout arrangement selection.
//!
//! The gallery has two arrangements of the same screen. Which one is used
//! depends only on the shape of the viewport, never on the gallery state:
//!
//! | Viewport | Variant | Arrangement |
//! |---|---|---|
//! | `width < height` | [`LayoutVariant::Vertical`] | image, info below, controls at the bottom |
//! | `width >= height` | [`LayoutVariant::Horizontal`] | image left, info and controls right |

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ViewportError {
    #[error("Viewport must look like WIDTHxHEIGHT, got '{0}'")]
    Malformed(String),
    #[error("Viewport sides must be non-zero, got {0}x{1}")]
    Empty(u32, u32),
}

/// Size of the area the screen is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::Empty(width, height));
        }
        Ok(Self { width, height })
    }

    pub fn is_portrait(self) -> bool {
        self.width < self.height
    }
}

impl FromStr for Viewport {
    type Err = ViewportError;

    /// Parse `"800x1080"` (an uppercase `X` is accepted too).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ViewportError::Malformed(s.to_string());
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(malformed)?;
        let width = w.trim().parse().map_err(|_| malformed())?;
        let height = h.trim().parse().map_err(|_| malformed())?;
        Viewport::new(width, height)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutVariant {
    Vertical,
    Horizontal,
}

impl LayoutVariant {
    pub const ALL: [LayoutVariant; 2] = [LayoutVariant::Vertical, LayoutVariant::Horizontal];

    /// Name used for output directories and CSS classes.
    pub fn slug(self) -> &'static str {
        match self {
            LayoutVariant::Vertical => "portrait",
            LayoutVariant::Horizontal => "landscape",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.slug() == slug)
    }
}

impl fmt::Display for LayoutVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Pick the arrangement for a viewport. Square viewports use the horizontal one.
pub fn choose_layout(viewport: Viewport) -> LayoutVariant {
    if viewport.is_portrait() {
        LayoutVariant::Vertical
    } else {
        LayoutVariant::Horizontal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_viewport_is_vertical() {
        let vp = Viewport::new(800, 1080).unwrap();
        assert_eq!(choose_layout(vp), LayoutVariant::Vertical);
    }

    #[test]
    fn landscape_viewport_is_horizontal() {
        let vp = Viewport::new(1280, 800).unwrap();
        assert_eq!(choose_layout(vp), LayoutVariant::Horizontal);
    }

    #[test]
    fn square_viewport_is_horizontal() {
        let vp = Viewport::new(900, 900).unwrap();
        assert_eq!(choose_layout(vp), LayoutVariant::Horizontal);
    }

    #[test]
    fn parse_viewport() {
        assert_eq!(
            "1280x800".parse::<Viewport>().unwrap(),
            Viewport {
                width: 1280,
                height: 800
            }
        );
        assert_eq!("  640X960 ".parse::<Viewport>().unwrap().height, 960);
    }

    #[test]
    fn parse_viewport_rejects_garbage() {
        assert!(matches!(
            "1280".parse::<Viewport>(),
            Err(ViewportError::Malformed(_))
        ));
        assert!(matches!(
            "wide x tall".parse::<Viewport>(),
            Err(ViewportError::Malformed(_))
        ));
        assert_eq!(
            "0x800".parse::<Viewport>(),
            Err(ViewportError::Empty(0, 800))
        );
    }

    #[test]
    fn viewport_display_roundtrips() {
        let vp = Viewport::new(800, 1080).unwrap();
        assert_eq!(vp.to_string().parse::<Viewport>().unwrap(), vp);
    }

    #[test]
    fn variant_slugs() {
        assert_eq!(LayoutVariant::Vertical.slug(), "portrait");
        assert_eq!(LayoutVariant::Horizontal.slug(), "landscape");
        assert_eq!(
            LayoutVariant::from_slug("landscape"),
            Some(LayoutVariant::Horizontal)
        );
        assert_eq!(LayoutVariant::from_slug("diagonal"), None);
    }
}
