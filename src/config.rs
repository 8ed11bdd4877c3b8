//! Gallery configuration.
//!
//! Handles loading, validating and merging `config.toml`. Stock defaults are
//! the base layer; a `config.toml` in the content root overrides any subset
//! of them.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [images]
//! max_edge = 1600           # Longer edge of display copies, in pixels
//! quality = 90              # JPEG quality (1-100)
//!
//! [theme]
//! padding = "24px"          # Space around the screen and inside the image card
//! spacing = "24px"          # Gap between image, info panel and controls
//! button_width = "150px"    # Width of the Previous / Next buttons
//! title_size = "24px"       # Font size of the artwork title
//!
//! [colors.light]
//! background = "#fffbfe"
//! surface = "#ffffff"           # Image card
//! surface_variant = "#e7e0ec"   # Info panel
//! text = "#1c1b1f"
//! text_muted = "#49454f"
//! accent = "#6750a4"            # Buttons
//! accent_text = "#ffffff"
//!
//! [colors.dark]
//! background = "#1c1b1f"
//! surface = "#ffffff"
//! surface_variant = "#49454f"
//! text = "#e6e1e5"
//! text_muted = "#cac4d0"
//! accent = "#d0bcff"
//! accent_text = "#381e72"
//!
//! [preview]
//! portrait = [800, 1080]    # Viewport used by `preview --orientation portrait`
//! landscape = [1280, 800]   # Viewport used by `preview --orientation landscape`
//!
//! [processing]
//! max_processes = 4         # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::layout::{LayoutVariant, Viewport};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Gallery configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Display copy settings.
    pub images: ImagesConfig,
    /// Spacing and sizing of the screen.
    pub theme: ThemeConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Viewports used for single-page previews.
    pub preview: PreviewConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.images.quality == 0 || self.images.quality > 100 {
            return Err(ConfigError::Validation(
                "images.quality must be 1-100".into(),
            ));
        }
        if self.images.max_edge == 0 {
            return Err(ConfigError::Validation(
                "images.max_edge must be non-zero".into(),
            ));
        }
        for (name, [w, h]) in [
            ("portrait", self.preview.portrait),
            ("landscape", self.preview.landscape),
        ] {
            if w == 0 || h == 0 {
                return Err(ConfigError::Validation(format!(
                    "preview.{name} sides must be non-zero"
                )));
            }
        }
        if self.preview.portrait[0] >= self.preview.portrait[1] {
            return Err(ConfigError::Validation(
                "preview.portrait must be taller than it is wide".into(),
            ));
        }
        if self.preview.landscape[0] < self.preview.landscape[1] {
            return Err(ConfigError::Validation(
                "preview.landscape must not be taller than it is wide".into(),
            ));
        }
        for (name, value) in self.css_values() {
            if value.contains('<') {
                return Err(ConfigError::Validation(format!(
                    "{name} must not contain '<'"
                )));
            }
        }
        Ok(())
    }

    /// Every author-supplied string that ends up inside the page `<style>`.
    fn css_values(&self) -> Vec<(String, &str)> {
        let theme = &self.theme;
        let mut values = vec![
            ("theme.padding".to_string(), theme.padding.as_str()),
            ("theme.spacing".to_string(), theme.spacing.as_str()),
            ("theme.button_width".to_string(), theme.button_width.as_str()),
            ("theme.title_size".to_string(), theme.title_size.as_str()),
        ];
        for (mode, scheme) in [("light", &self.colors.light), ("dark", &self.colors.dark)] {
            for (field, value) in [
                ("background", &scheme.background),
                ("surface", &scheme.surface),
                ("surface_variant", &scheme.surface_variant),
                ("text", &scheme.text),
                ("text_muted", &scheme.text_muted),
                ("accent", &scheme.accent),
                ("accent_text", &scheme.accent_text),
            ] {
                values.push((format!("colors.{mode}.{field}"), value.as_str()));
            }
        }
        values
    }
}

/// Display copy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Longer edge of the display copy in pixels. Smaller images are kept as is.
    pub max_edge: u32,
    /// JPEG encoding quality (1 = worst, 100 = best).
    pub quality: u32,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            max_edge: 1600,
            quality: 90,
        }
    }
}

/// Layout sizes, as CSS values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub padding: String,
    pub spacing: String,
    pub button_width: String,
    pub title_size: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            padding: "24px".to_string(),
            spacing: "24px".to_string(),
            button_width: "150px".to_string(),
            title_size: "24px".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background.
    pub background: String,
    /// Image card background.
    pub surface: String,
    /// Info panel background.
    pub surface_variant: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text color (artist line, disabled buttons).
    pub text_muted: String,
    /// Button background.
    pub accent: String,
    /// Button label.
    pub accent_text: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#fffbfe".to_string(),
            surface: "#ffffff".to_string(),
            surface_variant: "#e7e0ec".to_string(),
            text: "#1c1b1f".to_string(),
            text_muted: "#49454f".to_string(),
            accent: "#6750a4".to_string(),
            accent_text: "#ffffff".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#1c1b1f".to_string(),
            surface: "#ffffff".to_string(),
            surface_variant: "#49454f".to_string(),
            text: "#e6e1e5".to_string(),
            text_muted: "#cac4d0".to_string(),
            accent: "#d0bcff".to_string(),
            accent_text: "#381e72".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

/// Viewports for `preview`, as `[width, height]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    pub portrait: [u32; 2],
    pub landscape: [u32; 2],
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            portrait: [800, 1080],
            landscape: [1280, 800],
        }
    }
}

impl PreviewConfig {
    /// Configured viewport for a layout variant.
    ///
    /// Falls back to the stock size if the configured one has a zero side;
    /// [`SiteConfig::validate`] rejects those anyway.
    pub fn viewport(&self, variant: LayoutVariant) -> Viewport {
        let ([w, h], stock) = match variant {
            LayoutVariant::Vertical => (self.portrait, PreviewConfig::default().portrait),
            LayoutVariant::Horizontal => (self.landscape, PreviewConfig::default().landscape),
        };
        Viewport::new(w, h).unwrap_or(Viewport {
            width: stock[0],
            height: stock[1],
        })
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel image workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)`, at least 1
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory, on top of the
/// stock defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# ArtSpace Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the content directory next to the artworks.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Display copies
# ---------------------------------------------------------------------------
[images]
# Longer edge of the image shown on screen, in pixels.
# Smaller originals are never upscaled.
max_edge = 1600

# JPEG encoding quality (1 = worst, 100 = best).
# PNG and WebP copies are lossless.
quality = 90

# ---------------------------------------------------------------------------
# Theme / layout (CSS values)
# ---------------------------------------------------------------------------
[theme]
# Space around the screen and inside the image card.
padding = "24px"

# Gap between the image, the info panel and the controls.
spacing = "24px"

# Width of the Previous / Next buttons.
button_width = "150px"

# Font size of the artwork title.
title_size = "24px"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#fffbfe"
surface = "#ffffff"           # Image card
surface_variant = "#e7e0ec"   # Info panel
text = "#1c1b1f"
text_muted = "#49454f"        # Artist line, disabled buttons
accent = "#6750a4"            # Buttons
accent_text = "#ffffff"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#1c1b1f"
surface = "#ffffff"
surface_variant = "#49454f"
text = "#e6e1e5"
text_muted = "#cac4d0"
accent = "#d0bcff"
accent_text = "#381e72"

# ---------------------------------------------------------------------------
# Preview viewports, as [width, height]
# ---------------------------------------------------------------------------
[preview]
portrait = [800, 1080]
landscape = [1280, 800]

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel image-processing workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    fn vars(scheme: &ColorScheme, indent: &str) -> String {
        [
            ("bg", &scheme.background),
            ("surface", &scheme.surface),
            ("surface-variant", &scheme.surface_variant),
            ("text", &scheme.text),
            ("text-muted", &scheme.text_muted),
            ("accent", &scheme.accent),
            ("accent-text", &scheme.accent_text),
        ]
        .iter()
        .map(|(name, value)| format!("{indent}--color-{name}: {value};"))
        .collect::<Vec<_>>()
        .join("\n")
    }

    format!(
        ":root {{\n{}\n}}\n\n@media (prefers-color-scheme: dark) {{\n    :root {{\n{}\n    }}\n}}",
        vars(&colors.light, "    "),
        vars(&colors.dark, "        "),
    )
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --padding: {padding};
    --spacing: {spacing};
    --button-width: {button_width};
    --title-size: {title_size};
}}"#,
        padding = theme.padding,
        spacing = theme.spacing,
        button_width = theme.button_width,
        title_size = theme.title_size,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = SiteConfig::default();
        assert_eq!(config.images.max_edge, 1600);
        assert_eq!(config.images.quality, 90);
        assert_eq!(config.theme.button_width, "150px");
        assert_eq!(config.colors.light.surface_variant, "#e7e0ec");
        assert_eq!(config.preview.portrait, [800, 1080]);
        assert_eq!(config.preview.landscape, [1280, 800]);
        assert_eq!(config.processing.max_processes, None);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors.light]
background = "#fafafa"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.colors.light.background, "#fafafa");
        assert_eq!(config.colors.light.text, "#1c1b1f");
        assert_eq!(config.colors.dark.background, "#1c1b1f");
        assert_eq!(config.images.max_edge, 1600);
    }

    #[test]
    fn parse_image_and_preview_settings() {
        let toml = r#"
[images]
max_edge = 1024
quality = 75

[preview]
portrait = [390, 844]
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.images.max_edge, 1024);
        assert_eq!(config.images.quality, 75);
        assert_eq!(config.preview.portrait, [390, 844]);
        assert_eq!(config.preview.landscape, [1280, 800]);
    }

    #[test]
    fn preview_viewport_per_variant() {
        let preview = PreviewConfig::default();
        let portrait = preview.viewport(LayoutVariant::Vertical);
        assert_eq!((portrait.width, portrait.height), (800, 1080));
        let landscape = preview.viewport(LayoutVariant::Horizontal);
        assert_eq!((landscape.width, landscape.height), (1280, 800));
    }

    #[test]
    fn preview_viewport_falls_back_on_zero_side() {
        let preview = PreviewConfig {
            portrait: [0, 100],
            ..Default::default()
        };
        let vp = preview.viewport(LayoutVariant::Vertical);
        assert_eq!((vp.width, vp.height), (800, 1080));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.colors.light.background, "#fffbfe");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[theme]
button_width = "120px"

[colors.dark]
accent = "#ff0000"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.theme.button_width, "120px");
        assert_eq!(config.theme.padding, "24px");
        assert_eq!(config.colors.dark.accent, "#ff0000");
        assert_eq!(config.colors.dark.text, "#e6e1e5");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[images]
quality = 200
"#,
        )
        .unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn unknown_key_rejected_via_load_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[images]
max_egde = 900
"#,
        )
        .unwrap();

        assert!(load_config(tmp.path()).is_err());
    }

    // =========================================================================
    // Unknown key rejection
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[images]\nqualty = 90\n");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[thumbnails]\naspect_ratio = [1, 1]\n");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_nested_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[colors.light]\nbg = \"#fff\"\n");
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_markup_in_theme_values() {
        let mut config = SiteConfig::default();
        config.theme.padding = "1px</style><script>".to_string();
        let err = config.validate().unwrap_err();
        assert!(format!("{}", err).contains("theme.padding"));
    }

    #[test]
    fn validate_rejects_markup_in_colors() {
        let mut config = SiteConfig::default();
        config.colors.dark.accent = "red</style>".to_string();
        let err = config.validate().unwrap_err();
        assert!(format!("{}", err).contains("colors.dark.accent"));
    }

    #[test]
    fn validate_allows_quotes_in_css_values() {
        let mut config = SiteConfig::default();
        config.theme.title_size = "calc(1rem + 8px)".to_string();
        config.colors.light.text = "rgb(0 0 0 / 0.9)".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_quality_bounds() {
        let mut config = SiteConfig::default();
        config.images.quality = 100;
        assert!(config.validate().is_ok());
        config.images.quality = 1;
        assert!(config.validate().is_ok());
        config.images.quality = 0;
        assert!(config.validate().is_err());
        config.images.quality = 101;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("quality"));
    }

    #[test]
    fn validate_max_edge_zero() {
        let mut config = SiteConfig::default();
        config.images.max_edge = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_preview_orientation() {
        let mut config = SiteConfig::default();
        config.preview.portrait = [1200, 800];
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.preview.landscape = [600, 900];
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.preview.landscape = [900, 900];
        assert!(config.validate().is_ok());

        let mut config = SiteConfig::default();
        config.preview.landscape = [0, 900];
        assert!(config.validate().is_err());
    }

    // =========================================================================
    // Processing config
    // =========================================================================

    #[test]
    fn effective_threads_auto() {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        assert_eq!(effective_threads(&ProcessingConfig::default()), cores);
    }

    #[test]
    fn effective_threads_clamped() {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let config = ProcessingConfig {
            max_processes: Some(99999),
        };
        assert_eq!(effective_threads(&config), cores);

        let config = ProcessingConfig {
            max_processes: Some(0),
        };
        assert_eq!(effective_threads(&config), 1);
    }

    // =========================================================================
    // merge_toml
    // =========================================================================

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str("[images]\nmax_edge = 1600\nquality = 90\n").unwrap();
        let overlay: toml::Value = toml::from_str("[images]\nquality = 70\n").unwrap();
        let merged = merge_toml(base, overlay);
        let images = merged.get("images").unwrap();
        assert_eq!(images.get("quality").unwrap().as_integer(), Some(70));
        assert_eq!(images.get("max_edge").unwrap().as_integer(), Some(1600));
    }

    #[test]
    fn merge_toml_arrays_replace() {
        let base: toml::Value = toml::from_str("portrait = [800, 1080]").unwrap();
        let overlay: toml::Value = toml::from_str("portrait = [390, 844]").unwrap();
        let merged = merge_toml(base, overlay);
        let arr = merged.get("portrait").unwrap().as_array().unwrap();
        assert_eq!(arr[0].as_integer(), Some(390));
        assert_eq!(arr.len(), 2);
    }

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value =
            toml::from_str("[colors.light]\nbackground = \"#fff\"\ntext = \"#000\"\n").unwrap();
        let overlay: toml::Value =
            toml::from_str("[colors.light]\nbackground = \"#fafafa\"\n").unwrap();
        let merged = merge_toml(base, overlay);
        let light = merged.get("colors").unwrap().get("light").unwrap();
        assert_eq!(light.get("background").unwrap().as_str(), Some("#fafafa"));
        assert_eq!(light.get("text").unwrap().as_str(), Some("#000"));
    }

    #[test]
    fn resolve_config_with_overlay() {
        let overlay: toml::Value = toml::from_str("[images]\nquality = 70\n").unwrap();
        let config = resolve_config(stock_defaults_value(), Some(overlay)).unwrap();
        assert_eq!(config.images.quality, 70);
        assert_eq!(config.images.max_edge, 1600);
    }

    #[test]
    fn load_raw_config_returns_none_when_no_file() {
        let tmp = TempDir::new().unwrap();
        assert!(load_raw_config(tmp.path()).unwrap().is_none());
    }

    // =========================================================================
    // Stock config and CSS generation
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.images.max_edge, defaults.images.max_edge);
        assert_eq!(config.images.quality, defaults.images.quality);
        assert_eq!(config.theme.padding, defaults.theme.padding);
        assert_eq!(config.colors.light.accent, defaults.colors.light.accent);
        assert_eq!(config.colors.dark.accent_text, defaults.colors.dark.accent_text);
        assert_eq!(config.preview.portrait, defaults.preview.portrait);
        assert_eq!(config.processing.max_processes, None);
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        for section in [
            "[images]",
            "[theme]",
            "[colors.light]",
            "[colors.dark]",
            "[preview]",
            "[processing]",
        ] {
            assert!(content.contains(section), "missing {section}");
        }
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        assert!(val.is_table());
        for key in ["images", "theme", "colors", "preview", "processing"] {
            assert!(val.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn generate_color_css_includes_both_schemes() {
        let mut colors = ColorConfig::default();
        colors.light.surface_variant = "#eeeeee".to_string();
        colors.dark.surface_variant = "#222222".to_string();

        let css = generate_color_css(&colors);
        assert!(css.contains("--color-surface-variant: #eeeeee;"));
        assert!(css.contains("--color-surface-variant: #222222;"));
        assert!(css.contains("@media (prefers-color-scheme: dark)"));
        for var in ["--color-bg:", "--color-accent:", "--color-accent-text:"] {
            assert!(css.contains(var), "missing {var}");
        }
    }

    #[test]
    fn generate_theme_css_includes_variables() {
        let css = generate_theme_css(&ThemeConfig::default());
        assert!(css.contains("--padding: 24px;"));
        assert!(css.contains("--spacing: 24px;"));
        assert!(css.contains("--button-width: 150px;"));
        assert!(css.contains("--title-size: 24px;"));
    }
}
