//! Image processing: pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Display copy** | `DynamicImage::resize_exact` (Lanczos3) + per-format encoder |
//!
//! The module is split into:
//! - **Calculations**: pure dimension math (unit testable)
//! - **Parameters**: data describing an operation
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
pub mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::fit_within;
pub use params::{Quality, ResizeParams};
pub use rust_backend::{RustBackend, display_extension, is_supported_image};
