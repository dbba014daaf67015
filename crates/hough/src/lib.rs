//! Ergonomic wrappers over `hough-core` that accept `image::GrayImage` inputs.
//!
//! This crate is organized into a few focused modules:
//! - [`image`] – line detection helpers on `image::GrayImage`.
//! - [`config`] – JSON configuration overriding [`HoughParams`].
//! - [`dump`] – JSON serialization of a detection result.
//! - [`logger`] – a simple `log` implementation used by tools and tests.

pub mod config;
pub mod dump;
#[cfg(feature = "image")]
pub mod image;
pub mod logger;

// Re-export the core types most callers need. Consumers that want the
// lower-level pieces (angle table, raw accumulation, peak scan) can depend on
// `hough-core` directly.
pub use hough_core::{
    detect_lines_u8, detect_lines_u8_with_trace, HoughMap, HoughParams, HoughResult,
    HoughTransform, ImageGeometry, ImageView, LineSegment, Peak, Point,
};

#[cfg(feature = "image")]
pub use crate::image::{detect_lines_image, detect_lines_image_trace, hough_image};

pub use crate::config::{apply_params_overrides, load_config, HoughConfig};
pub use crate::dump::{write_json, LinesDump};
