//! `image::GrayImage` helpers for the Hough line detector.
//!
//! These wrappers expose the `hough-core` engine in terms of
//! `image::GrayImage`, which is convenient for most downstream consumers.

use hough_core::{HoughParams, HoughResult, HoughTransform, ImageView, LineSegment};
use image::GrayImage;

/// Build an engine for `params` and accumulate the votes of `img`.
pub fn hough_image(img: &GrayImage, params: &HoughParams) -> HoughTransform {
    let mut hough = HoughTransform::new(params);
    // A GrayImage always holds exactly width * height samples.
    if let Some(view) =
        ImageView::from_u8_slice(img.width() as usize, img.height() as usize, img.as_raw())
    {
        hough.init(&view);
    }
    hough
}

/// Detect line segments in an `image::GrayImage`.
#[inline]
pub fn detect_lines_image(img: &GrayImage, params: &HoughParams) -> Vec<LineSegment> {
    hough_core::detect_lines_u8(
        img.as_raw(),
        img.width() as usize,
        img.height() as usize,
        params,
    )
}

/// Detect line segments and report per-phase timings.
#[inline]
pub fn detect_lines_image_trace(img: &GrayImage, params: &HoughParams) -> HoughResult {
    hough_core::detect_lines_u8_with_trace(
        img.as_raw(),
        img.width() as usize,
        img.height() as usize,
        params,
    )
}
