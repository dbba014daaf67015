//! Core primitives for straight-line detection with the classical Hough transform.
//!
//! # Overview
//!
//! The pipeline has four building blocks, leaves first:
//!
//! - [`angles`] – cosine/sine lookup over a one-degree-per-bucket angle domain.
//! - [`accumulate`] – min-max normalization of the input and the scatter of
//!   edge-pixel votes into a dense `(rho, theta)` histogram.
//! - [`peaks`] – thresholding and 3×3 local-maximum extraction on that
//!   histogram.
//! - [`lines`] – mapping of a `(rho_index, theta)` peak back to an image-space
//!   segment clipped to `x = 0` and `x = width`.
//!
//! [`transform::HoughTransform`] ties them together: it owns the angle table,
//! the last accumulator and its [`ImageGeometry`].
//!
//! # Features
//!
//! - `rayon` – accumulates image rows and scans histogram rows in parallel.
//!   Votes are counted with per-cell atomics, so results are identical to the
//!   sequential path.
//! - `tracing` – instruments the public entry points with `tracing` spans.

pub mod accumulate;
pub mod angles;
pub mod lines;
pub mod peaks;
pub mod transform;

pub use crate::accumulate::{accumulate, ImageGeometry};
pub use crate::angles::AngleTable;
pub use crate::lines::{LineSegment, Point};
pub use crate::peaks::{find_peaks, Peak};
pub use crate::transform::{
    detect_lines_u8, detect_lines_u8_with_trace, HoughResult, HoughTransform,
};

/// Number of one-degree angle buckets used unless configured otherwise.
pub const DEFAULT_THETA_MAX: usize = 180;

/// Tunable parameters for accumulation and line extraction.
#[derive(Clone, Debug)]
pub struct HoughParams {
    /// Number of angle buckets, one degree each.
    pub theta_max: usize,
    /// Minimum vote count for a histogram cell to be considered a line.
    /// Values below 1 yield no lines.
    pub threshold: i32,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            theta_max: DEFAULT_THETA_MAX,
            threshold: 80,
        }
    }
}

/// Borrowed 8-bit grayscale image in row-major layout.
#[derive(Clone, Copy, Debug)]
pub struct ImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8],
}

impl<'a> ImageView<'a> {
    /// Wrap a raw buffer; returns `None` when `data.len() != width * height`.
    pub fn from_u8_slice(width: usize, height: usize, data: &'a [u8]) -> Option<Self> {
        if width.checked_mul(height)? != data.len() {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Dense vote histogram in row-major layout: one row per `rho_index`, one
/// column per `theta`.
#[derive(Clone, Debug, PartialEq)]
pub struct HoughMap {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f32>,
}

impl HoughMap {
    /// Zero-filled histogram of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    #[inline]
    /// Vote count at `(rho_index, theta)`.
    pub fn at(&self, rho_index: usize, theta: usize) -> f32 {
        self.data[rho_index * self.cols + theta]
    }

    /// Copy of the histogram where every cell below `thresh` is zeroed.
    pub fn threshold(&self, thresh: f32) -> HoughMap {
        HoughMap {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|&v| if v >= thresh { v } else { 0.0 })
                .collect(),
        }
    }

    /// Largest vote count together with its `(rho_index, theta)`, or `None`
    /// for an empty histogram.
    pub fn max_cell(&self) -> Option<(usize, usize, f32)> {
        let mut best: Option<(usize, f32)> = None;
        for (i, &v) in self.data.iter().enumerate() {
            if best.map_or(true, |(_, b)| v > b) {
                best = Some((i, v));
            }
        }
        best.map(|(i, v)| (i / self.cols, i % self.cols, v))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
