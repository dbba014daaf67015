//! Vote accumulation into the dense `(rho, theta)` histogram.
use crate::angles::AngleTable;
use crate::{HoughMap, ImageView};

#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "rayon")]
use std::sync::atomic::{AtomicU32, Ordering};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Image size, integer center and rho half-range shared by accumulation and
/// line mapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageGeometry {
    pub width: usize,
    pub height: usize,
    pub center_x: usize,
    pub center_y: usize,
    /// `trunc(max(width, height) * sqrt(2) / 2)`, or 0 when either side is
    /// empty; the histogram has `2 * rho_range` rows.
    pub rho_range: usize,
}

impl ImageGeometry {
    pub fn new(width: usize, height: usize) -> Self {
        let rho_range = if width == 0 || height == 0 {
            0
        } else {
            (width.max(height) as f64 * core::f64::consts::FRAC_1_SQRT_2) as usize
        };
        Self {
            width,
            height,
            center_x: width / 2,
            center_y: height / 2,
            rho_range,
        }
    }

    /// Number of histogram rows (`rho_index` values).
    #[inline]
    pub fn rho_bins(&self) -> usize {
        2 * self.rho_range
    }
}

/// Stretch intensities to the full `[0, 255]` range.
///
/// A constant image has no contrast to stretch and maps to all zeros, so it
/// contributes no edge pixels.
pub fn normalize_min_max(img: &ImageView<'_>) -> Vec<u8> {
    let (lo, hi) = img
        .data
        .iter()
        .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if img.data.is_empty() || lo == hi {
        return vec![0; img.data.len()];
    }

    let scale = 255.0 / (hi - lo) as f32;
    img.data
        .iter()
        .map(|&v| ((v - lo) as f32 * scale).round() as u8)
        .collect()
}

/// Build the vote histogram for `img` over the angle domain of `angles`.
///
/// The image is min-max normalized first; pixels that normalize to zero do
/// not vote. Every other pixel adds one vote to `(rho_index, theta)` for each
/// angle bucket, with `rho_index = trunc(rho_range + r)` and `r` measured
/// from the integer image center.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "debug",
        skip(img, angles),
        fields(w = img.width, h = img.height, theta_max = angles.len())
    )
)]
pub fn accumulate(img: &ImageView<'_>, angles: &AngleTable) -> (HoughMap, ImageGeometry) {
    let geom = ImageGeometry::new(img.width, img.height);
    let rows = geom.rho_bins();
    let cols = angles.len();

    if img.is_empty() || rows == 0 || cols == 0 {
        return (HoughMap::zeros(rows, cols), geom);
    }

    let edges = normalize_min_max(img);
    let w = img.width;

    #[cfg(feature = "rayon")]
    let data: Vec<f32> = {
        let cells: Vec<AtomicU32> = (0..rows * cols).map(|_| AtomicU32::new(0)).collect();
        edges.par_chunks_exact(w).enumerate().for_each(|(y, row)| {
            vote_row(row, y, &geom, angles, rows, |i| {
                cells[i].fetch_add(1, Ordering::Relaxed);
            })
        });
        cells.into_iter().map(|c| c.into_inner() as f32).collect()
    };

    #[cfg(not(feature = "rayon"))]
    let data: Vec<f32> = {
        let mut counts = vec![0u32; rows * cols];
        for (y, row) in edges.chunks_exact(w).enumerate() {
            vote_row(row, y, &geom, angles, rows, |i| counts[i] += 1);
        }
        counts.into_iter().map(|c| c as f32).collect()
    };

    (HoughMap { rows, cols, data }, geom)
}

/// Cast the votes of one image row; `vote` receives flat histogram indices.
#[inline]
fn vote_row(
    row: &[u8],
    y: usize,
    geom: &ImageGeometry,
    angles: &AngleTable,
    rows: usize,
    mut vote: impl FnMut(usize),
) {
    let cols = angles.len();
    let rho_range = geom.rho_range as f32;
    let dy = (y as i64 - geom.center_y as i64) as f32;

    for (x, &v) in row.iter().enumerate() {
        if v == 0 {
            continue;
        }
        let dx = (x as i64 - geom.center_x as i64) as f32;
        for theta in 0..cols {
            let r = dx * angles.cos(theta) + dy * angles.sin(theta);
            // `as` truncates toward zero, so r in (-rho_range - 1, -rho_range] lands in row 0
            let rho_index = (rho_range + r) as i64;
            if rho_index < 0 || rho_index as usize >= rows {
                continue;
            }
            vote(rho_index as usize * cols + theta);
        }
    }
}
