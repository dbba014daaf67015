//! Stateful Hough engine and one-shot detection helpers.
use crate::accumulate::{accumulate, ImageGeometry};
use crate::angles::AngleTable;
use crate::lines::{segment_for, LineSegment};
use crate::peaks::{find_peaks, Peak};
use crate::{HoughMap, HoughParams, ImageView};
use std::time::Instant;

#[cfg(feature = "tracing")]
use tracing::{debug, debug_span, instrument};

/// Hough line detector holding the angle table and the most recent
/// accumulator.
///
/// The angle table is built once in [`HoughTransform::new`]. Each call to
/// [`HoughTransform::init`] replaces the histogram and the image geometry;
/// all queries read that state without modifying it.
#[derive(Clone, Debug)]
pub struct HoughTransform {
    angles: AngleTable,
    geometry: ImageGeometry,
    accum: HoughMap,
}

impl Default for HoughTransform {
    fn default() -> Self {
        Self::new(&HoughParams::default())
    }
}

impl HoughTransform {
    pub fn new(params: &HoughParams) -> Self {
        let angles = AngleTable::new(params.theta_max);
        let accum = HoughMap::zeros(0, angles.len());
        Self {
            angles,
            geometry: ImageGeometry::default(),
            accum,
        }
    }

    /// Accumulate votes for `img`, replacing any previous histogram.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self, img), fields(w = img.width, h = img.height))
    )]
    pub fn init(&mut self, img: &ImageView<'_>) {
        let (accum, geometry) = accumulate(img, &self.angles);
        #[cfg(feature = "tracing")]
        debug!(
            rho_range = geometry.rho_range,
            rows = accum.rows,
            cols = accum.cols,
            "accumulator ready"
        );
        self.accum = accum;
        self.geometry = geometry;
    }

    #[inline]
    pub fn angles(&self) -> &AngleTable {
        &self.angles
    }

    #[inline]
    pub fn geometry(&self) -> &ImageGeometry {
        &self.geometry
    }

    /// Raw histogram from the last [`init`](Self::init).
    #[inline]
    pub fn accumulator(&self) -> &HoughMap {
        &self.accum
    }

    /// Copy of the histogram with every cell below `thresh` zeroed.
    pub fn accumulation_matrix(&self, thresh: f32) -> HoughMap {
        self.accum.threshold(thresh)
    }

    /// Local maxima of the histogram with at least `thresh` votes.
    pub fn peaks(&self, thresh: i32) -> Vec<Peak> {
        find_peaks(&self.accum, thresh)
    }

    /// Image-space segments for every peak with at least `thresh` votes.
    /// Empty when `thresh < 1`.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self)))]
    pub fn lines(&self, thresh: i32) -> Vec<LineSegment> {
        self.peaks(thresh)
            .into_iter()
            .map(|p| segment_for(p, &self.geometry, &self.angles))
            .collect()
    }

    /// Segment for a single histogram coordinate, bypassing peak extraction.
    /// `None` when `theta` is outside the angle table.
    pub fn line(&self, rho_index: usize, theta: usize) -> Option<LineSegment> {
        self.angles.get(theta)?;
        Some(segment_for(
            Peak { rho_index, theta },
            &self.geometry,
            &self.angles,
        ))
    }
}

/// Timed detection outcome containing segments and profiling data.
#[derive(Clone, Debug)]
pub struct HoughResult {
    /// Detected segments, one per peak in `peaks`.
    pub lines: Vec<LineSegment>,
    pub peaks: Vec<Peak>,
    pub geometry: ImageGeometry,
    /// Time spent normalizing and accumulating votes (milliseconds).
    pub accum_ms: f64,
    /// Time spent on thresholding, peak extraction and mapping (milliseconds).
    pub peaks_ms: f64,
}

/// Detect lines in an 8-bit grayscale buffer.
///
/// This is a convenience that combines:
/// - min-max normalization and vote accumulation
/// - thresholding + 3x3 local-maximum extraction
/// - mapping each peak to an image-space segment
///
/// Returns an empty list when `img.len() != w * h`.
pub fn detect_lines_u8(img: &[u8], w: usize, h: usize, params: &HoughParams) -> Vec<LineSegment> {
    let Some(view) = ImageView::from_u8_slice(w, h, img) else {
        return Vec::new();
    };
    let mut hough = HoughTransform::new(params);
    hough.init(&view);
    hough.lines(params.threshold)
}

/// Same as [`detect_lines_u8`], also reporting peaks and per-phase timings.
pub fn detect_lines_u8_with_trace(
    img: &[u8],
    w: usize,
    h: usize,
    params: &HoughParams,
) -> HoughResult {
    let mut hough = HoughTransform::new(params);

    let accum_started = Instant::now();
    if let Some(view) = ImageView::from_u8_slice(w, h, img) {
        #[cfg(feature = "tracing")]
        let _span = debug_span!("accumulate").entered();
        hough.init(&view);
    }
    let accum_ms = accum_started.elapsed().as_secs_f64() * 1000.0;

    let peaks_started = Instant::now();
    #[cfg(feature = "tracing")]
    let peaks_span = debug_span!("peaks").entered();
    let peaks = hough.peaks(params.threshold);
    let lines = peaks
        .iter()
        .map(|&p| segment_for(p, hough.geometry(), hough.angles()))
        .collect();
    #[cfg(feature = "tracing")]
    drop(peaks_span);
    let peaks_ms = peaks_started.elapsed().as_secs_f64() * 1000.0;

    HoughResult {
        lines,
        peaks,
        geometry: *hough.geometry(),
        accum_ms,
        peaks_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal(n: usize) -> Vec<u8> {
        let mut img = vec![0u8; n * n];
        for i in 0..n {
            img[i * n + i] = 255;
        }
        img
    }

    #[test]
    fn fresh_engine_has_empty_accumulator() {
        let hough = HoughTransform::default();
        assert_eq!(hough.angles().len(), 180);
        assert!(hough.accumulator().is_empty());
        assert!(hough.lines(1).is_empty());
        assert!(hough.line(3, 180).is_none());
    }

    #[test]
    fn init_replaces_previous_histogram() {
        let mut hough = HoughTransform::default();
        let img = diagonal(20);
        hough.init(&ImageView::from_u8_slice(20, 20, &img).unwrap());
        assert_eq!(hough.accumulator().rows, 28);

        let small = vec![0u8; 4 * 4];
        hough.init(&ImageView::from_u8_slice(4, 4, &small).unwrap());
        assert_eq!(hough.geometry().rho_range, 2);
        assert_eq!(hough.accumulator().rows, 4);
        assert!(hough.accumulator().data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn theta_max_sets_histogram_width() {
        let params = HoughParams {
            theta_max: 90,
            ..Default::default()
        };
        let mut hough = HoughTransform::new(&params);
        let img = diagonal(10);
        hough.init(&ImageView::from_u8_slice(10, 10, &img).unwrap());
        assert_eq!(hough.accumulator().cols, 90);
        assert_eq!(hough.accumulation_matrix(0.0).cols, 90);
    }

    #[test]
    fn trace_reports_same_lines_as_plain_detection() {
        let params = HoughParams {
            threshold: 40,
            ..Default::default()
        };
        let img = diagonal(50);
        let plain = detect_lines_u8(&img, 50, 50, &params);
        let traced = detect_lines_u8_with_trace(&img, 50, 50, &params);
        assert_eq!(plain, traced.lines);
        assert_eq!(traced.peaks.len(), traced.lines.len());
        assert_eq!(traced.geometry.rho_range, 35);
        assert!(traced.accum_ms >= 0.0 && traced.peaks_ms >= 0.0);
    }

    #[test]
    fn mismatched_buffer_detects_nothing() {
        let params = HoughParams::default();
        assert!(detect_lines_u8(&[255u8; 10], 4, 4, &params).is_empty());
        let res = detect_lines_u8_with_trace(&[255u8; 10], 4, 4, &params);
        assert!(res.lines.is_empty());
        assert_eq!(res.geometry, ImageGeometry::default());
    }
}
