//! Thresholding and 3×3 local-maximum extraction on the vote histogram.
use crate::HoughMap;

#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Histogram coordinate of a detected line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Peak {
    pub rho_index: usize,
    pub theta: usize,
}

/// Find local maxima among the cells of `map` that reach `thresh` votes.
///
/// A cell is a peak when it survives thresholding and no cell of its 3×3
/// neighborhood is strictly greater, so every cell of an equal-valued plateau
/// qualifies. The first and last row and column are never tested. The order
/// of the returned peaks is unspecified.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(map), fields(rows = map.rows, cols = map.cols))
)]
pub fn find_peaks(map: &HoughMap, thresh: i32) -> Vec<Peak> {
    if thresh < 1 || map.rows < 3 || map.cols < 3 {
        return Vec::new();
    }

    let thresholded = map.threshold(thresh as f32);
    let rows = 1..map.rows - 1;

    #[cfg(feature = "rayon")]
    let peaks = rows
        .into_par_iter()
        .flat_map_iter(|rho_index| peaks_in_row(&thresholded, rho_index))
        .collect();

    #[cfg(not(feature = "rayon"))]
    let peaks = rows
        .flat_map(|rho_index| peaks_in_row(&thresholded, rho_index))
        .collect();

    peaks
}

fn peaks_in_row(map: &HoughMap, rho_index: usize) -> impl Iterator<Item = Peak> + '_ {
    (1..map.cols - 1)
        .filter(move |&theta| is_local_max(map, rho_index, theta))
        .map(move |theta| Peak { rho_index, theta })
}

/// Callers keep `(rho_index, theta)` at least one cell away from every border.
fn is_local_max(map: &HoughMap, rho_index: usize, theta: usize) -> bool {
    let v = map.at(rho_index, theta);
    if v == 0.0 {
        return false;
    }

    for rr in rho_index - 1..=rho_index + 1 {
        for tt in theta - 1..=theta + 1 {
            if map.at(rr, tt) > v {
                return false;
            }
        }
    }
    true
}
