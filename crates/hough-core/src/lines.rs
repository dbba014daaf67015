//! Mapping from histogram coordinates back to image-space segments.
use crate::accumulate::ImageGeometry;
use crate::angles::AngleTable;
use crate::peaks::Peak;

/// Integer image-space point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Two endpoints describing a detected line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineSegment {
    pub p1: Point,
    pub p2: Point,
}

/// Convert `peak` into the segment of its line between `x = 0` and
/// `x = width`.
///
/// With `rho = rho_index - rho_range`, the line is
/// `(x - cx) * cos + (y - cy) * sin = rho`. Coordinates truncate toward
/// zero. When `sin` vanishes (theta of 0 or 180 degrees) the line is
/// vertical and the segment runs from `y = 0` to `y = height` at
/// `x = rho / cos + cx` instead.
///
/// Panics if `peak.theta` is outside `angles`.
pub fn segment_for(peak: Peak, geom: &ImageGeometry, angles: &AngleTable) -> LineSegment {
    let cos = angles.cos(peak.theta);
    let sin = angles.sin(peak.theta);
    let rho = peak.rho_index as f32 - geom.rho_range as f32;
    let cx = geom.center_x as f32;
    let cy = geom.center_y as f32;

    if sin.abs() <= f32::EPSILON {
        let x = (rho / cos + cx) as i32;
        return LineSegment {
            p1: Point::new(x, 0),
            p2: Point::new(x, geom.height as i32),
        };
    }

    let y_at = |x: f32| ((rho - (x - cx) * cos) / sin + cy) as i32;
    let w = geom.width as f32;

    LineSegment {
        p1: Point::new(0, y_at(0.0)),
        p2: Point::new(geom.width as i32, y_at(w)),
    }
}
