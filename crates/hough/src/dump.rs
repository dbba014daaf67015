//! Serializable snapshot of a line detection.

use anyhow::{Context, Result};
use hough_core::{HoughParams, HoughResult, LineSegment};
use serde::Serialize;
use std::{fs::File, io::Write, path::Path};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineOut {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub rho_index: Option<usize>,
    pub theta: Option<usize>,
}

impl From<&LineSegment> for LineOut {
    fn from(s: &LineSegment) -> Self {
        Self {
            x1: s.p1.x,
            y1: s.p1.y,
            x2: s.p2.x,
            y2: s.p2.y,
            rho_index: None,
            theta: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LinesDump {
    pub width: usize,
    pub height: usize,
    pub theta_max: usize,
    pub threshold: i32,
    pub rho_range: usize,
    pub accum_ms: Option<f64>,
    pub peaks_ms: Option<f64>,
    pub lines: Vec<LineOut>,
}

impl LinesDump {
    /// Snapshot of a traced detection, keeping each line's histogram coordinate.
    pub fn from_result(res: &HoughResult, params: &HoughParams) -> Self {
        let lines = res
            .lines
            .iter()
            .zip(&res.peaks)
            .map(|(s, p)| LineOut {
                rho_index: Some(p.rho_index),
                theta: Some(p.theta),
                ..LineOut::from(s)
            })
            .collect();
        Self {
            width: res.geometry.width,
            height: res.geometry.height,
            theta_max: params.theta_max,
            threshold: params.threshold,
            rho_range: res.geometry.rho_range,
            accum_ms: Some(res.accum_ms),
            peaks_ms: Some(res.peaks_ms),
            lines,
        }
    }
}

pub fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    let mut json_file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(&mut json_file, value)?;
    json_file.write_all(b"\n")?;
    log::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hough_core::{ImageGeometry, Peak, Point};

    #[test]
    fn dump_pairs_lines_with_peaks() {
        let res = HoughResult {
            lines: vec![LineSegment {
                p1: Point::new(0, 3),
                p2: Point::new(20, 17),
            }],
            peaks: vec![Peak {
                rho_index: 14,
                theta: 135,
            }],
            geometry: ImageGeometry::new(20, 20),
            accum_ms: 1.5,
            peaks_ms: 0.25,
        };
        let dump = LinesDump::from_result(&res, &HoughParams::default());
        assert_eq!(dump.rho_range, 14);
        assert_eq!(dump.lines.len(), 1);
        assert_eq!(dump.lines[0].theta, Some(135));
        assert_eq!((dump.lines[0].x2, dump.lines[0].y2), (20, 17));

        let json = serde_json::to_value(&dump).unwrap();
        assert_eq!(json["lines"][0]["rho_index"], 14);
        assert_eq!(json["threshold"], 80);
    }
}
