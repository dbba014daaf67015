/// Cosine/sine lookup over `theta_max` one-degree buckets.
///
/// Bucket `theta` corresponds to `theta * π / 180` radians. The angle is
/// computed in `f64` and narrowed to `f32` before the trig call, so every
/// consumer of the table sees the same single-precision values.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleTable {
    cos: Vec<f32>,
    sin: Vec<f32>,
}

impl AngleTable {
    pub fn new(theta_max: usize) -> Self {
        let mut cos = Vec::with_capacity(theta_max);
        let mut sin = Vec::with_capacity(theta_max);
        for theta in 0..theta_max {
            let rad = (theta as f64 * core::f64::consts::PI / 180.0) as f32;
            cos.push(rad.cos());
            sin.push(rad.sin());
        }
        Self { cos, sin }
    }

    /// Number of angle buckets.
    #[inline]
    pub fn len(&self) -> usize {
        self.cos.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cos.is_empty()
    }

    #[inline]
    pub fn cos(&self, theta: usize) -> f32 {
        self.cos[theta]
    }

    #[inline]
    pub fn sin(&self, theta: usize) -> f32 {
        self.sin[theta]
    }

    /// `(cos, sin)` for a bucket, or `None` past the end of the table.
    #[inline]
    pub fn get(&self, theta: usize) -> Option<(f32, f32)> {
        Some((*self.cos.get(theta)?, *self.sin.get(theta)?))
    }
}
