//! JSON configuration for the line detector.
//!
//! Every field is optional; absent fields keep the [`HoughParams`] defaults.

use anyhow::{Context, Result};
use hough_core::HoughParams;
use serde::{Deserialize, Serialize};
use std::{fs::File, path::Path};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HoughConfig {
    /// Number of one-degree angle buckets.
    pub theta_max: Option<usize>,
    /// Minimum vote count for a line.
    pub threshold: Option<i32>,
    /// Level name understood by [`crate::logger::init_with_level`].
    pub log_level: Option<String>,
}

pub fn load_config(path: &Path) -> Result<HoughConfig> {
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let cfg: HoughConfig = serde_json::from_reader(file)
        .with_context(|| format!("parsing config {}", path.display()))?;
    log::debug!("loaded config from {}: {:?}", path.display(), cfg);
    Ok(cfg)
}

/// Merge the overrides of `cfg` into `params`.
///
/// A `theta_max` of zero is rejected. Thresholds below 1 are accepted and
/// simply produce no lines.
pub fn apply_params_overrides(params: &mut HoughParams, cfg: &HoughConfig) -> Result<()> {
    if let Some(t) = cfg.theta_max {
        if t == 0 {
            anyhow::bail!("theta_max must be >= 1");
        }
        params.theta_max = t;
    }
    if let Some(t) = cfg.threshold {
        if t < 1 {
            log::warn!("threshold {t} is below 1; no lines will be reported");
        }
        params.threshold = t;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: HoughConfig = serde_json::from_str(r#"{ "threshold": 42 }"#).unwrap();
        let mut params = HoughParams::default();
        apply_params_overrides(&mut params, &cfg).unwrap();
        assert_eq!(params.threshold, 42);
        assert_eq!(params.theta_max, 180);
        assert!(cfg.log_level.is_none());
    }

    #[test]
    fn zero_theta_max_is_rejected() {
        let cfg = HoughConfig {
            theta_max: Some(0),
            ..Default::default()
        };
        let mut params = HoughParams::default();
        let err = apply_params_overrides(&mut params, &cfg).unwrap_err();
        assert!(err.to_string().contains("theta_max"));
        assert_eq!(params.theta_max, 180);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/hough.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/hough.json"));
    }
}
