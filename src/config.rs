use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CoinscanError, Result};

/// Tunable constants of the detection pipeline.
///
/// Defaults reproduce the classic coin-counting setup: an 11x11 Gaussian
/// with sigma derived from the kernel, Canny hysteresis at 60/150 and a
/// minimum contour area of 10 square pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionParams {
    /// Side of the square Gaussian kernel. Must be odd.
    pub blur_kernel: u32,
    /// Gaussian sigma. Zero or negative derives it from `blur_kernel`.
    pub blur_sigma: f32,
    pub low_threshold: f32,
    pub high_threshold: f32,
    /// Contours with a smaller polygon area are skipped.
    pub min_area: f64,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            blur_kernel: 11,
            blur_sigma: 0.0,
            low_threshold: 60.0,
            high_threshold: 150.0,
            min_area: 10.0,
        }
    }
}

impl DetectionParams {
    /// Read parameters from a JSON file. Missing fields keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|source| CoinscanError::Config {
            message: format!("failed to parse {}", path.display()),
            source,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.blur_kernel == 0 || self.blur_kernel % 2 == 0 {
            return Err(CoinscanError::InvalidParams {
                message: format!("blur_kernel must be odd and positive, got {}", self.blur_kernel),
            });
        }
        if !self.blur_sigma.is_finite() {
            return Err(CoinscanError::InvalidParams {
                message: "blur_sigma must be finite".to_string(),
            });
        }
        if !self.low_threshold.is_finite() || !self.high_threshold.is_finite() {
            return Err(CoinscanError::InvalidParams {
                message: "edge thresholds must be finite".to_string(),
            });
        }
        if self.low_threshold < 0.0 || self.low_threshold > self.high_threshold {
            return Err(CoinscanError::InvalidParams {
                message: format!(
                    "expected 0 <= low_threshold <= high_threshold, got {} and {}",
                    self.low_threshold, self.high_threshold
                ),
            });
        }
        if !self.min_area.is_finite() {
            return Err(CoinscanError::InvalidParams {
                message: "min_area must be finite".to_string(),
            });
        }
        Ok(())
    }

    /// Sigma actually used for the blur.
    pub fn effective_sigma(&self) -> f32 {
        crate::detection::preprocessing::effective_sigma(self.blur_kernel, self.blur_sigma)
    }
}
