//! # Analysis Settings
//!
//! Configuration for sampling equations into plot-ready series. Settings
//! serialize to JSON with every field optional; missing fields take defaults.
//! Load from disk with [`crate::file_io::load_settings`].
//!
//! ```json
//! { "sample_points": 201, "deflection_scale": 1.0 }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, AnalysisResult};
use crate::units::DEFAULT_DEFLECTION_SCALE;

/// Default number of evenly spaced sample points (every 1% of the beam)
pub const DEFAULT_SAMPLE_POINTS: usize = 101;

/// Fewest sample points that still cover both ends
pub const MIN_SAMPLE_POINTS: usize = 2;

/// Sampling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Evenly spaced points per series, ends included
    pub sample_points: usize,
    /// Scale factor passed to every deflection evaluation
    pub deflection_scale: f64,
    /// Also sample exactly at every support position
    pub include_supports: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            sample_points: DEFAULT_SAMPLE_POINTS,
            deflection_scale: DEFAULT_DEFLECTION_SCALE,
            include_supports: true,
        }
    }
}

impl AnalysisSettings {
    /// Set the number of sample points
    pub fn with_sample_points(mut self, points: usize) -> Self {
        self.sample_points = points;
        self
    }

    /// Set the deflection scale
    pub fn with_deflection_scale(mut self, scale: f64) -> Self {
        self.deflection_scale = scale;
        self
    }

    /// Reject settings that cannot produce a meaningful series
    pub fn validate(&self) -> AnalysisResult<()> {
        if self.sample_points < MIN_SAMPLE_POINTS {
            return Err(AnalysisError::invalid_input(
                "sample_points",
                self.sample_points.to_string(),
                format!("At least {} sample points are required", MIN_SAMPLE_POINTS),
            ));
        }
        if !self.deflection_scale.is_finite() || self.deflection_scale <= 0.0 {
            return Err(AnalysisError::invalid_input(
                "deflection_scale",
                self.deflection_scale.to_string(),
                "Deflection scale must be finite and positive",
            ));
        }
        Ok(())
    }
}
