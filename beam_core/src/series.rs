//! # Response Series
//!
//! Sampling an [`Equation`] over the beam gives the `{x, y}` sequence a plotting
//! layer consumes. Positions are evenly spaced with both ends included; support
//! positions can be added so the interior support of a two-span beam is always
//! hit exactly. Any evaluation error aborts the whole series.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::{Beam, BeamAnalysisEngine, Material};
//!
//! let engine = BeamAnalysisEngine::new();
//! let beam = Beam::single_span(4.0, Material::with_flexural_rigidity("Steel", 2.0e12));
//!
//! let shear = engine.get_shear_force(&beam, 10.0, "simply-supported").unwrap();
//! let series = shear.equation.sample(5).unwrap();
//!
//! let xs: Vec<f64> = series.samples.iter().map(|s| s.x).collect();
//! assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(series.summary().max_abs_value, 20.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::conditions::{ConditionName, Quantity};
use crate::equation::{Equation, Sample};
use crate::errors::AnalysisResult;
use crate::settings::{AnalysisSettings, MIN_SAMPLE_POINTS};
use crate::units::DEFAULT_DEFLECTION_SCALE;

/// A sampled quantity, ready for plotting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSeries {
    /// Condition the samples were computed under
    pub condition: ConditionName,
    /// What `y` measures
    pub quantity: Quantity,
    /// Samples in ascending `x`
    pub samples: Vec<Sample>,
}

/// Extremes of a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Largest value
    pub max_value: f64,
    /// Position of the largest value
    pub max_position: f64,
    /// Smallest value
    pub min_value: f64,
    /// Position of the smallest value
    pub min_position: f64,
    /// Largest magnitude
    pub max_abs_value: f64,
}

impl ResponseSeries {
    /// Extremes over the samples.
    ///
    /// An empty series summarizes to zeros. A single `NaN` sample makes every
    /// field `NaN`, so an undefined response never reads as a zero one.
    pub fn summary(&self) -> SeriesSummary {
        if self.samples.iter().any(|s| s.y.is_nan()) {
            return SeriesSummary {
                max_value: f64::NAN,
                max_position: f64::NAN,
                min_value: f64::NAN,
                min_position: f64::NAN,
                max_abs_value: f64::NAN,
            };
        }

        let Some(first) = self.samples.first() else {
            return SeriesSummary {
                max_value: 0.0,
                max_position: 0.0,
                min_value: 0.0,
                min_position: 0.0,
                max_abs_value: 0.0,
            };
        };

        let mut summary = SeriesSummary {
            max_value: first.y,
            max_position: first.x,
            min_value: first.y,
            min_position: first.x,
            max_abs_value: first.y.abs(),
        };
        for sample in &self.samples[1..] {
            if sample.y > summary.max_value {
                summary.max_value = sample.y;
                summary.max_position = sample.x;
            }
            if sample.y < summary.min_value {
                summary.min_value = sample.y;
                summary.min_position = sample.x;
            }
            summary.max_abs_value = summary.max_abs_value.max(sample.y.abs());
        }
        summary
    }

    /// Samples as `(x, y)` tuples
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.x, s.y)).collect()
    }
}

/// The three series for one beam, load and condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSet {
    /// Condition analyzed
    pub condition: ConditionName,
    /// Beam analyzed
    pub beam: Beam,
    /// Uniform load applied
    pub load: f64,
    /// Deflection series
    pub deflection: ResponseSeries,
    /// Bending moment series
    pub bending_moment: ResponseSeries,
    /// Shear force series
    pub shear_force: ResponseSeries,
}

impl ResponseSet {
    /// Series for a quantity
    pub fn series(&self, quantity: Quantity) -> &ResponseSeries {
        match quantity {
            Quantity::Deflection => &self.deflection,
            Quantity::BendingMoment => &self.bending_moment,
            Quantity::ShearForce => &self.shear_force,
        }
    }
}

/// `points` evenly spaced positions over `[start, end]`, ends included
fn even_positions(start: f64, end: f64, points: usize) -> Vec<f64> {
    let points = points.max(MIN_SAMPLE_POINTS);
    let last = (points - 1) as f64;
    (0..points)
        .map(|i| {
            if i == points - 1 {
                end
            } else {
                start + (end - start) * i as f64 / last
            }
        })
        .collect()
}

impl Equation {
    /// Sample over the whole domain at `points` evenly spaced positions
    pub fn sample(&self, points: usize) -> AnalysisResult<ResponseSeries> {
        let (min, max) = self.domain();
        self.sample_range(min, max, points)
    }

    /// Sample between `start` and `end` at `points` evenly spaced positions.
    ///
    /// The bounds may come in either order; samples are always ascending in `x`.
    /// Fails with `PositionOutOfBounds` if the range leaves the beam.
    pub fn sample_range(
        &self,
        start: f64,
        end: f64,
        points: usize,
    ) -> AnalysisResult<ResponseSeries> {
        let (low, high) = if end < start { (end, start) } else { (start, end) };
        self.sample_positions(even_positions(low, high, points), DEFAULT_DEFLECTION_SCALE)
    }

    /// Sample over the whole domain as configured by `settings`
    pub fn sample_with(&self, settings: &AnalysisSettings) -> AnalysisResult<ResponseSeries> {
        let (min, max) = self.domain();
        let mut positions = even_positions(min, max, settings.sample_points);

        if settings.include_supports {
            positions.extend(self.support_positions());
            positions.sort_by(f64::total_cmp);
            let tolerance = (max - min).abs() * 1e-9;
            positions.dedup_by(|a, b| (*a - *b).abs() <= tolerance);
        }

        self.sample_positions(positions, settings.deflection_scale)
    }

    fn sample_positions(&self, positions: Vec<f64>, scale: f64) -> AnalysisResult<ResponseSeries> {
        let samples = positions
            .into_iter()
            .map(|x| self.evaluate_scaled(x, scale))
            .collect::<AnalysisResult<Vec<Sample>>>()?;

        Ok(ResponseSeries {
            condition: self.condition(),
            quantity: self.quantity(),
            samples,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BeamAnalysisEngine;
    use crate::errors::AnalysisError;
    use crate::materials::Material;
    use approx::assert_relative_eq;

    fn two_span() -> Beam {
        Beam::two_span(4.0, 6.0, Material::with_flexural_rigidity("Test", 2.0e12))
    }

    #[test]
    fn test_even_positions_hit_both_ends() {
        let xs = even_positions(0.0, 10.0, 3);
        assert_eq!(xs, vec![0.0, 5.0, 10.0]);

        // Clamped to two points
        assert_eq!(even_positions(0.0, 1.0, 0), vec![0.0, 1.0]);
    }

    #[test]
    fn test_end_position_is_exact() {
        // 0.1 * 3 != 0.3 in floating point; the last sample must still be in bounds
        let xs = even_positions(0.0, 0.3, 4);
        assert_eq!(*xs.last().unwrap(), 0.3);
    }

    #[test]
    fn test_sample_with_includes_interior_support() {
        let engine = BeamAnalysisEngine::new();
        let response = engine.get_bending_moment(&two_span(), 10.0, "two-span-unequal").unwrap();

        // 10 points over 10 m never lands on x = 4 by itself
        let settings = AnalysisSettings::default().with_sample_points(10);
        let series = response.equation.sample_with(&settings).unwrap();
        let at_support = series.samples.iter().find(|s| s.x == 4.0).unwrap();
        assert_relative_eq!(at_support.y, -35.0, max_relative = 1e-12);

        let xs: Vec<f64> = series.samples.iter().map(|s| s.x).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sample_with_applies_scale() {
        let engine = BeamAnalysisEngine::new();
        let response = engine.get_deflection(&two_span(), 10.0, "two-span-unequal").unwrap();

        let unit = response
            .equation
            .sample_with(&AnalysisSettings::default().with_deflection_scale(1.0))
            .unwrap();
        let doubled = response
            .equation
            .sample_with(&AnalysisSettings::default().with_deflection_scale(2.0))
            .unwrap();
        for (a, b) in unit.samples.iter().zip(&doubled.samples) {
            assert_relative_eq!(b.y, 2.0 * a.y, max_relative = 1e-12, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sample_range_outside_beam_fails_whole_series() {
        let engine = BeamAnalysisEngine::new();
        let response = engine.get_shear_force(&two_span(), 10.0, "two-span-unequal").unwrap();
        let err = response.equation.sample_range(5.0, 11.0, 7).unwrap_err();
        assert_eq!(err, AnalysisError::out_of_bounds(11.0, 0.0, 10.0));
    }

    #[test]
    fn test_sample_range_reversed_bounds_ascend() {
        let engine = BeamAnalysisEngine::new();
        let beam = Beam::single_span(4.0, Material::with_flexural_rigidity("Test", 2.0e12));
        let response = engine.get_bending_moment(&beam, 10.0, "simply-supported").unwrap();

        let series = response.equation.sample_range(4.0, 0.0, 3).unwrap();
        let xs: Vec<f64> = series.samples.iter().map(|s| s.x).collect();
        assert_eq!(xs, vec![0.0, 2.0, 4.0]);
        assert_eq!(series.samples[1].y, -20.0);
    }

    #[test]
    fn test_summary_propagates_nan() {
        let series = ResponseSeries {
            condition: ConditionName::SimplySupported,
            quantity: Quantity::Deflection,
            samples: vec![
                Sample::new(0.0, 0.0),
                Sample::new(2.0, f64::NAN),
                Sample::new(4.0, 0.0),
            ],
        };
        let summary = series.summary();
        assert!(summary.max_value.is_nan());
        assert!(summary.min_value.is_nan());
        assert!(summary.max_abs_value.is_nan());
    }

    #[test]
    fn test_summary() {
        let series = ResponseSeries {
            condition: ConditionName::SimplySupported,
            quantity: Quantity::ShearForce,
            samples: vec![
                Sample::new(0.0, 20.0),
                Sample::new(2.0, 0.0),
                Sample::new(4.0, -25.0),
            ],
        };
        let summary = series.summary();
        assert_eq!(summary.max_value, 20.0);
        assert_eq!(summary.max_position, 0.0);
        assert_eq!(summary.min_value, -25.0);
        assert_eq!(summary.min_position, 4.0);
        assert_eq!(summary.max_abs_value, 25.0);
        assert_eq!(series.points(), vec![(0.0, 20.0), (2.0, 0.0), (4.0, -25.0)]);
    }

    #[test]
    fn test_empty_summary() {
        let series = ResponseSeries {
            condition: ConditionName::SimplySupported,
            quantity: Quantity::Deflection,
            samples: Vec::new(),
        };
        let summary = series.summary();
        assert_eq!(summary.max_abs_value, 0.0);
        assert_eq!(summary.max_value, 0.0);
        assert_eq!(summary.min_value, 0.0);
    }
}
