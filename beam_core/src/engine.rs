//! # Beam Analysis Engine
//!
//! Dispatches a condition name to its [`ConditionAnalyzer`] and hands back the
//! requested equation alongside the inputs it was built from. The analyzer table
//! is process-wide, built once on first use and never mutated, so an engine is
//! free to construct and share across threads.
//!
//! The engine validates one thing only: the condition name. Beam and load are
//! passed through untouched (see [`Beam::validate_for`] for opt-in checks).
//!
//! ## Example
//!
//! ```rust
//! use beam_core::{Beam, BeamAnalysisEngine, Material};
//!
//! let engine = BeamAnalysisEngine::new();
//! let beam = Beam::single_span(4.0, Material::with_flexural_rigidity("Steel", 210_000.0));
//!
//! let moment = engine.get_bending_moment(&beam, 10.0, "simply-supported").unwrap();
//! assert_eq!(moment.evaluate(2.0).unwrap().y, -20.0);
//!
//! assert!(engine.get_bending_moment(&beam, 10.0, "triple-span").is_err());
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::beam::Beam;
use crate::conditions::{
    ConditionAnalyzer, ConditionName, Quantity, SimplySupported, TwoSpanUnequal,
};
use crate::equation::ResponseEquation;
use crate::errors::{AnalysisError, AnalysisResult};
use crate::series::ResponseSet;
use crate::settings::AnalysisSettings;

static SIMPLY_SUPPORTED: SimplySupported = SimplySupported;
static TWO_SPAN_UNEQUAL: TwoSpanUnequal = TwoSpanUnequal;

/// Condition name → analyzer instance
type AnalyzerTable = HashMap<ConditionName, &'static dyn ConditionAnalyzer>;

static ANALYZERS: Lazy<AnalyzerTable> = Lazy::new(|| {
    let mut table: AnalyzerTable = HashMap::new();
    table.insert(ConditionName::SimplySupported, &SIMPLY_SUPPORTED);
    table.insert(ConditionName::TwoSpanUnequal, &TWO_SPAN_UNEQUAL);
    table
});

/// Condition dispatcher
#[derive(Debug, Clone, Copy)]
pub struct BeamAnalysisEngine {
    analyzers: &'static AnalyzerTable,
}

impl BeamAnalysisEngine {
    /// Create an engine over the built-in analyzer table
    pub fn new() -> Self {
        BeamAnalysisEngine {
            analyzers: &ANALYZERS,
        }
    }

    /// Conditions this engine can dispatch, in a stable order
    pub fn supported_conditions(&self) -> Vec<ConditionName> {
        let mut names: Vec<ConditionName> = self.analyzers.keys().copied().collect();
        names.sort();
        names
    }

    /// Resolve a condition name to its analyzer.
    ///
    /// Fails with `InvalidCondition` for any name outside the supported set.
    pub fn analyzer(&self, condition: &str) -> AnalysisResult<&'static dyn ConditionAnalyzer> {
        let resolved = condition
            .parse::<ConditionName>()
            .ok()
            .and_then(|name| self.analyzers.get(&name).copied());

        match resolved {
            Some(analyzer) => {
                log::debug!("dispatching condition '{}' to {:?}", condition, analyzer);
                Ok(analyzer)
            }
            None => {
                log::warn!("rejected unknown condition '{}'", condition);
                Err(AnalysisError::invalid_condition(condition))
            }
        }
    }

    /// Deflection equation for `beam` under `load`
    pub fn get_deflection(
        &self,
        beam: &Beam,
        load: f64,
        condition: &str,
    ) -> AnalysisResult<ResponseEquation> {
        self.get_equation(Quantity::Deflection, beam, load, condition)
    }

    /// Bending moment equation for `beam` under `load`
    pub fn get_bending_moment(
        &self,
        beam: &Beam,
        load: f64,
        condition: &str,
    ) -> AnalysisResult<ResponseEquation> {
        self.get_equation(Quantity::BendingMoment, beam, load, condition)
    }

    /// Shear force equation for `beam` under `load`
    pub fn get_shear_force(
        &self,
        beam: &Beam,
        load: f64,
        condition: &str,
    ) -> AnalysisResult<ResponseEquation> {
        self.get_equation(Quantity::ShearForce, beam, load, condition)
    }

    /// Equation for any quantity. Nothing is evaluated until the equation is.
    pub fn get_equation(
        &self,
        quantity: Quantity,
        beam: &Beam,
        load: f64,
        condition: &str,
    ) -> AnalysisResult<ResponseEquation> {
        let analyzer = self.analyzer(condition)?;
        Ok(ResponseEquation {
            beam: beam.clone(),
            load,
            equation: analyzer.equation(quantity, beam, load),
        })
    }

    /// Sample all three quantities over the whole beam.
    ///
    /// The condition is resolved before `settings` are checked, so an unknown
    /// name reports `InvalidCondition` whatever the settings hold.
    pub fn analyze(
        &self,
        beam: &Beam,
        load: f64,
        condition: &str,
        settings: &AnalysisSettings,
    ) -> AnalysisResult<ResponseSet> {
        let analyzer = self.analyzer(condition)?;
        settings.validate()?;

        let deflection = analyzer.deflection(beam, load).sample_with(settings)?;
        let bending_moment = analyzer.bending_moment(beam, load).sample_with(settings)?;
        let shear_force = analyzer.shear_force(beam, load).sample_with(settings)?;

        Ok(ResponseSet {
            condition: analyzer.name(),
            beam: beam.clone(),
            load,
            deflection,
            bending_moment,
            shear_force,
        })
    }
}

impl Default for BeamAnalysisEngine {
    fn default() -> Self {
        BeamAnalysisEngine::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::Material;

    fn beam() -> Beam {
        Beam::two_span(4.0, 6.0, Material::with_flexural_rigidity("Test", 2.0e12))
    }

    #[test]
    fn test_supported_conditions() {
        let engine = BeamAnalysisEngine::new();
        assert_eq!(engine.supported_conditions(), ConditionName::ALL.to_vec());
    }

    #[test]
    fn test_dispatch_matches_condition() {
        let engine = BeamAnalysisEngine::new();
        for condition in ConditionName::ALL {
            let analyzer = engine.analyzer(condition.as_str()).unwrap();
            assert_eq!(analyzer.name(), condition);
        }
    }

    #[test]
    fn test_response_equation_keeps_inputs() {
        let engine = BeamAnalysisEngine::new();
        let response = engine.get_shear_force(&beam(), 10.0, "two-span-unequal").unwrap();
        assert_eq!(response.beam, beam());
        assert_eq!(response.load, 10.0);
        assert_eq!(response.equation.quantity(), Quantity::ShearForce);
        assert_eq!(response.equation.condition(), ConditionName::TwoSpanUnequal);
    }

    #[test]
    fn test_invalid_condition() {
        let engine = BeamAnalysisEngine::new();
        for quantity in Quantity::ALL {
            let err = engine
                .get_equation(quantity, &beam(), 10.0, "triple-span")
                .unwrap_err();
            assert_eq!(err, AnalysisError::invalid_condition("triple-span"));
        }
        assert!(engine.get_deflection(&beam(), 10.0, "").is_err());
    }

    #[test]
    fn test_construction_is_lazy() {
        // A beam with no stiffness still yields an equation; NaN appears only on evaluation
        let engine = BeamAnalysisEngine::new();
        let bare = Beam::single_span(4.0, Material::new("Bare"));
        let response = engine.get_deflection(&bare, 10.0, "simply-supported").unwrap();
        assert!(response.evaluate(2.0).unwrap().y.is_nan());
    }

    #[test]
    fn test_analyze_produces_three_series() {
        let engine = BeamAnalysisEngine::new();
        let settings = AnalysisSettings::default();
        let set = engine.analyze(&beam(), 10.0, "two-span-unequal", &settings).unwrap();

        assert_eq!(set.condition, ConditionName::TwoSpanUnequal);
        assert_eq!(set.deflection.quantity, Quantity::Deflection);
        assert_eq!(set.bending_moment.quantity, Quantity::BendingMoment);
        assert_eq!(set.shear_force.quantity, Quantity::ShearForce);
        assert!(set.deflection.samples.len() >= settings.sample_points);
    }

    #[test]
    fn test_analyze_rejects_bad_settings() {
        let engine = BeamAnalysisEngine::new();
        let settings = AnalysisSettings {
            sample_points: 1,
            ..Default::default()
        };
        let err = engine
            .analyze(&beam(), 10.0, "two-span-unequal", &settings)
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_analyze_reports_condition_before_settings() {
        let engine = BeamAnalysisEngine::new();
        let settings = AnalysisSettings {
            sample_points: 0,
            deflection_scale: f64::NAN,
            ..Default::default()
        };
        let err = engine
            .analyze(&beam(), 10.0, "cantilever", &settings)
            .unwrap_err();
        assert_eq!(err, AnalysisError::invalid_condition("cantilever"));
    }

    #[test]
    fn test_analyze_bare_material_summarizes_to_nan() {
        let engine = BeamAnalysisEngine::new();
        let bare = Beam::single_span(4.0, Material::new("Bare"));
        let set = engine
            .analyze(&bare, 10.0, "simply-supported", &AnalysisSettings::default())
            .unwrap();

        let deflection = set.series(Quantity::Deflection).summary();
        assert!(deflection.max_value.is_nan());
        assert!(deflection.min_value.is_nan());
        assert!(deflection.max_abs_value.is_nan());

        // Moment and shear do not depend on stiffness
        let moment = set.series(Quantity::BendingMoment).summary();
        assert_eq!(moment.min_value, -20.0);
        assert_eq!(moment.min_position, 2.0);
    }
}
