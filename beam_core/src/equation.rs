//! # Equations
//!
//! An [`Equation`] is one response quantity of one analyzer, bound to a specific
//! beam and load. Building it computes nothing; every [`Equation::evaluate`]
//! call checks the position and then runs the closed-form formula from scratch.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::conditions::{ConditionAnalyzer, Quantity, SimplySupported};
//! use beam_core::equation::Equation;
//! use beam_core::{Beam, Material};
//!
//! static ANALYZER: SimplySupported = SimplySupported;
//!
//! let beam = Beam::single_span(4.0, Material::with_flexural_rigidity("Steel", 210_000.0));
//! let moment = Equation::new(&ANALYZER, Quantity::BendingMoment, beam, 10.0);
//!
//! let sample = moment.evaluate(2.0).unwrap();
//! assert_eq!((sample.x, sample.y), (2.0, -20.0));
//! assert!(moment.evaluate(5.0).is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::conditions::{ConditionAnalyzer, ConditionName, Quantity};
use crate::errors::AnalysisResult;
use crate::units::DEFAULT_DEFLECTION_SCALE;

/// One evaluated point: position and response value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Position along the beam (m)
    pub x: f64,
    /// Response value in the quantity's unit
    pub y: f64,
}

impl Sample {
    /// Create a sample
    pub fn new(x: f64, y: f64) -> Self {
        Sample { x, y }
    }
}

/// A response quantity closed over one beam and load
#[derive(Debug, Clone)]
pub struct Equation {
    analyzer: &'static dyn ConditionAnalyzer,
    quantity: Quantity,
    beam: Beam,
    load: f64,
}

impl Equation {
    /// Bind `analyzer`'s `quantity` to a beam and load
    pub fn new(
        analyzer: &'static dyn ConditionAnalyzer,
        quantity: Quantity,
        beam: Beam,
        load: f64,
    ) -> Self {
        Equation {
            analyzer,
            quantity,
            beam,
            load,
        }
    }

    /// Evaluate at `x` with the default deflection scale
    pub fn evaluate(&self, x: f64) -> AnalysisResult<Sample> {
        self.evaluate_scaled(x, DEFAULT_DEFLECTION_SCALE)
    }

    /// Evaluate at `x` with an explicit deflection scale.
    ///
    /// The scale only affects deflection equations.
    pub fn evaluate_scaled(&self, x: f64, scale: f64) -> AnalysisResult<Sample> {
        let y = self
            .analyzer
            .evaluate(self.quantity, &self.beam, self.load, x, scale)?;
        Ok(Sample { x, y })
    }

    /// Valid position range `(min, max)`
    pub fn domain(&self) -> (f64, f64) {
        self.analyzer.domain(&self.beam)
    }

    /// Support positions, left to right
    pub fn support_positions(&self) -> Vec<f64> {
        self.analyzer.support_positions(&self.beam)
    }

    /// Condition this equation belongs to
    pub fn condition(&self) -> ConditionName {
        self.analyzer.name()
    }

    /// Quantity this equation produces
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Beam the equation is bound to
    pub fn beam(&self) -> &Beam {
        &self.beam
    }

    /// Load the equation is bound to
    pub fn load(&self) -> f64 {
        self.load
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, w = {})", self.quantity, self.condition(), self.load)
    }
}

impl dyn ConditionAnalyzer {
    /// Build the deflection equation for this beam and load
    pub fn deflection(&'static self, beam: &Beam, load: f64) -> Equation {
        Equation::new(self, Quantity::Deflection, beam.clone(), load)
    }

    /// Build the bending moment equation for this beam and load
    pub fn bending_moment(&'static self, beam: &Beam, load: f64) -> Equation {
        Equation::new(self, Quantity::BendingMoment, beam.clone(), load)
    }

    /// Build the shear force equation for this beam and load
    pub fn shear_force(&'static self, beam: &Beam, load: f64) -> Equation {
        Equation::new(self, Quantity::ShearForce, beam.clone(), load)
    }

    /// Build the equation for any quantity
    pub fn equation(&'static self, quantity: Quantity, beam: &Beam, load: f64) -> Equation {
        Equation::new(self, quantity, beam.clone(), load)
    }
}

/// Engine output: the equation together with the inputs it was built from
#[derive(Debug, Clone)]
pub struct ResponseEquation {
    /// Beam passed to the engine
    pub beam: Beam,
    /// Load passed to the engine
    pub load: f64,
    /// The lazily evaluated equation
    pub equation: Equation,
}

impl ResponseEquation {
    /// Shorthand for `self.equation.evaluate(x)`
    pub fn evaluate(&self, x: f64) -> AnalysisResult<Sample> {
        self.equation.evaluate(x)
    }

    /// Shorthand for `self.equation.evaluate_scaled(x, scale)`
    pub fn evaluate_scaled(&self, x: f64, scale: f64) -> AnalysisResult<Sample> {
        self.equation.evaluate_scaled(x, scale)
    }
}
