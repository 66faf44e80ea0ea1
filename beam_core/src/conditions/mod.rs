//! # Support Conditions
//!
//! Each support condition is a [`ConditionAnalyzer`]: given a [`Beam`] and a
//! uniformly distributed load it evaluates deflection, bending moment and shear
//! force at a position. The set is closed; [`ConditionName`] enumerates it and is
//! the only way to ask the engine for one.
//!
//! ## Available Conditions
//!
//! - [`simply_supported`] - single span, pin + roller (`"simply-supported"`)
//! - [`two_span_unequal`] - continuous over three supports, unequal spans (`"two-span-unequal"`)
//!
//! ## Sign Conventions
//!
//! - Load: positive downward
//! - Deflection: negative downward
//! - Shear: positive at the left support, decreasing with `x`
//! - Moment: simply-supported curve is negative under a downward load; the
//!   two-span curve is built from the support reactions (positive in the spans,
//!   negative over the interior support)

pub mod simply_supported;
pub mod two_span_unequal;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::errors::{AnalysisError, AnalysisResult};

pub use simply_supported::SimplySupported;
pub use two_span_unequal::{SupportReactions, TwoSpanUnequal};

/// Supported condition names.
///
/// Serializes as the kebab-case name used on the engine API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionName {
    /// `"simply-supported"`
    SimplySupported,
    /// `"two-span-unequal"`
    TwoSpanUnequal,
}

impl ConditionName {
    /// Every supported condition
    pub const ALL: [ConditionName; 2] =
        [ConditionName::SimplySupported, ConditionName::TwoSpanUnequal];

    /// Name used on the engine API
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionName::SimplySupported => "simply-supported",
            ConditionName::TwoSpanUnequal => "two-span-unequal",
        }
    }

    /// Human-readable name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ConditionName::SimplySupported => "Simply supported",
            ConditionName::TwoSpanUnequal => "Two-span unequal (continuous)",
        }
    }
}

impl fmt::Display for ConditionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionName {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConditionName::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| AnalysisError::invalid_condition(s))
    }
}

/// The three response quantities an analyzer produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    /// Vertical displacement
    Deflection,
    /// Internal bending moment
    BendingMoment,
    /// Internal shear force
    ShearForce,
}

impl Quantity {
    /// All quantities in plotting order
    pub const ALL: [Quantity; 3] =
        [Quantity::Deflection, Quantity::BendingMoment, Quantity::ShearForce];

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Quantity::Deflection => "Deflection",
            Quantity::BendingMoment => "Bending moment",
            Quantity::ShearForce => "Shear force",
        }
    }

    /// Output unit label
    pub fn unit(&self) -> &'static str {
        use crate::units::labels;
        match self {
            Quantity::Deflection => labels::DEFLECTION,
            Quantity::BendingMoment => labels::MOMENT,
            Quantity::ShearForce => labels::SHEAR,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Closed-form response of a beam under one support condition.
///
/// The `*_at` methods are the raw formulas and do not check the position;
/// [`ConditionAnalyzer::evaluate`] checks bounds first and is what equations call.
pub trait ConditionAnalyzer: fmt::Debug + Send + Sync {
    /// Which condition this analyzer implements
    fn name(&self) -> ConditionName;

    /// Valid position range `(min, max)` for this beam
    fn domain(&self, beam: &Beam) -> (f64, f64);

    /// Support positions along the beam, left to right
    fn support_positions(&self, beam: &Beam) -> Vec<f64> {
        let (min, max) = self.domain(beam);
        vec![min, max]
    }

    /// Deflection at `x`, multiplied by `scale`
    fn deflection_at(&self, beam: &Beam, load: f64, x: f64, scale: f64) -> f64;

    /// Bending moment at `x`
    fn bending_moment_at(&self, beam: &Beam, load: f64, x: f64) -> f64;

    /// Shear force at `x`
    fn shear_force_at(&self, beam: &Beam, load: f64, x: f64) -> f64;

    /// Fail with `PositionOutOfBounds` unless `min <= x && x <= max`.
    ///
    /// `NaN` positions fail.
    fn check_position(&self, beam: &Beam, x: f64) -> AnalysisResult<()> {
        let (min, max) = self.domain(beam);
        if x >= min && x <= max {
            Ok(())
        } else {
            Err(AnalysisError::out_of_bounds(x, min, max))
        }
    }

    /// Bounds-checked evaluation of one quantity.
    ///
    /// `scale` only affects deflection.
    fn evaluate(
        &self,
        quantity: Quantity,
        beam: &Beam,
        load: f64,
        x: f64,
        scale: f64,
    ) -> AnalysisResult<f64> {
        self.check_position(beam, x)?;
        let y = match quantity {
            Quantity::Deflection => self.deflection_at(beam, load, x, scale),
            Quantity::BendingMoment => self.bending_moment_at(beam, load, x),
            Quantity::ShearForce => self.shear_force_at(beam, load, x),
        };
        log::trace!("{} {} at x={}: {}", self.name(), quantity, x, y);
        Ok(y)
    }
}
