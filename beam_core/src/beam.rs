//! # Beam Geometry
//!
//! [`Beam`] holds span lengths and a [`Material`]. It has no behaviour of its own:
//! the spans are the only domain bounds an analyzer uses, and the engine never
//! inspects them. [`Beam::validate_for`] is an opt-in check for front ends that
//! want to reject nonsense input before asking for equations.
//!
//! ```text
//!    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓ w
//!    ════════════════════════════
//!    △              △           △
//!    ←──── L1 ─────→←─── L2 ───→
//!      primary span   secondary span (two-span only)
//! ```

use serde::{Deserialize, Serialize};

use crate::conditions::ConditionName;
use crate::errors::{AnalysisError, AnalysisResult};
use crate::materials::{Material, EI};

/// Beam geometry and material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// First (or only) span length (m)
    pub primary_span: f64,
    /// Second span length (m), only meaningful for multi-span conditions
    #[serde(default)]
    pub secondary_span: f64,
    /// Stiffness properties
    pub material: Material,
}

impl Beam {
    /// Create a beam from both spans
    pub fn new(primary_span: f64, secondary_span: f64, material: Material) -> Self {
        Beam {
            primary_span,
            secondary_span,
            material,
        }
    }

    /// Single-span beam (secondary span zero)
    pub fn single_span(span: f64, material: Material) -> Self {
        Beam::new(span, 0.0, material)
    }

    /// Two-span beam
    pub fn two_span(primary_span: f64, secondary_span: f64, material: Material) -> Self {
        Beam::new(primary_span, secondary_span, material)
    }

    /// Sum of both spans
    pub fn total_length(&self) -> f64 {
        self.primary_span + self.secondary_span
    }

    /// Check that the beam makes sense for `condition`.
    ///
    /// Spans must be finite and positive (the secondary span only for
    /// two-span beams) and the material must carry a finite, positive `EI`.
    pub fn validate_for(&self, condition: ConditionName) -> AnalysisResult<()> {
        check_span("primary_span", self.primary_span)?;

        match condition {
            ConditionName::SimplySupported => {}
            ConditionName::TwoSpanUnequal => check_span("secondary_span", self.secondary_span)?,
        }

        let ei = self.material.require_property(EI)?;
        if !ei.is_finite() || ei <= 0.0 {
            return Err(AnalysisError::invalid_input(
                "material.EI",
                ei.to_string(),
                "Flexural rigidity must be finite and positive",
            ));
        }

        Ok(())
    }
}

fn check_span(field: &str, span: f64) -> AnalysisResult<()> {
    if !span.is_finite() || span <= 0.0 {
        return Err(AnalysisError::invalid_input(
            field,
            span.to_string(),
            "Span must be finite and positive",
        ));
    }
    Ok(())
}
