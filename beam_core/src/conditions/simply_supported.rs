//! Simply-Supported Beam, Full Uniform Load
//!
//! ```text
//!    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓ w
//!    ═════════════════
//!    △                ○
//!   x=0 ←────L─────→ x=L
//! ```
//!
//! # Formulas (Roark's Table 8.1, Case 2a)
//!
//! ```text
//! y(x) = -(w·x / (24·EI′)) · (L³ - 2·L·x² + x³) · scale · 1000     EI′ = EI / 1000³
//! M(x) = -(w·x / 2) · (L - x)
//! V(x) = w · (L/2 - x)
//! ```
//!
//! Valid for `0 ≤ x ≤ L`.

use crate::beam::Beam;
use crate::conditions::{ConditionAnalyzer, ConditionName};
use crate::units::{formula_stiffness, DEFLECTION_OUTPUT_FACTOR};

/// Single span on a pin and a roller
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplySupported;

impl ConditionAnalyzer for SimplySupported {
    fn name(&self) -> ConditionName {
        ConditionName::SimplySupported
    }

    fn domain(&self, beam: &Beam) -> (f64, f64) {
        (0.0, beam.primary_span)
    }

    fn deflection_at(&self, beam: &Beam, load: f64, x: f64, scale: f64) -> f64 {
        let l = beam.primary_span;
        let w = load;
        let ei = formula_stiffness(beam.material.flexural_rigidity());

        -(w * x / (24.0 * ei))
            * (l.powi(3) - 2.0 * l * x * x + x.powi(3))
            * scale
            * DEFLECTION_OUTPUT_FACTOR
    }

    fn bending_moment_at(&self, beam: &Beam, load: f64, x: f64) -> f64 {
        let l = beam.primary_span;
        -(load * x / 2.0) * (l - x)
    }

    fn shear_force_at(&self, beam: &Beam, load: f64, x: f64) -> f64 {
        let l = beam.primary_span;
        load * (l / 2.0 - x)
    }
}
