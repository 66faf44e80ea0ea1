//! Two-Span Continuous Beam, Unequal Spans, Full Uniform Load
//!
//! ```text
//!    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓ w
//!    ════════════════════════════
//!    △              △           ○
//!    R1             R2          R3
//!    ←──── L1 ─────→←─── L2 ───→
//! ```
//!
//! The beam is indeterminate to the first degree. The three-moment equation
//! with both ends pinned gives the interior support moment, and statics on each
//! span gives the reactions:
//!
//! ```text
//! m  = -(w·L2³ + w·L1³) / (8·(L1 + L2))      (hogging, negative)
//! R1 = m/L1 + w·L1/2
//! R3 = m/L2 + w·L2/2
//! R2 = w·(L1 + L2) - R1 - R3
//! ```
//!
//! Internal forces, piecewise on `x ≤ L1` / `x > L1`:
//!
//! ```text
//! M(x) = R1·x - w·x²/2                 |  R1·x + R2·(x - L1) - w·x²/2
//! V(x) = R1 - w·x                      |  (R1 + R2) - w·x
//! ```
//!
//! Deflection integrates `M / EI′` twice with `y(0) = y(L1) = 0` and slope
//! continuity over the interior support:
//!
//! ```text
//! C1   = w·L1³/24 - R1·L1²/6
//! y(x) = (R1·x³/6 - w·x⁴/24 + C1·x) / EI′ · scale · 1000                    x ≤ L1
//! y(x) = (R1·x³/6 + R2·(x - L1)³/6 - w·x⁴/24 + C1·x) / EI′ · scale · 1000   x > L1
//! ```
//!
//! `y(L1 + L2) = 0` follows from the compatibility condition that fixed `m`.
//! Valid for `0 ≤ x ≤ L1 + L2`.

use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::conditions::{ConditionAnalyzer, ConditionName};
use crate::units::{formula_stiffness, DEFLECTION_OUTPUT_FACTOR};

/// Continuous beam over three supports with unequal spans
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoSpanUnequal;

/// Interior moment and support reactions of a two-span beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupportReactions {
    /// Moment over the interior support (negative = hogging)
    pub interior_moment: f64,
    /// Left end reaction R1 (positive upward)
    pub left: f64,
    /// Interior support reaction R2 (positive upward)
    pub interior: f64,
    /// Right end reaction R3 (positive upward)
    pub right: f64,
}

impl SupportReactions {
    /// Sum of all three reactions
    pub fn total(&self) -> f64 {
        self.left + self.interior + self.right
    }
}

impl TwoSpanUnequal {
    /// Interior moment and reactions for this beam and load.
    ///
    /// Every equation call derives these afresh; this is exposed for
    /// traceability and reporting.
    pub fn reactions(beam: &Beam, load: f64) -> SupportReactions {
        let l1 = beam.primary_span;
        let l2 = beam.secondary_span;
        let w = load;

        let m = -(w * l2.powi(3) + w * l1.powi(3)) / (8.0 * (l1 + l2));
        let r1 = m / l1 + w * l1 / 2.0;
        let r3 = m / l2 + w * l2 / 2.0;
        let r2 = w * (l1 + l2) - r1 - r3;

        SupportReactions {
            interior_moment: m,
            left: r1,
            interior: r2,
            right: r3,
        }
    }
}

impl ConditionAnalyzer for TwoSpanUnequal {
    fn name(&self) -> ConditionName {
        ConditionName::TwoSpanUnequal
    }

    fn domain(&self, beam: &Beam) -> (f64, f64) {
        (0.0, beam.primary_span + beam.secondary_span)
    }

    fn support_positions(&self, beam: &Beam) -> Vec<f64> {
        vec![0.0, beam.primary_span, beam.primary_span + beam.secondary_span]
    }

    fn deflection_at(&self, beam: &Beam, load: f64, x: f64, scale: f64) -> f64 {
        let SupportReactions {
            left: r1,
            interior: r2,
            ..
        } = TwoSpanUnequal::reactions(beam, load);
        let l1 = beam.primary_span;
        let w = load;
        let ei = formula_stiffness(beam.material.flexural_rigidity());

        let c1 = w * l1.powi(3) / 24.0 - r1 * l1 * l1 / 6.0;

        let mut ei_y = r1 * x.powi(3) / 6.0 - w * x.powi(4) / 24.0 + c1 * x;
        if x > l1 {
            ei_y += r2 * (x - l1).powi(3) / 6.0;
        }

        ei_y / ei * scale * DEFLECTION_OUTPUT_FACTOR
    }

    fn bending_moment_at(&self, beam: &Beam, load: f64, x: f64) -> f64 {
        let SupportReactions {
            left: r1,
            interior: r2,
            ..
        } = TwoSpanUnequal::reactions(beam, load);
        let l1 = beam.primary_span;

        if x <= l1 {
            r1 * x - 0.5 * load * x * x
        } else {
            r1 * x + r2 * (x - l1) - 0.5 * load * x * x
        }
    }

    fn shear_force_at(&self, beam: &Beam, load: f64, x: f64) -> f64 {
        let SupportReactions {
            left: r1,
            interior: r2,
            ..
        } = TwoSpanUnequal::reactions(beam, load);

        if x <= beam.primary_span {
            r1 - load * x
        } else {
            (r1 + r2) - load * x
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::Quantity;
    use crate::errors::AnalysisError;
    use crate::materials::Material;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn beam(l1: f64, l2: f64) -> Beam {
        Beam::two_span(l1, l2, Material::with_flexural_rigidity("Test", 2.0e12))
    }

    #[test]
    fn test_equal_spans_interior_reaction() {
        // Two equal spans: R1 = R3 = 3wL/8, R2 = 5wL/4, M_B = -wL²/8
        for &(span, w) in &[(1.0, 1.0), (5.0, 10.0), (7.3, 2.25)] {
            let r = TwoSpanUnequal::reactions(&beam(span, span), w);
            assert_relative_eq!(r.interior, 1.25 * w * span, max_relative = 1e-12);
            assert_relative_eq!(r.left, 0.375 * w * span, max_relative = 1e-12);
            assert_relative_eq!(r.right, 0.375 * w * span, max_relative = 1e-12);
            assert_relative_eq!(r.interior_moment, -w * span * span / 8.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_reactions_balance_total_load() {
        let r = TwoSpanUnequal::reactions(&beam(4.0, 6.0), 10.0);
        assert_relative_eq!(r.total(), 100.0, max_relative = 1e-12);
        // m = -(10*216 + 10*64) / 80 = -35
        assert_relative_eq!(r.interior_moment, -35.0, max_relative = 1e-12);
        assert_relative_eq!(r.left, 11.25, max_relative = 1e-12);
    }

    #[test]
    fn test_moment_at_supports() {
        let b = beam(4.0, 6.0);
        let r = TwoSpanUnequal::reactions(&b, 10.0);

        assert_abs_diff_eq!(TwoSpanUnequal.bending_moment_at(&b, 10.0, 0.0), 0.0);
        assert_relative_eq!(
            TwoSpanUnequal.bending_moment_at(&b, 10.0, 4.0),
            r.interior_moment,
            max_relative = 1e-12
        );
        assert_abs_diff_eq!(TwoSpanUnequal.bending_moment_at(&b, 10.0, 10.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_moment_continuous_over_interior_support() {
        let b = beam(4.0, 6.0);
        let left = TwoSpanUnequal.bending_moment_at(&b, 10.0, 4.0);
        let right = TwoSpanUnequal.bending_moment_at(&b, 10.0, 4.0 + 1e-9);
        assert_abs_diff_eq!(left, right, epsilon = 1e-6);
    }

    #[test]
    fn test_shear_jumps_by_interior_reaction() {
        let b = beam(4.0, 6.0);
        let r = TwoSpanUnequal::reactions(&b, 10.0);

        let start = TwoSpanUnequal.shear_force_at(&b, 10.0, 0.0);
        assert_relative_eq!(start, r.left, max_relative = 1e-12);
        let before = TwoSpanUnequal.shear_force_at(&b, 10.0, 4.0);
        let after = TwoSpanUnequal.shear_force_at(&b, 10.0, 4.0 + 1e-12);
        assert_relative_eq!(after - before, r.interior, max_relative = 1e-6);
        let end = TwoSpanUnequal.shear_force_at(&b, 10.0, 10.0);
        assert_relative_eq!(end, -r.right, max_relative = 1e-12);
    }

    #[test]
    fn test_deflection_zero_at_all_supports() {
        let b = beam(4.0, 6.0);
        for x in TwoSpanUnequal.support_positions(&b) {
            let y = TwoSpanUnequal.deflection_at(&b, 10.0, x, 2.0);
            assert_abs_diff_eq!(y, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_deflection_sags_in_both_spans() {
        let b = beam(5.0, 6.0);
        assert!(TwoSpanUnequal.deflection_at(&b, 10.0, 2.5, 2.0) < 0.0);
        assert!(TwoSpanUnequal.deflection_at(&b, 10.0, 8.0, 2.0) < 0.0);
    }

    #[test]
    fn test_short_span_lifts_when_long_span_dominates() {
        // With L2 = 1.5·L1 the hogging moment exceeds wL1²/8 and the short span rises
        let b = beam(4.0, 6.0);
        assert!(TwoSpanUnequal.deflection_at(&b, 10.0, 2.0, 2.0) > 0.0);
        assert!(TwoSpanUnequal.deflection_at(&b, 10.0, 7.0, 2.0) < 0.0);
    }

    #[test]
    fn test_equal_spans_deflection_symmetric() {
        let b = beam(5.0, 5.0);
        for i in 0..=20 {
            let x = 10.0 * i as f64 / 20.0;
            assert_abs_diff_eq!(
                TwoSpanUnequal.deflection_at(&b, 10.0, x, 2.0),
                TwoSpanUnequal.deflection_at(&b, 10.0, 10.0 - x, 2.0),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_equal_spans_max_deflection_matches_table() {
        // Two equal spans under full UDL: δ_max ≈ wL⁴ / (185EI) at x = 0.4215L
        let b = beam(5.0, 5.0);
        let y = TwoSpanUnequal.deflection_at(&b, 10.0, 0.4215 * 5.0, 1.0);
        let expected = -10.0 * 5.0_f64.powi(4) / (185.0 * 2000.0) * 1000.0;
        assert_relative_eq!(y, expected, max_relative = 5e-3);
    }

    #[test]
    fn test_bounds_cover_both_spans() {
        let b = beam(4.0, 6.0);
        for quantity in Quantity::ALL {
            assert!(TwoSpanUnequal.evaluate(quantity, &b, 10.0, 10.0, 2.0).is_ok());
            assert!(TwoSpanUnequal.evaluate(quantity, &b, 10.0, 7.0, 2.0).is_ok());

            let err = TwoSpanUnequal.evaluate(quantity, &b, 10.0, 11.0, 2.0).unwrap_err();
            assert_eq!(err, AnalysisError::out_of_bounds(11.0, 0.0, 10.0));

            let err = TwoSpanUnequal.evaluate(quantity, &b, 10.0, -1.0, 2.0).unwrap_err();
            assert_eq!(err, AnalysisError::out_of_bounds(-1.0, 0.0, 10.0));
        }
    }
}
