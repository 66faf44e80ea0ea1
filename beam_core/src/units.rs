//! # Unit System
//!
//! beam_core works in one implicit, consistent unit system. Nothing is converted
//! on input; the formulas carry the scaling themselves:
//!
//! - Length (spans, positions): metres (m)
//! - Distributed load `w`: kilonewtons per metre (kN/m)
//! - Flexural rigidity `EI`: newton square millimetres (N·mm²) as stored on a
//!   [`Material`](crate::materials::Material)
//! - Bending moment: kilonewton metres (kN·m)
//! - Shear force: kilonewtons (kN)
//! - Deflection: millimetres (mm)
//!
//! Dividing the stored `EI` by `1000³` gives kN·m², which matches kN/m and m in
//! the deflection formulas. The result is in metres and is multiplied by `1000`
//! (and by the display scale factor) to land in millimetres.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::{formula_stiffness, STIFFNESS_DIVISOR};
//!
//! assert_eq!(STIFFNESS_DIVISOR, 1.0e9);
//! assert_eq!(formula_stiffness(2.0e12), 2000.0);
//! ```

/// Divisor applied to the stored `EI` before it enters a deflection formula (`1000³`)
pub const STIFFNESS_DIVISOR: f64 = 1000.0 * 1000.0 * 1000.0;

/// Factor turning a formula deflection (m) into the output unit (mm)
pub const DEFLECTION_OUTPUT_FACTOR: f64 = 1000.0;

/// Default stiffness-adjustment scale factor applied to every deflection value
pub const DEFAULT_DEFLECTION_SCALE: f64 = 2.0;

/// Convert a stored flexural rigidity into the unit the formulas expect (`EI′`)
#[inline]
pub fn formula_stiffness(ei: f64) -> f64 {
    ei / STIFFNESS_DIVISOR
}

/// Unit labels for the plotted quantities
pub mod labels {
    /// Position along the beam
    pub const POSITION: &str = "m";
    /// Deflection output
    pub const DEFLECTION: &str = "mm";
    /// Bending moment output
    pub const MOMENT: &str = "kN·m";
    /// Shear force output
    pub const SHEAR: &str = "kN";
    /// Distributed load input
    pub const LOAD: &str = "kN/m";
    /// Flexural rigidity input
    pub const STIFFNESS: &str = "N·mm²";
}
