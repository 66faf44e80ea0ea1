//! # Materials
//!
//! A [`Material`] is an inert, named bag of stiffness properties. Analyzers read
//! the keys they need (at minimum [`EI`]) straight out of the map; a missing key
//! reads as `NaN` and propagates through the formulas rather than failing.
//! Callers that want a hard failure use [`Material::require_property`].
//!
//! ## Example
//!
//! ```rust
//! use beam_core::materials::Material;
//!
//! // Directly from a flexural rigidity (N·mm²)
//! let beam_material = Material::with_flexural_rigidity("Custom", 210_000.0);
//! assert_eq!(beam_material.flexural_rigidity(), 210_000.0);
//!
//! // From modulus (N/mm²) and second moment of area (mm⁴)
//! let steel = Material::structural_steel(8.356e7);
//! assert_eq!(steel.flexural_rigidity(), 210_000.0 * 8.356e7);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, AnalysisResult};

/// Property key for flexural rigidity (N·mm²)
pub const EI: &str = "EI";

/// Property key for elastic modulus (N/mm²)
pub const E: &str = "E";

/// Property key for second moment of area (mm⁴)
pub const I: &str = "I";

/// Elastic modulus of structural steel (N/mm²)
pub const STEEL_E_MPA: f64 = 210_000.0;

/// Mean elastic modulus of C24 softwood timber (N/mm²)
pub const TIMBER_E_MPA: f64 = 11_000.0;

/// Named set of stiffness properties.
///
/// ## JSON Serialization
///
/// ```json
/// { "name": "Steel", "properties": { "E": 210000.0, "EI": 1.75476e13, "I": 83560000.0 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Display name
    pub name: String,
    /// Property values keyed by name (e.g. `"EI"`)
    pub properties: BTreeMap<String, f64>,
}

impl Material {
    /// Create a material with no properties
    pub fn new(name: impl Into<String>) -> Self {
        Material {
            name: name.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Add or replace a property
    pub fn with_property(mut self, key: impl Into<String>, value: f64) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Create a material carrying only a flexural rigidity
    pub fn with_flexural_rigidity(name: impl Into<String>, ei: f64) -> Self {
        Material::new(name).with_property(EI, ei)
    }

    /// Create a material from elastic modulus (N/mm²) and second moment of area (mm⁴).
    ///
    /// Stores `E`, `I` and their product `EI`.
    pub fn from_modulus(name: impl Into<String>, e_mpa: f64, i_mm4: f64) -> Self {
        Material::new(name)
            .with_property(E, e_mpa)
            .with_property(I, i_mm4)
            .with_property(EI, e_mpa * i_mm4)
    }

    /// Structural steel section with the given second moment of area (mm⁴)
    pub fn structural_steel(i_mm4: f64) -> Self {
        Material::from_modulus("Structural steel", STEEL_E_MPA, i_mm4)
    }

    /// C24 softwood timber section with the given second moment of area (mm⁴)
    pub fn softwood_timber(i_mm4: f64) -> Self {
        Material::from_modulus("Softwood timber C24", TIMBER_E_MPA, i_mm4)
    }

    /// Look up a property, `NaN` when absent
    pub fn property(&self, key: &str) -> f64 {
        self.properties.get(key).copied().unwrap_or(f64::NAN)
    }

    /// Flexural rigidity `EI` (N·mm²), `NaN` when absent
    pub fn flexural_rigidity(&self) -> f64 {
        self.property(EI)
    }

    /// Look up a property, failing with `MissingProperty` when absent
    pub fn require_property(&self, key: &str) -> AnalysisResult<f64> {
        self.properties
            .get(key)
            .copied()
            .ok_or_else(|| AnalysisError::missing_property(&self.name, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_property_reads_nan() {
        let material = Material::new("Bare");
        assert!(material.flexural_rigidity().is_nan());
        assert!(material.property("anything").is_nan());
    }

    #[test]
    fn test_require_property() {
        let material = Material::with_flexural_rigidity("Steel", 210_000.0);
        assert_eq!(material.require_property(EI).unwrap(), 210_000.0);

        let err = Material::new("Bare").require_property(EI).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::MissingProperty {
                material: "Bare".to_string(),
                property: "EI".to_string(),
            }
        );
    }

    #[test]
    fn test_from_modulus_stores_product() {
        let timber = Material::softwood_timber(2.025e8);
        assert_eq!(timber.property(E), TIMBER_E_MPA);
        assert_eq!(timber.property(I), 2.025e8);
        assert_eq!(timber.flexural_rigidity(), TIMBER_E_MPA * 2.025e8);
    }

    #[test]
    fn test_material_serialization() {
        let material = Material::structural_steel(8.356e7);
        let json = serde_json::to_string(&material).unwrap();
        assert!(json.contains("Structural steel"));
        assert!(json.contains("\"EI\""));

        let roundtrip: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, material);
    }
}
