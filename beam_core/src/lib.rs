//! # beam_core - Beam Response Engine
//!
//! `beam_core` computes vertical deflection, bending moment and shear force
//! along a beam carrying a uniformly distributed load, under a selectable
//! support condition. The output is a set of position-indexed `{x, y}` samples
//! ready for any plotting layer.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: equations are pure values; evaluating one has no side effects
//! - **Lazy**: asking the engine for an equation computes nothing until it is evaluated
//! - **Strict domain**: positions off the beam are errors, never clamped or extrapolated
//! - **JSON-First**: inputs and sampled outputs implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{Beam, BeamAnalysisEngine, Material};
//!
//! let engine = BeamAnalysisEngine::new();
//! let beam = Beam::single_span(4.0, Material::with_flexural_rigidity("Steel", 210_000.0));
//!
//! let moment = engine.get_bending_moment(&beam, 10.0, "simply-supported").unwrap();
//! let midspan = moment.evaluate(2.0).unwrap();
//! assert_eq!(midspan.y, -20.0);
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - Condition dispatch ([`BeamAnalysisEngine`])
//! - [`conditions`] - The analyzers: simply-supported and two-span-unequal
//! - [`equation`] - Lazily evaluated equations and samples
//! - [`series`] - Sampling equations into plot-ready series
//! - [`beam`], [`materials`] - Input value types
//! - [`units`] - The implicit unit system and its scale factors
//! - [`settings`] - Sampling configuration
//! - [`report`], [`file_io`] - Saving sampled cases to disk
//! - [`errors`] - Structured error types

pub mod beam;
pub mod conditions;
pub mod engine;
pub mod equation;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod report;
pub mod series;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use beam::Beam;
pub use conditions::{ConditionAnalyzer, ConditionName, Quantity};
pub use engine::BeamAnalysisEngine;
pub use equation::{Equation, ResponseEquation, Sample};
pub use errors::{AnalysisError, AnalysisResult};
pub use materials::Material;
pub use series::{ResponseSeries, ResponseSet, SeriesSummary};
pub use settings::AnalysisSettings;
