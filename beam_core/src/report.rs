//! # Analysis Reports
//!
//! An [`AnalysisReport`] collects sampled cases for hand-off to a plotting tool
//! or for archiving. Reports serialize to `.bmr` files as human-readable JSON
//! (see [`crate::file_io`] for atomic saves).
//!
//! ## Structure
//!
//! ```text
//! AnalysisReport
//! ├── meta: ReportMetadata (version, author, title, timestamps)
//! ├── settings: AnalysisSettings (sampling used for every case)
//! └── cases: HashMap<Uuid, AnalysisCase> (beam, load, condition, three series)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::report::{AnalysisCase, AnalysisReport};
//! use beam_core::{AnalysisSettings, Beam, BeamAnalysisEngine, Material};
//!
//! let engine = BeamAnalysisEngine::new();
//! let beam = Beam::single_span(4.0, Material::with_flexural_rigidity("Steel", 2.0e12));
//! let set = engine
//!     .analyze(&beam, 10.0, "simply-supported", &AnalysisSettings::default())
//!     .unwrap();
//!
//! let mut report = AnalysisReport::new("Jane Engineer", "Floor beams");
//! let id = report.add_case(AnalysisCase::from_set("B-1", set));
//! assert!(report.get_case(&id).is_some());
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::beam::Beam;
use crate::conditions::ConditionName;
use crate::series::{ResponseSeries, ResponseSet};
use crate::settings::AnalysisSettings;

/// Current schema version for .bmr files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root report container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Report metadata
    pub meta: ReportMetadata,

    /// Sampling settings the cases were produced with
    pub settings: AnalysisSettings,

    /// Analysed cases, keyed by UUID
    pub cases: HashMap<Uuid, AnalysisCase>,
}

impl AnalysisReport {
    /// Create an empty report with default settings
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        let now = Utc::now();
        AnalysisReport {
            meta: ReportMetadata {
                version: SCHEMA_VERSION.to_string(),
                author: author.into(),
                title: title.into(),
                created: now,
                modified: now,
            },
            settings: AnalysisSettings::default(),
            cases: HashMap::new(),
        }
    }

    /// Replace the sampling settings
    pub fn with_settings(mut self, settings: AnalysisSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Add a case, returning its new UUID
    pub fn add_case(&mut self, case: AnalysisCase) -> Uuid {
        let id = Uuid::new_v4();
        self.cases.insert(id, case);
        self.touch();
        id
    }

    /// Remove a case by UUID
    pub fn remove_case(&mut self, id: &Uuid) -> Option<AnalysisCase> {
        let case = self.cases.remove(id);
        if case.is_some() {
            self.touch();
        }
        case
    }

    /// Get a case by UUID
    pub fn get_case(&self, id: &Uuid) -> Option<&AnalysisCase> {
        self.cases.get(id)
    }

    /// Number of cases
    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    /// Update the modified timestamp
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

impl Default for AnalysisReport {
    fn default() -> Self {
        AnalysisReport::new("", "")
    }
}

/// Report metadata stored in the file header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Who produced the report
    pub author: String,

    /// Report title
    pub title: String,

    /// When the report was created
    pub created: DateTime<Utc>,

    /// When the report was last modified
    pub modified: DateTime<Utc>,
}

/// One analysed beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisCase {
    /// User-provided label (e.g. "B-1")
    pub label: String,
    /// Support condition
    pub condition: ConditionName,
    /// Beam geometry and material
    pub beam: Beam,
    /// Uniform load
    pub load: f64,
    /// Deflection series
    pub deflection: ResponseSeries,
    /// Bending moment series
    pub bending_moment: ResponseSeries,
    /// Shear force series
    pub shear_force: ResponseSeries,
}

impl AnalysisCase {
    /// Label a sampled response set
    pub fn from_set(label: impl Into<String>, set: ResponseSet) -> Self {
        AnalysisCase {
            label: label.into(),
            condition: set.condition,
            beam: set.beam,
            load: set.load,
            deflection: set.deflection,
            bending_moment: set.bending_moment,
            shear_force: set.shear_force,
        }
    }
}
