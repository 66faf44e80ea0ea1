//! # File I/O Module
//!
//! Report and settings files:
//! - **Atomic saves**: stage to `.bmr.tmp`, fsync, rename over the target
//! - **Version validation**: reports from an incompatible schema are rejected
//!
//! ## File Formats
//!
//! Reports are `.bmr` files containing pretty-printed JSON of an
//! [`AnalysisReport`]. Settings are plain JSON of [`AnalysisSettings`], every
//! field optional.
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::file_io::{load_report, save_report};
//! use beam_core::report::AnalysisReport;
//! use std::path::Path;
//!
//! let report = AnalysisReport::new("Engineer", "Floor beams");
//! save_report(&report, Path::new("floor.bmr"))?;
//!
//! let loaded = load_report(Path::new("floor.bmr"))?;
//! assert_eq!(loaded.meta.title, "Floor beams");
//! # Ok::<(), beam_core::errors::AnalysisError>(())
//! ```

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use crate::errors::{AnalysisError, AnalysisResult};
use crate::report::{AnalysisReport, SCHEMA_VERSION};
use crate::settings::AnalysisSettings;

/// Extension of the scratch file a report is staged in before the rename
const STAGING_EXTENSION: &str = "bmr.tmp";

/// Save a report so `path` holds either the old file or the complete new one.
///
/// The JSON is staged next to `path`, synced, then renamed over it. A failed
/// save leaves no staging file behind.
pub fn save_report(report: &AnalysisReport, path: &Path) -> AnalysisResult<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| AnalysisError::serialization(e.to_string()))?;

    let staging = path.with_extension(STAGING_EXTENSION);
    if let Err(e) = stage_and_swap(&json, &staging, path) {
        log::warn!(
            "saving report '{}' failed, discarding {}: {}",
            report.meta.title,
            staging.display(),
            e
        );
        let _ = fs::remove_file(&staging);
        return Err(e);
    }

    log::info!(
        "saved report '{}' ({} cases) to {}",
        report.meta.title,
        report.case_count(),
        path.display()
    );
    Ok(())
}

fn stage_and_swap(json: &str, staging: &Path, path: &Path) -> AnalysisResult<()> {
    let mut file =
        File::create(staging).map_err(|e| io_failure("create staging file", staging, e))?;
    file.write_all(json.as_bytes())
        .map_err(|e| io_failure("write staging file", staging, e))?;
    file.sync_all()
        .map_err(|e| io_failure("sync staging file", staging, e))?;
    fs::rename(staging, path).map_err(|e| io_failure("replace report", path, e))
}

/// Load a report, validating its schema version.
///
/// # Returns
///
/// * `Err(AnalysisError::VersionMismatch)` - file version is incompatible
/// * `Err(AnalysisError::SerializationError)` - invalid JSON
/// * `Err(AnalysisError::FileError)` - I/O error
pub fn load_report(path: &Path) -> AnalysisResult<AnalysisReport> {
    let report: AnalysisReport = parse_json(path)?;

    if let Err(e) = validate_version(&report.meta.version) {
        log::warn!("refusing report {}: {}", path.display(), e);
        return Err(e);
    }

    log::info!("loaded report '{}' from {}", report.meta.title, path.display());
    Ok(report)
}

/// Load and validate sampling settings from a JSON file
pub fn load_settings(path: &Path) -> AnalysisResult<AnalysisSettings> {
    let settings: AnalysisSettings = parse_json(path)?;
    settings.validate()?;

    log::debug!("loaded settings from {}: {:?}", path.display(), settings);
    Ok(settings)
}

fn parse_json<T: serde::de::DeserializeOwned>(path: &Path) -> AnalysisResult<T> {
    let mut contents = String::new();
    File::open(path)
        .and_then(|mut file| file.read_to_string(&mut contents))
        .map_err(|e| io_failure("read", path, e))?;

    serde_json::from_str(&contents).map_err(|e| {
        AnalysisError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })
}

fn io_failure(operation: &str, path: &Path, e: io::Error) -> AnalysisError {
    AnalysisError::file_error(operation, path.display().to_string(), e.to_string())
}

/// `major.minor` of a schema version string; a missing minor counts as 0
fn schema_parts(version: &str) -> Option<(u32, u32)> {
    let mut parts = version.split('.').map(str::parse::<u32>);
    let major = parts.next()?.ok()?;
    let minor = match parts.next() {
        Some(minor) => minor.ok()?,
        None => 0,
    };
    Some((major, minor))
}

/// Reports load when the major version matches. While the schema is 0.x a
/// newer minor may be breaking, so it is refused too.
fn validate_version(file_version: &str) -> AnalysisResult<()> {
    let compatible = match (schema_parts(file_version), schema_parts(SCHEMA_VERSION)) {
        (Some((file_major, file_minor)), Some((major, minor))) => {
            file_major == major && (major > 0 || file_minor <= minor)
        }
        _ => false,
    };

    if compatible {
        Ok(())
    } else {
        Err(AnalysisError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        })
    }
}
