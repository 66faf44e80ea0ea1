//! # Beamline CLI
//!
//! Prompts for beam parameters on stdin, runs the analysis engine and prints
//! the three response series as a table followed by JSON for an external
//! plotter. Every prompt has a default, so piping empty lines runs the demo.
//!
//! ## Environment
//!
//! - `BEAM_SETTINGS` - path to a JSON settings file (sample count, deflection scale)
//! - `RUST_LOG` - log filter, defaults to `warn`

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use beam_core::conditions::TwoSpanUnequal;
use beam_core::file_io::{load_settings, save_report};
use beam_core::report::{AnalysisCase, AnalysisReport};
use beam_core::units::labels;
use beam_core::{
    AnalysisError, AnalysisResult, AnalysisSettings, Beam, BeamAnalysisEngine, ConditionName,
    Material, Quantity, ResponseSet,
};

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return None;
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_string(prompt: &str, default: &str) -> String {
    prompt_line(prompt).unwrap_or_else(|| default.to_string())
}

fn settings_from_env() -> AnalysisResult<AnalysisSettings> {
    match env::var("BEAM_SETTINGS") {
        Ok(path) => load_settings(Path::new(&path)),
        Err(_) => Ok(AnalysisSettings::default()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        process::exit(1);
    }
}

fn run() -> AnalysisResult<()> {
    println!("Beamline CLI - Beam Response Calculator");
    println!("=======================================");
    println!();

    let settings = settings_from_env()?;
    let engine = BeamAnalysisEngine::new();

    let names: Vec<&str> = engine.supported_conditions().iter().map(|c| c.as_str()).collect();
    let condition_input = prompt_string(
        &format!("Support condition ({}) [simply-supported]: ", names.join(" | ")),
        "simply-supported",
    );
    let condition: ConditionName = condition_input.parse()?;

    let primary_span = prompt_f64(&format!("Primary span ({}) [4.0]: ", labels::POSITION), 4.0);
    let secondary_span = match condition {
        ConditionName::SimplySupported => 0.0,
        ConditionName::TwoSpanUnequal => {
            prompt_f64(&format!("Secondary span ({}) [6.0]: ", labels::POSITION), 6.0)
        }
    };
    let ei = prompt_f64(
        &format!("Flexural rigidity EI ({}) [2.0e12]: ", labels::STIFFNESS),
        2.0e12,
    );
    let load = prompt_f64(&format!("Uniform load w ({}) [10.0]: ", labels::LOAD), 10.0);

    let material = Material::with_flexural_rigidity("User", ei);
    let beam = Beam::new(primary_span, secondary_span, material);
    beam.validate_for(condition)?;

    let set = engine.analyze(&beam, load, condition.as_str(), &settings)?;
    print_results(&set);

    let save_path = prompt_string("Save report to (blank to skip): ", "");
    if !save_path.is_empty() {
        let author = prompt_string("Author [anonymous]: ", "anonymous");
        let mut report = AnalysisReport::new(author, "CLI analysis").with_settings(settings);
        report.add_case(AnalysisCase::from_set("CLI-1", set));
        save_report(&report, Path::new(&save_path))?;
        println!("Report written to {}", save_path);
    }

    Ok(())
}

fn print_results(set: &ResponseSet) {
    println!();
    println!("═══════════════════════════════════════");
    println!("  {}", set.condition.display_name().to_uppercase());
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    match set.condition {
        ConditionName::SimplySupported => {
            println!("  Span:  {:.3} {}", set.beam.primary_span, labels::POSITION);
        }
        ConditionName::TwoSpanUnequal => {
            println!(
                "  Spans: {:.3} + {:.3} {}",
                set.beam.primary_span,
                set.beam.secondary_span,
                labels::POSITION
            );
        }
    }
    println!("  EI:    {:.4e} {}", set.beam.material.flexural_rigidity(), labels::STIFFNESS);
    println!("  w:     {:.3} {}", set.load, labels::LOAD);

    if set.condition == ConditionName::TwoSpanUnequal {
        let r = TwoSpanUnequal::reactions(&set.beam, set.load);
        println!();
        println!("Reactions:");
        println!("  M_int = {:.3} {}", r.interior_moment, labels::MOMENT);
        println!(
            "  R1 = {:.3}  R2 = {:.3}  R3 = {:.3} {}",
            r.left,
            r.interior,
            r.right,
            labels::SHEAR
        );
    }

    println!();
    println!("Extremes:");
    for quantity in Quantity::ALL {
        let summary = set.series(quantity).summary();
        println!(
            "  {:<15} max {:>12.4} @ {:<7.3} min {:>12.4} @ {:<7.3} {}",
            quantity.display_name(),
            summary.max_value,
            summary.max_position,
            summary.min_value,
            summary.min_position,
            quantity.unit()
        );
    }

    println!();
    println!(
        "{:>9} {:>14} {:>14} {:>14}",
        format!("x [{}]", labels::POSITION),
        format!("y [{}]", Quantity::Deflection.unit()),
        format!("M [{}]", Quantity::BendingMoment.unit()),
        format!("V [{}]", Quantity::ShearForce.unit())
    );
    let rows = set
        .deflection
        .samples
        .iter()
        .zip(&set.bending_moment.samples)
        .zip(&set.shear_force.samples);
    for ((d, m), v) in rows {
        println!("{:>9.3} {:>14.4} {:>14.4} {:>14.4}", d.x, d.y, m.y, v.y);
    }

    println!();
    println!("JSON Output (for plotting):");
    match serde_json::to_string_pretty(set) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("{}", AnalysisError::serialization(e.to_string())),
    }
}
