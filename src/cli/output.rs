//! Report Rendering
//!
//! Text for people, JSON for scripts.

use std::fmt::Write;

use anyhow::Result;
use serde_json::{json, Value};

use super::FileReport;
use crate::config::OutputFormat;
use crate::core::Report;

pub fn render(reports: &[FileReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(reports)),
        OutputFormat::Json => render_json(reports),
    }
}

fn render_text(reports: &[FileReport]) -> String {
    let mut out = String::new();

    for file in reports {
        match &file.outcome {
            Ok(report) => write_report(&mut out, file, report),
            Err(e) => {
                let _ = writeln!(out, "{}\n  error: {:#}", file.path.display(), e);
            }
        }
    }

    out
}

fn write_report(out: &mut String, file: &FileReport, report: &Report) {
    let metadata = &report.metadata;
    let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());

    let _ = writeln!(out, "{}", file.path.display());
    let _ = writeln!(out, "  flavor:         {}", or_dash(metadata.flavor.clone()));
    let _ = writeln!(
        out,
        "  print time:     {} ({} s, {})",
        format_duration(report.estimated_seconds),
        report.estimated_seconds,
        report.time_source
    );
    let _ = writeln!(
        out,
        "  filament used:  {}",
        or_dash(metadata.filament_used.map(|v| v.to_string()))
    );
    let _ = writeln!(
        out,
        "  layer height:   {}",
        or_dash(metadata.layer_height.map(|v| format!("{} mm", v)))
    );
    let _ = writeln!(out, "  layers:         {}", report.layer_count);

    if let Some(simulation) = &report.simulation {
        let _ = writeln!(
            out,
            "  moves:          {} ({:.1} mm)",
            simulation.moves, simulation.distance_mm
        );
    }
}

fn render_json(reports: &[FileReport]) -> Result<String> {
    let entries: Vec<Value> = reports
        .iter()
        .map(|file| {
            let path = file.path.display().to_string();
            match &file.outcome {
                Ok(report) => json!({ "path": path, "report": report }),
                Err(e) => json!({ "path": path, "error": format!("{:#}", e) }),
            }
        })
        .collect();

    let mut out = serde_json::to_string_pretty(&entries)?;
    out.push('\n');
    Ok(out)
}

/// `3723` -> `1h 02m 03s`, `125` -> `2m 05s`, `9` -> `9s`
pub fn format_duration(seconds: u64) -> String {
    let (hours, minutes, secs) = (seconds / 3600, seconds % 3600 / 60, seconds % 60);

    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}
