//! Console rendering for apply/show results.
//!
//! Two formats everywhere: 'text' for operators, 'json' for scripts.

use crate::core::apply::ApplyReport;
use crate::core::error::SyncConfError;
use crate::core::store::{Assignment, ParamReading};
use colored::Colorize;

fn check_format(format: &str) -> Result<bool, SyncConfError> {
    match format {
        "json" => Ok(true),
        "text" => Ok(false),
        other => Err(SyncConfError::Validation(format!(
            "unknown format '{}', expected 'text' or 'json'",
            other
        ))),
    }
}

pub fn print_apply_report(report: &ApplyReport, format: &str) -> Result<(), SyncConfError> {
    if check_format(format)? {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    for key in &report.updated {
        println!("{} {}", "updated".green(), key);
    }
    for key in &report.missing {
        println!(
            "{} {} matched no row (stale key name?)",
            "warning:".yellow().bold(),
            key
        );
    }
    println!(
        "{} updated, {} missing",
        report.updated.len(),
        report.missing.len()
    );
    Ok(())
}

/// Dry-run view: the batch that would be written, nothing else.
pub fn print_assignments(assignments: &[Assignment], format: &str) -> Result<(), SyncConfError> {
    if check_format(format)? {
        let rows: Vec<serde_json::Value> = assignments
            .iter()
            .map(|a| {
                serde_json::json!({
                    "key": a.key,
                    "kind": a.value.kind(),
                    "value": a.value,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for a in assignments {
        println!("{} = {}  [{}]", a.key, a.value, a.value.kind().table());
    }
    println!("{} (no writes performed)", "dry run".cyan());
    Ok(())
}

pub fn print_snapshot(readings: &[ParamReading], format: &str) -> Result<(), SyncConfError> {
    if check_format(format)? {
        println!("{}", serde_json::to_string_pretty(readings)?);
        return Ok(());
    }
    for reading in readings {
        match &reading.value {
            Some(value) => println!("{} = {}", reading.key, value),
            None => println!("{} {}", reading.key.as_str(), "(not provisioned)".yellow()),
        }
    }
    Ok(())
}
