//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic. Functions either
//! print directly or return the text they would print so it can be tested.

use std::path::Path;

use console::style;

use crate::cli::VersionReport;
use crate::rewrite::FileOutcome;
use crate::warning::VersionWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal warning with a yellow warning icon.
pub fn display_warning(warning: &VersionWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Path shown to the user: relative to the source root when possible.
pub fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Short status label for one file outcome.
pub fn outcome_label(outcome: &FileOutcome, dry_run: bool) -> String {
    match outcome {
        FileOutcome::Updated if dry_run => style("WOULD UPDATE").cyan().to_string(),
        FileOutcome::Updated => style("SUCCESS!").green().to_string(),
        FileOutcome::Unchanged => style("unchanged").dim().to_string(),
        FileOutcome::Failed(err) => format!("{} {}", style("ERROR!").red(), err),
    }
}

/// The final failure message, listing every failed path.
pub fn failure_summary(failures: &[&Path]) -> String {
    let mut message = String::from("The following files had errors:");
    for path in failures {
        message.push_str("\n  ");
        message.push_str(&path.display().to_string());
    }
    message
}

/// Display the version change.
///
/// # Arguments
/// * `current` - Version found in the manifest
/// * `next` - Version being written
pub fn display_version_change(current: &str, next: &str) {
    println!("\n{}", style("Proposed Version Change:").bold());
    println!("  From: {}", style(format!("v{}", current)).red());
    println!("  To:   {}", style(format!("v{}", next)).green());
}

/// Display every file outcome of a version run, then the manifest outcome.
pub fn display_report(report: &VersionReport) {
    for warning in &report.warnings {
        display_warning(warning);
    }

    println!("\n{}", style("Updating files:").underlined());
    for file in &report.files.files {
        println!(
            "  {} ... {}",
            display_path(&file.path, &report.root),
            outcome_label(&file.outcome, report.dry_run)
        );
    }
    println!(
        "  {} ... {}",
        display_path(&report.manifest, &report.root),
        outcome_label(&report.manifest_outcome, report.dry_run)
    );
}
