//! User interface module - terminal output for the CLI.
//!
//! - `formatter` - Pure formatting functions
//! - This module - Run-level summaries built on the formatter

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_path, display_report, display_status, display_success,
    display_version_change, display_warning, failure_summary, outcome_label,
};

use crate::cli::VersionReport;

/// Prints the full outcome of a version run and returns whether it succeeded.
///
/// On failure the summary lists every file that could not be updated.
pub fn display_outcome(report: &VersionReport) -> bool {
    display_version_change(report.current.raw(), &report.next.to_string());
    display_report(report);

    let failures = report.failures();
    if !failures.is_empty() {
        display_error(&failure_summary(&failures));
        return false;
    }

    let updated = report.files.updated().len();
    if report.dry_run {
        display_status(&format!(
            "Dry run: {} file(s) and the manifest would be updated to v{}",
            updated, report.next
        ));
    } else {
        display_success(&format!(
            "The version was successfully updated to v{} ({} file(s) changed)",
            report.next, updated
        ));
    }
    true
}
