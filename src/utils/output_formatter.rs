/// Output formatter for scan results
///
/// This module renders the pre-scan banner, the summary block and the list of
/// matching files, and exports results as JSON.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::scanner::ScanResult;

/// Width of the summary separator lines
pub const SEPARATOR_WIDTH: usize = 50;

/// Label for the current mode
pub fn mode_label(simulate: bool) -> &'static str {
    if simulate {
        "DRY-RUN (scan only)"
    } else {
        "PATCH MODE"
    }
}

/// Banner printed before the first file is processed
pub fn format_banner(simulate: bool, directory: &Path, total_files: usize) -> String {
    let label = if simulate {
        mode_label(simulate).green()
    } else {
        mode_label(simulate).yellow().bold()
    };

    format!(
        "WavPatcher CLI - {}\nDirectory: {}\nTotal WAV files to scan: {}\n",
        label,
        directory.display(),
        total_files
    )
}

/// Format the summary block
///
/// # Arguments
///
/// * `result` - Result of the scan
/// * `patch_mode` - Whether files were actually patched
///
/// # Returns
///
/// Summary text, starting with a blank line
pub fn format_summary(result: &ScanResult, patch_mode: bool) -> String {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    let mut output = String::new();

    output.push('\n');
    output.push_str(&format!("{}\n", separator));
    output.push_str(&format!("{}\n", "SUMMARY".bold()));
    output.push_str(&format!("{}\n", separator));
    output.push_str(&format!("Total files scanned:      {}\n", result.total_files));
    output.push_str(&format!("Extensible headers found: {}\n", result.extensible_files));

    if patch_mode && result.extensible_files > 0 {
        output.push_str(&format!("Files patched:            {}\n", result.extensible_files));
    }

    if result.failed_files > 0 {
        output.push_str(&format!("Files with errors:        {}\n", result.failed_files));
    }

    output
}

/// Format the list of files with extensible headers.
///
/// Empty when nothing matched.
pub fn format_file_list(result: &ScanResult) -> String {
    if result.patched_files.is_empty() {
        return String::new();
    }

    let mut output = format!("\n{}\n", "Files with extensible headers:".cyan());
    for path in &result.patched_files {
        output.push_str(&format!("  {}\n", path));
    }
    output
}

/// Export a scan result to a JSON file
///
/// # Arguments
///
/// * `result` - Result of the scan
/// * `output_path` - Path where the JSON file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn export_results_json(result: &ScanResult, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("Failed to serialize scan result")?;

    let mut file = File::create(output_path)
        .with_context(|| format!("Failed to create JSON file: {}", output_path.display()))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("Failed to write JSON file: {}", output_path.display()))?;
    file.write_all(b"\n")?;

    Ok(())
}
