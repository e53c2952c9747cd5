/// Scanner/patcher for WAV format tags
///
/// Walks a directory tree, checks the format tag of every `.wav` file and
/// optionally rewrites WAVE_FORMAT_EXTENSIBLE to PCM. Files are processed one
/// at a time; a failure on one file is recorded and the scan moves on.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::{debug, info, warn};
use serde::Serialize;

use crate::core::error::FileError;
use crate::core::header::{self, FormatTag, TagCheck};
use crate::utils::file_utils;
use crate::utils::output_formatter;

/// Options controlling a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Dry-run: report matches without writing anything
    pub simulate: bool,

    /// Print per-file, progress and banner lines
    pub verbose: bool,

    /// Emit a progress line every this many processed files (0 disables)
    pub progress_interval: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            simulate: true,
            verbose: true,
            progress_interval: 100,
        }
    }
}

/// Aggregate result of one scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    /// Number of `.wav` files discovered
    pub total_files: usize,

    /// Number of files whose tag was WAVE_FORMAT_EXTENSIBLE
    pub extensible_files: usize,

    /// Paths of the matching files, in processing order
    pub patched_files: Vec<String>,

    /// Files that could not be opened, read or written
    pub failed_files: usize,

    /// Files too short to hold a format tag
    pub short_files: usize,

    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScanResult {
    fn failure(error: String) -> Self {
        Self {
            success: false,
            error: Some(error),
            ..Self::default()
        }
    }
}

/// Outcome of processing a single file
#[derive(Debug)]
pub enum FileOutcome {
    Matched,
    NotMatched,
    TooShort,
    Failed(FileError),
}

/// Scans directories and patches extensible headers
pub struct WavPatcher {
    options: ScanOptions,
}

impl WavPatcher {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Inspect and, outside of simulate mode, patch a single file.
    ///
    /// The file handle lives only for the duration of this call.
    pub fn process_file(&self, path: &Path) -> FileOutcome {
        let opened = if self.options.simulate {
            File::open(path)
        } else {
            OpenOptions::new().read(true).write(true).open(path)
        };

        let mut file = match opened {
            Ok(file) => file,
            Err(e) => return FileOutcome::Failed(FileError::from_io(path, e)),
        };

        match header::inspect_and_patch(&mut file, !self.options.simulate) {
            Ok(TagCheck::Extensible) => {
                if !self.options.simulate {
                    info!("Patched format tag of {}", path.display());
                }
                FileOutcome::Matched
            }
            Ok(TagCheck::Other(tag)) => {
                debug!("{}: format tag {}", path.display(), FormatTag(tag));
                FileOutcome::NotMatched
            }
            Ok(TagCheck::Short) => {
                debug!("{}: shorter than {} bytes", path.display(), header::MIN_HEADER_LEN);
                FileOutcome::TooShort
            }
            Err(e) => FileOutcome::Failed(FileError::from_io(path, e)),
        }
    }

    /// Scan `directory` and report to `out`.
    ///
    /// # Arguments
    ///
    /// * `directory` - Root of the tree to scan
    /// * `out` - Destination for banner, per-file and progress lines
    ///
    /// # Returns
    ///
    /// The aggregate result. `success` is false only when the root is missing.
    pub fn run<W: Write>(&self, directory: &Path, out: &mut W) -> ScanResult {
        if !directory.exists() {
            let error = format!("Directory does not exist: {}", directory.display());
            warn!("{}", error);
            return ScanResult::failure(error);
        }

        let wav_files = file_utils::find_wav_files(directory);
        let total_files = wav_files.len();
        let verbose = self.options.verbose;

        if total_files == 0 {
            if verbose {
                report(out, format_args!("No *.wav files could be found!"));
            }
            return ScanResult {
                success: true,
                message: Some("No WAV files found".to_string()),
                ..ScanResult::default()
            };
        }

        if verbose {
            report(
                out,
                format_args!(
                    "{}",
                    output_formatter::format_banner(self.options.simulate, directory, total_files)
                ),
            );
        }

        let mut result = ScanResult {
            total_files,
            success: true,
            ..ScanResult::default()
        };
        let status = if self.options.simulate { "[FOUND]" } else { "[PATCHED]" };

        for (idx, path) in wav_files.iter().enumerate() {
            match self.process_file(path) {
                FileOutcome::Matched => {
                    result.extensible_files += 1;
                    result.patched_files.push(path.display().to_string());
                    if verbose {
                        report(out, format_args!("{} {}", status, path.display()));
                    }
                }
                FileOutcome::NotMatched => {}
                FileOutcome::TooShort => result.short_files += 1,
                FileOutcome::Failed(e) => {
                    warn!("{}", e);
                    result.failed_files += 1;
                    if verbose {
                        report(out, format_args!("[ERROR] {}", e));
                    }
                }
            }

            let done = idx + 1;
            let interval = self.options.progress_interval;
            if verbose && interval > 0 && done % interval == 0 {
                let pct = done as f64 / total_files as f64 * 100.0;
                report(out, format_args!("Progress: {:.1}% ({}/{})", pct, done, total_files));
            }
        }

        info!(
            "Scan finished: {} files, {} extensible, {} failed, {} too short",
            result.total_files, result.extensible_files, result.failed_files, result.short_files
        );
        result
    }
}

/// Write one report line. Output failures are logged and never stop a scan.
fn report<W: Write>(out: &mut W, line: std::fmt::Arguments<'_>) {
    if let Err(e) = writeln!(out, "{}", line) {
        warn!("Failed to write report line: {}", e);
    }
}

/// Scan with the given options, reporting to stdout
pub fn scan_directory(directory: &Path, options: ScanOptions) -> ScanResult {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    WavPatcher::new(options).run(directory, &mut out)
}
