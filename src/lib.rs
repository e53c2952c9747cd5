/// WavPatcher - Convert WAV_EXTENSIBLE headers to standard PCM
///
/// This library scans directory trees for WAV files whose format tag is
/// WAVE_FORMAT_EXTENSIBLE (0xFFFE) and can rewrite that tag to PCM (0x0001)
/// in place, for playback on equipment that rejects extensible headers.

pub mod core;
pub mod utils;

pub use crate::core::error::{FileError, ScanError};
pub use crate::core::header::{WAVE_FORMAT_EXTENSIBLE, WAVE_FORMAT_PCM};
pub use crate::core::scanner::{scan_directory, FileOutcome, ScanOptions, ScanResult, WavPatcher};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan and optionally patch a directory, reporting to stdout
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `directory` - Directory to search recursively for `.wav` files
/// * `simulate` - If true, only report matches without modifying files
/// * `verbose` - If true, print per-file and progress lines
///
/// # Returns
///
/// Aggregate result of the scan
pub fn patch_wav_files<P: AsRef<std::path::Path>>(
    directory: P,
    simulate: bool,
    verbose: bool,
) -> ScanResult {
    let options = ScanOptions {
        simulate,
        verbose,
        ..ScanOptions::default()
    };
    scan_directory(directory.as_ref(), options)
}
