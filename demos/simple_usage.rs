/// Simple example demonstrating how to use the WavPatcher library

use anyhow::Result;
use wav_patcher::patch_wav_files;

fn main() -> Result<()> {
    let dir = tempfile::tempdir()?;

    // A minimal header with the extensible tag at byte 20
    let mut header = b"RIFF\x24\x00\x00\x00WAVEfmt \x10\x00\x00\x00".to_vec();
    header.extend_from_slice(&[0xFE, 0xFF, 0x02, 0x00]);
    std::fs::write(dir.path().join("sample.wav"), &header)?;

    println!("Scanning: {}", dir.path().display());

    // Dry-run first, then patch
    let found = patch_wav_files(dir.path(), true, true);
    println!("\n{} of {} files use WAVE_FORMAT_EXTENSIBLE", found.extensible_files, found.total_files);

    let patched = patch_wav_files(dir.path(), false, true);
    for path in &patched.patched_files {
        println!("  patched {}", path);
    }

    Ok(())
}
