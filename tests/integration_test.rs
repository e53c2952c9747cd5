/// Integration tests for the scanner
///
/// These tests build small WAV trees in temporary directories and check the
/// counts, the reported output and the bytes left on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use wav_patcher::core::error::FileError;
use wav_patcher::utils::file_utils::{find_wav_files, validate_directory};
use wav_patcher::{FileOutcome, ScanError, ScanOptions, WavPatcher};

const PCM: [u8; 2] = [0x01, 0x00];
const EXTENSIBLE: [u8; 2] = [0xFE, 0xFF];

/// Canonical 44 byte header with the given format tag and four samples
fn wav_bytes(tag: [u8; 2]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&44u32.to_le_bytes());
    data.extend_from_slice(b"WAVEfmt ");
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&tag);
    data.extend_from_slice(&2u16.to_le_bytes());
    data.extend_from_slice(&44_100u32.to_le_bytes());
    data.extend_from_slice(&176_400u32.to_le_bytes());
    data.extend_from_slice(&4u16.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes());
    data.extend_from_slice(b"data");
    data.extend_from_slice(&8u32.to_le_bytes());
    data.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
    data
}

fn write_wav(dir: &Path, name: &str, tag: [u8; 2]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(&path, wav_bytes(tag)).expect("Failed to write wav file");
    path
}

fn quiet(simulate: bool) -> ScanOptions {
    ScanOptions {
        simulate,
        verbose: false,
        ..ScanOptions::default()
    }
}

fn run(dir: &Path, options: ScanOptions) -> (wav_patcher::ScanResult, String) {
    let mut out = Vec::new();
    let result = WavPatcher::new(options).run(dir, &mut out);
    (result, String::from_utf8(out).expect("Report is not UTF-8"))
}

#[test]
fn test_dry_run_reports_without_writing() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let a = write_wav(temp_dir.path(), "a.wav", PCM);
    let b = write_wav(temp_dir.path(), "b.wav", EXTENSIBLE);
    let c = write_wav(temp_dir.path(), "c.wav", EXTENSIBLE);

    let (result, _) = run(temp_dir.path(), quiet(true));

    assert!(result.success);
    assert_eq!(result.total_files, 3);
    assert_eq!(result.extensible_files, 2);
    assert_eq!(
        result.patched_files,
        vec![b.display().to_string(), c.display().to_string()]
    );

    assert_eq!(fs::read(&a).unwrap(), wav_bytes(PCM));
    assert_eq!(fs::read(&b).unwrap(), wav_bytes(EXTENSIBLE));
    assert_eq!(fs::read(&c).unwrap(), wav_bytes(EXTENSIBLE));
}

#[test]
fn test_patch_rewrites_only_the_tag() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let a = write_wav(temp_dir.path(), "a.wav", PCM);
    let b = write_wav(temp_dir.path(), "b.wav", EXTENSIBLE);
    let c = write_wav(temp_dir.path(), "c.wav", EXTENSIBLE);

    let (result, _) = run(temp_dir.path(), quiet(false));

    assert!(result.success);
    assert_eq!(result.total_files, 3);
    assert_eq!(result.extensible_files, 2);
    assert_eq!(result.patched_files.len(), result.extensible_files);

    let original = wav_bytes(EXTENSIBLE);
    for path in [&b, &c] {
        let patched = fs::read(path).unwrap();
        assert_eq!(patched.len(), original.len());
        assert_eq!(&patched[20..22], &PCM);
        assert_eq!(&patched[..20], &original[..20]);
        assert_eq!(&patched[22..], &original[22..]);
    }
    assert_eq!(fs::read(&a).unwrap(), wav_bytes(PCM));
}

#[test]
fn test_second_patch_run_finds_nothing() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_wav(temp_dir.path(), "one.wav", EXTENSIBLE);
    write_wav(temp_dir.path(), "nested/two.wav", EXTENSIBLE);

    let (first, _) = run(temp_dir.path(), quiet(false));
    assert_eq!(first.extensible_files, 2);

    let (second, _) = run(temp_dir.path(), quiet(false));
    assert!(second.success);
    assert_eq!(second.total_files, 2);
    assert_eq!(second.extensible_files, 0);
    assert!(second.patched_files.is_empty());
}

#[test]
fn test_pcm_only_tree_has_no_matches() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    for name in ["x.wav", "sub/y.wav", "sub/deeper/z.wav"] {
        write_wav(temp_dir.path(), name, PCM);
    }

    let (result, _) = run(temp_dir.path(), quiet(true));

    assert!(result.success);
    assert_eq!(result.total_files, 3);
    assert_eq!(result.extensible_files, 0);
    assert!(result.patched_files.is_empty());
}

#[test]
fn test_empty_directory_is_success_with_message() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("notes.txt"), "not audio").unwrap();

    let (result, report) = run(temp_dir.path(), ScanOptions::default());

    assert!(result.success);
    assert_eq!(result.total_files, 0);
    assert_eq!(result.extensible_files, 0);
    assert_eq!(result.message.as_deref(), Some("No WAV files found"));
    assert!(report.contains("No *.wav files could be found!"));
}

#[test]
fn test_missing_directory_fails() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("does-not-exist");

    let (result, report) = run(&missing, ScanOptions::default());

    assert!(!result.success);
    assert_eq!(result.total_files, 0);
    let error = result.error.expect("Missing error message");
    assert!(error.contains("does-not-exist"));
    assert!(report.is_empty());
}

#[test]
fn test_short_files_are_skipped() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("empty.wav"), b"").unwrap();
    fs::write(temp_dir.path().join("tiny.wav"), &wav_bytes(EXTENSIBLE)[..21]).unwrap();
    write_wav(temp_dir.path(), "real.wav", EXTENSIBLE);

    let (result, _) = run(temp_dir.path(), quiet(false));

    assert!(result.success);
    assert_eq!(result.total_files, 3);
    assert_eq!(result.extensible_files, 1);
    assert_eq!(result.short_files, 2);
    assert_eq!(result.failed_files, 0);
    assert_eq!(fs::read(temp_dir.path().join("tiny.wav")).unwrap().len(), 21);
    assert!(fs::read(temp_dir.path().join("empty.wav")).unwrap().is_empty());
}

#[test]
fn test_discovery_is_case_sensitive_and_sorted() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_wav(temp_dir.path(), "b.wav", PCM);
    write_wav(temp_dir.path(), "a.wav", PCM);
    write_wav(temp_dir.path(), "LOUD.WAV", EXTENSIBLE);
    write_wav(temp_dir.path(), "clip.wave", EXTENSIBLE);
    fs::create_dir(temp_dir.path().join("folder.wav")).unwrap();

    let files = find_wav_files(temp_dir.path());
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();

    assert_eq!(names, vec!["a.wav", "b.wav"]);
}

#[test]
fn test_verbose_report_lines() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let hit = write_wav(temp_dir.path(), "hit.wav", EXTENSIBLE);
    write_wav(temp_dir.path(), "miss.wav", PCM);

    let (_, report) = run(temp_dir.path(), ScanOptions::default());
    assert!(report.contains("DRY-RUN (scan only)"));
    assert!(report.contains("Total WAV files to scan: 2"));
    assert!(report.contains(&format!("[FOUND] {}", hit.display())));
    assert!(!report.contains("miss.wav"));

    let patch = ScanOptions {
        simulate: false,
        ..ScanOptions::default()
    };
    let (_, report) = run(temp_dir.path(), patch);
    assert!(report.contains("PATCH MODE"));
    assert!(report.contains(&format!("[PATCHED] {}", hit.display())));
}

#[test]
fn test_progress_every_hundred_files() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    for i in 0..250 {
        write_wav(temp_dir.path(), &format!("take_{:03}.wav", i), PCM);
    }

    let (result, report) = run(temp_dir.path(), ScanOptions::default());
    assert_eq!(result.total_files, 250);

    let progress: Vec<_> = report.lines().filter(|l| l.starts_with("Progress:")).collect();
    assert_eq!(
        progress,
        vec!["Progress: 40.0% (100/250)", "Progress: 80.0% (200/250)"]
    );

    let (_, quiet_report) = run(temp_dir.path(), quiet(true));
    assert!(quiet_report.is_empty());
}

#[test]
fn test_process_file_reports_missing_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let patcher = WavPatcher::new(quiet(true));

    match patcher.process_file(&temp_dir.path().join("gone.wav")) {
        FileOutcome::Failed(FileError::Io { path, source }) => {
            assert!(path.ends_with("gone.wav"));
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("Unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_permission_errors_are_classified() {
    let err = FileError::from_io(
        Path::new("locked.wav"),
        io::Error::from(io::ErrorKind::PermissionDenied),
    );
    assert!(matches!(err, FileError::PermissionDenied { .. }));
    assert_eq!(err.to_string(), "Permission denied: locked.wav");
    assert_eq!(err.path(), Path::new("locked.wav"));
}

#[test]
fn test_validate_directory() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file = write_wav(temp_dir.path(), "a.wav", PCM);

    assert!(validate_directory(temp_dir.path()).is_ok());
    assert!(matches!(
        validate_directory(&file),
        Err(ScanError::NotADirectory(_))
    ));
    assert!(matches!(
        validate_directory(&temp_dir.path().join("nope")),
        Err(ScanError::MissingDirectory(_))
    ));
}
