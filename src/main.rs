/// WavPatcher CLI - Convert WAV_EXTENSIBLE headers to standard PCM format
///
/// The main entry point. It parses command-line arguments, validates the target
/// directory, runs the scan and prints the summary.

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use log::{error, LevelFilter};

use wav_patcher::utils::{file_utils, output_formatter};
use wav_patcher::{ScanOptions, WavPatcher};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "wavpatcher",
    version,
    about = "Scan and patch WAV files with WAV_EXTENSIBLE headers to standard PCM format.",
    after_help = "Example: wavpatcher /path/to/music --patch"
)]
struct Args {
    /// Directory containing WAV files to process (searches recursively)
    directory: PathBuf,

    /// Actually patch files (default is dry-run/scan only)
    #[arg(short = 'p', long = "patch", action = ArgAction::SetTrue)]
    patch: bool,

    /// Suppress detailed output, only show summary
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// List all files with extensible headers at the end
    #[arg(short = 'l', long = "list", action = ArgAction::SetTrue)]
    list: bool,

    /// Export the scan result to a JSON file
    #[arg(long = "json")]
    json: Option<PathBuf>,

    /// Set logging level (default: WARN)
    #[arg(long = "log-level", default_value = "warn")]
    log_level: LevelFilter,

    /// Write log records to this file instead of stderr
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = setup_logging(&args) {
        eprintln!("Warning: could not set up logging: {}", e);
    }

    if let Err(e) = file_utils::validate_directory(&args.directory) {
        error!("{}", e);
        eprintln!("{} {}", "Error:".red().bold(), e);
        return ExitCode::FAILURE;
    }

    let options = ScanOptions {
        simulate: !args.patch,
        verbose: !args.quiet,
        ..ScanOptions::default()
    };

    let result = {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        WavPatcher::new(options).run(&args.directory, &mut out)
    };

    if !result.success {
        let message = result.error.as_deref().unwrap_or("Unknown error");
        eprintln!("{} {}", "Error:".red().bold(), message);
        return ExitCode::FAILURE;
    }

    print!("{}", output_formatter::format_summary(&result, args.patch));

    if args.list {
        print!("{}", output_formatter::format_file_list(&result));
    }

    if let Some(json_path) = &args.json {
        if let Err(e) = output_formatter::export_results_json(&result, json_path) {
            error!("JSON export failed: {:#}", e);
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

/// Set up logging to stderr or to a log file
fn setup_logging(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(args.log_level);

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;

    Ok(())
}
