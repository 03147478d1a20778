//! snexport command-line entry point.
//!
//! # Responsibility
//! - Parse and validate arguments, defaulting the destination to a
//!   `Notes` directory under the current working directory.
//! - Map core pipeline errors to a non-zero exit status.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

/// Export a Standard Notes JSON backup to plain markdown files.
#[derive(Debug, Parser)]
#[command(name = "snexport", version)]
struct Cli {
    /// Path to the Standard Notes backup file.
    backup_file: PathBuf,

    /// Destination directory. Must not exist yet.
    dest_dir: Option<PathBuf>,

    /// Log verbosity: trace|debug|info|warn|error.
    #[arg(long)]
    log_level: Option<String>,
}

/// Picks the explicit level when given, the build-mode default
/// otherwise. The borrow of `explicit` stays local here; the fn-item
/// form of `unwrap_or_else(default_log_level)` would force a `'static`
/// lifetime onto it.
fn resolve_log_level(explicit: Option<&str>) -> &str {
    explicit.unwrap_or_else(|| snexport_core::default_log_level())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = resolve_log_level(cli.log_level.as_deref());
    if let Err(err) = snexport_core::init_logging(level) {
        eprintln!("snexport: {err}");
        return ExitCode::FAILURE;
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        snexport_core::core_version()
    );

    let dest_dir = match cli.dest_dir {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(cwd) => cwd.join("Notes"),
            Err(err) => {
                eprintln!("snexport: cannot resolve current directory: {err}");
                return ExitCode::FAILURE;
            }
        },
    };

    match snexport_core::run(&cli.backup_file, &dest_dir) {
        Ok(count) => {
            println!("{count} notes have been successfully exported!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=export_failed module=cli status=error detail={err}");
            eprintln!("snexport: {err}");
            ExitCode::FAILURE
        }
    }
}
