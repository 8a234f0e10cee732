use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::{error, info, warn};

const DEFAULT_FILES: [&str; 2] = ["hotbox", "hotbox-deploy"];

#[derive(Parser, Debug)]
#[command(
    name = "hotbox-deploy",
    version = env!("CARGO_PKG_VERSION"),
    about = "Copy packaged hotbox files to the studio pipeline location"
)]
struct Cli {
    /// Directory holding the packaged files.
    #[arg(
        short = 's',
        long = "source",
        value_name = "DIR",
        default_value = "target/release"
    )]
    source: PathBuf,

    /// Pipeline directory the files are installed into.
    #[arg(short = 'd', long = "dest", value_name = "DIR")]
    dest: PathBuf,

    /// Files to copy, relative to the source directory.
    #[arg(value_name = "FILE")]
    files: Vec<String>,
}

impl Cli {
    fn files(&self) -> Vec<String> {
        if self.files.is_empty() {
            DEFAULT_FILES.iter().map(|name| name.to_string()).collect()
        } else {
            self.files.clone()
        }
    }
}

#[derive(Debug, Error)]
enum DeployError {
    #[error("source directory does not exist: {0}")]
    MissingSource(PathBuf),
    #[error("destination directory does not exist: {0}")]
    MissingDest(PathBuf),
}

#[derive(Debug, Default)]
struct DeployReport {
    copied: usize,
    skipped: usize,
}

impl DeployReport {
    fn is_complete(&self) -> bool {
        self.skipped == 0
    }
}

/// Copy `files` from `source` into `dest`, backing up any file that would be
/// overwritten to `<name>.backup` alongside it.
///
/// Missing or uncopyable individual files are logged and counted as skipped
/// rather than aborting the run; missing directories are fatal.
fn deploy_files(source: &Path, dest: &Path, files: &[String]) -> Result<DeployReport, DeployError> {
    if !source.is_dir() {
        return Err(DeployError::MissingSource(source.to_path_buf()));
    }
    if !dest.is_dir() {
        return Err(DeployError::MissingDest(dest.to_path_buf()));
    }

    let mut report = DeployReport::default();
    for name in files {
        let source_file = source.join(name);
        let dest_file = dest.join(name);

        if !source_file.is_file() {
            warn!(path = %source_file.display(), "source file not found, skipping");
            report.skipped += 1;
            continue;
        }

        match copy_with_backup(&source_file, &dest_file) {
            Ok(backed_up) => {
                if backed_up {
                    info!(path = %dest_file.display(), "backed up existing file");
                }
                info!(file = %name, "copied");
                report.copied += 1;
            }
            Err(err) => {
                error!(file = %name, "copy failed: {err}");
                report.skipped += 1;
            }
        }
    }
    Ok(report)
}

/// Returns whether a backup of an existing destination file was made.
fn copy_with_backup(source_file: &Path, dest_file: &Path) -> io::Result<bool> {
    let mut backed_up = false;
    if dest_file.is_file() {
        let mut backup = dest_file.as_os_str().to_owned();
        backup.push(".backup");
        fs::copy(dest_file, PathBuf::from(backup))?;
        backed_up = true;
    }
    fs::copy(source_file, dest_file)?;
    Ok(backed_up)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .try_init();
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing();

    let files = args.files();
    match deploy_files(&args.source, &args.dest, &files) {
        Ok(report) if report.is_complete() => {
            info!(copied = report.copied, "all files copied");
            ExitCode::SUCCESS
        }
        Ok(report) => {
            error!(
                copied = report.copied,
                skipped = report.skipped,
                "some files were not copied"
            );
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn copies_files_and_reports_complete() {
        let source = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        write_file(source.path(), "menu.toml", "a");
        write_file(source.path(), "bindings.toml", "b");

        let files = vec!["menu.toml".to_string(), "bindings.toml".to_string()];
        let report = deploy_files(source.path(), dest.path(), &files).unwrap();

        assert_eq!(report.copied, 2);
        assert!(report.is_complete());
        assert_eq!(fs::read_to_string(dest.path().join("menu.toml")).unwrap(), "a");
    }

    #[test]
    fn backs_up_existing_destination_file() {
        let source = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        write_file(source.path(), "menu.toml", "new");
        write_file(dest.path(), "menu.toml", "old");

        let files = vec!["menu.toml".to_string()];
        let report = deploy_files(source.path(), dest.path(), &files).unwrap();

        assert_eq!(report.copied, 1);
        assert_eq!(
            fs::read_to_string(dest.path().join("menu.toml")).unwrap(),
            "new"
        );
        assert_eq!(
            fs::read_to_string(dest.path().join("menu.toml.backup")).unwrap(),
            "old"
        );
    }

    #[test]
    fn missing_source_file_is_skipped_not_fatal() {
        let source = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        write_file(source.path(), "menu.toml", "a");

        let files = vec!["menu.toml".to_string(), "missing.toml".to_string()];
        let report = deploy_files(source.path(), dest.path(), &files).unwrap();

        assert_eq!(report.copied, 1);
        assert_eq!(report.skipped, 1);
        assert!(!report.is_complete());
        assert!(!dest.path().join("missing.toml").exists());
    }

    #[test]
    fn missing_directories_are_fatal() {
        let dest = tempfile::tempdir().unwrap();
        let files = vec!["menu.toml".to_string()];
        let missing = Path::new("/nonexistent/source/dir");

        let err = deploy_files(missing, dest.path(), &files).unwrap_err();
        assert!(matches!(err, DeployError::MissingSource(_)));

        let source = tempfile::tempdir().unwrap();
        let err = deploy_files(source.path(), missing, &files).unwrap_err();
        assert!(matches!(err, DeployError::MissingDest(_)));
    }
}
