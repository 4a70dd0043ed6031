use anyhow::Result;
use link_standardizer_config::{Config, ExcludeSet};
use link_standardizer_engine::{WriteMode, io};
use std::{
    env,
    io::{Write, stdout},
    path::{Path, PathBuf},
    process,
};

#[derive(Debug, PartialEq)]
struct Args {
    notes_path: Option<PathBuf>,
    mode: WriteMode,
}

fn parse_args(args: &[String]) -> Option<Args> {
    let mut notes_path = None;
    let mut mode = WriteMode::Write;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--dry-run" | "-n" => mode = WriteMode::DryRun,
            flag if flag.starts_with('-') => return None,
            path if notes_path.is_none() => notes_path = Some(PathBuf::from(path)),
            _ => return None,
        }
    }

    Some(Args { notes_path, mode })
}

#[derive(Debug, Default, PartialEq)]
struct Summary {
    files_scanned: usize,
    files_skipped: usize,
    files_changed: usize,
    links_changed: usize,
}

/// Standardizes every markdown file under `notes_path`, reporting each
/// changed link to `out`.
fn run(
    notes_path: &Path,
    excludes: &ExcludeSet,
    mode: WriteMode,
    out: &mut impl Write,
) -> Result<Summary> {
    let mut summary = Summary::default();

    for relative_path in io::scan_markdown_files(notes_path)? {
        if excludes.is_excluded(relative_path.as_str()) {
            log::debug!("skipping excluded {relative_path}");
            summary.files_skipped += 1;
            continue;
        }
        summary.files_scanned += 1;

        let report = io::standardize_file(&relative_path, notes_path, mode)?;
        if report.changes.is_empty() {
            continue;
        }
        summary.files_changed += 1;
        summary.links_changed += report.changes.len();

        for change in &report.changes {
            writeln!(out, "{relative_path}: {} -> {}", change.before, change.after)?;
        }
    }

    Ok(summary)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let Some(parsed) = parse_args(&args) else {
        eprintln!("Usage: {} [--dry-run] [notes-folder-path]", args[0]);
        process::exit(1);
    };

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let from_config = parsed.notes_path.is_none();
    let notes_path = match (parsed.notes_path, &config) {
        (Some(path), _) => path,
        (None, Some(config)) => config.notes_path.clone(),
        (None, None) => {
            eprintln!("Error: No notes path provided and no config file found");
            eprintln!("Usage: {} [--dry-run] <notes-folder-path>", args[0]);
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_notes_dir(&notes_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Notes path '{}'{} is invalid: {e}",
            notes_path.display(),
            source
        );
        process::exit(1);
    }

    let excludes = match config.as_ref().map(Config::exclude_set).transpose() {
        Ok(excludes) => excludes.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let summary = run(&notes_path, &excludes, parsed.mode, &mut stdout().lock())?;

    let verb = match parsed.mode {
        WriteMode::Write => "changed",
        WriteMode::DryRun => "would change",
    };
    println!(
        "{} link(s) {verb} in {} of {} file(s) ({} excluded)",
        summary.links_changed, summary.files_changed, summary.files_scanned, summary.files_skipped
    );

    Ok(())
}
