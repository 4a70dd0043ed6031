use crate::document::{LinkChange, standardize_document};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
    #[error("Path is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),
}

/// Whether [`standardize_file`] writes its result back to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Write,
    DryRun,
}

/// Outcome of standardizing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub relative_path: RelativePathBuf,
    pub changes: Vec<LinkChange>,
    /// The file on disk was rewritten.
    pub written: bool,
}

/// Read a markdown file and return its content
pub fn read_file(relative_path: &RelativePath, notes_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(notes_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a markdown file
pub fn write_file(
    relative_path: &RelativePath,
    notes_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(notes_root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for markdown files under the notes directory.
///
/// Paths are relative to `notes_root` and sorted.
pub fn scan_markdown_files(notes_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    if !notes_root.exists() {
        return Err(IoError::InvalidNotesDir(
            "notes directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(notes_root, &mut files)?;
    files.sort();

    files
        .into_iter()
        .map(|path| {
            let relative = path.strip_prefix(notes_root).unwrap_or(&path);
            RelativePathBuf::from_path(relative).map_err(|_| IoError::NonUtf8Path(path.clone()))
        })
        .collect()
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidNotesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

/// Standardize every link in one file.
///
/// The file is only rewritten when a link changed and `mode` is
/// [`WriteMode::Write`].
pub fn standardize_file(
    relative_path: &RelativePath,
    notes_root: &Path,
    mode: WriteMode,
) -> Result<FileReport, IoError> {
    let original = read_file(relative_path, notes_root)?;
    let doc = standardize_document(&original);

    let written = doc.is_changed() && mode == WriteMode::Write;
    if written {
        write_file(relative_path, notes_root, &doc.content)?;
        log::debug!(
            "rewrote {} link(s) in {relative_path}",
            doc.changes.len()
        );
    }

    Ok(FileReport {
        relative_path: relative_path.to_relative_path_buf(),
        changes: doc.changes,
        written,
    })
}
