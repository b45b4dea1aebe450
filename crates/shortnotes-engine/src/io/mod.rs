use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of note files holding block markup.
pub const NOTE_EXTENSION: &str = "html";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
}

/// Read a note file and return its markup
pub fn read_note(relative_path: &RelativePath, notes_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(notes_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Scan for note files in the notes directory
pub fn scan_note_files(notes_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_notes_dir(notes_root)?;

    let mut files = Vec::new();
    let mut pending = vec![notes_root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir).map_err(IoError::Io)? {
            let path = entry.map_err(IoError::Io)?.path();

            if path.is_dir() {
                pending.push(path);
            } else if let Some(ext) = path.extension()
                && ext == NOTE_EXTENSION
            {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidNotesDir(format!(
            "notes directory not found: {}",
            path.display()
        )));
    }

    Ok(())
}
