use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputPathError {
    #[error("input path does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("expected a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("expected a file: {}", path.display())]
    NotAFile { path: PathBuf },
}

pub fn require_file(path: &Path) -> Result<(), InputPathError> {
    if !path.exists() {
        Err(InputPathError::NotFound {
            path: path.to_path_buf(),
        })
    } else if !path.is_file() {
        Err(InputPathError::NotAFile {
            path: path.to_path_buf(),
        })
    } else {
        Ok(())
    }
}

pub fn require_dir(path: &Path) -> Result<(), InputPathError> {
    if !path.exists() {
        Err(InputPathError::NotFound {
            path: path.to_path_buf(),
        })
    } else if !path.is_dir() {
        Err(InputPathError::NotADirectory {
            path: path.to_path_buf(),
        })
    } else {
        Ok(())
    }
}

/// File name for report headings, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
