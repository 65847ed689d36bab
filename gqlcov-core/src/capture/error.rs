use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("failed to read capture {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write decoded capture {path}: {source}")]
    WriteCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl CaptureError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn write_csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::WriteCsv {
            path: path.into(),
            source,
        }
    }
}
