use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("at least one cutoff window is required")]
    EmptyCutoffs,

    #[error("cutoff windows must be longer than zero seconds")]
    ZeroCutoff,
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ConfigError::Parse { .. } => Some(
                "Expected a file of the form:\n\
                 \n\
                 cutoffs = [5, 10, 20, 30, 60]\n\
                 \n\
                 [rows]\n\
                 extraction     = \"scan\"\n\
                 classification = \"status_aware\"\n\
                 \n\
                 [blocks]\n\
                 extraction     = \"anchored\"\n\
                 classification = \"body_shape\"",
            ),
            ConfigError::EmptyCutoffs | ConfigError::ZeroCutoff => {
                Some("Pass cutoffs in seconds, e.g. `--cutoff 5 --cutoff 60`.")
            }
            ConfigError::ReadFile { .. } => None,
        }
    }
}
