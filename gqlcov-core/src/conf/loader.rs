use crate::conf::types::ConfigFile;
use crate::conf::{AnalysisConfig, ConfigError};
use std::fs;
use std::path::Path;

pub fn load_config(path: &Path) -> Result<AnalysisConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    parse_config(&text, path)
}

/// Parses TOML settings; fields left out keep their defaults.
pub fn parse_config(text: &str, origin: &Path) -> Result<AnalysisConfig, ConfigError> {
    let file: ConfigFile = toml::from_str(text).map_err(|e| ConfigError::parse(origin, e))?;

    let mut config = AnalysisConfig::default();
    if let Some(spec) = &file.rows {
        config.rows = spec.over(config.rows);
    }
    if let Some(spec) = &file.blocks {
        config.blocks = spec.over(config.blocks);
    }

    if let Some(cutoffs) = file.cutoffs {
        config = config.with_cutoffs(&cutoffs)?;
    }

    Ok(config)
}

/// Combines an optional config file with command-line cutoff overrides.
pub fn resolve_config(
    path: Option<&Path>,
    cutoff_overrides: &[u64],
) -> Result<AnalysisConfig, ConfigError> {
    let config = match path {
        Some(path) => load_config(path)?,
        None => AnalysisConfig::default(),
    };

    if cutoff_overrides.is_empty() {
        Ok(config)
    } else {
        config.with_cutoffs(cutoff_overrides)
    }
}
