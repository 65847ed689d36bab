use crate::classify::ClassificationMode;
use crate::conf::ConfigError;
use crate::coverage::CutoffWindow;
use crate::operation::ExtractionMode;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CUTOFFS: &[u64] = &[5, 10, 20, 30, 60];

/// How one capture format is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatProfile {
    pub extraction: ExtractionMode,
    pub classification: ClassificationMode,
}

impl FormatProfile {
    /// CSV exports with per-row status codes.
    pub const fn rows() -> Self {
        Self {
            extraction: ExtractionMode::Scan,
            classification: ClassificationMode::StatusAware,
        }
    }

    /// Delimited message dumps without status codes.
    pub const fn blocks() -> Self {
        Self {
            extraction: ExtractionMode::Anchored,
            classification: ClassificationMode::BodyShape,
        }
    }
}

/// Resolved, validated analysis settings. Built once and passed by
/// reference into each pipeline call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisConfig {
    cutoffs: Vec<CutoffWindow>,
    pub rows: FormatProfile,
    pub blocks: FormatProfile,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            cutoffs: DEFAULT_CUTOFFS
                .iter()
                .copied()
                .map(CutoffWindow::from_secs)
                .collect(),
            rows: FormatProfile::rows(),
            blocks: FormatProfile::blocks(),
        }
    }
}

impl AnalysisConfig {
    pub fn cutoffs(&self) -> &[CutoffWindow] {
        &self.cutoffs
    }

    /// Replaces the cutoff windows. Values are sorted and de-duplicated.
    pub fn with_cutoffs(self, seconds: &[u64]) -> Result<Self, ConfigError> {
        Ok(Self {
            cutoffs: normalize_cutoffs(seconds)?,
            ..self
        })
    }
}

pub fn normalize_cutoffs(seconds: &[u64]) -> Result<Vec<CutoffWindow>, ConfigError> {
    if seconds.is_empty() {
        return Err(ConfigError::EmptyCutoffs);
    }
    if seconds.contains(&0) {
        return Err(ConfigError::ZeroCutoff);
    }

    let mut windows: Vec<_> = seconds.iter().copied().map(CutoffWindow::from_secs).collect();
    windows.sort();
    windows.dedup();
    Ok(windows)
}

//-----------------------------------------------------------------------------
// File representation: every field optional
//-----------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub cutoffs: Option<Vec<u64>>,
    pub rows: Option<ProfileSpec>,
    pub blocks: Option<ProfileSpec>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileSpec {
    pub extraction: Option<ExtractionMode>,
    pub classification: Option<ClassificationMode>,
}

impl ProfileSpec {
    pub fn over(&self, base: FormatProfile) -> FormatProfile {
        FormatProfile {
            extraction: self.extraction.unwrap_or(base.extraction),
            classification: self.classification.unwrap_or(base.classification),
        }
    }
}
