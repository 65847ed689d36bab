use glob::{Pattern, glob};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Discovers files in `root` matching a glob pattern.
///
/// Returns the matching paths in sorted order. Unreadable entries are
/// silently skipped.
///
/// # Errors
///
/// Returns `DiscoverError::Glob` if the pattern is malformed.
pub fn discover(root: &Path, glob_pattern: &str) -> Result<Vec<PathBuf>, DiscoverError> {
    let pattern = &resolve_glob(root, glob_pattern);
    let mut paths: Vec<_> = glob(pattern)
        .map_err(|e| DiscoverError::Glob {
            pattern: pattern.to_string(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();

    paths.sort();
    Ok(paths)
}

/// Joins `pattern` onto `root`, escaping any glob metacharacters in `root`
/// itself.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    let root = Pattern::escape(&root.to_string_lossy());
    Path::new(&root).join(pattern).to_string_lossy().into_owned()
}
