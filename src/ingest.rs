//! Locating and reading coverage reports: glob expansion plus file-by-file
//! parsing. Everything downstream of here is pure and in-memory.

use std::path::PathBuf;

use crate::error::{CloverMergeError, Result};
use crate::model::CoverageData;
use crate::parsers::clover;

/// Expand a glob pattern into the list of matching report paths, in the
/// order the glob walker yields them. Zero matches is fatal — a CI job
/// pointing at the wrong directory should fail loudly, not write an empty
/// coverage file.
pub fn expand(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern)
        .map_err(|source| CloverMergeError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?
        .filter_map(|entry| entry.ok())
        .collect::<Vec<_>>();

    if paths.is_empty() {
        return Err(CloverMergeError::NoFilesMatched(pattern.to_string()));
    }

    Ok(paths)
}

/// Read and parse each report. Any I/O or XML failure aborts the whole
/// run — there is no partial-success mode.
pub fn read_reports(paths: &[PathBuf]) -> Result<Vec<CoverageData>> {
    paths
        .iter()
        .map(|path| {
            let content = std::fs::read(path)?;
            clover::parse(&content)
        })
        .collect()
}
