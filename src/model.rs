//! In-memory representation of coverage data, both the sparse form produced
//! by the Clover parser and the dense SimpleCov-style form the pipeline
//! merges and serializes.

use std::collections::BTreeMap;

/// A single instrumented line as recorded in the report.
#[derive(Debug, Clone)]
pub struct LineCoverage {
    pub line_number: u32,
    pub hit_count: u64,
}

/// Coverage data for a single source file: the `path` attribute of a
/// `<file>` element (verbatim) and its statement-line records in document
/// order. Line numbers need not be contiguous or sorted.
#[derive(Debug, Clone, Default)]
pub struct FileCoverage {
    pub path: String,
    pub lines: Vec<LineCoverage>,
}

impl FileCoverage {
    pub fn new(path: String) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }
}

/// The complete result of parsing a single coverage report.
#[derive(Debug, Clone, Default)]
pub struct CoverageData {
    pub files: Vec<FileCoverage>,
}

impl CoverageData {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hits for one line: `Some(count)` for an instrumented line (a count of 0
/// means "executable but never executed"), `None` for a line the coverage
/// tool does not consider executable. Serializes to a JSON number or null.
pub type LineHits = Option<u64>;

/// Dense per-line hits, index 0 corresponding to source line 1. The length
/// is the highest instrumented line number in the originating file.
pub type LineArray = Vec<LineHits>;

/// File path → dense line array. This is both the unit the converter emits
/// (one single-entry map per file) and the merged aggregate, and it is the
/// shape of the final JSON output.
pub type CoverageMap = BTreeMap<String, LineArray>;
