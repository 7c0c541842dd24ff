//! Conversion from the parser's sparse line records into dense
//! SimpleCov-style line arrays.
//!
//! Clover only records lines it instrumented, so the dense array has to be
//! backfilled: index `i` holds line `i + 1`, lines without a record become
//! `None` ("not applicable"). A recorded count of 0 is a real value — the
//! line is executable, it just never ran — and must stay `Some(0)`.

use std::collections::HashMap;

use crate::model::{CoverageMap, FileCoverage, LineArray};

/// Build the dense line array for one file. Length is the highest line
/// number recorded; a file with no records yields an empty array. Duplicate
/// records for the same line number: last one in document order wins.
pub fn to_line_array(file: &FileCoverage) -> LineArray {
    let mut counts: HashMap<u32, u64> = HashMap::new();
    let mut last_line = 0u32;

    for line in &file.lines {
        if line.line_number > last_line {
            last_line = line.line_number;
        }
        counts.insert(line.line_number, line.hit_count);
    }

    (1..=last_line).map(|num| counts.get(&num).copied()).collect()
}

/// Convert parsed files into single-entry coverage maps, one per file in
/// input order, keyed by the file's `path` attribute.
pub fn to_file_maps<'a, I>(files: I) -> Vec<CoverageMap>
where
    I: IntoIterator<Item = &'a FileCoverage>,
{
    files
        .into_iter()
        .map(|file| {
            let mut map = CoverageMap::new();
            map.insert(file.path.clone(), to_line_array(file));
            map
        })
        .collect()
}
