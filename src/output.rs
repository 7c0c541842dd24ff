//! Serialization of the merged coverage map to JSON.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::model::CoverageMap;

/// Render the map as pretty-printed JSON: an object of file path → array of
/// counts, with `null` for not-applicable lines and 2-space indentation.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write the map to `path` and hand the path back to the caller (CI
/// consumers want it echoed as an output).
pub fn write(map: &CoverageMap, path: &Path) -> Result<PathBuf> {
    let json = to_json(map)?;
    std::fs::write(path, json)?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let mut map = CoverageMap::new();
        map.insert("errors.ts".to_string(), vec![Some(1), None, None, Some(3)]);

        let json = to_json(&map).unwrap();
        assert_eq!(
            json,
            "{\n  \"errors.ts\": [\n    1,\n    null,\n    null,\n    3\n  ]\n}"
        );
    }

    #[test]
    fn test_write_reports_path_back() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("coverage.json");

        let mut map = CoverageMap::new();
        map.insert("a.ts".to_string(), vec![Some(0)]);

        let written = write(&map, &out).unwrap();
        assert_eq!(written, out);

        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text, "{\n  \"a.ts\": [\n    0\n  ]\n}");
    }
}
